use num_integer::Integer;

/// The trial division method for primality testing.
pub struct TrialDivision;

impl TrialDivision {
    #[must_use]
    pub fn is_prime(n: usize) -> bool {
        if n < 2 {
            return false;
        }

        let mut divisor = 2;
        while divisor * divisor <= n {
            if Integer::is_multiple_of(&n, &divisor) {
                return false;
            }
            divisor += 1;
        }
        true
    }

    /// Counts primes in `[2, limit)` by testing each candidate.
    #[must_use]
    pub fn count_below(limit: usize) -> usize {
        (0..limit).filter(|&n| Self::is_prime(n)).count()
    }
}
