use num_integer::Roots;

/// Computes `ceil(a / b)`. Assumes `a + b` does not overflow.
#[must_use]
pub const fn ceil_div_usize(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// The odd number represented by flag `i`.
#[must_use]
#[inline]
pub const fn value_of(i: usize) -> usize {
    2 * i + 3
}

/// The flag index representing the odd number `v`. Requires `v >= 3` and odd.
#[must_use]
#[inline]
pub const fn index_of(v: usize) -> usize {
    (v - 3) / 2
}

/// Floor of the square root of `n`.
#[must_use]
pub(crate) fn isqrt(n: usize) -> usize {
    n.sqrt()
}

#[cfg(test)]
mod tests {
    use crate::util::{ceil_div_usize, index_of, isqrt, value_of};

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div_usize(0, 8), 0);
        assert_eq!(ceil_div_usize(1, 8), 1);
        assert_eq!(ceil_div_usize(8, 8), 1);
        assert_eq!(ceil_div_usize(9, 8), 2);
    }

    #[test]
    fn test_index_value() {
        assert_eq!(value_of(0), 3);
        assert_eq!(value_of(1), 5);
        assert_eq!(index_of(9), 3);
        for i in 0..100 {
            assert_eq!(index_of(value_of(i)), i);
        }
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(1 << 40), 1 << 20);
    }
}
