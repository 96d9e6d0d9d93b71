use crate::bitvec::OddBitArray;
use crate::util::{ceil_div_usize, index_of, value_of};
use alloc::vec::Vec;
use tracing::{event, instrument, Level};

/// The dense, in-cache sieve over the leading segment of an [`OddBitArray`].
pub struct SieveOfEratosthenes;

impl SieveOfEratosthenes {
    /// Marks odd composites among the first `inner_len` flags.
    ///
    /// Afterwards every clear flag below `inner_len` is prime, so the segment doubles as the prime
    /// table for [`crate::ChunkedSieve`].
    #[instrument(skip(flags))]
    pub fn sieve_inner(flags: &mut OddBitArray, inner_len: usize) {
        assert!(inner_len <= flags.len());

        // (2i+3)^2 > 2*inner_len+3 is the real stopping point; i^2 > 4*bytes overshoots it.
        let bound = 4 * ceil_div_usize(inner_len, 8);
        let mut i = 0;
        while i < inner_len && i * i <= bound {
            if !flags.get(i) {
                let p = value_of(i);
                // Odd multiples 3p, 5p, ... sit exactly p flags apart.
                for j in (index_of(3 * p)..inner_len).step_by(p) {
                    flags.set_one(j);
                }
            }
            i += 1;
        }
    }

    /// The primes held in the first `len` flags of a sieved array, excluding 2.
    #[must_use]
    pub fn primes(flags: &OddBitArray, len: usize) -> Vec<usize> {
        let primes: Vec<usize> = (0..len)
            .filter(|&i| !flags.get(i))
            .map(value_of)
            .collect();
        event!(Level::DEBUG, "{} odd primes below {}", primes.len(), value_of(len));
        primes
    }
}
