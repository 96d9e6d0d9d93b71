use crate::bitvec::OddBitArray;
use crate::eratosthenes::SieveOfEratosthenes;
use crate::util::{index_of, value_of};
use num_integer::Integer;
use tracing::{event, instrument, Level};

/// Propagates the primes of an already sieved leading segment across the rest of the array, one
/// chunk at a time.
///
/// Each chunk recomputes where every prime's first multiple inside it lies instead of carrying
/// offsets over from the previous chunk, so the working set is the chunk plus the prime table.
pub struct ChunkedSieve;

impl ChunkedSieve {
    /// Sieves chunks `1, 2, ...` of `chunk_len` flags each, using the primes found in chunk 0.
    ///
    /// Chunk 0, the first `chunk_len` flags, must already be sieved and must hold every prime up
    /// to the square root of [`OddBitArray::upper_bound`]. The last chunk may be partial.
    #[instrument(skip(flags))]
    pub fn sieve_chunks(flags: &mut OddBitArray, chunk_len: usize) {
        assert!(chunk_len <= flags.len());
        assert!(chunk_len > 0 || flags.is_empty());

        let len = flags.len();
        let primes = SieveOfEratosthenes::primes(flags, chunk_len);

        let mut chunk = 1;
        while chunk * chunk_len < len {
            let start = chunk * chunk_len;
            let end = ((chunk + 1) * chunk_len).min(len);
            for &p in &primes {
                Self::mark_multiples(flags, p, start, end);
            }
            event!(Level::DEBUG, "Sieved chunk {} [{}, {})", chunk, start, end);
            chunk += 1;
        }
        event!(Level::INFO, "Propagated {} primes over {} chunks", primes.len(), chunk - 1);
    }

    /// Marks the odd multiples of `p` whose flags fall in `[start, end)`.
    fn mark_multiples(flags: &mut OddBitArray, p: usize, start: usize, end: usize) {
        // Largest odd multiplier not past the chunk's first value.
        let mut n = value_of(start) / p;
        if n.is_even() {
            n -= 1;
        }

        // The estimate can sit one multiple below the chunk.
        let mut j = index_of(p * n);
        while j < start {
            j += p;
        }
        for j in (j..end).step_by(p) {
            flags.set_one(j);
        }
    }
}
