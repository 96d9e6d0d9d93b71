use crate::bitvec::OddBitArray;
use crate::chunks::ChunkedSieve;
use crate::count::count_primes;
use crate::eratosthenes::SieveOfEratosthenes;
use crate::error::SieveError;
use crate::util::{ceil_div_usize, isqrt, value_of};
use tracing::{event, instrument, Level};

/// Size of the full sieve in bytes. Covers the odd numbers below `2^31 + 3`.
pub const SIEVE_BYTES: usize = 128 * 1024 * 1024;

/// Size of the inner segment in bytes, also the chunk size. Sized to stay in L1 and to satisfy
/// `INNER_BYTES^2 >= SIEVE_BYTES / 2`.
pub const INNER_BYTES: usize = 8192;

/// Sizes of a sieve run, in flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SieveConfig {
    /// Flags in the whole array.
    pub len: usize,
    /// Flags in the inner segment, which is also the chunk length.
    pub inner_len: usize,
}

impl SieveConfig {
    pub const DEFAULT: Self = Self::from_bytes(SIEVE_BYTES, INNER_BYTES);

    #[must_use]
    pub const fn from_bytes(sieve_bytes: usize, inner_bytes: usize) -> Self {
        Self {
            len: sieve_bytes.saturating_mul(8),
            inner_len: inner_bytes.saturating_mul(8),
        }
    }

    /// Covers exactly the odd numbers in `[3, limit)`, with the smallest inner segment that still
    /// holds every prime needed.
    #[must_use]
    pub fn below(limit: usize) -> Self {
        let len = limit.saturating_sub(2) / 2;
        let upper_bound = value_of(len);
        // Smallest i with (2i+3)^2 >= upper_bound.
        let root = isqrt(upper_bound - 1);
        let inner_len = ceil_div_usize(root.saturating_sub(2), 2).max(1).min(len);
        Self { len, inner_len }
    }

    /// One past the largest odd number the array represents.
    #[must_use]
    pub fn upper_bound(&self) -> Option<usize> {
        self.len.checked_mul(2)?.checked_add(3)
    }

    /// Checks that the inner segment finds every prime the chunks need.
    pub fn validate(&self) -> Result<(), SieveError> {
        let upper_bound = self
            .upper_bound()
            .ok_or(SieveError::TooLarge { len: self.len })?;
        if self.len == 0 {
            return Ok(());
        }
        if self.inner_len == 0 {
            return Err(SieveError::EmptyInnerSegment);
        }
        if self.inner_len > self.len {
            return Err(SieveError::InnerExceedsTotal {
                inner: self.inner_len,
                total: self.len,
            });
        }

        // Any composite below the bound has a prime factor below the first value past the table.
        let next = value_of(self.inner_len);
        let covered = next.checked_mul(next).map_or(true, |square| square >= upper_bound);
        if !covered {
            return Err(SieveError::InnerTooSmall {
                inner: self.inner_len,
                largest: next - 2,
                upper_bound,
            });
        }
        Ok(())
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cache-aware odd-only sieve: a dense pass over the inner segment, then chunked propagation
/// over the rest.
#[derive(Copy, Clone, Debug)]
pub struct SegmentedSieve {
    config: SieveConfig,
}

impl SegmentedSieve {
    pub fn new(config: SieveConfig) -> Result<Self, SieveError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> SieveConfig {
        self.config
    }

    /// One past the largest number scanned.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        value_of(self.config.len)
    }

    /// Allocates a fresh array and sieves it.
    #[must_use]
    #[instrument(skip_all, fields(len = self.config.len, inner_len = self.config.inner_len))]
    pub fn run(&self) -> OddBitArray {
        let SieveConfig { len, inner_len } = self.config;
        let mut flags = OddBitArray::new(len);
        event!(Level::INFO, "Allocated {} bytes", flags.as_bytes().len());

        SieveOfEratosthenes::sieve_inner(&mut flags, inner_len);
        ChunkedSieve::sieve_chunks(&mut flags, inner_len);
        flags
    }

    /// Number of primes in `[2, upper_bound)`.
    #[must_use]
    pub fn count(&self) -> usize {
        let count = count_primes(&self.run());
        event!(Level::INFO, "{} primes below {}", count, self.upper_bound());
        count
    }
}

/// Number of primes in `[2, limit)`.
pub fn prime_count_below(limit: usize) -> Result<usize, SieveError> {
    if limit <= 2 {
        return Ok(0);
    }
    Ok(SegmentedSieve::new(SieveConfig::below(limit))?.count())
}
