use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    #[error("Inner segment is empty")]
    EmptyInnerSegment,
    #[error("Inner segment of {inner} flags exceeds sieve of {total} flags")]
    InnerExceedsTotal { inner: usize, total: usize },
    #[error("Inner segment of {inner} flags only reaches {largest}, below sqrt of {upper_bound}")]
    InnerTooSmall {
        inner: usize,
        largest: usize,
        upper_bound: usize,
    },
    #[error("Sieve of {len} flags overflows the addressable range")]
    TooLarge { len: usize },
}
