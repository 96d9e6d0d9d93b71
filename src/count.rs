use crate::bitvec::OddBitArray;
use tracing::{event, Level};

/// Counts the primes below [`OddBitArray::upper_bound`] in a fully sieved array.
///
/// Every clear flag is an odd prime; the leading 1 accounts for 2, which has no flag.
#[must_use]
pub fn count_primes(flags: &OddBitArray) -> usize {
    let composites = flags.count_ones();
    event!(Level::DEBUG, "{} composites in {} flags", composites, flags.len());
    1 + flags.len() - composites
}
