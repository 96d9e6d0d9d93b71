use crate::util::{ceil_div_usize, index_of, value_of};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

const WORD_BYTES: usize = 8;

/// Compact composite flags over the odd numbers `3, 5, 7, ...`.
///
/// Flag `i` stands for the odd number `2i + 3`. A clear flag means "assumed prime", a set flag
/// means "known composite". Flags are packed eight to a byte, bit 0 being the least significant.
/// The backing buffer is padded to a whole number of 64-bit words; padding bits are never set.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct OddBitArray {
    bytes: Vec<u8>,
    len: usize,
}

impl OddBitArray {
    /// A zero-filled array of `len` flags.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let words = ceil_div_usize(len, 8 * WORD_BYTES);
        let bytes = vec![0; words * WORD_BYTES];
        Self { bytes, len }
    }

    /// A zero-filled array spanning `num_bytes` bytes of flags.
    #[must_use]
    pub fn with_bytes(num_bytes: usize) -> Self {
        Self::new(num_bytes * 8)
    }

    #[must_use]
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        assert!(bit < self.len, "flag {} out of range {}", bit, self.len);
        self.bytes[bit / 8] & (1 << (bit % 8)) != 0
    }

    /// Marks `bit` as composite.
    #[inline]
    pub fn set_one(&mut self, bit: usize) {
        assert!(bit < self.len, "flag {} out of range {}", bit, self.len);
        self.bytes[bit / 8] |= 1 << (bit % 8);
    }

    #[inline]
    pub fn set_zero(&mut self, bit: usize) {
        assert!(bit < self.len, "flag {} out of range {}", bit, self.len);
        self.bytes[bit / 8] &= !(1 << (bit % 8));
    }

    /// Number of set flags, tallied one 64-bit word at a time.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes
            .chunks_exact(WORD_BYTES)
            .map(|word| {
                let word: [u8; WORD_BYTES] = word.try_into().unwrap();
                u64::from_le_bytes(word).count_ones() as usize
            })
            .sum()
    }

    #[must_use]
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing bytes, including word padding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The odd number represented by flag `i`.
    #[must_use]
    #[inline]
    pub const fn value_of(i: usize) -> usize {
        value_of(i)
    }

    /// The flag representing the odd number `v >= 3`.
    #[must_use]
    #[inline]
    pub const fn index_of(v: usize) -> usize {
        index_of(v)
    }

    /// One past the largest odd number represented, i.e. `2 * len + 3`.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        value_of(self.len)
    }
}

impl Debug for OddBitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for i in 0..self.len {
            write!(f, "{}", self.get(i) as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bitvec::OddBitArray;
    use alloc::format;

    #[test]
    fn test_get_set() {
        let mut flags = OddBitArray::new(20);
        assert!(!flags.get(3));
        flags.set_one(3);
        flags.set_one(17);
        assert!(flags.get(3));
        assert!(flags.get(17));
        assert!(!flags.get(4));
        flags.set_zero(3);
        assert!(!flags.get(3));
        assert!(flags.get(17));
    }

    #[test]
    fn test_bit_order() {
        let mut flags = OddBitArray::with_bytes(2);
        flags.set_one(0);
        flags.set_one(9);
        assert_eq!(&flags.as_bytes()[..2], &[0b0000_0001, 0b0000_0010]);
    }

    #[test]
    fn test_word_padding() {
        assert_eq!(OddBitArray::new(0).as_bytes().len(), 0);
        assert_eq!(OddBitArray::new(1).as_bytes().len(), 8);
        assert_eq!(OddBitArray::new(64).as_bytes().len(), 8);
        assert_eq!(OddBitArray::new(65).as_bytes().len(), 16);
        assert_eq!(OddBitArray::with_bytes(3).len(), 24);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        let mut flags = OddBitArray::new(10);
        flags.set_one(10);
    }

    #[test]
    fn test_count() {
        let mut flags = OddBitArray::new(100);
        for bit in [0, 7, 8, 63, 64, 99] {
            flags.set_one(bit);
        }
        assert_eq!(flags.count_ones(), 6);
        assert_eq!(flags.count_zeros(), 94);
    }

    #[test]
    fn test_debug() {
        let mut flags = OddBitArray::new(5);
        flags.set_one(1);
        flags.set_one(4);
        assert_eq!(format!("{:?}", flags), "01001");
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(OddBitArray::new(4).upper_bound(), 11);
        assert_eq!(OddBitArray::with_bytes(1).upper_bound(), 19);
    }
}
