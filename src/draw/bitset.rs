use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which numbers have been drawn
///
/// Uses 1-based indexing to match lottery numbers.
/// Iteration yields members in ascending order, so a full draw comes out sorted.
#[derive(Clone, Debug)]
pub struct NumberBitset {
    bits: BitVec,
    max_number: u8,
}

impl NumberBitset {
    /// Create a bitset with no numbers present
    pub fn new(max_number: u8) -> Self {
        Self {
            bits: bitvec![0; usize::from(max_number)],
            max_number,
        }
    }

    /// Insert a number, reporting whether it was newly added
    ///
    /// Numbers outside `1..=max_number` are ignored and report `false`
    pub fn insert(&mut self, number: u8) -> bool {
        if number == 0 || number > self.max_number || self.contains(number) {
            return false;
        }
        self.bits.set(usize::from(number - 1), true);
        true
    }

    /// Test number membership
    pub fn contains(&self, number: u8) -> bool {
        if number > 0 {
            self.bits.get(usize::from(number - 1)).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Remove every number
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no numbers are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count numbers in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        // Bit positions are below max_number, which itself fits in u8
        self.bits.iter_ones().map(|index| index as u8 + 1)
    }

    /// Extract all numbers as a vector in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl fmt::Display for NumberBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberBitset({} numbers: {:?})", self.count(), self.to_vec())
    }
}
