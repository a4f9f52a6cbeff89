use crate::io::configuration::{COMBINATION_SIZE, ZONE_WIDTH};
use crate::io::error::{Result, invalid_argument};
use std::fmt;

/// Ordered batch of combinations; filters remove entries but never reorder them
pub type CombinationSet = Vec<Combination>;

/// Five distinct lottery numbers held in ascending order
///
/// The ordering is an invariant: consecutive-pair and zone statistics read
/// neighbouring values directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination([u8; COMBINATION_SIZE]);

impl Combination {
    /// Build a combination from arbitrary-order numbers
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any number is zero or two numbers repeat
    pub fn new(mut values: [u8; COMBINATION_SIZE]) -> Result<Self> {
        values.sort_unstable();

        if values.first() == Some(&0) {
            return Err(invalid_argument(
                "combination",
                &format!("{values:?}"),
                &"numbers start at 1",
            ));
        }
        if values.windows(2).any(|pair| matches!(pair, [a, b] if a == b)) {
            return Err(invalid_argument(
                "combination",
                &format!("{values:?}"),
                &"numbers must be distinct",
            ));
        }

        Ok(Self(values))
    }

    /// Wrap numbers already known to be sorted, distinct and non-zero
    pub(crate) const fn from_sorted(values: [u8; COMBINATION_SIZE]) -> Self {
        Self(values)
    }

    /// The numbers in ascending order
    pub const fn values(&self) -> &[u8; COMBINATION_SIZE] {
        &self.0
    }

    /// Largest number in the combination
    pub fn largest(&self) -> u8 {
        self.0.last().copied().unwrap_or_default()
    }

    /// Total of all five numbers
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }

    /// How many numbers are even
    pub fn even_count(&self) -> usize {
        self.0.iter().filter(|&&n| n % 2 == 0).count()
    }

    /// How many numbers are at or below `split`
    pub fn small_count(&self, split: u8) -> usize {
        self.0.iter().filter(|&&n| n <= split).count()
    }

    /// Adjacent pairs that differ by exactly one
    pub fn consecutive_pairs(&self) -> usize {
        self.0
            .windows(2)
            .filter(|pair| matches!(pair, [a, b] if b - a == 1))
            .count()
    }

    /// Distinct width-10 zones touched, with zone `k` covering `10k+1..=10k+10`
    pub fn zones_touched(&self) -> usize {
        let mask = self
            .0
            .iter()
            .fold(0_u32, |mask, &n| mask | (1 << ((n - 1) / ZONE_WIDTH)));
        mask.count_ones() as usize
    }

    /// Occurrences of each last decimal digit, indexed by digit
    pub fn tail_counts(&self) -> [u8; 10] {
        let mut counts = [0_u8; 10];
        for &n in &self.0 {
            if let Some(count) = counts.get_mut(usize::from(n % 10)) {
                *count += 1;
            }
        }
        counts
    }
}

impl TryFrom<&[u8]> for Combination {
    type Error = crate::io::error::LottoError;

    fn try_from(values: &[u8]) -> Result<Self> {
        let array = <[u8; COMBINATION_SIZE]>::try_from(values).map_err(|_length_mismatch| {
            invalid_argument(
                "combination",
                &format!("{values:?}"),
                &format!("expected exactly {COMBINATION_SIZE} numbers"),
            )
        })?;
        Self::new(array)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{n:02}")?;
            first = false;
        }
        Ok(())
    }
}
