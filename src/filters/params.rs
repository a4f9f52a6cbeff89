//! Filter parameters and the tagged filter applied at each pipeline stage

use crate::draw::combination::{Combination, CombinationSet};
use crate::filters::predicates::{
    filter_by_consecutive, filter_by_even_odd, filter_by_magnitude, filter_by_sum,
    filter_by_tail, filter_by_zones, keeps_consecutive, keeps_even_odd, keeps_magnitude,
    keeps_sum, keeps_tail, keeps_zones,
};
use crate::io::error::{LottoError, Result, invalid_argument};
use crate::pipeline::stage::Stage;
use std::fmt;
use std::str::FromStr;

/// Inclusive `min..=max` range
///
/// An inverted range (`min > max`) is valid and contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Lowest accepted value
    pub min: u32,
    /// Highest accepted value
    pub max: u32,
}

impl Bounds {
    /// Create an inclusive range
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Test whether `value` lies within the range
    pub const fn contains(self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether the range can never match
    pub const fn is_inverted(self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for Bounds {
    type Err = LottoError;

    /// Parse `min-max`, `min..max` or `min..=max`, all inclusive
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (low, high) = trimmed
            .split_once("..=")
            .or_else(|| trimmed.split_once(".."))
            .or_else(|| trimmed.split_once('-'))
            .ok_or_else(|| invalid_argument("range", &text, &"expected MIN-MAX"))?;

        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|error| {
                invalid_argument("range", &text, &format!("'{}': {error}", part.trim()))
            })
        };
        Ok(Self::new(parse(low)?, parse(high)?))
    }
}

/// Policy for the two ratio filters (even/odd and small/big)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BalanceMode {
    /// Reject 5:0 and 0:5 splits
    #[default]
    ExcludeSkewed,
    /// Keep only 2:3 and 3:2 splits
    OnlyBalanced,
}

impl BalanceMode {
    /// Whether a combination with `count` members on one side passes
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::ExcludeSkewed => count != 0 && count != 5,
            Self::OnlyBalanced => count == 2 || count == 3,
        }
    }
}

impl fmt::Display for BalanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExcludeSkewed => "exclude-skewed",
            Self::OnlyBalanced => "only-balanced",
        })
    }
}

/// Policy for the two pair-counting filters (consecutive and tail digit)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PairMode {
    /// At most one pair
    #[default]
    AllowOnePair,
    /// No pairs at all
    #[value(name = "none")]
    NoPairs,
}

impl PairMode {
    /// Whether a combination containing `pairs` pairs passes
    pub const fn accepts(self, pairs: usize) -> bool {
        match self {
            Self::AllowOnePair => pairs <= 1,
            Self::NoPairs => pairs == 0,
        }
    }
}

impl fmt::Display for PairMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AllowOnePair => "allow-one-pair",
            Self::NoPairs => "none",
        })
    }
}

/// One filter together with its parameters
///
/// Each variant belongs to exactly one pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Keep combinations whose sum lies in range
    Sum(Bounds),
    /// Keep combinations whose even count passes the mode
    EvenOdd(BalanceMode),
    /// Keep combinations whose small count passes the mode
    Magnitude {
        /// Ratio policy
        mode: BalanceMode,
        /// Largest number counted as small
        split: u8,
    },
    /// Limit adjacent numbers differing by one
    Consecutive(PairMode),
    /// Keep combinations whose distinct zone count lies in range
    Zones(Bounds),
    /// Limit numbers sharing a last digit
    Tail(PairMode),
}

impl Filter {
    /// Stage this filter is applied at
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Sum(_) => Stage::Sum,
            Self::EvenOdd(_) => Stage::EvenOdd,
            Self::Magnitude { .. } => Stage::Size,
            Self::Consecutive(_) => Stage::Consecutive,
            Self::Zones(_) => Stage::Zones,
            Self::Tail(_) => Stage::Tail,
        }
    }

    /// Test a single combination against the keep rule
    pub fn keeps(&self, combination: &Combination) -> bool {
        match *self {
            Self::Sum(bounds) => keeps_sum(combination, bounds),
            Self::EvenOdd(mode) => keeps_even_odd(combination, mode),
            Self::Magnitude { mode, split } => keeps_magnitude(combination, mode, split),
            Self::Consecutive(mode) => keeps_consecutive(combination, mode),
            Self::Zones(bounds) => keeps_zones(combination, bounds),
            Self::Tail(mode) => keeps_tail(combination, mode),
        }
    }

    /// Return the combinations that pass, in their original order
    pub fn apply(&self, combinations: &[Combination]) -> CombinationSet {
        match *self {
            Self::Sum(bounds) => filter_by_sum(combinations, bounds),
            Self::EvenOdd(mode) => filter_by_even_odd(combinations, mode),
            Self::Magnitude { mode, split } => filter_by_magnitude(combinations, mode, split),
            Self::Consecutive(mode) => filter_by_consecutive(combinations, mode),
            Self::Zones(bounds) => filter_by_zones(combinations, bounds),
            Self::Tail(mode) => filter_by_tail(combinations, mode),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum(bounds) => write!(f, "sum {bounds}"),
            Self::EvenOdd(mode) => write!(f, "even/odd {mode}"),
            Self::Magnitude { mode, split } => write!(f, "small/big {mode} (small <= {split})"),
            Self::Consecutive(mode) => write!(f, "consecutive {mode}"),
            Self::Zones(bounds) => write!(f, "zones {bounds}"),
            Self::Tail(mode) => write!(f, "tail {mode}"),
        }
    }
}
