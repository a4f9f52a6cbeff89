use std::fmt;

/// Position of the pipeline cursor
///
/// Stages run in declaration order: generation, the six filters, then results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Stage {
    /// Choosing how many combinations to generate
    #[value(skip)]
    Count,
    /// Sum-range filter
    Sum,
    /// Even/odd balance filter
    EvenOdd,
    /// Small/big magnitude balance filter
    Size,
    /// Consecutive-neighbor limit
    Consecutive,
    /// Zone spread filter
    Zones,
    /// Tail-digit collision filter
    Tail,
    /// All stages done; only the surviving combinations remain
    #[value(skip)]
    Result,
}

impl Stage {
    /// Filter stages in application order
    pub const FILTERS: [Self; 6] = [
        Self::Sum,
        Self::EvenOdd,
        Self::Size,
        Self::Consecutive,
        Self::Zones,
        Self::Tail,
    ];

    /// Zero-based step number, generation being step 0
    pub const fn index(self) -> usize {
        match self {
            Self::Count => 0,
            Self::Sum => 1,
            Self::EvenOdd => 2,
            Self::Size => 3,
            Self::Consecutive => 4,
            Self::Zones => 5,
            Self::Tail => 6,
            Self::Result => 7,
        }
    }

    /// Stage that follows this one, `None` after results
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Count => Some(Self::Sum),
            Self::Sum => Some(Self::EvenOdd),
            Self::EvenOdd => Some(Self::Size),
            Self::Size => Some(Self::Consecutive),
            Self::Consecutive => Some(Self::Zones),
            Self::Zones => Some(Self::Tail),
            Self::Tail => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Whether this stage applies a filter
    pub const fn is_filter(self) -> bool {
        !matches!(self, Self::Count | Self::Result)
    }

    /// Heading shown for the stage
    pub const fn title(self) -> &'static str {
        match self {
            Self::Count => "Select Count",
            Self::Sum => "Sum Filtering",
            Self::EvenOdd => "Even / Odd Ratio",
            Self::Size => "Small / Big Ratio",
            Self::Consecutive => "Consecutive Numbers",
            Self::Zones => "Zone Spread",
            Self::Tail => "Tail Digits",
            Self::Result => "Generated Lists",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::EvenOdd => "even-odd",
            Self::Size => "size",
            Self::Consecutive => "consecutive",
            Self::Zones => "zones",
            Self::Tail => "tail",
            Self::Result => "result",
        };
        f.write_str(name)
    }
}
