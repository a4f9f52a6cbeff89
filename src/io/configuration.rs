//! Game constants, batch limits and the preset filter choices offered to users

use crate::filters::params::Bounds;

/// Numbers drawn per combination
pub const COMBINATION_SIZE: usize = 5;

/// Width of each contiguous zone used by the spread filter
pub const ZONE_WIDTH: u8 = 10;

/// Smallest batch the generator accepts
pub const MIN_COUNT: usize = 1;

// Keeps every filter pass well under a millisecond
/// Largest batch the generator accepts
pub const MAX_COUNT: usize = 500;

/// Batch size used when none is given
pub const DEFAULT_COUNT: usize = 10;

/// Batch sizes offered by the interactive count menu
pub const COUNT_PRESETS: [usize; 5] = [10, 20, 30, 40, 50];

/// Steps shown in the progress display (generation plus six filters)
pub const TOTAL_STEPS: usize = 7;

/// Width of the step progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Labelled range offered as a one-keystroke choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangePreset {
    /// Menu label
    pub label: &'static str,
    /// Inclusive range applied when chosen
    pub bounds: Bounds,
}

/// Default inclusive range for the sum filter
pub const DEFAULT_SUM_RANGE: Bounds = Bounds::new(130, 220);

/// Default inclusive range for distinct zones touched
pub const DEFAULT_ZONE_RANGE: Bounds = Bounds::new(2, 4);

/// Sum ranges offered by the interactive sum menu
pub const SUM_PRESETS: [RangePreset; 3] = [
    RangePreset {
        label: "Standard",
        bounds: DEFAULT_SUM_RANGE,
    },
    RangePreset {
        label: "Tight",
        bounds: Bounds::new(135, 215),
    },
    RangePreset {
        label: "Extreme",
        bounds: Bounds::new(140, 210),
    },
];

/// Zone-count ranges offered by the interactive zone menu
pub const ZONE_PRESETS: [RangePreset; 2] = [
    RangePreset {
        label: "Optimal",
        bounds: DEFAULT_ZONE_RANGE,
    },
    RangePreset {
        label: "High Spread",
        bounds: Bounds::new(3, 5),
    },
];
