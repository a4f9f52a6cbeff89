use crate::io::configuration::ZONE_WIDTH;
use std::fmt;

/// Lottery game determining the white-ball number range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Game {
    /// White balls drawn from 1 to 69
    #[default]
    Powerball,
    /// White balls drawn from 1 to 70
    MegaMillions,
}

impl Game {
    /// Largest number that can be drawn
    pub const fn max_number(self) -> u8 {
        match self {
            Self::Powerball => 69,
            Self::MegaMillions => 70,
        }
    }

    /// Largest number still counted as "small" by the magnitude filter
    ///
    /// Splits the range in half: 1-34 / 35-69 for Powerball, 1-35 / 36-70 for Mega Millions
    pub const fn small_split(self) -> u8 {
        self.max_number() / 2
    }

    /// Number of width-10 zones covering the range
    pub const fn zone_count(self) -> u8 {
        self.max_number().div_ceil(ZONE_WIDTH)
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Powerball => "Powerball",
            Self::MegaMillions => "Mega Millions",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
