//! Per-stage filter plan used to drive a batch through every stage at once

use crate::draw::game::Game;
use crate::filters::params::{BalanceMode, Filter, PairMode};
use crate::io::configuration::{DEFAULT_SUM_RANGE, DEFAULT_ZONE_RANGE};
use crate::pipeline::stage::Stage;

/// Filter chosen for each stage, `None` meaning the stage is skipped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSettings {
    /// Sum-range filter
    pub sum: Option<Filter>,
    /// Even/odd balance filter
    pub even_odd: Option<Filter>,
    /// Small/big balance filter
    pub size: Option<Filter>,
    /// Consecutive-neighbor limit
    pub consecutive: Option<Filter>,
    /// Zone spread filter
    pub zones: Option<Filter>,
    /// Tail-digit collision filter
    pub tail: Option<Filter>,
}

impl FilterSettings {
    /// Standard settings for `game`
    ///
    /// Sum 130-220, both ratios exclude-skewed, at most one consecutive pair,
    /// 2-4 zones and at most one tail pair.
    pub const fn for_game(game: Game) -> Self {
        Self {
            sum: Some(Filter::Sum(DEFAULT_SUM_RANGE)),
            even_odd: Some(Filter::EvenOdd(BalanceMode::ExcludeSkewed)),
            size: Some(Filter::Magnitude {
                mode: BalanceMode::ExcludeSkewed,
                split: game.small_split(),
            }),
            consecutive: Some(Filter::Consecutive(PairMode::AllowOnePair)),
            zones: Some(Filter::Zones(DEFAULT_ZONE_RANGE)),
            tail: Some(Filter::Tail(PairMode::AllowOnePair)),
        }
    }

    /// Settings that skip every stage
    pub const fn skip_all() -> Self {
        Self {
            sum: None,
            even_odd: None,
            size: None,
            consecutive: None,
            zones: None,
            tail: None,
        }
    }

    /// Filter planned for `stage`
    pub const fn filter_for(&self, stage: Stage) -> Option<Filter> {
        match stage {
            Stage::Sum => self.sum,
            Stage::EvenOdd => self.even_odd,
            Stage::Size => self.size,
            Stage::Consecutive => self.consecutive,
            Stage::Zones => self.zones,
            Stage::Tail => self.tail,
            Stage::Count | Stage::Result => None,
        }
    }

    /// Replace the plan for a filter's stage
    pub const fn set(&mut self, filter: Filter) {
        match filter {
            Filter::Sum(_) => self.sum = Some(filter),
            Filter::EvenOdd(_) => self.even_odd = Some(filter),
            Filter::Magnitude { .. } => self.size = Some(filter),
            Filter::Consecutive(_) => self.consecutive = Some(filter),
            Filter::Zones(_) => self.zones = Some(filter),
            Filter::Tail(_) => self.tail = Some(filter),
        }
    }

    /// Mark `stage` as skipped
    pub const fn skip(&mut self, stage: Stage) {
        match stage {
            Stage::Sum => self.sum = None,
            Stage::EvenOdd => self.even_odd = None,
            Stage::Size => self.size = None,
            Stage::Consecutive => self.consecutive = None,
            Stage::Zones => self.zones = None,
            Stage::Tail => self.tail = None,
            Stage::Count | Stage::Result => {}
        }
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self::for_game(Game::default())
    }
}
