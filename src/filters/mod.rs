//! Statistical filters narrowing a batch of combinations

/// Filter parameters and the stage-tagged filter type
pub mod params;
/// Keep rules and order-preserving batch filters
pub mod predicates;
/// Per-stage filter plans
pub mod settings;

pub use params::{BalanceMode, Bounds, Filter, PairMode};
pub use settings::FilterSettings;
