//! Combination model and random batch generation
//!
//! This module contains:
//! - The lottery games and their number ranges
//! - The sorted, duplicate-free combination type
//! - Seeded batch generation by rejection sampling

/// Fixed-size membership set over drawn numbers
pub mod bitset;
/// Sorted five-number combinations and their derived statistics
pub mod combination;
/// Supported lottery games
pub mod game;
/// Random batch generation with injected randomness
pub mod generator;

pub use combination::{Combination, CombinationSet};
pub use game::Game;
pub use generator::{Generator, generate};
