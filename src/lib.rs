//! Random lottery combination generation narrowed by a reversible filter pipeline
//!
//! A batch of sorted, duplicate-free five-number combinations is drawn from an
//! injected random source, then passed through six independent statistical
//! filters in a fixed stage order. Every forward step snapshots the combinations
//! it replaces, so any number of steps can be undone without recomputation.

#![forbid(unsafe_code)]

/// Combination model and random batch generation
pub mod draw;
/// Statistical keep rules and filter parameters
pub mod filters;
/// Command line, interactive session, reporting and error handling
pub mod io;
/// Stage sequencing and undo history
pub mod pipeline;

pub use io::error::{LottoError, Result};
