//! Step-by-step filter pipeline with lossless undo
//!
//! The cursor walks a fixed stage order. Each forward step moves the current
//! combinations into the history stack before replacing them with the filtered
//! set, so stepping back restores a snapshot instead of recomputing.

/// Snapshot stack backing undo
pub mod history;
/// Pipeline state and its forward/backward transitions
pub mod sequencer;
/// Fixed stage order
pub mod stage;

pub use history::{HistoryEntry, HistoryStack};
pub use sequencer::{PipelineState, StepRecord};
pub use stage::Stage;
