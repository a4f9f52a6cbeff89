use crate::draw::combination::CombinationSet;
use crate::pipeline::stage::Stage;

/// Snapshot taken immediately before a stage's filter was applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Stage the cursor was on
    pub stage: Stage,
    /// Combinations alive before the filter ran
    pub combinations: CombinationSet,
}

/// Last-in first-out store of pre-step snapshots
///
/// Popping discards the entry for good; there is no redo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record the state about to be replaced
    pub fn push(&mut self, stage: Stage, combinations: CombinationSet) {
        self.entries.push(HistoryEntry {
            stage,
            combinations,
        });
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Most recent snapshot without removing it
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of steps that can be undone
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to undo
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
