//! Step progress bar tracking how many matches survive each stage

use crate::io::configuration::{PROGRESS_BAR_WIDTH, TOTAL_STEPS};
use crate::pipeline::sequencer::PipelineState;
use crate::pipeline::stage::Stage;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.yellow/white}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Text label for the step the cursor is on, e.g. `STEP 3 / 7`
pub fn step_label(stage: Stage) -> String {
    let step = (stage.index() + 1).min(TOTAL_STEPS);
    format!("STEP {step} / {TOTAL_STEPS}")
}

/// Text label for the surviving match count
pub fn matches_label(remaining: usize) -> String {
    format!("{remaining} MATCHES")
}

/// Single bar advancing one notch per pipeline stage
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a visible progress bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(TOTAL_STEPS as u64);
        bar.set_style(STEP_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reflect the state's stage and match count
    pub fn update(&self, state: &PipelineState) {
        let step = (state.stage().index() + 1).min(TOTAL_STEPS);
        self.bar.set_position(step as u64);
        self.bar.set_prefix(step_label(state.stage()));
        self.bar.set_message(matches_label(state.remaining()));
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}
