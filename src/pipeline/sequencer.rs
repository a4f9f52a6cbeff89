use crate::draw::combination::{Combination, CombinationSet};
use crate::draw::game::Game;
use crate::draw::generator::generate;
use crate::filters::params::Filter;
use crate::filters::settings::FilterSettings;
use crate::io::error::{LottoError, Result};
use crate::pipeline::history::HistoryStack;
use crate::pipeline::stage::Stage;
use log::{debug, info, warn};
use rand::Rng;

/// Outcome of one forward step, kept for the progression display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// Stage the step was taken at
    pub stage: Stage,
    /// Filter applied, `None` when the stage was skipped
    pub filter: Option<Filter>,
    /// Combinations alive before the step
    pub before: usize,
    /// Combinations alive after the step
    pub after: usize,
}

/// Combinations alive at the current stage, plus everything needed to undo
///
/// Transitions consume the state and return the next one. The current set is
/// moved into the history stack on every forward step and moved back out on
/// undo, so no step is ever recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineState {
    game: Game,
    stage: Stage,
    current: CombinationSet,
    initial_count: usize,
    steps: Vec<StepRecord>,
    history: HistoryStack,
}

impl PipelineState {
    /// Start a pipeline over an already generated batch
    ///
    /// The cursor starts at the first filter stage with empty history.
    pub fn new(game: Game, combinations: CombinationSet) -> Self {
        Self {
            game,
            stage: Stage::Sum,
            initial_count: combinations.len(),
            current: combinations,
            steps: Vec::new(),
            history: HistoryStack::new(),
        }
    }

    /// Generate a fresh batch for `game` and start a pipeline over it
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is outside the accepted bounds
    pub fn generate<R: Rng + ?Sized>(game: Game, count: usize, rng: &mut R) -> Result<Self> {
        let combinations = generate(count, game.max_number(), rng)?;
        Ok(Self::new(game, combinations))
    }

    /// Apply `filter` at the current stage and move forward one stage
    ///
    /// # Errors
    ///
    /// Returns `OutOfSequence` if `filter` belongs to a different stage, or
    /// `PipelineFinished` if every stage has been taken
    pub fn advance(self, filter: Filter) -> Result<Self> {
        if self.stage == Stage::Result {
            return Err(LottoError::PipelineFinished);
        }
        if filter.stage() != self.stage {
            return Err(LottoError::OutOfSequence {
                expected: self.stage,
                found: filter.stage(),
            });
        }
        if let Filter::Sum(bounds) | Filter::Zones(bounds) = filter
            && bounds.is_inverted()
        {
            warn!("{filter}: minimum exceeds maximum, no combination can pass");
        }
        Ok(self.step(Some(filter)))
    }

    /// Move forward one stage without filtering
    ///
    /// # Errors
    ///
    /// Returns `PipelineFinished` if every stage has been taken
    pub fn skip(self) -> Result<Self> {
        if self.stage == Stage::Result {
            return Err(LottoError::PipelineFinished);
        }
        Ok(self.step(None))
    }

    /// Undo the most recent step, restoring its snapshot exactly
    ///
    /// With nothing to undo the state is returned unchanged.
    pub fn retreat(mut self) -> Self {
        let Some(entry) = self.history.pop() else {
            return self;
        };
        self.steps.pop();
        debug!("undo {}: restored {} combinations", entry.stage, entry.combinations.len());
        self.stage = entry.stage;
        self.current = entry.combinations;
        self
    }

    /// Drive every remaining stage with the filters planned in `settings`
    ///
    /// Stages planned as `None` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `PipelineFinished` if called once every stage has been taken
    pub fn run(self, settings: &FilterSettings) -> Result<Self> {
        if self.is_finished() {
            return Err(LottoError::PipelineFinished);
        }
        let mut state = self;
        while !state.is_finished() {
            state = state.advance_planned(settings)?;
        }
        Ok(state)
    }

    /// Take the current stage as planned in `settings`, applying or skipping
    ///
    /// # Errors
    ///
    /// Returns `PipelineFinished` if every stage has been taken
    pub fn advance_planned(self, settings: &FilterSettings) -> Result<Self> {
        match settings.filter_for(self.stage) {
            Some(filter) => self.advance(filter),
            None => self.skip(),
        }
    }

    fn step(mut self, filter: Option<Filter>) -> Self {
        let before = self.current.len();
        let next = filter.map_or_else(|| self.current.clone(), |f| f.apply(&self.current));
        let after = next.len();

        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(self.stage, previous);
        self.steps.push(StepRecord {
            stage: self.stage,
            filter,
            before,
            after,
        });

        match filter {
            Some(f) => debug!("{}: {f} kept {after} of {before}", self.stage),
            None => debug!("{}: skipped, {after} remain", self.stage),
        }

        self.stage = self.stage.next().unwrap_or(Stage::Result);
        if self.stage == Stage::Result {
            info!(
                "pipeline finished: {after} of {} combinations survived",
                self.initial_count
            );
        }
        self
    }

    /// Game the batch was drawn for
    pub const fn game(&self) -> Game {
        self.game
    }

    /// Stage the cursor is on
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Combinations alive at the current stage
    pub fn combinations(&self) -> &[Combination] {
        &self.current
    }

    /// Consume the state, keeping only the surviving combinations
    pub fn into_combinations(self) -> CombinationSet {
        self.current
    }

    /// Number of combinations alive at the current stage
    pub const fn remaining(&self) -> usize {
        self.current.len()
    }

    /// Size of the generated batch
    pub const fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Forward steps taken so far, oldest first
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Snapshots available for undo
    pub const fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Whether any step can be undone
    pub const fn can_retreat(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether every filter stage has been applied or skipped
    pub const fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Result)
    }
}
