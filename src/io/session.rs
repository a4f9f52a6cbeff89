//! Line-driven interactive session walking a user through every stage
//!
//! Reads one command per line from any `BufRead` and writes menus to any
//! `Write`, so the whole flow runs the same against a terminal or a buffer.

use crate::draw::game::Game;
use crate::draw::generator::Generator;
use crate::filters::params::{BalanceMode, Bounds, Filter, PairMode};
use crate::io::configuration::{COUNT_PRESETS, MAX_COUNT, MIN_COUNT, SUM_PRESETS, ZONE_PRESETS};
use crate::io::error::Result;
use crate::io::progress::{matches_label, step_label};
use crate::io::report::{write_results, write_summary};
use crate::pipeline::sequencer::PipelineState;
use crate::pipeline::stage::Stage;
use log::debug;
use std::io::{BufRead, Write};

/// Menu entry choosing a filter for the current stage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageOption {
    /// Text shown next to the option number
    pub label: String,
    /// Filter applied when chosen
    pub filter: Filter,
}

impl StageOption {
    fn new(label: impl Into<String>, filter: Filter) -> Self {
        Self {
            label: label.into(),
            filter,
        }
    }
}

/// Choices offered at `stage`, empty for the count and result stages
pub fn stage_options(stage: Stage, game: Game) -> Vec<StageOption> {
    let split = game.small_split();
    match stage {
        Stage::Sum => SUM_PRESETS
            .iter()
            .map(|preset| {
                StageOption::new(
                    format!(
                        "{} - {} ({})",
                        preset.bounds.min, preset.bounds.max, preset.label
                    ),
                    Filter::Sum(preset.bounds),
                )
            })
            .collect(),
        Stage::EvenOdd => vec![
            StageOption::new(
                "Exclude 5:0 and 0:5",
                Filter::EvenOdd(BalanceMode::ExcludeSkewed),
            ),
            StageOption::new(
                "Only 2:3 and 3:2",
                Filter::EvenOdd(BalanceMode::OnlyBalanced),
            ),
        ],
        Stage::Size => vec![
            StageOption::new(
                format!("Exclude all small or all big (small = 1-{split})"),
                Filter::Magnitude {
                    mode: BalanceMode::ExcludeSkewed,
                    split,
                },
            ),
            StageOption::new(
                format!("Only 2:3 and 3:2 small/big (small = 1-{split})"),
                Filter::Magnitude {
                    mode: BalanceMode::OnlyBalanced,
                    split,
                },
            ),
        ],
        Stage::Consecutive => vec![
            StageOption::new(
                "Allow max 1 pair",
                Filter::Consecutive(PairMode::AllowOnePair),
            ),
            StageOption::new(
                "No consecutive numbers",
                Filter::Consecutive(PairMode::NoPairs),
            ),
        ],
        Stage::Zones => ZONE_PRESETS
            .iter()
            .map(|preset| {
                StageOption::new(
                    format!(
                        "{} - {} zones ({})",
                        preset.bounds.min, preset.bounds.max, preset.label
                    ),
                    Filter::Zones(preset.bounds),
                )
            })
            .collect(),
        Stage::Tail => vec![
            StageOption::new("Allow max 1 tail pair", Filter::Tail(PairMode::AllowOnePair)),
            StageOption::new("All tails unique", Filter::Tail(PairMode::NoPairs)),
        ],
        Stage::Count | Stage::Result => Vec::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session owning the generator and the live pipeline
pub struct Session<R, W> {
    reader: R,
    writer: W,
    generator: Generator,
    state: Option<PipelineState>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session starting at the count menu
    pub const fn new(reader: R, writer: W, generator: Generator) -> Self {
        Self {
            reader,
            writer,
            generator,
            state: None,
        }
    }

    /// Run until the user quits or input ends
    ///
    /// Returns the pipeline as it stood at exit, `None` if no batch was live.
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if reading input or writing output fails
    pub fn run(mut self) -> Result<Option<PipelineState>> {
        loop {
            self.render()?;
            let Some(line) = self.read_command()? else {
                break;
            };
            if self.handle(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(self.state)
    }

    fn read_command(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn render(&mut self) -> Result<()> {
        let game = self.generator.game();
        let w = &mut self.writer;
        writeln!(w)?;
        match &self.state {
            None => {
                writeln!(w, "{} · START", step_label(Stage::Count))?;
                writeln!(w, "{} WHITE NUMS · {}", game.name().to_uppercase(), Stage::Count.title())?;
                let presets: Vec<String> = COUNT_PRESETS.iter().map(ToString::to_string).collect();
                writeln!(
                    w,
                    "  presets: {} (or any count {MIN_COUNT}-{MAX_COUNT})",
                    presets.join(" ")
                )?;
                writeln!(w, "  q) quit")?;
            }
            Some(state) if state.is_finished() => {
                writeln!(
                    w,
                    "{} · {}",
                    Stage::Result.title(),
                    matches_label(state.remaining())
                )?;
                write_summary(w, state)?;
                writeln!(w)?;
                write_results(w, state.combinations())?;
                writeln!(w, "  n) new batch   b) back   q) quit")?;
            }
            Some(state) => {
                let stage = state.stage();
                writeln!(
                    w,
                    "{} · {}",
                    step_label(stage),
                    matches_label(state.remaining())
                )?;
                writeln!(w, "{}", stage.title())?;
                if stage == Stage::Zones {
                    writeln!(w, "  distribution across {} zones", game.zone_count())?;
                }
                for (index, option) in stage_options(stage, game).iter().enumerate() {
                    writeln!(w, "  {}) {}", index + 1, option.label)?;
                }
                if stage == Stage::Sum {
                    writeln!(w, "  or type MIN-MAX for a custom range")?;
                }
                writeln!(w, "  s) skip   b) back   q) quit")?;
            }
        }
        write!(w, "> ")?;
        w.flush()?;
        Ok(())
    }

    fn handle(&mut self, command: &str) -> Result<Flow> {
        if command == "q" {
            return Ok(Flow::Quit);
        }

        match self.state.take() {
            None => self.handle_count(command)?,
            Some(state) if state.is_finished() => match command {
                "n" => debug!("starting a new batch"),
                "b" => self.state = Some(state.retreat()),
                _ => {
                    self.state = Some(state);
                    writeln!(self.writer, "Choose n, b or q")?;
                }
            },
            Some(state) => self.state = self.handle_stage(state, command)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_count(&mut self, command: &str) -> Result<()> {
        let Ok(count) = command.parse::<usize>() else {
            writeln!(
                self.writer,
                "Enter a count between {MIN_COUNT} and {MAX_COUNT}"
            )?;
            return Ok(());
        };
        match self.generator.batch(count) {
            Ok(combinations) => {
                self.state = Some(PipelineState::new(self.generator.game(), combinations));
            }
            Err(error) => writeln!(self.writer, "{error}")?,
        }
        Ok(())
    }

    fn handle_stage(
        &mut self,
        state: PipelineState,
        command: &str,
    ) -> Result<Option<PipelineState>> {
        match command {
            // Stepping back past the first filter returns to the count menu
            "b" if !state.can_retreat() => return Ok(None),
            "b" => return Ok(Some(state.retreat())),
            "s" => return state.skip().map(Some),
            _ => {}
        }

        let options = stage_options(state.stage(), state.game());
        let chosen = command
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| options.get(index))
            .map(|option| option.filter);

        let custom = (state.stage() == Stage::Sum)
            .then(|| command.parse::<Bounds>().ok())
            .flatten()
            .map(Filter::Sum);

        match chosen.or(custom) {
            Some(filter) => state.advance(filter).map(Some),
            None => {
                writeln!(
                    self.writer,
                    "Choose 1-{}, s, b or q",
                    options.len()
                )?;
                Ok(Some(state))
            }
        }
    }
}
