//! Command-line interface for batch and interactive filtering runs

use crate::draw::game::Game;
use crate::draw::generator::Generator;
use crate::filters::params::{BalanceMode, Bounds, Filter, PairMode};
use crate::filters::settings::FilterSettings;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_SUM_RANGE, DEFAULT_ZONE_RANGE};
use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::io::report::{export_results, write_results, write_summary};
use crate::io::session::Session;
use crate::pipeline::sequencer::PipelineState;
use crate::pipeline::stage::Stage;
use clap::Parser;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lottofilter")]
#[command(
    author,
    version,
    about = "Generate lottery combinations and narrow them with statistical filters"
)]
/// Command-line arguments for the combination filter tool
pub struct Cli {
    /// Game whose number range is drawn from
    #[arg(short, long, value_enum, default_value_t = Game::Powerball)]
    pub game: Game,

    /// How many combinations to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Random seed for reproducible batches (drawn at random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Inclusive range for the sum of all five numbers
    #[arg(long, value_name = "MIN-MAX", default_value_t = DEFAULT_SUM_RANGE)]
    pub sum: Bounds,

    /// Even/odd balance policy
    #[arg(long, value_enum, default_value_t = BalanceMode::ExcludeSkewed)]
    pub even_odd: BalanceMode,

    /// Small/big balance policy
    #[arg(long, value_enum, default_value_t = BalanceMode::ExcludeSkewed)]
    pub size: BalanceMode,

    /// Largest number counted as small (half the game range when omitted)
    #[arg(long)]
    pub split: Option<u8>,

    /// Consecutive-number policy
    #[arg(long, value_enum, default_value_t = PairMode::AllowOnePair)]
    pub consecutive: PairMode,

    /// Inclusive range for the number of distinct zones touched
    #[arg(long, value_name = "MIN-MAX", default_value_t = DEFAULT_ZONE_RANGE)]
    pub zones: Bounds,

    /// Shared last-digit policy
    #[arg(long, value_enum, default_value_t = PairMode::AllowOnePair)]
    pub tail: PairMode,

    /// Stages to leave unfiltered
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<Stage>,

    /// Choose filters step by step from menus
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the summary and results to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Filter plan described by the arguments
    pub fn settings(&self) -> FilterSettings {
        let mut settings = FilterSettings::skip_all();
        settings.set(Filter::Sum(self.sum));
        settings.set(Filter::EvenOdd(self.even_odd));
        settings.set(Filter::Magnitude {
            mode: self.size,
            split: self.split.unwrap_or_else(|| self.game.small_split()),
        });
        settings.set(Filter::Consecutive(self.consecutive));
        settings.set(Filter::Zones(self.zones));
        settings.set(Filter::Tail(self.tail));
        for &stage in &self.skip {
            settings.skip(stage);
        }
        settings
    }

    /// Seed to use, drawing one when none was given
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Runs one batch or one interactive session according to CLI arguments
pub struct Runner {
    cli: Cli,
    progress: StepProgress,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() && !cli.interactive {
            StepProgress::new()
        } else {
            StepProgress::hidden()
        };
        Self { cli, progress }
    }

    /// Run against the process's standard input and output
    ///
    /// # Errors
    ///
    /// Returns an error if generation, terminal I/O or export fails
    pub fn process(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.process_with(stdin.lock(), stdout.lock())?;
        Ok(())
    }

    /// Run against the given input and output
    ///
    /// Returns the final pipeline state, `None` if an interactive session
    /// ended without a live batch.
    ///
    /// # Errors
    ///
    /// Returns an error if generation, I/O or export fails
    pub fn process_with<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<Option<PipelineState>> {
        let seed = self.cli.resolve_seed();
        info!("{} batch seed: {seed}", self.cli.game);
        let mut generator = Generator::new(self.cli.game, seed);

        let state = if self.cli.interactive {
            Session::new(reader, &mut writer, generator).run()?
        } else {
            let state = self.run_batch(&mut generator)?;
            write_summary(&mut writer, &state)?;
            writeln!(writer)?;
            write_results(&mut writer, state.combinations())?;
            writer.flush()?;
            Some(state)
        };

        if let Some(path) = &self.cli.output {
            match &state {
                Some(state) => export_results(path, state)?,
                None => warn!("no batch to export to {}", path.display()),
            }
        }
        Ok(state)
    }

    fn run_batch(&self, generator: &mut Generator) -> Result<PipelineState> {
        let settings = self.cli.settings();
        let mut state = PipelineState::new(generator.game(), generator.batch(self.cli.count)?);
        self.progress.update(&state);

        while !state.is_finished() {
            state = state.advance_planned(&settings)?;
            self.progress.update(&state);
        }
        self.progress.finish();
        Ok(state)
    }
}
