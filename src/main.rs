//! CLI entry point for generating and filtering lottery combinations

use clap::Parser;
use lottofilter::io::cli::{Cli, Runner};

fn main() -> lottofilter::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.process()
}
