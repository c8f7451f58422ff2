//! CLI entry point for the mosaic filters

use clap::Parser;
use env_logger::Env;
use pixmosaic::io::cli::{Cli, FileProcessor};

fn main() -> pixmosaic::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
