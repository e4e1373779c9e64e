//! CLI entry point for composing words out of element tiles

use clap::Parser;
use periodic_tiles::io::cli::{Cli, ElementProcessor};

fn main() -> periodic_tiles::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.default_log_filter()))
        .format_timestamp(None)
        .init();

    let mut processor = ElementProcessor::new(cli);
    processor.process()?;
    Ok(())
}
