mod cli;
mod processing;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::processing::{convert_tree, SipsDecoder};

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_target(false)       // Remove module path
        .with_writer(std::io::stdout)
        .compact();

    subscriber.init();

    let cli = Cli::parse();
    info!("Converting {} at quality {}", cli.root.display(), cli.quality);

    // Per-file failures are tallied in the summary and never fail the
    // process; a missing root does.
    let summary = convert_tree(&cli.root, cli.quality, &SipsDecoder)?;

    if !summary.failed.is_empty() {
        info!(
            "{} of {} files failed to convert",
            summary.failed.len(),
            summary.converted + summary.skipped + summary.failed.len()
        );
    }

    Ok(())
}
