//! CLI entry point for the corner-stitched tile plane processor

use clap::Parser;
use cornerstitch::io::cli::{Cli, CommandProcessor};

fn main() -> cornerstitch::Result<()> {
    let cli = Cli::parse();
    let processor = CommandProcessor::new(cli);
    processor.process()
}
