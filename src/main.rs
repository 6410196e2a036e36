//! CLI entry point for generating, solving and playing perfect mazes

use clap::Parser;
use mazewright::io::cli::{Cli, MazeProcessor};

fn main() -> mazewright::Result<()> {
    let cli = Cli::parse();
    let mut processor = MazeProcessor::new(cli);
    processor.process()?;
    Ok(())
}
