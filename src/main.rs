//! Interactive console for managing student questions and answers.
//!
//! The binary is a single menu-driven session on stdin and stdout. All data
//! is held in memory and discarded on exit.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.run()
}
