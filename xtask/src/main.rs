//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run the workspace test suite.
    Test,
    /// Run the enumeration benchmarks.
    Bench,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        CommandName::Tidy => {
            cmd!(sh, "cargo fmt --all").run()?;
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
        }
        CommandName::Test => {
            cmd!(sh, "cargo test --workspace").run()?;
        }
        CommandName::Bench => {
            cmd!(sh, "cargo bench -p figgen").run()?;
        }
    }

    Ok(())
}
