//! # rebo CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Brokerage back-office CLI — contract lifecycle tooling.
///
/// Inspects reconciled contract lifecycle views and checks proposed
/// status transitions against the engine's transition policy.
#[derive(Parser, Debug)]
#[command(name = "rebo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print a contract's reconciled lifecycle view.
    Inspect(rebo_cli::inspect::InspectArgs),
    /// Check whether a proposed status transition would be permitted.
    Check(rebo_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => rebo_cli::inspect::run(&args),
        Commands::Check(args) => rebo_cli::check::run(&args),
    }
}
