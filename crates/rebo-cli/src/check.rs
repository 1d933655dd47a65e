//! # Check Subcommand
//!
//! Answers whether a proposed transition from a contract's current status
//! would be permitted, and under which policy: single-step quick advance
//! or confirmed terminal override.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use rebo_lifecycle::{can_override_terminate, can_quick_advance, ContractStatus};

use crate::payload::ContractPayload;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a contract payload JSON file.
    #[arg(long)]
    pub contract: PathBuf,

    /// Proposed target status wire name (e.g., "PAID_COMPLETE").
    #[arg(long)]
    pub target: String,
}

/// Report the transition verdict for a proposed target status.
pub fn run(args: &CheckArgs) -> anyhow::Result<()> {
    let payload = ContractPayload::load(&args.contract)?;
    let current = payload.status()?;
    let target: ContractStatus = args
        .target
        .parse()
        .context("target is not a known contract status")?;

    if target.is_terminal() {
        if can_override_terminate(current) {
            println!("{current} -> {target}: permitted (terminal override, requires confirmation)");
        } else {
            println!("{current} -> {target}: refused (contract already terminated)");
        }
        return Ok(());
    }

    if can_quick_advance(current, target) {
        println!("{current} -> {target}: permitted (quick advance)");
    } else {
        println!("{current} -> {target}: refused (only the immediate next step is allowed)");
    }

    Ok(())
}
