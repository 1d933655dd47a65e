//! # Inspect Subcommand
//!
//! Reconciles a contract payload into its lifecycle view and prints the
//! step-by-step progress: one line per normal-flow step with its reached
//! date, a marker for the current position, and a banner for terminated
//! contracts.

use std::path::PathBuf;

use clap::Args;

use rebo_lifecycle::{is_clickable_step, reconcile, NORMAL_FLOW};

use crate::payload::ContractPayload;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a contract payload JSON file.
    #[arg(long)]
    pub contract: PathBuf,
}

/// Print the reconciled lifecycle view for a contract payload.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let payload = ContractPayload::load(&args.contract)?;
    let status = payload.status()?;
    let history = payload.typed_history();
    tracing::debug!(rows = history.len(), "decoded audit trail");
    let view = reconcile(status, &history);

    if view.is_terminated {
        println!("contract status: {status} (terminated)");
    } else {
        println!(
            "contract status: {status} (step {} of {})",
            view.current_index + 1,
            NORMAL_FLOW.len()
        );
    }

    for (idx, step) in NORMAL_FLOW.iter().enumerate() {
        let marker = if idx == view.current_index {
            ">"
        } else if idx < view.current_index {
            "x"
        } else {
            " "
        };
        let date = view.reached[idx]
            .map(|ts| ts.to_iso8601())
            .unwrap_or_else(|| "-".to_string());
        let next = if is_clickable_step(status, *step) {
            "  (next)"
        } else {
            ""
        };
        println!("  [{marker}] {:<14} {date}{next}", step.name());
    }

    Ok(())
}
