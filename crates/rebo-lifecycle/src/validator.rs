//! # Transition Validator
//!
//! Pure boolean predicates over [`ContractStatus`] deciding which
//! transitions are permitted and under what policy.
//!
//! ## Transition Policy
//!
//! - **Quick advance** is strictly sequential: exactly one step forward in
//!   the normal flow, no skipping, no backtracking.
//! - **Terminal override** (cancel/terminate) is permitted from any
//!   non-terminal state regardless of position. Forward progress is gated
//!   by sequence position; termination is not, because real-world
//!   cancellations happen at any stage.
//! - **Terminal absorption**: once a contract is `CANCELLED` or
//!   `TERMINATED`, every predicate here returns `false`. Re-opening a
//!   contract is modeled by the backend as a new contract, never as a
//!   transition out of a terminal state.
//!
//! ## Failure Semantics
//!
//! The validator never errors. Illegal combinations evaluate to `false`,
//! and the caller surfaces that as a disabled control, not an error
//! message. Structured errors exist one layer up, in the orchestration
//! surface (`contract.rs`), for callers that attempt a refused transition
//! anyway.

use crate::status::ContractStatus;

/// Whether `target` is reachable from `current` via a single-step quick
/// advance.
///
/// True iff both statuses are members of the normal flow and `target` sits
/// exactly one position after `current`. Skipping steps, moving backward,
/// and any combination involving a terminal override state are all `false`.
pub fn can_quick_advance(current: ContractStatus, target: ContractStatus) -> bool {
    match (current.flow_index(), target.flow_index()) {
        (Some(from), Some(to)) => to == from + 1,
        _ => false,
    }
}

/// Whether a UI step affordance for `step` should be enabled while the
/// contract is at `current`.
///
/// Equivalent to `can_quick_advance(current, step)` and not terminated —
/// only the single legal next step is ever clickable, and nothing is
/// clickable once the contract is in a terminal override state.
pub fn is_clickable_step(current: ContractStatus, step: ContractStatus) -> bool {
    can_quick_advance(current, step) && !current.is_terminal()
}

/// Whether the contract at `current` may be overridden to `CANCELLED` or
/// `TERMINATED`.
///
/// True for every non-terminal state, including `LISTED` and `CLOSED`.
/// This predicate is what decides whether the confirmation prompt for a
/// destructive override should be offered at all.
pub fn can_override_terminate(current: ContractStatus) -> bool {
    !current.is_terminal()
}

// ─── Tests ───────────────────────────────────────────────────────────
