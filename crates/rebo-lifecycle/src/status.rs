//! # Contract Status Enumeration
//!
//! The eleven states a brokerage contract can occupy: nine normal-flow
//! states with a fixed total order, plus two terminal override states that
//! sit outside the order.
//!
//! ## States
//!
//! ```text
//! Listed ──▶ Negotiating ──▶ IntentSigned ──▶ Contracted ──▶ InProgress
//!                                                                │
//!              Closed ◀── MovedIn ◀── Registered ◀── PaidComplete
//!
//! any non-terminal state ──▶ Cancelled   (terminal)
//! any non-terminal state ──▶ Terminated  (terminal)
//! ```
//!
//! ## Design Decision
//!
//! The normal-flow order is encoded once, in [`NORMAL_FLOW`]. Everything
//! that needs the order — adjacency checks, progress indices, step
//! iteration — derives it from that single constant. Call sites never carry
//! their own copy of the sequence, so the adjacency invariant cannot drift
//! between the validator and the reconciler.
//!
//! Wire names are SCREAMING_SNAKE_CASE, matching the backend's string
//! enumeration (`LISTED`, `IN_PROGRESS`, ...). A string outside the known
//! enumeration fails to parse with a structured [`UnknownStatus`] error —
//! the engine never represents an unknown status internally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lifecycle state of a brokerage contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    /// Property listed, contract opened.
    Listed,
    /// Parties are negotiating terms.
    Negotiating,
    /// Letter of intent signed.
    IntentSigned,
    /// Main contract signed.
    Contracted,
    /// Contract in progress (interim payments, conditions).
    InProgress,
    /// Full payment complete.
    PaidComplete,
    /// Title registered.
    Registered,
    /// Occupant moved in.
    MovedIn,
    /// Contract fully complete (terminal end of the normal flow).
    Closed,
    /// Contract cancelled before completion (terminal override).
    Cancelled,
    /// Contract terminated for cause (terminal override).
    Terminated,
}

/// The normal-flow sequence, in order. This constant is the single source
/// of truth for the total order; `NORMAL_FLOW.len()` is the out-of-range
/// sentinel used by the reconciler for terminal statuses.
pub const NORMAL_FLOW: [ContractStatus; 9] = [
    ContractStatus::Listed,
    ContractStatus::Negotiating,
    ContractStatus::IntentSigned,
    ContractStatus::Contracted,
    ContractStatus::InProgress,
    ContractStatus::PaidComplete,
    ContractStatus::Registered,
    ContractStatus::MovedIn,
    ContractStatus::Closed,
];

impl ContractStatus {
    /// Zero-based position in the normal flow, or `None` for the terminal
    /// override states.
    pub fn flow_index(&self) -> Option<usize> {
        NORMAL_FLOW.iter().position(|s| s == self)
    }

    /// Whether this status is a member of the normal flow.
    pub fn is_flow(&self) -> bool {
        self.flow_index().is_some()
    }

    /// Whether this status is a terminal override state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Terminated)
    }

    /// The next status in the normal flow, if any. `Closed` has no
    /// successor; terminal override states are not in the flow.
    pub fn next_in_flow(&self) -> Option<ContractStatus> {
        let idx = self.flow_index()?;
        NORMAL_FLOW.get(idx + 1).copied()
    }

    /// The canonical wire name of this status (e.g., "IN_PROGRESS").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Listed => "LISTED",
            Self::Negotiating => "NEGOTIATING",
            Self::IntentSigned => "INTENT_SIGNED",
            Self::Contracted => "CONTRACTED",
            Self::InProgress => "IN_PROGRESS",
            Self::PaidComplete => "PAID_COMPLETE",
            Self::Registered => "REGISTERED",
            Self::MovedIn => "MOVED_IN",
            Self::Closed => "CLOSED",
            Self::Cancelled => "CANCELLED",
            Self::Terminated => "TERMINATED",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A status string outside the known enumeration.
///
/// The backend owns the enumeration, so this should be unreachable in
/// practice; it is kept as an explicit, diagnosable error rather than
/// being folded into the reconciler's "past the end" sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contract status: {0:?}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for ContractStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s {
            "LISTED" => Self::Listed,
            "NEGOTIATING" => Self::Negotiating,
            "INTENT_SIGNED" => Self::IntentSigned,
            "CONTRACTED" => Self::Contracted,
            "IN_PROGRESS" => Self::InProgress,
            "PAID_COMPLETE" => Self::PaidComplete,
            "REGISTERED" => Self::Registered,
            "MOVED_IN" => Self::MovedIn,
            "CLOSED" => Self::Closed,
            "CANCELLED" => Self::Cancelled,
            "TERMINATED" => Self::Terminated,
            _ => return Err(UnknownStatus(s.to_string())),
        };
        Ok(status)
    }
}

// ─── Terminal Status ─────────────────────────────────────────────────

/// The two terminal override targets.
///
/// A dedicated type so the override path cannot be invoked with a
/// normal-flow status as its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminalStatus {
    /// Contract cancelled before completion.
    Cancelled,
    /// Contract terminated for cause.
    Terminated,
}

impl From<TerminalStatus> for ContractStatus {
    fn from(t: TerminalStatus) -> Self {
        match t {
            TerminalStatus::Cancelled => ContractStatus::Cancelled,
            TerminalStatus::Terminated => ContractStatus::Terminated,
        }
    }
}

impl std::fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ContractStatus::from(*self).fmt(f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
