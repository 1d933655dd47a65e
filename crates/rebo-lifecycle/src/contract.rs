//! # Contract Document and Status Orchestration
//!
//! The contract as the back office holds it — identifiers, current status,
//! typed audit trail — plus the caller-level contract for requesting status
//! changes.
//!
//! ## Orchestration Contract
//!
//! Every status change is gated, persisted externally, then re-adopted:
//!
//! 1. Gate the request with the transition validator. A refused request
//!    returns [`LifecycleError::TransitionRefused`] without touching the
//!    gateway or local state.
//! 2. Persist through the [`StatusGateway`] collaborator (the backend's
//!    "update contract status" mutation, implemented outside this crate).
//! 3. Adopt the snapshot the gateway returns wholesale. The server is
//!    authoritative — there is no optimistic local mutation and no merge of
//!    local history with server history.
//!
//! The confirmation dialog for destructive overrides is owned by the
//! caller; [`crate::validator::can_override_terminate`] decides whether the
//! prompt should be offered at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rebo_core::{ContractId, CustomerId, PropertyId};

use crate::reconcile::{reconcile, ContractLifecycleView, TransitionRecord};
use crate::status::{ContractStatus, TerminalStatus};
use crate::validator::{can_override_terminate, can_quick_advance};

// ─── Gateway ─────────────────────────────────────────────────────────

/// Errors produced by the external status-update collaborator.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The backend refused the update (validation, authorization, conflict).
    #[error("status update rejected by backend: {0}")]
    Rejected(String),

    /// The update could not reach the backend.
    #[error("status update transport failure: {0}")]
    Transport(String),
}

/// Status and audit trail as returned by the backend after a mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSnapshot {
    /// The contract's status according to the server.
    pub status: ContractStatus,
    /// The full audit trail according to the server.
    pub history: Vec<TransitionRecord>,
}

/// The external "update contract status" collaborator.
///
/// Implementations own the REST mutation; this crate only decides whether
/// the call should be attempted. On success the gateway returns the
/// server's post-update snapshot, which the caller adopts wholesale.
pub trait StatusGateway {
    /// Persist a status change and return the authoritative snapshot.
    fn update_status(
        &mut self,
        id: &ContractId,
        target: ContractStatus,
    ) -> Result<ContractSnapshot, GatewayError>;
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors surfaced by the orchestration layer.
///
/// A well-behaved UI never triggers `TransitionRefused` — the validator's
/// boolean surface disables the control first. The structured error exists
/// for callers that race a stale view against another editor's change.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The requested transition is not permitted from the current status.
    #[error("transition refused: {from} -> {to}")]
    TransitionRefused {
        /// Current status name.
        from: String,
        /// Requested target status name.
        to: String,
    },

    /// The external update collaborator failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

// ─── Contract ────────────────────────────────────────────────────────

/// A brokerage contract with its current status and audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique contract identifier.
    pub id: ContractId,
    /// The property under contract.
    pub property_id: PropertyId,
    /// The customer on the contract.
    pub customer_id: CustomerId,
    /// Current lifecycle status.
    pub status: ContractStatus,
    /// Audit trail of past status changes, as fetched from the backend.
    pub history: Vec<TransitionRecord>,
}

impl Contract {
    /// Open a new contract at the start of the normal flow.
    pub fn new_listing(id: ContractId, property_id: PropertyId, customer_id: CustomerId) -> Self {
        Self {
            id,
            property_id,
            customer_id,
            status: ContractStatus::Listed,
            history: Vec::new(),
        }
    }

    /// Build a contract from a backend snapshot.
    pub fn from_snapshot(
        id: ContractId,
        property_id: PropertyId,
        customer_id: CustomerId,
        snapshot: ContractSnapshot,
    ) -> Self {
        Self {
            id,
            property_id,
            customer_id,
            status: snapshot.status,
            history: snapshot.history,
        }
    }

    /// Replace local status and history with the server's snapshot.
    ///
    /// The server is authoritative after every persist; any locally held
    /// state is discarded, never merged.
    pub fn apply_snapshot(&mut self, snapshot: ContractSnapshot) {
        self.status = snapshot.status;
        self.history = snapshot.history;
    }

    /// The reconciled lifecycle view for the current snapshot.
    pub fn lifecycle_view(&self) -> ContractLifecycleView {
        reconcile(self.status, &self.history)
    }

    /// Request a quick advance to `target`.
    ///
    /// Gates on [`can_quick_advance`]; a refused request leaves status,
    /// history, and the gateway untouched. On success the gateway's
    /// snapshot replaces local state.
    pub fn quick_advance<G: StatusGateway>(
        &mut self,
        gateway: &mut G,
        target: ContractStatus,
    ) -> Result<(), LifecycleError> {
        if !can_quick_advance(self.status, target) {
            tracing::debug!(
                contract = %self.id,
                from = %self.status,
                to = %target,
                "quick advance refused"
            );
            return Err(LifecycleError::TransitionRefused {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }

        let snapshot = gateway.update_status(&self.id, target)?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Request a terminal override to `CANCELLED` or `TERMINATED`.
    ///
    /// Gates on [`can_override_terminate`]. The target is a
    /// [`TerminalStatus`], so this path cannot be invoked with a
    /// normal-flow status. User confirmation is the caller's concern and
    /// must happen before this call.
    pub fn override_terminate<G: StatusGateway>(
        &mut self,
        gateway: &mut G,
        terminal: TerminalStatus,
    ) -> Result<(), LifecycleError> {
        if !can_override_terminate(self.status) {
            tracing::debug!(
                contract = %self.id,
                from = %self.status,
                to = %terminal,
                "terminal override refused"
            );
            return Err(LifecycleError::TransitionRefused {
                from: self.status.to_string(),
                to: terminal.to_string(),
            });
        }

        let snapshot = gateway.update_status(&self.id, terminal.into())?;
        self.apply_snapshot(snapshot);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
