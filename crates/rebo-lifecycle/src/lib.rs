//! # rebo-lifecycle — Contract Lifecycle Engine
//!
//! Tracks a brokerage contract's progress through a fixed sequence of
//! business states, validates which transitions are legal, and reconciles
//! the current position against the backend's audit trail.
//!
//! ## Components
//!
//! - **Status** (`status.rs`): the `ContractStatus` enumeration — nine
//!   totally ordered normal-flow states (`LISTED` through `CLOSED`) plus
//!   the two terminal override states (`CANCELLED`, `TERMINATED`). The
//!   order lives in one place, the `NORMAL_FLOW` constant.
//!
//! - **Transition Validator** (`validator.rs`): pure boolean predicates.
//!   Forward progress is strictly single-step; cancel/terminate is allowed
//!   from any non-terminal state; terminal states absorb everything.
//!
//! - **History Reconciler** (`reconcile.rs`): stateless projection of a
//!   `(status, history)` snapshot into per-step reached-dates and a current
//!   position, plus lenient decoding of raw backend audit rows.
//!
//! - **Orchestration** (`contract.rs`): the `Contract` document and the
//!   gate-persist-adopt contract around the external `StatusGateway`
//!   collaborator.
//!
//! ## Design
//!
//! Every operation in the validator and reconciler is a pure function over
//! its arguments: no shared mutable state, no I/O, no suspension points.
//! Calling them once per re-render with identical inputs always produces
//! identical outputs. The only side-effectful path is the orchestration
//! layer's call into the caller-supplied gateway.

pub mod contract;
pub mod reconcile;
pub mod status;
pub mod validator;

// ─── Status re-exports ──────────────────────────────────────────────

pub use status::{ContractStatus, TerminalStatus, UnknownStatus, NORMAL_FLOW};

// ─── Validator re-exports ───────────────────────────────────────────

pub use validator::{can_override_terminate, can_quick_advance, is_clickable_step};

// ─── Reconciler re-exports ──────────────────────────────────────────

pub use reconcile::{
    compute_current_index, decode_history, is_terminated, reached_date_for, reconcile,
    ContractLifecycleView, RawTransitionRecord, TransitionRecord,
};

// ─── Orchestration re-exports ───────────────────────────────────────

pub use contract::{Contract, ContractSnapshot, GatewayError, LifecycleError, StatusGateway};
