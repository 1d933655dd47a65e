//! # rebo-cli — Back-Office Command-Line Interface
//!
//! Operator tooling over the contract lifecycle engine. Loads contract
//! payloads as the backend serializes them and answers the two questions
//! the back office asks constantly: "where is this contract?" and "would
//! this transition be allowed?".
//!
//! ## Subcommands
//!
//! - `inspect` — Reconcile a contract payload into its lifecycle view and
//!   print the step-by-step progress with reached dates.
//! - `check` — Report whether a proposed transition from the payload's
//!   current status would be permitted, and under which policy.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `rebo-lifecycle` — no lifecycle rules
//!   are re-implemented here.

pub mod check;
pub mod inspect;
pub mod payload;
