//! # rebo-core — Foundational Types for the Back-Office Stack
//!
//! The leaf crate of the brokerage back-office workspace. It defines the
//! primitives shared by every other crate: UTC-only timestamps, identifier
//! newtypes, and the structured error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ContractId`, `CustomerId`,
//!    `PropertyId` — all newtypes with dedicated constructors. No bare
//!    strings or raw UUIDs for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Backend payloads with local offsets are
//!    accepted only through the explicit lenient parser, never silently.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rebo-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::ReboError;
pub use identity::{ContractId, CustomerId, PropertyId};
pub use temporal::Timestamp;
