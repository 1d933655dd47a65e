//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the back office.
//! These prevent accidental identifier confusion — you cannot pass a
//! `CustomerId` where a `ContractId` is expected, even though both are
//! UUIDs on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a brokerage contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub Uuid);

/// Unique identifier for a customer (buyer, seller, lessee, lessor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

/// Unique identifier for a listed property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub Uuid);

impl ContractId {
    /// Generate a new random contract identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl CustomerId {
    /// Generate a new random customer identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl PropertyId {
    /// Generate a new random property identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "contract:{}", self.0)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer:{}", self.0)
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "property:{}", self.0)
    }
}
