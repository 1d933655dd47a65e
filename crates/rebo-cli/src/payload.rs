//! # Contract Payload — Backend Wire Shape
//!
//! The JSON shape the backend serves for a contract detail fetch: a
//! current status string plus the audit-trail rows. History rows decode
//! leniently (malformed rows are dropped with a warning); the current
//! status decodes strictly, because an unknown current status means the
//! operator is looking at data this tool does not understand.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use rebo_lifecycle::{decode_history, ContractStatus, RawTransitionRecord, TransitionRecord};

/// A contract detail payload as fetched from the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayload {
    /// Current status wire name (e.g., "IN_PROGRESS").
    pub contract_status: String,
    /// Audit-trail rows, possibly unordered.
    #[serde(default)]
    pub history: Vec<RawTransitionRecord>,
}

impl ContractPayload {
    /// Load a payload from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading contract payload {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing contract payload {}", path.display()))
    }

    /// Strictly parse the current status.
    pub fn status(&self) -> anyhow::Result<ContractStatus> {
        self.contract_status
            .parse()
            .context("contract has a status outside the known enumeration")
    }

    /// Leniently decode the audit trail.
    pub fn typed_history(&self) -> Vec<TransitionRecord> {
        decode_history(&self.history)
    }
}
