//! # History Reconciler
//!
//! Projects a `(current status, audit trail)` pair into a display-ready
//! lifecycle view: a reached-date for every normal-flow step and the
//! contract's current position in the sequence.
//!
//! ## Design Decision
//!
//! The reconciler is stateless and re-derives the whole view from its
//! inputs on every call. Contract status changes at human pace, so the
//! recomputation cost is irrelevant, and statelessness removes the
//! possibility of the live status and the historical log drifting apart
//! between renders. Identical inputs always produce identical views.
//!
//! ## Ingestion Leniency
//!
//! The backend owns the audit trail, and a single malformed historical row
//! must never fail the whole view. [`decode_history`] converts the raw
//! backend payload into typed records, skipping rows whose statuses or
//! timestamps do not parse and emitting a `tracing` warning per dropped
//! row. Inside the engine every record is fully typed.

use serde::{Deserialize, Serialize};

use rebo_core::Timestamp;

use crate::status::{ContractStatus, NORMAL_FLOW};

// ─── Transition Records ──────────────────────────────────────────────

/// One entry of a contract's audit trail: a historical status change.
///
/// The engine treats the list of records as read-only input. Records are
/// interpreted as an unordered bag keyed by `current_status` — the engine
/// does not assume the backend returns them in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Status before the change.
    pub previous_status: ContractStatus,
    /// Status after the change.
    pub current_status: ContractStatus,
    /// When the change occurred.
    pub changed_at: Timestamp,
}

/// An audit-trail row exactly as the backend serializes it: string
/// statuses, string timestamp, camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransitionRecord {
    /// Status name before the change.
    pub previous_status: String,
    /// Status name after the change.
    pub current_status: String,
    /// ISO8601 timestamp of the change.
    pub changed_at: String,
}

/// Decode a raw backend history payload into typed records.
///
/// Rows that fail to decode — an unknown status name, an unparseable
/// timestamp — are dropped with a warning rather than failing the whole
/// list. The relative order of surviving rows is preserved, which matters
/// for [`reached_date_for`]'s first-match rule.
pub fn decode_history(raw: &[RawTransitionRecord]) -> Vec<TransitionRecord> {
    raw.iter()
        .filter_map(|row| match decode_record(row) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!(
                    previous_status = %row.previous_status,
                    current_status = %row.current_status,
                    changed_at = %row.changed_at,
                    %reason,
                    "dropping malformed audit-trail row"
                );
                None
            }
        })
        .collect()
}

fn decode_record(row: &RawTransitionRecord) -> Result<TransitionRecord, String> {
    let previous_status = row
        .previous_status
        .parse::<ContractStatus>()
        .map_err(|e| e.to_string())?;
    let current_status = row
        .current_status
        .parse::<ContractStatus>()
        .map_err(|e| e.to_string())?;
    let changed_at =
        Timestamp::parse_lenient(&row.changed_at).map_err(|e| e.to_string())?;
    Ok(TransitionRecord {
        previous_status,
        current_status,
        changed_at,
    })
}

// ─── Reconciliation ──────────────────────────────────────────────────

/// Zero-based position of `current` in the normal flow.
///
/// For the terminal override states — the only statuses not in the flow —
/// returns `NORMAL_FLOW.len()`, one past the last valid index. The
/// sentinel is an intentional, reachable value meaning "how many steps are
/// complete", not an error; never use it to index into [`NORMAL_FLOW`]
/// without a bounds check.
pub fn compute_current_index(current: ContractStatus) -> usize {
    current.flow_index().unwrap_or(NORMAL_FLOW.len())
}

/// The timestamp at which the contract reached `step`, if the audit trail
/// records it.
///
/// Returns the `changed_at` of the first record whose `current_status`
/// equals `step`. The source data carries at most one record per status;
/// if duplicates ever appear upstream, first match wins — an explicit
/// simplification, not a latest-wins guarantee.
pub fn reached_date_for(step: ContractStatus, history: &[TransitionRecord]) -> Option<Timestamp> {
    history
        .iter()
        .find(|record| record.current_status == step)
        .map(|record| record.changed_at)
}

/// Whether `current` is one of the terminal override states.
pub fn is_terminated(current: ContractStatus) -> bool {
    current.is_terminal()
}

// ─── Lifecycle View ──────────────────────────────────────────────────

/// The reconciled, display-ready projection of a contract's lifecycle.
///
/// A pure projection with no identity or storage of its own — recompute it
/// from the current status and history snapshot on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractLifecycleView {
    /// Position in the normal flow; `NORMAL_FLOW.len()` when the current
    /// status is a terminal override state.
    pub current_index: usize,
    /// Whether the contract is cancelled or terminated.
    pub is_terminated: bool,
    /// Reached-date per normal-flow step, indexed like [`NORMAL_FLOW`].
    pub reached: [Option<Timestamp>; NORMAL_FLOW.len()],
}

impl ContractLifecycleView {
    /// The reached-date recorded for a normal-flow step, if any.
    ///
    /// Terminal override states have no slot and always yield `None`.
    pub fn reached_for(&self, step: ContractStatus) -> Option<Timestamp> {
        step.flow_index().and_then(|idx| self.reached[idx])
    }
}

/// Reconcile a status/history snapshot into a [`ContractLifecycleView`].
pub fn reconcile(current: ContractStatus, history: &[TransitionRecord]) -> ContractLifecycleView {
    let mut reached = [None; NORMAL_FLOW.len()];
    for (idx, step) in NORMAL_FLOW.iter().enumerate() {
        reached[idx] = reached_date_for(*step, history);
    }
    ContractLifecycleView {
        current_index: compute_current_index(current),
        is_terminated: is_terminated(current),
        reached,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn record(
        previous: ContractStatus,
        current: ContractStatus,
        changed_at: &str,
    ) -> TransitionRecord {
        TransitionRecord {
            previous_status: previous,
            current_status: current,
            changed_at: ts(changed_at),
        }
    }

    // ── Index sentinel ───────────────────────────────────────────────

    #[test]
    fn test_index_for_flow_states() {
        assert_eq!(compute_current_index(ContractStatus::Listed), 0);
        assert_eq!(compute_current_index(ContractStatus::InProgress), 4);
        assert_eq!(compute_current_index(ContractStatus::Closed), 8);
    }

    #[test]
    fn test_index_sentinel_for_terminal_states() {
        assert_eq!(compute_current_index(ContractStatus::Cancelled), 9);
        assert_eq!(compute_current_index(ContractStatus::Terminated), 9);
        assert_eq!(compute_current_index(ContractStatus::Cancelled), NORMAL_FLOW.len());
    }

    // ── Reached dates ────────────────────────────────────────────────

    #[test]
    fn test_reached_date_found() {
        let history = vec![record(
            ContractStatus::IntentSigned,
            ContractStatus::Contracted,
            "2024-01-10T00:00:00Z",
        )];
        assert_eq!(
            reached_date_for(ContractStatus::Contracted, &history),
            Some(ts("2024-01-10T00:00:00Z"))
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(reached_date_for(ContractStatus::MovedIn, &[]), None);
        let history = vec![record(
            ContractStatus::Listed,
            ContractStatus::Negotiating,
            "2024-01-05T00:00:00Z",
        )];
        assert_eq!(reached_date_for(ContractStatus::MovedIn, &history), None);
    }

    #[test]
    fn test_duplicate_records_first_match_wins() {
        let history = vec![
            record(
                ContractStatus::IntentSigned,
                ContractStatus::Contracted,
                "2024-01-10T00:00:00Z",
            ),
            record(
                ContractStatus::IntentSigned,
                ContractStatus::Contracted,
                "2024-02-20T00:00:00Z",
            ),
        ];
        assert_eq!(
            reached_date_for(ContractStatus::Contracted, &history),
            Some(ts("2024-01-10T00:00:00Z"))
        );
    }

    #[test]
    fn test_history_order_not_assumed_chronological() {
        // Records arrive out of order; lookup still keys on status.
        let history = vec![
            record(
                ContractStatus::Contracted,
                ContractStatus::InProgress,
                "2024-03-01T00:00:00Z",
            ),
            record(
                ContractStatus::Listed,
                ContractStatus::Negotiating,
                "2024-01-05T00:00:00Z",
            ),
        ];
        assert_eq!(
            reached_date_for(ContractStatus::Negotiating, &history),
            Some(ts("2024-01-05T00:00:00Z"))
        );
        assert_eq!(
            reached_date_for(ContractStatus::InProgress, &history),
            Some(ts("2024-03-01T00:00:00Z"))
        );
    }

    // ── Full view ────────────────────────────────────────────────────

    #[test]
    fn test_reconcile_scenario_in_progress() {
        let history = vec![record(
            ContractStatus::IntentSigned,
            ContractStatus::Contracted,
            "2024-01-10T00:00:00Z",
        )];
        let view = reconcile(ContractStatus::InProgress, &history);

        assert_eq!(view.current_index, 4);
        assert!(!view.is_terminated);
        assert!(crate::validator::is_clickable_step(
            ContractStatus::InProgress,
            ContractStatus::PaidComplete
        ));
        assert!(!crate::validator::is_clickable_step(
            ContractStatus::InProgress,
            ContractStatus::Registered
        ));
        assert_eq!(
            view.reached_for(ContractStatus::Contracted),
            Some(ts("2024-01-10T00:00:00Z"))
        );
        assert_eq!(view.reached_for(ContractStatus::PaidComplete), None);
    }

    #[test]
    fn test_reconcile_terminated_contract() {
        let history = vec![record(
            ContractStatus::Listed,
            ContractStatus::Negotiating,
            "2024-01-05T00:00:00Z",
        )];
        let view = reconcile(ContractStatus::Terminated, &history);

        assert_eq!(view.current_index, NORMAL_FLOW.len());
        assert!(view.is_terminated);
        // Historical reached-dates survive termination.
        assert_eq!(
            view.reached_for(ContractStatus::Negotiating),
            Some(ts("2024-01-05T00:00:00Z"))
        );
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let history = vec![record(
            ContractStatus::Listed,
            ContractStatus::Negotiating,
            "2024-01-05T00:00:00Z",
        )];
        let a = reconcile(ContractStatus::Negotiating, &history);
        let b = reconcile(ContractStatus::Negotiating, &history);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reached_for_terminal_is_none() {
        let view = reconcile(ContractStatus::Closed, &[]);
        assert_eq!(view.reached_for(ContractStatus::Cancelled), None);
    }

    // ── Lenient decoding ─────────────────────────────────────────────

    fn raw(previous: &str, current: &str, changed_at: &str) -> RawTransitionRecord {
        RawTransitionRecord {
            previous_status: previous.to_string(),
            current_status: current.to_string(),
            changed_at: changed_at.to_string(),
        }
    }

    #[test]
    fn test_decode_history_well_formed() {
        let rows = vec![
            raw("LISTED", "NEGOTIATING", "2024-01-05T00:00:00Z"),
            raw("NEGOTIATING", "INTENT_SIGNED", "2024-01-08T00:00:00Z"),
        ];
        let history = decode_history(&rows);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].current_status, ContractStatus::Negotiating);
        assert_eq!(history[1].current_status, ContractStatus::IntentSigned);
    }

    #[test]
    fn test_decode_history_skips_unknown_status() {
        let rows = vec![
            raw("LISTED", "NEGOTIATING", "2024-01-05T00:00:00Z"),
            raw("NEGOTIATING", "SOMETHING_ELSE", "2024-01-06T00:00:00Z"),
            raw("NEGOTIATING", "INTENT_SIGNED", "2024-01-08T00:00:00Z"),
        ];
        let history = decode_history(&rows);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].current_status, ContractStatus::Negotiating);
        assert_eq!(history[1].current_status, ContractStatus::IntentSigned);
    }

    #[test]
    fn test_decode_history_skips_bad_timestamp() {
        let rows = vec![
            raw("LISTED", "NEGOTIATING", "not-a-date"),
            raw("NEGOTIATING", "INTENT_SIGNED", "2024-01-08T00:00:00Z"),
        ];
        let history = decode_history(&rows);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].current_status, ContractStatus::IntentSigned);
    }

    #[test]
    fn test_decode_history_accepts_offset_timestamps() {
        // Backend rows may carry explicit offsets; ingestion converts to UTC.
        let rows = vec![raw("LISTED", "NEGOTIATING", "2024-01-05T09:00:00+09:00")];
        let history = decode_history(&rows);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].changed_at, ts("2024-01-05T00:00:00Z"));
    }

    #[test]
    fn test_raw_record_uses_camel_case_keys() {
        let json = r#"{
            "previousStatus": "LISTED",
            "currentStatus": "NEGOTIATING",
            "changedAt": "2024-01-05T00:00:00Z"
        }"#;
        let row: RawTransitionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.current_status, "NEGOTIATING");
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_transition_record_serde_roundtrip() {
        let rec = record(
            ContractStatus::Listed,
            ContractStatus::Negotiating,
            "2024-01-05T00:00:00Z",
        );
        let json = serde_json::to_string(&rec).unwrap();
        let parsed: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }
}
