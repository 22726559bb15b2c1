//! Append-only case ledger.
//!
//! Ordered store of (case id, encoded value) pairs awaiting later
//! recovery. Insertion order is meaningful and preserved through
//! [`CaseLedger::process_all`]. Recovery always goes through the engine's
//! current key state, not the state at the time each case was added.

use crate::engine::TransformEngine;

/// A stored case: caller-supplied identifier plus encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRecord {
    /// Caller-supplied case identifier.
    pub case_id: u64,
    /// Encoded value as produced by the transform engine.
    pub encoded_value: i64,
}

/// Append-only, order-preserving sequence of [`CaseRecord`]s.
///
/// The ledger does not enforce id uniqueness or monotonicity; duplicate or
/// out-of-order identifiers are accepted without error. The composing
/// application conventionally assigns `len + 1` via
/// [`next_case_id`](Self::next_case_id). No deletion, update, or
/// persistence exists; the ledger lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseLedger {
    cases: Vec<CaseRecord>,
}

impl CaseLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a case record.
    pub fn add_case(&mut self, case_id: u64, encoded_value: i64) {
        self.cases.push(CaseRecord { case_id, encoded_value });
        tracing::debug!(case_id, total = self.cases.len(), "stored case");
    }

    /// Identifier conventionally assigned to the next case (`len + 1`).
    pub fn next_case_id(&self) -> u64 {
        self.cases.len() as u64 + 1
    }

    /// Number of stored cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the ledger holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Stored cases in insertion order.
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Decode every stored value through the engine's current key state.
    ///
    /// Returns `(case_id, decoded_value)` pairs in insertion order. Never
    /// mutates the ledger. The output depends on the key pair live at call
    /// time; cases stored before a rotation decode under the rotated keys.
    pub fn process_all(&self, engine: &TransformEngine) -> Vec<(u64, i64)> {
        tracing::debug!(cases = self.cases.len(), "processing ledger");
        self.cases
            .iter()
            .map(|case| (case.case_id, engine.decode(case.encoded_value)))
            .collect()
    }
}
