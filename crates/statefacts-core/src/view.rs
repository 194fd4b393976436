//! The computed read model joining reference data with persisted facts.

use serde::Serialize;

use crate::{funfacts::FunFactDoc, state::StateRecord};

/// A state record joined with its persisted fun facts. Never stored, always
/// derived at response time.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedState {
  #[serde(flatten)]
  pub record:   StateRecord,
  /// Present iff a fun-fact document exists for the state. `None` serialises
  /// as no field at all, preserving the distinction between "no data" and an
  /// empty list.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub funfacts: Option<Vec<String>>,
}

impl EnrichedState {
  pub fn new(record: StateRecord, doc: Option<FunFactDoc>) -> Self {
    Self {
      record,
      funfacts: doc.map(|d| d.funfacts),
    }
  }
}
