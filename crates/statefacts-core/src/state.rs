//! The immutable U.S. state reference dataset.
//!
//! All fifty records are embedded in the crate at compile time and parsed
//! once at startup. The dataset is never mutated after load; every request
//! reads the same records for the lifetime of the process.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The embedded reference data, one object per state.
const STATES_JSON: &str = include_str!("../data/states.json");

/// Date layout used for admission dates, e.g. `"December 7, 1787"`.
pub const ADMISSION_DATE_FORMAT: &str = "%B %-d, %Y";

/// State codes outside the contiguous United States.
pub const NON_CONTIGUOUS: [&str; 2] = ["AK", "HI"];

// ─── StateRecord ─────────────────────────────────────────────────────────────

/// One immutable reference record. Loaded once; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
  /// Full state name, e.g. `"Kansas"`.
  pub state:          String,
  /// 2-letter uppercase postal abbreviation; unique across the dataset.
  pub code:           String,
  pub nickname:       String,
  pub capital_city:   String,
  pub population:     u64,
  #[serde(with = "admission_date_format")]
  pub admission_date: NaiveDate,
}

impl StateRecord {
  /// The admission date rendered in the dataset's human-readable layout.
  pub fn admitted(&self) -> String {
    self.admission_date.format(ADMISSION_DATE_FORMAT).to_string()
  }
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// The loaded reference dataset. Lookups are case-insensitive on code.
#[derive(Debug, Clone)]
pub struct Dataset {
  records: Vec<StateRecord>,
}

impl Dataset {
  /// Parse the embedded reference data.
  pub fn load() -> Result<Self> {
    let records: Vec<StateRecord> = serde_json::from_str(STATES_JSON)?;
    Ok(Self { records })
  }

  /// Look up a record by code, normalising to uppercase first.
  pub fn find(&self, code: &str) -> Option<&StateRecord> {
    let code = code.trim().to_ascii_uppercase();
    self.records.iter().find(|r| r.code == code)
  }

  /// Like [`find`](Self::find), but an unknown code is an error.
  pub fn get(&self, code: &str) -> Result<&StateRecord> {
    self
      .find(code)
      .ok_or_else(|| Error::UnknownStateCode(code.to_string()))
  }

  pub fn iter(&self) -> impl Iterator<Item = &StateRecord> {
    self.records.iter()
  }

  /// Records filtered by contiguity: `true` yields the lower 48, `false`
  /// yields only the two non-contiguous states.
  pub fn contiguous(&self, contig: bool) -> impl Iterator<Item = &StateRecord> {
    self
      .records
      .iter()
      .filter(move |r| NON_CONTIGUOUS.contains(&r.code.as_str()) != contig)
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

// ─── Serde helpers ───────────────────────────────────────────────────────────

/// Serde (de)serialisation of admission dates in the `"December 7, 1787"`
/// layout used by both the embedded dataset and the wire format.
mod admission_date_format {
  use chrono::NaiveDate;
  use serde::{Deserialize, Deserializer, Serializer, de};

  use super::ADMISSION_DATE_FORMAT;

  pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(&date.format(ADMISSION_DATE_FORMAT))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, ADMISSION_DATE_FORMAT)
      .map_err(de::Error::custom)
  }
}
