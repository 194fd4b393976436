//! Handlers for the state reference endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET` | `/states` | Optional `?contig=true\|false` |
//! | `GET` | `/states/:state` | Single record, facts merged in if present |
//! | `GET` | `/states/:state/capital` | `{state, capital}` |
//! | `GET` | `/states/:state/nickname` | `{state, nickname}` |
//! | `GET` | `/states/:state/population` | `{state, population}`, formatted |
//! | `GET` | `/states/:state/admission` | `{state, admitted}` |

use std::collections::HashMap;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use statefacts_core::{
  funfacts::FunFactDoc, store::FunFactStore, view::EnrichedState,
};

use crate::{AppState, error::ApiError, lookup_state};

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// `true` restricts to the lower 48; `false` to Alaska and Hawaii only.
  pub contig: Option<bool>,
}

/// `GET /states[?contig=true|false]`
///
/// One store round-trip: every stored document is fetched up front, then
/// joined onto the reference records by code.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<EnrichedState>>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let docs = state.store.list().await.map_err(ApiError::store)?;
  let mut by_code: HashMap<String, FunFactDoc> = docs
    .into_iter()
    .map(|d| (d.state_code.clone(), d))
    .collect();

  let records: Vec<_> = match params.contig {
    Some(contig) => state.dataset.contiguous(contig).collect(),
    None => state.dataset.iter().collect(),
  };

  let merged = records
    .into_iter()
    .map(|r| EnrichedState::new(r.clone(), by_code.remove(&r.code)))
    .collect();

  Ok(Json(merged))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /states/:state`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<EnrichedState>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  let doc = state
    .store
    .find(&record.code)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(EnrichedState::new(record.clone(), doc)))
}

// ─── Field projections ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CapitalResponse {
  pub state:   String,
  pub capital: String,
}

/// `GET /states/:state/capital`
pub async fn capital<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<CapitalResponse>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  Ok(Json(CapitalResponse {
    state:   record.state.clone(),
    capital: record.capital_city.clone(),
  }))
}

#[derive(Debug, Serialize)]
pub struct NicknameResponse {
  pub state:    String,
  pub nickname: String,
}

/// `GET /states/:state/nickname`
pub async fn nickname<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<NicknameResponse>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  Ok(Json(NicknameResponse {
    state:    record.state.clone(),
    nickname: record.nickname.clone(),
  }))
}

#[derive(Debug, Serialize)]
pub struct PopulationResponse {
  pub state:      String,
  /// Rendered with comma thousands separators, e.g. `"2,937,880"`.
  pub population: String,
}

/// `GET /states/:state/population`
pub async fn population<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<PopulationResponse>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  Ok(Json(PopulationResponse {
    state:      record.state.clone(),
    population: format_population(record.population),
  }))
}

#[derive(Debug, Serialize)]
pub struct AdmissionResponse {
  pub state:    String,
  pub admitted: String,
}

/// `GET /states/:state/admission`
pub async fn admission<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<AdmissionResponse>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  Ok(Json(AdmissionResponse {
    state:    record.state.clone(),
    admitted: record.admitted(),
  }))
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Render a population count with comma thousands separators.
pub fn format_population(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}
