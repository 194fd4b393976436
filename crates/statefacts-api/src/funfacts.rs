//! Handlers for the `/states/:state/funfact` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/states/:state/funfact` | One uniformly-random fact |
//! | `POST`   | `/states/:state/funfact` | Body: `{"funfacts": [..]}`; appends, 201 |
//! | `PATCH`  | `/states/:state/funfact` | Body: `{"index": n, "funfact": s}` |
//! | `DELETE` | `/states/:state/funfact` | Body: `{"index": n}` |
//!
//! Mutations never create a document; only seeding does. Indices arrive
//! 1-based; a position outside the loaded list is a client error, not a
//! missing resource, because the document itself exists. Bodies are decoded
//! from raw bytes so a missing or wrongly-shaped body yields each endpoint's
//! own message instead of a framework rejection.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use bytes::Bytes;
use rand::seq::IndexedRandom as _;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use statefacts_core::{
  funfacts::FunFactDoc, state::StateRecord, store::FunFactStore,
};

use crate::{AppState, error::ApiError, lookup_state};

// ─── Shared helpers ──────────────────────────────────────────────────────────

fn no_facts_found(record: &StateRecord) -> ApiError {
  ApiError::NotFound(format!("No fun facts found for {}", record.state))
}

fn bad_index(record: &StateRecord) -> ApiError {
  ApiError::BadRequest(format!(
    "No fun fact found at that index for {}",
    record.state
  ))
}

/// Decode a JSON request body. An absent body decodes to the struct's
/// default so field validation can report the missing input itself.
fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
  T: DeserializeOwned + Default,
{
  if body.is_empty() {
    return Ok(T::default());
  }
  serde_json::from_slice(body).map_err(|_| {
    ApiError::BadRequest("Request body must be valid JSON".to_string())
  })
}

/// Extract a positive 1-based index. Zero, negatives, fractions, and
/// non-numbers all fail with the endpoint's required-input message, as does
/// absence.
fn require_index(value: Option<&Value>, message: &str) -> Result<usize, ApiError> {
  value
    .and_then(Value::as_u64)
    .filter(|n| *n > 0)
    .map(|n| n as usize)
    .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

/// Load the document for a state, requiring at least one stored fact.
async fn load_nonempty<S>(
  state: &AppState<S>,
  record: &StateRecord,
) -> Result<FunFactDoc, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state
    .store
    .find(&record.code)
    .await
    .map_err(ApiError::store)?
    .filter(|d| !d.is_empty())
    .ok_or_else(|| no_facts_found(record))
}

// ─── Random ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RandomFactResponse {
  pub funfact: String,
}

/// `GET /states/:state/funfact`
pub async fn random<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<RandomFactResponse>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  let doc = load_nonempty(&state, record).await?;

  let funfact = doc
    .funfacts
    .choose(&mut rand::rng())
    .cloned()
    .ok_or_else(|| no_facts_found(record))?;

  Ok(Json(RandomFactResponse { funfact }))
}

// ─── Add ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /states/:state/funfact`.
#[derive(Debug, Default, Deserialize)]
pub struct AddFactsBody {
  /// Loosely typed so a wrong shape produces this endpoint's own message
  /// rather than a framework rejection.
  pub funfacts: Option<Value>,
}

impl AddFactsBody {
  fn validate(self) -> Result<Vec<String>, ApiError> {
    const MESSAGE: &str = "Fun facts must be an array";
    let items = match self.funfacts {
      Some(Value::Array(items)) => items,
      _ => return Err(ApiError::BadRequest(MESSAGE.to_string())),
    };
    items
      .into_iter()
      .map(|item| match item {
        Value::String(s) => Ok(s),
        _ => Err(ApiError::BadRequest(MESSAGE.to_string())),
      })
      .collect()
  }
}

/// `POST /states/:state/funfact` — appends to an existing document and
/// returns 201 + the full updated document. Never creates a document.
pub async fn add<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  let facts = parse_body::<AddFactsBody>(&body)?.validate()?;

  let mut doc = state
    .store
    .find(&record.code)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| {
      ApiError::NotFound(format!(
        "No existing fun facts found for {}. Cannot create new entry.",
        record.state
      ))
    })?;

  doc.append(facts);
  state.store.save(&doc).await.map_err(ApiError::store)?;

  Ok((StatusCode::CREATED, Json(doc)))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `PATCH /states/:state/funfact`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFactBody {
  pub index:   Option<Value>,
  pub funfact: Option<Value>,
}

impl UpdateFactBody {
  fn validate(self) -> Result<(usize, String), ApiError> {
    const MESSAGE: &str = "Index and funfact are required";
    let index = require_index(self.index.as_ref(), MESSAGE)?;
    let funfact = match self.funfact {
      Some(Value::String(s)) if !s.is_empty() => s,
      _ => return Err(ApiError::BadRequest(MESSAGE.to_string())),
    };
    Ok((index, funfact))
  }
}

/// `PATCH /states/:state/funfact` — replaces the fact at a 1-based index and
/// returns the updated document.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
  body: Bytes,
) -> Result<Json<FunFactDoc>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  let (index, funfact) = parse_body::<UpdateFactBody>(&body)?.validate()?;

  let mut doc = load_nonempty(&state, record).await?;
  doc.replace(index, funfact).map_err(|_| bad_index(record))?;

  state.store.save(&doc).await.map_err(ApiError::store)?;
  Ok(Json(doc))
}

// ─── Remove ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `DELETE /states/:state/funfact`. The index is read
/// from the body, for symmetry with PATCH.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteFactBody {
  pub index: Option<Value>,
}

impl DeleteFactBody {
  fn validate(self) -> Result<usize, ApiError> {
    require_index(self.index.as_ref(), "Index is required in request body")
  }
}

/// `DELETE /states/:state/funfact` — removes the fact at a 1-based index;
/// trailing facts shift down by one. Returns the updated document.
pub async fn remove<S>(
  State(state): State<AppState<S>>,
  Path(code): Path<String>,
  body: Bytes,
) -> Result<Json<FunFactDoc>, ApiError>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = lookup_state(&state.dataset, &code)?;
  let index = parse_body::<DeleteFactBody>(&body)?.validate()?;

  let mut doc = load_nonempty(&state, record).await?;
  doc.remove(index).map_err(|_| bad_index(record))?;

  state.store.save(&doc).await.map_err(ApiError::store)?;
  Ok(Json(doc))
}

// ─── Body validation tests ───────────────────────────────────────────────────
