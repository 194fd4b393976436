//! statefacts server assembly.
//!
//! Composes the JSON API router with transport-level concerns: request
//! tracing and the site-wide content-negotiated 404 fallback. The binary in
//! `main.rs` handles config, store opening, and seeding.

use std::path::PathBuf;

use axum::{
  Json, Router,
  http::{HeaderMap, StatusCode, header},
  response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use statefacts_api::AppState;
use statefacts_core::store::FunFactStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (and the
/// `STATEFACTS_`-prefixed environment).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Embedded body for HTML 404 responses.
const NOT_FOUND_PAGE: &str = include_str!("404.html");

/// Build the full application router for `state`.
pub fn app<S>(state: AppState<S>) -> Router
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  statefacts_api::router(state)
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
}

/// Unmatched routes get a 404 shaped by the caller's `Accept` preference:
/// HTML page, JSON `{"error": "404 Not Found"}`, or plain text. A missing
/// `Accept` header counts as accepting anything.
async fn not_found(headers: HeaderMap) -> Response {
  let accept = headers
    .get(header::ACCEPT)
    .and_then(|v| v.to_str().ok())
    .unwrap_or("*/*");

  if accept.contains("text/html") || accept.contains("*/*") {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
  } else if accept.contains("application/json") {
    (
      StatusCode::NOT_FOUND,
      Json(serde_json::json!({ "error": "404 Not Found" })),
    )
      .into_response()
  } else {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
  }
}

// ─── Integration tests ───────────────────────────────────────────────────────
