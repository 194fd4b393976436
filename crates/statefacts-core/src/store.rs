//! The `FunFactStore` trait.
//!
//! Implemented by storage backends (e.g. `statefacts-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::funfacts::FunFactDoc;

/// Abstraction over a fun-fact document store.
///
/// Documents are whole-document read and whole-document write; a concurrent
/// save of the same state overwrites, last writer wins. The store never
/// enforces that a code matches the reference dataset; callers validate
/// before reaching it.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait FunFactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the document for a state code. Returns `None` if the state has
  /// never been seeded.
  fn find<'a>(
    &'a self,
    code: &'a str,
  ) -> impl Future<Output = Result<Option<FunFactDoc>, Self::Error>> + Send + 'a;

  /// List every stored document. Used to join facts onto the full state
  /// listing with a single store round-trip.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<FunFactDoc>, Self::Error>> + Send + '_;

  /// Persist a document, replacing any previous version for its code.
  fn save<'a>(
    &'a self,
    doc: &'a FunFactDoc,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
