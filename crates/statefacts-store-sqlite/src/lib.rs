//! SQLite backend for the statefacts fun-fact store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! pool without blocking the async runtime. Each state's fact list is held as
//! one row, document-style: the key column is the state code and the facts
//! column is a JSON array.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
