//! [`SqliteStore`] — the SQLite implementation of [`FunFactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use statefacts_core::{funfacts::FunFactDoc, store::FunFactStore};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fun-fact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row codec ───────────────────────────────────────────────────────────────

fn encode_facts(facts: &[String]) -> Result<String> {
  Ok(serde_json::to_string(facts)?)
}

fn decode_doc(state_code: String, facts_json: &str) -> Result<FunFactDoc> {
  let funfacts: Vec<String> = serde_json::from_str(facts_json)?;
  Ok(FunFactDoc {
    state_code,
    funfacts,
  })
}

// ─── FunFactStore impl ───────────────────────────────────────────────────────

impl FunFactStore for SqliteStore {
  type Error = crate::Error;

  async fn find(&self, code: &str) -> Result<Option<FunFactDoc>> {
    let code = code.to_owned();

    let raw: Option<(String, String)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT state_code, facts FROM funfact_docs WHERE state_code = ?1",
              rusqlite::params![code],
              |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|(code, facts)| decode_doc(code, &facts))
      .transpose()
  }

  async fn list(&self) -> Result<Vec<FunFactDoc>> {
    let raws: Vec<(String, String)> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT state_code, facts FROM funfact_docs")?;
        let rows = stmt
          .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|(code, facts)| decode_doc(code, &facts))
      .collect()
  }

  async fn save(&self, doc: &FunFactDoc) -> Result<()> {
    let code = doc.state_code.clone();
    let facts = encode_facts(&doc.funfacts)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO funfact_docs (state_code, facts) VALUES (?1, ?2)
           ON CONFLICT (state_code) DO UPDATE SET facts = excluded.facts",
          rusqlite::params![code, facts],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
