//! Integration tests for `SqliteStore` against an in-memory database.

use statefacts_core::{funfacts::FunFactDoc, store::FunFactStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn doc(code: &str, facts: &[&str]) -> FunFactDoc {
  FunFactDoc::new(code, facts.iter().map(|f| f.to_string()).collect())
}

#[tokio::test]
async fn find_missing_code_returns_none() {
  let s = store().await;
  let result = s.find("KS").await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn save_and_find_round_trip() {
  let s = store().await;
  let d = doc("KS", &["home of Pizza Hut", "bans snowball fights"]);

  s.save(&d).await.unwrap();

  let fetched = s.find("KS").await.unwrap().unwrap();
  assert_eq!(fetched, d);
}

#[tokio::test]
async fn save_overwrites_existing_document() {
  let s = store().await;

  s.save(&doc("MO", &["old"])).await.unwrap();
  s.save(&doc("MO", &["new", "facts"])).await.unwrap();

  let fetched = s.find("MO").await.unwrap().unwrap();
  assert_eq!(fetched.funfacts, ["new", "facts"]);
}

#[tokio::test]
async fn save_preserves_order_and_duplicates() {
  let s = store().await;
  let d = doc("NE", &["b", "a", "a", "c"]);

  s.save(&d).await.unwrap();

  let fetched = s.find("NE").await.unwrap().unwrap();
  assert_eq!(fetched.funfacts, ["b", "a", "a", "c"]);
}

#[tokio::test]
async fn empty_fact_list_round_trips_as_present_document() {
  // An existing document with zero facts is distinct from no document.
  let s = store().await;

  s.save(&doc("CO", &[])).await.unwrap();

  let fetched = s.find("CO").await.unwrap();
  assert!(matches!(fetched, Some(d) if d.is_empty()));
}

#[tokio::test]
async fn list_returns_every_stored_document() {
  let s = store().await;

  s.save(&doc("KS", &["a"])).await.unwrap();
  s.save(&doc("MO", &["b"])).await.unwrap();
  s.save(&doc("OK", &["c"])).await.unwrap();

  let mut all = s.list().await.unwrap();
  all.sort_by(|x, y| x.state_code.cmp(&y.state_code));

  let codes: Vec<&str> = all.iter().map(|d| d.state_code.as_str()).collect();
  assert_eq!(codes, ["KS", "MO", "OK"]);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}
