//! Behaviour of the in-memory note store.

use std::collections::HashSet;

use mcp_notes_server::store::{NoteStore, StoreError};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[test]
fn samples_are_seeded_in_order() {
    let store = NoteStore::with_samples();
    let titles: Vec<&str> = store.list().iter().map(|n| n.title.as_str()).collect();

    assert_eq!(titles, vec!["Welcome to MCP", "Docker Basics"]);
    assert_eq!(store.list()[0].id, "1");
    assert_eq!(store.list()[1].id, "2");
    assert_eq!(store.list()[1].tags, tags(&["docker", "devops"]));
}

#[test]
fn insert_then_list_adds_exactly_one_entry() {
    let mut store = NoteStore::with_samples();
    let before = store.len();

    let note = store.insert("Test", "Hello", tags(&["x", "y"]));

    assert_eq!(store.len(), before + 1);
    let last = store.list().last().unwrap();
    assert_eq!(last, &note);
    assert_eq!(last.title, "Test");
    assert_eq!(last.content, "Hello");
    assert_eq!(last.tags, tags(&["x", "y"]));
    assert!(!note.id.is_empty());
    assert_ne!(note.id, "1");
    assert_ne!(note.id, "2");
}

#[test]
fn insert_stamps_rfc3339_timestamp() {
    let mut store = NoteStore::new();
    let note = store.insert("t", "", Vec::new());

    assert!(
        chrono::DateTime::parse_from_rfc3339(&note.created_at).is_ok(),
        "createdAt should be ISO-8601: {}",
        note.created_at
    );
}

#[test]
fn generated_ids_are_unique() {
    let mut store = NoteStore::new();
    let ids: HashSet<String> = (0..500)
        .map(|i| store.insert(format!("note {i}"), "body", Vec::new()).id)
        .collect();

    assert_eq!(ids.len(), 500);
}

#[test]
fn deleted_ids_are_not_handed_out_again() {
    let mut store = NoteStore::new();
    let first = store.insert("a", "b", Vec::new());
    store.delete(&first.id).unwrap();

    let second = store.insert("a", "b", Vec::new());
    assert_ne!(first.id, second.id);
}

#[test]
fn delete_removes_and_returns_note() {
    let mut store = NoteStore::with_samples();
    let removed = store.delete("1").unwrap();

    assert_eq!(removed.title, "Welcome to MCP");
    assert_eq!(store.len(), 1);
    assert!(store.get("1").is_none());
    assert!(store.search("welcome").is_empty());
}

#[test]
fn delete_missing_id_fails_without_mutation() {
    let mut store = NoteStore::with_samples();
    let before: Vec<_> = store.list().to_vec();

    let err = store.delete("nope").unwrap_err();
    assert_eq!(err, StoreError::NotFound("nope".into()));
    assert_eq!(store.list(), before.as_slice());

    store.delete("2").unwrap();
    assert_eq!(store.delete("2").unwrap_err(), StoreError::NotFound("2".into()));
}

#[test]
fn empty_query_matches_every_note() {
    let mut store = NoteStore::with_samples();
    store.insert("Third", "", Vec::new());

    assert_eq!(store.search("").len(), 3);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let mut store = NoteStore::new();
    store.insert("Kubernetes", "pods and nodes", tags(&["DevOps"]));
    store.insert("Groceries", "Milk, EGGS", Vec::new());

    let by_tag = store.search("devops");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Kubernetes");

    let by_title = store.search("KUBER");
    assert_eq!(by_title.len(), 1);

    let by_content = store.search("eggs");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].title, "Groceries");

    assert!(store.search("absent").is_empty());
}

#[test]
fn search_preserves_store_order() {
    let mut store = NoteStore::new();
    store.insert("b common", "", Vec::new());
    store.insert("a common", "", Vec::new());
    store.insert("c common", "", Vec::new());

    let titles: Vec<&str> = store.search("common").iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["b common", "a common", "c common"]);
}

#[test]
fn note_serializes_with_camel_case_fields() {
    let store = NoteStore::with_samples();
    let value = serde_json::to_value(&store.list()[0]).unwrap();

    assert_eq!(value["id"], "1");
    assert!(value["createdAt"].is_string());
    assert!(value.get("created_at").is_none());
    assert_eq!(value["tags"], serde_json::json!(["welcome", "mcp"]));
}
