//! Integration tests for `resources/list` and `resources/read`.

use mcp_notes_server::handlers::{self, resources};
use mcp_notes_server::protocol::{JsonRpcRequest, McpErrorCode, RpcId};
use mcp_notes_server::store::NoteStore;
use serde_json::{json, Value};

fn read_request(uri: &str) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Str("read".into())),
        method: "resources/read".into(),
        params: Some(json!({ "uri": uri })),
    }
}

#[test]
fn list_starts_with_collection_then_one_per_note() {
    let store = NoteStore::with_samples();
    let result = resources::list(&store);

    let uris: Vec<&str> = result.resources.iter().map(|r| r.uri.as_str()).collect();
    assert_eq!(uris, vec!["notes://list", "notes://note/1", "notes://note/2"]);

    let all = &result.resources[0];
    assert_eq!(all.name, "All Notes");
    assert_eq!(all.description, "List of all notes in the system");

    let docker = &result.resources[2];
    assert_eq!(docker.name, "Docker Basics");
    assert_eq!(docker.description, "Note: Docker Basics (docker, devops)");
    assert!(result.resources.iter().all(|r| r.mime_type == "application/json"));
}

#[test]
fn list_reflects_current_store_state() {
    let mut store = NoteStore::new();
    assert_eq!(resources::list(&store).resources.len(), 1);

    let note = store.insert("Fresh", "", Vec::new());
    let result = resources::list(&store);
    assert_eq!(result.resources.len(), 2);
    assert_eq!(result.resources[1].uri, format!("notes://note/{}", note.id));
    assert_eq!(result.resources[1].description, "Note: Fresh (no tags)");

    store.delete(&note.id).unwrap();
    assert_eq!(resources::list(&store).resources.len(), 1);
}

#[test]
fn read_list_returns_pretty_json_array_in_order() {
    let mut store = NoteStore::with_samples();
    store.insert("Third", "c", vec!["z".into()]);

    let result = resources::read("notes://list", &store).unwrap();
    let contents = &result.contents[0];
    assert_eq!(contents.uri, "notes://list");
    assert_eq!(contents.mime_type, "application/json");
    assert!(contents.text.contains("\n  "), "expected pretty-printed JSON");

    let notes: Vec<Value> = serde_json::from_str(&contents.text).unwrap();
    assert_eq!(notes.len(), store.len());
    let titles: Vec<&str> = notes.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Welcome to MCP", "Docker Basics", "Third"]);
}

#[test]
fn read_list_on_empty_store_is_empty_array() {
    let store = NoteStore::new();
    let result = resources::read("notes://list", &store).unwrap();

    assert_eq!(result.contents[0].text, "[]");
}

#[test]
fn read_single_note() {
    let mut store = NoteStore::with_samples();
    let note = store.insert("Mine", "body", vec!["a".into()]);
    let uri = format!("notes://note/{}", note.id);

    let result = resources::read(&uri, &store).unwrap();
    assert_eq!(result.contents[0].uri, uri);

    let value: Value = serde_json::from_str(&result.contents[0].text).unwrap();
    assert_eq!(value["id"], note.id.as_str());
    assert_eq!(value["title"], "Mine");
    assert_eq!(value["content"], "body");
    assert_eq!(value["createdAt"], note.created_at.as_str());
    assert_eq!(value["tags"], json!(["a"]));
}

#[test]
fn read_missing_note_names_the_id() {
    let store = NoteStore::with_samples();
    let err = resources::read("notes://note/404", &store).unwrap_err();

    assert_eq!(err.code, McpErrorCode::InvalidRequest);
    assert_eq!(err.message, "Note not found: 404");
}

#[test]
fn read_deleted_note_fails() {
    let mut store = NoteStore::with_samples();
    store.delete("1").unwrap();

    let err = resources::read("notes://note/1", &store).unwrap_err();
    assert_eq!(err.message, "Note not found: 1");
}

#[test]
fn read_unknown_uri() {
    let store = NoteStore::with_samples();

    for uri in ["notes://other", "notes://note/", "file:///etc/passwd", ""] {
        let err = resources::read(uri, &store).unwrap_err();
        assert_eq!(err.code, McpErrorCode::InvalidRequest);
        assert_eq!(err.message, format!("Unknown resource: {uri}"));
    }
}

#[test]
fn dispatch_read_converts_errors_to_json_rpc() {
    let mut store = NoteStore::with_samples();

    let ok = handlers::dispatch(&read_request("notes://note/2"), &mut store).unwrap();
    let result = ok.result.unwrap();
    let contents = &result["contents"][0];
    assert_eq!(contents["mimeType"], "application/json");
    let note: Value = serde_json::from_str(contents["text"].as_str().unwrap()).unwrap();
    assert_eq!(note["id"], "2");

    let missing = handlers::dispatch(&read_request("notes://note/9"), &mut store).unwrap();
    let err = missing.error.unwrap();
    assert_eq!(err.code, -32600);
    assert_eq!(err.message, "Note not found: 9");
    assert_eq!(missing.id, Some(RpcId::Str("read".into())));
}

#[test]
fn dispatch_list_resources() {
    let mut store = NoteStore::with_samples();
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Number(3)),
        method: "resources/list".into(),
        params: None,
    };

    let result = handlers::dispatch(&req, &mut store).unwrap().result.unwrap();
    let listed = result["resources"].as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[1]["uri"], "notes://note/1");
    assert_eq!(listed[1]["mimeType"], "application/json");
}
