use serde::Serialize;

use crate::handlers::notes::tags_label;
use crate::protocol::{
    ListResourcesResult, McpError, ReadResourceResult, ResourceContents, ResourceDescriptor,
};
use crate::store::NoteStore;

/// URI of the resource holding the whole collection.
pub const NOTES_LIST_URI: &str = "notes://list";

/// Prefix of per-note resource URIs; the note id follows verbatim.
pub const NOTE_URI_PREFIX: &str = "notes://note/";

const JSON_MIME: &str = "application/json";

/// Handle `resources/list`.
///
/// Built from the current store contents on every call.
pub fn list(store: &NoteStore) -> ListResourcesResult {
    let mut resources = Vec::with_capacity(store.len() + 1);
    resources.push(ResourceDescriptor {
        uri: NOTES_LIST_URI.into(),
        name: "All Notes".into(),
        description: "List of all notes in the system".into(),
        mime_type: JSON_MIME.into(),
    });

    resources.extend(store.list().iter().map(|note| ResourceDescriptor {
        uri: format!("{NOTE_URI_PREFIX}{}", note.id),
        name: note.title.clone(),
        description: format!("Note: {} ({})", note.title, tags_label(&note.tags, "no tags")),
        mime_type: JSON_MIME.into(),
    }));

    ListResourcesResult { resources }
}

/// Handle `resources/read`.
pub fn read(uri: &str, store: &NoteStore) -> Result<ReadResourceResult, McpError> {
    if uri == NOTES_LIST_URI {
        return json_contents(uri, store.list());
    }

    if let Some(id) = uri.strip_prefix(NOTE_URI_PREFIX).filter(|id| !id.is_empty()) {
        let note = store
            .get(id)
            .ok_or_else(|| McpError::invalid_request(format!("Note not found: {id}")))?;
        return json_contents(uri, note);
    }

    Err(McpError::invalid_request(format!("Unknown resource: {uri}")))
}

fn json_contents<T: Serialize + ?Sized>(uri: &str, value: &T) -> Result<ReadResourceResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        tracing::error!("Serialization failed: {e}");
        McpError::internal("Internal error")
    })?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: uri.into(),
            mime_type: JSON_MIME.into(),
            text,
        }],
    })
}
