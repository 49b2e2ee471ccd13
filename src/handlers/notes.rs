use crate::protocol::{AddNoteParams, DeleteNoteParams, McpError, SearchNotesParams, ToolResult};
use crate::store::{NoteStore, StoreError};

/// Number of content characters shown per search hit.
const SNIPPET_CHARS: usize = 100;

/// Handle an `add_note` tool call.
pub fn add_note(params: AddNoteParams, store: &mut NoteStore) -> Result<ToolResult, McpError> {
    let tags = tags_label(&params.tags, "none");
    let note = store.insert(params.title, params.content, params.tags);
    tracing::info!(id = %note.id, "note created");

    Ok(ToolResult::text(format!(
        "Note created successfully!\nID: {}\nTitle: {}\nTags: {}",
        note.id, note.title, tags
    )))
}

/// Handle a `list_notes` tool call.
pub fn list_notes(store: &NoteStore) -> Result<ToolResult, McpError> {
    if store.is_empty() {
        return Ok(ToolResult::text("No notes found. Use add_note to create one!"));
    }

    let lines: Vec<String> = store
        .list()
        .iter()
        .map(|n| format!("- [{}] {} ({})", n.id, n.title, tags_label(&n.tags, "no tags")))
        .collect();

    Ok(ToolResult::text(format!(
        "Found {} notes:\n{}",
        lines.len(),
        lines.join("\n")
    )))
}

/// Handle a `search_notes` tool call.
///
/// Each hit shows the first hundred characters of its content; the ellipsis
/// is appended unconditionally.
pub fn search_notes(params: SearchNotesParams, store: &NoteStore) -> Result<ToolResult, McpError> {
    let matches = store.search(&params.query);
    tracing::debug!(query = %params.query, hits = matches.len(), "search");

    if matches.is_empty() {
        return Ok(ToolResult::text(format!(
            "No notes found matching \"{}\"",
            params.query
        )));
    }

    let results: Vec<String> = matches
        .iter()
        .map(|n| {
            let snippet: String = n.content.chars().take(SNIPPET_CHARS).collect();
            format!("- [{}] {}\n  {}...", n.id, n.title, snippet)
        })
        .collect();

    Ok(ToolResult::text(format!(
        "Found {} matching notes:\n{}",
        results.len(),
        results.join("\n\n")
    )))
}

/// Handle a `delete_note` tool call.
pub fn delete_note(params: DeleteNoteParams, store: &mut NoteStore) -> Result<ToolResult, McpError> {
    let note = store.delete(&params.id).map_err(|e| match e {
        StoreError::NotFound(id) => {
            McpError::invalid_request(format!("Note with ID \"{id}\" not found"))
        }
    })?;
    tracing::info!(id = %note.id, "note deleted");

    Ok(ToolResult::text(format!(
        "Deleted note: \"{}\" (ID: {})",
        note.title, note.id
    )))
}

/// Comma-joined tags, or `empty` when that join is blank.
pub(crate) fn tags_label(tags: &[String], empty: &str) -> String {
    let joined = tags.join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}
