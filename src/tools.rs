use serde_json::{json, Value};

/// The fixed tool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    AddNote,
    ListNotes,
    SearchNotes,
    DeleteNote,
}

impl Tool {
    pub const ALL: [Tool; 4] = [
        Tool::AddNote,
        Tool::ListNotes,
        Tool::SearchNotes,
        Tool::DeleteNote,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add_note" => Some(Self::AddNote),
            "list_notes" => Some(Self::ListNotes),
            "search_notes" => Some(Self::SearchNotes),
            "delete_note" => Some(Self::DeleteNote),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddNote => "add_note",
            Self::ListNotes => "list_notes",
            Self::SearchNotes => "search_notes",
            Self::DeleteNote => "delete_note",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AddNote => "Create a new note with a title, content, and optional tags",
            Self::ListNotes => "List all notes with their IDs and titles",
            Self::SearchNotes => "Search notes by title, content, or tags",
            Self::DeleteNote => "Delete a note by its ID",
        }
    }

    /// JSON Schema advertised for the tool's `arguments` object.
    pub fn input_schema(&self) -> Value {
        match self {
            Self::AddNote => json!({
                "type": "object",
                "required": ["title", "content"],
                "properties": {
                    "title": {
                        "type": "string",
                        "minLength": 1,
                        "description": "The title of the note"
                    },
                    "content": {
                        "type": "string",
                        "description": "The content/body of the note"
                    },
                    "tags": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Optional tags to categorize the note"
                    }
                }
            }),
            Self::ListNotes => json!({
                "type": "object",
                "properties": {}
            }),
            Self::SearchNotes => json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to find in notes"
                    }
                }
            }),
            Self::DeleteNote => json!({
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "The ID of the note to delete"
                    }
                }
            }),
        }
    }

    /// Descriptor as returned by `tools/list`.
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}
