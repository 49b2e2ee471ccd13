use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the random part of a generated note id.
const ID_SUFFIX_LEN: usize = 11;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A single stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("note not found: {0}")]
    NotFound(String),
}

/// In-memory note collection.
///
/// Notes are kept in insertion order, which is the order every listing and
/// search returns them in. Lookups are linear; the collection is expected to
/// stay small.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two sample notes served on a fresh start.
    pub fn with_samples() -> Self {
        let created_at = now_iso8601();
        let notes = vec![
            Note {
                id: "1".into(),
                title: "Welcome to MCP".into(),
                content: "This is your first note created with the MCP Notes Server!".into(),
                created_at: created_at.clone(),
                tags: vec!["welcome".into(), "mcp".into()],
            },
            Note {
                id: "2".into(),
                title: "Docker Basics".into(),
                content: "Docker containers are lightweight, portable units of software.".into(),
                created_at,
                tags: vec!["docker".into(), "devops".into()],
            },
        ];
        Self { notes }
    }

    /// Store a new note under a freshly generated id and return it.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Note {
        let mut id = generate_id();
        while self.get(&id).is_some() {
            id = generate_id();
        }

        let note = Note {
            id,
            title: title.into(),
            content: content.into(),
            created_at: now_iso8601(),
            tags,
        };
        tracing::debug!(id = %note.id, title = %note.title, "note inserted");
        self.notes.push(note.clone());
        note
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Case-insensitive substring search over title, content, and tags.
    ///
    /// An empty query matches every note.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
                    || n.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Remove a note and return it. The store is left untouched on failure.
    pub fn delete(&mut self, id: &str) -> Result<Note, StoreError> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let note = self.notes.remove(pos);
        tracing::debug!(id = %note.id, "note deleted");
        Ok(note)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Millisecond timestamp in base 36 followed by a random base-36 suffix.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);

    let mut rng = rand::thread_rng();
    id.extend((0..ID_SUFFIX_LEN).map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char));
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
