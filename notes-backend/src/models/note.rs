use serde::{Deserialize, Serialize};

/// A persisted note. Values are snapshots; the database owns the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
}

/// Request to create a note
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub text: String,
}

/// Request to replace a note's text (PUT)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    pub text: String,
}

/// Request to partially update a note (PATCH). Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchNoteRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Query parameters for listing notes
#[derive(Debug, Clone, Deserialize)]
pub struct ListNotesQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ListNotesQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

fn default_limit() -> u32 {
    100
}
