use std::sync::Arc;

use crate::db::{Database, DbError};
use crate::models::{CreateNoteRequest, ListNotesQuery, Note, PatchNoteRequest, UpdateNoteRequest};

use super::NoteError;

/// Validates note requests and maps database results to `NoteError`.
#[derive(Clone)]
pub struct NoteService {
    db: Arc<Database>,
}

impl NoteService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn create(&self, request: CreateNoteRequest) -> Result<Note, NoteError> {
        let text = require_text(&request.text)?;
        let note = self.db.create_note(Some(text)).map_err(|e| storage("create note", e))?;
        log::info!("Created note {}", note.id);
        Ok(note)
    }

    pub fn get(&self, id: i64) -> Result<Note, NoteError> {
        self.db
            .get_note(id)
            .map_err(|e| storage("get note", e))?
            .ok_or(NoteError::NotFound(id))
    }

    pub fn list(&self, query: &ListNotesQuery) -> Result<Vec<Note>, NoteError> {
        self.db
            .list_notes(query.skip, query.limit)
            .map_err(|e| storage("list notes", e))
    }

    /// Full replace. Never creates a missing note.
    pub fn update(&self, id: i64, request: UpdateNoteRequest) -> Result<Note, NoteError> {
        let text = require_text(&request.text)?;
        let note = self
            .db
            .update_note(id, text)
            .map_err(|e| storage("update note", e))?
            .ok_or(NoteError::NotFound(id))?;
        log::info!("Updated note {}", id);
        Ok(note)
    }

    /// Partial update: an omitted `text` leaves the stored value untouched.
    pub fn patch(&self, id: i64, request: PatchNoteRequest) -> Result<Note, NoteError> {
        match request.text {
            Some(text) => self.update(id, UpdateNoteRequest { text }),
            None => self.get(id),
        }
    }

    /// Idempotent delete: removing a missing note still succeeds.
    pub fn delete(&self, id: i64) -> Result<(), NoteError> {
        let removed = self.db.delete_note(id).map_err(|e| storage("delete note", e))?;
        if removed {
            log::info!("Deleted note {}", id);
        } else {
            log::debug!("Delete requested for missing note {}", id);
        }
        Ok(())
    }
}

fn require_text(text: &str) -> Result<&str, NoteError> {
    if text.is_empty() {
        return Err(NoteError::Validation("text must not be empty".to_string()));
    }
    Ok(text)
}

fn storage(operation: &str, e: DbError) -> NoteError {
    log::error!("Failed to {}: {}", operation, e);
    NoteError::Storage(e)
}
