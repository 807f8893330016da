pub mod note;

pub use note::{CreateNoteRequest, ListNotesQuery, Note, PatchNoteRequest, UpdateNoteRequest};
