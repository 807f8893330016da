//! Notes service — request validation and orchestration on top of the notes table.
//!
//! The database reports a missing row as `None`; this layer turns that into
//! `NoteError::NotFound` so the HTTP boundary can answer 404.

pub mod error;
pub mod service;

pub use error::NoteError;
pub use service::NoteService;
