use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),

    #[error("Note {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Storage(#[from] DbError),
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // storage details stay in the server log
            NoteError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}
