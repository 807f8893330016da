//! Notes REST API — CRUD over the notes table.
//!
//! Malformed bodies, query strings and path ids are rejected with 422
//! before a handler runs; missing notes surface as 404.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::{CreateNoteRequest, ListNotesQuery, PatchNoteRequest, UpdateNoteRequest};
use crate::notes::NoteError;
use crate::AppState;

async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, NoteError> {
    let note = data.notes.create(body.into_inner())?;
    Ok(HttpResponse::Created().json(note))
}

async fn list_notes(
    data: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> Result<HttpResponse, NoteError> {
    let notes = data.notes.list(&query)?;
    Ok(HttpResponse::Ok().json(notes))
}

async fn get_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    let note = data.notes.get(path.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    data.notes.delete(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

async fn put_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, NoteError> {
    let note = data.notes.update(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

async fn patch_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PatchNoteRequest>,
) -> Result<HttpResponse, NoteError> {
    let note = data.notes.patch(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

fn validation_error(message: String, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected {} {}: {}", req.method(), req.path(), message);
    NoteError::Validation(message).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, req| validation_error(err.to_string(), req)),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, req| validation_error(err.to_string(), req)),
            )
            .app_data(
                web::PathConfig::default()
                    .error_handler(|err, req| validation_error(err.to_string(), req)),
            )
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::delete().to(delete_note))
            .route("/{id}", web::put().to(put_note))
            .route("/{id}", web::patch().to(patch_note)),
    );
}
