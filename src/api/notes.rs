use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use tracing::warn;

use crate::db::repository;
use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::models::{UpdateNoteRequest, UpdateNoteResponse};
use crate::services::notes::NoteImage;
use crate::state::AppState;
use crate::uploads;
use crate::views;

pub(super) async fn list_notes(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let course = repository::find_course_by_id(&state.db, course_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let notes = repository::fetch_notes_for_course(&state.db, course_id).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::notes(&course, &notes, flash)))
}

pub(super) async fn add_note(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    jar: SignedCookieJar,
    mut multipart: Multipart,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let course = repository::find_course_by_id(&state.db, course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut body = None;
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "note" => body = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // browsers send an empty file part when nothing was picked
                if !file_name.is_empty() {
                    image = Some(NoteImage {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    state.notes().add(course_id, body, image).await?;
    Ok((
        flash::push(jar, Flash::NoteAdded),
        Redirect::to(&format!("/courses/{}/{}", course.department_id, course.year)),
    ))
}

pub(super) async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let note = state.notes().delete(note_id).await?;
    Ok((
        flash::push(jar, Flash::NoteDeleted),
        Redirect::to(&format!("/add_note/{}", note.course_id)),
    ))
}

pub(super) async fn all_notes(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let notes = repository::fetch_all_notes(&state.db).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::all_notes(&notes, flash)))
}

/// JSON endpoint that always answers 200; failures travel in the body.
pub(super) async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Json<UpdateNoteResponse> {
    match apply_note_update(&state, path, payload).await {
        Ok(()) => Json(UpdateNoteResponse::ok()),
        Err(message) => {
            warn!("note update failed: {}", message);
            Json(UpdateNoteResponse::failed(message))
        }
    }
}

async fn apply_note_update(
    state: &AppState,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<(), String> {
    let Path(note_id) = path.map_err(|e| e.body_text())?;
    let Json(request) = payload.map_err(|e| e.body_text())?;
    state
        .notes()
        .update_text(note_id, request.note.as_deref())
        .await
        .map_err(|e| e.to_string())
}

pub(super) async fn serve_upload(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state
        .uploads
        .read(&file_name)
        .await?
        .ok_or(AppError::NotFound)?;
    let content_type = uploads::content_type_for(&file_name);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
