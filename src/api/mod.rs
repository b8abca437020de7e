mod notes;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::SignedCookieJar;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::models::*;
use crate::state::AppState;
use crate::views;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/select_class/{department_id}", get(select_class))
        .route("/courses/{department_id}/{year}", get(list_courses))
        .route("/current_courses", get(current_courses))
        .route("/toggle_current_course/{course_id}", post(toggle_current_course))
        .route("/edit_elective/{course_id}", get(edit_elective_form).post(edit_elective))
        .route("/add_note/{course_id}", get(notes::list_notes).post(notes::add_note))
        .route("/delete_note/{note_id}", post(notes::delete_note))
        .route("/all_notes", get(notes::all_notes))
        .route("/update_note/{note_id}", post(notes::update_note))
        .route("/uploads/{file_name}", get(notes::serve_upload))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let departments = repository::fetch_departments(&state.db).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::index(&departments, flash)))
}

async fn find_department(state: &AppState, department_id: i64) -> Result<Department, AppError> {
    repository::find_department_by_id(&state.db, department_id)
        .await?
        .ok_or(AppError::NotFound)
}

async fn select_class(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let department = find_department(&state, department_id).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::select_class(&department, flash)))
}

async fn list_courses(
    State(state): State<AppState>,
    Path((department_id, year)): Path<(i64, i32)>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let department = find_department(&state, department_id).await?;
    let courses = repository::fetch_courses_for_year(&state.db, department_id, year).await?;
    let current_ids = repository::fetch_current_course_ids(&state.db).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::courses(&department, year, &courses, &current_ids, flash)))
}

async fn current_courses(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let courses = repository::fetch_current_courses(&state.db).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::current_courses(&courses, flash)))
}

async fn toggle_current_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    headers: HeaderMap,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    let membership = repository::toggle_current_course(&state.db, course_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let message = match membership {
        Membership::Added => {
            info!("course {} added to current semester", course_id);
            Flash::CourseAdded
        }
        Membership::Removed => {
            info!("course {} removed from current semester", course_id);
            Flash::CourseRemoved
        }
    };

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");
    Ok((flash::push(jar, message), Redirect::to(back)))
}

/// Loads a course that may be renamed; anything else is reported as missing.
async fn find_elective(state: &AppState, course_id: i64) -> Result<Course, AppError> {
    let course = repository::find_course_by_id(&state.db, course_id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !course.is_elective() {
        return Err(AppError::NotFound);
    }
    Ok(course)
}

async fn edit_elective_form(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let course = find_elective(&state, course_id).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, views::edit_elective(&course, flash)))
}

async fn edit_elective(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    jar: SignedCookieJar,
    Form(form): Form<EditElectiveForm>,
) -> Result<Response, AppError> {
    let course = find_elective(&state, course_id).await?;

    match form.new_name() {
        Some(new_name) => {
            repository::rename_course(&state.db, course_id, new_name).await?;
            info!("course {} renamed to {:?}", course_id, new_name);
            let jar = flash::push(jar, Flash::CourseRenamed);
            Ok((jar, Redirect::to("/current_courses")).into_response())
        }
        None => {
            let (jar, flash) = flash::take(jar);
            Ok((jar, views::edit_elective(&course, flash)).into_response())
        }
    }
}
