use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::note::note_time_now;
use crate::models::{Course, Department, Membership, NewNote, Note, NoteWithCourse, Semester};

pub async fn fetch_departments(db: &SqlitePool) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_department_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_department_by_name<'e, E>(
    db: E,
    name: &str,
) -> Result<Option<Department>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE name = ?")
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn insert_department<'e, E>(db: E, name: &str) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("INSERT INTO departments (name) VALUES (?)")
        .bind(name)
        .execute(db)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn count_courses_for_department<'e, E>(
    db: E,
    department_id: i64,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses WHERE department_id = ?")
        .bind(department_id)
        .fetch_one(db)
        .await
}

pub async fn insert_course<'e, E>(
    db: E,
    department_id: i64,
    year: i32,
    semester: Semester,
    course_name: &str,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO courses (department_id, year, semester, course_name) VALUES (?, ?, ?, ?)",
    )
    .bind(department_id)
    .bind(year)
    .bind(semester)
    .bind(course_name)
    .execute(db)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_course_by_id<'e, E>(db: E, id: i64) -> Result<Option<Course>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Course>(
        "SELECT id, department_id, year, semester, course_name FROM courses WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_courses_for_year(
    db: &SqlitePool,
    department_id: i64,
    year: i32,
) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, department_id, year, semester, course_name FROM courses WHERE department_id = ? AND year = ? ORDER BY id",
    )
    .bind(department_id)
    .bind(year)
    .fetch_all(db)
    .await
}

pub async fn rename_course(db: &SqlitePool, id: i64, course_name: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE courses SET course_name = ? WHERE id = ?")
        .bind(course_name)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

/// Ids of every course in the current semester, regardless of department or year.
pub async fn fetch_current_course_ids(db: &SqlitePool) -> Result<HashSet<i64>, sqlx::Error> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT course_id FROM current_courses")
        .fetch_all(db)
        .await?;
    Ok(ids.into_iter().collect())
}

/// Current-semester courses, most recently added first.
pub async fn fetch_current_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT c.id, c.department_id, c.year, c.semester, c.course_name
        FROM current_courses cc
        JOIN courses c ON c.id = cc.course_id
        ORDER BY cc.added_at DESC, cc.id DESC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Flips a course in or out of the current semester.
///
/// Runs as one transaction that writes first, so concurrent toggles on the
/// same course serialize on the database write lock. Returns `None` when the
/// course does not exist.
pub async fn toggle_current_course(
    db: &SqlitePool,
    course_id: i64,
) -> Result<Option<Membership>, sqlx::Error> {
    let mut tx = db.begin().await?;

    let removed = sqlx::query("DELETE FROM current_courses WHERE course_id = ?")
        .bind(course_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let membership = if removed > 0 {
        Membership::Removed
    } else {
        if find_course_by_id(&mut *tx, course_id).await?.is_none() {
            return Ok(None);
        }
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        sqlx::query("INSERT INTO current_courses (course_id, added_at) VALUES (?, ?)")
            .bind(course_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        Membership::Added
    };

    tx.commit().await?;
    Ok(Some(membership))
}

pub async fn fetch_notes_for_course(db: &SqlitePool, course_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        "SELECT id, course_id, body, image_path, created_at FROM notes WHERE course_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_all_notes(db: &SqlitePool) -> Result<Vec<NoteWithCourse>, sqlx::Error> {
    sqlx::query_as::<_, NoteWithCourse>(
        "SELECT n.id, n.course_id, n.body, n.image_path, n.created_at, c.course_name
         FROM notes n
         INNER JOIN courses c ON c.id = n.course_id
         ORDER BY n.created_at DESC, n.id DESC",
    )
    .fetch_all(db)
    .await
}

pub async fn find_note_by_id(db: &SqlitePool, id: i64) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>("SELECT id, course_id, body, image_path, created_at FROM notes WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert_note(db: &SqlitePool, new_note: NewNote) -> Result<Note, sqlx::Error> {
    let created_at = note_time_now().to_rfc3339_opts(SecondsFormat::Micros, false);

    let result = sqlx::query(
        "INSERT INTO notes (course_id, body, image_path, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(new_note.course_id)
    .bind(&new_note.body)
    .bind(&new_note.image_path)
    .bind(&created_at)
    .execute(db)
    .await?;

    Ok(Note {
        id: result.last_insert_rowid(),
        course_id: new_note.course_id,
        body: new_note.body,
        image_path: new_note.image_path,
        created_at,
    })
}

pub async fn update_note_body(
    db: &SqlitePool,
    id: i64,
    body: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE notes SET body = ? WHERE id = ?")
        .bind(body)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

pub async fn delete_note(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
