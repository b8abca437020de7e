use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Notes are stamped in a fixed UTC+03:00 offset.
const NOTE_UTC_OFFSET_SECS: i32 = 3 * 3600;

pub fn note_time_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(NOTE_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub course_id: i64,
    pub body: Option<String>,
    pub image_path: Option<String>,
    pub created_at: String,
}

/// A note joined with the name of the course it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct NoteWithCourse {
    #[sqlx(flatten)]
    pub note: Note,
    pub course_name: String,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub course_id: i64,
    pub body: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    /// Required key; `null` clears the note text.
    #[serde(deserialize_with = "Option::deserialize")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateNoteResponse {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
