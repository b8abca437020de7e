use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::note::note_time_now;
use crate::models::{NewNote, Note};
use crate::uploads::{self, UploadStore};

/// Image payload submitted alongside a note.
#[derive(Debug, Clone)]
pub struct NoteImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Note mutations that touch both the database and the upload sink.
pub struct NoteService {
    db: SqlitePool,
    uploads: Arc<dyn UploadStore>,
}

impl NoteService {
    pub fn new(db: SqlitePool, uploads: Arc<dyn UploadStore>) -> Self {
        Self { db, uploads }
    }

    /// Adds a note to an existing course, storing the image first if one was sent.
    pub async fn add(
        &self,
        course_id: i64,
        body: Option<String>,
        image: Option<NoteImage>,
    ) -> Result<Note, AppError> {
        if repository::find_course_by_id(&self.db, course_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        let image_path = match image {
            Some(image) => {
                let name = uploads::stored_file_name(&image.file_name, note_time_now())
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("invalid file name: {}", image.file_name))
                    })?;
                self.uploads.save(&name, &image.bytes).await?;
                Some(name)
            }
            None => None,
        };

        let new_note = NewNote {
            course_id,
            body,
            image_path: image_path.clone(),
        };

        match repository::insert_note(&self.db, new_note).await {
            Ok(note) => {
                info!("note {} added to course {}", note.id, course_id);
                Ok(note)
            }
            Err(e) => {
                if let Some(name) = image_path {
                    if let Err(cleanup) = self.uploads.remove(&name).await {
                        warn!("failed to clean up upload {}: {}", name, cleanup);
                    }
                }
                Err(e.into())
            }
        }
    }

    /// Deletes a note and, best-effort, its image. Returns the deleted note.
    pub async fn delete(&self, note_id: i64) -> Result<Note, AppError> {
        let note = repository::find_note_by_id(&self.db, note_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if let Some(name) = &note.image_path {
            match self.uploads.remove(name).await {
                Ok(true) => {}
                Ok(false) => warn!("image {} for note {} was already missing", name, note_id),
                Err(e) => warn!("failed to remove image {} for note {}: {}", name, note_id, e),
            }
        }

        if !repository::delete_note(&self.db, note_id).await? {
            return Err(AppError::NotFound);
        }
        info!("note {} deleted from course {}", note_id, note.course_id);
        Ok(note)
    }

    /// Replaces the note text; `None` clears it.
    pub async fn update_text(&self, note_id: i64, body: Option<&str>) -> Result<(), AppError> {
        if repository::update_note_body(&self.db, note_id, body).await? {
            info!("note {} updated", note_id);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Semester;
    use crate::uploads::MemoryUploadStore;

    async fn setup() -> (SqlitePool, Arc<MemoryUploadStore>, i64) {
        let pool = crate::db::connect_in_memory()
            .await
            .expect("Failed to create test db");
        crate::db::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        let dept = repository::insert_department(&pool, "Software Engineering")
            .await
            .unwrap();
        let course = repository::insert_course(
            &pool,
            dept,
            2,
            Semester::Spring,
            "SE 2230 - DATABASE SYSTEMS",
        )
        .await
        .unwrap();

        (pool, Arc::new(MemoryUploadStore::new()), course)
    }

    #[tokio::test]
    async fn test_add_note_with_image_stores_file_name_only() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool.clone(), store.clone());

        let note = service
            .add(
                course,
                Some("ER diagram".to_string()),
                Some(NoteImage {
                    file_name: "er.png".to_string(),
                    bytes: vec![1, 2, 3],
                }),
            )
            .await
            .unwrap();

        let name = note.image_path.clone().unwrap();
        assert!(name.ends_with("_er.png"));
        assert!(store.contains(&name));

        let stored = repository::find_note_by_id(&pool, note.id).await.unwrap().unwrap();
        assert_eq!(stored.image_path, Some(name));
        assert_eq!(stored.body.as_deref(), Some("ER diagram"));
    }

    #[tokio::test]
    async fn test_add_note_without_text_or_image() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool, store.clone());

        let note = service.add(course, None, None).await.unwrap();
        assert_eq!(note.body, None);
        assert_eq!(note.image_path, None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_note_to_missing_course() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool, store.clone());

        let result = service
            .add(
                course + 1,
                Some("lost".to_string()),
                Some(NoteImage {
                    file_name: "x.png".to_string(),
                    bytes: vec![0],
                }),
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_note_removes_image() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool.clone(), store.clone());

        let note = service
            .add(
                course,
                None,
                Some(NoteImage {
                    file_name: "scan.jpg".to_string(),
                    bytes: vec![9; 16],
                }),
            )
            .await
            .unwrap();

        let deleted = service.delete(note.id).await.unwrap();
        assert_eq!(deleted.course_id, course);
        assert!(store.is_empty());
        assert!(repository::find_note_by_id(&pool, note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_note_tolerates_missing_image() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool.clone(), store.clone());

        let note = service
            .add(
                course,
                Some("with image".to_string()),
                Some(NoteImage {
                    file_name: "gone.png".to_string(),
                    bytes: vec![1],
                }),
            )
            .await
            .unwrap();
        store.remove(note.image_path.as_deref().unwrap()).await.unwrap();

        assert!(service.delete(note.id).await.is_ok());
        assert!(repository::find_note_by_id(&pool, note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_insert_removes_saved_image() {
        let (pool, store, course) = setup().await;
        let service = NoteService::new(pool.clone(), store.clone());

        sqlx::query("DROP TABLE notes")
            .execute(&pool)
            .await
            .expect("Failed to drop notes table");

        let result = service
            .add(
                course,
                Some("never stored".to_string()),
                Some(NoteImage {
                    file_name: "orphan.png".to_string(),
                    bytes: vec![7; 8],
                }),
            )
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_update_missing_note() {
        let (pool, store, _) = setup().await;
        let service = NoteService::new(pool, store);

        assert!(matches!(service.delete(99).await, Err(AppError::NotFound)));
        assert!(matches!(service.update_text(99, Some("x")).await, Err(AppError::NotFound)));
    }
}
