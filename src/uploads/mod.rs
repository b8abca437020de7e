//! Storage for images attached to notes.
//!
//! Files are addressed by a single stored file name; the note row keeps only
//! that name, never the bytes.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;

#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), AppError>;
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, AppError>;
    /// Returns `false` when there was nothing to remove.
    async fn remove(&self, name: &str) -> Result<bool, AppError>;
}

/// A stored name must be one plain path component.
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Builds `{YYYYmmdd_HHMMSS}_{8 hex}_{basename}` from a client-supplied file name.
///
/// Only the final path component of `original` is kept. Returns `None` when
/// nothing usable remains.
pub fn stored_file_name(original: &str, now: DateTime<FixedOffset>) -> Option<String> {
    let base = original.rsplit(['/', '\\']).next()?.trim();
    if !is_safe_name(base) {
        return None;
    }

    let suffix = Uuid::new_v4().simple().to_string();
    Some(format!(
        "{}_{}_{}",
        now.format("%Y%m%d_%H%M%S"),
        &suffix[..8],
        base
    ))
}

pub fn content_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        is_safe_name(name).then(|| self.root.join(name))
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), AppError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| AppError::BadRequest(format!("invalid file name: {name}")))?;
        tokio::fs::write(&path, bytes).await?;
        debug!("stored upload {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, AppError> {
        let Some(path) = self.resolve(name) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, name: &str) -> Result<bool, AppError> {
        let Some(path) = self.resolve(name) else {
            return Ok(false);
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("upload already gone: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, handy for tests.
#[derive(Debug, Default)]
pub struct MemoryUploadStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryUploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UploadStore for MemoryUploadStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), AppError> {
        if !is_safe_name(name) {
            return Err(AppError::BadRequest(format!("invalid file name: {name}")));
        }
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned())
    }

    async fn remove(&self, name: &str) -> Result<bool, AppError> {
        Ok(self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name)
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 14, 9, 5, 7)
            .unwrap()
    }

    async fn temp_store() -> LocalUploadStore {
        let dir = std::env::temp_dir().join(format!("coursebook-uploads-{}", Uuid::new_v4()));
        LocalUploadStore::new(dir).await.expect("Failed to create upload dir")
    }

    #[test]
    fn test_stored_file_name_prefixes_timestamp() {
        let name = stored_file_name("whiteboard.png", fixed_time()).unwrap();
        assert!(name.starts_with("20250314_090507_"));
        assert!(name.ends_with("_whiteboard.png"));
        assert_eq!(name.len(), "20250314_090507_".len() + 8 + "_whiteboard.png".len());
    }

    #[test]
    fn test_stored_file_name_strips_directories() {
        let name = stored_file_name("../../etc/passwd", fixed_time()).unwrap();
        assert!(name.ends_with("_passwd"));
        assert!(is_safe_name(&name));

        let windows = stored_file_name("C:\\Users\\me\\scan.jpg", fixed_time()).unwrap();
        assert!(windows.ends_with("_scan.jpg"));

        assert_eq!(stored_file_name("uploads/", fixed_time()), None);
        assert_eq!(stored_file_name("..", fixed_time()), None);
    }

    #[test]
    fn test_is_safe_name() {
        assert!(is_safe_name("20250314_090507_ab12cd34_a.png"));
        assert!(!is_safe_name(""));
        assert!(!is_safe_name(".."));
        assert!(!is_safe_name("a/b.png"));
        assert!(!is_safe_name("a\\b.png"));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("x.PNG"), "image/png");
        assert_eq!(content_type_for("x.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("x"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_local_store_save_read_remove() {
        let store = temp_store().await;

        store.save("note.png", b"png-bytes").await.unwrap();
        assert!(store.root().join("note.png").exists());
        assert_eq!(store.read("note.png").await.unwrap(), Some(b"png-bytes".to_vec()));

        assert!(store.remove("note.png").await.unwrap());
        assert_eq!(store.read("note.png").await.unwrap(), None);
        assert!(!store.remove("note.png").await.unwrap());

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_local_store_rejects_traversal() {
        let store = temp_store().await;

        assert!(matches!(
            store.save("../escape.png", b"x").await,
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(store.read("../escape.png").await.unwrap(), None);
        assert!(!store.remove("../escape.png").await.unwrap());

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryUploadStore::new();
        assert!(store.is_empty());

        store.save("a.png", b"a").await.unwrap();
        assert!(store.contains("a.png"));
        assert_eq!(store.len(), 1);

        assert!(store.remove("a.png").await.unwrap());
        assert!(!store.remove("a.png").await.unwrap());
        assert!(store.is_empty());
    }
}
