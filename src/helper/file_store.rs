use crate::models::GalleryImage;
use actix_web::web::{self, Bytes};
use futures_util::{Stream, StreamExt};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Public prefix every locator starts with; the upload directory is served under `/uploads`.
pub const LOCATOR_PREFIX: &str = "uploads";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file was uploaded.")]
    MissingFile,
    #[error("Malformed multipart payload: {0}")]
    Multipart(actix_multipart::MultipartError),
    #[error("File is too large. Maximum size is {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Blocking task failed: {0}")]
    Blocking(actix_web::error::BlockingError),
}

impl From<actix_multipart::MultipartError> for UploadError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        UploadError::Multipart(e)
    }
}

impl From<actix_web::error::BlockingError> for UploadError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        UploadError::Blocking(e)
    }
}

/// Writes uploaded bytes under a single directory, keyed by the client's own filename.
///
/// Names are neither sanitized nor de-duplicated: a second upload with the same
/// name overwrites the first file and yields the same locator.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    max_bytes: u64,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self { root: root.into(), max_bytes }
    }

    pub fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    pub fn locator_for(filename: &str) -> String {
        format!("{}/{}", LOCATOR_PREFIX, filename)
    }

    /// Maps a locator back to its on-disk path, if it carries our prefix.
    pub fn path_for_locator(&self, locator: &str) -> Option<PathBuf> {
        locator
            .strip_prefix(LOCATOR_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|filename| self.root.join(filename))
    }

    /// Stages the stream in a temp file next to its destination and renames it into place
    /// only once every chunk fits under the cap. A rejected upload leaves any existing file
    /// with the same name untouched.
    pub async fn save_upload<S, E>(&self, original_filename: &str, mut stream: S) -> Result<GalleryImage, UploadError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        UploadError: From<E>,
    {
        let final_path = self.root.join(original_filename);

        let mut staged = web::block({
            let root = self.root.clone();
            move || NamedTempFile::new_in(root)
        })
        .await??;

        let mut file_size: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let data = chunk?;
            file_size += data.len() as u64;
            if file_size > self.max_bytes {
                if let Err(e) = staged.close() {
                    log::warn!("Could not discard rejected upload of '{}': {}", original_filename, e);
                }
                return Err(UploadError::TooLarge { limit_mb: self.max_bytes / (1024 * 1024) });
            }
            staged = web::block(move || staged.write_all(&data).map(|_| staged)).await??;
        }

        web::block({
            let final_path_clone = final_path.clone();
            move || staged.persist(final_path_clone)
        })
        .await?
        .map_err(|e| e.error)?;

        log::info!("Stored upload '{}' ({} bytes)", final_path.display(), file_size);

        Ok(GalleryImage {
            url: Self::locator_for(original_filename),
            filename: original_filename.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_multipart::MultipartError;
    use futures_util::stream;

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = Result<Bytes, MultipartError>> + Unpin {
        stream::iter(parts.iter().map(|p| Ok(Bytes::from_static(*p))).collect::<Vec<_>>())
    }

    #[test]
    fn locators_map_back_to_the_upload_dir() {
        let store = FileStore::new("/srv/uploads", 1024);
        assert_eq!(FileStore::locator_for("a.png"), "uploads/a.png");
        assert_eq!(store.path_for_locator("uploads/a.png"), Some(PathBuf::from("/srv/uploads/a.png")));
        assert_eq!(store.path_for_locator("elsewhere/a.png"), None);
    }

    #[actix_web::test]
    async fn writes_stream_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), 1024);

        let image = store.save_upload("cat.png", chunks(&[b"abc", b"def"])).await.unwrap();

        assert_eq!(image.url, "uploads/cat.png");
        assert_eq!(image.filename, "cat.png");
        assert_eq!(fs::read(dir.path().join("cat.png")).unwrap(), b"abcdef");
    }

    #[actix_web::test]
    async fn same_name_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), 1024);

        let first = store.save_upload("a.png", chunks(&[b"first upload, longer"])).await.unwrap();
        let second = store.save_upload("a.png", chunks(&[b"second"])).await.unwrap();

        assert_eq!(first.url, second.url);
        assert_eq!(fs::read(dir.path().join("a.png")).unwrap(), b"second");
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), 4);

        let err = store.save_upload("big.bin", chunks(&[b"abc", b"de"])).await.unwrap_err();

        assert!(matches!(err, UploadError::TooLarge { .. }));
        assert!(!dir.path().join("big.bin").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn rejected_upload_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), 8);

        store.save_upload("a.png", chunks(&[b"original"])).await.unwrap();
        let err = store.save_upload("a.png", chunks(&[b"far too", b" many bytes"])).await.unwrap_err();

        assert!(matches!(err, UploadError::TooLarge { .. }));
        assert_eq!(fs::read(dir.path().join("a.png")).unwrap(), b"original");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[actix_web::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist"), 1024);

        let err = store.save_upload("a.png", chunks(&[b"x"])).await.unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
    }
}
