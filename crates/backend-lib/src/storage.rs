// ============================
// mediagate-backend/src/storage.rs
// ============================
//! Storage abstraction with flat-file implementation.
use async_trait::async_trait;
use chrono::Utc;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{fs as tokio_fs, io::AsyncWriteExt};

use crate::error::AppError;

/// Longest file extension carried over from the client's filename
const MAX_EXTENSION_LEN: usize = 10;

/// Attempts at finding a free name when uploads share a timestamp
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Trait for media storage backends
#[async_trait]
pub trait Storage: Send + Sync {
    /// Open a new, uniquely named media file for writing
    async fn begin_upload(&self, original_name: Option<&str>) -> Result<MediaWriter, AppError>;
}

/// An in-progress upload
pub struct MediaWriter {
    path: PathBuf,
    file: tokio_fs::File,
    written: u64,
}

impl MediaWriter {
    /// Append a chunk of the uploaded body
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), AppError> {
        self.file.write_all(chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    /// Flush to disk and report where the file landed and its size
    pub async fn finish(mut self) -> Result<(PathBuf, u64), AppError> {
        self.file.flush().await?;
        self.file.sync_all().await?;
        Ok((self.path, self.written))
    }

    /// Remove a partially written file
    pub async fn discard(self) {
        drop(self.file);
        if let Err(e) = tokio_fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), "Failed to remove partial upload: {e}");
        }
    }
}

/// Flat-file implementation of the Storage trait
#[derive(Clone)]
pub struct FlatFileStorage {
    root: PathBuf,
}

impl FlatFileStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Timestamp-derived file stem, e.g. `20261018T142501.123`
fn timestamp_stem() -> String {
    Utc::now().format("%Y%m%dT%H%M%S%.3f").to_string()
}

/// Extension of the client's filename when it is short and alphanumeric
fn sanitized_extension(original_name: Option<&str>) -> Option<String> {
    let ext = Path::new(original_name?).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn file_name(stem: &str, attempt: u32, ext: Option<&str>) -> String {
    let mut name = if attempt == 0 {
        stem.to_string()
    } else {
        format!("{stem}-{attempt}")
    };
    if let Some(ext) = ext {
        name.push('.');
        name.push_str(ext);
    }
    name
}

#[async_trait]
impl Storage for FlatFileStorage {
    async fn begin_upload(&self, original_name: Option<&str>) -> Result<MediaWriter, AppError> {
        tokio_fs::create_dir_all(&self.root).await?;

        let stem = timestamp_stem();
        let ext = sanitized_extension(original_name);

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.root.join(file_name(&stem, attempt, ext.as_deref()));
            match tokio_fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    return Ok(MediaWriter {
                        path,
                        file,
                        written: 0,
                    })
                },
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(AppError::Io(e)),
            }
        }

        Err(AppError::Internal(format!(
            "no free media file name for stem {stem}"
        )))
    }
}
