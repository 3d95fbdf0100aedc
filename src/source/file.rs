// src/source/file.rs

//! Local filesystem source.

use std::path::PathBuf;

use async_trait::async_trait;

use super::DocumentSource;
use crate::error::{AppError, Result};

/// Reads the document from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::load(&self.location, "file not found"))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
