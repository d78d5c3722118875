use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact::Artifact;
use crate::error::ExportError;

/// Publishes an artifact and returns the URL it can be fetched from.
pub trait Uploader {
    fn upload(&self, artifact: &Artifact) -> Result<String, ExportError>;
}

impl<T: Uploader + ?Sized> Uploader for &T {
    fn upload(&self, artifact: &Artifact) -> Result<String, ExportError> {
        (**self).upload(artifact)
    }
}

impl<T: Uploader + ?Sized> Uploader for Box<T> {
    fn upload(&self, artifact: &Artifact) -> Result<String, ExportError> {
        (**self).upload(artifact)
    }
}

/// Writes artifacts into a directory served at `base_url`.
#[derive(Debug, Clone)]
pub struct DirectoryUploader {
    dir: PathBuf,
    base_url: String,
}

impl DirectoryUploader {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file_name)
    }
}

impl Uploader for DirectoryUploader {
    fn upload(&self, artifact: &Artifact) -> Result<String, ExportError> {
        if artifact.file_name.contains(['/', '\\']) || artifact.file_name.starts_with('.') {
            return Err(ExportError::Upload(format!(
                "refusing file name {:?}",
                artifact.file_name
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes)?;

        let url = self.url_for(&artifact.file_name);
        info!(path = %path.display(), bytes = artifact.bytes.len(), %url, "uploaded artifact");
        Ok(url)
    }
}
