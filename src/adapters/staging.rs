use crate::domain::context::RequestContext;
use crate::utils::error::{AnalyzerError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// An upload as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Local directory where uploads are written before extraction.
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the staging directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Writes the upload to a request-unique file. The client filename is never
    /// used to build the path. `data` is moved into the blocking writer.
    pub async fn stage(
        &self,
        ctx: &RequestContext,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<StagedFile> {
        let dir = self.dir.clone();
        let prefix = format!("{}_", ctx.request_id());
        let bytes = data.len();

        let written = tokio::task::spawn_blocking(move || -> std::io::Result<TempPath> {
            let mut file = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(".pdf")
                .tempfile_in(&dir)?;
            file.write_all(&data)?;
            file.flush()?;
            Ok(file.into_temp_path())
        })
        .await
        .map_err(|e| AnalyzerError::internal(format!("staging task failed: {}", e)))?;

        let path = written.map_err(|source| AnalyzerError::StagingError { source })?;

        tracing::debug!(
            request_id = %ctx.request_id(),
            file = %file_name,
            staged = %path.display(),
            bytes,
            "Upload staged"
        );

        Ok(StagedFile {
            path,
            request_id: ctx.request_id().to_string(),
        })
    }
}

/// Handle to a staged upload. The file is removed by [`StagedFile::discard`]
/// or, if that is never reached, when the handle is dropped.
#[derive(Debug)]
pub struct StagedFile {
    path: TempPath,
    request_id: String,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn discard(self) {
        let staged_path = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => tracing::debug!(
                request_id = %self.request_id,
                staged = %staged_path,
                "Staged file removed"
            ),
            Err(e) => tracing::warn!(
                request_id = %self.request_id,
                staged = %staged_path,
                error = %e,
                "Failed to remove staged file"
            ),
        }
    }
}
