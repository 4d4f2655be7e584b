use std::path::Path;
use tokio::fs as async_fs;
use tracing::debug;

use crate::common::error::BatchCloneError;
use crate::common::result::BatchCloneResult;

/// Creates the directories a clone needs. Every operation is idempotent.
#[derive(Debug, Clone, Default)]
pub struct DirectoryProvisioner;

impl DirectoryProvisioner {
    pub fn new() -> Self {
        Self
    }

    /// Ensure `path` itself exists as a directory, creating missing ancestors.
    pub async fn ensure_dir(&self, path: &Path) -> BatchCloneResult<()> {
        debug!(path = %path.display(), "ensuring directory");
        async_fs::create_dir_all(path)
            .await
            .map_err(|e| BatchCloneError::directory_error(path, e))
    }

    /// Ensure the parent of `target` exists. A target without a parent
    /// component needs nothing.
    pub async fn ensure_parent(&self, target: &Path) -> BatchCloneResult<()> {
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.ensure_dir(parent).await,
            _ => Ok(()),
        }
    }
}
