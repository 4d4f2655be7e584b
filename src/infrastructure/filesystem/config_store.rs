use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::debug;

use crate::common::error::BatchCloneError;
use crate::common::result::{BatchCloneResult, ResultExt};
use crate::domain::entities::batch_config::BatchConfig;

/// On-disk formats the store understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Loads and validates batch configuration files
#[derive(Debug, Clone, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Read, parse and validate the configuration at `path`
    pub async fn load(&self, path: &Path) -> BatchCloneResult<BatchConfig> {
        let content = async_fs::read_to_string(path).await.map_err(|e| {
            BatchCloneError::parse_error_with_source(
                format!("cannot read {}", path.display()),
                Some(path.to_path_buf()),
                e,
            )
        })?;

        let config = self.parse(&content, ConfigFormat::from_path(path), Some(path))?;
        debug!(
            path = %path.display(),
            base_path = %config.base_path,
            repos = config.repos.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(
        &self,
        content: &str,
        format: ConfigFormat,
        origin: Option<&Path>,
    ) -> BatchCloneResult<BatchConfig> {
        let origin_path = origin
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("<input>"));

        let config = match format {
            ConfigFormat::Json => {
                serde_json::from_str::<BatchConfig>(content).parse_context(&origin_path)?
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str::<BatchConfig>(content).parse_context(&origin_path)?
            }
        };

        config.validate()?;
        Ok(config)
    }
}
