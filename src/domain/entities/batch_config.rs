use serde::{Deserialize, Deserializer, Serialize};

use crate::common::error::BatchCloneError;
use crate::common::result::BatchCloneResult;

/// One entry of the `repos` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Remote locator handed to the VCS client
    pub url: String,

    /// Ref to check out after cloning
    pub branch: String,

    /// Subdirectory of the base path to clone into. Absent, `null` and `""`
    /// all mean "derive it from the URL".
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub path: Option<String>,
}

impl RepositoryDescriptor {
    pub fn new(url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            branch: branch.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.is_empty() { None } else { Some(path) };
        self
    }

    /// The explicit subdirectory override, if one was given.
    pub fn path_override(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Root directory every repository is placed under
    #[serde(default)]
    pub base_path: String,

    /// Repositories in clone order. Absent and `null` both mean none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repos: Vec<RepositoryDescriptor>,
}

impl BatchConfig {
    pub fn new(base_path: impl Into<String>, repos: Vec<RepositoryDescriptor>) -> Self {
        Self {
            base_path: base_path.into(),
            repos,
        }
    }

    pub fn has_base_path(&self) -> bool {
        !self.base_path.is_empty()
    }

    /// A configuration without a base path cannot place anything
    pub fn validate(&self) -> BatchCloneResult<()> {
        if !self.has_base_path() {
            return Err(BatchCloneError::config_error(
                "basePath is not set in the configuration",
                Some("basePath".to_string()),
            ));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RepositoryDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<RepositoryDescriptor>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
