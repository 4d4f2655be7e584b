use std::fmt;
use thiserror::Error;

/// Errors raised while deriving a directory name from a remote locator
#[derive(Debug, Error, PartialEq)]
pub enum RepoNameError {
    #[error("Empty repository URL")]
    EmptyUrl,

    #[error("Cannot derive a directory name from URL: {0}")]
    NoName(String),
}

/// Directory name derived from the last segment of a repository URL.
///
/// `https://example.com/group/project.git` and `git@example.com:project.git`
/// both yield `project`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    const SEPARATORS: [char; 3] = ['/', '\\', ':'];

    pub fn from_url(url: &str) -> Result<Self, RepoNameError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(RepoNameError::EmptyUrl);
        }

        let last_segment = trimmed
            .trim_end_matches(Self::SEPARATORS)
            .rsplit(Self::SEPARATORS)
            .next()
            .unwrap_or_default();

        let name = last_segment.strip_suffix(".git").unwrap_or(last_segment);

        // "." and ".." would resolve to the base path or its parent
        if name.is_empty() || name == "." || name == ".." {
            return Err(RepoNameError::NoName(url.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for RepoName {
    type Error = RepoNameError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        RepoName::from_url(url)
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
