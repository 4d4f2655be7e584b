use crate::domain::entities::batch_config::RepositoryDescriptor;
use async_trait::async_trait;
use std::path::Path;

/// Capability that clones one repository into a destination.
///
/// Implementations report failure as a value; a failed clone must never
/// take the rest of the batch down with it.
#[async_trait]
pub trait CloneInvoker: Send + Sync {
    /// Clone `descriptor.url` at `descriptor.branch` into `destination`
    async fn invoke_clone(
        &self,
        descriptor: &RepositoryDescriptor,
        destination: &Path,
    ) -> Result<(), ScmError>;
}

/// Errors that can occur while running the VCS client
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Command execution failed: {command}, exit code: {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    #[error("Command terminated by signal: {command}")]
    Terminated { command: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, exit_code: i32) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
        }
    }

    pub fn terminated(command: impl Into<String>) -> Self {
        Self::Terminated {
            command: command.into(),
        }
    }

    /// Short hint shown next to clone failures
    pub fn hint(&self) -> &'static str {
        match self {
            Self::ExecutableNotFound { .. } => "is the VCS client installed and on PATH?",
            Self::CommandFailed { .. } => {
                "possible causes: branch does not exist, destination exists and is not empty, \
                 insufficient permissions, network failure"
            }
            Self::Terminated { .. } => "the client was interrupted",
            Self::IoError { .. } => "the client could not be started",
        }
    }
}
