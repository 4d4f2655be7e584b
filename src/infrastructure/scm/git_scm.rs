use super::scm_interface::{CloneInvoker, ScmError};
use crate::domain::entities::batch_config::RepositoryDescriptor;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default client looked up on PATH
pub const DEFAULT_GIT_EXECUTABLE: &str = "git";

/// Git implementation of the clone capability.
///
/// Runs `<git> clone -b <branch> <url> <destination>` with stdout and stderr
/// inherited so progress shows up live.
#[derive(Debug, Clone)]
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: DEFAULT_GIT_EXECUTABLE.to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.git_executable
    }

    /// Arguments passed to the client, in order
    pub fn clone_args(descriptor: &RepositoryDescriptor, destination: &Path) -> Vec<OsString> {
        vec![
            OsString::from("clone"),
            OsString::from("-b"),
            OsString::from(&descriptor.branch),
            OsString::from(&descriptor.url),
            destination.as_os_str().to_os_string(),
        ]
    }

    /// Human readable command line, used in log lines and failure messages
    pub fn describe(&self, descriptor: &RepositoryDescriptor, destination: &Path) -> String {
        format!(
            "{} clone -b {} {} {}",
            self.git_executable,
            descriptor.branch,
            descriptor.url,
            destination.display()
        )
    }
}

#[async_trait]
impl CloneInvoker for GitScm {
    async fn invoke_clone(
        &self,
        descriptor: &RepositoryDescriptor,
        destination: &Path,
    ) -> Result<(), ScmError> {
        let command_line = self.describe(descriptor, destination);
        debug!(command = %command_line, "spawning clone");

        let status = Command::new(&self.git_executable)
            .args(Self::clone_args(descriptor, destination))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ScmError::executable_not_found(&self.git_executable),
                _ => ScmError::from(e),
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(ScmError::command_failed(command_line, code)),
            None => Err(ScmError::terminated(command_line)),
        }
    }
}
