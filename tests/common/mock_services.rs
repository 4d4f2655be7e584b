//! Mock services for testing
//!
//! A clone capability that records every call instead of spawning a client.

use async_trait::async_trait;
use batch_clone::domain::entities::batch_config::RepositoryDescriptor;
use batch_clone::infrastructure::scm::{CloneInvoker, ScmError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded `invoke_clone` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneCall {
    pub url: String,
    pub branch: String,
    pub destination: PathBuf,
}

/// Records calls and fails for configured branches.
///
/// Successful calls create the destination directory so tests can look at
/// the filesystem the way they would after a real clone.
#[derive(Clone, Default)]
pub struct RecordingInvoker {
    calls: Arc<Mutex<Vec<CloneCall>>>,
    failing_branches: Arc<Mutex<HashSet<String>>>,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every clone of `branch` fail with exit code 128
    pub fn fail_on_branch(self, branch: &str) -> Self {
        self.failing_branches
            .lock()
            .unwrap()
            .insert(branch.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CloneCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CloneInvoker for RecordingInvoker {
    async fn invoke_clone(
        &self,
        descriptor: &RepositoryDescriptor,
        destination: &Path,
    ) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(CloneCall {
            url: descriptor.url.clone(),
            branch: descriptor.branch.clone(),
            destination: destination.to_path_buf(),
        });

        if self
            .failing_branches
            .lock()
            .unwrap()
            .contains(&descriptor.branch)
        {
            return Err(ScmError::command_failed(
                format!(
                    "fake-git clone -b {} {} {}",
                    descriptor.branch,
                    descriptor.url,
                    destination.display()
                ),
                128,
            ));
        }

        std::fs::create_dir_all(destination)?;
        Ok(())
    }
}
