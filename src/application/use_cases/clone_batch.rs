use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::application::services::directory_provisioner::DirectoryProvisioner;
use crate::application::services::path_resolver::{PathResolver, PathResolverError};
use crate::common::error::BatchCloneError;
use crate::common::result::BatchCloneResult;
use crate::domain::entities::batch_config::{BatchConfig, RepositoryDescriptor};
use crate::infrastructure::scm::{CloneInvoker, ScmError};

/// Batch clone settings
#[derive(Debug, Clone)]
pub struct CloneBatchConfig {
    /// Print operator-facing progress lines
    pub show_progress: bool,
}

impl Default for CloneBatchConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

impl CloneBatchConfig {
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// What happened to one descriptor
#[derive(Debug)]
pub enum ItemOutcome {
    /// The client exited successfully
    Cloned,
    /// No destination could be computed
    Unresolvable(PathResolverError),
    /// The parent directory could not be created; no clone was attempted
    DirectoryFailed(BatchCloneError),
    /// The client ran and failed, or could not be started
    CloneFailed(ScmError),
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Cloned)
    }

    /// Whether the clone command was actually run
    pub fn clone_attempted(&self) -> bool {
        matches!(self, Self::Cloned | Self::CloneFailed(_))
    }
}

/// Per-descriptor record
#[derive(Debug)]
pub struct ItemReport {
    /// Position in the `repos` list
    pub index: usize,
    pub url: String,
    pub branch: String,
    pub destination: Option<PathBuf>,
    pub outcome: ItemOutcome,
}

/// Outcomes of a completed batch, in descriptor order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    pub fn cloned_count(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.items.len() - self.cloned_count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Clones every descriptor of a [`BatchConfig`] in order.
///
/// Only a missing base path or a base directory that cannot be created stop
/// the run; every other failure is recorded against its item and the loop
/// moves on.
pub struct CloneBatchUseCase<I: CloneInvoker> {
    invoker: I,
    provisioner: DirectoryProvisioner,
    config: CloneBatchConfig,
}

impl<I: CloneInvoker> CloneBatchUseCase<I> {
    pub fn new(invoker: I, config: CloneBatchConfig) -> Self {
        Self {
            invoker,
            provisioner: DirectoryProvisioner::new(),
            config,
        }
    }

    pub async fn execute(&self, batch: &BatchConfig) -> BatchCloneResult<BatchReport> {
        // 1. A configuration without a root cannot proceed
        batch.validate()?;

        // 2. Provision the base directory
        let base_path = Path::new(&batch.base_path);
        if let Err(e) = self.provisioner.ensure_dir(base_path).await {
            debug!(base = %base_path.display(), error = %e, "cannot create base directory");
            return Err(e);
        }

        // 3. Process descriptors one at a time
        let resolver = PathResolver::new(base_path);
        let total = batch.repos.len();
        let mut report = BatchReport::default();

        for (index, descriptor) in batch.repos.iter().enumerate() {
            let item = self.process_item(&resolver, index, total, descriptor).await;
            report.items.push(item);
        }

        Ok(report)
    }

    async fn process_item(
        &self,
        resolver: &PathResolver,
        index: usize,
        total: usize,
        descriptor: &RepositoryDescriptor,
    ) -> ItemReport {
        let mut item = ItemReport {
            index,
            url: descriptor.url.clone(),
            branch: descriptor.branch.clone(),
            destination: None,
            outcome: ItemOutcome::Cloned,
        };
        let position = format!("[{}/{}]", index + 1, total);

        let destination = match resolver.resolve(descriptor) {
            Ok(resolved) => resolved.path,
            Err(e) => {
                debug!(url = %descriptor.url, error = %e, "skipping repository");
                self.report_failure(&position, &format!("Skipping {}: {}", descriptor.url, e));
                item.outcome = ItemOutcome::Unresolvable(e);
                return item;
            }
        };
        item.destination = Some(destination.clone());

        if let Err(e) = self.provisioner.ensure_parent(&destination).await {
            let failed_path = e.path().map(Path::to_path_buf).unwrap_or_default();
            debug!(
                url = %descriptor.url,
                path = %failed_path.display(),
                error = %e,
                "cannot create parent directory"
            );
            self.report_failure(
                &position,
                &format!(
                    "Failed to prepare {} for {}: {}",
                    failed_path.display(),
                    descriptor.url,
                    e
                ),
            );
            item.outcome = ItemOutcome::DirectoryFailed(e);
            return item;
        }

        if self.config.show_progress {
            println!(
                "{} {} Cloning {} (branch {}) into {}...",
                "::".blue().bold(),
                position,
                descriptor.url,
                descriptor.branch,
                destination.display()
            );
        }

        match self.invoker.invoke_clone(descriptor, &destination).await {
            Ok(()) => {
                info!(url = %descriptor.url, destination = %destination.display(), "cloned");
                if self.config.show_progress {
                    println!(
                        "{} {} Cloned {} (branch {}) into {}",
                        "✓".green().bold(),
                        position,
                        descriptor.url,
                        descriptor.branch,
                        destination.display()
                    );
                }
            }
            Err(e) => {
                debug!(
                    url = %descriptor.url,
                    destination = %destination.display(),
                    error = %e,
                    "clone failed"
                );
                self.report_failure(
                    &position,
                    &format!(
                        "Failed to clone {} into {}: {} ({})",
                        descriptor.url,
                        destination.display(),
                        e,
                        e.hint()
                    ),
                );
                item.outcome = ItemOutcome::CloneFailed(e);
            }
        }

        item
    }

    fn report_failure(&self, position: &str, message: &str) {
        if self.config.show_progress {
            eprintln!("{} {} {}", "✗".red().bold(), position, message);
        }
    }
}
