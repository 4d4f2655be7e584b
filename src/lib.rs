//! # batch-clone - clone a list of git repositories
//!
//! `batch-clone` reads a configuration file naming a base directory and a list of
//! repositories, then runs `git clone -b <branch> <url> <destination>` for each of
//! them, one after the other.
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "basePath": "/work",
//!   "repos": [
//!     { "url": "https://example.com/group/project.git", "branch": "main" },
//!     { "url": "https://example.com/group/tools.git", "branch": "dev", "path": "vendor/tools" }
//!   ]
//! }
//! ```
//!
//! The first repository lands in `/work/project` (name taken from the URL), the
//! second in `/work/vendor/tools`.
//!
//! ## Failure policy
//!
//! - An unreadable or malformed file, an empty `basePath`, or a base directory that
//!   cannot be created abort the run with a non-zero exit status.
//! - A repository whose parent directory cannot be created, or whose clone fails,
//!   is reported and skipped; the batch continues and the process exits zero.
//!
//! ## Architecture
//!
//! - [`domain`]: configuration model and value objects
//! - [`application`]: path resolution, directory provisioning and the batch use case
//! - [`infrastructure`]: configuration file loading and the git client
//! - [`presentation`]: CLI interface and operator prompt
//! - [`common`]: shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use batch_clone::application::use_cases::clone_batch::{CloneBatchConfig, CloneBatchUseCase};
//! use batch_clone::infrastructure::{ConfigStore, GitScm};
//! use std::path::Path;
//!
//! # async fn example() -> batch_clone::Result<()> {
//! let batch = ConfigStore::new().load(Path::new("repos.json")).await?;
//! let use_case = CloneBatchUseCase::new(GitScm::new(), CloneBatchConfig::default());
//! let report = use_case.execute(&batch).await?;
//!
//! println!("{} of {} cloned", report.cloned_count(), report.items.len());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::BatchCloneError;
pub use crate::common::result::BatchCloneResult as Result;
