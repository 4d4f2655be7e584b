/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (cloning through the git client)
/// - File system operations (configuration files)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::config_store::ConfigStore;
pub use scm::{CloneInvoker, GitScm, ScmError};
