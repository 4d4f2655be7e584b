//! Test fixtures for creating test data

use batch_clone::domain::entities::batch_config::{BatchConfig, RepositoryDescriptor};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Common batch configurations
pub struct BatchFixture;

impl BatchFixture {
    /// Three repositories; the second asks for a branch that does not exist
    pub fn three_with_bad_branch(base: &Path) -> BatchConfig {
        BatchConfig::new(
            base.display().to_string(),
            vec![
                RepositoryDescriptor::new("https://example.com/group/alpha.git", "main"),
                RepositoryDescriptor::new("https://example.com/group/beta.git", "missing"),
                RepositoryDescriptor::new("https://example.com/group/gamma.git", "main"),
            ],
        )
    }

    /// Mix of derived names and explicit paths
    pub fn mixed_paths(base: &Path) -> BatchConfig {
        BatchConfig::new(
            base.display().to_string(),
            vec![
                RepositoryDescriptor::new("https://example.com/group/project.git", "main"),
                RepositoryDescriptor::new("git@example.com:group/tools.git", "dev")
                    .with_path("vendor/tools"),
                RepositoryDescriptor::new("https://example.com/docs", "gh-pages")
                    .with_path("site/docs"),
            ],
        )
    }
}

/// Temporary directory holding a configuration file and a base path
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Base path used by the fixtures; not created up front
    pub fn base_path(&self) -> PathBuf {
        self.root().join("workspace")
    }

    /// Write `content` as a file named `name` and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Serialize `config` as JSON into `repos.json`
    pub fn write_config(&self, config: &BatchConfig) -> PathBuf {
        let json = serde_json::to_string_pretty(config).expect("failed to serialize config");
        self.write_file("repos.json", &json)
    }
}
