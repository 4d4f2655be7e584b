pub mod prompt;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing::debug;

use crate::application::use_cases::clone_batch::{CloneBatchConfig, CloneBatchUseCase};
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::scm::{GitScm, DEFAULT_GIT_EXECUTABLE};

/// batch-clone - clone every repository listed in a JSON file
#[derive(Parser, Debug)]
#[command(name = "batch-clone")]
#[command(about = "Clone every repository listed in a JSON configuration file")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
))]
pub struct Cli {
    /// Configuration file; prompted for on stdin when omitted
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// VCS client used to clone
    #[arg(long = "git", env = "BATCH_CLONE_GIT", default_value = DEFAULT_GIT_EXECUTABLE)]
    pub git_executable: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_clone().await {
            Ok(_) => Ok(()),
            Err(e) => {
                debug!(error = %format!("{:#}", e), "batch aborted");
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_clone(&self) -> anyhow::Result<()> {
        let config_path = match &self.cli.config {
            Some(path) => path.clone(),
            None => prompt::prompt_config_path()?,
        };

        let batch = ConfigStore::new().load(&config_path).await?;

        let invoker = GitScm::with_executable(&self.cli.git_executable);
        let use_case = CloneBatchUseCase::new(invoker, CloneBatchConfig::default());
        use_case.execute(&batch).await?;

        Ok(())
    }
}
