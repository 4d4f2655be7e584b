use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchCloneError {
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        message: String,
        file_path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        field: Option<String>,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {message}")]
    InputError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl BatchCloneError {
    pub fn parse_error(message: impl Into<String>, file_path: Option<PathBuf>) -> Self {
        Self::ParseError {
            message: message.into(),
            file_path,
            source: None,
        }
    }

    pub fn parse_error_with_source(
        message: impl Into<String>,
        file_path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ParseError {
            message: message.into(),
            file_path,
            source: Some(Box::new(source)),
        }
    }

    pub fn config_error(message: impl Into<String>, field: Option<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            field,
        }
    }

    pub fn directory_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryError {
            path: path.into(),
            source,
        }
    }

    pub fn input_error(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
            source: None,
        }
    }

    pub fn input_error_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ParseError { file_path, .. } => file_path.as_deref(),
            Self::DirectoryError { path, .. } => Some(path.as_path()),
            Self::ConfigError { .. } | Self::InputError { .. } => None,
        }
    }
}
