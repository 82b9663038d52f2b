//! Error handling for the provider project library.
//!
//! This module defines the `Error` type produced by the settings loader and the
//! command generator adapter, along with a convenient `Result` alias. The
//! invoker in [`crate::invoke`] does not use it directly: it returns whatever
//! error type the generator it drives declares.
//!
//! # Examples
//!
//! ```
//! use provider_project_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("no provider name configured"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::process::ExitStatus;

use thiserror::Error;

/// Result type for provider project operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for provider project operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Template engine error while rendering the launcher script
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generator program could not be started
    #[error("Failed to launch generator `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator ran and reported failure
    #[error("Generator `{program}` failed: {status}")]
    Synthesis { program: String, status: ExitStatus },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Exit code of a failed synthesis, if the generator exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Synthesis { status, .. } => status.code(),
            _ => None,
        }
    }
}
