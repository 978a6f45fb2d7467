//! Kitchen loading errors.

use crate::builder::ConfigurationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a kitchen definition.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The kitchen file could not be read
    #[error("Failed to read kitchen file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid kitchen TOML
    #[error("Failed to parse kitchen TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition parsed but its palette or recipes are invalid
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
