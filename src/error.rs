//! Error types shared by the configuration, display and clipboard layers.
//!
//! The calculator engine itself never fails: bad arithmetic yields NaN or
//! infinity and unknown symbols are ignored.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("display text '{0}' is not a number")]
    InvalidDisplay(String),

    #[error("failed to access clipboard")]
    ClipboardAccess(#[source] arboard::Error),

    #[error("failed to copy to clipboard")]
    ClipboardWrite(#[source] arboard::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CalcError> = std::result::Result<T, E>;
