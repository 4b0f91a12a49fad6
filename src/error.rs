//! Error types for navtree operations.
//!
//! Parsing itself never fails; errors come from the outer surfaces:
//! configuration, container selection and icon loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or decorating a navigation fragment.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config file at {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("no element matches `{0}`")]
    ContainerNotFound(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to load icon {src}: {source}")]
    IconLoad {
        src: String,
        source: std::io::Error,
    },

    #[error("icon path escapes the icon root: {0}")]
    InvalidIconPath(String),
}

pub type Result<T> = std::result::Result<T, Error>;
