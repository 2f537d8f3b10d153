//! Error types for jot-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A notes folder could not be enumerated
    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hidden notes require a non-empty password
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Decoded hidden note is not valid text
    #[error("Hidden note could not be decoded (wrong password?)")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
