//! Errors for the differ library
//!
//! Enumeration for all errors that can occur while configuring, reading
//! or diffing the watched file pair.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DifferError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("File not readable: {0}")]
    PermissionDenied(PathBuf),

    #[error("File must be UTF-8 encoded: {0}")]
    Encoding(PathBuf),

    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Failed to generate diff: {0}")]
    Diff(#[source] Box<DifferError>),
}

impl DifferError {
    pub fn configuration(msg: impl AsRef<str>) -> Self {
        DifferError::Configuration(String::from(msg.as_ref()))
    }

    pub fn not_found(path: impl AsRef<Path>) -> Self {
        DifferError::NotFound(path.as_ref().to_path_buf())
    }

    pub fn permission_denied(path: impl AsRef<Path>) -> Self {
        DifferError::PermissionDenied(path.as_ref().to_path_buf())
    }

    pub fn encoding(path: impl AsRef<Path>) -> Self {
        DifferError::Encoding(path.as_ref().to_path_buf())
    }

    /// Wrap a failure that happened while computing a diff. Already-wrapped
    /// errors pass through so the cause is never double-boxed.
    pub fn diff(err: DifferError) -> Self {
        match err {
            DifferError::Diff(_) => err,
            other => DifferError::Diff(Box::new(other)),
        }
    }
}
