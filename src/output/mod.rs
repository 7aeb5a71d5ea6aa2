//! Output module for Robotsmith
//!
//! The one side effect in the crate: persisting a fully materialized
//! `robots.txt` body into the build output directory.

mod writer;

pub use writer::{write_robots_txt, ROBOTS_FILE_NAME};

use thiserror::Error;

/// Errors from persisting the generated file
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output directory does not exist: {0}")]
    MissingDirectory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;
