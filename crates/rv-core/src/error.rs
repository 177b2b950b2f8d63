//! Framework error type.
//!
//! The algorithm itself is total over its input domain; errors here cover
//! configuration handed in from outside (files, command lines).  Sub-crates
//! define their own error enums for the boundary conditions they own.

use thiserror::Error;

/// The top-level error type for `rv-core`.
#[derive(Debug, Error)]
pub enum RvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `rv-core`.
pub type RvResult<T> = Result<T, RvError>;
