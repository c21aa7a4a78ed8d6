//! Error types shared across the polyset crates.

use thiserror::Error;

/// Errors raised for caller contract violations.
///
/// Geometric non-solutions are *not* errors; they are reported as `None`
/// results by the clipping layer (see `polyset-clip`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A ring or polygon failed structural validation.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A clip request was malformed (e.g. no clip operands supplied).
    #[error("invalid clip request: {0}")]
    InvalidClip(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
