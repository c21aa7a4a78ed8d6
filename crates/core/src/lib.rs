//! # Polyset Core
//!
//! Shared foundation for the polyset workspace: the common error type and
//! the ring-level geometric helpers used both when validating caller input
//! and when reassembling clipping results.
//!
//! ## Core Components
//!
//! - [`Error`] / [`Result`]: contract-violation reporting
//! - [`Ring`] / [`Paths`]: the vertex-list ring representation and the
//!   path-collection wire format
//! - [`geom::polygon`]: orientation, area and containment predicates

pub mod error;
pub mod geom;

// Re-exports
pub use error::{Error, Result};
pub use geom::{Paths, Ring};
