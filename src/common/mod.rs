//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error type and the owned XML tree the
//! formula and document mappers are built on.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::{XmlElement, XmlNode};
