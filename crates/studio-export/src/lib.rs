//! Studio Export - portfolio packaging
//!
//! Serializes a persona's completed subtree into a structured document and
//! bundles completed image bytes by storage path into a zip archive. Only
//! photos with a completed result are included; the document shape is the
//! stable contract consumed by downstream site generators.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod bundle;
pub mod document;

// Re-exports for convenience
pub use bundle::{write_bundle, ExportError, DOCUMENT_NAME};
pub use document::{build_document, PortfolioDocument};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
