//! Studio Model - Persona Studio data model
//!
//! Defines the persona/category/project/photo containment tree and the
//! record store that performs point updates on it:
//! - `PhotoSpec` and its generation lifecycle
//! - `Persona`, `CategoryData`, `Project` containers
//! - `ImageRef` for completed image payloads
//! - `PersonaStore` with the partial-update contract

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod ids;
pub mod image;
pub mod persona;
pub mod photo;
pub mod seed;
pub mod store;

// Re-exports for convenience
pub use ids::{CategoryId, PersonaId, PhotoId, ProjectId};
pub use image::{ImageDecodeError, ImageRef};
pub use persona::{CategoryData, Persona, Project};
pub use photo::{FieldPatch, PhotoSpec, PhotoStatus, PhotoUpdate, PRIMARY_HEADSHOT_KIND};
pub use store::PersonaStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the studio model
    pub use crate::{
        CategoryData, ImageRef, Persona, PersonaId, PersonaStore, PhotoId, PhotoSpec, PhotoStatus,
        PhotoUpdate, Project,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
