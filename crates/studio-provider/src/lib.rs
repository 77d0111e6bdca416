//! Studio Provider - external image-generation adapter
//!
//! The single-item Generation Invoker:
//! - `ImageProvider` trait consumed by the orchestrator
//! - prompt mode selection (reference / anchor-generation / scene)
//! - `GeminiImageClient`, a reqwest-backed implementation
//! - the `KeyInvalid` error sentinel and the `KeyGate` credential seam

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod gemini;
pub mod key;
pub mod request;

// Re-exports for convenience
pub use error::ProviderError;
pub use gemini::GeminiImageClient;
pub use key::{AlwaysAvailable, KeyGate};
pub use request::{GenerationRequest, ImageProvider, ModelTier, PromptMode};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the provider adapter
    pub use crate::{
        GeminiImageClient, GenerationRequest, ImageProvider, KeyGate, ModelTier, PromptMode,
        ProviderError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
