//! Studio Core - identity anchoring and batch orchestration
//!
//! The only component with multi-item sequencing logic:
//! - `resolve_anchor` determines the current best anchor image per persona
//! - `BatchOrchestrator` orders pending photos, threads the evolving anchor
//!   through a strictly sequential run, records per-item outcomes through
//!   the record store, reports progress, and honors cooperative cancellation
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_core::{BatchOrchestrator, CancelToken, NoProgress};
//! use studio_model::seed;
//! use studio_provider::ModelTier;
//!
//! # async fn example(provider: impl studio_provider::ImageProvider) {
//! let mut store = seed::seed_store();
//! let persona_id = store.personas()[0].id.clone();
//! let pending = store.pending_photos(&persona_id);
//!
//! let orchestrator = BatchOrchestrator::new(provider, ModelTier::Pro);
//! let report = orchestrator
//!     .run_batch(&mut store, &persona_id, pending, &CancelToken::new(), &NoProgress)
//!     .await;
//! println!("completed {} of {}", report.completed, report.total);
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cancel;
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod resolver;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use error::CoreError;
pub use orchestrator::{order_for_batch, BatchOrchestrator, BatchReport};
pub use progress::{BatchProgress, ChannelProgress, NoProgress, ProgressSink};
pub use resolver::resolve_anchor;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the studio core
    pub use crate::{
        resolve_anchor, BatchOrchestrator, BatchProgress, BatchReport, CancelToken, CoreError,
        NoProgress, ProgressSink,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
