//! Credential availability seam
//!
//! Callers consult the gate before starting generation; the orchestrator
//! itself never does. After a `ProviderError::KeyInvalid`, single-shot
//! callers must call `open_key_selector` before retrying.

use async_trait::async_trait;

/// Credential availability check and re-selection trigger
#[async_trait]
pub trait KeyGate: Send + Sync {
    /// Whether a usable credential is currently selected
    async fn has_key(&self) -> bool;

    /// Open the host's credential selector
    async fn open_key_selector(&self);
}

/// Gate for environments without a selectable credential store
///
/// Always reports a key as available and treats selection as a no-op,
/// matching hosts where the credential is fixed at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAvailable;

#[async_trait]
impl KeyGate for AlwaysAvailable {
    async fn has_key(&self) -> bool {
        true
    }

    async fn open_key_selector(&self) {}
}
