//! Error types for the studio core

use studio_model::{PersonaId, PhotoId};
use studio_provider::ProviderError;

/// Core orchestration error
///
/// Batch runs never surface per-item failures as errors; these are the
/// single-shot generation failure modes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested photo does not exist under the persona
    #[error("photo {photo_id} not found under persona {persona_id}")]
    PhotoNotFound {
        /// Persona searched
        persona_id: PersonaId,
        /// Photo requested
        photo_id: PhotoId,
    },

    /// Provider failure; `KeyInvalid` must be handled by re-selecting the
    /// credential before retrying
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether the caller must re-select a credential before any further
    /// single-shot call
    #[inline]
    #[must_use]
    pub fn requires_key_reselection(&self) -> bool {
        matches!(self, Self::Provider(e) if e.is_key_invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_invalid_requires_reselection() {
        let err = CoreError::from(ProviderError::KeyInvalid);
        assert!(err.requires_key_reselection());

        let err = CoreError::from(ProviderError::NoImage);
        assert!(!err.requires_key_reselection());
    }

    #[test]
    fn not_found_names_both_ids() {
        let err = CoreError::PhotoNotFound {
            persona_id: PersonaId::from("sarah"),
            photo_id: PhotoId::from("ghost"),
        };
        let msg = err.to_string();
        assert!(msg.contains("sarah") && msg.contains("ghost"));
    }
}
