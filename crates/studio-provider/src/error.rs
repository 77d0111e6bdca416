//! Provider error taxonomy
//!
//! All provider failures are transient per-item errors except `KeyInvalid`,
//! a distinguished sentinel: the caller's credential is no longer usable and
//! must be re-selected before any further single-shot call. Within a batch
//! run it is still recorded like any other per-item failure.

/// Image provider failure
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The configured credential was rejected; callers must force
    /// re-selection before retrying single-shot generation
    #[error("provider credential invalid, re-selection required")]
    KeyInvalid,

    /// The provider responded but carried no inline image part
    #[error("the model did not return an image part")]
    NoImage,

    /// Provider-reported failure
    #[error("provider error: {message}")]
    Api {
        /// Message reported by the provider
        message: String,
    },

    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    /// Whether this is the credential-invalid sentinel
    #[inline]
    #[must_use]
    pub fn is_key_invalid(&self) -> bool {
        matches!(self, Self::KeyInvalid)
    }

    /// Classify a provider-reported message, mapping known credential
    /// failures to the sentinel
    #[must_use]
    pub fn from_api_message(message: String) -> Self {
        if message.contains("entity was not found") || message.contains("403") {
            Self::KeyInvalid
        } else {
            Self::Api { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_messages_map_to_sentinel() {
        assert!(
            ProviderError::from_api_message("Requested entity was not found.".into())
                .is_key_invalid()
        );
        assert!(ProviderError::from_api_message("HTTP 403: forbidden".into()).is_key_invalid());
    }

    #[test]
    fn ordinary_messages_stay_api_errors() {
        let err = ProviderError::from_api_message("quota exceeded".into());
        assert!(!err.is_key_invalid());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
