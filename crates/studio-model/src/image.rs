//! Image payload references
//!
//! A completed generation is stored as an `ImageRef`: a media type plus a
//! base64 payload. The payload is behind an `Arc` so references can be
//! threaded through a batch run (anchor propagation) without copying image
//! bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reference to an in-memory image payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Media type, e.g. `image/png`
    media_type: String,
    /// Base64-encoded image bytes
    data: Arc<str>,
}

impl ImageRef {
    /// Create from an already base64-encoded payload
    #[inline]
    pub fn new(media_type: impl Into<String>, base64_data: impl Into<Arc<str>>) -> Self {
        Self {
            media_type: media_type.into(),
            data: base64_data.into(),
        }
    }

    /// Create by encoding raw image bytes
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.into(),
            data: STANDARD.encode(bytes).into(),
        }
    }

    /// Media type of the payload
    #[inline]
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Base64 payload as provided by the provider
    #[inline]
    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.data
    }

    /// Decode the payload into raw image bytes
    ///
    /// # Errors
    /// Returns `ImageDecodeError` if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, ImageDecodeError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|source| ImageDecodeError {
                media_type: self.media_type.clone(),
                source,
            })
    }

    /// Render as a `data:` URL for display layers
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Payload could not be decoded
#[derive(Debug, thiserror::Error)]
#[error("invalid base64 image payload ({media_type})")]
pub struct ImageDecodeError {
    /// Media type of the offending payload
    pub media_type: String,
    #[source]
    source: base64::DecodeError,
}
