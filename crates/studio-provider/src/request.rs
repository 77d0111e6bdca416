//! Generation requests and prompt mode selection
//!
//! A request carries the raw scene prompt, the model tier, zero-or-more
//! reference images, and whether the caller marked this as an anchor
//! (master headshot) generation. Mode selection is a pure function of the
//! request, so the ordering/propagation logic can be tested without a
//! provider.

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use studio_model::ImageRef;

/// Recognized model tiers (enumeration, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Fast tier
    Flash,
    /// High-fidelity tier with 2K output
    Pro,
}

impl ModelTier {
    /// Provider-side model identifier
    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            Self::Flash => "gemini-2.5-flash-image",
            Self::Pro => "gemini-3-pro-image-preview",
        }
    }

    /// Provider-side image size, when the tier implies one
    #[must_use]
    pub fn image_size(self) -> Option<&'static str> {
        match self {
            Self::Flash => None,
            Self::Pro => Some("2K"),
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_id())
    }
}

/// A single-item generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Scene/character prompt text
    pub prompt: String,
    /// Model tier to use
    pub tier: ModelTier,
    /// Reference images to preserve identity from
    pub references: Vec<ImageRef>,
    /// Caller marked this as an anchor/headshot generation
    pub anchor_generation: bool,
}

impl GenerationRequest {
    /// Create a scene request with no references
    pub fn new(prompt: impl Into<String>, tier: ModelTier) -> Self {
        Self {
            prompt: prompt.into(),
            tier,
            references: Vec::new(),
            anchor_generation: false,
        }
    }

    /// With reference images
    #[must_use]
    pub fn with_references(mut self, references: Vec<ImageRef>) -> Self {
        self.references = references;
        self
    }

    /// Mark as an anchor generation
    #[must_use]
    pub fn anchor(mut self) -> Self {
        self.anchor_generation = true;
        self
    }

    /// Prompt mode this request resolves to
    #[inline]
    #[must_use]
    pub fn mode(&self) -> PromptMode {
        PromptMode::select(self)
    }

    /// Final prompt text sent to the provider
    #[must_use]
    pub fn final_prompt(&self) -> String {
        self.mode().render(&self.prompt)
    }
}

/// The three mutually exclusive prompting strategies, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// References supplied: force the referenced identity into the scene
    Reference,
    /// No references, anchor requested: produce the master reference image
    AnchorGeneration,
    /// Default: honor the prompt's own lighting/camera direction
    Scene,
}

impl PromptMode {
    /// Select the mode for a request
    #[must_use]
    pub fn select(req: &GenerationRequest) -> Self {
        if !req.references.is_empty() {
            Self::Reference
        } else if req.anchor_generation {
            Self::AnchorGeneration
        } else {
            Self::Scene
        }
    }

    /// Wrap the raw prompt in the mode's identity-enforcement preamble
    #[must_use]
    pub fn render(self, prompt: &str) -> String {
        match self {
            Self::Reference => format!(
                "STRICT IDENTITY CONSISTENCY MODE:\n\
                 The person in the attached reference images is the ONLY valid character for this scene.\n\
                 - MAINTAIN EXACT FACIAL BIOMETRICS: Replicate eye shape, nose bridge, jawline, and brow structure exactly.\n\
                 - SKIN TONE & ETHNICITY: Match the specific skin tone depth and undertones precisely.\n\
                 - HAIR & GROOMING: Ensure the hair texture and style matches the master reference.\n\
                 - SCENE INTEGRATION: Place this specific person into the scene described below.\n\
                 \n\
                 SCENE DESCRIPTION: {prompt}"
            ),
            Self::AnchorGeneration => format!(
                "MASTER IDENTITY GENERATION:\n\
                 Generate a high-fidelity, high-resolution professional image to serve as a character's master reference.\n\
                 \n\
                 CHARACTER SPEC: {prompt}\n\
                 STYLE: 85mm lens, sharp focus, professional studio lighting, realistic textures, neutral background."
            ),
            Self::Scene => format!(
                "SCENE GENERATION:\n\
                 {prompt}\n\
                 \n\
                 NOTE: Follow the lighting and camera style described in the prompt exactly \
                 (e.g. if it says \"grainy phone photo\", make it grainy. If it says \"stage lighting\", \
                 use theatrical lighting). Do not force studio lighting unless requested."
            ),
        }
    }
}

/// Single-item image generation adapter
///
/// Implementations call the external provider and return one image or a
/// failure. No side effects beyond the external call.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate one image
    ///
    /// # Errors
    /// `ProviderError::KeyInvalid` when the credential must be re-selected;
    /// any other variant is a transient per-item failure.
    async fn generate(&self, req: GenerationRequest) -> Result<ImageRef, ProviderError>;
}
