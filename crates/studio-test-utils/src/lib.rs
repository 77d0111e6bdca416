//! Testing utilities for the Persona Studio workspace
//!
//! Shared fixtures: a scripted image provider that records every request,
//! plus persona/photo builders used across orchestrator and export tests.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use studio_model::{ImageRef, Persona, PersonaStore, PhotoSpec, PRIMARY_HEADSHOT_KIND};
use studio_provider::{GenerationRequest, ImageProvider, ProviderError};

/// Scripted outcome for one provider call
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Succeed with this image
    Image(ImageRef),
    /// Fail with a provider-reported message
    Fail(String),
    /// Fail with the credential-invalid sentinel
    KeyInvalid,
    /// Respond without an image part
    NoImage,
}

/// Image provider driven by a script of per-call outcomes
///
/// Pops one scripted outcome per call (falling back to a generic success
/// when the script runs dry) and records every request for assertions.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that succeeds on every call with distinct payloads
    pub fn always_succeeding() -> Self {
        Self::default()
    }

    /// Requests seen so far, in call order
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ImageProvider for ScriptedProvider {
    async fn generate(&self, req: GenerationRequest) -> Result<ImageRef, ProviderError> {
        let call_index = {
            let mut calls = self.calls.lock();
            calls.push(req);
            calls.len()
        };

        match self.script.lock().pop_front() {
            Some(Scripted::Image(image)) => Ok(image),
            Some(Scripted::Fail(message)) => Err(ProviderError::Api { message }),
            Some(Scripted::KeyInvalid) => Err(ProviderError::KeyInvalid),
            Some(Scripted::NoImage) => Err(ProviderError::NoImage),
            None => Ok(test_image(&format!("generated-{call_index}"))),
        }
    }
}

/// Install a fmt subscriber for test output, honoring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic image payload for fixtures
pub fn test_image(marker: &str) -> ImageRef {
    ImageRef::from_bytes("image/png", marker.as_bytes())
}

/// A pending primary headshot spec
pub fn headshot_spec(id: &str) -> PhotoSpec {
    PhotoSpec::new(
        id,
        format!("profile/{id}.jpg"),
        "Professional studio portrait, costume designer",
        "Professional Headshot",
    )
    .with_kind(PRIMARY_HEADSHOT_KIND)
    .identity()
}

/// A pending identity selfie spec (anchor-dependent, not a headshot)
pub fn identity_spec(id: &str) -> PhotoSpec {
    PhotoSpec::new(
        id,
        format!("profile/{id}.jpg"),
        "Smartphone mirror selfie backstage",
        "Backstage Selfie",
    )
    .identity()
}

/// A pending non-identity scene spec
pub fn scene_spec(id: &str) -> PhotoSpec {
    PhotoSpec::new(
        id,
        format!("scenes/{id}.jpg"),
        "Costume photography on dress form, dramatic lighting",
        "Scene",
    )
}

/// Persona with the given profile images, no categories
pub fn persona_with_profile(id: &str, images: Vec<PhotoSpec>) -> Persona {
    Persona::new(id, "Test Persona", "Costume Designer")
        .with_base_prompt("costume designer test persona")
        .with_profile_images(images)
}

/// Store holding a single persona built from the given profile images
pub fn store_with_profile(persona_id: &str, images: Vec<PhotoSpec>) -> PersonaStore {
    PersonaStore::new(vec![persona_with_profile(persona_id, images)])
}
