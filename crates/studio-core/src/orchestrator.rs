//! Batch generation orchestrator
//!
//! Runs an ordered, strictly sequential, cancellable generation pass over a
//! caller-filtered list of photo specs for one persona. Headshot-class
//! items are dispatched first so the anchor exists before any
//! identity-dependent item consumes it; the evolving anchor is threaded
//! through the run as an explicit accumulator, never shared mutable state.
//!
//! Sequencing is deliberate: one provider call completes before the next
//! begins, which guarantees a mid-run headshot result reaches every later
//! identity item and avoids flooding a rate-limited provider. Only one
//! batch may be logically in flight per session; callers gate their trigger
//! while a run is active.

use crate::cancel::CancelToken;
use crate::error::CoreError;
use crate::progress::ProgressSink;
use crate::resolver::resolve_anchor;
use studio_model::{ImageRef, PersonaId, PersonaStore, PhotoId, PhotoSpec, PhotoUpdate};
use studio_provider::{GenerationRequest, ImageProvider, ModelTier, ProviderError};

/// Outcome summary of one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Items in the ordered batch
    pub total: usize,
    /// Items that completed with a result
    pub completed: usize,
    /// Items recorded as errored
    pub failed: usize,
    /// Items skipped because they were already completed
    pub skipped: usize,
    /// Whether the run stopped early on cancellation
    pub cancelled: bool,
}

/// Stable-partition a batch so headshot-class items run first
///
/// Items matching the primary-headshot rule sort before all others;
/// relative order within each partition is preserved.
#[must_use]
pub fn order_for_batch(photos: Vec<PhotoSpec>) -> Vec<PhotoSpec> {
    let (mut headshots, rest): (Vec<_>, Vec<_>) =
        photos.into_iter().partition(PhotoSpec::is_primary_headshot);
    headshots.extend(rest);
    headshots
}

enum StepOutcome {
    Completed,
    Failed,
    Skipped,
}

/// The batch generation orchestrator
///
/// Owns the provider adapter and model tier; the record store is passed in
/// per call, keeping it single-writer for the duration of a run.
#[derive(Debug)]
pub struct BatchOrchestrator<P> {
    provider: P,
    tier: ModelTier,
}

impl<P: ImageProvider> BatchOrchestrator<P> {
    /// Create an orchestrator over a provider
    #[inline]
    #[must_use]
    pub fn new(provider: P, tier: ModelTier) -> Self {
        Self { provider, tier }
    }

    /// Model tier used for every dispatch
    #[inline]
    #[must_use]
    pub fn tier(&self) -> ModelTier {
        self.tier
    }

    /// The underlying provider adapter
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run one batch over `photos` for `persona_id`
    ///
    /// `photos` is the caller-filtered subset to generate (typically
    /// everything not already completed); an empty list is a no-op. Progress
    /// is reported as `(index + 1, total)` before each item. A single item's
    /// failure is recorded on that item and never aborts the batch; there is
    /// no implicit retry. Cancellation is observed at the top of each
    /// iteration only — an in-flight provider call always runs to
    /// completion, and items not yet reached stay untouched.
    pub async fn run_batch(
        &self,
        store: &mut PersonaStore,
        persona_id: &PersonaId,
        photos: Vec<PhotoSpec>,
        cancel: &CancelToken,
        progress: &dyn ProgressSink,
    ) -> BatchReport {
        if photos.is_empty() {
            return BatchReport::default();
        }

        let ordered = order_for_batch(photos);
        let total = ordered.len();
        let mut report = BatchReport {
            total,
            ..BatchReport::default()
        };

        // Anchor seed: may be None when no headshot exists yet or it is not
        // completed; a headshot generated mid-run refreshes it below.
        let mut anchor = store.persona(persona_id).and_then(resolve_anchor);
        tracing::info!(
            %persona_id,
            total,
            anchored = anchor.is_some(),
            "starting batch generation"
        );

        for (index, photo) in ordered.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!(%persona_id, processed = index, total, "batch cancelled");
                report.cancelled = true;
                break;
            }

            progress.progress(index + 1, total);

            let (next_anchor, outcome) = self.step(store, persona_id, photo, anchor).await;
            anchor = next_anchor;
            match outcome {
                StepOutcome::Completed => report.completed += 1,
                StepOutcome::Failed => report.failed += 1,
                StepOutcome::Skipped => report.skipped += 1,
            }
        }

        tracing::info!(
            %persona_id,
            completed = report.completed,
            failed = report.failed,
            skipped = report.skipped,
            cancelled = report.cancelled,
            "batch finished"
        );
        report
    }

    /// Process one item, taking and returning the anchor accumulator
    async fn step(
        &self,
        store: &mut PersonaStore,
        persona_id: &PersonaId,
        photo: &PhotoSpec,
        mut anchor: Option<ImageRef>,
    ) -> (Option<ImageRef>, StepOutcome) {
        let is_headshot = photo.is_primary_headshot();

        // Defensive re-check: the caller filtered to incomplete items, but a
        // completed headshot still refreshes the tracked anchor.
        if let Some(image) = photo.completed_image() {
            if is_headshot {
                anchor = Some(image.clone());
            }
            tracing::debug!(photo_id = %photo.id, "already completed, skipping");
            return (anchor, StepOutcome::Skipped);
        }

        // A headshot never consumes itself as a reference; it always runs in
        // anchor-generation mode.
        let references = match &anchor {
            Some(anchor_image) if photo.is_identity && !is_headshot => {
                vec![anchor_image.clone()]
            }
            _ => Vec::new(),
        };

        match self.dispatch(store, persona_id, photo, references).await {
            Ok(image) => {
                if is_headshot {
                    // Subsequent items in this same run benefit from a
                    // headshot generated mid-run.
                    anchor = Some(image);
                }
                (anchor, StepOutcome::Completed)
            }
            Err(error) => {
                tracing::warn!(photo_id = %photo.id, %error, "generation failed, continuing batch");
                (anchor, StepOutcome::Failed)
            }
        }
    }

    /// Single-item generation outside a batch
    ///
    /// Re-reads the photo from the store (fresher than any caller-held
    /// copy), resolves the persona's current anchor as the reference when
    /// the photo is an identity item and no references were provided, and
    /// records the outcome through the store. Unlike a batch run, a newly
    /// generated anchor is not propagated to any other pending item.
    ///
    /// # Errors
    /// - `CoreError::PhotoNotFound` when the id is unknown under the persona
    /// - `CoreError::Provider` on generation failure; callers must handle
    ///   `requires_key_reselection` before retrying
    pub async fn generate_one(
        &self,
        store: &mut PersonaStore,
        persona_id: &PersonaId,
        photo_id: &PhotoId,
        provided_refs: Vec<ImageRef>,
    ) -> Result<ImageRef, CoreError> {
        let photo = store
            .photo(persona_id, photo_id)
            .cloned()
            .ok_or_else(|| CoreError::PhotoNotFound {
                persona_id: persona_id.clone(),
                photo_id: photo_id.clone(),
            })?;

        let mut references = provided_refs;
        if references.is_empty() && photo.is_identity && !photo.is_primary_headshot() {
            if let Some(anchor) = store.persona(persona_id).and_then(resolve_anchor) {
                references.push(anchor);
            }
        }

        self.dispatch(store, persona_id, &photo, references)
            .await
            .map_err(CoreError::from)
    }

    /// Mark generating, call the provider, record the terminal state
    async fn dispatch(
        &self,
        store: &mut PersonaStore,
        persona_id: &PersonaId,
        photo: &PhotoSpec,
        references: Vec<ImageRef>,
    ) -> Result<ImageRef, ProviderError> {
        store.update_photo(persona_id, &photo.id, PhotoUpdate::generating());

        let mut request =
            GenerationRequest::new(photo.prompt.clone(), self.tier).with_references(references);
        if photo.is_primary_headshot() {
            request = request.anchor();
        }

        match self.provider.generate(request).await {
            Ok(image) => {
                store.update_photo(persona_id, &photo.id, PhotoUpdate::completed(image.clone()));
                Ok(image)
            }
            Err(error) => {
                store.update_photo(persona_id, &photo.id, PhotoUpdate::errored(error.to_string()));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_model::PRIMARY_HEADSHOT_KIND;

    fn headshot(id: &str) -> PhotoSpec {
        PhotoSpec::new(id, format!("profile/{id}.jpg"), "studio portrait", "Head")
            .with_kind(PRIMARY_HEADSHOT_KIND)
            .identity()
    }

    fn scene(id: &str) -> PhotoSpec {
        PhotoSpec::new(id, format!("scenes/{id}.jpg"), "costume on dress form", "Scene")
    }

    #[test]
    fn ordering_puts_headshots_first_preserving_relative_order() {
        let ordered = order_for_batch(vec![
            scene("a"),
            headshot("h1"),
            scene("b"),
            headshot("h2"),
        ]);
        let ids: Vec<_> = ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2", "a", "b"]);
    }

    #[test]
    fn ordering_by_prompt_substring_counts_as_headshot() {
        let by_prompt =
            PhotoSpec::new("p", "profile/p.jpg", "casual Headshot outdoors", "Alt headshot");
        let ordered = order_for_batch(vec![scene("a"), by_prompt]);
        assert_eq!(ordered[0].id.as_str(), "p");
    }

    #[test]
    fn ordering_of_empty_batch_is_empty() {
        assert!(order_for_batch(Vec::new()).is_empty());
    }
}
