//! Functional tests for single-item generation outside a batch.
//!
//! Single-shot callers get the provider error back (unlike a batch, which
//! records and continues), must react to the credential-invalid sentinel,
//! and never see a newly generated anchor propagated to other items.

use mockall::mock;
use mockall::predicate::function;
use studio_core::{BatchOrchestrator, CoreError};
use studio_model::{ImageRef, PersonaId, PhotoId, PhotoStatus};
use studio_provider::{GenerationRequest, ImageProvider, ModelTier, PromptMode, ProviderError};
use studio_test_utils::{
    headshot_spec, identity_spec, scene_spec, store_with_profile, test_image, Scripted,
    ScriptedProvider,
};

mock! {
    Provider {}

    #[async_trait::async_trait]
    impl ImageProvider for Provider {
        async fn generate(&self, req: GenerationRequest) -> Result<ImageRef, ProviderError>;
    }
}

fn persona_id() -> PersonaId {
    PersonaId::from("sarah")
}

#[tokio::test]
async fn unknown_photo_is_not_found() {
    let mut store = store_with_profile("sarah", vec![scene_spec("scene")]);
    let orchestrator = BatchOrchestrator::new(ScriptedProvider::always_succeeding(), ModelTier::Pro);

    let result = orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("ghost"), vec![])
        .await;

    assert!(matches!(result, Err(CoreError::PhotoNotFound { .. })));
    // No provider call was made.
    assert_eq!(orchestrator.provider().call_count(), 0);
}

#[tokio::test]
async fn success_completes_the_record() {
    let mut store = store_with_profile("sarah", vec![scene_spec("scene")]);
    let image = test_image("result");
    let provider = ScriptedProvider::new(vec![Scripted::Image(image.clone())]);
    let orchestrator = BatchOrchestrator::new(provider, ModelTier::Flash);

    let produced = orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("scene"), vec![])
        .await
        .unwrap();

    assert_eq!(produced, image);
    let record = store.photo(&persona_id(), &PhotoId::from("scene")).unwrap();
    assert_eq!(record.status, PhotoStatus::Completed);
    assert_eq!(record.image.as_ref(), Some(&image));
}

#[tokio::test]
async fn failure_records_the_error_and_propagates() {
    let mut store = store_with_profile("sarah", vec![scene_spec("scene")]);
    let provider = ScriptedProvider::new(vec![Scripted::Fail("overloaded".into())]);
    let orchestrator = BatchOrchestrator::new(provider, ModelTier::Flash);

    let result = orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("scene"), vec![])
        .await;

    assert!(result.is_err());
    let record = store.photo(&persona_id(), &PhotoId::from("scene")).unwrap();
    assert_eq!(record.status, PhotoStatus::Error);
    assert!(record.error.as_deref().unwrap().contains("overloaded"));
}

#[tokio::test]
async fn key_invalid_is_surfaced_for_reselection() {
    let mut store = store_with_profile("sarah", vec![scene_spec("scene")]);
    let provider = ScriptedProvider::new(vec![Scripted::KeyInvalid]);
    let orchestrator = BatchOrchestrator::new(provider, ModelTier::Pro);

    let err = orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("scene"), vec![])
        .await
        .unwrap_err();

    assert!(err.requires_key_reselection());
    // Still recorded on the item like any failure.
    assert_eq!(
        store.photo(&persona_id(), &PhotoId::from("scene")).unwrap().status,
        PhotoStatus::Error
    );
}

#[tokio::test]
async fn identity_item_resolves_the_stored_anchor() {
    let mut head = headshot_spec("head");
    let anchor = test_image("anchor");
    head.apply(studio_model::PhotoUpdate::completed(anchor.clone()));
    let mut store = store_with_profile("sarah", vec![head, identity_spec("selfie")]);

    let orchestrator = BatchOrchestrator::new(ScriptedProvider::always_succeeding(), ModelTier::Pro);
    orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("selfie"), vec![])
        .await
        .unwrap();

    let calls = orchestrator.provider().calls();
    assert_eq!(calls[0].references, vec![anchor]);
    assert_eq!(calls[0].mode(), PromptMode::Reference);
}

#[tokio::test]
async fn provided_references_take_precedence_over_resolution() {
    let mut head = headshot_spec("head");
    head.apply(studio_model::PhotoUpdate::completed(test_image("stored")));
    let mut store = store_with_profile("sarah", vec![head, identity_spec("selfie")]);

    let explicit = test_image("explicit");
    let orchestrator = BatchOrchestrator::new(ScriptedProvider::always_succeeding(), ModelTier::Pro);
    orchestrator
        .generate_one(
            &mut store,
            &persona_id(),
            &PhotoId::from("selfie"),
            vec![explicit.clone()],
        )
        .await
        .unwrap();

    assert_eq!(orchestrator.provider().calls()[0].references, vec![explicit]);
}

#[tokio::test]
async fn repeated_generation_is_idempotent_per_call() {
    let mut store = store_with_profile("sarah", vec![scene_spec("scene")]);
    let orchestrator = BatchOrchestrator::new(ScriptedProvider::always_succeeding(), ModelTier::Flash);

    for _ in 0..2 {
        orchestrator
            .generate_one(&mut store, &persona_id(), &PhotoId::from("scene"), vec![])
            .await
            .unwrap();
        assert_eq!(
            store.photo(&persona_id(), &PhotoId::from("scene")).unwrap().status,
            PhotoStatus::Completed
        );
    }
    // Exactly two provider calls, no other side effects.
    assert_eq!(orchestrator.provider().call_count(), 2);
}

#[tokio::test]
async fn headshot_single_shot_runs_in_anchor_mode() {
    let mut store = store_with_profile("sarah", vec![headshot_spec("head")]);

    let mut provider = MockProvider::new();
    provider
        .expect_generate()
        .with(function(|req: &GenerationRequest| {
            req.mode() == PromptMode::AnchorGeneration && req.references.is_empty()
        }))
        .times(1)
        .returning(|_| Ok(studio_model::ImageRef::from_bytes("image/png", b"anchor")));

    let orchestrator = BatchOrchestrator::new(provider, ModelTier::Pro);
    orchestrator
        .generate_one(&mut store, &persona_id(), &PhotoId::from("head"), vec![])
        .await
        .unwrap();
}
