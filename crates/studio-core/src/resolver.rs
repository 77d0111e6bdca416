//! Identity resolver
//!
//! Determines the current best available anchor image for a persona: the
//! completed result of its primary headshot, if any. Pure and uncached —
//! the anchor may be produced during the same batch run, so callers
//! re-evaluate rather than hold a stale value.

use studio_model::{ImageRef, Persona};

/// Resolve the persona's current anchor image
///
/// Scans the profile photo specs with the primary-headshot rule (semantic
/// type first, else prompt substring). Returns the result only when that
/// spec is completed; an incomplete or errored headshot yields `None`.
#[must_use]
pub fn resolve_anchor(persona: &Persona) -> Option<ImageRef> {
    persona
        .primary_headshot()
        .and_then(|photo| photo.completed_image())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_model::{PhotoSpec, PhotoUpdate, PRIMARY_HEADSHOT_KIND};

    fn persona_with(images: Vec<PhotoSpec>) -> Persona {
        Persona::new("p", "Test", "Designer").with_profile_images(images)
    }

    fn headshot() -> PhotoSpec {
        PhotoSpec::new("head", "profile/headshot.jpg", "studio portrait", "Headshot")
            .with_kind(PRIMARY_HEADSHOT_KIND)
            .identity()
    }

    #[test]
    fn no_headshot_yields_none() {
        let persona = persona_with(vec![PhotoSpec::new(
            "selfie",
            "profile/selfie.jpg",
            "mirror selfie",
            "Selfie",
        )]);
        assert_eq!(resolve_anchor(&persona), None);
    }

    #[test]
    fn pending_headshot_yields_none() {
        let persona = persona_with(vec![headshot()]);
        assert_eq!(resolve_anchor(&persona), None);
    }

    #[test]
    fn completed_headshot_yields_its_image() {
        let mut photo = headshot();
        let img = ImageRef::from_bytes("image/png", b"anchor");
        photo.apply(PhotoUpdate::completed(img.clone()));

        let persona = persona_with(vec![photo]);
        assert_eq!(resolve_anchor(&persona), Some(img));
    }

    #[test]
    fn errored_headshot_yields_none() {
        let mut photo = headshot();
        photo.apply(PhotoUpdate::errored("boom"));
        let persona = persona_with(vec![photo]);
        assert_eq!(resolve_anchor(&persona), None);
    }

    #[test]
    fn prompt_substring_match_works_without_kind() {
        let mut photo = PhotoSpec::new(
            "head",
            "profile/headshot.jpg",
            "Professional Headshot, neutral background",
            "Headshot",
        );
        let img = ImageRef::from_bytes("image/png", b"anchor");
        photo.apply(PhotoUpdate::completed(img.clone()));

        let persona = persona_with(vec![photo]);
        assert_eq!(resolve_anchor(&persona), Some(img));
    }
}
