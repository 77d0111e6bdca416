//! Photo record store
//!
//! The normalized, addressable collection of personas and their photo
//! specs. All mutation goes through the partial-update contract: locate a
//! photo by identity and patch exactly that leaf, leaving unrelated
//! structure untouched. Updates for unknown identifiers are silent no-ops
//! since the target may have been removed from view concurrently.

use crate::ids::{PersonaId, PhotoId};
use crate::persona::Persona;
use crate::photo::{PhotoSpec, PhotoStatus, PhotoUpdate};

/// In-memory session store for the persona tree
#[derive(Debug, Clone, Default)]
pub struct PersonaStore {
    personas: Vec<Persona>,
}

impl PersonaStore {
    /// Create a store over a set of personas
    #[inline]
    #[must_use]
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// All personas, in seed order
    #[inline]
    #[must_use]
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Look up a persona by id
    #[must_use]
    pub fn persona(&self, persona_id: &PersonaId) -> Option<&Persona> {
        self.personas.iter().find(|p| &p.id == persona_id)
    }

    /// Look up a photo by id under a persona
    #[must_use]
    pub fn photo(&self, persona_id: &PersonaId, photo_id: &PhotoId) -> Option<&PhotoSpec> {
        self.persona(persona_id)?
            .all_photos()
            .find(|p| &p.id == photo_id)
    }

    /// Apply a partial update to one photo
    ///
    /// Locates the photo in the persona's profile images first, then nested
    /// within any category/project. Only the located leaf is touched.
    /// Returns whether a photo was updated; an unknown persona or photo id
    /// is a no-op, never an error.
    pub fn update_photo(
        &mut self,
        persona_id: &PersonaId,
        photo_id: &PhotoId,
        update: PhotoUpdate,
    ) -> bool {
        let Some(persona) = self.personas.iter_mut().find(|p| &p.id == persona_id) else {
            tracing::debug!(%persona_id, %photo_id, "update for unknown persona ignored");
            return false;
        };

        if let Some(photo) = persona
            .profile_images
            .iter_mut()
            .find(|p| &p.id == photo_id)
        {
            photo.apply(update);
            return true;
        }

        for category in &mut persona.categories {
            for project in &mut category.projects {
                if let Some(photo) = project.photos.iter_mut().find(|p| &p.id == photo_id) {
                    photo.apply(update);
                    return true;
                }
            }
        }

        tracing::debug!(%persona_id, %photo_id, "update for unknown photo ignored");
        false
    }

    /// Owned snapshot of every photo not yet completed under a persona
    ///
    /// This is the caller-side filter handed to a batch run: profile images
    /// first, then category/project photos in containment order.
    #[must_use]
    pub fn pending_photos(&self, persona_id: &PersonaId) -> Vec<PhotoSpec> {
        self.persona(persona_id)
            .map(|persona| {
                persona
                    .all_photos()
                    .filter(|p| p.status != PhotoStatus::Completed)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
