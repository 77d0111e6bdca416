//! Seed fixtures
//!
//! A compact seed portfolio used by demos and tests. Mirrors the shape of
//! production seed content: each persona carries identity-establishing
//! profile images (one primary headshot) plus categorized projects of scene
//! photos.

use crate::persona::{CategoryData, Persona, Project};
use crate::photo::{PhotoSpec, PRIMARY_HEADSHOT_KIND};
use crate::store::PersonaStore;

fn sarah_chen() -> Persona {
    let profile_images = vec![
        PhotoSpec::new(
            "sarah-headshot-primary",
            "profile/headshot-primary.jpg",
            "Professional studio portrait of a 32-year-old Korean-American woman, costume designer, \
             shoulder-length black hair, warm confident smile, soft studio lighting against neutral \
             gray background, professional headshot photography",
            "Professional Headshot",
        )
        .with_kind(PRIMARY_HEADSHOT_KIND)
        .with_description("Primary professional headshot.")
        .with_tags(vec!["profile".into()])
        .identity(),
        PhotoSpec::new(
            "sarah-selfie-backstage",
            "profile/selfie-backstage.jpg",
            "Smartphone mirror selfie of Sarah Chen in theatre backstage dressing room, wearing \
             wireless headset and casual black work clothes, costume racks visible in background, \
             warm overhead lighting",
            "Backstage Selfie",
        )
        .with_kind("selfie")
        .with_description("Casual selfie during tech week.")
        .with_tags(vec!["profile".into()])
        .identity(),
        PhotoSpec::new(
            "sarah-candid-workshop",
            "profile/candid-workshop.jpg",
            "Candid photo of Sarah Chen working backstage during tech rehearsal, examining costume \
             on dress form, measuring tape around neck, fabric swatches in hand, focused expression",
            "Workshop Consultation",
        )
        .with_kind("candid")
        .with_description("Candid shot during fitting.")
        .with_tags(vec!["profile".into()])
        .identity(),
    ];

    let obsidian = Project::new("the-obsidian-crown", "The Obsidian Crown")
        .with_description(
            "An original dark fantasy tragedy exploring themes of power and corruption through costume.",
        )
        .with_photos(vec![
            PhotoSpec::new(
                "obsidian-featured",
                "categories/classical-theater/obsidian/featured.jpg",
                "Professional costume photography of elaborate dark fantasy queen costume on dress \
                 form, midnight black distressed velvet gown with tattered gold embroidery, \
                 dramatic lighting",
                "Queen's Descent - Final",
            )
            .with_description("The Queen's fifth-phase costume showcasing complete moral corruption.")
            .with_tags(vec!["featured".into(), "home_carousel".into()]),
            PhotoSpec::new(
                "obsidian-fitting",
                "categories/classical-theater/obsidian/fitting-lead.jpg",
                "Photo of Sarah Chen pinning hem of black gown on actress, actress looking in \
                 mirror, designer adjusting fabric pool, serious focused atmosphere",
                "Final Fitting: Lead",
            )
            .with_description("Adjusting the hem for the final Act V costume.")
            .identity(),
            PhotoSpec::new(
                "obsidian-embroidery",
                "categories/classical-theater/obsidian/embroidery.jpg",
                "Extreme close-up of intricate gold metallic embroidery on black velvet fabric, \
                 hand-stitching in progress",
                "Curse Symbol Embroidery",
            )
            .with_description("Close-up of hand-embroidered curse symbols."),
        ]);

    let classical = CategoryData::new("classical-theater", "Classical Theater")
        .with_description("Shakespearean drama and classical canon requiring period research.")
        .with_projects(vec![obsidian]);

    Persona::new("sarah-chen", "Sarah Chen", "Costume Designer")
        .with_base_prompt(
            "32-year-old Korean-American woman, costume designer, shoulder-length black hair",
        )
        .with_profile_images(profile_images)
        .with_categories(vec![classical])
}

/// Seed personas in display order
#[must_use]
pub fn seed_personas() -> Vec<Persona> {
    vec![sarah_chen()]
}

/// A store preloaded with the seed portfolio
#[must_use]
pub fn seed_store() -> PersonaStore {
    PersonaStore::new(seed_personas())
}
