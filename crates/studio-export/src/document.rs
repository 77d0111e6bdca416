//! Portfolio export document
//!
//! The structured JSON written alongside the image files. Field names are
//! part of the export contract and follow the consuming site generator's
//! camelCase convention.

use serde::Serialize;
use serde_json::{Map, Value};
use studio_model::{CategoryData, Persona, PhotoSpec, Project};

/// Top-level export document for one persona
#[derive(Debug, Serialize)]
pub struct PortfolioDocument {
    /// Persona header
    pub persona: PersonaHeader,
    /// Profile (identity) section
    pub profile: ProfileSection,
    /// Categorized project content
    pub categories: Vec<CategoryEntry>,
}

/// Persona header fields
#[derive(Debug, Serialize)]
pub struct PersonaHeader {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Completed profile images
#[derive(Debug, Serialize)]
pub struct ProfileSection {
    pub images: Vec<ProfileImageEntry>,
}

/// One completed profile image
#[derive(Debug, Serialize)]
pub struct ProfileImageEntry {
    pub file: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub prompt: String,
    #[serde(rename = "usedFor")]
    pub used_for: String,
}

/// A category and its projects
#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub projects: Vec<ProjectEntry>,
}

/// A project and its completed photos
#[derive(Debug, Serialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub slug: String,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    pub description: String,
    #[serde(rename = "projectDetails", skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
    pub photos: Vec<PhotoEntry>,
}

/// One completed project photo
#[derive(Debug, Serialize)]
pub struct PhotoEntry {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(rename = "imageMetadata", skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    pub prompt: String,
}

/// Build the export document for a persona, including only completed photos
#[must_use]
pub fn build_document(persona: &Persona) -> PortfolioDocument {
    PortfolioDocument {
        persona: PersonaHeader {
            id: persona.id.to_string(),
            name: persona.name.clone(),
            role: persona.role.clone(),
            location: persona.location.clone(),
            bio: persona.bio.clone(),
        },
        profile: ProfileSection {
            images: persona
                .profile_images
                .iter()
                .filter(|p| p.completed_image().is_some())
                .map(profile_entry)
                .collect(),
        },
        categories: persona.categories.iter().map(category_entry).collect(),
    }
}

fn profile_entry(photo: &PhotoSpec) -> ProfileImageEntry {
    ProfileImageEntry {
        file: photo.filepath.clone(),
        kind: photo.kind.clone(),
        title: photo.title.clone(),
        description: photo.detailed_description.clone(),
        prompt: photo.prompt.clone(),
        used_for: photo.caption.clone(),
    }
}

fn category_entry(category: &CategoryData) -> CategoryEntry {
    CategoryEntry {
        id: category.id.to_string(),
        name: category.name.clone(),
        slug: category.slug.clone(),
        description: category.description.clone(),
        projects: category.projects.iter().map(project_entry).collect(),
    }
}

fn project_entry(project: &Project) -> ProjectEntry {
    ProjectEntry {
        id: project.id.to_string(),
        title: project.title.clone(),
        subtitle: project.subtitle.clone(),
        slug: project.slug.clone(),
        is_featured: project.is_featured,
        description: project.description.clone(),
        details: project.details.clone(),
        photos: project
            .photos
            .iter()
            .filter(|p| p.completed_image().is_some())
            .map(photo_entry)
            .collect(),
    }
}

fn photo_entry(photo: &PhotoSpec) -> PhotoEntry {
    PhotoEntry {
        file: photo.filepath.clone(),
        title: photo.title.clone(),
        description: photo.detailed_description.clone(),
        tags: photo.tags.clone(),
        metadata: photo.metadata.clone(),
        prompt: photo.prompt.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use studio_model::{PhotoUpdate, ImageRef};

    fn completed(mut photo: PhotoSpec) -> PhotoSpec {
        photo.apply(PhotoUpdate::completed(ImageRef::from_bytes(
            "image/png",
            b"img",
        )));
        photo
    }

    #[test]
    fn only_completed_photos_are_included() {
        let persona = Persona::new("p", "Test", "Designer").with_profile_images(vec![
            completed(PhotoSpec::new("a", "profile/a.jpg", "prompt a", "A")),
            PhotoSpec::new("b", "profile/b.jpg", "prompt b", "B"),
        ]);

        let doc = build_document(&persona);
        assert_eq!(doc.profile.images.len(), 1);
        assert_eq!(doc.profile.images[0].file, "profile/a.jpg");
    }

    #[test]
    fn document_serializes_with_contract_field_names() {
        let persona = Persona::new("p", "Test", "Designer").with_profile_images(vec![completed(
            PhotoSpec::new("a", "profile/a.jpg", "prompt a", "Caption A")
                .with_kind("headshot_primary"),
        )]);

        let json = serde_json::to_value(build_document(&persona)).unwrap();
        let image = &json["profile"]["images"][0];
        assert_eq!(image["type"], "headshot_primary");
        assert_eq!(image["usedFor"], "Caption A");
        assert_eq!(image["file"], "profile/a.jpg");
    }

    #[test]
    fn empty_categories_serialize_as_empty_list() {
        let persona = Persona::new("p", "Test", "Designer");
        let json = serde_json::to_value(build_document(&persona)).unwrap();
        assert_eq!(json["categories"].as_array().unwrap().len(), 0);
    }
}
