//! Persona containment tree
//!
//! A `Persona` exclusively owns its profile photo specs and an ordered
//! collection of categories, which own projects, which own photos. Active
//! selection state (which persona or project a UI is viewing) is external
//! and id-based, never an ownership relation.

use crate::ids::{CategoryId, PersonaId, ProjectId};
use crate::photo::PhotoSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named unit of creative work owning an ordered photo collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Display title
    pub title: String,
    /// Optional subtitle
    pub subtitle: Option<String>,
    /// URL-friendly slug
    pub slug: String,
    /// Description
    pub description: String,
    /// Featured in overview layouts
    pub is_featured: bool,
    /// Descriptive detail bag (venue, year, budget, ...), not relevant
    /// to generation
    #[serde(default)]
    pub details: Map<String, Value>,
    /// Ordered photo specs
    pub photos: Vec<PhotoSpec>,
}

impl Project {
    /// Create a project with no photos
    pub fn new(id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            id: id.into(),
            title,
            subtitle: None,
            slug,
            description: String::new(),
            is_featured: false,
            details: Map::new(),
            photos: Vec::new(),
        }
    }

    /// With a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With photos
    #[must_use]
    pub fn with_photos(mut self, photos: Vec<PhotoSpec>) -> Self {
        self.photos = photos;
        self
    }
}

/// A named grouping of projects, purely organizational
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    /// Unique identifier
    pub id: CategoryId,
    /// Display name
    pub name: String,
    /// URL-friendly slug
    pub slug: String,
    /// Description
    pub description: String,
    /// Ordered projects
    pub projects: Vec<Project>,
}

impl CategoryData {
    /// Create a category with no projects
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = name.to_lowercase().replace(' ', "-");
        Self {
            id: id.into(),
            name,
            slug,
            description: String::new(),
            projects: Vec::new(),
        }
    }

    /// With a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With projects
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }
}

/// Top-level synthetic identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique identifier
    pub id: PersonaId,
    /// Display name
    pub name: String,
    /// Professional role
    pub role: String,
    /// Description
    pub description: String,
    /// Base character prompt underlying all identity images
    pub base_prompt: String,
    /// Optional location
    pub location: Option<String>,
    /// Optional biography
    pub bio: Option<String>,
    /// Identity-establishing profile images (all `is_identity`)
    pub profile_images: Vec<PhotoSpec>,
    /// Ordered categories
    pub categories: Vec<CategoryData>,
}

impl Persona {
    /// Create a persona with no content
    pub fn new(id: impl Into<PersonaId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            description: String::new(),
            base_prompt: String::new(),
            location: None,
            bio: None,
            profile_images: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// With a base character prompt
    #[must_use]
    pub fn with_base_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.base_prompt = prompt.into();
        self
    }

    /// With profile images
    #[must_use]
    pub fn with_profile_images(mut self, images: Vec<PhotoSpec>) -> Self {
        self.profile_images = images;
        self
    }

    /// With categories
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<CategoryData>) -> Self {
        self.categories = categories;
        self
    }

    /// Iterate every photo owned by this persona
    ///
    /// Profile images come first, then category/project photos in
    /// containment order.
    pub fn all_photos(&self) -> impl Iterator<Item = &PhotoSpec> {
        self.profile_images.iter().chain(
            self.categories
                .iter()
                .flat_map(|c| c.projects.iter())
                .flat_map(|p| p.photos.iter()),
        )
    }

    /// The profile photo serving as the primary anchor, if any
    ///
    /// First profile image matching the primary-headshot rule. When several
    /// match, the first found wins (documented tie-break, not a uniqueness
    /// guarantee).
    #[must_use]
    pub fn primary_headshot(&self) -> Option<&PhotoSpec> {
        self.profile_images.iter().find(|p| p.is_primary_headshot())
    }

    /// Report profile images beyond the first that also match the
    /// primary-headshot rule
    ///
    /// The matching rule is a heuristic with no uniqueness enforcement;
    /// seed data defining two matching images is almost certainly a bug.
    /// Returns the shadowed duplicates so callers can surface them.
    #[must_use]
    pub fn validate_anchor_uniqueness(&self) -> Vec<&PhotoSpec> {
        self.profile_images
            .iter()
            .filter(|p| p.is_primary_headshot())
            .skip(1)
            .collect()
    }
}
