//! Photo specifications and their generation lifecycle
//!
//! A `PhotoSpec` is one requested/produced image. It is created in
//! `Pending` state at seed time and transitions
//! `Pending -> Generating -> {Completed | Error}` once per generation
//! attempt; a regeneration re-enters `Generating` and may overwrite a
//! previous result.

use crate::ids::PhotoId;
use crate::image::ImageRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Semantic type marking a persona's primary anchor headshot
pub const PRIMARY_HEADSHOT_KIND: &str = "headshot_primary";

/// Generation status of a photo spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoStatus {
    /// Not yet attempted
    Pending,
    /// A provider call is in flight
    Generating,
    /// Result present, no error
    Completed,
    /// Last attempt failed; message recorded
    Error,
}

impl PhotoStatus {
    /// Whether this is a terminal per-attempt state
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// One requested/produced image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSpec {
    /// Stable identifier
    pub id: PhotoId,
    /// Full relative storage path, e.g. `profile/headshot-primary.jpg`
    pub filepath: String,
    /// File name component for display
    pub filename: String,
    /// Optional semantic type, e.g. `headshot_primary`, `selfie`
    pub kind: Option<String>,
    /// Free-text generation prompt
    pub prompt: String,
    /// Short display caption
    pub caption: String,
    /// Optional display title
    pub title: Option<String>,
    /// Long-form description
    pub detailed_description: String,
    /// Tag set
    pub tags: Vec<String>,
    /// Requires visual consistency with the persona's anchor
    pub is_identity: bool,
    /// Current lifecycle status
    pub status: PhotoStatus,
    /// Completed result, present iff status is `Completed`
    pub image: Option<ImageRef>,
    /// Failure message, present iff status is `Error`
    pub error: Option<String>,
    /// Free-form metadata bag
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl PhotoSpec {
    /// Create a pending photo spec
    pub fn new(
        id: impl Into<PhotoId>,
        filepath: impl Into<String>,
        prompt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        let filepath = filepath.into();
        let filename = filepath
            .rsplit('/')
            .next()
            .unwrap_or(filepath.as_str())
            .to_string();
        let caption = caption.into();
        Self {
            id: id.into(),
            filepath,
            filename,
            kind: None,
            prompt: prompt.into(),
            title: Some(caption.clone()),
            caption,
            detailed_description: String::new(),
            tags: Vec::new(),
            is_identity: false,
            status: PhotoStatus::Pending,
            image: None,
            error: None,
            metadata: Map::new(),
        }
    }

    /// With a semantic type
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// With a tag set
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// With a long-form description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.detailed_description = description.into();
        self
    }

    /// Mark as requiring the persona's anchor identity
    #[must_use]
    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    /// With metadata entries
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether this photo is featured, derived from tag membership
    #[inline]
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.tags.iter().any(|t| t == "featured")
    }

    /// Primary-headshot classification rule
    ///
    /// Matches on semantic type `headshot_primary`, or, failing that, on a
    /// case-insensitive `headshot` substring in the prompt. The same rule
    /// drives anchor resolution, batch ordering, and invoker mode selection.
    /// Uniqueness is not enforced; see `Persona::validate_anchor_uniqueness`.
    #[must_use]
    pub fn is_primary_headshot(&self) -> bool {
        self.kind.as_deref() == Some(PRIMARY_HEADSHOT_KIND)
            || self.prompt.to_lowercase().contains("headshot")
    }

    /// Whether a completed result is available
    #[inline]
    #[must_use]
    pub fn completed_image(&self) -> Option<&ImageRef> {
        if self.status == PhotoStatus::Completed {
            self.image.as_ref()
        } else {
            None
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: PhotoUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        match update.image {
            FieldPatch::Keep => {}
            FieldPatch::Clear => self.image = None,
            FieldPatch::Set(image) => self.image = Some(image),
        }
        match update.error {
            FieldPatch::Keep => {}
            FieldPatch::Clear => self.error = None,
            FieldPatch::Set(error) => self.error = Some(error),
        }
    }
}

/// Three-way field patch for partial updates
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch<T> {
    /// Leave the field untouched
    Keep,
    /// Clear the field
    Clear,
    /// Replace the field
    Set(T),
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

/// Partial update applied through the record store
///
/// Constructors maintain the status invariants: a completed update carries
/// its result and clears any error; an error update records the message and
/// drops any stale result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoUpdate {
    /// New status, if changing
    pub status: Option<PhotoStatus>,
    /// Result image patch
    pub image: FieldPatch<ImageRef>,
    /// Error message patch
    pub error: FieldPatch<String>,
}

impl PhotoUpdate {
    /// A generation attempt has started; clears any previous error but keeps
    /// a prior result visible until the attempt resolves
    #[must_use]
    pub fn generating() -> Self {
        Self {
            status: Some(PhotoStatus::Generating),
            image: FieldPatch::Keep,
            error: FieldPatch::Clear,
        }
    }

    /// The attempt succeeded with `image`
    #[must_use]
    pub fn completed(image: ImageRef) -> Self {
        Self {
            status: Some(PhotoStatus::Completed),
            image: FieldPatch::Set(image),
            error: FieldPatch::Clear,
        }
    }

    /// The attempt failed with `message`
    #[must_use]
    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            status: Some(PhotoStatus::Error),
            image: FieldPatch::Clear,
            error: FieldPatch::Set(message.into()),
        }
    }
}
