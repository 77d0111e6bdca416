//! Zip bundling of a persona's completed portfolio
//!
//! Writes `portfolio-data.json` plus every completed image's decoded bytes
//! at its storage path. Paths are used as-is apart from stripping a leading
//! slash, so the archive mirrors the site's asset layout.

use crate::document::build_document;
use std::io::{Seek, Write};
use studio_model::{ImageDecodeError, Persona};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Name of the metadata document inside the bundle
pub const DOCUMENT_NAME: &str = "portfolio-data.json";

/// Export packaging failure
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The persona has no completed images to bundle
    #[error("persona has no completed images to export")]
    NoCompletedImages,

    /// A completed image payload could not be decoded
    #[error("image payload for {filepath} is invalid")]
    Decode {
        /// Storage path of the offending photo
        filepath: String,
        #[source]
        source: ImageDecodeError,
    },

    /// Archive-level failure
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Document serialization failure
    #[error("document serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying writer failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bundle a persona's completed portfolio into a zip archive
///
/// # Errors
/// `ExportError::NoCompletedImages` when nothing has been generated yet;
/// otherwise decode/serialization/archive failures.
pub fn write_bundle<W: Write + Seek>(persona: &Persona, writer: W) -> Result<(), ExportError> {
    let images: Vec<_> = persona
        .all_photos()
        .filter_map(|p| p.completed_image().map(|img| (p, img)))
        .collect();

    if images.is_empty() {
        return Err(ExportError::NoCompletedImages);
    }

    tracing::info!(persona_id = %persona.id, images = images.len(), "writing export bundle");

    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default();

    let document = serde_json::to_string_pretty(&build_document(persona))?;
    zip.start_file(DOCUMENT_NAME, options)?;
    zip.write_all(document.as_bytes())?;

    for (photo, image) in images {
        let bytes = image.decode().map_err(|source| ExportError::Decode {
            filepath: photo.filepath.clone(),
            source,
        })?;
        let path = photo.filepath.trim_start_matches('/');
        zip.start_file(path, options)?;
        zip.write_all(&bytes)?;
    }

    zip.finish()?;
    Ok(())
}
