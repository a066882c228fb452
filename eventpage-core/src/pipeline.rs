//! Export Pipeline - Single Entry Point
//!
//! Preview renders unconditionally. Export always validates first. No bypass.

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::config::EventConfig;
use crate::hashing::{compute_config_hash, compute_document_hash};
use crate::render::render;
use crate::validation::{FailureMode, ValidationResult, Validator};
use crate::ENGINE_VERSION;

const FALLBACK_SLUG: &str = "event";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Validation failed: {}", .0.summary())]
    ValidationFailed(ValidationResult),

    #[error("Refusing to write outside the export directory: {0}")]
    UnsafeFilename(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPage {
    pub id: String,
    pub filename: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub config_hash: String,
    pub document_hash: String,
    pub size_bytes: usize,
    pub validation: ValidationResult,
    #[serde(skip)]
    pub html: String,
}

impl ExportedPage {
    /// Write the document as `dir/<filename>`, byte for byte.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, PipelineError> {
        if Path::new(&self.filename).file_name() != Some(OsStr::new(&self.filename)) {
            return Err(PipelineError::UnsafeFilename(self.filename.clone()));
        }
        let path = dir.join(&self.filename);
        fs::write(&path, self.html.as_bytes()).map_err(|source| PipelineError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = self.size_bytes, "Exported event page");
        Ok(path)
    }
}

/// Lowercase the name and collapse each whitespace run into one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// `<slug>.html`, or `event.html` when nothing usable is left.
///
/// Path separators become hyphens and leading dots are dropped, so the name
/// always stays a single file inside the export directory.
pub fn export_filename(config: &EventConfig) -> String {
    let slug = slugify(&config.event_name_en).replace(['/', '\\'], "-");
    let slug = slug.trim_start_matches('.');
    if slug.trim_matches(['-', '.']).is_empty() {
        format!("{}.html", FALLBACK_SLUG)
    } else {
        format!("{}.html", slug)
    }
}

/// The export pipeline - single entry point for previews and exports
pub struct ExportPipeline {
    validator: Validator,
}

impl ExportPipeline {
    pub fn new(failure_mode: FailureMode) -> Self {
        Self {
            validator: Validator::with_failure_mode(failure_mode),
        }
    }

    pub fn validate(&self, config: &EventConfig) -> ValidationResult {
        self.validator.validate(config)
    }

    /// Live preview document. Never fails.
    pub fn preview(&self, config: &EventConfig) -> String {
        render(config)
    }

    /// Preview as a `data:` URL for embedding in a frame
    pub fn preview_data_url(&self, config: &EventConfig) -> String {
        let html = self.preview(config);
        format!(
            "data:text/html;charset=utf-8;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(html.as_bytes())
        )
    }

    /// Export a record
    ///
    /// CRITICAL: This ALWAYS validates first. Blocking violations reject the export.
    pub fn export(&self, config: &EventConfig) -> Result<ExportedPage, PipelineError> {
        let validation = self.validate(config);
        if !validation.valid {
            return Err(PipelineError::ValidationFailed(validation));
        }

        let html = render(config);
        let page = ExportedPage {
            id: Uuid::new_v4().to_string(),
            filename: export_filename(config),
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            config_hash: compute_config_hash(config)?,
            document_hash: compute_document_hash(&html),
            size_bytes: html.len(),
            validation,
            html,
        };

        tracing::debug!(filename = %page.filename, hash = %page.document_hash, "Prepared export");
        Ok(page)
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new(FailureMode::default())
    }
}
