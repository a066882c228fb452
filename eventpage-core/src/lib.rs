//! Event Page Core - Configuration Record to Self-Contained HTML
//!
//! # Guarantees
//! 1. Rendering Is Pure (same record, same bytes)
//! 2. Rendering Never Fails (malformed colors degrade to black)
//! 3. User Text Is Always Escaped
//! 4. Hidden Sections Leave No Trace
//! 5. Export Always Validates
//! 6. Assistants Suggest, Empty Answers Change Nothing

pub mod assist;
pub mod color;
pub mod config;
pub mod escape;
pub mod hashing;
pub mod pipeline;
pub mod render;
pub mod theme;
pub mod validation;

pub use assist::{AssistCopy, AssistError, MergeReport};
pub use color::{hex_to_rgb, lighten, Rgb};
pub use config::{ConfigError, EventConfig, Inclusion, SectionFlags, ThemeColors};
pub use hashing::{canonical_json, compute_config_hash, compute_document_hash};
pub use pipeline::{export_filename, slugify, ExportPipeline, ExportedPage, PipelineError};
pub use render::render;
pub use theme::ThemePreset;
pub use validation::{FailureMode, ValidationResult, Validator, Violation, ViolationSeverity};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
