//! Per-output-format settings.
//!
//! The renderer produces HTML, PDF (via LaTeX) and EPUB output. Each format
//! keeps its user-editable options in its own section of `guide-config.toml`
//! and contributes a block of `<format>_*` settings to the assembled mapping.

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;

use crate::config::{General, LanguageConfig, Project};
use crate::version::MajorMinor;

mod epub;
pub use epub::Epub;

mod html;
pub use html::Html;

mod latex;
pub use latex::Latex;

/// Shared, already-derived state each sink draws on when contributing its
/// settings block.
pub struct SinkContext<'a> {
    pub project: &'a Project,
    pub language: &'a LanguageConfig,
    pub general: &'a General,
    pub major_minor: &'a MajorMinor,
    /// Root of the guide source tree, used for filesystem-derived settings
    pub source_root: &'a Path,
}

/// An output format contributing its settings to the renderer mapping.
pub trait Sink {
    fn settings(&self, ctx: &SinkContext) -> Result<Map<String, Value>>;
}

/// Join a file name onto the static-asset directory with the forward slashes
/// the renderer expects, regardless of platform.
pub(crate) fn static_file(static_path: &str, name: &str) -> String {
    format!("{static_path}/{name}")
}
