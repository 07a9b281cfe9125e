//! HTML output options.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{static_file, Sink, SinkContext};

/// HTML output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Html {
    /// Theme used for the HTML and HTML Help pages
    pub theme: String,
    /// Extra stylesheets, relative to the static path
    pub css_files: Vec<String>,
    /// Favicon file name under the static path
    pub favicon: String,
    /// Whether source documents are copied alongside the rendered pages
    pub copy_source: bool,
}

impl Default for Html {
    fn default() -> Self {
        Html {
            theme: "sphinx_rtd_theme".to_string(),
            css_files: vec!["css/extra.css".to_string()],
            favicon: "picard-icon.png".to_string(),
            copy_source: false,
        }
    }
}

impl Sink for Html {
    fn settings(&self, ctx: &SinkContext) -> Result<Map<String, Value>> {
        // templates reach these through the html_context block; the supported
        // language list keeps its (code, name) pair shape for the picker
        let supported: Vec<Value> = ctx
            .language
            .supported
            .iter()
            .map(|l| json!([l.code, l.name]))
            .collect();

        let mut settings = Map::new();
        settings.insert("html_theme".to_string(), json!(self.theme));
        settings.insert(
            "html_static_path".to_string(),
            json!([ctx.general.static_path]),
        );
        settings.insert("html_css_files".to_string(), json!(self.css_files));
        settings.insert(
            "html_favicon".to_string(),
            json!(static_file(&ctx.general.static_path, &self.favicon)),
        );
        settings.insert("html_copy_source".to_string(), json!(self.copy_source));
        settings.insert(
            "html_context".to_string(),
            json!({
                "default_language": ctx.language.default,
                "supported_languages": supported,
                "major_minor": ctx.major_minor.label(),
                "release": ctx.project.version,
            }),
        );

        Ok(settings)
    }
}
