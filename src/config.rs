//! The `guide-config.toml` configuration file.
//!
//! Everything user-editable lives here; the derived values (copyright span,
//! major.minor label, EPUB exclusion list) are computed at assembly time in
//! [`crate::assembly`]. Every field has a default reproducing the current
//! guide's settings, so an empty file is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::sinks::{Epub, Html, Latex};

/// Name of the configuration file, looked up in the current directory.
pub const CONFIG_FILE: &str = "guide-config.toml";

/// Load `guide-config.toml` from the current directory.
pub fn load() -> Result<Configuration> {
    let contents = std::fs::read_to_string(CONFIG_FILE).with_context(|| {
        format!("Failed to load {CONFIG_FILE} - run 'guide-config init' first")
    })?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
}

/// Complete configuration for a guide-config project.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub html: Html,
    #[serde(default)]
    pub latex: Latex,
    #[serde(default)]
    pub epub: Epub,
}

/// Project identity and the strings derived artifacts are named after.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Project {
    /// Project name as shown on covers and in page titles
    pub name: String,
    /// Full version, including alpha/beta/rc tags. Must start with a 'v'
    /// followed by `<major>.<minor>` and not contain any spaces.
    pub version: String,
    /// Editor credited in the rendered output
    pub author: String,
    /// Organization named in the copyright notice
    pub publisher: String,
    /// Base file name (no extension) for the PDF and EPUB artifacts
    pub base_filename: String,
    /// First year of publication; the copyright span runs from here to the
    /// current year
    pub copyright_baseline_year: i32,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            name: "MusicBrainz Picard".to_string(),
            version: "v2.13.3".to_string(),
            author: "Bob Swift".to_string(),
            publisher: "MetaBrainz Foundation".to_string(),
            base_filename: "MusicBrainzPicardUserGuide".to_string(),
            copyright_baseline_year: 2020,
        }
    }
}

/// A supported translation of the guide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    /// BCP 47 language code (e.g. "en", "fr")
    pub code: String,
    /// Language name in its own spelling, shown in the language picker
    pub name: String,
}

/// Default language plus the translations offered by the language picker.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub default: String,
    pub supported: Vec<Language>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig {
            default: "en".to_string(),
            supported: vec![
                Language {
                    code: "en".to_string(),
                    name: "English".to_string(),
                },
                Language {
                    code: "fr".to_string(),
                    name: "Français".to_string(),
                },
            ],
        }
    }
}

/// Settings the renderer consumes regardless of output format.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct General {
    /// The master toctree document
    pub master_doc: String,
    /// Renderer extension/plugin names to activate
    pub extensions: Vec<String>,
    /// Source file suffixes mapped to the markup they contain
    pub source_suffix: BTreeMap<String, String>,
    /// Directories containing page templates, relative to the source root
    pub templates_path: Vec<String>,
    /// Files and directories ignored when looking for source documents
    pub exclude_patterns: Vec<String>,
    /// Directories searched for translated message catalogs
    pub locale_dirs: Vec<String>,
    /// Whether catalogs are compacted into one file per language
    pub gettext_compact: bool,
    /// Directory of static assets copied into the output, relative to the
    /// source root
    pub static_path: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            master_doc: "index".to_string(),
            extensions: vec![
                "taggerscript".to_string(),
                "sphinxcontrib.youtube".to_string(),
            ],
            source_suffix: BTreeMap::from([
                (".rst".to_string(), "restructuredtext".to_string()),
                (".md".to_string(), "restructuredtext".to_string()),
            ]),
            templates_path: vec!["_templates".to_string()],
            exclude_patterns: [
                "_build",
                "_images",
                "_ignored",
                "_locale",
                "__pycache__",
                "Thumbs.db",
                ".DS_Store",
                "html",
                ".git",
                ".github",
                "images",
                "testing",
                "README.md",
                "TODO.md",
                "draft_outline.md",
                ".pytest_cache",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            locale_dirs: vec!["_locale".to_string()],
            gettext_compact: false,
            static_path: "_static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_serialize_configuration() {
        let config = Configuration::default();
        toml::to_string_pretty(&config).expect("can serialize configuration to TOML");
    }

    #[test]
    fn can_roundtrip_configuration() {
        let config = Configuration::default();
        let toml_str = toml::to_string(&config).expect("can serialize");
        let deserialized: Configuration = toml::from_str(&toml_str).expect("can deserialize");
        assert_eq!(deserialized.project.version, config.project.version);
        assert_eq!(deserialized.language.supported, config.language.supported);
        assert_eq!(
            deserialized.general.exclude_patterns,
            config.general.exclude_patterns
        );
    }

    #[test]
    fn empty_file_is_a_valid_configuration() {
        let config: Configuration = toml::from_str("").expect("empty TOML parses");
        assert_eq!(config.project.name, "MusicBrainz Picard");
        assert_eq!(config.language.default, "en");
    }

    #[test]
    fn partial_sections_keep_their_defaults() {
        let config: Configuration = toml::from_str(
            r#"
            [project]
            name = "Example"
            version = "v1.2.0"
            "#,
        )
        .expect("partial TOML parses");
        assert_eq!(config.project.name, "Example");
        assert_eq!(config.project.publisher, "MetaBrainz Foundation");
        // untouched sections fall back to defaults
        assert_eq!(config.general.master_doc, "index");
        assert_eq!(config.html.theme, "sphinx_rtd_theme");
    }
}
