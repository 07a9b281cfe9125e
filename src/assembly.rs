//! Expansion of a [`Configuration`] into the renderer's settings mapping.
//!
//! The renderer consumes one flat mapping of named settings. Most entries
//! carry over from `guide-config.toml` verbatim; the rest are derived here:
//! the major.minor label, the copyright strings, and each sink's settings
//! block. The mapping is rebuilt from scratch on every call, so values that
//! depend on the wall clock (the copyright year) are current at assembly
//! time rather than frozen when the configuration was written.

use anyhow::{Context, Result};
use chrono::Datelike;
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::config::Configuration;
use crate::sinks::{Sink, SinkContext};
use crate::version::MajorMinor;

/// Build the complete renderer settings mapping.
pub fn assemble(config: &Configuration, source_root: &Path) -> Result<Map<String, Value>> {
    let major_minor = MajorMinor::parse(&config.project.version).with_context(|| {
        format!(
            "Failed to derive the major.minor label from version '{}'",
            config.project.version
        )
    })?;

    let this_year = chrono::Local::now().year();

    let mut settings = Map::new();

    // project identity
    settings.insert("project".to_string(), json!(config.project.name));
    settings.insert("version".to_string(), json!(config.project.version));
    // for display on the cover of the PDF document
    settings.insert("release".to_string(), json!(config.project.version));
    settings.insert("author".to_string(), json!(config.project.author));
    settings.insert(
        "copyright".to_string(),
        json!(format!("{this_year}, {}.", config.project.publisher)),
    );
    settings.insert(
        "copyright_year".to_string(),
        json!(copyright_span(
            config.project.copyright_baseline_year,
            this_year
        )),
    );

    // general settings, carried over verbatim
    settings.insert(
        "master_doc".to_string(),
        json!(config.general.master_doc),
    );
    settings.insert("extensions".to_string(), json!(config.general.extensions));
    settings.insert(
        "source_suffix".to_string(),
        json!(config.general.source_suffix),
    );
    settings.insert(
        "templates_path".to_string(),
        json!(config.general.templates_path),
    );
    settings.insert(
        "exclude_patterns".to_string(),
        json!(config.general.exclude_patterns),
    );

    // internationalization
    settings.insert("language".to_string(), json!(config.language.default));
    settings.insert("locale_dirs".to_string(), json!(config.general.locale_dirs));
    settings.insert(
        "gettext_compact".to_string(),
        json!(config.general.gettext_compact),
    );

    let ctx = SinkContext {
        project: &config.project,
        language: &config.language,
        general: &config.general,
        major_minor: &major_minor,
        source_root,
    };

    let sinks: [&dyn Sink; 3] = [&config.html, &config.latex, &config.epub];
    for sink in sinks {
        settings.extend(sink.settings(&ctx)?);
    }

    Ok(settings)
}

/// The copyright span as shown in rendered output: the baseline year alone
/// while it is current, a "baseline-current" range afterwards.
pub fn copyright_span(baseline: i32, current: i32) -> String {
    if current == baseline {
        baseline.to_string()
    } else {
        format!("{baseline}-{current}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Project;

    #[test]
    fn baseline_year_stands_alone() {
        assert_eq!(copyright_span(2020, 2020), "2020");
    }

    #[test]
    fn later_years_become_a_range() {
        assert_eq!(copyright_span(2020, 2024), "2020-2024");
        assert_eq!(copyright_span(2020, 2026), "2020-2026");
    }

    #[test]
    fn can_assemble_the_default_configuration() {
        let config = Configuration::default();
        let settings = assemble(&config, Path::new(".")).expect("can assemble defaults");

        assert_eq!(settings["project"], "MusicBrainz Picard");
        assert_eq!(settings["release"], settings["version"]);
        assert_eq!(settings["language"], "en");
        assert_eq!(settings["html_context"]["major_minor"], "v2.13");
        assert_eq!(
            settings["epub_title"],
            "MusicBrainz Picard User Guide (v2.13)"
        );
        assert_eq!(settings["epub_author"], "Bob Swift (Editor)");
    }

    #[test]
    fn assembly_is_idempotent() {
        let config = Configuration::default();
        let first = assemble(&config, Path::new(".")).unwrap();
        let second = assemble(&config, Path::new(".")).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn malformed_version_aborts_assembly() {
        let config = Configuration {
            project: Project {
                version: "2.13.3".to_string(),
                ..Project::default()
            },
            ..Configuration::default()
        };
        assert!(assemble(&config, Path::new(".")).is_err());
    }

    #[test]
    fn copyright_notice_names_the_publisher() {
        let config = Configuration::default();
        let settings = assemble(&config, Path::new(".")).unwrap();
        let copyright = settings["copyright"].as_str().unwrap();
        assert!(copyright.ends_with(", MetaBrainz Foundation."));
    }
}
