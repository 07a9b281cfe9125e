//! EPUB output options.
//!
//! Besides the usual metadata, the EPUB build needs to know which rendered
//! pages to leave out: the cover and 404/not-found pages are meaningless in
//! an ebook reader, the PDF download page is redundant, and the per-version
//! tutorial snapshots would bloat the file with near-duplicate content. The
//! fixed part of that list is configuration; the snapshot part is derived by
//! scanning the source tree at assembly time.

use anyhow::{Context, Result};
use globset::Glob;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;

use super::{static_file, Sink, SinkContext};

/// EPUB output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Epub {
    /// Theme used for the EPUB pages
    pub theme: String,
    /// Description included in the EPUB metadata
    pub description: String,
    /// Contributor credited in the EPUB metadata
    pub contributor: String,
    /// Unique identifier for the publication
    pub uid: String,
    /// Depth of the table of contents
    pub tocdepth: u32,
    /// Scope of the table of contents ("default" or "includehidden")
    pub tocscope: String,
    /// How URLs are shown ("no", "inline" or "footnote")
    pub show_urls: String,
    /// Whether an index page is generated
    pub use_index: bool,
    /// Cover image file name under the static path
    pub cover_image: String,
    /// Template used to render the cover page
    pub cover_template: String,
    /// Files appended after the content pages, with their TOC entry
    pub post_files: Vec<(String, String)>,
    /// Output pages always excluded from the EPUB
    pub fixed_excludes: Vec<String>,
    /// Subdirectory of the source tree holding per-version tutorial
    /// snapshots
    pub tutorials_dir: String,
    /// File-name pattern identifying a version snapshot
    pub snapshot_glob: String,
}

impl Default for Epub {
    fn default() -> Self {
        Epub {
            theme: "epub".to_string(),
            description: "A User Guide for MusicBrainz Picard.".to_string(),
            contributor: "Members of the MusicBrainz Community".to_string(),
            uid: "MusicBrainzPicardUserGuide".to_string(),
            tocdepth: 3,
            tocscope: "includehidden".to_string(),
            show_urls: "no".to_string(),
            use_index: true,
            cover_image: "epub_cover.png".to_string(),
            cover_template: "epub-cover.html".to_string(),
            post_files: vec![("genindex.xhtml".to_string(), "INDEX".to_string())],
            fixed_excludes: [
                "404.xhtml",
                "index.xhtml",
                "not_found.xhtml",
                "pdf.xhtml",
                "examples/examples.xhtml",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tutorials_dir: "tutorials".to_string(),
            snapshot_glob: "v_*".to_string(),
        }
    }
}

impl Epub {
    /// Build the list of rendered pages to omit from the EPUB.
    ///
    /// Starts from the fixed excludes, then scans the tutorials directory
    /// under `source_root` for version snapshots: every `.rst` source whose
    /// name matches the snapshot pattern becomes an excluded `.xhtml` page.
    /// A missing tutorials directory is not an error; some configurations
    /// simply carry no per-version content. Scanned entries are sorted by
    /// name so the emitted mapping is identical across runs and platforms.
    pub fn exclude_files(&self, source_root: &Path) -> Result<Vec<String>> {
        let mut excludes = self.fixed_excludes.clone();

        let matcher = Glob::new(&self.snapshot_glob)
            .with_context(|| format!("invalid snapshot pattern '{}'", self.snapshot_glob))?
            .compile_matcher();

        let tutorials = source_root.join(&self.tutorials_dir);
        let entries = match std::fs::read_dir(&tutorials) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!(
                    "not scanning {} for version snapshots: {e}",
                    tutorials.display()
                );
                return Ok(excludes);
            }
        };

        let mut snapshots: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| matcher.is_match(name))
            .filter_map(|name| {
                name.strip_suffix(".rst")
                    .map(|stem| format!("{}/{stem}.xhtml", self.tutorials_dir))
            })
            .collect();
        snapshots.sort();
        excludes.extend(snapshots);

        Ok(excludes)
    }
}

impl Sink for Epub {
    fn settings(&self, ctx: &SinkContext) -> Result<Map<String, Value>> {
        let exclude_files = self
            .exclude_files(ctx.source_root)
            .with_context(|| "Failed to build the EPUB exclusion list")?;

        let mut settings = Map::new();
        settings.insert(
            "epub_basename".to_string(),
            json!(ctx.project.base_filename),
        );
        settings.insert("epub_theme".to_string(), json!(self.theme));
        settings.insert(
            "epub_title".to_string(),
            json!(format!(
                "{} User Guide ({})",
                ctx.project.name,
                ctx.major_minor.label()
            )),
        );
        settings.insert("epub_description".to_string(), json!(self.description));
        settings.insert(
            "epub_author".to_string(),
            json!(format!("{} (Editor)", ctx.project.author)),
        );
        settings.insert("epub_contributor".to_string(), json!(self.contributor));
        settings.insert("epub_publisher".to_string(), json!(ctx.project.publisher));
        settings.insert("epub_uid".to_string(), json!(self.uid));
        settings.insert("epub_tocdepth".to_string(), json!(self.tocdepth));
        settings.insert("epub_tocscope".to_string(), json!(self.tocscope));
        settings.insert(
            "epub_cover".to_string(),
            json!([
                static_file(&ctx.general.static_path, &self.cover_image),
                self.cover_template,
            ]),
        );
        settings.insert(
            "epub_guide".to_string(),
            json!([["cover", "epub-cover.xhtml", "Cover Page"]]),
        );
        settings.insert("epub_show_urls".to_string(), json!(self.show_urls));
        settings.insert("epub_use_index".to_string(), json!(self.use_index));
        settings.insert("epub_post_files".to_string(), json!(self.post_files));
        settings.insert("epub_exclude_files".to_string(), json!(exclude_files));

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").expect("can create test file");
    }

    #[test]
    fn can_serialize_epub() {
        let epub = Epub::default();
        toml::to_string(&epub).expect("can serialize Epub to TOML");
    }

    #[test]
    fn missing_tutorials_dir_yields_the_fixed_excludes() {
        let temp_dir = TempDir::new().unwrap();
        let epub = Epub::default();

        let excludes = epub
            .exclude_files(temp_dir.path())
            .expect("missing directory is not an error");
        assert_eq!(excludes, epub.fixed_excludes);
    }

    #[test]
    fn snapshots_are_excluded_with_their_output_extension() {
        let temp_dir = TempDir::new().unwrap();
        let tutorials = temp_dir.path().join("tutorials");
        std::fs::create_dir(&tutorials).unwrap();
        touch(&tutorials, "v_1.0.rst");
        touch(&tutorials, "v_2.0.rst");
        touch(&tutorials, "notes.txt");

        let epub = Epub::default();
        let excludes = epub.exclude_files(temp_dir.path()).unwrap();

        // fixed excludes first, in their configured order, then the snapshots
        let mut expected = epub.fixed_excludes.clone();
        expected.push("tutorials/v_1.0.xhtml".to_string());
        expected.push("tutorials/v_2.0.xhtml".to_string());
        assert_eq!(excludes, expected);
    }

    #[test]
    fn non_snapshot_sources_are_not_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let tutorials = temp_dir.path().join("tutorials");
        std::fs::create_dir(&tutorials).unwrap();
        touch(&tutorials, "getting_started.rst");
        touch(&tutorials, "v_3.1.rst");
        // matches the pattern but isn't a source document
        touch(&tutorials, "v_3.1.png");

        let epub = Epub::default();
        let excludes = epub.exclude_files(temp_dir.path()).unwrap();

        let scanned = &excludes[epub.fixed_excludes.len()..];
        assert_eq!(scanned, ["tutorials/v_3.1.xhtml".to_string()]);
    }

    #[test]
    fn bad_snapshot_pattern_is_an_error() {
        let epub = Epub {
            snapshot_glob: "v_[".to_string(),
            ..Epub::default()
        };
        assert!(epub.exclude_files(Path::new(".")).is_err());
    }
}
