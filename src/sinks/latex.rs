//! LaTeX / PDF output options.
//!
//! The PDF build goes through LaTeX, so most of this section is typesetting
//! material: engine selection, paper geometry, the fontspec preamble, and the
//! notice typeset on the back of the title page. The preamble is generated
//! rather than stored verbatim so font choices and the hyphenation exception
//! stay individually editable.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{Sink, SinkContext};

/// LaTeX output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Latex {
    /// LaTeX engine the renderer invokes
    pub engine: String,
    /// Start document for the LaTeX build (a PDF-specific master document,
    /// distinct from the HTML master)
    pub start_doc: String,
    /// Renderer document class ("manual" or "howto")
    pub doc_class: String,
    pub papersize: String,
    pub pointsize: String,
    /// How URLs are shown in the PDF ("no", "inline" or "footnote")
    pub show_urls: String,
    /// Extra options passed to the document class
    pub extra_class_options: String,
    /// Whether per-domain indices are generated
    pub domain_indices: bool,
    /// Words with non-obvious break points, as a LaTeX hyphenation exception
    pub hyphenation: String,
    pub main_font: String,
    pub sans_font: String,
    pub mono_font: String,
    /// Notice typeset on the back of the title page. Empty disables the page.
    pub back_of_title_notice: String,
}

impl Default for Latex {
    fn default() -> Self {
        Latex {
            engine: "lualatex".to_string(),
            start_doc: "pdf".to_string(),
            doc_class: "manual".to_string(),
            papersize: "letterpaper".to_string(),
            pointsize: "11pt".to_string(),
            show_urls: "no".to_string(),
            extra_class_options: "openany".to_string(),
            domain_indices: true,
            hyphenation: "Music-Brainz".to_string(),
            main_font: "DejaVu Sans".to_string(),
            sans_font: "DejaVu Sans".to_string(),
            mono_font: "DejaVu Sans Mono".to_string(),
            back_of_title_notice: default_back_of_title_notice(),
        }
    }
}

impl Latex {
    /// Generate the LaTeX preamble: hyphenation exceptions, fontspec font
    /// selection, header geometry, and the back-of-title-page macro.
    pub fn preamble(&self) -> String {
        let mut preamble = String::new();

        if !self.hyphenation.is_empty() {
            preamble.push_str(&format!("\\hyphenation{{{}}}\n", self.hyphenation));
        }

        preamble.push_str("\\usepackage{fontspec}\n");
        preamble.push_str(&format!("\\setmainfont{{{}}}\n", self.main_font));
        preamble.push_str(&format!("\\setsansfont{{{}}}\n", self.sans_font));
        preamble.push_str(&format!("\\setmonofont{{{}}}\n", self.mono_font));

        // leave room for the fancy page header
        preamble.push_str("\\setlength{\\headheight}{14pt}\n");
        preamble.push_str("\\addtolength{\\topmargin}{-1.6pt}\n");

        if !self.back_of_title_notice.is_empty() {
            preamble.push_str(&format!(
                "\\newcommand\\sphinxbackoftitlepage{{\\vspace*{{\\fill}}\n{}\n\\vspace{{0.1\\textheight}}}}\n",
                self.back_of_title_notice
            ));
        }

        preamble
    }
}

impl Sink for Latex {
    fn settings(&self, ctx: &SinkContext) -> Result<Map<String, Value>> {
        let mut settings = Map::new();
        settings.insert("latex_engine".to_string(), json!(self.engine));
        settings.insert(
            "latex_documents".to_string(),
            json!([[
                self.start_doc,
                format!("{}.tex", ctx.project.base_filename),
                ctx.project.name,
                "",
                self.doc_class,
                false,
            ]]),
        );
        settings.insert("latex_show_urls".to_string(), json!(self.show_urls));
        settings.insert(
            "latex_elements".to_string(),
            json!({
                "papersize": self.papersize,
                "pointsize": self.pointsize,
                "preamble": self.preamble(),
                "extraclassoptions": self.extra_class_options,
            }),
        );
        settings.insert(
            "latex_domain_indices".to_string(),
            json!(self.domain_indices),
        );

        Ok(settings)
    }
}

fn default_back_of_title_notice() -> String {
    "MusicBrainz Picard User Guide is licensed under CC0 1.0. To view a\n\
     copy of this license, visit https://creativecommons.org/publicdomain/zero/1.0"
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Configuration;
    use crate::version::MajorMinor;
    use std::path::Path;

    #[test]
    fn can_serialize_latex() {
        let latex = Latex::default();
        toml::to_string(&latex).expect("can serialize Latex to TOML");
    }

    #[test]
    fn preamble_selects_fonts_and_hyphenation() {
        let preamble = Latex::default().preamble();
        assert!(preamble.contains("\\hyphenation{Music-Brainz}"));
        assert!(preamble.contains("\\usepackage{fontspec}"));
        assert!(preamble.contains("\\setmonofont{DejaVu Sans Mono}"));
        assert!(preamble.contains("\\newcommand\\sphinxbackoftitlepage"));
    }

    #[test]
    fn empty_notice_omits_the_back_of_title_macro() {
        let latex = Latex {
            back_of_title_notice: String::new(),
            ..Latex::default()
        };
        assert!(!latex.preamble().contains("sphinxbackoftitlepage"));
    }

    #[test]
    fn documents_name_the_tex_artifact_after_the_base_filename() {
        let config = Configuration::default();
        let major_minor = MajorMinor::parse(&config.project.version).unwrap();
        let ctx = SinkContext {
            project: &config.project,
            language: &config.language,
            general: &config.general,
            major_minor: &major_minor,
            source_root: Path::new("."),
        };

        let settings = config.latex.settings(&ctx).expect("can build settings");
        let documents = settings.get("latex_documents").expect("has documents");
        assert_eq!(documents[0][0], "pdf");
        assert_eq!(documents[0][1], "MusicBrainzPicardUserGuide.tex");
        assert_eq!(documents[0][4], "manual");
        assert_eq!(documents[0][5], false);
    }
}
