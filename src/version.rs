//! Version label handling.
//!
//! The full version string (e.g. `v2.13.3`) is shown on the PDF cover and in
//! the HTML context, but download filenames and per-version links only carry
//! the truncated `v<major>.<minor>` label. The label is extracted once during
//! assembly; a version string that doesn't match the expected shape aborts
//! assembly outright, since a malformed label would end up in every artifact
//! name the renderer produces.

use anyhow::{anyhow, Result};
use std::fmt;

/// The `v<major>.<minor>` prefix of a full version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorMinor {
    label: String,
}

impl MajorMinor {
    /// Extract the leading `v<major>.<minor>` from a full version string.
    ///
    /// The label keeps the input spelling verbatim, leading zeros included.
    /// Anything after the minor version (patch level, pre-release tags) is
    /// ignored; a string that doesn't start with the anchored pattern is an
    /// error.
    pub fn parse(version: &str) -> Result<MajorMinor> {
        let rest = version.strip_prefix('v').ok_or_else(|| {
            anyhow!("version '{version}' must start with 'v' (e.g. v2.13.3)")
        })?;

        let rest = skip_digits(rest).ok_or_else(|| {
            anyhow!("version '{version}' has no numeric major version")
        })?;
        let rest = rest.strip_prefix('.').ok_or_else(|| {
            anyhow!("version '{version}' must be of the form v<major>.<minor>")
        })?;
        let rest = skip_digits(rest).ok_or_else(|| {
            anyhow!("version '{version}' has no numeric minor version")
        })?;

        let label = version[..version.len() - rest.len()].to_string();
        Ok(MajorMinor { label })
    }

    /// The matched prefix, exactly as spelled in the input.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Skip past a leading run of ASCII digits. `None` if there is none.
fn skip_digits(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[end..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_extract_major_minor() {
        let mm = MajorMinor::parse("v2.13.3").expect("can parse v2.13.3");
        assert_eq!(mm.label(), "v2.13");
    }

    #[test]
    fn label_ignores_trailing_tags() {
        assert_eq!(MajorMinor::parse("v1.0.0-rc1").unwrap().label(), "v1.0");
        assert_eq!(MajorMinor::parse("v3.7").unwrap().label(), "v3.7");
    }

    #[test]
    fn label_preserves_input_spelling() {
        // leading zeros survive, since the label is a substring of the input
        assert_eq!(MajorMinor::parse("v02.3.1").unwrap().label(), "v02.3");
    }

    #[test]
    fn rejects_versions_without_leading_v() {
        assert!(MajorMinor::parse("2.13.3").is_err());
        assert!(MajorMinor::parse("version2").is_err());
    }

    #[test]
    fn rejects_incomplete_versions() {
        assert!(MajorMinor::parse("v2").is_err());
        assert!(MajorMinor::parse("v2.").is_err());
        assert!(MajorMinor::parse("v.1").is_err());
        assert!(MajorMinor::parse("v2.x").is_err());
        assert!(MajorMinor::parse("").is_err());
    }

    #[test]
    fn displays_as_label() {
        let mm = MajorMinor::parse("v2.13.3").unwrap();
        assert_eq!(mm.to_string(), "v2.13");
    }
}
