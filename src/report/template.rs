//! Report templates and placeholder substitution.
//!
//! A template is plain text with `{{name}}` placeholders. Substitution is a
//! single left-to-right scan: inserted values are never scanned again, and a
//! placeholder the caller supplies no value for is left in the output as-is.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Template shipped with the binary.
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/report.html");

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Every placeholder the renderer fills in.
pub const PLACEHOLDERS: [&str; 24] = [
    "year",
    "songCount",
    "songRows",
    "topSongTitle",
    "topSongArtist",
    "topSongCount",
    "topArtistName",
    "topArtistCount",
    "topAlbumTitle",
    "topAlbumArtist",
    "topAlbumCount",
    "topGenreName",
    "topGenreCount",
    "totalDuration",
    "hasDuration",
    "hasGenre",
    "artistLabels",
    "artistData",
    "genreLabels",
    "genreData",
    "albumLabels",
    "albumData",
    "monthLabels",
    "monthData",
];

/// Report template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// The built-in template.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_source(BUILTIN_TEMPLATE)
    }

    /// Wrap template text.
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing_file("Template", path));
        }
        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_source(source))
    }

    /// The raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholders from [`PLACEHOLDERS`] that this template never uses.
    #[must_use]
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDERS
            .iter()
            .copied()
            .filter(|name| !self.source.contains(&format!("{OPEN}{name}{CLOSE}")))
            .collect()
    }

    /// Replace every `{{name}}` that has a value in `values`.
    #[must_use]
    pub fn substitute(&self, values: &HashMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let value = after_open
                .find(CLOSE)
                .and_then(|end| values.get(&after_open[..end]).map(|v| (end, v)));

            if let Some((end, value)) = value {
                out.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            } else {
                // Not a known placeholder: keep one brace and rescan after it
                out.push_str(&rest[start..=start]);
                rest = &rest[start + 1..];
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn test_substitute_known() {
        let template = Template::from_source("<h1>{{year}}</h1><p>{{songCount}} songs</p>");
        let out = template.substitute(&values(&[("year", "2025"), ("songCount", "4")]));
        assert_eq!(out, "<h1>2025</h1><p>4 songs</p>");
    }

    #[test]
    fn test_substitute_repeated() {
        let template = Template::from_source("{{year}}-{{year}}");
        assert_eq!(template.substitute(&values(&[("year", "2025")])), "2025-2025");
    }

    #[test]
    fn test_unknown_placeholder_is_left_verbatim() {
        let template = Template::from_source("{{year}} {{unknown}} {{ year }}");
        assert_eq!(
            template.substitute(&values(&[("year", "2025")])),
            "2025 {{unknown}} {{ year }}"
        );
    }

    #[test]
    fn test_unterminated_placeholder() {
        let template = Template::from_source("a {{year");
        assert_eq!(template.substitute(&values(&[("year", "2025")])), "a {{year");
    }

    #[test]
    fn test_extra_braces() {
        let template = Template::from_source("{{{year}}}");
        assert_eq!(template.substitute(&values(&[("year", "2025")])), "{2025}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::from_source("{{topSongTitle}} / {{year}}");
        let out = template.substitute(&values(&[("topSongTitle", "{{year}}"), ("year", "2025")]));
        assert_eq!(out, "{{year}} / 2025");
    }

    #[test]
    fn test_missing_placeholders() {
        let template = Template::from_source("{{year}} {{songRows}}");
        let missing = template.missing_placeholders();
        assert_eq!(missing.len(), PLACEHOLDERS.len() - 2);
        assert!(!missing.contains(&"year"));
        assert!(missing.contains(&"monthData"));
    }

    #[test]
    fn test_builtin_uses_every_placeholder() {
        assert!(Template::builtin().missing_placeholders().is_empty());
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("nope.html")).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_load_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.html");
        std::fs::write(&path, "<p>{{year}}</p>").unwrap();
        let template = Template::load(&path).unwrap();
        assert_eq!(template.as_str(), "<p>{{year}}</p>");
    }
}
