//! Page metadata overrides and their resolution against brand defaults.

use serde::{Deserialize, Serialize};

use crate::brand::MetadataDefaults;

/// Caller-supplied page metadata. Every field is optional and falls back to
/// the brand default independently of the others.
///
/// Values are taken verbatim: an empty string is a valid override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated search terms.
    pub keywords: Option<String>,
    /// Absolute URL of the representative image.
    pub image: Option<String>,
    /// Canonical absolute URL of the page.
    pub url: Option<String>,
}

impl MetadataConfig {
    /// Layer `other` on top of `self`: fields set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        Self::update_option(&mut self.title, other.title);
        Self::update_option(&mut self.description, other.description);
        Self::update_option(&mut self.keywords, other.keywords);
        Self::update_option(&mut self.image, other.image);
        Self::update_option(&mut self.url, other.url);
        self
    }

    /// Resolve every field against `defaults`.
    pub fn resolve(&self, defaults: &MetadataDefaults) -> ResolvedMetadata {
        let pick = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_owned())
        };

        ResolvedMetadata {
            title: pick(&self.title, &defaults.title),
            description: pick(&self.description, &defaults.description),
            keywords: pick(&self.keywords, &defaults.keywords),
            image: pick(&self.image, &defaults.image),
            url: pick(&self.url, &defaults.url),
        }
    }

    fn update_option(field: &mut Option<String>, value: Option<String>) {
        if value.is_some() {
            *field = value;
        }
    }
}

/// Metadata with every field decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> MetadataDefaults {
        MetadataDefaults {
            title: "T".into(),
            description: "D".into(),
            keywords: "K".into(),
            image: "https://d.test/i.jpg".into(),
            url: "https://d.test".into(),
        }
    }

    #[test]
    fn test_resolve_all_defaults() {
        let resolved = MetadataConfig::default().resolve(&defaults());
        assert_eq!(resolved.title, "T");
        assert_eq!(resolved.description, "D");
        assert_eq!(resolved.keywords, "K");
        assert_eq!(resolved.image, "https://d.test/i.jpg");
        assert_eq!(resolved.url, "https://d.test");
    }

    #[test]
    fn test_resolve_partial_override() {
        let config = MetadataConfig {
            title: Some("Menu".into()),
            url: Some("https://o.test".into()),
            ..Default::default()
        };
        let resolved = config.resolve(&defaults());
        assert_eq!(resolved.title, "Menu");
        assert_eq!(resolved.url, "https://o.test");
        assert_eq!(resolved.description, "D");
        assert_eq!(resolved.image, "https://d.test/i.jpg");
    }

    #[test]
    fn test_empty_string_is_an_override() {
        let config = MetadataConfig {
            description: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.resolve(&defaults()).description, "");
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = MetadataConfig {
            title: Some("file".into()),
            keywords: Some("file kw".into()),
            ..Default::default()
        };
        let cli = MetadataConfig {
            title: Some("cli".into()),
            ..Default::default()
        };
        let merged = base.merge(cli);
        assert_eq!(merged.title.as_deref(), Some("cli"));
        assert_eq!(merged.keywords.as_deref(), Some("file kw"));
        assert_eq!(merged.url, None);
    }
}
