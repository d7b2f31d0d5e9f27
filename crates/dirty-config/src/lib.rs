//! Tag vocabulary configuration.
//!
//! Parses `dirty.toml` vocabulary files with serde and turns them into a
//! [`TagCatalog`]. A vocabulary lists plain tag names sharing default
//! options, plus per-tag option overrides:
//!
//! ```toml
//! names = ["feed", "entry", "title"]
//!
//! [defaults]
//! shorten_empty_tag = true
//!
//! [tags.content]
//! cdata_section = true
//! ```

use std::path::{Path, PathBuf};

use dirty_core::{Tag, TagCatalog, TagOptions};
use indexmap::IndexMap;
use serde::Deserialize;

/// Conventional vocabulary filename.
pub const CONFIG_FILENAME: &str = "dirty.toml";

/// Tag vocabulary as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Tag names created with [`VocabularyConfig::defaults`].
    pub names: Vec<String>,
    /// Options shared by every tag unless overridden.
    pub defaults: TagOptions,
    /// Per-tag overrides, in file order.
    pub tags: IndexMap<String, TagOverrides>,
}

/// Option overrides for a single tag.
///
/// Unset fields fall back to the vocabulary defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagOverrides {
    /// Override `shorten_empty_tag`.
    pub shorten_empty_tag: Option<bool>,
    /// Override `cdata_section`.
    pub cdata_section: Option<bool>,
}

impl TagOverrides {
    /// Apply the set fields on top of `defaults`.
    #[must_use]
    pub fn apply(self, defaults: TagOptions) -> TagOptions {
        TagOptions {
            shorten_empty_tag: self
                .shorten_empty_tag
                .unwrap_or(defaults.shorten_empty_tag),
            cdata_section: self.cdata_section.unwrap_or(defaults.cdata_section),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File not found.
    #[error("Vocabulary file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Vocabulary error: {0}")]
    Validation(String),
}

impl VocabularyConfig {
    /// Load a vocabulary from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, and
    /// parse or validation errors for malformed content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            names = config.names.len(),
            overrides = config.tags.len(),
            "Loaded tag vocabulary"
        );
        Ok(config)
    }

    /// Parse and validate a vocabulary from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tag name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the offending entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.names.iter().position(String::is_empty) {
            return Err(ConfigError::Validation(format!(
                "names[{index}] cannot be empty"
            )));
        }
        if self.tags.contains_key("") {
            return Err(ConfigError::Validation(
                "tags table cannot have an empty name".to_owned(),
            ));
        }
        Ok(())
    }

    /// Build a catalog: every listed name with the defaults, then every
    /// override entry, which replaces a listed tag of the same name.
    #[must_use]
    pub fn into_catalog(self) -> TagCatalog {
        let mut catalog = TagCatalog::from_names(&self.names, self.defaults);
        if catalog.len() < self.names.len() {
            tracing::warn!(
                duplicates = self.names.len() - catalog.len(),
                "Vocabulary lists some tag names more than once"
            );
        }
        for (name, overrides) in self.tags {
            let tag = Tag::with_options(name.as_str(), overrides.apply(self.defaults));
            if catalog.insert(tag).is_some() {
                tracing::debug!(name = %name, "Tag options taken from tags table");
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirty_core::Attributes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config() {
        let config = VocabularyConfig::from_toml_str("").unwrap();
        assert!(config.names.is_empty());
        assert_eq!(config.defaults, TagOptions::default());
        assert!(config.into_catalog().is_empty());
    }

    #[test]
    fn test_names_with_defaults() {
        let config = VocabularyConfig::from_toml_str(
            r#"
names = ["feed", "entry"]

[defaults]
shorten_empty_tag = false
"#,
        )
        .unwrap();
        let catalog = config.into_catalog();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["feed", "entry"]);
        let entry = catalog.get("entry").unwrap();
        assert!(!entry.options().shorten_empty_tag);
        assert!(!entry.options().cdata_section);
        assert_eq!(entry.empty(Attributes::new()).to_string(), "<entry></entry>");
    }

    #[test]
    fn test_overrides_win_over_names() {
        let config = VocabularyConfig::from_toml_str(
            r#"
names = ["title", "content"]

[tags.content]
cdata_section = true

[tags.summary]
shorten_empty_tag = false
"#,
        )
        .unwrap();
        let catalog = config.into_catalog();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["title", "content", "summary"]
        );

        let content = catalog.get("content").unwrap();
        assert_eq!(
            content.options(),
            TagOptions {
                shorten_empty_tag: true,
                cdata_section: true,
            }
        );
        assert_eq!(
            content.wrap(["a&b"]).to_string(),
            "<content><![CDATA[a&b]]></content>"
        );
        assert!(!catalog.get("summary").unwrap().options().shorten_empty_tag);
    }

    #[test]
    fn test_overrides_apply() {
        let defaults = TagOptions::default();
        let overrides = TagOverrides {
            shorten_empty_tag: None,
            cdata_section: Some(true),
        };
        assert_eq!(
            overrides.apply(defaults),
            TagOptions {
                shorten_empty_tag: true,
                cdata_section: true,
            }
        );
        assert_eq!(TagOverrides::default().apply(defaults), defaults);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = VocabularyConfig::from_toml_str(r#"names = ["a", ""]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(err.to_string(), "Vocabulary error: names[1] cannot be empty");
    }

    #[test]
    fn test_empty_override_name_rejected() {
        let err = VocabularyConfig::from_toml_str("[tags.\"\"]\ncdata_section = true\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = VocabularyConfig::from_toml_str("[tags.x]\npretty = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_default_option_rejected() {
        let err = VocabularyConfig::from_toml_str(
            "names = [\"a\"]\n[defaults]\nshorten_empty_tags = false\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let config = VocabularyConfig::from_toml_str(r#"names = ["a", "b", "a"]"#).unwrap();
        let catalog = config.into_catalog();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "names = [\"a\", \"b\"]\n").unwrap();

        let config = VocabularyConfig::load(&path).unwrap();
        assert_eq!(config.names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let err = VocabularyConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref p) if p == &path));
    }
}
