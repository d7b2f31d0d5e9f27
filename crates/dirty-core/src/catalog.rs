//! Tags bulk-created from a list of names.

use indexmap::IndexMap;

use crate::tag::{Tag, TagOptions};

/// Fixed set of pre-built tags, one per name.
///
/// Names are taken as plain data and not validated. Iteration follows
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct TagCatalog {
    tags: IndexMap<Box<str>, Tag>,
}

impl TagCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one tag per name, all with the same options.
    pub fn from_names<I>(names: I, options: TagOptions) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.insert(Tag::with_options(name.as_ref(), options));
        }
        tracing::debug!(tag_count = catalog.len(), "Built tag catalog");
        catalog
    }

    /// Add a tag, replacing any earlier tag with the same name.
    ///
    /// Returns the replaced tag.
    pub fn insert(&mut self, tag: Tag) -> Option<Tag> {
        self.tags.insert(tag.name().into(), tag)
    }

    /// Look up a tag by name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    /// Whether a tag with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Iterate over the tags.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    /// Iterate over the tag names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(AsRef::as_ref)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
