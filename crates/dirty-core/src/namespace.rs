//! Create-on-first-access tag vocabularies.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::tag::{Tag, TagOptions};

/// Memoizing tag factory for open vocabularies such as custom XML.
///
/// Looking up a name creates the tag the first time and returns the same
/// instance afterwards. Each namespace has its own cache; two namespaces
/// never share tags.
///
/// ```
/// use dirty_core::{Attributes, TagNamespace};
///
/// let xml = TagNamespace::new();
/// let feed = xml.tag("feed").call(
///     [xml.tag("title").wrap(["Example Feed"])],
///     Attributes::from([("xmlns", "http://www.w3.org/2005/Atom")]),
/// );
/// assert_eq!(
///     feed.to_string(),
///     r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Example Feed</title></feed>"#
/// );
/// assert!(xml.tag("feed").ptr_eq(&xml.tag("feed")));
/// ```
#[derive(Debug, Default)]
pub struct TagNamespace {
    options: TagOptions,
    tags: RwLock<HashMap<Box<str>, Tag>>,
}

impl TagNamespace {
    /// Create an empty namespace whose tags use default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty namespace whose tags use `options`.
    pub fn with_options(options: TagOptions) -> Self {
        Self {
            options,
            tags: RwLock::default(),
        }
    }

    /// Return the tag for `name`, creating it on first access.
    pub fn tag(&self, name: &str) -> Tag {
        if let Some(tag) = self
            .tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return tag.clone();
        }

        let mut tags = self.tags.write().unwrap_or_else(PoisonError::into_inner);
        tags.entry(name.into())
            .or_insert_with(|| {
                tracing::trace!(name, "Creating tag on first access");
                Tag::with_options(name, self.options)
            })
            .clone()
    }

    /// Whether `name` has been looked up before.
    pub fn contains(&self, name: &str) -> bool {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of tags created so far.
    pub fn len(&self) -> usize {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no tag has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attributes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_creates_and_caches() {
        let xml = TagNamespace::new();
        assert!(xml.is_empty());
        assert!(!xml.contains("entry"));

        let first = xml.tag("entry");
        let second = xml.tag("entry");
        assert!(first.ptr_eq(&second));
        assert!(xml.contains("entry"));
        assert_eq!(xml.len(), 1);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let xml = TagNamespace::new();
        let tag = xml.tag("");
        assert_eq!(tag.name(), "");
        assert!(tag.ptr_eq(&xml.tag("")));
    }

    #[test]
    fn test_distinct_names_get_distinct_tags() {
        let xml = TagNamespace::new();
        let a = xml.tag("a");
        let b = xml.tag("b");
        assert_eq!(a.name(), "a");
        assert_eq!(b.name(), "b");
        assert!(!a.ptr_eq(&b));
        assert_eq!(xml.len(), 2);
    }

    #[test]
    fn test_namespaces_do_not_share_tags() {
        let one = TagNamespace::new();
        let two = TagNamespace::new();
        assert!(!one.tag("x").ptr_eq(&two.tag("x")));
    }

    #[test]
    fn test_namespace_options_apply_to_new_tags() {
        let svg = TagNamespace::with_options(TagOptions::default().shorten_empty_tag(false));
        let el = svg.tag("path").empty(Attributes::new());
        assert_eq!(el.to_string(), "<path></path>");
    }

    #[test]
    fn test_atom_feed() {
        let xml = TagNamespace::new();
        let atom = xml.tag("feed").call(
            [
                xml.tag("title").wrap(["Example Feed"]),
                xml.tag("link")
                    .empty(Attributes::from([("href", "http://example.org/")])),
                xml.tag("author").wrap([xml.tag("name").wrap(["John Doe"])]),
                xml.tag("entry").wrap([
                    xml.tag("title").wrap(["Atom-Powered Robots Run Amok"]),
                    xml.tag("summary").wrap(["Some text."]),
                ]),
            ],
            Attributes::from([("xmlns", "http://www.w3.org/2005/Atom")]),
        );
        assert_eq!(
            atom.to_string(),
            concat!(
                r#"<feed xmlns="http://www.w3.org/2005/Atom">"#,
                "<title>Example Feed</title>",
                r#"<link href="http://example.org/" />"#,
                "<author><name>John Doe</name></author>",
                "<entry><title>Atom-Powered Robots Run Amok</title>",
                "<summary>Some text.</summary></entry>",
                "</feed>"
            )
        );
    }
}
