//! Element-type descriptors.

use std::fmt;
use std::sync::Arc;

use crate::attributes::Attributes;
use crate::child::Child;
use crate::element::Element;

/// Rendering options recognized by the serializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TagOptions {
    /// Render a childless element as `<name />` instead of `<name></name>`.
    pub shorten_empty_tag: bool,
    /// Wrap text children in CDATA markers instead of entity-escaping them.
    pub cdata_section: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            shorten_empty_tag: true,
            cdata_section: false,
        }
    }
}

impl TagOptions {
    /// Set the `shorten_empty_tag` option.
    #[must_use]
    pub const fn shorten_empty_tag(mut self, value: bool) -> Self {
        self.shorten_empty_tag = value;
        self
    }

    /// Set the `cdata_section` option.
    #[must_use]
    pub const fn cdata_section(mut self, value: bool) -> Self {
        self.cdata_section = value;
        self
    }
}

/// Markup element type, e.g. `<a>` or `<strong>`.
///
/// Tags are immutable and cheap to clone; clones share the same descriptor.
/// Two tags created separately are distinct even when their names match,
/// see [`Tag::ptr_eq`].
///
/// ```
/// use dirty_core::Tag;
///
/// let strong = Tag::new("strong");
/// let el = strong.wrap(["This sentence is emphatic!"]);
/// assert_eq!(el.to_string(), "<strong>This sentence is emphatic!</strong>");
/// ```
#[derive(Clone)]
pub struct Tag {
    inner: Arc<TagInner>,
}

struct TagInner {
    name: Box<str>,
    options: TagOptions,
}

impl Tag {
    /// Define a tag with default options.
    ///
    /// The name is used as-is: neither emptiness nor markup-legal characters
    /// are checked, and a bad name simply produces bad markup.
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self::with_options(name, TagOptions::default())
    }

    /// Define a tag with explicit rendering options.
    pub fn with_options(name: impl Into<Box<str>>, options: TagOptions) -> Self {
        Self {
            inner: Arc::new(TagInner {
                name: name.into(),
                options,
            }),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Rendering options.
    pub fn options(&self) -> TagOptions {
        self.inner.options
    }

    /// Whether both handles refer to the same tag instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Create an element of this tag.
    pub fn call<I>(&self, children: I, attributes: Attributes) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        Element::from_parts(
            self.clone(),
            children.into_iter().map(Into::into).collect(),
            attributes,
        )
    }

    /// Create an element with children and no attributes.
    pub fn wrap<I>(&self, children: I) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.call(children, Attributes::new())
    }

    /// Create a childless element.
    pub fn empty(&self, attributes: Attributes) -> Element {
        Element::from_parts(self.clone(), Vec::new(), attributes)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name())
            .field("options", &self.options())
            .finish()
    }
}
