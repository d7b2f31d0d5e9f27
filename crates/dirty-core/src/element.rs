//! Element tree nodes.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::attributes::Attributes;
use crate::child::{Child, LazyChildren};
use crate::error::ElementError;
use crate::render::Fragments;
use crate::tag::Tag;

/// Positional argument to [`Element::new`].
#[derive(Clone, Debug)]
pub enum Arg {
    /// Element type. Must be the first non-attribute argument.
    Tag(Tag),
    /// Attribute mapping merged into the element's attributes.
    Attributes(Attributes),
    /// Content.
    Child(Child),
}

impl Arg {
    /// Short name of the argument kind, used in error messages.
    fn kind(&self) -> &'static str {
        match self {
            Self::Tag(_) => "Tag",
            Self::Attributes(_) => "Attributes",
            Self::Child(Child::Text(_)) => "text",
            Self::Child(Child::Element(_)) => "Element",
            Self::Child(Child::Seq(_)) => "sequence",
            Self::Child(Child::Lazy(_)) => "lazy sequence",
        }
    }
}

impl From<Tag> for Arg {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&Tag> for Arg {
    fn from(tag: &Tag) -> Self {
        Self::Tag(tag.clone())
    }
}

impl From<Attributes> for Arg {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes(attributes)
    }
}

impl From<Child> for Arg {
    fn from(child: Child) -> Self {
        Self::Child(child)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Self::Child(text.into())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Self::Child(text.into())
    }
}

impl From<Element> for Arg {
    fn from(element: Element) -> Self {
        Self::Child(element.into())
    }
}

impl From<LazyChildren> for Arg {
    fn from(lazy: LazyChildren) -> Self {
        Self::Child(lazy.into())
    }
}

impl<T: Into<Child>> From<Vec<T>> for Arg {
    fn from(children: Vec<T>) -> Self {
        Self::Child(children.into())
    }
}

/// Serialization extras layered on top of the plain element form.
#[derive(Clone, Debug, Default)]
pub(crate) struct Rendering {
    /// Emitted, followed by a newline, before the opening tag.
    pub(crate) prologue: Option<Cow<'static, str>>,
    /// Line-comment marker placed in front of CDATA delimiters.
    pub(crate) cdata_comment: Option<Cow<'static, str>>,
}

/// Markup element: a tag, attributes and children.
///
/// Elements are immutable once built and cheap to clone. Serializing does
/// not consume or alter the tree, so the same element can be rendered any
/// number of times, see [`Element::fragments`].
#[derive(Clone, Debug)]
pub struct Element {
    tag: Tag,
    attributes: Rc<Attributes>,
    children: Rc<[Child]>,
    rendering: Rendering,
}

impl Element {
    /// Create an element from positional arguments and keyword attributes.
    ///
    /// [`Arg::Attributes`] arguments are merged into `keywords` in order,
    /// later entries overriding earlier ones. Of the remaining arguments the
    /// first must be a [`Tag`]; the rest become children. Every attribute name
    /// is then normalized with [`normalize_name`](crate::normalize_name).
    ///
    /// ```
    /// use dirty_core::{Arg, Attributes, Element, Tag};
    ///
    /// let el = Element::new(
    ///     [
    ///         Arg::from(Tag::new("p")),
    ///         Attributes::from([("class", "css class")]).into(),
    ///         "text.".into(),
    ///     ],
    ///     Attributes::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(el.to_string(), r#"<p class="css class">text.</p>"#);
    /// ```
    pub fn new<I>(args: I, keywords: Attributes) -> Result<Self, ElementError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut attributes = keywords;
        let mut tag = None;
        let mut children = Vec::new();

        for arg in args {
            match arg {
                Arg::Attributes(dict) => attributes.merge(dict),
                Arg::Tag(found) if tag.is_none() => tag = Some(found),
                Arg::Tag(_) => {
                    return Err(ElementError::TagAsChild {
                        index: children.len(),
                    });
                }
                Arg::Child(child) if tag.is_none() => {
                    return Err(ElementError::WrongTagType {
                        found: Arg::Child(child).kind(),
                    });
                }
                Arg::Child(child) => children.push(child),
            }
        }

        let tag = tag.ok_or(ElementError::MissingTag)?;
        Ok(Self::from_parts(tag, children, attributes))
    }

    pub(crate) fn from_parts(tag: Tag, children: Vec<Child>, attributes: Attributes) -> Self {
        Self {
            tag,
            attributes: Rc::new(attributes.normalized()),
            children: children.into(),
            rendering: Rendering::default(),
        }
    }

    /// Emit `prologue` and a newline before the element.
    ///
    /// Used for document roots that must be preceded by a document type
    /// declaration.
    #[must_use]
    pub fn with_prologue(mut self, prologue: impl Into<Cow<'static, str>>) -> Self {
        self.rendering.prologue = Some(prologue.into());
        self
    }

    /// Put CDATA delimiters on their own lines behind a line comment.
    ///
    /// While this element is serialized, every fragment equal to
    /// [`CDATA_OPEN`](crate::CDATA_OPEN) or [`CDATA_CLOSE`](crate::CDATA_CLOSE)
    /// is replaced by `"\n{marker} {delimiter}\n"`.
    #[must_use]
    pub fn with_commented_cdata(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.rendering.cdata_comment = Some(marker.into());
        self
    }

    /// Element type.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Normalized attributes in construction order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Children as given, not flattened.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub(crate) fn shared_children(&self) -> &Rc<[Child]> {
        &self.children
    }

    pub(crate) fn rendering(&self) -> &Rendering {
        &self.rendering
    }

    /// Lazily serialize the element.
    ///
    /// ```
    /// use dirty_core::{Attributes, Tag};
    ///
    /// let meta = Tag::new("meta");
    /// let el = meta.empty(Attributes::from([("http_equiv", "Content-Type")]));
    /// let mut fragments = el.fragments();
    /// assert_eq!(fragments.next().as_deref(), Some("<meta"));
    /// assert_eq!(fragments.next().as_deref(), Some(r#" http-equiv="Content-Type""#));
    /// assert_eq!(fragments.next().as_deref(), Some(" />"));
    /// assert_eq!(fragments.next(), None);
    /// ```
    pub fn fragments(&self) -> Fragments {
        Fragments::new(self.clone())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.fragments() {
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}

impl IntoIterator for &Element {
    type Item = crate::render::Fragment;
    type IntoIter = Fragments;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments()
    }
}
