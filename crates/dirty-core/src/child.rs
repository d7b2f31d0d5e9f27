//! Element content.

use std::fmt;
use std::rc::Rc;

use crate::element::Element;

/// One entry of an element's content.
///
/// Nested sequences are kept as-is at construction time and flattened while
/// serializing.
#[derive(Clone, Debug)]
pub enum Child {
    /// Text content, escaped according to the parent tag's options.
    Text(Rc<str>),
    /// Nested element.
    Element(Element),
    /// Nested sequence of children.
    Seq(Rc<[Child]>),
    /// Children produced on demand.
    Lazy(LazyChildren),
}

impl Child {
    /// Children produced by `factory` each time the parent is serialized.
    ///
    /// ```
    /// use dirty_core::{Child, Tag};
    ///
    /// let ul = Tag::new("ul");
    /// let li = Tag::new("li");
    /// let list = ul.wrap([Child::lazy(move || {
    ///     (1..=2).map({
    ///         let li = li.clone();
    ///         move |n| Child::from(li.wrap([n.to_string()]))
    ///     })
    /// })]);
    /// assert_eq!(list.to_string(), "<ul><li>1</li><li>2</li></ul>");
    /// ```
    pub fn lazy<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'static,
    {
        Self::Lazy(LazyChildren::new(factory))
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(Rc::from(text))
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(Rc::from(text))
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<LazyChildren> for Child {
    fn from(lazy: LazyChildren) -> Self {
        Self::Lazy(lazy)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(children: Vec<T>) -> Self {
        Self::Seq(children.into_iter().map(Into::into).collect())
    }
}

/// Factory for children computed during serialization.
///
/// Every traversal calls the factory again and receives a fresh iterator,
/// so serializing an element twice yields the same output and no iteration
/// state is stored on the element itself. The iterator is advanced only as
/// far as the consumer of the fragment stream pulls.
#[derive(Clone)]
pub struct LazyChildren {
    factory: Rc<dyn Fn() -> Box<dyn Iterator<Item = Child>>>,
}

impl LazyChildren {
    /// Wrap a factory closure.
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = Child>,
        I::IntoIter: 'static,
    {
        Self {
            factory: Rc::new(move || -> Box<dyn Iterator<Item = Child>> {
                Box::new(factory().into_iter())
            }),
        }
    }

    /// Start a new traversal.
    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = Child>> {
        (self.factory)()
    }
}

impl fmt::Debug for LazyChildren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyChildren(..)")
    }
}
