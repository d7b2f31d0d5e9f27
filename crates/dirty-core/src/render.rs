//! Lazy, pull-based serialization of element trees.
//!
//! [`Fragments`] walks the tree with an explicit stack of element cursors.
//! Each cursor flattens its children on the fly: nested sequences are
//! descended into and [`LazyChildren`](crate::LazyChildren) factories are
//! started only when reached, then advanced one item per pulled leaf. Nothing
//! is materialized ahead of what the consumer asks for, and dropping the
//! iterator early runs no cleanup.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::child::Child;
use crate::element::Element;

/// Opening CDATA delimiter.
pub const CDATA_OPEN: &str = "<![CDATA[";

/// Closing CDATA delimiter.
pub const CDATA_CLOSE: &str = "]]>";

/// One piece of serialized markup.
pub type Fragment = Cow<'static, str>;

/// Escape markup-significant characters.
///
/// Replaces `&`, `<`, `>` and `"` with entity references and leaves
/// everything else untouched.
///
/// ```
/// use dirty_core::escape_markup;
///
/// assert_eq!(escape_markup(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// assert_eq!(escape_markup("plain"), "plain");
/// ```
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Iterator over the markup fragments of an [`Element`].
///
/// Created by [`Element::fragments`]. Each call to `next` does only the work
/// needed for one fragment. Concatenating every fragment gives the same
/// string as the element's [`Display`](std::fmt::Display) output.
pub struct Fragments {
    stack: Vec<Cursor>,
    pending: VecDeque<Fragment>,
}

impl Fragments {
    pub(crate) fn new(root: Element) -> Self {
        Self {
            stack: vec![Cursor::new(root)],
            pending: VecDeque::new(),
        }
    }

    /// Queue a fragment, applying CDATA commenting of the innermost element
    /// that asks for it.
    fn emit(&mut self, fragment: Fragment) {
        let comment = self
            .stack
            .iter()
            .rev()
            .find_map(|cursor| cursor.element.rendering().cdata_comment.as_deref());

        let fragment = match comment {
            Some(marker) if fragment == CDATA_OPEN || fragment == CDATA_CLOSE => {
                Cow::Owned(format!("\n{marker} {fragment}\n"))
            }
            _ => fragment,
        };
        self.pending.push_back(fragment);
    }

    /// Advance the innermost cursor by one step.
    ///
    /// Returns `false` once the whole tree has been visited.
    fn step(&mut self) -> bool {
        let Some(cursor) = self.stack.last_mut() else {
            return false;
        };

        match cursor.advance() {
            Step::Emit(fragments) => {
                for fragment in fragments {
                    self.emit(fragment);
                }
            }
            Step::Descend(element) => self.stack.push(Cursor::new(element)),
            Step::Finish => {
                self.stack.pop();
            }
        }
        true
    }
}

impl Iterator for Fragments {
    type Item = Fragment;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(fragment);
            }
            if !self.step() {
                return None;
            }
        }
    }
}

/// Result of advancing a cursor.
enum Step {
    Emit(Vec<Fragment>),
    Descend(Element),
    Finish,
}

/// Serialization progress within one element.
enum Phase {
    Start,
    Attributes(usize),
    Children(Flatten),
    Done,
}

struct Cursor {
    element: Element,
    phase: Phase,
}

impl Cursor {
    fn new(element: Element) -> Self {
        Self {
            element,
            phase: Phase::Start,
        }
    }

    fn advance(&mut self) -> Step {
        let name = self.element.tag().name();
        let options = self.element.tag().options();

        match &mut self.phase {
            Phase::Start => {
                let mut fragments = Vec::with_capacity(3);
                if let Some(prologue) = &self.element.rendering().prologue {
                    fragments.push(prologue.clone());
                    fragments.push(Cow::Borrowed("\n"));
                }
                fragments.push(Cow::Owned(format!("<{name}")));
                self.phase = Phase::Attributes(0);
                Step::Emit(fragments)
            }
            Phase::Attributes(index) => {
                if let Some((attr, value)) = self.element.attributes().get_index(*index) {
                    *index += 1;
                    let value = value.render();
                    return Step::Emit(vec![Cow::Owned(format!(
                        r#" {attr}="{}""#,
                        escape_markup(&value)
                    ))]);
                }

                let mut children = Flatten::new(Rc::clone(self.element.shared_children()));
                if children.peek() {
                    self.phase = Phase::Children(children);
                    Step::Emit(vec![Cow::Borrowed(">")])
                } else {
                    self.phase = Phase::Done;
                    let close = if options.shorten_empty_tag {
                        Cow::Borrowed(" />")
                    } else {
                        Cow::Owned(format!("></{name}>"))
                    };
                    Step::Emit(vec![close])
                }
            }
            Phase::Children(children) => match children.next() {
                Some(Leaf::Text(text)) if options.cdata_section => Step::Emit(vec![
                    Cow::Borrowed(CDATA_OPEN),
                    Cow::Owned(text.to_string()),
                    Cow::Borrowed(CDATA_CLOSE),
                ]),
                Some(Leaf::Text(text)) => {
                    Step::Emit(vec![Cow::Owned(escape_markup(&text).into_owned())])
                }
                Some(Leaf::Element(element)) => Step::Descend(element),
                None => {
                    self.phase = Phase::Done;
                    Step::Emit(vec![Cow::Owned(format!("</{name}>"))])
                }
            },
            Phase::Done => Step::Finish,
        }
    }
}

/// Flattened child: text or a nested element.
enum Leaf {
    Text(Rc<str>),
    Element(Element),
}

/// Source of children at one nesting level.
enum Source {
    Slice { children: Rc<[Child]>, index: usize },
    Lazy(Box<dyn Iterator<Item = Child>>),
}

impl Source {
    fn next(&mut self) -> Option<Child> {
        match self {
            Self::Slice { children, index } => {
                let child = children.get(*index).cloned();
                *index += 1;
                child
            }
            Self::Lazy(iter) => iter.next(),
        }
    }
}

/// Depth-first flattening of nested and lazy children.
struct Flatten {
    sources: Vec<Source>,
    peeked: Option<Leaf>,
}

impl Flatten {
    fn new(children: Rc<[Child]>) -> Self {
        Self {
            sources: vec![Source::Slice { children, index: 0 }],
            peeked: None,
        }
    }

    /// Pull the first leaf ahead of time; `false` if there is none.
    fn peek(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.pull();
        }
        self.peeked.is_some()
    }

    fn next(&mut self) -> Option<Leaf> {
        self.peeked.take().or_else(|| self.pull())
    }

    fn pull(&mut self) -> Option<Leaf> {
        loop {
            let source = self.sources.last_mut()?;
            match source.next() {
                None => {
                    self.sources.pop();
                }
                Some(Child::Text(text)) => return Some(Leaf::Text(text)),
                Some(Child::Element(element)) => return Some(Leaf::Element(element)),
                Some(Child::Seq(children)) => {
                    self.sources.push(Source::Slice { children, index: 0 });
                }
                Some(Child::Lazy(lazy)) => self.sources.push(Source::Lazy(lazy.iter())),
            }
        }
    }
}
