//! Tag and element model for building HTML/XML documents out of values.
//!
//! A [`Tag`] describes an element type (a name plus [`TagOptions`]) and acts
//! as a factory for [`Element`]s. An element tree is serialized lazily: the
//! [`Fragments`] iterator yields markup one piece at a time and only advances
//! caller-supplied [`LazyChildren`] as far as the next fragment requires.
//!
//! # Architecture
//!
//! - [`Tag`] / [`TagOptions`]: immutable element-type descriptors
//! - [`Element`]: tag, normalized [`Attributes`] and nested [`Child`] content
//! - [`Fragments`]: pull-based serializer over an explicit work stack
//! - [`TagNamespace`]: create-on-first-access tags for open vocabularies
//! - [`TagCatalog`]: tags bulk-created from a list of names
//!
//! # Example
//!
//! ```
//! use dirty_core::{Attributes, Tag};
//!
//! let p = Tag::new("p");
//! let em = Tag::new("em");
//! let el = p.call([em.wrap(["fin"])], Attributes::from([("class_", "note")]));
//! assert_eq!(el.to_string(), r#"<p class="note"><em>fin</em></p>"#);
//! ```

mod attributes;
mod catalog;
mod child;
mod element;
mod error;
mod namespace;
mod render;
mod tag;

pub use attributes::{AttrValue, Attributes, normalize_name};
pub use catalog::TagCatalog;
pub use child::{Child, LazyChildren};
pub use element::{Arg, Element};
pub use error::ElementError;
pub use namespace::TagNamespace;
pub use render::{CDATA_CLOSE, CDATA_OPEN, Fragment, Fragments, escape_markup};
pub use tag::{Tag, TagOptions};
