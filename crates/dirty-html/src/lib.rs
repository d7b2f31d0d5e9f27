//! HTML vocabulary for the dirty templating library.
//!
//! Provides one shared [`Tag`] per XHTML 1.0 element, looked up from a
//! process-wide catalog, plus two specialized element constructors:
//!
//! - [`xhtml`]: `<html>` document root prefixed by the XHTML 1.0 Strict DOCTYPE
//! - [`script`]: `<script>` that is never self-closed and keeps its text in a
//!   commented CDATA section
//!
//! # Example
//!
//! ```
//! use dirty_core::{Attributes, Child};
//! use dirty_html::{li, ul};
//!
//! let members = [("Hong, MinHee", true), ("John Doe", false)];
//! // Items are built while the list is serialized, not here.
//! let list = ul().wrap([Child::lazy(move || {
//!     members.into_iter().map(|(name, admin)| {
//!         Child::from(li().call(
//!             [name],
//!             Attributes::from([("class_", if admin { "admin" } else { "" })]),
//!         ))
//!     })
//! })]);
//! assert_eq!(
//!     list.to_string(),
//!     r#"<ul><li class="admin">Hong, MinHee</li><li class="">John Doe</li></ul>"#
//! );
//! ```

mod script;
mod xhtml;

use std::sync::LazyLock;

use dirty_core::{Tag, TagCatalog, TagOptions};

pub use script::{script, script_tag};
pub use xhtml::{XHTML_STRICT_DOCTYPE, XHTML_XMLNS, xhtml};

macro_rules! html_tags {
    ($($name:ident),* $(,)?) => {
        /// Names of the standard HTML tags in the catalog.
        pub const TAG_NAMES: &[&str] = &[$(stringify!($name)),*];

        $(
            #[doc = concat!("The `<", stringify!($name), ">` tag.")]
            pub fn $name() -> Tag {
                lookup(stringify!($name))
            }
        )*
    };
}

html_tags!(
    a, abbr, acronym, address, applet, area, b, base, basefont, bdo, big, blockquote, body, br,
    button, caption, center, cite, code, col, colgroup, dd, del, dfn, dir, div, dl, dt, em,
    fieldset, font, form, frame, frameset, h1, h2, h3, h4, h5, h6, head, hr, html, i, iframe, img,
    input, ins, isindex, kbd, label, legend, li, link, map, menu, meta, noframes, noscript, object,
    ol, optgroup, option, param, p, pre, q, s, samp, select, small, span, strike, strong, style,
    sub, sup, table, tbody, td, textarea, tfoot, th, thead, title, tr, tt, u, ul, var, xmp,
);

static CATALOG: LazyLock<TagCatalog> =
    LazyLock::new(|| TagCatalog::from_names(TAG_NAMES, TagOptions::default()));

/// Catalog of the standard HTML tags, built on first use.
pub fn catalog() -> &'static TagCatalog {
    &CATALOG
}

/// Look up a standard HTML tag by name.
pub fn tag(name: &str) -> Option<Tag> {
    catalog().get(name).cloned()
}

fn lookup(name: &'static str) -> Tag {
    tag(name).unwrap_or_else(|| Tag::new(name))
}
