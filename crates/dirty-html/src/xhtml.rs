//! XHTML document root.

use dirty_core::{Attributes, Child, Element};

/// XHTML 1.0 Strict document type declaration.
pub const XHTML_STRICT_DOCTYPE: &str = "<!DOCTYPE html PUBLIC\n    \"-//W3C//DTD XHTML 1.0 Strict//EN\"\n    \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">";

/// XHTML namespace URI.
pub const XHTML_XMLNS: &str = "http://www.w3.org/1999/xhtml";

/// XHTML document element.
///
/// Renders the XHTML 1.0 Strict DOCTYPE, a newline and an `<html>` element
/// whose first attribute is `xmlns`. An `xmlns` in `attributes` replaces the
/// default value.
///
/// ```
/// use dirty_core::{Attributes, Child};
/// use dirty_html::xhtml;
///
/// let page = xhtml(Vec::<Child>::new(), Attributes::new());
/// assert_eq!(
///     page.to_string(),
///     concat!(
///         "<!DOCTYPE html PUBLIC\n",
///         "    \"-//W3C//DTD XHTML 1.0 Strict//EN\"\n",
///         "    \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n",
///         "<html xmlns=\"http://www.w3.org/1999/xhtml\" />",
///     )
/// );
/// ```
pub fn xhtml<I>(children: I, attributes: Attributes) -> Element
where
    I: IntoIterator,
    I::Item: Into<Child>,
{
    let mut merged = Attributes::new().with("xmlns", XHTML_XMLNS);
    merged.merge(attributes);
    crate::html()
        .call(children, merged)
        .with_prologue(XHTML_STRICT_DOCTYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{body, h1, head, meta, title};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fragments_start_with_doctype() {
        let page = xhtml(Vec::<Child>::new(), Attributes::new());
        let fragments: Vec<String> = page.fragments().map(Into::into).collect();
        assert_eq!(
            fragments,
            vec![
                XHTML_STRICT_DOCTYPE,
                "\n",
                "<html",
                r#" xmlns="http://www.w3.org/1999/xhtml""#,
                " />",
            ]
        );
    }

    #[test]
    fn test_full_page() {
        let page = xhtml(
            [
                head().wrap([
                    title().wrap(["Dirty"]),
                    meta().empty(
                        Attributes::new()
                            .with("name", "Author")
                            .with("content", "Hong, MinHee <minhee@dahlia.kr>"),
                    ),
                ]),
                body().wrap([h1().wrap(["Dirty"])]),
            ],
            Attributes::from([("lang", "en")]),
        );
        let expected = format!(
            "{XHTML_STRICT_DOCTYPE}\n{}",
            concat!(
                r#"<html xmlns="http://www.w3.org/1999/xhtml" lang="en">"#,
                "<head><title>Dirty</title>",
                r#"<meta name="Author" content="Hong, MinHee &lt;minhee@dahlia.kr&gt;" />"#,
                "</head><body><h1>Dirty</h1></body></html>",
            )
        );
        assert_eq!(page.to_string(), expected);
    }

    #[test]
    fn test_xmlns_can_be_overridden() {
        let page = xhtml(
            Vec::<Child>::new(),
            Attributes::from([("xmlns", "urn:custom"), ("lang", "en")]),
        );
        let attributes: Vec<(String, String)> = page
            .attributes()
            .iter()
            .map(|(name, value)| (name.to_owned(), value.render()))
            .collect();
        assert_eq!(
            attributes,
            vec![
                ("xmlns".to_owned(), "urn:custom".to_owned()),
                ("lang".to_owned(), "en".to_owned()),
            ]
        );
    }

    #[test]
    fn test_root_uses_catalog_html_tag() {
        let page = xhtml(Vec::<Child>::new(), Attributes::new());
        assert!(page.tag().ptr_eq(&crate::html()));
    }
}
