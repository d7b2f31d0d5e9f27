//! `<script>` element with commented CDATA content.

use std::sync::LazyLock;

use dirty_core::{Attributes, Child, Element, Tag, TagOptions};

static SCRIPT: LazyLock<Tag> = LazyLock::new(|| {
    Tag::with_options(
        "script",
        TagOptions::default()
            .shorten_empty_tag(false)
            .cdata_section(true),
    )
});

/// Shared `script` tag: never self-closed, text kept in CDATA sections.
pub fn script_tag() -> Tag {
    SCRIPT.clone()
}

/// `<script>` element.
///
/// Text children are wrapped in CDATA sections whose delimiters sit on
/// their own lines behind `//`, so the markup stays valid both as XHTML
/// and as JavaScript.
///
/// ```
/// use dirty_core::{Attributes, Child};
/// use dirty_html::script;
///
/// let el = script(
///     Vec::<Child>::new(),
///     Attributes::from([("src", "dirty.js"), ("type", "text/javascript")]),
/// );
/// assert_eq!(
///     el.to_string(),
///     r#"<script src="dirty.js" type="text/javascript"></script>"#
/// );
/// ```
pub fn script<I>(children: I, attributes: Attributes) -> Element
where
    I: IntoIterator,
    I::Item: Into<Child>,
{
    SCRIPT.call(children, attributes).with_commented_cdata("//")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_script() {
        let el = script(
            ["alert(1);"],
            Attributes::from([("type", "text/javascript")]),
        );
        assert_eq!(
            el.to_string(),
            "<script type=\"text/javascript\">\n// <![CDATA[\nalert(1);\n// ]]>\n</script>"
        );
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let el = script(["if (a < b && c) {}"], Attributes::new());
        let fragments: Vec<String> = el.fragments().map(Into::into).collect();
        assert_eq!(
            fragments,
            vec![
                "<script",
                ">",
                "\n// <![CDATA[\n",
                "if (a < b && c) {}",
                "\n// ]]>\n",
                "</script>",
            ]
        );
    }

    #[test]
    fn test_empty_script_is_not_shortened() {
        let el = script(Vec::<Child>::new(), Attributes::new());
        assert_eq!(el.to_string(), "<script></script>");
    }

    #[test]
    fn test_script_tag_is_shared() {
        assert!(script_tag().ptr_eq(&script_tag()));
        let options = script_tag().options();
        assert!(!options.shorten_empty_tag);
        assert!(options.cdata_section);
    }

    #[test]
    fn test_plain_tag_with_same_options_keeps_plain_markers() {
        let el = script_tag().wrap(["x"]);
        assert_eq!(el.to_string(), "<script><![CDATA[x]]></script>");
    }
}
