//! Element construction errors.

/// Error constructing an [`Element`](crate::Element) from positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ElementError {
    /// No non-attribute argument was given to identify the tag.
    #[error("missing tag")]
    MissingTag,

    /// The first non-attribute argument is not a tag.
    #[error("expected Tag, but given {found}")]
    WrongTagType {
        /// Kind of the offending argument (e.g. `"text"`).
        found: &'static str,
    },

    /// A tag appeared among the children.
    #[error("unexpected Tag at child position {index}")]
    TagAsChild {
        /// Zero-based position among the children.
        index: usize,
    },
}
