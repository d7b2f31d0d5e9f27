//! Element attributes.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Attribute value stringified at render time.
///
/// The wrapped value is kept as-is until the attribute fragment is produced,
/// so a value whose [`Display`](fmt::Display) output changes between
/// construction and serialization is rendered in its latest form.
#[derive(Clone)]
pub struct AttrValue(Rc<dyn fmt::Display>);

impl AttrValue {
    /// Wrap any displayable value.
    pub fn display(value: impl fmt::Display + 'static) -> Self {
        Self(Rc::new(value))
    }

    /// Current string form of the value.
    pub fn render(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.render())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::display(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::display(value)
    }
}

macro_rules! attr_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::display(value)
                }
            }
        )*
    };
}

attr_value_from_display!(bool, char, i32, i64, u8, u16, u32, u64, usize, f32, f64);

/// Normalize an identifier-style attribute name.
///
/// Leading and trailing underscores are stripped and the remaining
/// underscores become hyphens, so `class_` renders as `class` and
/// `http_equiv` as `http-equiv`.
///
/// ```
/// use dirty_core::normalize_name;
///
/// assert_eq!(normalize_name("_attr_name_"), "attr-name");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim_matches('_').replace('_', "-")
}

/// Ordered attribute mapping.
///
/// Iteration follows insertion order. Inserting an existing name replaces
/// its value but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attributes::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Fold another mapping in; its values win on name collision.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Attribute at `index` in iteration order.
    pub(crate) fn get_index(&self, index: usize) -> Option<(&str, &AttrValue)> {
        self.entries
            .get_index(index)
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Copy with every name passed through [`normalize_name`].
    ///
    /// Names that collide after normalization keep the first position and
    /// the last value.
    pub(crate) fn normalized(self) -> Self {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (name, value) in self.entries {
            entries.insert(normalize_name(&name), value);
        }
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
