//! The resolved style record.

use cssparser::{Parser, ParserInput, Token};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::util::css_property_name;

/// An ordered mapping from style property names to CSS values.
///
/// Property names use the camelCase form expected by inline style APIs
/// (`backgroundColor`, `boxShadow`). Every entry holds a concrete value: there
/// is no way to store an absent one, so a record can be applied to an element
/// as-is.
///
/// Insertion order is kept. Setting a property that already exists replaces
/// its value in place.
///
/// # Example
///
/// ```rust
/// use viberante::StyleRecord;
///
/// let mut style = StyleRecord::new();
/// style.set("padding", "8px");
/// style.set_opt("width", None::<&str>);
/// style.set("boxShadow", "none");
///
/// assert_eq!(style.get("padding"), Some("8px"));
/// assert!(!style.contains("width"));
/// assert_eq!(style.to_css(), "padding: 8px; box-shadow: none");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRecord {
    properties: IndexMap<String, String>,
}

impl StyleRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any existing value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Sets a property only when a value is present.
    pub fn set_opt<V: Into<String>>(&mut self, property: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    /// Adds a property, returning the record for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Applies every entry of `other` on top of this record.
    pub fn merge(&mut self, other: &StyleRecord) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.shift_remove(property)
    }

    /// Iterates over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders the record as CSS declarations for a `style` attribute.
    ///
    /// Property names are converted to kebab-case; declarations are joined
    /// with `"; "`. A value that would end its declaration early (a `;`
    /// outside any string, url or bracketed block) is left out, so one
    /// literal value can never add declarations of its own.
    pub fn to_css(&self) -> String {
        self.iter()
            .filter(|(property, value)| {
                let keep = is_single_declaration_value(value);
                if !keep {
                    tracing::debug!(property, value, "dropping style value that spans declarations");
                }
                keep
            })
            .map(|(property, value)| format!("{}: {}", css_property_name(property), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn is_single_declaration_value(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    while let Ok(token) = parser.next_including_whitespace_and_comments() {
        if matches!(token, Token::Semicolon | Token::CloseCurlyBracket) {
            return false;
        }
    }
    true
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = StyleRecord::new();
        for (property, value) in iter {
            record.set(property, value);
        }
        record
    }
}
