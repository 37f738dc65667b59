//! Token table type.

use std::borrow::Cow;

/// A closed set of design tokens mapping symbolic names to CSS values.
///
/// Tables are `'static` constants; the key set is fixed at build time.
///
/// # Example
///
/// ```rust
/// use viberante::tokens::SPACING;
///
/// assert_eq!(SPACING.resolve("small"), "8px");
/// // Unknown names pass through as literal values
/// assert_eq!(SPACING.resolve("12px"), "12px");
/// ```
#[derive(Debug)]
pub struct TokenTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl TokenTable {
    pub(crate) const fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, entries }
    }

    /// Table name, e.g. `"spacing"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a token by name.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Returns true if `key` is one of this table's tokens.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Resolves a token to its CSS value, or returns `key` unchanged when it
    /// is not a known token.
    pub fn resolve<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(value) => Cow::Borrowed(value),
            None => {
                tracing::trace!(table = self.name, value = key, "passing literal value through");
                Cow::Borrowed(key)
            }
        }
    }

    /// Iterates over `(token, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
