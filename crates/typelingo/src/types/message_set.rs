use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::{Deserialize, Serialize};

/// One template string per locale for a single logical message.
///
/// Serializes as a plain map from locale to template:
///
/// ```
/// use typelingo::MessageSet;
///
/// let greeting = MessageSet::new()
///     .with("en", "Hello, {name}!")
///     .with("fr", "Bonjour, {name} !");
///
/// assert_eq!(greeting.get("fr"), Some("Bonjour, {name} !"));
/// assert_eq!(greeting.get("de"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageSet {
    templates: BTreeMap<String, String>,
}

impl MessageSet {
    /// Create an empty message set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template for a locale and return the set.
    ///
    /// A later template for the same locale replaces the earlier one.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(locale, template);
        self
    }

    /// Set the template for a locale, returning the previous one.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.templates.insert(locale.into(), template.into())
    }

    /// Get the template for a locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.templates.get(locale).map(String::as_str)
    }

    /// Check whether a template exists for a locale.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.templates.contains_key(locale)
    }

    /// Locales that have a template, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Iterate over `(locale, template)` pairs in locale order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.templates.iter()
    }

    /// Number of locales with a template.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check whether the set has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(locale, template)| (locale.into(), template.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MessageSet {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
