//! Supported locales and the current locale selection.

use std::sync::{PoisonError, RwLock};

use bon::Builder;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LocaleError, compute_suggestions};
use crate::resolver::MessageResolver;
use crate::types::MessageSet;

/// Configuration for a [`LocaleRegistry`].
///
/// Deserializable so applications can keep it alongside their own settings:
///
/// ```
/// use typelingo::{LocaleRegistry, RegistryOptions};
///
/// let options = RegistryOptions::builder()
///     .locales(vec!["en".to_string(), "de".to_string()])
///     .current_locale("de")
///     .build();
///
/// let registry = LocaleRegistry::from_options(options);
/// assert_eq!(registry.current_locale(), "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct RegistryOptions {
    /// Supported locales, in declaration order.
    pub locales: Vec<String>,

    /// Locale active at startup. Should be one of `locales`.
    pub current_locale: String,
}

/// The set of supported locales and the currently selected one.
///
/// The supported list is fixed at construction. The current locale can only
/// move between supported locales via [`change_locale`](Self::change_locale).
/// Resolvers created by [`create_resolver`](Self::create_resolver) borrow the
/// registry and read the current locale each time they render, so a locale
/// change is visible to every resolver immediately.
///
/// # Example
///
/// ```
/// use typelingo::{LocaleRegistry, LocaleError};
///
/// let registry = LocaleRegistry::new(["en", "fr"], "en");
///
/// registry.change_locale("fr").unwrap();
/// assert_eq!(registry.current_locale(), "fr");
///
/// let err = registry.change_locale("de").unwrap_err();
/// assert!(matches!(err, LocaleError::LocaleNotAvailable { .. }));
/// assert_eq!(registry.current_locale(), "fr");
/// ```
#[derive(Debug)]
pub struct LocaleRegistry {
    /// Supported locales, in declaration order.
    locales: Vec<String>,

    /// The active locale. Always one of `locales` once changed through
    /// `change_locale`; the initial value is the caller's responsibility.
    current_locale: RwLock<String>,
}

impl LocaleRegistry {
    /// Create a registry with the given supported locales and initial locale.
    ///
    /// The initial locale is expected to be one of `locales` but is not
    /// checked here; only later changes are validated.
    pub fn new<I, S>(locales: I, current_locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        let current_locale = current_locale.into();
        if !locales.contains(&current_locale) {
            warn!("initial locale '{current_locale}' is not one of {locales:?}");
        }
        debug!(
            "created locale registry with {} locale(s), current '{current_locale}'",
            locales.len()
        );
        Self {
            locales,
            current_locale: RwLock::new(current_locale),
        }
    }

    /// Create a registry from configuration.
    pub fn from_options(options: RegistryOptions) -> Self {
        Self::new(options.locales, options.current_locale)
    }

    /// The supported locales, in declaration order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Check whether a locale is supported.
    pub fn is_available(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Get the current locale.
    pub fn current_locale(&self) -> String {
        self.current_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switch the current locale.
    ///
    /// Fails with [`LocaleError::LocaleNotAvailable`] if `locale` is not
    /// supported, leaving the current locale as it was.
    pub fn change_locale(&self, locale: &str) -> Result<(), LocaleError> {
        if !self.is_available(locale) {
            warn!("rejected change to unsupported locale '{locale}'");
            return Err(LocaleError::LocaleNotAvailable {
                locale: locale.to_string(),
                suggestions: compute_suggestions(locale, &self.locales),
            });
        }

        let mut current = self
            .current_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        debug!("changing locale from '{current}' to '{locale}'");
        *current = locale.to_string();
        Ok(())
    }

    /// Create a resolver for a base message set.
    ///
    /// The resolver borrows this registry and uses its live current locale
    /// whenever [`MessageResolver::get`] renders.
    pub fn create_resolver(&self, messages: impl Into<MessageSet>) -> MessageResolver<'_> {
        MessageResolver::new(self, messages.into())
    }
}

impl From<RegistryOptions> for LocaleRegistry {
    fn from(options: RegistryOptions) -> Self {
        Self::from_options(options)
    }
}
