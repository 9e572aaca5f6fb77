//! Message resolution: locale lookup, variation matching and substitution.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use log::{debug, trace};

use crate::error::{LintWarning, ResolveError};
use crate::lint::lint_resolver;
use crate::placeholder::substitute;
use crate::registry::LocaleRegistry;
use crate::types::{MessageSet, Params};

/// Predicate deciding whether a variation applies to a set of parameters.
pub type Predicate = Box<dyn Fn(&Params) -> bool + Send + Sync>;

/// A conditional override of a resolver's base messages.
pub struct Variation {
    predicate: Predicate,
    messages: MessageSet,
}

impl Variation {
    /// Create a variation from a predicate and its override messages.
    pub fn new(
        predicate: impl Fn(&Params) -> bool + Send + Sync + 'static,
        messages: impl Into<MessageSet>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            messages: messages.into(),
        }
    }

    /// Evaluate the predicate against call-time parameters.
    pub fn matches(&self, params: &Params) -> bool {
        (self.predicate)(params)
    }

    /// The override messages.
    pub fn messages(&self) -> &MessageSet {
        &self.messages
    }
}

impl Debug for Variation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Variation")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

/// Renders one logical message for any supported locale.
///
/// A resolver is bound to a base [`MessageSet`] and to the
/// [`LocaleRegistry`] that created it. Variations registered with
/// [`variation`](Self::variation) are tried in registration order; the first
/// one whose predicate accepts the parameters *and* which defines the
/// requested locale replaces the base template.
///
/// # Example
///
/// ```
/// use typelingo::{LocaleRegistry, MessageSet, params};
///
/// let registry = LocaleRegistry::new(["en", "fr"], "en");
/// let greeting = registry
///     .create_resolver([("en", "Hi {name}"), ("fr", "Salut {name}")])
///     .variation(
///         |p| p.get("name").is_some_and(|n| n == "Ann"),
///         MessageSet::new().with("en", "Hi Ann the great"),
///     );
///
/// assert_eq!(greeting.get(&params! { "name" => "Ann" }).unwrap(), "Hi Ann the great");
/// assert_eq!(greeting.get(&params! { "name" => "Bob" }).unwrap(), "Hi Bob");
/// assert_eq!(greeting.get_in("fr", &params! { "name" => "Ann" }).unwrap(), "Salut Ann");
/// ```
#[derive(Debug)]
pub struct MessageResolver<'r> {
    /// Registry supplying the default locale.
    registry: &'r LocaleRegistry,
    /// Templates used when no variation applies.
    base: MessageSet,
    /// Overrides in registration order.
    variations: Vec<Variation>,
}

impl<'r> MessageResolver<'r> {
    pub(crate) fn new(registry: &'r LocaleRegistry, base: MessageSet) -> Self {
        Self {
            registry,
            base,
            variations: Vec::new(),
        }
    }

    /// Register a variation and return the resolver.
    ///
    /// Variations registered earlier take precedence. The new message set is
    /// not checked against the base set here; see [`lint`](Self::lint).
    #[must_use]
    pub fn variation(
        mut self,
        predicate: impl Fn(&Params) -> bool + Send + Sync + 'static,
        messages: impl Into<MessageSet>,
    ) -> Self {
        self.push_variation(Variation::new(predicate, messages));
        self
    }

    /// Append an already-built variation.
    pub fn push_variation(&mut self, variation: Variation) {
        debug!(
            "registering variation #{} covering {} locale(s)",
            self.variations.len(),
            variation.messages.len()
        );
        self.variations.push(variation);
    }

    /// Render the message in the registry's current locale.
    ///
    /// The current locale is read at call time, so locale changes made after
    /// the resolver was created are honored.
    pub fn get(&self, params: &Params) -> Result<String, ResolveError> {
        let locale = self.registry.current_locale();
        self.get_in(&locale, params)
    }

    /// Render the message in a specific locale.
    ///
    /// Fails with [`ResolveError::NoMessageForLocale`] if the base message
    /// set has no template for `locale`, even when a variation defines one.
    pub fn get_in(&self, locale: &str, params: &Params) -> Result<String, ResolveError> {
        let template = self.select_template(locale, params)?;
        trace!("resolved template for '{locale}': {template:?}");
        Ok(substitute(template, params))
    }

    /// Pick the base template for `locale`, overridden by the first
    /// applicable variation.
    fn select_template(&self, locale: &str, params: &Params) -> Result<&str, ResolveError> {
        let base = self
            .base
            .get(locale)
            .ok_or_else(|| ResolveError::NoMessageForLocale {
                locale: locale.to_string(),
            })?;

        for (index, variation) in self.variations.iter().enumerate() {
            if !variation.matches(params) {
                continue;
            }
            match variation.messages.get(locale) {
                Some(template) => {
                    debug!("variation #{index} applies for locale '{locale}'");
                    return Ok(template);
                }
                None => trace!("variation #{index} matched but has no '{locale}' message"),
            }
        }

        Ok(base)
    }

    /// Check this resolver's templates for consistency problems.
    pub fn lint(&self) -> Vec<LintWarning> {
        lint_resolver(self)
    }

    /// The base message set.
    pub fn base(&self) -> &MessageSet {
        &self.base
    }

    /// Registered variations, in registration order.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// The registry this resolver reads its default locale from.
    pub fn registry(&self) -> &'r LocaleRegistry {
        self.registry
    }
}
