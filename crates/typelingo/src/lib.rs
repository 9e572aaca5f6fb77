//! Locale-aware message templates with predicate-driven variations.
//!
//! A [`LocaleRegistry`] owns the supported locales and the current one.
//! Each [`MessageResolver`] it creates renders one logical message: it picks
//! the template for a locale, lets the first matching [`Variation`] override
//! it, and fills `{name}` placeholders from call-time [`Params`].
//!
//! ```
//! use typelingo::{LocaleRegistry, params};
//!
//! let registry = LocaleRegistry::new(["en", "es"], "en");
//! let inbox = registry
//!     .create_resolver([("en", "You have {count} messages"), ("es", "Tienes {count} mensajes")])
//!     .variation(
//!         |p| p.get("count").and_then(|c| c.as_number()) == Some(0),
//!         [("en", "Your inbox is empty"), ("es", "Tu bandeja está vacía")],
//!     );
//!
//! assert_eq!(inbox.get(&params! { "count" => 3 }).unwrap(), "You have 3 messages");
//! assert_eq!(inbox.get(&params! { "count" => 0 }).unwrap(), "Your inbox is empty");
//!
//! registry.change_locale("es").unwrap();
//! assert_eq!(inbox.get(&params! { "count" => 3 }).unwrap(), "Tienes 3 mensajes");
//! ```

pub mod error;
pub mod lint;
pub mod placeholder;
pub mod registry;
pub mod resolver;
pub mod types;

pub use error::{LintWarning, LocaleError, MessageSource, ResolveError, compute_suggestions};
pub use registry::{LocaleRegistry, RegistryOptions};
pub use resolver::{MessageResolver, Predicate, Variation};
pub use types::{MessageSet, Params, ParamsIter, Value};

/// Creates a [`Params`] map from key-value pairs, preserving their order.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use typelingo::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
