//! Error and warning types for typelingo.

use std::fmt::{Display, Formatter, Result as FmtResult};

use strsim::levenshtein;
use thiserror::Error;

/// Errors from changing the current locale of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The requested locale is not one of the registry's supported locales.
    ///
    /// The registry's current locale is left unchanged.
    #[error("locale '{locale}' is not available{}", format_suggestions(suggestions))]
    LocaleNotAvailable {
        locale: String,
        suggestions: Vec<String>,
    },
}

/// Errors from resolving a message to a final string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The base message set has no template for the requested locale.
    ///
    /// Variations are never consulted for a locale the base set lacks.
    #[error("no message found for locale '{locale}'")]
    NoMessageForLocale { locale: String },
}

/// Where a template under inspection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// The resolver's base message set.
    Base,
    /// The variation at this registration index.
    Variation(usize),
}

impl Display for MessageSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MessageSource::Base => write!(f, "base message set"),
            MessageSource::Variation(index) => write!(f, "variation #{index}"),
        }
    }
}

/// A consistency problem found by [`crate::MessageResolver::lint`].
///
/// Warnings never stop resolution; they point at templates that will fail
/// or render oddly for some locale or parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A supported locale has no base template, so resolving it fails.
    #[error("no base message for supported locale '{locale}'")]
    MissingLocale { locale: String },

    /// A template exists for a locale the registry does not support.
    #[error("{origin} defines locale '{locale}', which is not supported")]
    UnsupportedLocale {
        locale: String,
        origin: MessageSource,
    },

    /// A base template's placeholders differ from the reference locale's.
    #[error(
        "base message for '{locale}' uses placeholders [{}], expected [{}]",
        found.join(", "),
        expected.join(", ")
    )]
    PlaceholderMismatch {
        locale: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A variation uses a placeholder the base template for its locale lacks.
    #[error("{origin} uses placeholder '{{{name}}}' in '{locale}', which the base message lacks")]
    UnknownPlaceholder {
        locale: String,
        origin: MessageSource,
        name: String,
    },

    /// A placeholder appears more than once; only the first is substituted.
    #[error("{origin} repeats placeholder '{{{name}}}' in '{locale}'; only the first is filled")]
    RepeatedPlaceholder {
        locale: String,
        origin: MessageSource,
        name: String,
    },
}

/// Compute "did you mean" suggestions for a mistyped name.
///
/// Allows an edit distance of 1 for names of up to three characters and 2 for
/// longer ones. Returns at most three candidates, closest first.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then(|| (dist, candidate.clone()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(", did you mean '{only}'?"),
        many => {
            let quoted: Vec<String> = many.iter().map(|s| format!("'{s}'")).collect();
            format!(", did you mean one of {}?", quoted.join(", "))
        }
    }
}
