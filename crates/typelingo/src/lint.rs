//! Runtime consistency checks for message resolvers.
//!
//! Parameters are untyped at runtime, so nothing stops a template from
//! naming a placeholder the caller never supplies, or a variation from
//! targeting a locale the registry does not support. These checks inspect
//! templates without rendering them and report such problems as
//! [`LintWarning`]s.

use std::collections::BTreeSet;

use crate::error::{LintWarning, MessageSource};
use crate::placeholder::placeholders;
use crate::resolver::MessageResolver;
use crate::types::MessageSet;

/// Run all lint rules over a resolver, returning warnings in rule order.
///
/// 1. Supported locales without a base template.
/// 2. Templates for locales the registry does not support.
/// 3. Base templates whose placeholders differ from the reference locale.
/// 4. Variation placeholders the base template lacks.
/// 5. Placeholders repeated within one template.
pub fn lint_resolver(resolver: &MessageResolver<'_>) -> Vec<LintWarning> {
    let locales = resolver.registry().locales();
    let base = resolver.base();
    let sources: Vec<(MessageSource, &MessageSet)> = [(MessageSource::Base, base)]
        .into_iter()
        .chain(
            resolver
                .variations()
                .iter()
                .enumerate()
                .map(|(index, v)| (MessageSource::Variation(index), v.messages())),
        )
        .collect();

    let mut warnings = Vec::new();
    lint_missing_locales(locales, base, &mut warnings);
    lint_unsupported_locales(locales, &sources, &mut warnings);
    lint_placeholder_mismatch(locales, base, &mut warnings);
    lint_unknown_placeholders(base, &sources, &mut warnings);
    lint_repeated_placeholders(&sources, &mut warnings);
    warnings
}

fn push_unique(warnings: &mut Vec<LintWarning>, warning: LintWarning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}

fn placeholder_set(template: &str) -> BTreeSet<String> {
    placeholders(template).into_iter().collect()
}

fn lint_missing_locales(locales: &[String], base: &MessageSet, warnings: &mut Vec<LintWarning>) {
    for locale in locales {
        if !base.contains_locale(locale) {
            push_unique(
                warnings,
                LintWarning::MissingLocale {
                    locale: locale.clone(),
                },
            );
        }
    }
}

fn lint_unsupported_locales(
    locales: &[String],
    sources: &[(MessageSource, &MessageSet)],
    warnings: &mut Vec<LintWarning>,
) {
    for (origin, messages) in sources {
        for locale in messages.locales() {
            if !locales.iter().any(|l| l == locale) {
                push_unique(
                    warnings,
                    LintWarning::UnsupportedLocale {
                        locale: locale.to_string(),
                        origin: *origin,
                    },
                );
            }
        }
    }
}

/// Compares every base template against the first supported locale that has
/// one. Without a reference there is nothing to compare.
fn lint_placeholder_mismatch(
    locales: &[String],
    base: &MessageSet,
    warnings: &mut Vec<LintWarning>,
) {
    let Some((reference_locale, reference)) = locales
        .iter()
        .find_map(|locale| base.get(locale).map(|template| (locale, template)))
    else {
        return;
    };
    let expected = placeholder_set(reference);

    for (locale, template) in base.iter() {
        if locale == reference_locale {
            continue;
        }
        let found = placeholder_set(template);
        if found != expected {
            push_unique(
                warnings,
                LintWarning::PlaceholderMismatch {
                    locale: locale.clone(),
                    expected: expected.iter().cloned().collect(),
                    found: found.into_iter().collect(),
                },
            );
        }
    }
}

fn lint_unknown_placeholders(
    base: &MessageSet,
    sources: &[(MessageSource, &MessageSet)],
    warnings: &mut Vec<LintWarning>,
) {
    for (origin, messages) in sources {
        if *origin == MessageSource::Base {
            continue;
        }
        for (locale, template) in messages.iter() {
            let Some(base_template) = base.get(locale) else {
                continue;
            };
            let known = placeholder_set(base_template);
            for name in placeholders(template) {
                if !known.contains(&name) {
                    push_unique(
                        warnings,
                        LintWarning::UnknownPlaceholder {
                            locale: locale.clone(),
                            origin: *origin,
                            name,
                        },
                    );
                }
            }
        }
    }
}

fn lint_repeated_placeholders(
    sources: &[(MessageSource, &MessageSet)],
    warnings: &mut Vec<LintWarning>,
) {
    for (origin, messages) in sources {
        for (locale, template) in messages.iter() {
            let mut seen = BTreeSet::new();
            for name in placeholders(template) {
                if !seen.insert(name.clone()) {
                    push_unique(
                        warnings,
                        LintWarning::RepeatedPlaceholder {
                            locale: locale.clone(),
                            origin: *origin,
                            name,
                        },
                    );
                }
            }
        }
    }
}
