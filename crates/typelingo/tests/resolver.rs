//! Integration tests for template selection and variation matching.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use typelingo::{LocaleRegistry, MessageSet, Params, ResolveError, Variation, params};

fn registry() -> LocaleRegistry {
    LocaleRegistry::new(["en", "fr"], "en")
}

fn is_ann(p: &Params) -> bool {
    p.get("name").is_some_and(|n| n == "Ann")
}

// =========================================================================
// Base Messages
// =========================================================================

#[test]
fn base_message_with_substitution() {
    let registry = registry();
    let hi = registry.create_resolver([("en", "Hi {name}")]);
    assert_eq!(hi.get_in("en", &params! { "name" => "Ann" }).unwrap(), "Hi Ann");
}

#[test]
fn base_message_without_params() {
    let registry = registry();
    let title = registry.create_resolver([("en", "Settings"), ("fr", "Paramètres")]);
    assert_eq!(title.get(&params! {}).unwrap(), "Settings");
    assert_eq!(title.get_in("fr", &params! {}).unwrap(), "Paramètres");
}

#[test]
fn missing_base_locale_fails() {
    let registry = registry();
    let hi = registry.create_resolver([("en", "Hi {name}")]);

    let err = hi.get_in("fr", &params! { "name" => "Ann" }).unwrap_err();

    assert_eq!(
        err,
        ResolveError::NoMessageForLocale {
            locale: "fr".to_string()
        }
    );
}

#[test]
fn missing_base_locale_fails_even_if_variation_defines_it() {
    let registry = registry();
    let hi = registry
        .create_resolver([("en", "Hi {name}")])
        .variation(|_| true, [("en", "Hey {name}"), ("fr", "Salut {name}")]);

    let result = hi.get_in("fr", &params! { "name" => "Ann" });

    assert!(matches!(result, Err(ResolveError::NoMessageForLocale { locale }) if locale == "fr"));
}

#[test]
fn empty_template_is_a_valid_message() {
    let registry = registry();
    let blank = registry.create_resolver([("en", "")]);
    assert_eq!(blank.get(&params! {}).unwrap(), "");
}

// =========================================================================
// Variations
// =========================================================================

#[test]
fn matching_variation_overrides_base() {
    let registry = registry();
    let hi = registry
        .create_resolver([("en", "Hi {name}")])
        .variation(is_ann, [("en", "Hi Ann the great")]);

    assert_eq!(
        hi.get_in("en", &params! { "name" => "Ann" }).unwrap(),
        "Hi Ann the great"
    );
    assert_eq!(hi.get_in("en", &params! { "name" => "Bob" }).unwrap(), "Hi Bob");
}

#[test]
fn variation_template_is_substituted() {
    let registry = registry();
    let items = registry
        .create_resolver([("en", "{count} items")])
        .variation(
            |p| p.get("count").and_then(|c| c.as_number()) == Some(1),
            [("en", "{count} item")],
        );

    assert_eq!(items.get(&params! { "count" => 1 }).unwrap(), "1 item");
    assert_eq!(items.get(&params! { "count" => 5 }).unwrap(), "5 items");
}

#[test]
fn first_registered_matching_variation_wins() {
    let registry = registry();
    let first_then_second = registry
        .create_resolver([("en", "base")])
        .variation(|_| true, [("en", "first")])
        .variation(|_| true, [("en", "second")]);
    let second_then_first = registry
        .create_resolver([("en", "base")])
        .variation(|_| true, [("en", "second")])
        .variation(|_| true, [("en", "first")]);

    assert_eq!(first_then_second.get(&params! {}).unwrap(), "first");
    assert_eq!(second_then_first.get(&params! {}).unwrap(), "second");
}

#[test]
fn non_matching_variations_are_skipped() {
    let registry = registry();
    let status = registry
        .create_resolver([("en", "offline")])
        .variation(|p| p.get("online").and_then(|v| v.as_bool()) == Some(true), [("en", "online")])
        .variation(|p| p.contains_key("away"), [("en", "away")]);

    assert_eq!(status.get(&params! { "online" => true }).unwrap(), "online");
    assert_eq!(status.get(&params! { "online" => false, "away" => 1 }).unwrap(), "away");
    assert_eq!(status.get(&params! { "online" => false }).unwrap(), "offline");
}

#[test]
fn matching_variation_without_locale_is_skipped() {
    let registry = registry();
    let hi = registry
        .create_resolver([("en", "Hi {name}"), ("fr", "Salut {name}")])
        .variation(is_ann, [("en", "Hi Ann the great")])
        .variation(is_ann, [("fr", "Salut Ann la grande")]);

    let ann = params! { "name" => "Ann" };
    assert_eq!(hi.get_in("en", &ann).unwrap(), "Hi Ann the great");
    assert_eq!(hi.get_in("fr", &ann).unwrap(), "Salut Ann la grande");
}

#[test]
fn matching_variations_without_locale_fall_back_to_base() {
    let registry = registry();
    let hi = registry
        .create_resolver([("en", "Hi {name}"), ("fr", "Salut {name}")])
        .variation(is_ann, [("en", "Hi Ann the great")]);

    assert_eq!(hi.get_in("fr", &params! { "name" => "Ann" }).unwrap(), "Salut Ann");
}

#[test]
fn predicates_stop_after_first_applicable_variation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let registry = registry();
    let msg = registry
        .create_resolver([("en", "base")])
        .variation(|_| true, [("en", "hit")])
        .variation(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            },
            [("en", "unreachable")],
        );

    assert_eq!(msg.get(&params! {}).unwrap(), "hit");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn push_variation_appends_in_order() {
    let registry = registry();
    let mut msg = registry.create_resolver([("en", "base")]);
    msg.push_variation(Variation::new(|_| false, [("en", "never")]));
    msg.push_variation(Variation::new(|_| true, MessageSet::new().with("en", "always")));

    assert_eq!(msg.variations().len(), 2);
    assert_eq!(msg.variations()[1].messages().get("en"), Some("always"));
    assert!(msg.variations()[1].matches(&params! {}));
    assert_eq!(msg.get(&params! {}).unwrap(), "always");
}

#[test]
fn resolver_exposes_base_messages() {
    let registry = registry();
    let msg = registry.create_resolver([("en", "Hello"), ("fr", "Bonjour")]);
    assert_eq!(msg.base().len(), 2);
    assert_eq!(msg.base().get("fr"), Some("Bonjour"));
    assert!(msg.variations().is_empty());
}

// =========================================================================
// Current Locale
// =========================================================================

#[test]
fn get_uses_current_locale_at_call_time() {
    let registry = registry();
    let hi = registry.create_resolver([("en", "Hi {name}"), ("fr", "Salut {name}")]);
    let ann = params! { "name" => "Ann" };

    assert_eq!(hi.get(&ann).unwrap(), "Hi Ann");

    registry.change_locale("fr").unwrap();
    assert_eq!(hi.get(&ann).unwrap(), "Salut Ann");
    assert_eq!(hi.registry().current_locale(), "fr");
}

#[test]
fn explicit_locale_ignores_current_locale() {
    let registry = registry();
    let hi = registry.create_resolver([("en", "Hi"), ("fr", "Salut")]);
    registry.change_locale("fr").unwrap();
    assert_eq!(hi.get_in("en", &params! {}).unwrap(), "Hi");
}

#[test]
fn get_fails_when_current_locale_has_no_message() {
    let registry = registry();
    let hi = registry.create_resolver([("en", "Hi")]);
    registry.change_locale("fr").unwrap();
    assert!(matches!(
        hi.get(&params! {}),
        Err(ResolveError::NoMessageForLocale { locale }) if locale == "fr"
    ));
}

#[test]
fn variations_follow_current_locale() {
    let registry = registry();
    let hi = registry
        .create_resolver([("en", "Hi {name}"), ("fr", "Salut {name}")])
        .variation(is_ann, [("en", "Hi Ann the great"), ("fr", "Salut Ann la grande")]);

    registry.change_locale("fr").unwrap();
    assert_eq!(hi.get(&params! { "name" => "Ann" }).unwrap(), "Salut Ann la grande");
    assert_eq!(hi.get(&params! { "name" => "Bob" }).unwrap(), "Salut Bob");
}
