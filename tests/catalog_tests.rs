// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolution behaviour of the bundled admin console catalog

use serial_vault_messages::i18n::{
    audit, negotiate, Locale, MessageCatalog, MessageTable, Source, BUNDLED_LOCALES,
};
use serial_vault_messages::CatalogError;
use std::collections::{BTreeMap, BTreeSet};

fn catalog() -> MessageCatalog {
    MessageCatalog::bundled().expect("bundled catalog should build")
}

#[test]
fn test_sample_scenario() {
    let catalog = catalog();
    assert_eq!(catalog.resolve("en", "model").unwrap(), "Model");
    assert_eq!(catalog.resolve("zh", "model").unwrap(), "机型");
    assert_eq!(
        catalog.resolve("zh", "users_available").unwrap(),
        "The following users are available"
    );
}

#[test]
fn test_registered_keys_resolve_exactly() {
    let catalog = catalog();
    for (locale, table) in catalog.tables() {
        for (key, text) in table.iter() {
            let resolution = catalog.resolve_detailed(locale.as_str(), key).unwrap();
            assert_eq!(resolution.text, text, "{}/{}", locale, key);
            assert_eq!(resolution.source, Source::Exact);
        }
    }
}

#[test]
fn test_missing_keys_match_default_locale() {
    let catalog = catalog();
    let en = catalog.table("en").unwrap();
    let zh = catalog.table("zh").unwrap();
    let mut fallbacks = 0;
    for key in en.keys().filter(|key| !zh.contains(key)) {
        assert_eq!(
            catalog.resolve("zh", key).unwrap(),
            catalog.resolve("en", key).unwrap()
        );
        fallbacks += 1;
    }
    assert!(fallbacks > 0, "bundled zh table should have at least one gap");
}

#[test]
fn test_unknown_keys_render_visibly() {
    let catalog = catalog();
    for locale in ["en", "zh", "fr"] {
        let text = catalog.resolve(locale, "error-fetch-signinglog").unwrap();
        assert!(!text.is_empty());
        assert!(text.contains("error-fetch-signinglog"));
    }
}

#[test]
fn test_unregistered_locale_uses_english() {
    let catalog = catalog();
    let resolution = catalog.resolve_detailed("de", "title").unwrap();
    assert_eq!(resolution.text, "Serial Vault");
    assert_eq!(resolution.source, Source::DefaultLocale);
    assert_eq!(resolution.locale, Some("en"));
}

#[test]
fn test_empty_arguments_fail() {
    let catalog = catalog();
    assert!(matches!(
        catalog.resolve("", "title"),
        Err(CatalogError::InvalidArgument { .. })
    ));
    assert!(matches!(
        catalog.resolve("en", ""),
        Err(CatalogError::InvalidArgument { .. })
    ));
}

#[test]
fn test_supported_locales_are_stable() {
    let catalog = catalog();
    let first = catalog.supported_locales().clone();
    let second = catalog.supported_locales().clone();
    assert_eq!(first, second);

    let expected: BTreeSet<String> = BUNDLED_LOCALES.iter().map(|c| c.to_string()).collect();
    let actual: BTreeSet<String> = first.iter().map(|l| l.to_string()).collect();
    assert_eq!(actual, expected);
    assert_eq!(catalog.default_locale().as_str(), "en");
}

#[test]
fn test_values_returned_verbatim() {
    let catalog = catalog();
    // zh still carries the untranslated marker; it must not be stripped.
    assert_eq!(catalog.resolve("zh", "login").unwrap(), "<Login>");
    assert_eq!(
        catalog.resolve("en", "select-accounts").unwrap(),
        "Select below the accounts this user belongs to:"
    );
}

#[test]
fn test_model_list_labels_resolve_in_english() {
    // Labels the model list page renders with the English table.
    let catalog = catalog();
    for key in ["models", "models_available", "brand", "model", "revision", "home"] {
        let resolution = catalog.resolve_detailed("en", key).unwrap();
        assert_eq!(resolution.source, Source::Exact, "{} should be in en", key);
    }
    assert_eq!(catalog.resolve("en", "models").unwrap(), "Models");
}

#[test]
fn test_bundled_audit_reports_known_gap() {
    let report = audit(&catalog());
    let zh = report.locale("zh").expect("zh audited");
    assert_eq!(zh.missing, vec!["users_available"]);
    assert!(zh.extra.is_empty());
    assert!(zh.untranslated.contains(&"login".to_string()));
    assert!(!zh.untranslated.contains(&"model".to_string()));
    assert!(!report.is_complete());
    assert_eq!(report.fingerprint, catalog().fingerprint());
}

#[test]
fn test_negotiate_prefers_primary_subtag() {
    let catalog = catalog();
    assert_eq!(negotiate(&catalog, "zh").as_str(), "zh");
    assert_eq!(negotiate(&catalog, "zh_CN.UTF-8").as_str(), "zh");
    assert_eq!(negotiate(&catalog, "ZH-tw").as_str(), "zh");
    assert_eq!(negotiate(&catalog, "fr-FR").as_str(), "en");
    assert_eq!(negotiate(&catalog, "").as_str(), "en");
}

#[test]
fn test_custom_default_locale() {
    let mut tables = BTreeMap::new();
    tables.insert(
        Locale::parse("zh").unwrap(),
        MessageTable::from_pairs(&[("save", "保存"), ("cancel", "取消")]),
    );
    tables.insert(
        Locale::parse("en").unwrap(),
        MessageTable::from_pairs(&[("save", "Save")]),
    );
    let catalog = MessageCatalog::new(tables, Locale::parse("zh").unwrap()).unwrap();
    assert_eq!(catalog.resolve("en", "cancel").unwrap(), "取消");
    assert_eq!(catalog.resolve("ja", "save").unwrap(), "保存");
}
