use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::Value;

use super::locale::Locale;

type Tables = HashMap<Locale, Value>;

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let sources = [
        (Locale::En, include_str!("../../../locales/en.json")),
        (Locale::Ar, include_str!("../../../locales/ar.json")),
    ];

    sources
        .into_iter()
        .map(|(locale, raw)| {
            let table = serde_json::from_str(raw).unwrap_or_else(|e| {
                log::error!("Locale table '{}' is not valid JSON: {}", locale, e);
                Value::Null
            });
            (locale, table)
        })
        .collect()
});

/// Looks up UI strings by dotted key, e.g. `search.newest`
///
/// Resolution order: active locale, then English, then the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }

    pub fn t(&self, key: &str) -> String {
        resolve(&TABLES, self.locale, key)
    }

    /// Exact lookup in one locale's table, no fallback
    pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
        lookup_in(&TABLES, locale, key)
    }
}

fn resolve(tables: &Tables, locale: Locale, key: &str) -> String {
    lookup_in(tables, locale, key)
        .or_else(|| lookup_in(tables, Locale::En, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

fn lookup_in<'a>(tables: &'a Tables, locale: Locale, key: &str) -> Option<&'a str> {
    let mut node = tables.get(&locale)?;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_keys() {
        let en = Translator::new(Locale::En);
        assert_eq!(en.t("search.newest"), "Newest First");
        assert_eq!(en.t("badges.veryGood"), "Very Good");
    }

    #[test]
    fn arabic_differs_from_english() {
        let ar = Translator::new(Locale::Ar);
        assert_ne!(ar.t("nav.home"), "Home");
        assert!(ar.is_rtl());
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let tables: Tables = [
            (
                Locale::En,
                serde_json::json!({"search": {"newest": "Newest First", "sortBy": "Sort By"}}),
            ),
            (Locale::Ar, serde_json::json!({"search": {"newest": "الأحدث أولاً"}})),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolve(&tables, Locale::Ar, "search.sortBy"), "Sort By");
        assert_eq!(resolve(&tables, Locale::Ar, "search.newest"), "الأحدث أولاً");
        assert_eq!(resolve(&tables, Locale::Ar, "search.missing"), "search.missing");
    }

    #[test]
    fn locale_without_table_uses_english() {
        let tables: Tables = [(Locale::En, serde_json::json!({"nav": {"home": "Home"}}))]
            .into_iter()
            .collect();
        assert_eq!(resolve(&tables, Locale::Ar, "nav.home"), "Home");
    }

    #[test]
    fn unknown_key_returns_key() {
        let ar = Translator::new(Locale::Ar);
        assert_eq!(ar.t("search.unknownKey"), "search.unknownKey");
        assert_eq!(ar.t(""), "");
    }

    #[test]
    fn non_leaf_key_is_not_a_string() {
        assert_eq!(Translator::lookup(Locale::En, "search"), None);
        assert_eq!(Translator::new(Locale::En).t("search"), "search");
    }

    #[test]
    fn tables_share_their_keys() {
        fn leaves(value: &Value, prefix: String, out: &mut Vec<String>) {
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{}.{}", prefix, key)
                        };
                        leaves(child, path, out);
                    }
                }
                _ => out.push(prefix),
            }
        }

        let mut en = Vec::new();
        let mut ar = Vec::new();
        leaves(&TABLES[&Locale::En], String::new(), &mut en);
        leaves(&TABLES[&Locale::Ar], String::new(), &mut ar);
        en.sort();
        ar.sort();
        assert!(!en.is_empty());
        assert_eq!(en, ar);
    }

    #[test]
    fn switching_locale() {
        let mut translator = Translator::default();
        assert_eq!(translator.locale(), Locale::En);
        translator.set_locale(Locale::Ar);
        assert_eq!(translator.locale(), Locale::Ar);
    }
}
