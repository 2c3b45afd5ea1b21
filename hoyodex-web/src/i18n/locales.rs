use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "es",
        name: "Español",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

pub const DEFAULT_LANG: &str = "es";
pub const FALLBACK_LANG: &str = "en";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_known_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_parses_and_labels_all_views() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("locale parses");
            for game in ["gi", "hsr", "zzz"] {
                for view in ["characters", "weapons", "artifacts"] {
                    assert!(
                        value["views"][game][view].is_string(),
                        "{} missing views.{game}.{view}",
                        meta.code
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_first_table_entry() {
        assert!(!is_known_lang("tlh"));
        assert_eq!(load_translations("tlh"), load_translations("en"));
    }
}
