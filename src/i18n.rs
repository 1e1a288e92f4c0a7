use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use dashmap::DashMap;
use leptos::prelude::*;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

static BUNDLE_CACHE: LazyLock<DashMap<Lang, Bundle>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
struct Locales;

/// Flattened `"section.key" → text` table for one language.
pub type Bundle = HashMap<String, String>;

#[derive(Error, Debug, Clone)]
pub enum LocaleError {
    #[error("no bundled strings for language")]
    NotFound,
    #[error("couldn't parse locale bundle")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Fr => "FR",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Lang::En => "🇬🇧",
            Lang::Fr => "🇫🇷",
        }
    }
}

impl FromStr for Lang {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "fr" => Ok(Lang::Fr),
            _ => Err(LocaleError::NotFound),
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Bundle) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let child = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&child, inner, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        // arrays/booleans/null have no place in a string table
        _ => {}
    }
}

fn load_bundle(lang: Lang) -> Result<Bundle, LocaleError> {
    let file =
        Locales::get(&format!("{}.json", lang.code())).ok_or(LocaleError::NotFound)?;
    let root: Value =
        serde_json::from_slice(&file.data).map_err(|_| LocaleError::ParseError)?;
    let mut bundle = Bundle::new();
    flatten("", &root, &mut bundle);
    Ok(bundle)
}

/// Look up `key` in the (cached) bundle for `lang`.
pub fn lookup(lang: Lang, key: &str) -> Option<String> {
    let cache = &*BUNDLE_CACHE;
    if !cache.contains_key(&lang) {
        let bundle = load_bundle(lang).unwrap_or_else(|err| {
            log::warn!("failed to load '{}' strings: {err}", lang.code());
            Bundle::new()
        });
        cache.insert(lang, bundle);
    }
    cache.get(&lang).and_then(|bundle| bundle.get(key).cloned())
}

/// Context-provided translator. `t` is reactive on the active language, so
/// any view reading it re-renders on a language switch.
#[derive(Clone, Copy)]
pub struct I18n {
    lang: RwSignal<Lang>,
}

impl I18n {
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
    }

    pub fn t(&self, key: &str) -> String {
        let lang = self.lang.get();
        lookup(lang, key)
            .or_else(|| {
                log::warn!("missing '{}' translation for {key}", lang.code());
                lookup(Lang::En, key)
            })
            .unwrap_or_else(|| key.to_string())
    }
}

/// Install the translator into context. The chosen language is persisted in
/// local storage and restored after hydration.
pub fn provide_i18n() -> I18n {
    let i18n = I18n {
        lang: RwSignal::new(Lang::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        use codee::string::JsonSerdeWasmCodec;
        use leptos_use::storage::use_local_storage;

        let (stored, set_stored, _) =
            use_local_storage::<Lang, JsonSerdeWasmCodec>("lang");
        Effect::watch(
            || (),
            move |_, _, _| {
                i18n.lang.set(stored.get_untracked());
            },
            true,
        );
        Effect::new(move |_| {
            set_stored.set(i18n.lang.get());
        });
    }

    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_objects() {
        let root: Value = serde_json::from_str(
            r#"{"hero": {"tagline1": "Think.", "nested": {"deep": "value"}}, "top": "level"}"#,
        )
        .unwrap();
        let mut bundle = Bundle::new();
        flatten("", &root, &mut bundle);
        assert_eq!(bundle.get("hero.tagline1").unwrap(), "Think.");
        assert_eq!(bundle.get("hero.nested.deep").unwrap(), "value");
        assert_eq!(bundle.get("top").unwrap(), "level");
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_bundled_languages_parse() {
        for lang in Lang::ALL {
            let bundle = load_bundle(lang).expect("bundled locale should parse");
            assert!(bundle.contains_key("hero.tagline1"));
            assert!(bundle.contains_key("footer.title"));
            assert!(bundle.contains_key("services.devops.title"));
        }
    }

    #[test]
    fn test_lookup_hits_cache() {
        assert!(lookup(Lang::En, "hero.tagline1").is_some());
        assert!(lookup(Lang::En, "hero.tagline1").is_some());
        assert_eq!(lookup(Lang::En, "no.such.key"), None);
    }

    #[test]
    fn test_lang_roundtrip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_str(lang.code()).unwrap(), lang);
        }
        assert!(Lang::from_str("de").is_err());
    }
}
