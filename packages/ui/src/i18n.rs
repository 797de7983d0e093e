use dioxus::prelude::*;
use serde_json::Value;
use std::sync::OnceLock;

use crate::storage::{KeyValueStore, LocalStorage};

/// Storage key holding the last selected language code.
pub const LANG_STORAGE_KEY: &str = "selectedLanguage";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    It,
    En,
}

impl Lang {
    /// Active language on a first visit.
    pub const INITIAL: Lang = Lang::It;
    /// Dictionary consulted when the active one lacks a key.
    pub const FALLBACK: Lang = Lang::En;

    pub fn code(self) -> &'static str {
        match self {
            Lang::It => "it",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "it" | "it-it" => Some(Lang::It),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Short label for the header switch.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::It => "ITA",
            Lang::En => "ENG",
        }
    }

    fn dictionary(self) -> &'static Value {
        static IT: OnceLock<Value> = OnceLock::new();
        static EN: OnceLock<Value> = OnceLock::new();
        match self {
            Lang::It => IT.get_or_init(|| parse_dictionary("it", include_str!("../translations/it.json"))),
            Lang::En => EN.get_or_init(|| parse_dictionary("en", include_str!("../translations/en.json"))),
        }
    }
}

fn parse_dictionary(code: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::error!("i18n: dictionary {code} is not valid JSON: {e}");
        Value::Null
    })
}

fn walk<'a>(dictionary: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(dictionary, |node, segment| node.get(segment))?
        .as_str()
}

/// Resolve a dotted key path against `active`, then against `fallback` from the
/// root. A key missing from both comes back unchanged.
pub fn resolve(active: &Value, fallback: &Value, key: &str) -> String {
    walk(active, key)
        .or_else(|| walk(fallback, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Translate a key for a given language.
pub fn t(lang: Lang, key: &str) -> String {
    resolve(lang.dictionary(), Lang::FALLBACK.dictionary(), key)
}

pub fn load_lang(store: &impl KeyValueStore) -> Lang {
    store
        .get(LANG_STORAGE_KEY)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or(Lang::INITIAL)
}

pub fn save_lang(store: &impl KeyValueStore, lang: Lang) {
    store.set(LANG_STORAGE_KEY, lang.code());
}

/// Provide `Signal<Lang>` to the component tree.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::INITIAL);
    use_context_provider(|| lang);

    // Stored preference is only readable after hydration.
    use_effect(move || {
        let saved = load_lang(&LocalStorage);
        if saved != *lang.peek() {
            lang.set(saved);
        }
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("i18n: missing I18nProvider context, using a local signal");
    use_signal(|| Lang::INITIAL)
}

/// Switch the active language and remember it for the next visit.
pub fn set_lang(mut signal: Signal<Lang>, lang: Lang) {
    signal.set(lang);
    save_lang(&LocalStorage, lang);
}
