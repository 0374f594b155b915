//! Localization
//!
//! Fluent-based translation engine with two embedded bundles, plus the
//! language resolution and persistence rules. The engine is built once by the
//! app root and shared through context.

mod storage;

use std::collections::HashMap;
use std::sync::Arc;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use leptos::prelude::*;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::config;

pub use storage::{detect_storage, KeyValueStore};

const EN_FTL: &str = include_str!("en.ftl");
const DE_FTL: &str = include_str!("de.ftl");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("unsupported language '{0}'")]
    Unsupported(String),
    #[error("invalid translation resource for {0}: {1}")]
    Resource(&'static str, String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    fn source(self) -> &'static str {
        match self {
            Language::En => EN_FTL,
            Language::De => DE_FTL,
        }
    }
}

/// Translation engine holding one bundle per language
pub struct Translator {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    language: Language,
    fallback: Language,
}

/// Build the engine: both bundles, startup language `de`, fallback `en`
pub fn initialize_i18n() -> Result<Translator, I18nError> {
    let mut bundles = HashMap::new();
    for language in Language::ALL {
        bundles.insert(language, build_bundle(language)?);
    }
    let language = Language::from_code(config::ENGINE_START_LANGUAGE)
        .ok_or_else(|| I18nError::Unsupported(config::ENGINE_START_LANGUAGE.to_string()))?;
    let fallback = Language::from_code(config::ENGINE_FALLBACK_LANGUAGE)
        .ok_or_else(|| I18nError::Unsupported(config::ENGINE_FALLBACK_LANGUAGE.to_string()))?;
    Ok(Translator {
        bundles,
        language,
        fallback,
    })
}

fn build_bundle(language: Language) -> Result<FluentBundle<FluentResource>, I18nError> {
    let code = language.code();
    let langid: LanguageIdentifier = code
        .parse()
        .map_err(|e| I18nError::Resource(code, format!("{:?}", e)))?;
    let resource = FluentResource::try_new(language.source().to_string())
        .map_err(|(_, errors)| I18nError::Resource(code, format!("{:?}", errors)))?;

    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    // Values are inserted verbatim, without bidi isolation marks
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Resource(code, format!("{:?}", errors)))?;
    Ok(bundle)
}

impl Translator {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translate with a single `$value` argument
    pub fn t_value(&self, key: &str, value: &str) -> String {
        let mut args = FluentArgs::new();
        args.set("value", value.to_string());
        self.lookup(key, Some(&args))
    }

    /// Active bundle, then fallback bundle, then the key itself
    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.format(self.language, key, args)
            .or_else(|| self.format(self.fallback, key, args))
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, language: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::warn!("[I18N] Formatting '{}' in {}: {:?}", key, language.code(), errors);
        }
        Some(value.into_owned())
    }

    /// Switch language; persists the code only when the switch succeeded
    pub fn change_language(&mut self, code: &str, storage: &dyn KeyValueStore) -> Result<Language, I18nError> {
        let language = Language::from_code(code).ok_or_else(|| I18nError::Unsupported(code.to_string()))?;
        self.language = language;
        if let Err(e) = storage.set(config::LANGUAGE_STORE_KEY, language.code()) {
            log::warn!("[I18N] Could not persist language: {}", e);
        }
        Ok(language)
    }
}

/// URL `hl` query beats the stored value, which beats the default
pub fn get_initial_language(query: Option<&str>, storage: &dyn KeyValueStore) -> Language {
    let from_query = query.and_then(Language::from_code);
    let from_storage = || {
        storage
            .get(config::LANGUAGE_STORE_KEY)
            .and_then(|code| Language::from_code(&code))
    };
    from_query
        .or_else(from_storage)
        .or_else(|| Language::from_code(config::DEFAULT_LANGUAGE))
        .unwrap_or(Language::En)
}

/// Decoded `hl` parameter of the current URL, if running in a browser
pub fn browser_query_language() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(config::LANGUAGE_QUERY_PARAM)
}

// ========================
// Context handle
// ========================

/// Reactive handle to the translator and its storage
#[derive(Clone, Copy)]
pub struct I18n {
    translator: RwSignal<Translator>,
    storage: StoredValue<Arc<dyn KeyValueStore>>,
}

impl I18n {
    pub fn new(translator: Translator, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            translator: RwSignal::new(translator),
            storage: StoredValue::new(storage),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.with(|translator| translator.t(key))
    }

    pub fn t_value(&self, key: &str, value: &str) -> String {
        self.translator.with(|translator| translator.t_value(key, value))
    }

    pub fn language(&self) -> Language {
        self.translator.with(|translator| translator.language())
    }

    /// Unsupported codes fail before the translator is touched
    pub fn change_language(&self, code: &str) -> Result<Language, I18nError> {
        let language = Language::from_code(code).ok_or_else(|| I18nError::Unsupported(code.to_string()))?;
        let storage = self.storage.get_value();
        self.translator
            .write()
            .change_language(language.code(), storage.as_ref())
    }

    /// Resolve the initial language from the URL and storage
    pub fn initial_language(&self) -> Language {
        let storage = self.storage.get_value();
        get_initial_language(browser_query_language().as_deref(), storage.as_ref())
    }
}
