//! Internationalization module for multi-language support.
//!
//! Messages live in Fluent (`.ftl`) files embedded at build time, one bundle
//! per language. Lookups fall back to English and then to the message key.

pub mod loader;

use std::collections::HashMap;
use std::path::Path;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{convert_vec_str_to_langids_lossy, negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

// Re-export types
pub use fluent::FluentArgs as TranslationArgs;
pub use loader::TranslationLoadError;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Get the language identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::French => "fr",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }

    /// Unicode language identifier used by Fluent.
    pub fn langid(&self) -> LanguageIdentifier {
        match self {
            Language::English => langid!("en-US"),
            Language::French => langid!("fr"),
        }
    }

    /// Decimal separator used when formatting numbers.
    pub fn decimal_separator(&self) -> char {
        match self {
            Language::English => '.',
            Language::French => ',',
        }
    }

    /// Parse from a language identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.starts_with("en") {
            Some(Language::English)
        } else if id.starts_with("fr") {
            Some(Language::French)
        } else {
            None
        }
    }

    /// Get all supported languages.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::French]
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            Language::English => include_str!("locales/en-US/main.ftl"),
            Language::French => include_str!("locales/fr/main.ftl"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_id(s).ok_or_else(|| format!("Unsupported language '{}' (expected en or fr)", s))
    }
}

/// Pick the best supported language for a requested locale such as `fr-CA`.
pub fn negotiate_language(requested: &str) -> Language {
    let normalized = requested.replace('_', "-");
    let requested = convert_vec_str_to_langids_lossy([normalized.as_str()]);
    if requested.is_empty() {
        tracing::warn!("Ignoring unparseable locale '{}'", normalized);
    }
    let available = convert_vec_str_to_langids_lossy(Language::all().iter().map(|l| l.id()));
    let default = convert_vec_str_to_langids_lossy([Language::default().id()]);

    negotiate_languages(
        &requested,
        &available,
        default.first(),
        NegotiationStrategy::Filtering,
    )
    .first()
    .and_then(|id| Language::from_id(&id.to_string()))
    .unwrap_or_default()
}

/// Detect the system locale and return the best matching language.
pub fn detect_system_locale() -> Language {
    match sys_locale::get_locale() {
        Some(locale) => negotiate_language(&locale),
        None => Language::English,
    }
}

/// Translation service holding one Fluent bundle per language.
pub struct TranslationService {
    /// Current language
    current_language: Language,
    /// Bundles per language
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationService {
    /// Create a new translation service with the embedded translations.
    pub fn new() -> Self {
        let mut bundles = HashMap::new();
        for lang in Language::all() {
            match loader::build_bundle(*lang, lang.ftl_source()) {
                Ok(bundle) => {
                    bundles.insert(*lang, bundle);
                }
                Err(e) => tracing::error!("Failed to load {} translations: {}", lang.id(), e),
            }
        }

        Self {
            current_language: Language::English,
            bundles,
        }
    }

    /// Create a service set to a language.
    pub fn with_language(language: Language) -> Self {
        let mut service = Self::new();
        service.set_language(language);
        service
    }

    /// Get the current language.
    pub fn language(&self) -> Language {
        self.current_language
    }

    /// Set the current language.
    pub fn set_language(&mut self, lang: Language) {
        self.current_language = lang;
    }

    /// Whether a language defines a message.
    pub fn has_message(&self, lang: Language, key: &str) -> bool {
        self.bundles
            .get(&lang)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    /// Translate a message by key.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translate a message with arguments.
    pub fn translate_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.lookup(key, Some(args))
    }

    /// Load `<language-id>.ftl` files from a directory, overriding embedded messages.
    ///
    /// Returns the number of files loaded.
    pub fn load_overrides_from_dir(&mut self, dir: &Path) -> Result<usize, TranslationLoadError> {
        if !dir.is_dir() {
            return Err(TranslationLoadError::DirectoryNotFound(
                dir.display().to_string(),
            ));
        }

        let mut loaded = 0;
        for lang in Language::all() {
            let path = dir.join(format!("{}.ftl", lang.id()));
            if !path.exists() {
                continue;
            }

            let resource = loader::load_file(&path)?;
            if let Some(bundle) = self.bundles.get_mut(lang) {
                bundle.add_resource_overriding(resource);
                loaded += 1;
                tracing::info!("Loaded translation overrides from {}", path.display());
            }
        }

        Ok(loaded)
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        // Try current language, then English
        let mut candidates = vec![self.current_language];
        if self.current_language != Language::English {
            candidates.push(Language::English);
        }

        for lang in candidates {
            if let Some(value) = self.format(lang, key, args) {
                return value;
            }
        }

        // Return key as fallback
        key.to_string()
    }

    fn format(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!("Errors formatting '{}' ({}): {:?}", key, lang.id(), errors);
        }
        Some(value.into_owned())
    }
}
