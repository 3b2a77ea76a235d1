//! Language names, endpoint codes, and the registry mapping between them.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::Result;

use super::error::TranslateError;
use crate::ui::Style;

/// Supported languages as (name, endpoint code) pairs.
const LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Arabic", "ar"),
    ("Armenian", "hy"),
    ("Azerbaijani", "az"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bengali", "bn"),
    ("Bulgarian", "bg"),
    ("Catalan", "ca"),
    ("Chinese", "zh-CN"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Esperanto", "eo"),
    ("Estonian", "et"),
    ("Filipino", "tl"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("Galician", "gl"),
    ("German", "de"),
    ("Georgian", "ka"),
    ("Greek", "el"),
    ("Haitian Creole", "ht"),
    ("Hebrew", "iw"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Indonesian", "id"),
    ("Irish", "ga"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Lao", "lo"),
    ("Latin", "la"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Macedonian", "mk"),
    ("Malay", "ms"),
    ("Maltese", "mt"),
    ("Norwegian", "no"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Serbian", "sr"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Spanish", "es"),
    ("Swahili", "sw"),
    ("Swedish", "sv"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Vietnamese", "vi"),
    ("Welsh", "cy"),
    ("Yiddish", "yi"),
];

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Read-only, process-wide mapping between language names and codes.
#[derive(Debug)]
pub struct LanguageRegistry {
    codes: HashMap<&'static str, &'static str>,
    names: HashMap<&'static str, &'static str>,
    sorted_names: Vec<&'static str>,
}

impl LanguageRegistry {
    fn build() -> Self {
        let codes: HashMap<_, _> = LANGUAGES.iter().copied().collect();
        let names = LANGUAGES.iter().map(|&(name, code)| (code, name)).collect();

        let mut sorted_names: Vec<_> = codes.keys().copied().collect();
        sorted_names.sort_unstable();

        Self {
            codes,
            names,
            sorted_names,
        }
    }

    /// Returns the shared registry, building it on first use.
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::build)
    }

    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.codes.get(name).copied()
    }

    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.names.get(code).copied()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.sorted_names
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Returns the endpoint code for a language name, or `""` if it is unknown.
pub fn code_for(name: &str) -> &'static str {
    LanguageRegistry::global().code_for(name).unwrap_or_default()
}

/// Returns the language name registered for an endpoint code.
pub fn name_for(code: &str) -> Option<&'static str> {
    LanguageRegistry::global().name_for(code)
}

/// All registered language names in ascending order.
pub fn all_language_names() -> &'static [&'static str] {
    LanguageRegistry::global().names()
}

/// Resolves a language name (or, failing that, a code) to its endpoint code.
pub fn resolve_language(input: &str) -> Result<&'static str, TranslateError> {
    let registry = LanguageRegistry::global();

    registry
        .code_for(input)
        .or_else(|| registry.name_for(input).and_then(|name| registry.code_for(name)))
        .ok_or_else(|| TranslateError::UnsupportedLanguage(input.to_string()))
}

/// Returns the canonical name for a language given by name or code.
pub fn canonical_name(input: &str) -> Option<&'static str> {
    let registry = LanguageRegistry::global();
    registry
        .code_for(input)
        .and_then(|code| registry.name_for(code))
        .or_else(|| registry.name_for(input))
}

/// Validates that the given language name or code is supported.
pub fn validate_language(input: &str) -> Result<()> {
    resolve_language(input)?;
    Ok(())
}

/// Prints all supported languages and their codes to stdout.
pub fn print_languages() {
    let registry = LanguageRegistry::global();

    println!("{}", Style::header("Supported languages"));
    for name in registry.names() {
        let code = registry.code_for(name).unwrap_or_default();
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}
