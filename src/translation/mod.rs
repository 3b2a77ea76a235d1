mod client;
mod error;
mod language;
mod parser;
mod request;

pub use client::{
    ClientOptions, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, TranslationClient, TranslationRequest,
    TranslationResult, list_supported_languages, translate,
};
pub use error::TranslateError;
pub use language::{
    LanguageRegistry, all_language_names, canonical_name, code_for, name_for, print_languages,
    resolve_language, validate_language,
};
pub use parser::{
    ResponseShape, collect_phrases, detect_shape, first_quoted, fix_up, parse_translation,
    split_fragments, strip_brackets,
};
pub use request::{DEFAULT_ENDPOINT, build_translate_url, speech_url, translate_url};
