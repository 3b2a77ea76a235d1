//! URL construction for the translate and text-to-speech endpoints.
//!
//! Both builders are pure: no I/O, and identical inputs give identical URLs.

use url::Url;

use super::error::TranslateError;
use super::language::resolve_language;

/// Public base URL of the translation endpoints.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

const TRANSLATE_PATH: &str = "translate_a/single";
const SPEECH_PATH: &str = "translate_tts";
const CLIENT_ID: &str = "gtx";

fn endpoint_url(
    endpoint: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Url, TranslateError> {
    let base = format!("{}/{path}", endpoint.trim_end_matches('/'));

    // Query values are form-urlencoded, so spaces become '+'
    Url::parse_with_params(&base, params).map_err(|source| TranslateError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Builds the translate URL from endpoint codes.
///
/// Codes are not validated here; an empty code yields an empty `sl=` or `tl=`
/// segment, which the endpoint answers with an untranslated echo.
pub fn translate_url(
    endpoint: &str,
    source_text: &str,
    source_code: &str,
    target_code: &str,
) -> Result<Url, TranslateError> {
    endpoint_url(
        endpoint,
        TRANSLATE_PATH,
        &[
            ("client", CLIENT_ID),
            ("sl", source_code),
            ("tl", target_code),
            ("dt", "t"),
            ("q", source_text),
        ],
    )
}

/// Builds the translate URL from language names (or codes).
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedLanguage`] if either language is not
/// registered, and [`TranslateError::InvalidEndpoint`] for a bad endpoint.
pub fn build_translate_url(
    endpoint: &str,
    source_text: &str,
    source_language: &str,
    target_language: &str,
) -> Result<Url, TranslateError> {
    let source_code = resolve_language(source_language)?;
    let target_code = resolve_language(target_language)?;
    translate_url(endpoint, source_text, source_code, target_code)
}

/// Builds the text-to-speech URL that reads `translated_text` aloud.
pub fn speech_url(
    endpoint: &str,
    translated_text: &str,
    target_code: &str,
) -> Result<Url, TranslateError> {
    let text_len = translated_text.chars().count().to_string();

    endpoint_url(
        endpoint,
        SPEECH_PATH,
        &[
            ("ie", "UTF-8"),
            ("q", translated_text),
            ("tl", target_code),
            ("total", "1"),
            ("idx", "0"),
            ("textlen", &text_len),
            ("client", CLIENT_ID),
        ],
    )
}
