use reqwest::StatusCode;
use thiserror::Error;

/// Failures a single translation request can end in.
///
/// An empty or unrecognizable response body is not one of them: it yields an
/// empty translation instead.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Unsupported language: '{0}'\n\nRun 'gtx languages' to see all supported languages.")]
    UnsupportedLanguage(String),

    #[error("Invalid endpoint URL '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Translation endpoint returned status {0}")]
    HttpStatus(StatusCode),
}

impl TranslateError {
    /// Returns `true` for failures of the fetch itself (transport or status).
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_is_network() {
        assert!(TranslateError::HttpStatus(StatusCode::BAD_GATEWAY).is_network());
    }

    #[test]
    fn test_unsupported_language_is_not_network() {
        let err = TranslateError::UnsupportedLanguage("Klingon".to_string());
        assert!(!err.is_network());
        assert!(err.to_string().contains("'Klingon'"));
    }
}
