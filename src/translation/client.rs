use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

use super::error::TranslateError;
use super::language::{all_language_names, resolve_language};
use super::parser::parse_translation;
use super::request::{DEFAULT_ENDPOINT, speech_url, translate_url};

/// Browser user agent sent with every request; the endpoint rejects some bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    /// Source language name (or code).
    pub source_language: String,
    /// Target language name (or code).
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        source_text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Outcome of one translation request.
///
/// Either a translation (possibly empty) or an error, never both: a failed
/// result has empty text and no speech URL.
#[derive(Debug)]
pub struct TranslationResult {
    translated_text: String,
    speech_url: Option<Url>,
    elapsed: Duration,
    error: Option<TranslateError>,
}

impl TranslationResult {
    fn succeeded(translated_text: String, speech_url: Option<Url>, elapsed: Duration) -> Self {
        Self {
            translated_text,
            speech_url,
            elapsed,
            error: None,
        }
    }

    fn failed(error: TranslateError, elapsed: Duration) -> Self {
        Self {
            translated_text: String::new(),
            speech_url: None,
            elapsed,
            error: Some(error),
        }
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Text-to-speech URL, present only for a non-empty translation.
    pub const fn speech_url(&self) -> Option<&Url> {
        self.speech_url.as_ref()
    }

    /// Wall-clock time spent building, fetching, and parsing.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub const fn error(&self) -> Option<&TranslateError> {
        self.error.as_ref()
    }

    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<String, TranslateError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.translated_text),
        }
    }
}

/// Transport settings for [`TranslationClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(options: ClientOptions) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: options.endpoint,
        })
    }

    /// Translates one request. Failures are reported in the result, not raised.
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        let started = Instant::now();

        match self.run(request).await {
            Ok((text, speech_url)) => {
                let elapsed = started.elapsed();
                debug!(stage = "succeeded", chars = text.chars().count(), ?elapsed);
                TranslationResult::succeeded(text, speech_url, elapsed)
            }
            Err(error) => {
                let elapsed = started.elapsed();
                warn!(stage = "failed", %error, ?elapsed);
                TranslationResult::failed(error, elapsed)
            }
        }
    }

    async fn run(
        &self,
        request: &TranslationRequest,
    ) -> Result<(String, Option<Url>), TranslateError> {
        debug!(
            stage = "building",
            from = %request.source_language,
            to = %request.target_language
        );
        let source_code = resolve_language(&request.source_language)?;
        let target_code = resolve_language(&request.target_language)?;
        let url = translate_url(&self.endpoint, &request.source_text, source_code, target_code)?;

        debug!(stage = "fetching", %url);
        let body = self.fetch(url).await?;

        debug!(stage = "parsing", bytes = body.len());
        let translated = parse_translation(&body, source_code);

        if translated.is_empty() {
            debug!("response held no translatable text");
            return Ok((translated, None));
        }

        let speech = speech_url(&self.endpoint, &translated, target_code)?;
        Ok((translated, Some(speech)))
    }

    /// Fetches the raw response body for a built URL.
    pub async fn fetch(&self, url: Url) -> Result<String, TranslateError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::HttpStatus(status));
        }

        Ok(response.text().await?)
    }
}

/// Translates `text` with a default client against the public endpoint.
pub async fn translate(text: &str, source_language: &str, target_language: &str) -> TranslationResult {
    let started = Instant::now();

    match TranslationClient::new(ClientOptions::default()) {
        Ok(client) => {
            let request = TranslationRequest::new(text, source_language, target_language);
            client.translate(&request).await
        }
        Err(error) => TranslationResult::failed(error, started.elapsed()),
    }
}

/// All supported language names, sorted.
pub fn list_supported_languages() -> &'static [&'static str] {
    all_language_names()
}
