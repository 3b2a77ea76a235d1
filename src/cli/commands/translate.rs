use anyhow::{Result, bail};
use std::time::Duration;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::input::InputReader;
use crate::status;
use crate::translation::{TranslationClient, TranslationRequest, TranslationResult};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub speech: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_config(&ResolveOptions {
        from: options.from.clone(),
        to: options.to.clone(),
        endpoint: options.endpoint.clone(),
    })?;

    let input = InputReader::read(&options.text, options.file.as_deref())?;
    let source_text = input.trim();

    if source_text.is_empty() {
        bail!("Input is empty");
    }

    let client = TranslationClient::new(config.client_options())?;
    let request = TranslationRequest::new(
        source_text,
        &config.source_language,
        &config.target_language,
    );

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    print_result(&config, result, options.speech)
}

/// Loads the config file and merges it with CLI overrides.
pub fn load_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    resolve_config(options, &manager.load_or_default())
}

fn print_result(config: &ResolvedConfig, result: TranslationResult, speech: bool) -> Result<()> {
    let elapsed = result.elapsed();
    let speech_url = result.speech_url().cloned();
    let translation = result.into_result()?;

    if translation.is_empty() {
        status!(
            "{} The endpoint returned no translation",
            Style::warning("Warning:")
        );
        return Ok(());
    }

    println!("{translation}");

    status!(
        "{}",
        Style::secondary(format!(
            "{} → {} in {}",
            config.source_language,
            config.target_language,
            format_elapsed(elapsed)
        ))
    );

    if speech && let Some(url) = speech_url {
        status!("{} {}", Style::label("speech"), Style::link(url));
    }

    Ok(())
}

/// Formats a duration as milliseconds, or seconds above one second.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{} ms", elapsed.as_millis())
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}
