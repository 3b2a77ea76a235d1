//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, GtxConfig,
};
use crate::translation::{DEFAULT_ENDPOINT, all_language_names, canonical_name, code_for};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the saved defaults. Otherwise prompts for the default
/// source language, target language, and endpoint, then saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        print_current_defaults(&manager.load_or_default());
        println!(
            "  {}      {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
        return Ok(());
    }

    if handle_prompt_cancellation(|| run_configure_inner(&manager))?.is_some() {
        println!();
        println!(
            "{} Configuration saved to {}",
            Style::success("✓"),
            Style::secondary(manager.config_path().display())
        );
    }

    Ok(())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let from = select_language(
        "Default source language:",
        config.gtx.from.as_deref().unwrap_or(DEFAULT_SOURCE_LANGUAGE),
    )?;
    let to = select_language(
        "Default target language:",
        config.gtx.to.as_deref().unwrap_or(DEFAULT_TARGET_LANGUAGE),
    )?;
    let endpoint = input_endpoint(config.gtx.endpoint.as_deref())?;

    config.gtx = GtxConfig {
        from: Some(from),
        to: Some(to),
        endpoint,
        ..config.gtx
    };

    manager.save(&config)
}

fn print_current_defaults(config: &ConfigFile) {
    let show = |value: Option<&str>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!("  {}      {}", Style::label("from"), show(config.gtx.from.as_deref()));
    println!("  {}        {}", Style::label("to"), show(config.gtx.to.as_deref()));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        show(config.gtx.endpoint.as_deref())
    );
    println!();
}

fn select_language(message: &str, default: &str) -> Result<String> {
    let names = all_language_names();

    let options: Vec<String> = names
        .iter()
        .map(|name| format!("{name} ({})", code_for(name)))
        .collect();

    let default_index = canonical_name(default)
        .and_then(|d| names.iter().position(|name| *name == d))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Strip the " (code)" suffix
    let name = selection
        .rsplit_once(" (")
        .map_or(selection.as_str(), |(name, _)| name);

    Ok(name.to_string())
}

fn input_endpoint(current: Option<&str>) -> Result<Option<String>> {
    let endpoint = Text::new("Endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL of the translation endpoint")
        .prompt()?;

    let endpoint = endpoint.trim();

    if url::Url::parse(endpoint).is_err() {
        bail!("Invalid endpoint URL: '{endpoint}'");
    }

    // Keep the file minimal when the public endpoint is used
    if endpoint.trim_end_matches('/') == DEFAULT_ENDPOINT {
        Ok(None)
    } else {
        Ok(Some(endpoint.to_string()))
    }
}
