use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, Write};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::cli::commands::translate::format_elapsed;
use crate::config::ResolvedConfig;
use crate::translation::{TranslationClient, TranslationRequest, canonical_name};
use crate::ui::{Spinner, Style, is_prompt_cancelled};
use crate::{output, status};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Canonical source language name.
    pub source_language: String,
    /// Canonical target language name.
    pub target_language: String,
    pub endpoint: String,
    /// Print the speech URL after each translation.
    pub show_speech: bool,
}

impl SessionConfig {
    pub fn new(source_language: String, target_language: String, endpoint: String) -> Self {
        Self {
            source_language,
            target_language,
            endpoint,
            show_speech: false,
        }
    }

    /// Sets `from` or `to` to the canonical name of `value`.
    fn set_language(&mut self, key: &str, value: &str) -> Result<&'static str> {
        let name = canonical_name(value).ok_or_else(|| {
            anyhow::anyhow!("Unsupported language: '{value}'. Run 'gtx languages' to list them.")
        })?;

        match key {
            "from" => self.source_language = name.to_string(),
            "to" => self.target_language = name.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}. Available: from, to"),
        }

        Ok(name)
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
    }
}

impl From<&ResolvedConfig> for SessionConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self::new(
            config.source_language.clone(),
            config.target_language.clone(),
            config.endpoint.clone(),
        )
    }
}

/// An interactive chat session for translation.
///
/// Every entered line is translated with the current languages.
pub struct ChatSession {
    config: SessionConfig,
    client: TranslationClient,
}

impl ChatSession {
    pub const fn new(config: SessionConfig, client: TranslationClient) -> Self {
        Self { config, client }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate_and_print(&text).await?,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Clear => {
                ui::clear_screen();
                io::stdout().flush()?;
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Set { key, value } => self.handle_set(&key, value.as_deref()),
            SlashCommand::Speech => {
                self.config.show_speech = !self.config.show_speech;
                println!(
                    "{} Speech URL {}\n",
                    Style::success("✓"),
                    if self.config.show_speech { "on" } else { "off" }
                );
            }
            SlashCommand::Swap => {
                self.config.swap();
                println!(
                    "{} Now translating {} → {}\n",
                    Style::success("✓"),
                    Style::value(&self.config.source_language),
                    Style::value(&self.config.target_language)
                );
            }
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }

        Ok(true)
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        let Some(value) = value else {
            println!("Usage: /set <from|to> <language>");
            return;
        };

        match self.config.set_language(key, value) {
            Ok(name) => println!(
                "{} {} set to {}\n",
                Style::success("✓"),
                if key == "from" { "Source language" } else { "Target language" },
                Style::value(name)
            ),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn translate_and_print(&self, text: &str) -> Result<()> {
        let request = TranslationRequest::new(
            text,
            &self.config.source_language,
            &self.config.target_language,
        );

        let spinner = Spinner::new("Translating...");
        let result = self.client.translate(&request).await;
        spinner.stop();

        if let Some(error) = result.error() {
            ui::print_error(&error.to_string());
            return Ok(());
        }

        if result.translated_text().is_empty() {
            ui::print_error("The endpoint returned no translation");
            return Ok(());
        }

        println!("{}", result.translated_text());
        io::stdout().flush()?;

        if self.config.show_speech
            && let Some(url) = result.speech_url()
        {
            status!("{} {}", Style::label("speech"), Style::link(url));
        }
        status!("{}", Style::secondary(format_elapsed(result.elapsed())));
        output::flush_stderr();
        println!();

        Ok(())
    }
}
