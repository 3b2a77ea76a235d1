use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/clear", "Clear the screen"),
    ("/config", "Show current languages and endpoint"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
    ("/set", "Change a language: /set from|to <language>"),
    ("/speech", "Toggle printing the speech URL"),
    ("/swap", "Swap source and target languages"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Clear,
    Config,
    Help,
    Quit,
    Set { key: String, value: Option<String> },
    Speech,
    Swap,
    Unknown(String),
}

#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("clear" | "cls") => SlashCommand::Clear,
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        Some("set") => SlashCommand::Set {
            key: parts.get(1).copied().unwrap_or_default().to_string(),
            // Language names may contain spaces ("Haitian Creole")
            value: (parts.len() > 2).then(|| parts[2..].join(" ")),
        },
        Some("speech") => SlashCommand::Speech,
        Some("swap") => SlashCommand::Swap,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}
