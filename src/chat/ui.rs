//! Chat mode UI components.

use crate::translation::code_for;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("gtx"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint(format!(
            "{} → {}",
            config.source_language, config.target_language
        ))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

fn language_line(name: &str) -> String {
    format!("{} {}", Style::value(name), Style::code(code_for(name)))
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        language_line(&config.source_language)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        language_line(&config.target_language)
    );
    println!(
        "  {}     {}",
        Style::label("speech"),
        Style::value(if config.show_speech { "on" } else { "off" })
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/set from <lang>", "Change the source language"),
        ("/set to <lang>  ", "Change the target language"),
        ("/swap           ", "Swap source and target languages"),
        ("/speech         ", "Toggle printing the speech URL"),
        ("/config         ", "Show current configuration"),
        ("/clear          ", "Clear the screen"),
        ("/help           ", "Show this help"),
        ("/quit           ", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn clear_screen() {
    // ANSI: erase display, move cursor home
    print!("\x1B[2J\x1B[1;1H");
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
