use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtx")]
#[command(about = "Quick translations from the command line")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if omitted)
    pub text: Vec<String>,

    /// File to translate
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Source language name or code (e.g., English, en)
    #[arg(short = 's', long = "from", global = true)]
    pub from: Option<String>,

    /// Target language name or code (e.g., Korean, ko)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Translation endpoint base URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Also print the text-to-speech URL for the translation
    #[arg(long)]
    pub speech: bool,

    /// Suppress status output (timing, speech URL, spinner)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported languages
    Languages,
    /// Interactive mode: each line you enter is translated
    Chat,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_words() {
        let args = Args::try_parse_from(["gtx", "-t", "Korean", "good", "morning"]).unwrap();
        assert_eq!(args.text, vec!["good", "morning"]);
        assert_eq!(args.to.as_deref(), Some("Korean"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_global_language_flags_on_chat() {
        let args = Args::try_parse_from(["gtx", "chat", "--from", "ja", "--to", "en"]).unwrap();
        assert!(matches!(args.command, Some(Command::Chat)));
        assert_eq!(args.from.as_deref(), Some("ja"));
        assert_eq!(args.to.as_deref(), Some("en"));
    }

    #[test]
    fn test_file_conflicts_with_text() {
        assert!(Args::try_parse_from(["gtx", "-f", "notes.txt", "hello"]).is_err());
    }

    #[test]
    fn test_configure_show() {
        let args = Args::try_parse_from(["gtx", "configure", "--show"]).unwrap();
        assert!(matches!(args.command, Some(Command::Configure { show: true })));
    }
}
