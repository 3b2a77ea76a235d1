use anyhow::Result;
use clap::Parser;

use gtx_translate::cli::commands::{chat, configure, translate};
use gtx_translate::cli::{Args, Command, exit_code};
use gtx_translate::logging;
use gtx_translate::output::{self, OutputConfig};
use gtx_translate::translation::{print_languages, validate_language};
use gtx_translate::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    for lang in [&args.from, &args.to].into_iter().flatten() {
        validate_language(lang)?;
    }

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat) => {
            let options = chat::ChatOptions {
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
                speech: args.speech,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
