//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::translation::TranslateError;

/// Maps a top-level error to a process exit code.
///
/// Unsupported languages are usage errors, endpoint failures mean the service
/// is unavailable, and a malformed endpoint is a configuration problem.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<TranslateError>())
    {
        Some(TranslateError::UnsupportedLanguage(_)) => exitcode::USAGE,
        Some(TranslateError::InvalidEndpoint { .. }) => exitcode::CONFIG,
        Some(TranslateError::Network(_) | TranslateError::HttpStatus(_)) => exitcode::UNAVAILABLE,
        None => exitcode::SOFTWARE,
    }
}
