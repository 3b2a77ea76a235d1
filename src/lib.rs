//! # gtx - Quick Translation CLI
//!
//! `gtx` translates short text through the public `translate.googleapis.com`
//! endpoint used by browser extensions (`client=gtx`). No API key is needed.
//!
//! ## Features
//!
//! - **Language registry**: 63 languages addressable by English name or code
//! - **Response parsing**: Turns the endpoint's nested-array body into plain text
//! - **Speech URLs**: Builds a text-to-speech link for every translation
//! - **Interactive mode**: Chat-style translation sessions with `gtx chat`
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate words given on the command line
//! gtx --from English --to Spanish good morning
//!
//! # Translate from stdin
//! echo "How are you?" | gtx -t ja
//!
//! # Interactive chat mode
//! gtx chat
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! # async fn demo() -> Result<(), gtx_translate::translation::TranslateError> {
//! use gtx_translate::translation::translate;
//!
//! let result = translate("good morning", "English", "Spanish").await;
//! println!("{}", result.into_result()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gtx/config.toml`:
//!
//! ```toml
//! [gtx]
//! from = "English"
//! to = "Korean"
//! timeout_secs = 10
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files, and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Language registry, request building, and response parsing for the gtx endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
