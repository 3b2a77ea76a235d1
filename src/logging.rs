//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so stdout carries only translations. `RUST_LOG` controls
//! the filter; `--verbose` adds `gtx_translate=debug` on top of it.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

const VERBOSE_DIRECTIVE: &str = "gtx_translate=debug";

fn build_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();

    if verbose {
        match VERBOSE_DIRECTIVE.parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    } else {
        filter
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
