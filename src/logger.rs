//! Logging setup on the `tracing` ecosystem.
//!
//! Logs go to stderr; stdout carries stub output in stdin mode.
//!
//! Filter precedence: `--verbose` (debug), `--quiet` (errors only),
//! `RUST_LOG`, then the default of info for this crate.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("luastub=debug")
    } else if quiet {
        EnvFilter::new("luastub=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("luastub=info"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && std::env::var_os("NO_COLOR").is_none())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
