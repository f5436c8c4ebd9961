//! Logging setup for the command-line front end.
//!
//! Uses `tracing` with a `tracing-subscriber` fmt layer. Output goes to
//! stderr so the menus and timetable views on stdout stay clean.
//!
//! # Environment
//! - `RUST_LOG`: level filter (default: `warn`), e.g. `RUST_LOG=u_timetable=debug`

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Installs a verbose subscriber for tests; repeated calls are ignored.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
