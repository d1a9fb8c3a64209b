//! Logging bootstrap.
//!
//! One idempotent entry point wired to `env_logger`; modules log through the
//! `log` facade and never touch the backend directly.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "minar_clock=debug"). When `None`, `RUST_LOG` is honored and the default
/// level is `info`.
///
/// This function is idempotent; subsequent calls are ignored. Intended usage
/// is early in `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
