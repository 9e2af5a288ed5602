use std::env;

use log::LevelFilter;

/// Environment variable that switches the CLI to debug output.
pub const DEBUG_ENV_VAR: &str = "LOTTAWORDS_DEBUG";

/// Initialize logging for the CLI.
///
/// Logs at `Info` by default and `Debug` when `debug_enabled` is set;
/// an explicit `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

/// Whether the debug environment variable is set.
pub fn debug_requested() -> bool {
    env::var_os(DEBUG_ENV_VAR).is_some()
}
