//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging at `level`, letting `RUST_LOG` override it when set
///
/// Later calls are ignored once a logger is installed.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
