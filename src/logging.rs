//! Logger bootstrap shared by the performance binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` lowers the default filter to debug so the per-tick traces
/// show up; otherwise only info and above are printed. `RUST_LOG` still
/// overrides either default.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // A second init attempt (as happens across tests) is not an error
    // worth surfacing; the first logger simply stays installed.
    let _ = Builder::from_env(Env::default().default_filter_or(default_level.to_string())).try_init();
}
