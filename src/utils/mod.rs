use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".folio_core";
const HOME_ENV: &str = "FOLIO_CORE_HOME";
const DEFAULT_DIRECTIVE: &str = "folio_core=info";

static TRACING_INIT: Once = Once::new();

/// Application data directory: `$FOLIO_CORE_HOME`, else `~/.folio_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Initializes the global tracing subscriber; later calls are no-ops.
///
/// `RUST_LOG` wins over `directive`, which falls back to `folio_core=info`
/// when it does not parse.
pub fn init_tracing(directive: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        match fmt().with_env_filter(filter).try_init() {
            Ok(()) => tracing::info!("Folio Core tracing initialized."),
            Err(err) => tracing::debug!(%err, "tracing subscriber already installed"),
        }
    });
}
