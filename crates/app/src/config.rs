use shared_types::{AppConfig, AppError, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, baked in at compile time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config and store it in the global `OnceLock`.
/// Only the first stored value sticks.
///
/// Falls back to defaults if the file does not parse; the parse error is
/// handed back so the caller can log it once the logger is up.
pub fn load_config() -> Result<&'static AppConfig, AppError> {
    load_into(&CONFIG, CONFIG_TOML)
}

/// Parse `contents` and fill `cell` with the result, or defaults on error.
/// A parse error is reported even when `cell` was already filled.
fn load_into<'a>(cell: &'a OnceLock<AppConfig>, contents: &str) -> Result<&'a AppConfig, AppError> {
    match AppConfig::from_toml(contents) {
        Ok(parsed) => Ok(cell.get_or_init(|| parsed)),
        Err(err) => {
            cell.get_or_init(AppConfig::default);
            Err(err)
        }
    }
}

/// The loaded config, or defaults if `load_config()` hasn't run yet.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::from_toml_or_default(CONFIG_TOML))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

/// Configured log level, `None` when the name is not a tracing level.
pub fn log_level() -> Option<tracing::Level> {
    config().logging.level.parse::<tracing::Level>().ok()
}
