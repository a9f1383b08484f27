use serde::{Deserialize, Serialize};

/// Feature flags toggling optional UI behaviour.
///
/// Every field has a serde default so a missing or partial `config.toml`
/// keeps the stock behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Open the auth dialog for the picked role before navigating to its dashboard.
    #[serde(default)]
    pub auth_on_role_select: bool,
    /// Show the "Navigating to: ... Dashboard" banner after a role is picked.
    #[serde(default = "default_true")]
    pub show_role_banner: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            auth_on_role_select: false,
            show_role_banner: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse config text. Errors carry the TOML parser's message.
    pub fn from_toml(contents: &str) -> Result<Self, crate::AppError> {
        toml::from_str(contents)
            .map_err(|e| crate::AppError::bad_request(format!("Invalid config: {e}")))
    }

    /// Parse config text, falling back to defaults when it does not parse.
    pub fn from_toml_or_default(contents: &str) -> Self {
        Self::from_toml(contents).unwrap_or_default()
    }
}
