use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::core::services::risk_service::DEFAULT_VOLATILITY_RANGE;
use crate::currency::{CurrencyCode, FormatOptions, LocaleConfig};
use crate::errors::ConfigError;
use crate::utils;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for display and the volatility placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub format: FormatOptions,
    /// Currency used to label cross-currency totals.
    #[serde(default)]
    pub display_currency: CurrencyCode,
    #[serde(default)]
    pub volatility: VolatilityConfig,
    /// Highlight over-budget remainders in red. `colored` still drops the
    /// escape codes when stdout is not a terminal or `NO_COLOR` is set.
    #[serde(default = "Config::default_color")]
    pub color: bool,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            format: FormatOptions::default(),
            display_currency: CurrencyCode::default(),
            volatility: VolatilityConfig::default(),
            color: Self::default_color(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl Config {
    pub fn default_color() -> bool {
        true
    }

    pub fn default_log_filter() -> String {
        "folio_core=info".into()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let VolatilityConfig { min, max, .. } = self.volatility;
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::Invalid(
                "volatility bounds must be finite".into(),
            ));
        }
        if min < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "volatility minimum must not be negative (got {min})"
            )));
        }
        if min > max {
            return Err(ConfigError::Invalid(format!(
                "volatility minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(())
    }
}

/// Range for the random volatility draw, plus an optional fixed seed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VolatilityConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        let (min, max) = DEFAULT_VOLATILITY_RANGE;
        Self {
            min,
            max,
            seed: None,
        }
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for `config.json` inside the application data directory.
    pub fn new() -> Self {
        Self::with_path(utils::app_data_dir().join(CONFIG_FILE))
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self::with_path(base.as_ref().join(CONFIG_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
