use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    currency::{AmountFormat, CurrencyCode, LocaleConfig, Visibility},
    errors::ConfigError,
    ledger::DEFAULT_CHART_COLOR,
    listings::{
        remote::{DEFAULT_FETCH_DELAY, DEFAULT_SEARCH_DELAY},
        MockListingSource, SearchCriteria, DEFAULT_MAX_PRICE,
    },
};

const DEFAULT_DIR_NAME: &str = ".budget_house";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
pub const HOME_ENV: &str = "BUDGET_HOUSE_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub locale: LocaleConfig,
    pub default_chart_color: String,
    pub hide_balances: bool,
    pub fetch_delay_ms: u64,
    pub search_delay_ms: u64,
    pub default_max_price: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "EUR".into(),
            locale: LocaleConfig::default(),
            default_chart_color: DEFAULT_CHART_COLOR.into(),
            hide_balances: false,
            fetch_delay_ms: DEFAULT_FETCH_DELAY.as_millis() as u64,
            search_delay_ms: DEFAULT_SEARCH_DELAY.as_millis() as u64,
            default_max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if !is_hex_color(&self.default_chart_color) {
            return Err(ConfigError::Invalid(format!(
                "default_chart_color `{}` is not a #rrggbb color",
                self.default_chart_color
            )));
        }
        if self.locale.decimal_separator == self.locale.grouping_separator {
            return Err(ConfigError::Invalid(
                "decimal and grouping separators must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(CurrencyCode::new(&self.currency), self.locale.clone())
            .with_visibility(Visibility::from_hidden(self.hide_balances))
    }

    pub fn initial_criteria(&self) -> SearchCriteria {
        SearchCriteria::default().with_max_price(self.default_max_price)
    }

    pub fn listing_source(&self) -> MockListingSource {
        MockListingSource::new()
            .with_fetch_delay(Duration::from_millis(self.fetch_delay_ms))
            .with_search_delay(Duration::from_millis(self.search_delay_ms))
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Returns the application data directory, defaulting to `~/.budget_house`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self::at(base.as_ref().join(CONFIG_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
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
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
