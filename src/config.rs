use crate::errors::ConfigError;
use crate::models::{default_catalog, CatalogItem};
use std::{env, path::PathBuf};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_PREFS_PATH: &str = "data/preferences.json";
pub const DEFAULT_CURRENCY: &str = "₱";

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix shared by both endpoints, e.g. `http://host/api` or `http://host`.
    pub api_base: String,
    pub prefs_path: PathBuf,
    pub currency: String,
    pub catalog: Vec<CatalogItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            currency: DEFAULT_CURRENCY.to_string(),
            catalog: default_catalog(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(base) = lookup("SALES_API_BASE") {
            config.api_base = base;
        }
        if let Some(path) = lookup("SALES_PREFS_PATH") {
            config.prefs_path = PathBuf::from(path);
        }
        if let Some(symbol) = lookup("SALES_CURRENCY") {
            config.currency = symbol;
        }
        if let Some(raw) = lookup("SALES_CATALOG") {
            config.catalog = parse_catalog(&raw)?;
        }

        Ok(config)
    }

    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), name)
    }
}

fn parse_catalog(raw: &str) -> Result<Vec<CatalogItem>, ConfigError> {
    let items: Vec<CatalogItem> =
        serde_json::from_str(raw).map_err(|err| ConfigError::Invalid {
            name: "SALES_CATALOG",
            reason: err.to_string(),
        })?;

    if let Some(bad) = items
        .iter()
        .find(|item| item.name.trim().is_empty() || !item.price.is_finite() || item.price < 0.0)
    {
        return Err(ConfigError::Invalid {
            name: "SALES_CATALOG",
            reason: format!("bad entry {:?} priced {}", bad.name, bad.price),
        });
    }

    Ok(items)
}
