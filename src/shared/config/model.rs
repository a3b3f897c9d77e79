use std::env;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::query::errors::QueryResult;
use crate::query::options::{self, QueryOption};
use crate::query::types::Connective;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub stdout_level: String,
    #[serde(default = "default_level")]
    pub file_level: String,
    /// Daily-rolling log files are written here when set.
    pub log_dir: Option<String>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stdout_level: default_level(),
            file_level: default_level(),
            log_dir: None,
        }
    }
}

/// Filters applied to every query built through the process-wide defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    pub connective: Option<String>,
    pub active: Option<bool>,
    pub deleted: Option<bool>,
    pub shippable: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    #[serde(default)]
    pub raw: Vec<String>,
    /// Fully spelled-out options, appended after the shorthands above.
    #[serde(default)]
    pub options: Vec<QueryOption>,
}

impl DefaultsConfig {
    pub fn to_options(&self) -> QueryResult<Vec<QueryOption>> {
        let mut out = Vec::new();

        if let Some(token) = &self.connective {
            out.push(options::with_connective(token.parse::<Connective>()?));
        }
        if let Some(active) = self.active {
            out.push(options::with_active(active));
        }
        if let Some(deleted) = self.deleted {
            out.push(options::with_deleted(deleted));
        }
        if let Some(shippable) = self.shippable {
            out.push(options::with_shippable(shippable));
        }
        if let Some(kind) = &self.kind {
            out.push(options::with_type(kind.as_str()));
        }
        if let Some(currency) = &self.currency {
            out.push(options::with_currency(currency.as_str()));
        }
        if !self.metadata.is_empty() {
            out.push(options::with_metadata_map(self.metadata.clone()));
        }
        out.extend(self.raw.iter().map(|raw| options::with_raw_string(raw.as_str())));
        out.extend(self.options.iter().cloned());

        Ok(out)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("SEARCH_QUERY_CONFIG").unwrap_or_else(|_| "config/search_query".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("SEARCH_QUERY").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
