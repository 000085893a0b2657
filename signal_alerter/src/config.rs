//! Process-wide configuration: which instruments to watch, how they are
//! displayed, and who receives the alerts.
//!
//! Built once in `main` and passed by reference into the batch runner and the
//! notifier; nothing reads it ambiently. The bot token is deliberately not
//! part of the file; it comes from the environment at notifier construction.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::Error;
use crate::models::interval::{Interval, Lookback};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Instrument symbols to monitor, processed in order.
    pub instruments: Vec<String>,

    /// Symbol → human-friendly display name, in file order. Symbols without
    /// an entry are displayed raw.
    pub display_names: IndexMap<String, String>,

    /// Recipient chat ids for alert delivery.
    pub recipients: Vec<String>,

    /// Observation window per instrument.
    pub lookback: Lookback,

    /// Bar granularity per instrument.
    pub interval: Interval,
}

impl Default for AppConfig {
    /// The original deployment: one gold futures contract, 15-minute bars
    /// over one day, two recipients.
    fn default() -> Self {
        Self {
            instruments: vec!["GCU25.CMX".to_string()],
            display_names: IndexMap::from([("GCU25.CMX".to_string(), "#XAUUSD".to_string())]),
            recipients: vec!["1080336066".to_string(), "-1002619198712".to_string()],
            lookback: Lookback::Day1,
            interval: Interval::Minute15,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file. Fields absent from the file keep
    /// their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// The display name for a symbol, falling back to the raw symbol.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.display_names
            .get(symbol)
            .map(String::as_str)
            .unwrap_or(symbol)
    }
}
