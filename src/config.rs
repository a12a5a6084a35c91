//! Build-time configuration
//!
//! Values are baked in when the WASM bundle is built, e.g.
//! `MEDVAULT_API_BASE=https://pharmacy.example/api trunk build`.

use std::str::FromStr;

use log::LevelFilter;
use medvault_core::{DEFAULT_BASE_URL, EXPIRING_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL including the `/api` prefix
    pub api_base: String,
    pub log_level: LevelFilter,
    /// Default window of the "expiring soon" listing
    pub expiring_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
            expiring_days: EXPIRING_WINDOW_DAYS as u32,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("MEDVAULT_API_BASE"),
            option_env!("MEDVAULT_LOG_LEVEL"),
            option_env!("MEDVAULT_EXPIRING_DAYS"),
        )
    }

    /// Unset or malformed values fall back to the defaults.
    fn from_values(api_base: Option<&str>, log_level: Option<&str>, expiring_days: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_base),
            log_level: log_level
                .and_then(|s| LevelFilter::from_str(s.trim()).ok())
                .unwrap_or(defaults.log_level),
            expiring_days: expiring_days
                .and_then(|s| s.trim().parse().ok())
                .filter(|d| *d > 0)
                .unwrap_or(defaults.expiring_days),
        }
    }
}
