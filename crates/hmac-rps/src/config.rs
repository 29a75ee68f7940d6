//! CLI configuration read from the environment.
use std::env;

use hmac_rps_core::games::DEFAULT_PAGE_SIZE;

/// Terminal session configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Help-table columns per page (at least 1).
    pub page_size: usize,
    /// Clear the terminal before drawing the help table.
    pub clear_screen: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            clear_screen: true,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HMAC_RPS_PAGE_SIZE` - Help-table columns per page (default: 10)
    /// - `HMAC_RPS_CLEAR_SCREEN` - Clear before drawing the help table (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = read_var::<usize>(&lookup, "HMAC_RPS_PAGE_SIZE") {
            config.page_size = size.max(1);
        }
        if let Some(clear) = lookup("HMAC_RPS_CLEAR_SCREEN").and_then(|v| parse_flag(&v)) {
            config.clear_screen = clear;
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
