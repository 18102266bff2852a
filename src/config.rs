use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Number of mock rides generated at startup. `None` picks 4-9 at random.
    pub catalog_size: Option<usize>,
    /// Seed for the mock catalog so a restart reproduces the same rides.
    pub catalog_seed: Option<u64>,
    /// Simulated latency applied before search results are returned.
    pub search_delay: Duration,
    pub default_currency: String,
    pub rate_limit_per_ms: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            catalog_size: None,
            catalog_seed: None,
            search_delay: Duration::from_millis(800),
            default_currency: "INR".to_string(),
            rate_limit_per_ms: 60,
            rate_limit_burst: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            catalog_size: parse_opt(&lookup, "CATALOG_SIZE")?,
            catalog_seed: parse_opt(&lookup, "CATALOG_SEED")?,
            search_delay: Duration::from_millis(parse_or(
                &lookup,
                "SEARCH_DELAY_MS",
                defaults.search_delay.as_millis() as u64,
            )?),
            default_currency: lookup("DEFAULT_CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.default_currency),
            rate_limit_per_ms: parse_or(&lookup, "RATE_LIMIT_PER_MS", defaults.rate_limit_per_ms)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", defaults.rate_limit_burst)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_opt<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", key, raw))),
        None => Ok(None),
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.catalog_size, None);
        assert_eq!(config.search_delay, Duration::from_millis(800));
        assert_eq!(config.default_currency, "INR");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("CATALOG_SIZE", "12"),
            ("CATALOG_SEED", "42"),
            ("SEARCH_DELAY_MS", "0"),
            ("DEFAULT_CURRENCY", " usd "),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.catalog_size, Some(12));
        assert_eq!(config.catalog_seed, Some(42));
        assert_eq!(config.search_delay, Duration::ZERO);
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn test_malformed_number_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
