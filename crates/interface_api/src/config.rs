//! API configuration

use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::Timezone;
use domain_analytics::RiskThresholds;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    pub log_format: LogFormat,
    /// Directory holding one `<customer>.json` snapshot per customer
    pub data_dir: PathBuf,
    /// Timezone "today" is taken in
    pub timezone: Timezone,
    /// Risk classification thresholds
    pub risk: RiskThresholds,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            data_dir: PathBuf::from("data/customers"),
            timezone: Timezone::default(),
            risk: default_thresholds(),
        }
    }
}

/// The brokerage's standard thresholds
pub fn default_thresholds() -> RiskThresholds {
    RiskThresholds {
        loss_ratio_high: rust_decimal_macros::dec!(70),
        loss_ratio_moderate: rust_decimal_macros::dec!(30),
        frequency_high: rust_decimal_macros::dec!(10),
        frequency_moderate: rust_decimal_macros::dec!(5),
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables over defaults
    ///
    /// Nested keys use a double underscore, e.g. `API_RISK__LOSS_RATIO_HIGH`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let risk = &defaults.risk;

        config::Config::builder()
            .set_default("host", defaults.host.clone())?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level.clone())?
            .set_default("log_format", "pretty")?
            .set_default("data_dir", defaults.data_dir.to_string_lossy().to_string())?
            .set_default("timezone", defaults.timezone.to_string())?
            .set_default("risk.loss_ratio_high", risk.loss_ratio_high.to_string())?
            .set_default("risk.loss_ratio_moderate", risk.loss_ratio_moderate.to_string())?
            .set_default("risk.frequency_high", risk.frequency_high.to_string())?
            .set_default("risk.frequency_moderate", risk.frequency_moderate.to_string())?
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.timezone.to_string(), "Europe/Oslo");
        assert_eq!(config.risk.loss_ratio_high, dec!(70));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
