//! API configuration

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::UserId;
use domain_portfolio::ReportConfig;
use infra_store::{SeedConfig, DEFAULT_SEED_DAYS};

const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Shanghai;

/// API configuration
///
/// Every field may be set through an `API_`-prefixed environment variable
/// (`API_PORT`, `API_DEFAULT_USER`, ...); unset fields take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// User answered when a request names none
    pub default_user: String,
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    /// Days of generated NAV history per fund
    pub seed_days: u32,
    /// Fixed RNG seed for reproducible sample data
    pub rng_seed: Option<u64>,
    /// Pins "today" to a fixed date
    pub as_of: Option<NaiveDate>,
    /// Absolute profit percent above which a holding raises an alert
    pub alert_threshold: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            log_level: "info".to_string(),
            default_user: UserId::default().to_string(),
            timezone: DEFAULT_TIMEZONE.name().to_string(),
            seed_days: DEFAULT_SEED_DAYS,
            rng_seed: None,
            as_of: None,
            alert_threshold: ReportConfig::default().alert_threshold,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the server cannot start with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.timezone.parse::<Tz>().is_err() {
            return Err(config::ConfigError::Message(format!(
                "unknown timezone: {}",
                self.timezone
            )));
        }
        if self.seed_days == 0 {
            return Err(config::ConfigError::Message("seed_days must be positive".to_string()));
        }
        if self.alert_threshold < Decimal::ZERO {
            return Err(config::ConfigError::Message(
                "alert_threshold must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Current date in the configured timezone, unless pinned by `as_of`
    pub fn today(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| Utc::now().with_timezone(&self.tz()).date_naive())
    }

    pub fn default_user(&self) -> UserId {
        UserId::from(self.default_user.as_str())
    }

    /// Sample data ending today
    pub fn seed_config(&self) -> SeedConfig {
        let seed = SeedConfig::new(self.today()).with_days(self.seed_days);
        match self.rng_seed {
            Some(rng_seed) => seed.with_rng_seed(rng_seed),
            None => seed,
        }
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            alert_threshold: self.alert_threshold,
            ..ReportConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3001");
        assert_eq!(config.default_user().as_str(), "user1");
        assert_eq!(config.tz(), chrono_tz::Asia::Shanghai);
        assert_eq!(config.alert_threshold, dec!(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        let config = ApiConfig {
            as_of: Some(date),
            rng_seed: Some(7),
            seed_days: 30,
            ..ApiConfig::default()
        };

        assert_eq!(config.today(), date);
        let seed = config.seed_config();
        assert_eq!(seed.as_of, date);
        assert_eq!(seed.days, 30);
        assert_eq!(seed.rng_seed, Some(7));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ApiConfig {
            timezone: "Mars/Olympus".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            seed_days: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_report_config_uses_threshold() {
        let config = ApiConfig {
            alert_threshold: dec!(5),
            ..ApiConfig::default()
        };
        assert_eq!(config.report_config().alert_threshold, dec!(5));
        assert_eq!(config.report_config().top_n, 3);
    }
}
