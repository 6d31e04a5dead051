use std::env;
use std::str::FromStr;
use std::time::Duration;
use crate::error::Error;
use crate::text::MatchConfig;
use crate::text::matcher::{DEFAULT_THRESHOLD, DEFAULT_MIN_WORD_LEN};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Headroom for the response body once Overpass has spent its own timeout
pub const HTTP_TIMEOUT_MARGIN_SECS: u64 = 30;

/// Runtime settings, read from the environment and overridable from the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub matching: MatchConfig,

    /// Pause after every geocoder/Overpass call, failed or not
    pub delay_ms: u64,

    pub nominatim_url: String,
    pub overpass_url: String,
    pub user_agent: String,

    /// Overpass server side timeout, the HTTP client allows a margin on top
    pub timeout_secs: u64
}

impl Default for Config {
    fn default() -> Self {
        Config {
            matching: MatchConfig::default(),
            delay_ms: 1000,
            nominatim_url: String::from(DEFAULT_NOMINATIM_URL),
            overpass_url: String::from(DEFAULT_OVERPASS_URL),
            user_agent: format!("hero-streets/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 180
        }
    }
}

impl Config {
    ///
    /// Load from HERO_STREETS_* environment variables
    ///
    /// Values are only parsed here; call `validate` once CLI overrides
    /// have been applied
    ///
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Config::default();

        let config = Config {
            matching: MatchConfig {
                threshold: var("HERO_STREETS_THRESHOLD", DEFAULT_THRESHOLD)?,
                min_word_len: var("HERO_STREETS_MIN_WORD_LEN", DEFAULT_MIN_WORD_LEN)?
            },
            delay_ms: var("HERO_STREETS_DELAY_MS", defaults.delay_ms)?,
            nominatim_url: var("HERO_STREETS_NOMINATIM_URL", defaults.nominatim_url)?,
            overpass_url: var("HERO_STREETS_OVERPASS_URL", defaults.overpass_url)?,
            user_agent: var("HERO_STREETS_USER_AGENT", defaults.user_agent)?,
            timeout_secs: var("HERO_STREETS_TIMEOUT_SECS", defaults.timeout_secs)?
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.matching.threshold) {
            return Err(Error::Config(format!("threshold must be within [0, 1], got {}", self.matching.threshold)));
        }

        if self.nominatim_url.trim().is_empty() || self.overpass_url.trim().is_empty() {
            return Err(Error::Config(String::from("service URLs must not be empty")));
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs + HTTP_TIMEOUT_MARGIN_SECS)
    }
}

fn var<T: FromStr>(key: &str, default: T) -> Result<T, Error> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => value.trim().parse::<T>().map_err(|_| {
            Error::Config(format!("{} has an invalid value: {}", key, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();

        assert_eq!(config.matching.threshold, 0.85);
        assert_eq!(config.matching.min_word_len, 3);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert_eq!(config.http_timeout(), Duration::from_secs(210));
        assert!(config.user_agent.starts_with("hero-streets/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();

        config.matching.threshold = 1.5;
        assert!(config.validate().is_err());

        config.matching.threshold = 1.0;
        assert!(config.validate().is_ok());

        config.overpass_url = String::from(" ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_override() {
        env::set_var("HERO_STREETS_THRESHOLD", "1.5");

        let mut config = Config::from_env().unwrap();
        env::remove_var("HERO_STREETS_THRESHOLD");

        assert_eq!(config.matching.threshold, 1.5);
        assert!(config.validate().is_err());

        config.matching.threshold = 0.9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_var() {
        env::set_var("HERO_STREETS_TEST_VAR_OK", " 250 ");
        env::set_var("HERO_STREETS_TEST_VAR_BAD", "fast");

        assert_eq!(var("HERO_STREETS_TEST_VAR_OK", 1000u64).unwrap(), 250);
        assert_eq!(var("HERO_STREETS_TEST_VAR_MISSING", 1000u64).unwrap(), 1000);
        assert!(var("HERO_STREETS_TEST_VAR_BAD", 1000u64).is_err());
    }
}
