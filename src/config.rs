use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_GENERATOR_URL: &str = "http://127.0.0.1:3400/generateMood";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub generator_url: String,
    pub generator_token: Option<String>,
    pub generator_timeout: Duration,
    pub tick_rate: Duration,
    pub mute: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator_url: DEFAULT_GENERATOR_URL.to_string(),
            generator_token: None,
            generator_timeout: Duration::from_secs(60),
            tick_rate: Duration::from_millis(33),
            mute: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("MOODYO_GENERATOR_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    key: "MOODYO_GENERATOR_URL",
                    value: url,
                });
            }
            config.generator_url = url;
        }

        config.generator_token = lookup("MOODYO_GENERATOR_TOKEN").filter(|t| !t.is_empty());

        if let Some(secs) = lookup("MOODYO_GENERATOR_TIMEOUT_SECS") {
            config.generator_timeout =
                Duration::from_secs(parse_positive("MOODYO_GENERATOR_TIMEOUT_SECS", secs)?);
        }

        if let Some(ms) = lookup("MOODYO_TICK_MS") {
            config.tick_rate = Duration::from_millis(parse_positive("MOODYO_TICK_MS", ms)?);
        }

        if let Some(mute) = lookup("MOODYO_MUTE") {
            config.mute = match mute.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        key: "MOODYO_MUTE",
                        value: mute,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse_positive(key: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("MOODYO_GENERATOR_URL", "https://moods.example/generate"),
            ("MOODYO_GENERATOR_TOKEN", "secret"),
            ("MOODYO_GENERATOR_TIMEOUT_SECS", "5"),
            ("MOODYO_TICK_MS", "50"),
            ("MOODYO_MUTE", "true"),
        ])
        .unwrap();

        assert_eq!(config.generator_url, "https://moods.example/generate");
        assert_eq!(config.generator_token.as_deref(), Some("secret"));
        assert_eq!(config.generator_timeout, Duration::from_secs(5));
        assert_eq!(config.tick_rate, Duration::from_millis(50));
        assert!(config.mute);
    }

    #[test]
    fn empty_token_is_none() {
        let config = config_from(&[("MOODYO_GENERATOR_TOKEN", "")]).unwrap();
        assert_eq!(config.generator_token, None);
    }

    #[test]
    fn rejects_zero_tick() {
        assert_eq!(
            config_from(&[("MOODYO_TICK_MS", "0")]),
            Err(ConfigError::InvalidNumber {
                key: "MOODYO_TICK_MS",
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(matches!(
            config_from(&[("MOODYO_GENERATOR_URL", "ftp://nope")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
