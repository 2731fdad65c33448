use serde::Deserialize;
use std::env;
use std::str::FromStr;

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) if val.trim().is_empty() => None,
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Address used when no request location carries one.
pub const DEFAULT_PLACEHOLDER_URL: &str = "World";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub address: AddressConfig,
    pub textract: TextractConfig,
    pub logging: LoggingConfig,
}

/// Bind address for `imgtext serve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressConfig {
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextractConfig {
    /// Falls back to the AWS default provider chain when unset.
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    /// No operation timeout is applied unless this is set.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" | "plain" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format '{other}' (expected json or text)")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("IMGTEXT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env_or("IMGTEXT_PORT", 9000),
            },
            address: AddressConfig {
                placeholder: env::var("IMGTEXT_PLACEHOLDER_URL")
                    .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_URL.to_string()),
            },
            textract: TextractConfig {
                region: env_non_empty("TEXTRACT_REGION"),
                endpoint_url: env_non_empty("TEXTRACT_ENDPOINT_URL"),
                timeout_secs: parse_env_opt("TEXTRACT_TIMEOUT_SECS"),
            },
            logging: LoggingConfig {
                format: parse_env_opt("IMGTEXT_LOG_FORMAT"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "IMGTEXT_HOST",
        "IMGTEXT_PORT",
        "IMGTEXT_PLACEHOLDER_URL",
        "IMGTEXT_LOG_FORMAT",
        "TEXTRACT_REGION",
        "TEXTRACT_ENDPOINT_URL",
        "TEXTRACT_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.address.placeholder, "World");
        assert!(config.textract.region.is_none());
        assert!(config.textract.endpoint_url.is_none());
        assert!(config.textract.timeout_secs.is_none());
        assert!(config.logging.format.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        clear_env();
        std::env::set_var("IMGTEXT_PORT", "8088");
        std::env::set_var("IMGTEXT_PLACEHOLDER_URL", "https://fallback.s3.amazonaws.com/a.png");
        std::env::set_var("IMGTEXT_LOG_FORMAT", "JSON");
        std::env::set_var("TEXTRACT_REGION", "eu-west-1");
        std::env::set_var("TEXTRACT_ENDPOINT_URL", "http://localhost:4566");
        std::env::set_var("TEXTRACT_TIMEOUT_SECS", "15");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8088);
        assert_eq!(
            config.address.placeholder,
            "https://fallback.s3.amazonaws.com/a.png"
        );
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert_eq!(config.textract.region.as_deref(), Some("eu-west-1"));
        assert_eq!(
            config.textract.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.textract.timeout_secs, Some(15));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        std::env::set_var("IMGTEXT_PORT", "not-a-port");
        std::env::set_var("IMGTEXT_LOG_FORMAT", "xml");
        std::env::set_var("TEXTRACT_TIMEOUT_SECS", "soon");
        std::env::set_var("TEXTRACT_REGION", "  ");

        let config = Config::from_env();
        assert_eq!(config.server.port, 9000);
        assert!(config.logging.format.is_none());
        assert!(config.textract.timeout_secs.is_none());
        assert!(config.textract.region.is_none());

        clear_env();
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
