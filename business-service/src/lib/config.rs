use std::env;

use auth::PasswordScheme;
use chrono::FixedOffset;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use jsonwebtoken::Algorithm;
use serde::Deserialize;
use serde::Deserializer;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token and password settings consumed by the auth components.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_ttl_days: i64,
    pub refresh_ttl_days: i64,
    pub password_hash_scheme: PasswordScheme,
    /// UTC offset used when computing token expiry, e.g. "+05:45"
    #[serde(deserialize_with = "deserialize_offset")]
    pub timezone: FixedOffset,
    /// Initial password given to invited users
    pub default_password: String,
}

/// Administrator account seeded at startup when absent.
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__SECRET_KEY=... overrides auth.secret_key
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that deserialize but cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret_key.is_empty() {
            return Err(ConfigError::Message("auth.secret_key must not be empty".into()));
        }
        if self.auth.access_ttl_days <= 0 {
            return Err(ConfigError::Message(
                "auth.access_ttl_days must be positive".into(),
            ));
        }
        if self.auth.refresh_ttl_days <= 0 {
            return Err(ConfigError::Message(
                "auth.refresh_ttl_days must be positive".into(),
            ));
        }
        if self.auth.default_password.is_empty() {
            return Err(ConfigError::Message(
                "auth.default_password must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn deserialize_offset<'de, D>(deserializer: D) -> Result<FixedOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_offset(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid timezone offset '{}', expected UTC or +HH:MM",
            raw
        ))
    })
}

/// Parse "UTC", "Z" or a signed "+HH:MM" offset.
pub fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("utc") || raw == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
