//! Load settings from environment variables (after `.env`, if any, has been applied).

use crate::config::types::Settings;
use crate::error::ConfigError;
use std::str::FromStr;

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        if let Some(v) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            s.database_url = v.trim().to_string();
        }
        if let Some(v) = lookup("BIND_ADDR") {
            s.bind_addr = parse("BIND_ADDR", &v)?;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
            s.db_max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
            if s.db_max_connections == 0 {
                return Err(invalid("DB_MAX_CONNECTIONS", &v));
            }
        }
        if let Some(v) = lookup("BCRYPT_COST") {
            s.bcrypt_cost = parse("BCRYPT_COST", &v)?;
            if !(4..=31).contains(&s.bcrypt_cost) {
                return Err(invalid("BCRYPT_COST", &v));
            }
        }
        if let Some(v) = lookup("MAX_BODY_BYTES") {
            s.max_body_bytes = parse("MAX_BODY_BYTES", &v)?;
        }
        if let Some(v) = lookup("USER_LIST_INCLUDE_HASH") {
            s.user_list_include_hash = parse_bool("USER_LIST_INCLUDE_HASH", &v)?;
        }
        if let Some(v) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            s.log_filter = v;
        }
        Ok(s)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
