//! Central module for application-wide configuration settings.
//!
//! This module handles loading the gateway's configuration (database location,
//! server port, token signing key and the registration toggle) from the
//! environment. The resulting `Config` is handed to the components that need
//! it at construction time; nothing reads the environment after startup.

use anyhow::{Context, Result};
use std::env;
use std::ops::RangeInclusive;

/// Work factors bcrypt accepts.
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    pub registration_open: bool,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://gateway.db?mode=rwc".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;
        if i64::try_from(jwt_expires_in_seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .is_none()
        {
            anyhow::bail!("JWT_EXPIRES_IN_SECONDS is too large");
        }

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let registration_open = parse_flag(
            &env::var("REGISTRATION_OPEN").unwrap_or_else(|_| "false".to_string()),
        )
        .context("REGISTRATION_OPEN must be true or false")?;

        let bcrypt_cost = parse_bcrypt_cost(
            &env::var("BCRYPT_COST").unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string()),
        )
        .context("BCRYPT_COST must be a number between 4 and 31")?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            server_port,
            registration_open,
            bcrypt_cost,
        })
    }
}

fn parse_bcrypt_cost(value: &str) -> Result<u32> {
    let cost = value.trim().parse::<u32>()?;
    if !BCRYPT_COST_RANGE.contains(&cost) {
        anyhow::bail!("bcrypt cost {} is out of range", cost);
    }
    Ok(cost)
}

/// Accepts the usual spellings of a boolean switch.
fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognised flag value '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_parse_bcrypt_cost() {
        assert_eq!(parse_bcrypt_cost("4").unwrap(), 4);
        assert_eq!(parse_bcrypt_cost(" 12 ").unwrap(), 12);
        assert_eq!(parse_bcrypt_cost("31").unwrap(), 31);
        assert!(parse_bcrypt_cost("3").is_err());
        assert!(parse_bcrypt_cost("32").is_err());
        assert!(parse_bcrypt_cost("4000000000").is_err());
        assert!(parse_bcrypt_cost("twelve").is_err());
    }
}
