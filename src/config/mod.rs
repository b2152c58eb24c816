//! Configuration module
//!
//! Centralized, environment-variable driven configuration for the portal
//! backend. Everything is read **once** at startup into [`AppConfig`] and
//! passed into components explicitly (`web::Data` for request-scoped
//! access); no configuration lives in mutable globals.
//!
//! # Environment variables
//!
//! ```bash
//! # Server
//! export HOST="127.0.0.1"
//! export PORT="5000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="complain_portal"
//!
//! # JWT signing secret
//! export JWT_SECRET="your-super-secret-key"
//!
//! # Rate limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! The defaults are only safe for development.

use std::env;

use log::error;

/// The one identity that can never be deleted, regardless of caller role.
///
/// Fixed at compile time; the deletion guard in the users repository
/// compares record emails against this address.
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@complainportal.gov.bd";

/// HTTP server bind settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// MongoDB connection settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub uri: String,
    pub database_name: String,
}

/// JWT signing settings
///
/// Only the secret is configurable; the 12-hour token lifetime is a
/// fixed property of the system (see `services::auth`).
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

/// Rate limiting settings
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// Complete application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DbConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Loads the full configuration from environment variables.
    ///
    /// Missing values fall back to development defaults; unparsable
    /// numeric values fall back with an error log instead of aborting.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env("PORT", 5000),
            },
            db: DbConfig {
                uri: env::var("MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                database_name: env::var("DATABASE_NAME")
                    .unwrap_or_else(|_| "complain_portal".to_string()),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev-only-insecure-secret".to_string()),
            },
            rate_limit: RateLimitConfig {
                per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
                burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
            },
        }
    }
}

/// Reads a numeric environment variable with a fallback default.
fn parse_env<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            error!("failed to parse {}={}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_missing_uses_default() {
        assert_eq!(parse_env("DOES_NOT_EXIST_FOR_SURE", 42u64), 42);
    }

    #[test]
    fn test_super_admin_email_is_fixed() {
        // The deletion guard depends on this exact value.
        assert_eq!(SUPER_ADMIN_EMAIL, "superadmin@complainportal.gov.bd");
    }
}
