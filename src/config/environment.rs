// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT settings, and environment mode from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Environment-based configuration management

use crate::constants::{defaults, service_names};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// Process-local in-memory store
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// `memory` and `sqlite::memory:` select the in-memory store; `sqlite:path`
    /// and bare paths select a SQLite file.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or names an unsupported scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }

        if trimmed == "memory" || trimmed == "sqlite::memory:" {
            return Ok(Self::Memory);
        }

        if let Some(path) = trimmed.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            return Ok(Self::SQLite {
                path: PathBuf::from(path),
            });
        }

        if trimmed.contains("://") {
            anyhow::bail!(
                "Unsupported database URL format: {trimmed}. \
                 Supported formats: memory, sqlite::memory:, sqlite:path/to/db.sqlite"
            );
        }

        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "memory".to_owned(),
        }
    }

    /// Check if this is the in-memory store
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::Memory
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret; a random one is generated when absent
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_expiry_hours: defaults::JWT_EXPIRY_HOURS,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Storage backend
    pub database: DatabaseUrl,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database: DatabaseUrl::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// database URL is unsupported
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", defaults::LOG_LEVEL)),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))
                .context("Invalid DATABASE_URL value")?,
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &defaults::JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the token lifetime is not positive, or if no
    /// `JWT_SECRET` is configured in production
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_hours <= 0 {
            anyhow::bail!("JWT_EXPIRY_HOURS must be positive");
        }

        if self.auth.jwt_secret.is_none() && self.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }

        Ok(())
    }

    /// One-line-per-field summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - JWT Expiry: {}h",
            service_names::LOGBOOK_SERVER,
            self.http_port,
            self.log_level,
            self.environment,
            if self.database.is_memory() {
                "In-memory"
            } else {
                "SQLite"
            },
            self.auth.jwt_expiry_hours,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
