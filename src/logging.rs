// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Builds the tracing-subscriber registry and provides domain event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use crate::config::environment::Environment;
use crate::constants::{defaults, service_names};
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse from `LOG_FORMAT`, falling back to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::LOGBOOK_SERVER.into(),
            service_version: service_names::SERVER_VERSION.to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| defaults::LOG_LEVEL.into());
        let format = LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default());
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LOGBOOK_SERVER.into()),
            service_version: service_names::SERVER_VERSION.to_owned(),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` (or the configured level) plus noise reduction
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        );

        base.add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "sqlx::query=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "tower_http=info"
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
        .add_directive(
            format!("logbook_server={}", self.level)
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logbook server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans,
            }
        });
        info!("Logging configured: {config_summary}");
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a workout or exercise mutation
    pub fn log_resource_event(user_id: Uuid, resource: &str, resource_id: Uuid, action: &str) {
        info!(
            user.id = %user_id,
            resource.kind = %resource,
            resource.id = %resource_id,
            resource.action = %action,
            "Resource changed"
        );
    }

    /// Log security events
    pub fn log_security_event(
        event_type: &str,
        severity: &str,
        details: &str,
        user_id: Option<Uuid>,
    ) {
        warn!(
            security.event = %event_type,
            security.severity = %severity,
            security.details = %details,
            user.id = %user_id.map_or_else(|| "unknown".to_owned(), |id| id.to_string()),
            "Security event"
        );
    }
}
