// ABOUTME: Configuration management module for server settings
// ABOUTME: Exposes the environment-driven ServerConfig and its typed parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Configuration module for the Logbook server
//!
//! Configuration comes from environment variables only. Command-line flags
//! in the binary override individual fields after loading.

/// Environment and server configuration
pub mod environment;

pub use environment::{AuthConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
