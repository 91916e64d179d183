// ABOUTME: Configuration management module for dashboard settings
// ABOUTME: Environment-only configuration; command-line flags override individual values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Environment configuration
pub mod environment;

pub use environment::{DashboardConfig, Environment};
