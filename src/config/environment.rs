// ABOUTME: Environment configuration for the dashboard: dataset location, plan variant, diet phase
// ABOUTME: Parses environment variables into a typed DashboardConfig with strict value checking
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use crate::intelligence::targets::DietPhase;
use crate::models::PlanVariant;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
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
    pub const fn is_production(&self) -> bool {
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

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Directory holding `foodReferences.json`, `meals.json`, `weeklyPlan.json`
    pub data_dir: PathBuf,
    /// Plan variant shown by default
    pub plan_variant: PlanVariant,
    /// Diet phase whose calorie target is used for comparison
    pub diet_phase: DietPhase,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            plan_variant: PlanVariant::default(),
            diet_phase: DietPhase::default(),
            environment: Environment::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the plan variant or diet phase
    /// variable holds an unrecognized value
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            data_dir = %config.data_dir.display(),
            plan_variant = %config.plan_variant,
            diet_phase = %config.diet_phase,
            environment = %config.environment,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the plan variant or diet phase
    /// value is unrecognized
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let data_dir = lookup(env_config::DATA_DIR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(defaults::DATA_DIR), PathBuf::from);

        let plan_variant = parse_optional(&lookup, env_config::PLAN_VARIANT)?.unwrap_or_default();
        let diet_phase = parse_optional(&lookup, env_config::DIET_PHASE)?.unwrap_or_default();

        let environment = lookup(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            plan_variant,
            diet_phase,
            environment,
        })
    }

    /// Apply command-line overrides on top of the environment
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        plan_variant: Option<PlanVariant>,
        diet_phase: Option<DietPhase>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(variant) = plan_variant {
            self.plan_variant = variant;
        }
        if let Some(phase) = diet_phase {
            self.diet_phase = phase;
        }
        self
    }
}

fn parse_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse()
            .map(Some)
            .map_err(|e: AppError| AppError::config(format!("Invalid {key} value: {}", e.message))),
        _ => Ok(None),
    }
}
