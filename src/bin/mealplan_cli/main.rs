// ABOUTME: mealplan-cli - command-line front end for the meal plan nutrition dashboard
// ABOUTME: Weekly summaries, day breakdowns, nutrient traces, validation, and plan comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly overview of the original plan against the bulking targets
//! mealplan-cli summary
//!
//! # Same for the optimized plan while cutting
//! mealplan-cli --plan optimized summary --phase cutting
//!
//! # Meals and totals of day 3
//! mealplan-cli day 3
//!
//! # Where does day 2's protein come from?
//! mealplan-cli trace 2 protein
//!
//! # Regression-check the plan against the published figures (exit code 1 on failure)
//! mealplan-cli validate
//!
//! # Original vs optimized weekly averages
//! mealplan-cli compare
//!
//! # Micronutrient adequacy from an intake table
//! mealplan-cli micronutrients intake.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mealplan_dashboard::{
    config::DashboardConfig,
    dataset::load_dataset,
    intelligence::DietPhase,
    logging::LoggingConfig,
    models::{NutrientField, PlanVariant},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Meal plan nutrition dashboard",
    long_about = "Nutrition rollups, nutrient traceability, and reference validation for a 7-day meal plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding foodReferences.json, meals.json, and weeklyPlan.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Plan variant (original or optimized)
    #[arg(long, global = true)]
    plan: Option<PlanVariant>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Weekly average, daily totals, macro split, and target comparison
    Summary {
        /// Diet phase (bulking or cutting)
        #[arg(long)]
        phase: Option<DietPhase>,
    },

    /// Meals and totals of one day
    Day {
        /// Day index, 1-7
        #[arg(value_parser = clap::value_parser!(u8).range(1..=7))]
        day: u8,
    },

    /// Attribution tree of one nutrient for one day
    Trace {
        /// Day index, 1-7
        #[arg(value_parser = clap::value_parser!(u8).range(1..=7))]
        day: u8,

        /// Nutrient (calories, protein, fat, saturatedFat, carbs, fiber, sodium, cholesterol)
        nutrient: NutrientField,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every plan check against the published reference figures
    Validate,

    /// Compare original and optimized weekly averages
    Compare,

    /// Micronutrient adequacy from an intake table
    Micronutrients {
        /// JSON object of daily intake keyed by nutrient (vitaminD, iron, ...)
        intake: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .verbose(cli.verbose)
        .init()
        .context("Failed to initialize logging")?;

    let phase_override = match &cli.command {
        Command::Summary { phase } => *phase,
        _ => None,
    };
    let config = DashboardConfig::from_env()?.with_overrides(cli.data_dir, cli.plan, phase_override);

    if let Command::Micronutrients { intake } = &cli.command {
        commands::micronutrients::run(intake).await?;
        return Ok(ExitCode::SUCCESS);
    }

    info!(data_dir = %config.data_dir.display(), "Loading dataset");
    let dataset = match load_dataset(&config.data_dir).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "Dataset could not be loaded");
            return Err(e.into());
        }
    };

    let variant = config.plan_variant;
    match cli.command {
        Command::Summary { .. } => commands::summary::run(&dataset, variant, config.diet_phase),
        Command::Day { day } => commands::day::run(&dataset, variant, day)?,
        Command::Trace {
            day,
            nutrient,
            json,
        } => commands::trace::run(&dataset, variant, day, nutrient, json)?,
        Command::Validate => {
            if !commands::validate::run(&dataset, variant) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Compare => commands::compare::run(&dataset),
        Command::Micronutrients { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}
