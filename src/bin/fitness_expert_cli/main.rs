// ABOUTME: Fitness expert CLI - one-shot advice and interactive guided dialogue
// ABOUTME: Parses arguments, initializes logging, and dispatches to commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness expert command-line interface
//!
//! Usage:
//! ```bash
//! # One-shot advice
//! fitness-expert advise --goal fat_loss --level beginner --weight 80 --supplements
//!
//! # Same, as a JSON session report
//! fitness-expert advise --goal muscle_gain --level advanced --weight 70 --json
//!
//! # English output
//! fitness-expert --locale en advise --goal general_fitness --level intermediate --weight 65
//!
//! # Guided dialogue over stdin/stdout
//! fitness-expert chat
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitness_expert::logging::LoggingConfig;
use fitness_expert::SessionRunner;
use fitness_expert_core::Locale;
use fitness_expert_engine::ExpertConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitness-expert",
    version,
    about = "Rule-based fitness and nutrition advisor",
    long_about = "Derives personalized advice from your goal, experience level, body weight and interest in supplements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output language (ar, en); overrides EXPERT_LOCALE
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print advice for the given answers
    Advise {
        /// Goal: muscle_gain, fat_loss, strength_increase, general_fitness
        #[arg(long)]
        goal: String,

        /// Level: beginner, intermediate, advanced
        #[arg(long)]
        level: String,

        /// Body weight in kilograms
        #[arg(long)]
        weight: String,

        /// Include supplement advice
        #[arg(long)]
        supplements: bool,

        /// Print the full session report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer the questions interactively
    Chat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let runner = build_runner(cli.locale.as_deref())?;
    debug!(locale = runner.config().locale.tag(), "runner configured");

    match cli.command {
        Command::Advise {
            goal,
            level,
            weight,
            supplements,
            json,
        } => commands::advise::run(&runner, &goal, &level, &weight, supplements, json)?,
        Command::Chat => commands::chat::run(runner)?,
    }

    Ok(())
}

fn build_runner(locale: Option<&str>) -> Result<SessionRunner> {
    let config = ExpertConfig::load()?;
    let config = match locale {
        Some(tag) => {
            let locale = Locale::parse(tag)
                .ok_or_else(|| anyhow::anyhow!("unsupported locale '{tag}' (expected ar or en)"))?;
            config.with_locale(locale)
        }
        None => config,
    };
    Ok(SessionRunner::with_config(config))
}
