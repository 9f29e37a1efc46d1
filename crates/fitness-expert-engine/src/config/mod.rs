// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Process-wide read-only settings shared by every inference session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Settings are read once per process and never mutated afterwards, so sharing
//! them between sessions does not leak any session state.

/// Configuration error types
pub mod error;

/// Protein factor ranges per goal
pub mod protein;

pub use error::ConfigError;
pub use protein::{ProteinFactorsConfig, ProteinRange};

use fitness_expert_core::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpertConfig {
    /// Protein factors used by the protein rule
    pub protein: ProteinFactorsConfig,
    /// Language for advice text
    pub locale: Locale,
}

/// Global configuration singleton
static EXPERT_CONFIG: OnceLock<ExpertConfig> = OnceLock::new();

impl ExpertConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        EXPERT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load expert config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not valid unicode, does not parse,
    /// or leaves the configuration invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a different locale
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any protein factor is not finite, not positive, or
    /// has its lower bound above its upper bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            (self.protein.fat_loss, "fat_loss protein factors must satisfy 0 < low <= high"),
            (
                self.protein.muscle_gain,
                "muscle_gain protein factors must satisfy 0 < low <= high",
            ),
            (
                self.protein.strength_increase,
                "strength_increase protein factors must satisfy 0 < low <= high",
            ),
            (self.protein.default, "default protein factors must satisfy 0 < low <= high"),
        ];

        for (range, message) in ranges {
            if !range.low.is_finite() || !range.high.is_finite() {
                return Err(ConfigError::ValueOutOfRange(message));
            }
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange(message));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = read_var("EXPERT_LOCALE")? {
            self.locale = Locale::parse(&val)
                .ok_or_else(|| ConfigError::Parse(format!("Invalid EXPERT_LOCALE: {val}")))?;
        }

        override_factor("EXPERT_PROTEIN_FAT_LOSS_LOW", &mut self.protein.fat_loss.low)?;
        override_factor("EXPERT_PROTEIN_FAT_LOSS_HIGH", &mut self.protein.fat_loss.high)?;
        override_factor("EXPERT_PROTEIN_MUSCLE_GAIN_LOW", &mut self.protein.muscle_gain.low)?;
        override_factor("EXPERT_PROTEIN_MUSCLE_GAIN_HIGH", &mut self.protein.muscle_gain.high)?;
        override_factor(
            "EXPERT_PROTEIN_STRENGTH_INCREASE_LOW",
            &mut self.protein.strength_increase.low,
        )?;
        override_factor(
            "EXPERT_PROTEIN_STRENGTH_INCREASE_HIGH",
            &mut self.protein.strength_increase.high,
        )?;
        override_factor("EXPERT_PROTEIN_DEFAULT_LOW", &mut self.protein.default.low)?;
        override_factor("EXPERT_PROTEIN_DEFAULT_HIGH", &mut self.protein.default.high)?;

        Ok(self)
    }
}

/// Read an override, treating an unset variable as absent
fn read_var(var: &str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn override_factor(var: &str, target: &mut f64) -> Result<(), ConfigError> {
    if let Some(val) = read_var(var)? {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {var}")))?;
    }
    Ok(())
}
