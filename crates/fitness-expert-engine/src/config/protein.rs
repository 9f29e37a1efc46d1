// ABOUTME: Protein factor configuration for the protein advice rule
// ABOUTME: Grams-per-kilogram ranges keyed by fitness goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_expert_core::constants::protein;
use fitness_expert_core::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Daily protein range in grams per kilogram of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinRange {
    /// Lower factor
    pub low: f64,
    /// Upper factor
    pub high: f64,
}

impl ProteinRange {
    /// Build a range from a `(low, high)` pair
    #[must_use]
    pub const fn from_pair((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }

    /// Gram bounds for a body weight, truncated toward zero
    #[must_use]
    pub fn grams_for(&self, kg: f64) -> (i64, i64) {
        ((kg * self.low).trunc() as i64, (kg * self.high).trunc() as i64)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low > 0.0 && self.low <= self.high
    }
}

/// Protein factors per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinFactorsConfig {
    /// Fat loss
    pub fat_loss: ProteinRange,
    /// Muscle gain
    pub muscle_gain: ProteinRange,
    /// Strength increase
    pub strength_increase: ProteinRange,
    /// General fitness and unrecognized goals
    pub default: ProteinRange,
}

impl Default for ProteinFactorsConfig {
    fn default() -> Self {
        Self {
            fat_loss: ProteinRange::from_pair(protein::FAT_LOSS),
            muscle_gain: ProteinRange::from_pair(protein::MUSCLE_GAIN),
            strength_increase: ProteinRange::from_pair(protein::STRENGTH_INCREASE),
            default: ProteinRange::from_pair(protein::DEFAULT),
        }
    }
}

impl ProteinFactorsConfig {
    /// Range that applies to a goal
    #[must_use]
    pub const fn for_goal(&self, goal: &FitnessGoal) -> ProteinRange {
        match goal {
            FitnessGoal::FatLoss => self.fat_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::StrengthIncrease => self.strength_increase,
            FitnessGoal::GeneralFitness | FitnessGoal::Other(_) => self.default,
        }
    }
}
