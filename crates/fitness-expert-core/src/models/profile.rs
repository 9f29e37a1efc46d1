// ABOUTME: User profile enums collected by the dialogue (goal and experience level)
// ABOUTME: Lossy parsing keeps unrecognized values so rules can apply fallback text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary fitness goal chosen by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Build muscle mass (caloric surplus)
    MuscleGain,
    /// Reduce body fat (caloric deficit)
    FatLoss,
    /// Increase maximal strength
    StrengthIncrease,
    /// Maintain overall fitness
    GeneralFitness,
    /// Any value outside the known set, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl FitnessGoal {
    /// All recognized goals in the order they are offered to the user
    pub const KNOWN: [Self; 4] = [
        Self::MuscleGain,
        Self::FatLoss,
        Self::StrengthIncrease,
        Self::GeneralFitness,
    ];

    /// Parse a goal identifier, keeping unknown values as `Other`
    ///
    /// Keys match exactly; `"Fat_Loss"` or `" fat_loss"` are `Other`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "muscle_gain" => Self::MuscleGain,
            "fat_loss" => Self::FatLoss,
            "strength_increase" => Self::StrengthIncrease,
            "general_fitness" => Self::GeneralFitness,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Identifier used in facts and dialogue callbacks
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::MuscleGain => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::StrengthIncrease => "strength_increase",
            Self::GeneralFitness => "general_fitness",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this goal is one of the recognized values
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Long training history
    Advanced,
    /// Any value outside the known set, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl ExperienceLevel {
    /// All recognized levels in the order they are offered to the user
    pub const KNOWN: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Parse a level identifier, keeping unknown values as `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Identifier used in facts and dialogue callbacks
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this level is one of the recognized values
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
