// ABOUTME: Fact model asserted into an inference session
// ABOUTME: Seed facts from the user, completion markers, and the advice lines rules emit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::{ExperienceLevel, FitnessGoal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of advice; at most one completion marker per category per session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    /// Caloric intake direction for the chosen goal
    Calories,
    /// Daily protein range derived from body weight
    Protein,
    /// Creatine and whey protein notes
    Supplements,
    /// Drinking water around training
    Hydration,
    /// Habit and progression guidance by experience level
    Consistency,
}

impl AdviceCategory {
    /// Every category, in standard rule order
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Protein,
        Self::Supplements,
        Self::Hydration,
        Self::Consistency,
    ];

    /// Marker type string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Supplements => "supplements",
            Self::Hydration => "hydration",
            Self::Consistency => "consistency",
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record asserted into a session's fact store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fact", rename_all = "snake_case")]
pub enum Fact {
    /// The user's primary training goal
    PrimaryGoal {
        /// Goal identifier
        goal: FitnessGoal,
    },
    /// The user's training experience
    ExperienceLevel {
        /// Level identifier
        level: ExperienceLevel,
    },
    /// Body weight in kilograms
    BodyWeight {
        /// Weight in kg, finite and positive
        kg: f64,
    },
    /// Whether the user asked for supplement information
    WantsSupplementInfo {
        /// User's answer
        status: bool,
    },
    /// Completion marker: advice of this category was already given
    AdviceGiven {
        /// Category that fired
        category: AdviceCategory,
    },
}

impl Fact {
    /// Marker fact for a category
    #[must_use]
    pub const fn advice_given(category: AdviceCategory) -> Self {
        Self::AdviceGiven { category }
    }

    /// Whether this fact is the completion marker for `category`
    #[must_use]
    pub fn is_marker_for(&self, category: AdviceCategory) -> bool {
        matches!(self, Self::AdviceGiven { category: c } if *c == category)
    }
}

/// One line of advice, tagged with the category that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Category of the rule that emitted this line
    pub category: AdviceCategory,
    /// Rendered text
    pub text: String,
}

impl Advice {
    /// Create an advice line
    #[must_use]
    pub fn new(category: AdviceCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}
