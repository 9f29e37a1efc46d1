// ABOUTME: Domain models for the fitness expert system
// ABOUTME: Re-exports the fact model, user profile enums, and locale selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Facts asserted into a session and the advice they produce
pub mod fact;

/// Fitness goal and experience level parsed from user choices
pub mod profile;

/// Output language selection
pub mod locale;

pub use fact::{Advice, AdviceCategory, Fact};
pub use locale::Locale;
pub use profile::{ExperienceLevel, FitnessGoal};
