// ABOUTME: Core types and constants for the fitness expert system
// ABOUTME: Foundation crate with the fact model, advice categories, and message catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Expert Core
//!
//! Foundation crate providing the shared domain types for the fitness expert
//! system. The inference engine and the dialogue shell both build on it.
//!
//! ## Modules
//!
//! - **models**: Facts, goals, experience levels and advice categories
//! - **constants**: Localized message catalog and default protein factors

/// Domain models (`Fact`, `FitnessGoal`, `ExperienceLevel`, `AdviceCategory`)
pub mod models;

/// Message catalog and numeric defaults organized by domain
pub mod constants;

pub use models::{Advice, AdviceCategory, ExperienceLevel, Fact, FitnessGoal, Locale};
