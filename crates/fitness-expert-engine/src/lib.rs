// ABOUTME: Forward-chaining inference engine for personalized fitness advice
// ABOUTME: Fact store, rule set, fixed-point engine loop, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Expert Engine
//!
//! Derives advice from a handful of user facts by forward chaining: rules fire
//! against a session-scoped fact store until a fixed point is reached. Each
//! advice category fires at most once per session, enforced by completion
//! marker facts.

/// Engine configuration (protein factors, locale)
pub mod config;

/// Fixed-point inference loop
pub mod engine;

/// Session-scoped fact store
pub mod fact_store;

/// Advice rules and the ordered rule set
pub mod rules;

pub use config::{ConfigError, ExpertConfig, ProteinFactorsConfig, ProteinRange};
pub use engine::{EngineState, InferenceEngine, InferenceOutcome};
pub use fact_store::FactStore;
pub use rules::{Activation, Rule, RuleContext, RuleSet, RuleSetError};
