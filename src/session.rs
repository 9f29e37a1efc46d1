// ABOUTME: Session runner, the single entry point into the inference engine
// ABOUTME: Seeds a fresh fact store per call, runs to fixed point, returns advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session Runner
//!
//! Every call builds its own [`InferenceEngine`] (fact store, rule set, advice
//! list). Nothing session-scoped outlives the call, so concurrent callers can
//! never observe each other's facts.

use chrono::{DateTime, Utc};
use fitness_expert_core::{Advice, AdviceCategory, ExperienceLevel, Fact, FitnessGoal};
use fitness_expert_engine::{ExpertConfig, InferenceEngine, RuleSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};
use uuid::Uuid;

/// The four facts collected from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInputs {
    /// Primary goal; unrecognized values are tolerated
    pub goal: FitnessGoal,
    /// Experience level; unrecognized values are tolerated
    pub level: ExperienceLevel,
    /// Body weight in kilograms, validated by the caller
    pub weight_kg: f64,
    /// Whether supplement advice was requested
    pub wants_supplements: bool,
}

impl SessionInputs {
    /// Build inputs from raw identifiers
    #[must_use]
    pub fn from_raw(goal: &str, level: &str, weight_kg: f64, wants_supplements: bool) -> Self {
        Self {
            goal: FitnessGoal::from_str_lossy(goal),
            level: ExperienceLevel::from_str_lossy(level),
            weight_kg,
            wants_supplements,
        }
    }

    fn seed_facts(&self) -> [Fact; 4] {
        [
            Fact::PrimaryGoal {
                goal: self.goal.clone(),
            },
            Fact::ExperienceLevel {
                level: self.level.clone(),
            },
            Fact::BodyWeight { kg: self.weight_kg },
            Fact::WantsSupplementInfo {
                status: self.wants_supplements,
            },
        ]
    }
}

/// Outcome of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Per-session identifier for log correlation
    pub session_id: Uuid,
    /// When the session ran
    pub created_at: DateTime<Utc>,
    /// Inputs the session was seeded with
    pub inputs: SessionInputs,
    /// Advice in firing order
    pub advice: Vec<Advice>,
    /// Engine passes that fired at least one rule
    pub passes: usize,
}

impl SessionReport {
    /// Advice joined with newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.advice
            .iter()
            .map(|advice| advice.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Advice lines emitted for one category
    pub fn lines_for(&self, category: AdviceCategory) -> impl Iterator<Item = &str> {
        self.advice
            .iter()
            .filter(move |advice| advice.category == category)
            .map(|advice| advice.text.as_str())
    }
}

/// Builds and drives one inference engine per session
#[derive(Debug, Clone, Default)]
pub struct SessionRunner {
    config: Option<ExpertConfig>,
}

impl SessionRunner {
    /// Runner using the global configuration
    #[must_use]
    pub const fn new() -> Self {
        Self { config: None }
    }

    /// Runner using an explicit configuration
    #[must_use]
    pub const fn with_config(config: ExpertConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Configuration sessions run with
    #[must_use]
    pub fn config(&self) -> &ExpertConfig {
        if let Some(config) = &self.config {
            return config;
        }
        ExpertConfig::global()
    }

    /// Seed a fresh engine, run it to fixed point, and collect the advice
    #[must_use]
    pub fn run(&self, inputs: &SessionInputs) -> SessionReport {
        let session_id = Uuid::new_v4();
        let span = info_span!(
            "advice_session",
            session.id = %session_id,
            goal = %inputs.goal,
            level = %inputs.level,
        );
        let _guard = span.enter();

        let mut engine = InferenceEngine::with_config(RuleSet::standard(), self.config().clone());
        for fact in inputs.seed_facts() {
            engine.assert(fact);
        }
        let outcome = engine.run();

        debug!(
            passes = outcome.passes,
            lines = outcome.advice.len(),
            facts = engine.facts().len(),
            "session complete"
        );

        SessionReport {
            session_id,
            created_at: Utc::now(),
            inputs: inputs.clone(),
            advice: outcome.advice,
            passes: outcome.passes,
        }
    }
}

/// Run one advice session and return the advice text, one line per message
///
/// Unrecognized `goal` or `level` values fall back to default text; `weight`
/// must already be a finite number.
#[must_use]
pub fn run_expert(goal: &str, level: &str, weight: f64, wants_supplements: bool) -> String {
    SessionRunner::new()
        .run(&SessionInputs::from_raw(goal, level, weight, wants_supplements))
        .text()
}
