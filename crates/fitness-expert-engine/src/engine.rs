// ABOUTME: Fixed-point forward-chaining inference engine
// ABOUTME: Scans the rule set against the fact store until no rule can fire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forward-chaining inference engine
//!
//! Each pass walks the rule set in order. A rule whose completion marker is
//! already in the store is skipped; otherwise its condition is evaluated and,
//! on a match, its advice is appended and its marker asserted. Passes repeat
//! until one fires nothing. Every firing adds a marker for a category no other
//! rule shares, so the number of firing passes is bounded by the number of
//! rules. The confirming pass that fires nothing is not counted.

use crate::config::ExpertConfig;
use crate::fact_store::FactStore;
use crate::rules::{RuleContext, RuleSet};
use fitness_expert_core::constants::messages::MessageCatalog;
use fitness_expert_core::{Advice, AdviceCategory, Fact};
use serde::Serialize;
use tracing::debug;

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Created, facts may be seeded
    Idle,
    /// Evaluating rules
    Scanning,
    /// Last pass fired nothing
    Quiescent,
}

/// Result of running the engine to quiescence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InferenceOutcome {
    /// Advice lines in firing order
    pub advice: Vec<Advice>,
    /// Categories whose rules fired, in firing order
    pub fired: Vec<AdviceCategory>,
    /// Passes that fired at least one rule
    pub passes: usize,
}

impl InferenceOutcome {
    /// Advice joined with newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.advice
            .iter()
            .map(|advice| advice.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Session-scoped inference engine owning its fact store
#[derive(Debug)]
pub struct InferenceEngine {
    rules: RuleSet,
    config: ExpertConfig,
    facts: FactStore,
    state: EngineState,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceEngine {
    /// Engine with the standard rules and the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuleSet::standard(), ExpertConfig::global().clone())
    }

    /// Engine with custom rules and configuration
    #[must_use]
    pub fn with_config(rules: RuleSet, config: ExpertConfig) -> Self {
        Self {
            rules,
            config,
            facts: FactStore::new(),
            state: EngineState::Idle,
        }
    }

    /// Assert a fact into this engine's store
    pub fn assert(&mut self, fact: Fact) {
        self.facts.assert(fact);
    }

    /// Current facts
    #[must_use]
    pub const fn facts(&self) -> &FactStore {
        &self.facts
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Fire eligible rules pass after pass until none fires
    pub fn run(&mut self) -> InferenceOutcome {
        let ctx = RuleContext {
            messages: MessageCatalog::for_locale(self.config.locale),
            protein: &self.config.protein,
        };
        let mut outcome = InferenceOutcome::default();

        loop {
            self.state = EngineState::Scanning;
            let pass = outcome.passes + 1;
            let mut fired_this_pass = 0_usize;

            for rule in self.rules.rules() {
                let category = rule.category();
                if self.facts.advice_given(category) {
                    continue;
                }
                let Some(activation) = rule.activate(&self.facts, &ctx) else {
                    continue;
                };

                debug!(
                    rule = rule.name(),
                    category = %category,
                    pass,
                    lines = activation.advice.len(),
                    "rule fired"
                );

                outcome.advice.extend(
                    activation
                        .advice
                        .into_iter()
                        .filter(|line| !line.is_empty())
                        .map(|line| Advice::new(category, line)),
                );
                for fact in activation.facts {
                    self.facts.assert(fact);
                }
                self.facts.assert(Fact::advice_given(category));
                outcome.fired.push(category);
                fired_this_pass += 1;
            }

            if fired_this_pass == 0 {
                break;
            }
            outcome.passes = pass;
        }

        self.state = EngineState::Quiescent;
        debug!(
            passes = outcome.passes,
            fired = outcome.fired.len(),
            lines = outcome.advice.len(),
            "inference reached fixed point"
        );
        outcome
    }
}
