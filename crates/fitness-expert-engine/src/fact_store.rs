// ABOUTME: Append-only fact store owned by a single inference session
// ABOUTME: Assertion plus predicate and typed queries used by rule conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_expert_core::{AdviceCategory, ExperienceLevel, Fact, FitnessGoal};

/// Ordered, growing collection of facts for one session
///
/// Facts are never retracted or mutated. The store does not deduplicate;
/// rules guard themselves through completion markers.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { facts: Vec::new() }
    }

    /// Append a fact
    pub fn assert(&mut self, fact: Fact) {
        tracing::trace!(?fact, "fact asserted");
        self.facts.push(fact);
    }

    /// All facts satisfying `predicate`, in assertion order
    #[must_use]
    pub fn query<P>(&self, predicate: P) -> impl Iterator<Item = &Fact>
    where
        P: Fn(&Fact) -> bool,
    {
        self.facts.iter().filter(move |fact| predicate(fact))
    }

    /// Whether any fact satisfies `predicate`
    #[must_use]
    pub fn has<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Fact) -> bool,
    {
        self.facts.iter().any(predicate)
    }

    /// Whether the completion marker for `category` exists
    #[must_use]
    pub fn advice_given(&self, category: AdviceCategory) -> bool {
        self.has(|fact| fact.is_marker_for(category))
    }

    /// Bound goal value of the first `PrimaryGoal` fact
    #[must_use]
    pub fn primary_goal(&self) -> Option<&FitnessGoal> {
        self.facts.iter().find_map(|fact| match fact {
            Fact::PrimaryGoal { goal } => Some(goal),
            _ => None,
        })
    }

    /// Bound level value of the first `ExperienceLevel` fact
    #[must_use]
    pub fn experience_level(&self) -> Option<&ExperienceLevel> {
        self.facts.iter().find_map(|fact| match fact {
            Fact::ExperienceLevel { level } => Some(level),
            _ => None,
        })
    }

    /// Bound weight of the first `BodyWeight` fact
    #[must_use]
    pub fn body_weight_kg(&self) -> Option<f64> {
        self.facts.iter().find_map(|fact| match fact {
            Fact::BodyWeight { kg } => Some(*kg),
            _ => None,
        })
    }

    /// Whether a `WantsSupplementInfo{status=true}` fact exists
    #[must_use]
    pub fn wants_supplement_info(&self) -> bool {
        self.has(|fact| matches!(fact, Fact::WantsSupplementInfo { status: true }))
    }

    /// Number of asserted facts
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether no fact has been asserted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
