// ABOUTME: Declarative advice rules and the ordered rule set evaluated by the engine
// ABOUTME: Calorie, protein, supplement, hydration, and consistency rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advice rules
//!
//! A rule pairs a condition over the fact store with an action. Conditions
//! bind values through typed queries (`FactStore::primary_goal` and friends)
//! and the action is the returned [`Activation`]. The negated completion
//! marker condition is shared by every rule, so the engine checks it before
//! calling [`Rule::activate`].

use crate::config::ProteinFactorsConfig;
use crate::fact_store::FactStore;
use fitness_expert_core::constants::messages::MessageCatalog;
use fitness_expert_core::{AdviceCategory, Fact};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Read-only inputs available to rule actions
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Message catalog for the session's locale
    pub messages: &'static MessageCatalog,
    /// Protein factors per goal
    pub protein: &'a ProteinFactorsConfig,
}

/// Effect of a rule firing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activation {
    /// Advice lines in emission order; empty lines are dropped by the engine
    pub advice: Vec<String>,
    /// Facts to assert besides the rule's completion marker
    pub facts: Vec<Fact>,
}

impl Activation {
    /// Activation emitting the given lines and nothing else
    #[must_use]
    pub fn advise<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            advice: lines.into_iter().map(Into::into).collect(),
            facts: Vec::new(),
        }
    }

    /// Add a fact to assert alongside the completion marker
    #[must_use]
    pub fn with_fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }
}

/// A condition/action pair producing one category of advice
pub trait Rule: Send + Sync {
    /// Stable rule name used in logs
    fn name(&self) -> &'static str;

    /// Category whose completion marker this rule asserts
    fn category(&self) -> AdviceCategory;

    /// Evaluate the positive conditions and, when they match, return the action
    fn activate(&self, facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation>;
}

/// Calorie direction keyed by goal
#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieAdvice;

impl Rule for CalorieAdvice {
    fn name(&self) -> &'static str {
        "calorie-advice"
    }

    fn category(&self) -> AdviceCategory {
        AdviceCategory::Calories
    }

    fn activate(&self, facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation> {
        let goal = facts.primary_goal()?;
        Some(Activation::advise([ctx.messages.calories(goal)]))
    }
}

/// Daily protein range from goal and body weight
#[derive(Debug, Clone, Copy, Default)]
pub struct ProteinAdvice;

impl Rule for ProteinAdvice {
    fn name(&self) -> &'static str {
        "protein-advice"
    }

    fn category(&self) -> AdviceCategory {
        AdviceCategory::Protein
    }

    fn activate(&self, facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation> {
        let goal = facts.primary_goal()?;
        let kg = facts.body_weight_kg()?;
        let (low, high) = ctx.protein.for_goal(goal).grams_for(kg);
        Some(Activation::advise([ctx.messages.protein(low, high)]))
    }
}

/// Creatine and whey notes, only when the user asked for them
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplementAdvice;

impl Rule for SupplementAdvice {
    fn name(&self) -> &'static str {
        "supplement-advice"
    }

    fn category(&self) -> AdviceCategory {
        AdviceCategory::Supplements
    }

    fn activate(&self, facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation> {
        facts.wants_supplement_info().then(|| {
            Activation::advise([
                ctx.messages.supplement_creatine,
                ctx.messages.supplement_whey,
            ])
        })
    }
}

/// Unconditional hydration reminder
#[derive(Debug, Clone, Copy, Default)]
pub struct HydrationAdvice;

impl Rule for HydrationAdvice {
    fn name(&self) -> &'static str {
        "hydration-advice"
    }

    fn category(&self) -> AdviceCategory {
        AdviceCategory::Hydration
    }

    fn activate(&self, _facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation> {
        Some(Activation::advise([ctx.messages.hydration]))
    }
}

/// Habit guidance keyed by experience level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyAdvice;

impl Rule for ConsistencyAdvice {
    fn name(&self) -> &'static str {
        "consistency-advice"
    }

    fn category(&self) -> AdviceCategory {
        AdviceCategory::Consistency
    }

    fn activate(&self, facts: &FactStore, ctx: &RuleContext<'_>) -> Option<Activation> {
        let level = facts.experience_level()?;
        Some(Activation::advise([ctx.messages.consistency(level)]))
    }
}

/// Rule set construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    /// Two rules would share one completion marker
    #[error("rules '{first}' and '{second}' both produce {category} advice")]
    DuplicateCategory {
        /// Category produced twice
        category: AdviceCategory,
        /// Earlier rule
        first: &'static str,
        /// Later rule
        second: &'static str,
    },
}

/// Fixed, ordered collection of rules; order determines advice order
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Build a rule set, rejecting rules that share a category
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError::DuplicateCategory` if two rules produce the same category
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Result<Self, RuleSetError> {
        let mut seen: HashSet<AdviceCategory> = HashSet::new();
        for (idx, rule) in rules.iter().enumerate() {
            if !seen.insert(rule.category()) {
                let first = rules[..idx]
                    .iter()
                    .find(|earlier| earlier.category() == rule.category())
                    .map_or("unknown", |earlier| earlier.name());
                return Err(RuleSetError::DuplicateCategory {
                    category: rule.category(),
                    first,
                    second: rule.name(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// The five advice rules in standard order
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Box::new(CalorieAdvice),
                Box::new(ProteinAdvice),
                Box::new(SupplementAdvice),
                Box::new(HydrationAdvice),
                Box::new(ConsistencyAdvice),
            ],
        }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}
