// ABOUTME: Transport-agnostic guided dialogue collecting the four session inputs
// ABOUTME: Per-conversation state machine with weight validation and cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Guided dialogue
//!
//! A [`Conversation`] walks one user through goal, level, weight and the
//! supplements question, then runs a session and returns the advice. Each
//! conversation owns its partial answers; a chat transport keeps one
//! `Conversation` per user and feeds it that user's messages.

use crate::errors::{AppError, AppResult};
use crate::session::{SessionInputs, SessionReport, SessionRunner};
use fitness_expert_core::constants::limits::MAX_BODY_WEIGHT_KG;
use fitness_expert_core::constants::messages::MessageCatalog;
use fitness_expert_core::{ExperienceLevel, FitnessGoal};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// Command that abandons the conversation from any step
pub const CANCEL_COMMAND: &str = "/cancel";
/// Command that restarts the conversation from the goal question
pub const START_COMMAND: &str = "/start";

const YES: &str = "yes";
const NO: &str = "no";

/// Where the conversation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    /// Waiting for the goal choice
    Goal,
    /// Waiting for the level choice
    Level,
    /// Waiting for typed body weight
    Weight,
    /// Waiting for the supplements yes/no
    Supplements,
    /// Advice delivered
    Finished,
    /// Abandoned via `/cancel`
    Cancelled,
}

/// A button offered with a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Callback value sent back when chosen
    pub id: String,
    /// Text shown on the button
    pub label: &'static str,
}

/// Message to send back to the user
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    /// Message text
    pub text: String,
    /// Buttons to render, empty for free-text prompts
    pub options: Vec<ChoiceOption>,
    /// Session result, present on the final reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SessionReport>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            report: None,
        }
    }

    fn with_options(text: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self {
            text: text.into(),
            options,
            report: None,
        }
    }
}

/// One user's guided dialogue
#[derive(Debug, Clone)]
pub struct Conversation {
    runner: SessionRunner,
    messages: &'static MessageCatalog,
    step: DialogueStep,
    goal: Option<FitnessGoal>,
    level: Option<ExperienceLevel>,
    weight_kg: Option<f64>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(SessionRunner::new())
    }
}

impl Conversation {
    /// Conversation whose final session runs with `runner`
    #[must_use]
    pub fn new(runner: SessionRunner) -> Self {
        let messages = MessageCatalog::for_locale(runner.config().locale);
        Self {
            runner,
            messages,
            step: DialogueStep::Goal,
            goal: None,
            level: None,
            weight_kg: None,
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> DialogueStep {
        self.step
    }

    /// Whether the conversation has ended, either way
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.step, DialogueStep::Finished | DialogueStep::Cancelled)
    }

    /// Reset all answers and ask for the goal
    pub fn start(&mut self) -> Reply {
        self.step = DialogueStep::Goal;
        self.goal = None;
        self.level = None;
        self.weight_kg = None;
        self.goal_prompt()
    }

    /// Abandon the conversation
    pub fn cancel(&mut self) -> Reply {
        debug!(step = ?self.step, "conversation cancelled");
        self.step = DialogueStep::Cancelled;
        Reply::text(self.messages.cancelled)
    }

    /// Feed one user message (typed text or a button's callback value)
    ///
    /// Unparseable answers re-prompt and keep the current step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the conversation already finished or was cancelled
    pub fn handle(&mut self, input: &str) -> AppResult<Reply> {
        let input = input.trim();
        if input == CANCEL_COMMAND {
            return Ok(self.cancel());
        }
        if input == START_COMMAND {
            return Ok(self.start());
        }

        match self.step {
            DialogueStep::Goal => Ok(self.on_goal(input)),
            DialogueStep::Level => Ok(self.on_level(input)),
            DialogueStep::Weight => Ok(self.on_weight(input)),
            DialogueStep::Supplements => Ok(self.on_supplements(input)),
            DialogueStep::Finished | DialogueStep::Cancelled => Err(AppError::invalid_input(
                format!("conversation is over ({:?}); send {START_COMMAND} to begin again", self.step),
            )),
        }
    }

    fn on_goal(&mut self, input: &str) -> Reply {
        let options = self.goal_options();
        match resolve_choice(&options, input) {
            Some(id) => {
                self.goal = Some(FitnessGoal::from_str_lossy(&id));
                self.step = DialogueStep::Level;
                self.level_prompt()
            }
            None => self.invalid_choice(self.goal_prompt()),
        }
    }

    fn on_level(&mut self, input: &str) -> Reply {
        let options = self.level_options();
        match resolve_choice(&options, input) {
            Some(id) => {
                self.level = Some(ExperienceLevel::from_str_lossy(&id));
                self.step = DialogueStep::Weight;
                Reply::text(self.messages.weight_prompt)
            }
            None => self.invalid_choice(self.level_prompt()),
        }
    }

    fn on_weight(&mut self, input: &str) -> Reply {
        match parse_weight(input) {
            Ok(kg) => {
                self.weight_kg = Some(kg);
                self.step = DialogueStep::Supplements;
                self.supplements_prompt()
            }
            Err(e) => {
                debug!(error = %e, "weight rejected");
                Reply::text(self.messages.invalid_weight)
            }
        }
    }

    fn on_supplements(&mut self, input: &str) -> Reply {
        let options = self.supplement_options();
        let Some(id) = resolve_choice(&options, input) else {
            return self.invalid_choice(self.supplements_prompt());
        };

        let (Some(goal), Some(level), Some(weight_kg)) =
            (self.goal.clone(), self.level.clone(), self.weight_kg)
        else {
            // Steps only advance after storing their answer
            return self.start();
        };

        let inputs = SessionInputs {
            goal,
            level,
            weight_kg,
            wants_supplements: id == YES,
        };
        let report = self.runner.run(&inputs);
        info!(session.id = %report.session_id, lines = report.advice.len(), "advice delivered");

        self.step = DialogueStep::Finished;
        Reply {
            text: format!("{}\n\n{}", self.messages.result_header, report.text()),
            options: Vec::new(),
            report: Some(report),
        }
    }

    fn invalid_choice(&self, prompt: Reply) -> Reply {
        Reply {
            text: format!("{}\n{}", self.messages.invalid_choice, prompt.text),
            ..prompt
        }
    }

    fn goal_prompt(&self) -> Reply {
        Reply::with_options(self.messages.goal_prompt, self.goal_options())
    }

    fn level_prompt(&self) -> Reply {
        Reply::with_options(self.messages.level_prompt, self.level_options())
    }

    fn supplements_prompt(&self) -> Reply {
        Reply::with_options(self.messages.supplements_prompt, self.supplement_options())
    }

    fn goal_options(&self) -> Vec<ChoiceOption> {
        FitnessGoal::KNOWN
            .iter()
            .zip(self.messages.goal_labels)
            .map(|(goal, label)| ChoiceOption {
                id: goal.as_str().to_owned(),
                label,
            })
            .collect()
    }

    fn level_options(&self) -> Vec<ChoiceOption> {
        ExperienceLevel::KNOWN
            .iter()
            .zip(self.messages.level_labels)
            .map(|(level, label)| ChoiceOption {
                id: level.as_str().to_owned(),
                label,
            })
            .collect()
    }

    fn supplement_options(&self) -> Vec<ChoiceOption> {
        vec![
            ChoiceOption {
                id: YES.to_owned(),
                label: self.messages.yes_label,
            },
            ChoiceOption {
                id: NO.to_owned(),
                label: self.messages.no_label,
            },
        ]
    }
}

/// Match input against option ids, or a 1-based option number
fn resolve_choice(options: &[ChoiceOption], input: &str) -> Option<String> {
    let wanted = input.to_lowercase();
    if let Some(option) = options.iter().find(|option| option.id == wanted) {
        return Some(option.id.clone());
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx))
        .map(|option| option.id.clone())
}

/// Parse typed body weight in kilograms
///
/// Accepts ASCII, Arabic-Indic and Extended Arabic-Indic digits, with `.`, `,`
/// or `٫` as the decimal separator.
///
/// # Errors
///
/// Returns `InvalidFormat` for non-numeric text and `ValueOutOfRange` for
/// values that are not finite, not positive, or above `MAX_BODY_WEIGHT_KG`
pub fn parse_weight(input: &str) -> AppResult<f64> {
    let normalized: String = input.trim().chars().map(normalize_numeric_char).collect();
    let kg: f64 = normalized.parse().map_err(|_| {
        AppError::invalid_format(format!("'{input}' is not a number"))
            .with_details(json!({ "input": input }))
    })?;

    if !kg.is_finite() || kg <= 0.0 || kg > MAX_BODY_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "body weight must be between 0 and {MAX_BODY_WEIGHT_KG} kg, got {kg}"
        ))
        .with_details(json!({ "input": input, "max_kg": MAX_BODY_WEIGHT_KG })));
    }
    Ok(kg)
}

fn normalize_numeric_char(c: char) -> char {
    match c {
        '\u{0660}'..='\u{0669}' => shift_digit(c, '\u{0660}'),
        '\u{06F0}'..='\u{06F9}' => shift_digit(c, '\u{06F0}'),
        ',' | '\u{066B}' => '.',
        other => other,
    }
}

fn shift_digit(c: char, zero: char) -> char {
    char::from_digit(u32::from(c) - u32::from(zero), 10).unwrap_or(c)
}
