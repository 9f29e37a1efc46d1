// ABOUTME: Integration tests for the guided dialogue state machine
// ABOUTME: Covers the full flow, re-prompts, weight parsing, cancellation, and isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_expert::dialogue::{parse_weight, CANCEL_COMMAND, START_COMMAND};
use fitness_expert::{Conversation, DialogueStep, ErrorCode, SessionRunner};
use fitness_expert_core::constants::messages::MessageCatalog;
use fitness_expert_core::{AdviceCategory, Locale};
use fitness_expert_engine::ExpertConfig;

fn conversation(locale: Locale) -> Conversation {
    Conversation::new(SessionRunner::with_config(
        ExpertConfig::default().with_locale(locale),
    ))
}

// ============================================================================
// FULL FLOW
// ============================================================================

#[test]
fn test_full_dialogue_delivers_advice() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let mut chat = conversation(Locale::Arabic);

    let greeting = chat.start();
    assert_eq!(greeting.text, catalog.goal_prompt);
    let ids: Vec<&str> = greeting.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["muscle_gain", "fat_loss", "strength_increase", "general_fitness"]
    );

    let level_prompt = chat.handle("fat_loss").unwrap();
    assert_eq!(chat.step(), DialogueStep::Level);
    assert_eq!(level_prompt.options.len(), 3);

    let weight_prompt = chat.handle("beginner").unwrap();
    assert_eq!(chat.step(), DialogueStep::Weight);
    assert_eq!(weight_prompt.text, catalog.weight_prompt);
    assert!(weight_prompt.options.is_empty());

    let supplements_prompt = chat.handle("80").unwrap();
    assert_eq!(chat.step(), DialogueStep::Supplements);
    assert_eq!(supplements_prompt.options[0].id, "yes");
    assert_eq!(supplements_prompt.options[1].id, "no");

    let result = chat.handle("yes").unwrap();
    assert_eq!(chat.step(), DialogueStep::Finished);
    assert!(chat.is_over());
    assert!(result.text.starts_with(&format!("{}\n\n", catalog.result_header)));
    assert!(result.text.contains("144"));
    assert!(result.text.contains(catalog.supplement_creatine));

    let report = result.report.unwrap();
    assert!(report.inputs.wants_supplements);
    assert_eq!(report.lines_for(AdviceCategory::Supplements).count(), 2);
}

#[test]
fn test_numbered_choices_are_accepted() {
    let mut chat = conversation(Locale::English);
    chat.start();

    chat.handle("3").unwrap();
    chat.handle("2").unwrap();
    chat.handle("100").unwrap();
    let result = chat.handle("2").unwrap();

    let report = result.report.unwrap();
    assert_eq!(report.inputs.goal.as_str(), "strength_increase");
    assert_eq!(report.inputs.level.as_str(), "intermediate");
    assert!(!report.inputs.wants_supplements);
    assert!(result.text.starts_with("📝 Your advice:\n\n"));
}

// ============================================================================
// RE-PROMPTS
// ============================================================================

#[test]
fn test_unknown_choice_reprompts_same_step() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let mut chat = conversation(Locale::Arabic);
    chat.start();

    let reply = chat.handle("bulking").unwrap();

    assert_eq!(chat.step(), DialogueStep::Goal);
    assert!(reply.text.starts_with(catalog.invalid_choice));
    assert!(reply.text.contains(catalog.goal_prompt));
    assert_eq!(reply.options.len(), 4);

    let reply = chat.handle("9").unwrap();
    assert_eq!(chat.step(), DialogueStep::Goal);
    assert!(reply.text.starts_with(catalog.invalid_choice));
}

#[test]
fn test_non_numeric_weight_reprompts() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let mut chat = conversation(Locale::Arabic);
    chat.start();
    chat.handle("muscle_gain").unwrap();
    chat.handle("advanced").unwrap();

    for bad in ["seventy", "", "-70", "0", "NaN", "inf", "1e308", "1500"] {
        let reply = chat.handle(bad).unwrap();
        assert_eq!(reply.text, catalog.invalid_weight, "input {bad:?}");
        assert_eq!(chat.step(), DialogueStep::Weight);
    }

    chat.handle("70").unwrap();
    assert_eq!(chat.step(), DialogueStep::Supplements);
}

// ============================================================================
// WEIGHT PARSING
// ============================================================================

#[test]
fn test_parse_weight_accepts_common_forms() {
    assert!((parse_weight("80").unwrap() - 80.0).abs() < f64::EPSILON);
    assert!((parse_weight(" 72.5 ").unwrap() - 72.5).abs() < f64::EPSILON);
    assert!((parse_weight("72,5").unwrap() - 72.5).abs() < f64::EPSILON);
    assert!((parse_weight("٧٥").unwrap() - 75.0).abs() < f64::EPSILON);
    assert!((parse_weight("٦٨٫٥").unwrap() - 68.5).abs() < f64::EPSILON);
    assert!((parse_weight("۹۰").unwrap() - 90.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_weight_error_codes() {
    assert_eq!(parse_weight("abc").unwrap_err().code, ErrorCode::InvalidFormat);
    assert_eq!(parse_weight("-5").unwrap_err().code, ErrorCode::ValueOutOfRange);
    assert_eq!(parse_weight("inf").unwrap_err().code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_parse_weight_rejects_implausible_values() {
    assert!((parse_weight("1000").unwrap() - 1000.0).abs() < f64::EPSILON);

    for huge in ["1000.5", "1e308", "١٠٠٠٠"] {
        let error = parse_weight(huge).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange, "input {huge:?}");
        assert_eq!(error.context.details["input"], huge);
        assert_eq!(error.context.details["max_kg"], 1000.0);
    }
}

#[test]
fn test_parse_weight_error_carries_input() {
    let error = parse_weight("heavy").unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.context.details["input"], "heavy");
}

// ============================================================================
// CANCELLATION AND RESTART
// ============================================================================

#[test]
fn test_cancel_from_any_step() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let mut chat = conversation(Locale::Arabic);
    chat.start();
    chat.handle("fat_loss").unwrap();

    let reply = chat.handle(CANCEL_COMMAND).unwrap();

    assert_eq!(reply.text, catalog.cancelled);
    assert_eq!(chat.step(), DialogueStep::Cancelled);
    assert!(chat.is_over());
}

#[test]
fn test_input_after_end_is_rejected_until_restart() {
    let mut chat = conversation(Locale::English);
    chat.start();
    chat.handle(CANCEL_COMMAND).unwrap();

    let err = chat.handle("fat_loss").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    chat.handle(START_COMMAND).unwrap();
    assert_eq!(chat.step(), DialogueStep::Goal);
    chat.handle("fat_loss").unwrap();
    assert_eq!(chat.step(), DialogueStep::Level);
}

#[test]
fn test_restart_discards_previous_answers() {
    let mut chat = conversation(Locale::English);
    chat.start();
    chat.handle("muscle_gain").unwrap();
    chat.handle("beginner").unwrap();

    chat.handle(START_COMMAND).unwrap();
    chat.handle("general_fitness").unwrap();
    chat.handle("advanced").unwrap();
    chat.handle("60").unwrap();
    let report = chat.handle("no").unwrap().report.unwrap();

    assert_eq!(report.inputs.goal.as_str(), "general_fitness");
    assert_eq!(report.inputs.level.as_str(), "advanced");
}

// ============================================================================
// ISOLATION
// ============================================================================

#[test]
fn test_interleaved_conversations_keep_their_own_answers() {
    let mut alice = conversation(Locale::English);
    let mut bob = conversation(Locale::English);
    alice.start();
    bob.start();

    alice.handle("muscle_gain").unwrap();
    bob.handle("fat_loss").unwrap();
    alice.handle("beginner").unwrap();
    bob.handle("advanced").unwrap();
    alice.handle("70").unwrap();
    bob.handle("80").unwrap();

    let alice_report = alice.handle("yes").unwrap().report.unwrap();
    let bob_report = bob.handle("no").unwrap().report.unwrap();

    assert!(alice_report.text().contains("112"));
    assert!(alice_report.text().contains("154"));
    assert_eq!(alice_report.lines_for(AdviceCategory::Supplements).count(), 2);
    assert!(bob_report.text().contains("144"));
    assert!(bob_report.text().contains("200"));
    assert_eq!(bob_report.lines_for(AdviceCategory::Supplements).count(), 0);
}
