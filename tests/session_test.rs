// ABOUTME: Integration tests for the session runner and run_expert boundary
// ABOUTME: Covers exactly-once firing, ordering, protein math, fallbacks, and isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_expert::{run_expert, SessionInputs, SessionReport, SessionRunner};
use fitness_expert_core::constants::messages::MessageCatalog;
use fitness_expert_core::{AdviceCategory, ExperienceLevel, FitnessGoal, Locale};
use fitness_expert_engine::ExpertConfig;

fn arabic_runner() -> SessionRunner {
    SessionRunner::with_config(ExpertConfig::default())
}

fn english_runner() -> SessionRunner {
    SessionRunner::with_config(ExpertConfig::default().with_locale(Locale::English))
}

fn run(goal: &str, level: &str, weight: f64, supplements: bool) -> SessionReport {
    arabic_runner().run(&SessionInputs::from_raw(goal, level, weight, supplements))
}

const GOALS: [&str; 5] = [
    "muscle_gain",
    "fat_loss",
    "strength_increase",
    "general_fitness",
    "unknown_value",
];
const LEVELS: [&str; 4] = ["beginner", "intermediate", "advanced", "expert"];

// ============================================================================
// EXACTLY-ONCE AND UNIVERSALITY
// ============================================================================

#[test]
fn test_each_category_fires_at_most_once() {
    for goal in GOALS {
        for level in LEVELS {
            for supplements in [true, false] {
                let report = run(goal, level, 72.5, supplements);
                for category in AdviceCategory::ALL {
                    let max_lines = if category == AdviceCategory::Supplements {
                        2
                    } else {
                        1
                    };
                    let count = report.lines_for(category).count();
                    assert!(
                        count <= max_lines,
                        "{category} emitted {count} lines for {goal}/{level}/{supplements}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_hydration_present_for_every_input() {
    let hydration = MessageCatalog::for_locale(Locale::Arabic).hydration;
    for goal in GOALS {
        for level in LEVELS {
            for supplements in [true, false] {
                let report = run(goal, level, 90.0, supplements);
                assert_eq!(report.lines_for(AdviceCategory::Hydration).count(), 1);
                assert!(report.text().contains(hydration));
            }
        }
    }
}

#[test]
fn test_supplement_lines_only_when_requested() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);

    let with = run("muscle_gain", "beginner", 70.0, true);
    let without = run("muscle_gain", "beginner", 70.0, false);

    assert!(with.text().contains(catalog.supplement_creatine));
    assert!(with.text().contains(catalog.supplement_whey));
    assert!(!without.text().contains(catalog.supplement_creatine));
    assert!(!without.text().contains(catalog.supplement_whey));

    let with_lines = with.text().lines().count();
    let without_lines = without.text().lines().count();
    assert_eq!(with_lines, 6);
    assert_eq!(with_lines - without_lines, 2);
}

// ============================================================================
// PROTEIN NUMERIC CONTRACT
// ============================================================================

#[test]
fn test_protein_range_fat_loss_80kg() {
    let report = run("fat_loss", "beginner", 80.0, false);
    let protein: Vec<&str> = report.lines_for(AdviceCategory::Protein).collect();

    assert_eq!(protein.len(), 1);
    assert!(protein[0].contains("144"));
    assert!(protein[0].contains("200"));
}

#[test]
fn test_protein_range_muscle_gain_70kg() {
    let report = english_runner().run(&SessionInputs::from_raw("muscle_gain", "advanced", 70.0, false));
    let protein: Vec<&str> = report.lines_for(AdviceCategory::Protein).collect();

    assert_eq!(
        protein,
        vec!["🍗 Eat between 112 and 154 grams of protein daily."]
    );
}

#[test]
fn test_protein_range_truncates_toward_zero() {
    // 80.9 * 1.8 = 145.62 and 80.9 * 2.5 = 202.25
    let report = english_runner().run(&SessionInputs::from_raw("fat_loss", "beginner", 80.9, false));
    let protein: Vec<&str> = report.lines_for(AdviceCategory::Protein).collect();

    assert_eq!(
        protein,
        vec!["🍗 Eat between 145 and 202 grams of protein daily."]
    );
}

#[test]
fn test_protein_range_strength_and_default_factors() {
    let strength = run("strength_increase", "advanced", 100.0, false);
    let line = strength.lines_for(AdviceCategory::Protein).next().unwrap();
    assert!(line.contains("160") && line.contains("220"));

    let general = run("general_fitness", "beginner", 60.0, false);
    let line = general.lines_for(AdviceCategory::Protein).next().unwrap();
    assert!(line.contains("72") && line.contains("108"));
}

#[test]
fn test_arabic_protein_line_matches_original_wording() {
    let report = run("fat_loss", "beginner", 80.0, false);
    let line = report.lines_for(AdviceCategory::Protein).next().unwrap();

    assert_eq!(line, "🍗 تناول بين 144 و 200 جرام بروتين يومياً.");
}

// ============================================================================
// ORDERING AND DETERMINISM
// ============================================================================

#[test]
fn test_advice_follows_rule_order() {
    let report = run("strength_increase", "intermediate", 85.0, true);
    let categories: Vec<AdviceCategory> = report.advice.iter().map(|a| a.category).collect();

    assert_eq!(
        categories,
        vec![
            AdviceCategory::Calories,
            AdviceCategory::Protein,
            AdviceCategory::Supplements,
            AdviceCategory::Supplements,
            AdviceCategory::Hydration,
            AdviceCategory::Consistency,
        ]
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = run("general_fitness", "advanced", 64.3, true).text();
    for _ in 0..10 {
        assert_eq!(run("general_fitness", "advanced", 64.3, true).text(), first);
    }
}

#[test]
fn test_standard_session_fires_everything_in_one_pass() {
    let report = run("muscle_gain", "beginner", 70.0, true);
    assert_eq!(report.passes, 1);
}

// ============================================================================
// FALLBACK TOLERANCE
// ============================================================================

#[test]
fn test_unknown_goal_omits_calorie_line_but_completes() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let report = run("unknown_value", "beginner", 75.0, false);

    assert_eq!(report.inputs.goal, FitnessGoal::Other("unknown_value".into()));
    assert_eq!(report.lines_for(AdviceCategory::Calories).count(), 0);
    assert!(report.text().contains(catalog.hydration));
    assert!(report.text().contains(catalog.consistency_beginner));
    assert!(!report.text().starts_with('\n'));
    assert_eq!(report.text().lines().count(), 3);

    let protein = report.lines_for(AdviceCategory::Protein).next().unwrap();
    assert!(protein.contains("90") && protein.contains("135"));
}

#[test]
fn test_unknown_level_uses_generic_encouragement() {
    let report = run("fat_loss", "olympian", 75.0, false);
    let consistency: Vec<&str> = report.lines_for(AdviceCategory::Consistency).collect();

    assert_eq!(consistency, vec!["استمر في التقدم!"]);
}

#[test]
fn test_goal_and_level_keys_must_match_exactly() {
    let report = run("Fat_Loss", "BEGINNER", 80.0, false);

    assert_eq!(report.inputs.goal, FitnessGoal::Other("Fat_Loss".into()));
    assert_eq!(
        report.inputs.level,
        ExperienceLevel::Other("BEGINNER".into())
    );
    assert_eq!(report.lines_for(AdviceCategory::Calories).count(), 0);
    assert_eq!(
        report.lines_for(AdviceCategory::Protein).collect::<Vec<_>>(),
        vec!["🍗 تناول بين 96 و 144 جرام بروتين يومياً."]
    );
    assert_eq!(
        report.lines_for(AdviceCategory::Consistency).collect::<Vec<_>>(),
        vec!["استمر في التقدم!"]
    );
}

#[test]
fn test_padded_keys_are_not_trimmed() {
    let report = run(" fat_loss", "beginner ", 80.0, false);

    assert!(!report.inputs.goal.is_known());
    assert!(!report.inputs.level.is_known());
    assert_eq!(report.text().lines().count(), 3);
}

// ============================================================================
// SESSION ISOLATION
// ============================================================================

#[test]
fn test_sequential_sessions_do_not_leak() {
    let catalog = MessageCatalog::for_locale(Locale::Arabic);
    let runner = arabic_runner();

    let first = runner.run(&SessionInputs::from_raw("muscle_gain", "beginner", 70.0, true));
    let second = runner.run(&SessionInputs::from_raw("fat_loss", "advanced", 80.0, false));

    assert!(first.text().contains(catalog.calories_muscle_gain));
    assert!(second.text().contains(catalog.calories_fat_loss));
    assert!(!second.text().contains(catalog.calories_muscle_gain));
    assert!(!second.text().contains(catalog.supplement_creatine));
    assert!(!second.text().contains(catalog.consistency_beginner));
    assert_eq!(second.lines_for(AdviceCategory::Calories).count(), 1);
    assert_ne!(first.session_id, second.session_id);
}

#[test]
fn test_default_runner_borrows_global_config() {
    let runner = SessionRunner::new();
    let explicit = arabic_runner();

    assert!(std::ptr::eq(runner.config(), ExpertConfig::global()));
    assert_eq!(explicit.config(), &ExpertConfig::default());
}

#[test]
fn test_run_expert_joins_lines_with_newlines() {
    let text = run_expert("fat_loss", "beginner", 80.0, false);

    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("144"));
    assert!(text.contains("200"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run("muscle_gain", "beginner", 70.0, false);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["inputs"]["goal"], "muscle_gain");
    assert_eq!(json["advice"][0]["category"], "calories");
    assert_eq!(json["passes"], 1);
}
