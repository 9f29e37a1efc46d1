// ABOUTME: One-shot advise command
// ABOUTME: Validates weight at the boundary, runs a session, prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use fitness_expert::dialogue::parse_weight;
use fitness_expert::{AppResult, SessionInputs, SessionRunner};
use tracing::info;

/// Run a single session from command-line answers
pub fn run(
    runner: &SessionRunner,
    goal: &str,
    level: &str,
    weight: &str,
    supplements: bool,
    json: bool,
) -> AppResult<()> {
    let weight_kg = parse_weight(weight)?;
    let inputs = SessionInputs::from_raw(goal, level, weight_kg, supplements);

    if !inputs.goal.is_known() {
        info!(goal = %inputs.goal, "unrecognized goal, calorie advice will be omitted");
    }
    if !inputs.level.is_known() {
        info!(level = %inputs.level, "unrecognized level, generic encouragement will be used");
    }

    let report = runner.run(&inputs);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_advice(&report.text());
    }
    Ok(())
}
