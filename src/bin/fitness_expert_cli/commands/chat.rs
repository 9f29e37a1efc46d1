// ABOUTME: Interactive chat command driving a guided dialogue over stdin/stdout
// ABOUTME: One conversation per process, ends on advice delivery, /cancel, or EOF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use fitness_expert::{AppError, AppResult, Conversation, SessionRunner};
use std::io::{self, BufRead};

/// Drive one conversation from standard input
pub fn run(runner: SessionRunner) -> AppResult<()> {
    let mut conversation = Conversation::new(runner);
    display::print_reply(&conversation.start());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| AppError::internal("failed to read stdin").with_source(e))?;
        let reply = conversation.handle(&line)?;
        display::print_reply(&reply);
        if conversation.is_over() {
            break;
        }
    }
    Ok(())
}
