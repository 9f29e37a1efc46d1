// ABOUTME: Output formatting helpers for the fitness expert CLI
// ABOUTME: Renders dialogue replies with numbered options and plain advice blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_expert::Reply;

/// Print a dialogue reply, numbering its options
pub fn print_reply(reply: &Reply) {
    println!("{}", reply.text);
    for (idx, option) in reply.options.iter().enumerate() {
        println!("  [{}] {} ({})", idx + 1, option.label, option.id);
    }
}

/// Print an advice block
pub fn print_advice(text: &str) {
    println!("{text}");
}
