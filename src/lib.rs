// ABOUTME: Main library entry point for the fitness expert advisor
// ABOUTME: Session runner, guided dialogue, errors, and logging on top of the inference engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Expert
//!
//! Collects a fitness goal, experience level, body weight and interest in
//! supplements, then derives personalized advice by forward-chaining rules.
//!
//! ## Architecture
//!
//! - **`fitness_expert_core`**: fact model and message catalog
//! - **`fitness_expert_engine`**: fact store, rules, fixed-point engine
//! - **session**: one fresh engine per call, the `run_expert` boundary
//! - **dialogue**: per-user guided conversation feeding the session runner
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_expert::run_expert;
//!
//! let advice = run_expert("fat_loss", "beginner", 80.0, false);
//! assert!(advice.contains("144"));
//! assert!(advice.contains("200"));
//! ```

/// Session runner and the `run_expert` entry point
pub mod session;

/// Transport-agnostic guided dialogue
pub mod dialogue;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

pub use dialogue::{Conversation, DialogueStep, Reply};
pub use errors::{AppError, AppResult, ErrorCode};
pub use session::{run_expert, SessionInputs, SessionReport, SessionRunner};
