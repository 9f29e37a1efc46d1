// ABOUTME: Re-exports command modules for the fitness expert CLI
// ABOUTME: Provides the one-shot advise command and the interactive chat command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod advise;
pub mod chat;
