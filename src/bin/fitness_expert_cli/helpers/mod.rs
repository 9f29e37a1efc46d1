// ABOUTME: Helper modules for the fitness expert CLI
// ABOUTME: Terminal rendering of replies and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
