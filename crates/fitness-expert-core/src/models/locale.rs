// ABOUTME: Output language for advice and dialogue text
// ABOUTME: Arabic reproduces the original bot wording, English is a translation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Language used when rendering advice and prompts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Arabic (original wording)
    #[default]
    Arabic,
    /// English
    English,
}

impl Locale {
    /// Parse a locale tag (`ar`, `en`, or the full names)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Some(Self::Arabic),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    /// Short language tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }
}
