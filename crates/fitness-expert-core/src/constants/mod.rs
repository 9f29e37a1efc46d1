// ABOUTME: Constants for the fitness expert system organized by domain
// ABOUTME: Protein factor defaults, input limits, and the localized message catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Localized advice, prompt, and button text
pub mod messages;

/// Daily protein factors in grams per kilogram of body weight
///
/// Each pair is `(low, high)`; the advised range is `kg * low` to `kg * high`,
/// truncated toward zero.
pub mod protein {
    /// Fat loss preserves lean mass with a higher intake
    pub const FAT_LOSS: (f64, f64) = (1.8, 2.5);
    /// Muscle gain
    pub const MUSCLE_GAIN: (f64, f64) = (1.6, 2.2);
    /// Strength increase
    pub const STRENGTH_INCREASE: (f64, f64) = (1.6, 2.2);
    /// General fitness and any unrecognized goal
    pub const DEFAULT: (f64, f64) = (1.2, 1.8);
}

/// Bounds for user-supplied measurements
pub mod limits {
    /// Largest body weight accepted from user input, in kilograms
    pub const MAX_BODY_WEIGHT_KG: f64 = 1000.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI and library logs
    pub const FITNESS_EXPERT: &str = "fitness-expert";
}
