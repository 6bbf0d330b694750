//! Shared test infrastructure for color-harmony integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_harmony::{Hsv, Rgb};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two RGB colors with floating-point tolerance
pub fn colors_equal(a: Rgb, b: Rgb) -> bool {
    colors_equal_epsilon(a, b, 1e-4)
}

/// Compare two RGB colors with custom epsilon
pub fn colors_equal_epsilon(a: Rgb, b: Rgb, epsilon: f32) -> bool {
    (a.r - b.r).abs() < epsilon && (a.g - b.g).abs() < epsilon && (a.b - b.b).abs() < epsilon
}

/// Shortest angular distance between two hues in degrees
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Compare two HSV colors, treating hue as periodic
pub fn hsv_equal(a: Hsv, b: Hsv) -> bool {
    hue_distance(a.h, b.h) < 1e-2 && (a.s - b.s).abs() < 1e-4 && (a.v - b.v).abs() < 1e-4
}

/// A spread of chromatic RGB triples covering every hue sector
pub fn chromatic_samples() -> Vec<Rgb> {
    let mut samples = Vec::new();
    let steps = [0.0, 0.15, 0.5, 0.85, 1.0];
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                let max = f32::max(r, f32::max(g, b));
                let min = f32::min(r, f32::min(g, b));
                if max - min > 0.01 {
                    samples.push(Rgb::new(r, g, b));
                }
            }
        }
    }
    samples
}
