//! # Servings Module
//!
//! Serving-size adjustment for a single recipe: the base serving count, an
//! optional target chosen by the user, and the resulting scale factor applied
//! to every ingredient line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text_processing::scale_ingredient;

/// Serving-size state for one recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servings {
    /// Servings the recipe was written for
    pub base: u32,
    /// Servings the user wants, if adjusted
    pub target: Option<u32>,
}

impl Servings {
    pub fn new(base: u32) -> Self {
        Self { base, target: None }
    }

    /// Servings currently shown: the target if set, otherwise the base
    pub fn current(&self) -> u32 {
        self.target.unwrap_or(self.base)
    }

    /// Multiplier from base to target; 1 when either is unset or zero
    pub fn factor(&self) -> f64 {
        match self.target {
            Some(target) if target > 0 && self.base > 0 => target as f64 / self.base as f64,
            _ => 1.0,
        }
    }

    /// Whether a non-identity scale is in effect
    pub fn is_scaled(&self) -> bool {
        self.factor() != 1.0
    }

    /// Move the target by `delta`, never below one serving
    pub fn adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.current())
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX)) as u32;
        debug!(base = self.base, from = self.current(), to = next, "Adjusted servings");
        self.target = Some(next);
        next
    }

    pub fn increase(&mut self) -> u32 {
        self.adjust(1)
    }

    pub fn decrease(&mut self) -> u32 {
        self.adjust(-1)
    }

    /// Drop the target and return to the recipe's own serving count
    pub fn reset(&mut self) {
        self.target = None;
    }

    /// Scale every ingredient line by the current factor.
    ///
    /// Lines are returned untouched when no scaling is in effect.
    pub fn scale_lines(&self, lines: &[String]) -> Vec<String> {
        let factor = self.factor();
        if factor == 1.0 {
            return lines.to_vec();
        }
        lines
            .iter()
            .map(|line| scale_ingredient(line, factor))
            .collect()
    }
}
