//! Directional Adjustment Configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::pitch::PitchType;
use crate::scoring::directional::{default_rules, DirectionalRule};

/// Bonus sizes and the per-pitch rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalConfig {
    /// Miss satisfies every target direction of its rule (default: 0.5)
    pub full_bonus: f64,
    /// Two-direction rule with exactly one direction satisfied (default: 0.25)
    pub half_bonus: f64,
    /// Subtracted for upper-half misses on penalized pitches (default: 1.0)
    pub upper_half_penalty: f64,
    /// Pitch types without an entry get no adjustment
    pub rules: BTreeMap<PitchType, DirectionalRule>,
}

impl Default for DirectionalConfig {
    fn default() -> Self {
        Self {
            full_bonus: 0.5,
            half_bonus: 0.25,
            upper_half_penalty: 1.0,
            rules: default_rules(),
        }
    }
}

impl DirectionalConfig {
    pub fn rule_for(&self, pitch_type: PitchType) -> Option<&DirectionalRule> {
        self.rules.get(&pitch_type)
    }
}
