//! # Command Scoring Configuration
//!
//! Every tuning constant of the engine lives here: grid geometry, the
//! distance tier table, the zone-5 penalty, grade boundaries and the
//! directional rule table.
//!
//! Scores are never cached, so swapping the config re-grades the whole
//! session history on the next summary.
//!
//! ```rust
//! use pitch_core::config::CommandConfig;
//!
//! let standard = CommandConfig::standard();
//! let plain = CommandConfig::distance_only();
//! assert!(standard.validate().is_ok());
//! assert!(plain.directional.rules.is_empty());
//! ```

mod directional_config;
mod geometry_config;
mod scoring_config;

pub use directional_config::DirectionalConfig;
pub use geometry_config::GeometryConfig;
pub use scoring_config::{DistanceTier, GradeThresholds, ScoringConfig};

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};
use crate::scoring::{MAX_SCORE, MIN_SCORE};

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommandConfig {
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub directional: DirectionalConfig,
}

impl CommandConfig {
    /// Standard charting rules (default)
    pub fn standard() -> Self {
        Self::default()
    }

    /// Pure distance grading: no directional table, no zone-5 penalty
    pub fn distance_only() -> Self {
        let mut cfg = Self::default();
        cfg.directional.rules.clear();
        cfg.scoring.zone5_penalty = 0.0;
        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: CommandConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs that would break the score invariants
    pub fn validate(&self) -> Result<()> {
        let geo = &self.geometry;
        if !(geo.cell_size > 0.0) || !(geo.units_per_inch > 0.0) {
            return Err(CommandError::InvalidConfig(
                "cell_size and units_per_inch must be positive".to_string(),
            ));
        }
        if !(geo.cell_gap >= 0.0)
            || !(geo.surface_padding >= 0.0)
            || !(geo.perfect_strike_radius >= 0.0)
        {
            return Err(CommandError::InvalidConfig(
                "cell_gap, surface_padding and perfect_strike_radius must not be negative"
                    .to_string(),
            ));
        }

        let scoring = &self.scoring;
        let score_range = MIN_SCORE..=MAX_SCORE;
        if !score_range.contains(&scoring.floor_score) {
            return Err(CommandError::InvalidConfig(format!(
                "floor_score {} outside {}-{}",
                scoring.floor_score, MIN_SCORE, MAX_SCORE
            )));
        }
        for pair in scoring.distance_tiers.windows(2) {
            if !(pair[1].max_inches > pair[0].max_inches) || pair[1].score > pair[0].score {
                return Err(CommandError::InvalidConfig(format!(
                    "distance tiers must ascend in distance and not rise in score ({:?} -> {:?})",
                    pair[0], pair[1]
                )));
            }
        }
        if let Some(tier) = scoring
            .distance_tiers
            .iter()
            .find(|t| !score_range.contains(&t.score) || t.score < scoring.floor_score)
        {
            return Err(CommandError::InvalidConfig(format!(
                "tier score {} outside {}-{}",
                tier.score, scoring.floor_score, MAX_SCORE
            )));
        }
        if !(scoring.zone5_penalty >= 0.0) {
            return Err(CommandError::InvalidConfig(
                "zone5_penalty must not be negative".to_string(),
            ));
        }

        let g = &scoring.grades;
        if !(g.excellent >= g.very_good && g.very_good >= g.average && g.average >= g.fair) {
            return Err(CommandError::InvalidConfig(
                "grade thresholds must descend from excellent to fair".to_string(),
            ));
        }

        let dir = &self.directional;
        if !(dir.full_bonus >= 0.0)
            || !(dir.half_bonus >= 0.0)
            || !(dir.upper_half_penalty >= 0.0)
        {
            return Err(CommandError::InvalidConfig(
                "directional bonuses and penalties are magnitudes and must not be negative"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchType;

    #[test]
    fn test_default_config() {
        let cfg = CommandConfig::default();
        assert!((cfg.geometry.cell_pitch() - 102.0).abs() < 1e-9);
        assert!((cfg.geometry.units_per_inch - 18.0).abs() < 1e-9);
        assert_eq!(cfg.scoring.distance_tiers.len(), 9);
        assert_eq!(cfg.scoring.floor_score, 1);
        assert!((cfg.scoring.zone5_penalty - 2.0).abs() < 1e-9);
        assert_eq!(cfg.directional.rules.len(), 8);
        assert!(cfg.directional.rule_for(PitchType::Knuckleball).is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_distance_only_preset() {
        let cfg = CommandConfig::distance_only();
        assert!(cfg.directional.rules.is_empty());
        assert_eq!(cfg.scoring.zone5_penalty, 0.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tiers() {
        let mut cfg = CommandConfig::default();
        cfg.scoring.distance_tiers.swap(0, 1);
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.scoring.distance_tiers[0].score = 11;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.scoring.floor_score = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let mut cfg = CommandConfig::default();
        cfg.geometry.units_per_inch = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.geometry.cell_size = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.directional.half_bonus = -0.25;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_magnitudes() {
        let mut cfg = CommandConfig::default();
        cfg.scoring.zone5_penalty = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.geometry.cell_gap = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.directional.full_bonus = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = CommandConfig::default();
        cfg.scoring.distance_tiers[3].max_inches = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let cfg = CommandConfig::default();
        let json = cfg.to_json_string().unwrap();
        let parsed = CommandConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = CommandConfig::from_json_str(r#"{"geometry": {
            "cell_size": 100.0, "cell_gap": 2.0, "units_per_inch": 20.0,
            "surface_padding": 60.0, "perfect_strike_radius": 40.0
        }}"#)
        .unwrap();
        assert!((cfg.geometry.units_per_inch - 20.0).abs() < 1e-9);
        assert_eq!(cfg.scoring, ScoringConfig::default());
        assert_eq!(cfg.directional, DirectionalConfig::default());
    }
}
