//! Directional Adjustment Table
//!
//! Each pitch type rewards misses toward its natural movement. A rule names
//! up to two target directions, a row and a side of the plate. Sides are
//! stored as glove side / arm side, so handedness only decides which column
//! a side maps to.
//!
//! | Pitch     | Row    | Side       | Upper-half penalty |
//! |-----------|--------|------------|--------------------|
//! | Four-Seam | top    | -          | no                 |
//! | Sinker    | bottom | arm side   | no                 |
//! | Cutter    | -      | glove side | no                 |
//! | Slider    | bottom | glove side | yes                |
//! | Sweeper   | bottom | glove side | no                 |
//! | Curveball | bottom | glove side | yes                |
//! | ChangeUp  | bottom | arm side   | yes                |
//! | Splitter  | bottom | arm side   | yes                |
//!
//! Knuckleball has no rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::DirectionalConfig;
use crate::pitch::{Handedness, PitchType, Side};
use crate::zone::{Row, ZoneFacts};

/// Target directions for one pitch type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalRule {
    pub target_row: Option<Row>,
    pub target_side: Option<Side>,
    /// Subtract the upper-half penalty whenever the ball is in the upper half
    #[serde(default)]
    pub upper_half_penalty: bool,
    /// Name a full match as "<pitch> inside to <same-side batter>"
    #[serde(default)]
    pub inside_tag: bool,
}

impl DirectionalRule {
    pub const fn new(target_row: Option<Row>, target_side: Option<Side>) -> Self {
        Self {
            target_row,
            target_side,
            upper_half_penalty: false,
            inside_tag: false,
        }
    }

    pub const fn with_upper_half_penalty(mut self) -> Self {
        self.upper_half_penalty = true;
        self
    }

    pub const fn with_inside_tag(mut self) -> Self {
        self.inside_tag = true;
        self
    }

    /// Number of target directions (0-2)
    pub fn direction_count(&self) -> usize {
        self.target_row.is_some() as usize + self.target_side.is_some() as usize
    }

    /// How many target directions the ball location satisfies
    pub fn matched_directions(&self, handedness: Handedness, facts: &ZoneFacts) -> usize {
        let row_hit = self.target_row.map_or(false, |row| facts.in_row(row));
        let side_hit = self
            .target_side
            .map_or(false, |side| facts.in_column(handedness.column_for(side)));
        row_hit as usize + side_hit as usize
    }
}

/// Standard rule table
pub fn default_rules() -> BTreeMap<PitchType, DirectionalRule> {
    use Side::{ArmSide, GloveSide};

    BTreeMap::from([
        (PitchType::FourSeam, DirectionalRule::new(Some(Row::Top), None)),
        (
            PitchType::Sinker,
            DirectionalRule::new(Some(Row::Bottom), Some(ArmSide)).with_inside_tag(),
        ),
        (PitchType::Cutter, DirectionalRule::new(None, Some(GloveSide))),
        (
            PitchType::Slider,
            DirectionalRule::new(Some(Row::Bottom), Some(GloveSide)).with_upper_half_penalty(),
        ),
        (
            PitchType::Sweeper,
            DirectionalRule::new(Some(Row::Bottom), Some(GloveSide)),
        ),
        (
            PitchType::Curveball,
            DirectionalRule::new(Some(Row::Bottom), Some(GloveSide)).with_upper_half_penalty(),
        ),
        (
            PitchType::ChangeUp,
            DirectionalRule::new(Some(Row::Bottom), Some(ArmSide)).with_upper_half_penalty(),
        ),
        (
            PitchType::Splitter,
            DirectionalRule::new(Some(Row::Bottom), Some(ArmSide)).with_upper_half_penalty(),
        ),
    ])
}

/// How well a miss lined up with the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMatch {
    #[default]
    None,
    Partial,
    Full,
}

/// Result of a directional lookup
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionalOutcome {
    /// Signed bonus added to the base score
    pub adjustment: f64,
    pub direction_match: DirectionMatch,
    pub upper_half_penalized: bool,
}

/// Evaluate the directional rule for one pitch
pub fn evaluate(
    pitch_type: PitchType,
    handedness: Handedness,
    facts: &ZoneFacts,
    config: &DirectionalConfig,
) -> DirectionalOutcome {
    let Some(rule) = config.rule_for(pitch_type) else {
        return DirectionalOutcome::default();
    };

    let wanted = rule.direction_count();
    let hit = rule.matched_directions(handedness, facts);

    let direction_match = if wanted == 0 || hit == 0 {
        DirectionMatch::None
    } else if hit == wanted {
        DirectionMatch::Full
    } else {
        DirectionMatch::Partial
    };

    let mut adjustment = match direction_match {
        DirectionMatch::Full => config.full_bonus,
        DirectionMatch::Partial => config.half_bonus,
        DirectionMatch::None => 0.0,
    };

    let upper_half_penalized = rule.upper_half_penalty && facts.is_upper_half;
    if upper_half_penalized {
        adjustment -= config.upper_half_penalty;
    }

    DirectionalOutcome {
        adjustment,
        direction_match,
        upper_half_penalized,
    }
}

/// Signed directional bonus only
pub fn adjust(
    pitch_type: PitchType,
    handedness: Handedness,
    facts: &ZoneFacts,
    config: &DirectionalConfig,
) -> f64 {
    evaluate(pitch_type, handedness, facts, config).adjustment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{classify, Zone};

    const HANDS: [Handedness; 2] = [Handedness::Right, Handedness::Left];

    fn facts(zone: i64, y: f64) -> ZoneFacts {
        classify(Zone::new(zone).unwrap(), Some(y))
    }

    fn adj(pitch: PitchType, hand: Handedness, zone: i64, y: f64) -> f64 {
        adjust(pitch, hand, &facts(zone, y), &DirectionalConfig::default())
    }

    #[test]
    fn test_four_seam_top_row_any_hand() {
        for hand in HANDS {
            assert_eq!(adj(PitchType::FourSeam, hand, 2, 50.0), 0.5);
            assert_eq!(adj(PitchType::FourSeam, hand, 1, 10.0), 0.5);
            assert_eq!(adj(PitchType::FourSeam, hand, 5, 10.0), 0.0);
            assert_eq!(adj(PitchType::FourSeam, hand, 8, 50.0), 0.0);
        }
    }

    #[test]
    fn test_sinker_zone9_by_hand() {
        assert_eq!(adj(PitchType::Sinker, Handedness::Right, 9, 50.0), 0.5);
        assert_eq!(adj(PitchType::Sinker, Handedness::Left, 9, 50.0), 0.25);
        assert_eq!(adj(PitchType::Sinker, Handedness::Left, 7, 50.0), 0.5);
        assert_eq!(adj(PitchType::Sinker, Handedness::Right, 6, 80.0), 0.25);
        assert_eq!(adj(PitchType::Sinker, Handedness::Right, 1, 50.0), 0.0);
    }

    #[test]
    fn test_cutter_single_direction_gets_full_bonus() {
        assert_eq!(adj(PitchType::Cutter, Handedness::Right, 4, 50.0), 0.5);
        assert_eq!(adj(PitchType::Cutter, Handedness::Right, 6, 50.0), 0.0);
        assert_eq!(adj(PitchType::Cutter, Handedness::Left, 6, 50.0), 0.5);
        assert_eq!(adj(PitchType::Cutter, Handedness::Left, 1, 50.0), 0.0);
    }

    #[test]
    fn test_upper_half_penalty_pitches() {
        // glove-side column (+0.25) but upper half (-1.0)
        assert_eq!(adj(PitchType::Slider, Handedness::Right, 1, 50.0), -0.75);
        assert_eq!(adj(PitchType::Curveball, Handedness::Left, 3, 50.0), -0.75);
        // middle row split: top of zone 4 is penalized, bottom is not
        assert_eq!(adj(PitchType::Curveball, Handedness::Right, 4, 30.0), -0.75);
        assert_eq!(adj(PitchType::Curveball, Handedness::Right, 4, 70.0), 0.25);
        // arm-side pitches
        assert_eq!(adj(PitchType::ChangeUp, Handedness::Right, 2, 50.0), -1.0);
        assert_eq!(adj(PitchType::Splitter, Handedness::Left, 7, 50.0), 0.5);
    }

    #[test]
    fn test_sweeper_is_never_penalized() {
        for hand in HANDS {
            for zone in Zone::ALL {
                let a = adj(PitchType::Sweeper, hand, zone.number() as i64, 10.0);
                assert!(a >= 0.0, "sweeper {} zone {} -> {}", hand, zone, a);
            }
        }
        assert_eq!(adj(PitchType::Sweeper, Handedness::Right, 7, 50.0), 0.5);
        assert_eq!(adj(PitchType::Sweeper, Handedness::Left, 9, 50.0), 0.5);
    }

    #[test]
    fn test_knuckleball_has_no_rule() {
        for hand in HANDS {
            for zone in Zone::ALL {
                assert_eq!(adj(PitchType::Knuckleball, hand, zone.number() as i64, 10.0), 0.0);
            }
        }
    }

    #[test]
    fn test_handedness_only_mirrors_columns() {
        // Every rule scores zone z for RHP exactly like the mirrored zone for LHP.
        let cfg = DirectionalConfig::default();
        for pitch in PitchType::ALL {
            for zone in Zone::ALL {
                let mirrored = Zone::from_grid(
                    zone.row_index() as i64,
                    2 - zone.col_index() as i64,
                );
                for y in [20.0, 50.0, 80.0] {
                    let rhp = adjust(pitch, Handedness::Right, &classify(zone, Some(y)), &cfg);
                    let lhp = adjust(pitch, Handedness::Left, &classify(mirrored, Some(y)), &cfg);
                    assert_eq!(rhp, lhp, "{:?} zone {} y {}", pitch, zone, y);
                }
            }
        }
    }

    #[test]
    fn test_outcome_match_levels() {
        let cfg = DirectionalConfig::default();
        let full = evaluate(PitchType::Slider, Handedness::Right, &facts(7, 50.0), &cfg);
        assert_eq!(full.direction_match, DirectionMatch::Full);
        assert!(!full.upper_half_penalized);

        let partial = evaluate(PitchType::Slider, Handedness::Right, &facts(1, 50.0), &cfg);
        assert_eq!(partial.direction_match, DirectionMatch::Partial);
        assert!(partial.upper_half_penalized);

        let none = evaluate(PitchType::Slider, Handedness::Right, &facts(6, 40.0), &cfg);
        assert_eq!(none.direction_match, DirectionMatch::None);
        assert_eq!(none.adjustment, -1.0);
    }
}
