//! Scoring rationale.
//!
//! Tag text is exported verbatim, so wording and order are stable:
//! zone-5 penalty, directional sign, then pitch-specific situations.

use super::directional::{DirectionMatch, DirectionalOutcome};
use crate::config::DirectionalConfig;
use crate::pitch::PitchDescriptor;

pub const ZONE5_TAG: &str = "Zone 5 penalty";
pub const GOOD_MISS_TAG: &str = "Good directional miss";
pub const POOR_MISS_TAG: &str = "Poor directional miss";
pub const STANDARD_SCORING: &str = "Standard scoring";

/// Ordered reasoning tags for one scored pitch
pub fn reasoning_tags(
    descriptor: &PitchDescriptor,
    outcome: &DirectionalOutcome,
    zone5_penalty: f64,
    config: &DirectionalConfig,
) -> Vec<String> {
    let mut tags = Vec::new();

    if zone5_penalty > 0.0 {
        tags.push(ZONE5_TAG.to_string());
    }

    if outcome.adjustment > 0.0 {
        tags.push(GOOD_MISS_TAG.to_string());
    } else if outcome.adjustment < 0.0 {
        tags.push(POOR_MISS_TAG.to_string());
    }

    if let Some(rule) = config.rule_for(descriptor.pitch_type) {
        let name = descriptor.pitch_type.tag_name();
        if rule.inside_tag && outcome.direction_match == DirectionMatch::Full {
            tags.push(format!(
                "{} inside to {}",
                name,
                descriptor.handedness.same_side_batter()
            ));
        }
        if outcome.upper_half_penalized {
            tags.push(format!("{} in upper half", name));
        }
    }

    tags
}

/// Comma-joined reasoning, or "Standard scoring" when nothing applies
pub fn reasoning_text(tags: &[String]) -> String {
    if tags.is_empty() {
        STANDARD_SCORING.to_string()
    } else {
        tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Handedness, PitchType};
    use crate::scoring::directional::evaluate;
    use crate::zone::{classify, Zone};

    fn tags_for(pitch: PitchType, hand: Handedness, zone: i64, y: f64) -> Vec<String> {
        let cfg = DirectionalConfig::default();
        let zone = Zone::new(zone).unwrap();
        let facts = classify(zone, Some(y));
        let outcome = evaluate(pitch, hand, &facts, &cfg);
        let penalty = if facts.is_zone5 { 2.0 } else { 0.0 };
        reasoning_tags(&PitchDescriptor::new(pitch, hand), &outcome, penalty, &cfg)
    }

    #[test]
    fn test_standard_scoring_fallback() {
        let tags = tags_for(PitchType::FourSeam, Handedness::Right, 8, 50.0);
        assert!(tags.is_empty());
        assert_eq!(reasoning_text(&tags), "Standard scoring");
    }

    #[test]
    fn test_sinker_inside_tags() {
        insta::assert_debug_snapshot!(
            tags_for(PitchType::Sinker, Handedness::Right, 9, 50.0),
            @r###"
        [
            "Good directional miss",
            "Sinker inside to RHB",
        ]
        "###
        );

        let lhp = tags_for(PitchType::Sinker, Handedness::Left, 7, 50.0);
        assert_eq!(
            reasoning_text(&lhp),
            "Good directional miss, Sinker inside to LHB"
        );

        // partial match never names the inside miss
        let partial = tags_for(PitchType::Sinker, Handedness::Left, 9, 50.0);
        assert_eq!(reasoning_text(&partial), "Good directional miss");
    }

    #[test]
    fn test_zone5_and_upper_half_tags() {
        insta::assert_debug_snapshot!(
            tags_for(PitchType::ChangeUp, Handedness::Right, 5, 40.0),
            @r###"
        [
            "Zone 5 penalty",
            "Poor directional miss",
            "ChangeUp in upper half",
        ]
        "###
        );

        let slider = tags_for(PitchType::Slider, Handedness::Left, 3, 50.0);
        assert_eq!(
            reasoning_text(&slider),
            "Poor directional miss, Slider in upper half"
        );
    }

    #[test]
    fn test_zone5_without_directional_change() {
        let tags = tags_for(PitchType::FourSeam, Handedness::Right, 5, 50.0);
        assert_eq!(reasoning_text(&tags), "Zone 5 penalty");
    }
}
