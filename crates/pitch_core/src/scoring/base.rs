//! Distance-only base score.

use crate::config::ScoringConfig;

/// Base score for a miss distance in inches.
///
/// Monotonically non-increasing: the first tier whose `max_inches` covers
/// the distance wins, anything past the last tier gets the floor score.
/// Non-finite distances count as a zero-inch miss.
pub fn base_score(distance_inches: f64, config: &ScoringConfig) -> u8 {
    let distance = if distance_inches.is_finite() {
        distance_inches.max(0.0)
    } else {
        0.0
    };

    config
        .distance_tiers
        .iter()
        .find(|tier| distance <= tier.max_inches)
        .map_or(config.floor_score, |tier| tier.score)
}
