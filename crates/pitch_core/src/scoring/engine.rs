//! Score pipeline: distance -> base score -> zone facts -> directional
//! adjustment -> zone-5 penalty -> clamp.
//!
//! [`ScoreResult`] is derived data. It is recomputed from the raw pitch and
//! the current config every time and never stored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::base::base_score;
use super::directional::evaluate;
use super::grade::{ClassTag, Grade};
use super::reasoning::{reasoning_tags, reasoning_text};
use super::{MAX_SCORE, MIN_SCORE};
use crate::config::CommandConfig;
use crate::pitch::PitchDescriptor;
use crate::session::PitchRecord;
use crate::zone::geometry::finite_or_zero;
use crate::zone::{classify, distance_inches, ZonePosition};

/// Command score for one pitch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score, 1-10
    pub score: u8,
    pub grade: Grade,
    pub class_tag: ClassTag,
    pub distance_inches: f64,
    pub base_score: u8,
    pub directional_adjustment: f64,
    pub zone5_penalty: f64,
    pub reasoning: String,
}

/// Clamp a raw combined score into 1-10
pub fn clamp_score(raw: f64) -> u8 {
    let rounded = finite_or_zero(raw).round();
    rounded.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

/// Score a pitch from its two locations
pub fn score_pitch(
    descriptor: &PitchDescriptor,
    catcher_target: &ZonePosition,
    ball_location: &ZonePosition,
    config: &CommandConfig,
) -> ScoreResult {
    let distance = distance_inches(catcher_target, ball_location, &config.geometry);
    let base = base_score(distance, &config.scoring);

    let facts = classify(ball_location.zone, Some(ball_location.y));
    let outcome = evaluate(
        descriptor.pitch_type,
        descriptor.handedness,
        &facts,
        &config.directional,
    );

    let zone5_penalty = if facts.is_zone5 {
        config.scoring.zone5_penalty
    } else {
        0.0
    };

    let score = clamp_score(base as f64 + outcome.adjustment - zone5_penalty);
    let grade = Grade::from_score(score, &config.scoring.grades);
    let tags = reasoning_tags(descriptor, &outcome, zone5_penalty, &config.directional);

    debug!(
        pitch = descriptor.pitch_type.code(),
        hand = descriptor.handedness.code(),
        target_zone = catcher_target.zone.number(),
        ball_zone = ball_location.zone.number(),
        distance_inches = distance,
        base,
        adjustment = outcome.adjustment,
        zone5_penalty,
        score,
        "scored pitch"
    );

    ScoreResult {
        score,
        grade,
        class_tag: grade.class_tag(),
        distance_inches: distance,
        base_score: base,
        directional_adjustment: outcome.adjustment,
        zone5_penalty,
        reasoning: reasoning_text(&tags),
    }
}

/// Score a recorded pitch against the current config
pub fn score_record(record: &PitchRecord, config: &CommandConfig) -> ScoreResult {
    score_pitch(
        &record.descriptor,
        &record.catcher_target,
        &record.ball_location,
        config,
    )
}
