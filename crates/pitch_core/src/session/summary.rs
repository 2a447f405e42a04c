//! # Pitch Record Aggregator
//!
//! Session-wide and per-pitch-type statistics, recomputed from scratch from
//! the raw history on every call. Scores are derived with the current
//! config, so changing the tables re-grades the whole session.
//!
//! Every statistic degrades to `0` instead of NaN or infinity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::spread::{location_spread, LocationSpread};
use super::PitchRecord;
use crate::config::CommandConfig;
use crate::pitch::PitchType;
use crate::scoring::{score_record, ClassTag, Grade, ScoreResult};
use crate::zone::geometry::finite_or_zero;

/// Whole-session command score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub pitch_count: usize,
    pub average_score: f64,
    /// Mean score rounded to a whole score; grade is derived from this
    pub rounded_score: u8,
    pub average_distance_inches: f64,
    /// `None` while the session is empty
    pub grade: Option<Grade>,
    pub class_tag: Option<ClassTag>,
}

/// Statistics for one pitch type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub pitch_type: PitchType,
    pub count: usize,
    pub average_score: f64,
    pub average_distance_inches: f64,
    pub best_score: u8,
    pub worst_score: u8,
    /// Smallest miss
    pub best_distance_inches: f64,
    /// Largest miss
    pub worst_distance_inches: f64,
    /// Graded on the unrounded `average_score`
    pub grade: Grade,
    pub class_tag: ClassTag,
    pub target_spread: LocationSpread,
    pub ball_spread: LocationSpread,
}

/// Everything the breakdown tables need
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    pub overall: ScoreSummary,
    /// Only pitch types that were actually thrown
    pub by_type: BTreeMap<PitchType, GroupSummary>,
}

impl SessionSummary {
    pub fn is_empty(&self) -> bool {
        self.overall.pitch_count == 0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + finite_or_zero(v), n + 1));
    if n == 0 {
        0.0
    } else {
        finite_or_zero(sum / n as f64)
    }
}

fn rounded(average_score: f64) -> u8 {
    finite_or_zero(average_score).round().clamp(0.0, u8::MAX as f64) as u8
}

/// Overall mean score and distance for a set of scored pitches
pub fn summarize_scores(scores: &[ScoreResult], config: &CommandConfig) -> ScoreSummary {
    if scores.is_empty() {
        return ScoreSummary::default();
    }

    let average_score = mean(scores.iter().map(|s| s.score as f64));
    let rounded_score = rounded(average_score);
    let grade = Grade::from_score(rounded_score, &config.scoring.grades);

    ScoreSummary {
        pitch_count: scores.len(),
        average_score,
        rounded_score,
        average_distance_inches: mean(scores.iter().map(|s| s.distance_inches)),
        grade: Some(grade),
        class_tag: Some(grade.class_tag()),
    }
}

fn summarize_group(
    pitch_type: PitchType,
    members: &[(&PitchRecord, ScoreResult)],
    config: &CommandConfig,
) -> GroupSummary {
    let scores = || members.iter().map(|(_, s)| s.score);
    let distances = || members.iter().map(|(_, s)| finite_or_zero(s.distance_inches));

    let average_score = mean(scores().map(f64::from));
    let grade = Grade::from_average(average_score, &config.scoring.grades);

    GroupSummary {
        pitch_type,
        count: members.len(),
        average_score,
        average_distance_inches: mean(distances()),
        best_score: scores().max().unwrap_or(0),
        worst_score: scores().min().unwrap_or(0),
        best_distance_inches: distances().reduce(f64::min).unwrap_or(0.0),
        worst_distance_inches: distances().reduce(f64::max).unwrap_or(0.0),
        grade,
        class_tag: grade.class_tag(),
        target_spread: location_spread(
            members.iter().map(|(r, _)| &r.catcher_target),
            &config.geometry,
        ),
        ball_spread: location_spread(
            members.iter().map(|(r, _)| &r.ball_location),
            &config.geometry,
        ),
    }
}

/// Summarize a full ordered history
pub fn summarize(history: &[PitchRecord], config: &CommandConfig) -> SessionSummary {
    let scored: Vec<(&PitchRecord, ScoreResult)> = history
        .iter()
        .map(|record| (record, score_record(record, config)))
        .collect();

    let all_scores: Vec<ScoreResult> = scored.iter().map(|(_, s)| s.clone()).collect();
    let overall = summarize_scores(&all_scores, config);

    let mut groups: BTreeMap<PitchType, Vec<(&PitchRecord, ScoreResult)>> = BTreeMap::new();
    for (record, score) in scored {
        groups
            .entry(record.descriptor.pitch_type)
            .or_default()
            .push((record, score));
    }

    let by_type = groups
        .into_iter()
        .map(|(pitch_type, members)| (pitch_type, summarize_group(pitch_type, &members, config)))
        .collect();

    SessionSummary { overall, by_type }
}
