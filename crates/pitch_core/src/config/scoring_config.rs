//! Scoring Configuration

use serde::{Deserialize, Serialize};

/// One step of the distance table: misses up to `max_inches` score `score`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceTier {
    pub max_inches: f64,
    pub score: u8,
}

/// Lowest final score per grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThresholds {
    pub excellent: u8,
    pub very_good: u8,
    pub average: u8,
    pub fair: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: 8,
            very_good: 6,
            average: 5,
            fair: 3,
        }
    }
}

/// Distance tiers, zone-5 penalty and grade boundaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Ascending by `max_inches`, first match wins
    pub distance_tiers: Vec<DistanceTier>,
    /// Score for misses beyond the last tier (default: 1)
    pub floor_score: u8,
    /// Subtracted when the ball crosses dead center (default: 2.0)
    pub zone5_penalty: f64,
    #[serde(default)]
    pub grades: GradeThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let tiers = [
            (1.0, 10),
            (2.0, 9),
            (3.0, 8),
            (4.0, 7),
            (6.0, 6),
            (8.0, 5),
            (10.0, 4),
            (12.0, 3),
            (15.0, 2),
        ];

        Self {
            distance_tiers: tiers
                .iter()
                .map(|&(max_inches, score)| DistanceTier { max_inches, score })
                .collect(),
            floor_score: 1,
            zone5_penalty: 2.0,
            grades: GradeThresholds::default(),
        }
    }
}
