//! # Command Scoring Model
//!
//! Turns a catcher target / ball location pair into a 1-10 command score:
//!
//! - `base` - distance-only tier table
//! - `directional` - pitch-type and handedness bonus/penalty rules
//! - `grade` - score to qualitative grade
//! - `reasoning` - human-readable rationale tags
//! - `engine` - the full pipeline producing [`ScoreResult`]

pub mod base;
pub mod directional;
pub mod engine;
pub mod grade;
pub mod reasoning;

pub use base::base_score;
pub use directional::{adjust, evaluate, DirectionMatch, DirectionalOutcome, DirectionalRule};
pub use engine::{clamp_score, score_pitch, score_record, ScoreResult};
pub use grade::{ClassTag, Grade};
pub use reasoning::{reasoning_tags, reasoning_text};

/// Lowest possible final score
pub const MIN_SCORE: u8 = 1;
/// Highest possible final score
pub const MAX_SCORE: u8 = 10;
