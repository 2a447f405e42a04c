//! # pitch_core - Pitch Command Scoring Engine
//!
//! Grades how close a pitch finished to the catcher's target on a 3x3
//! strike-zone grid and aggregates a charting session.
//!
//! ## Features
//! - Cross-zone distance on a shared grid frame, converted to inches
//! - 1-10 command score from a distance tier table, pitch-type and
//!   handedness directional rules and a zone-5 penalty
//! - Per-pitch-type session breakdowns, recomputed from raw history
//! - Export rows in the command database CSV layout
//! - JSON API for UI hosts
//!
//! ```rust
//! use pitch_core::{score_pitch, CommandConfig, Handedness, PitchDescriptor, PitchType, Zone, ZonePosition};
//!
//! let sinker = PitchDescriptor::new(PitchType::Sinker, Handedness::Right);
//! let target = ZonePosition::centered(Zone::CENTER);
//! let ball = ZonePosition::centered(Zone::new(8).unwrap());
//!
//! let result = score_pitch(&sinker, &target, &ball, &CommandConfig::default());
//! assert_eq!(result.score, 6);
//! assert_eq!(result.grade.label(), "Very Good");
//! ```

pub mod api;
pub mod capture;
pub mod config;
pub mod error;
pub mod export;
pub mod pitch;
pub mod scoring;
pub mod session;
pub mod zone;

pub use api::{score_pitch_json, summarize_session_json, JsonSession};
pub use capture::{resolve_ball_location, PitchCapture, PitchInput, RawMark, StrikeZoneSurface};
pub use config::CommandConfig;
pub use error::{CommandError, Result};
pub use export::{export_file_name, export_rows, ExportRow, EXPORT_HEADERS};
pub use pitch::{Handedness, PitchDescriptor, PitchType, Side};
pub use scoring::{score_pitch, ClassTag, Grade, ScoreResult};
pub use session::{GroupSummary, PitchEvent, PitchRecord, PitchSession, SessionSummary};
pub use zone::{distance, Zone, ZonePosition};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON request/response schema version
pub const SCHEMA_VERSION: u8 = 1;
