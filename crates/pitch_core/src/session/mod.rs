//! Charting Session
//!
//! Owns the append-only pitch history and the running sequence counter of a
//! single charting session. Both are cleared together by [`PitchSession::reset`].
//!
//! Nothing derived is stored: scores and summaries are recomputed from the
//! raw records with the session's current config on every request.

pub mod record;
pub mod spread;
pub mod summary;

pub use record::{PitchEvent, PitchRecord};
pub use spread::{location_spread, LocationSpread};
pub use summary::{summarize, summarize_scores, GroupSummary, ScoreSummary, SessionSummary};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::info;

use crate::config::CommandConfig;
use crate::export::{export_rows, ExportRow};
use crate::pitch::PitchDescriptor;
use crate::scoring::{score_record, ScoreResult};
use crate::zone::ZonePosition;

/// Number of pitches shown in the recent-history list
pub const RECENT_HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct PitchSession {
    config: CommandConfig,
    history: Vec<PitchRecord>,
    pitch_counter: u32,
}

impl PitchSession {
    pub fn new(config: CommandConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
            pitch_counter: 0,
        }
    }

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Swap the scoring tables. History is kept and re-graded on demand.
    pub fn set_config(&mut self, config: CommandConfig) {
        self.config = config;
    }

    /// Append a completed pitch stamped with the current time
    pub fn record_pitch(
        &mut self,
        descriptor: PitchDescriptor,
        catcher_target: ZonePosition,
        ball_location: ZonePosition,
    ) -> &PitchRecord {
        self.record_pitch_at(descriptor, catcher_target, ball_location, Utc::now())
    }

    /// Append a completed pitch with an explicit timestamp
    pub fn record_pitch_at(
        &mut self,
        descriptor: PitchDescriptor,
        catcher_target: ZonePosition,
        ball_location: ZonePosition,
        timestamp: DateTime<Utc>,
    ) -> &PitchRecord {
        self.pitch_counter += 1;
        let record = PitchRecord {
            sequence_number: self.pitch_counter,
            descriptor,
            catcher_target,
            ball_location,
            timestamp,
        };

        info!(
            sequence = record.sequence_number,
            pitch = descriptor.pitch_type.code(),
            target_zone = catcher_target.zone.number(),
            ball_zone = ball_location.zone.number(),
            "recorded pitch"
        );

        self.history.push(record);
        &self.history[self.history.len() - 1]
    }

    /// Append a pitch handed over by the capture layer
    pub fn record_event(&mut self, event: PitchEvent) -> &PitchRecord {
        let timestamp = event.timestamp.unwrap_or_else(Utc::now);
        self.record_pitch_at(
            event.descriptor,
            event.catcher_target,
            event.ball_location,
            timestamp,
        )
    }

    /// Clear history and restart numbering at 1
    pub fn reset(&mut self) {
        info!(cleared = self.history.len(), "session reset");
        self.history.clear();
        self.pitch_counter = 0;
    }

    pub fn history(&self) -> &[PitchRecord] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Sequence number of the latest pitch (0 when empty)
    pub fn pitch_counter(&self) -> u32 {
        self.pitch_counter
    }

    pub fn score(&self, record: &PitchRecord) -> ScoreResult {
        score_record(record, &self.config)
    }

    /// Score of the most recent pitch
    pub fn last_score(&self) -> Option<ScoreResult> {
        self.history.last().map(|r| self.score(r))
    }

    /// Every record with its current score, oldest first
    pub fn scored_history(&self) -> Vec<(&PitchRecord, ScoreResult)> {
        self.history.iter().map(|r| (r, self.score(r))).collect()
    }

    /// Most recent pitches first, at most [`RECENT_HISTORY_LEN`]
    pub fn recent(&self) -> impl Iterator<Item = &PitchRecord> {
        self.history.iter().rev().take(RECENT_HISTORY_LEN)
    }

    pub fn summarize(&self) -> SessionSummary {
        summarize(&self.history, &self.config)
    }

    /// Export rows for the whole history
    pub fn export_rows(
        &self,
        pitcher_name: Option<&str>,
        exported_at: NaiveDateTime,
    ) -> Vec<ExportRow> {
        export_rows(&self.history, &self.config, pitcher_name, exported_at)
    }
}
