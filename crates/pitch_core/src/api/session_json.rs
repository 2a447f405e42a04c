//! Live charting session behind a JSON interface.
//!
//! Hosts that exchange strings (UI shells, scripting bridges) own a
//! [`JsonSession`] and feed it one request per pitch.

use serde::{Deserialize, Serialize};

use super::json_api::{check_schema, resolve_config};
use crate::capture::PitchInput;
use crate::config::CommandConfig;
use crate::error::Result;
use crate::scoring::ScoreResult;
use crate::session::{PitchSession, SessionSummary};

#[derive(Debug, Deserialize)]
pub struct RecordPitchRequest {
    pub schema_version: u8,
    #[serde(flatten)]
    pub pitch: PitchInput,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordPitchResponse {
    pub sequence_number: u32,
    pub result: ScoreResult,
    pub summary: SessionSummary,
}

#[derive(Debug, Deserialize)]
pub struct ConfigureSessionRequest {
    pub schema_version: u8,
    pub config: CommandConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStateResponse {
    pub pitch_count: usize,
    pub summary: SessionSummary,
}

/// A [`PitchSession`] driven by JSON requests
#[derive(Debug, Default)]
pub struct JsonSession {
    session: PitchSession,
}

impl JsonSession {
    pub fn new(config: CommandConfig) -> Self {
        Self {
            session: PitchSession::new(config),
        }
    }

    pub fn session(&self) -> &PitchSession {
        &self.session
    }

    /// Append one pitch and return its score
    pub fn record_pitch_json(
        &mut self,
        request_json: &str,
    ) -> std::result::Result<String, String> {
        self.record_pitch_inner(request_json).map_err(|e| e.to_string())
    }

    /// Replace the scoring tables; history is re-graded
    pub fn configure_json(&mut self, request_json: &str) -> std::result::Result<String, String> {
        self.configure_inner(request_json).map_err(|e| e.to_string())
    }

    pub fn summary_json(&self) -> std::result::Result<String, String> {
        self.state().map_err(|e| e.to_string())
    }

    /// Clear history and the pitch counter
    pub fn reset_json(&mut self) -> std::result::Result<String, String> {
        self.session.reset();
        self.state().map_err(|e| e.to_string())
    }

    fn record_pitch_inner(&mut self, request_json: &str) -> Result<String> {
        let request: RecordPitchRequest = serde_json::from_str(request_json)?;
        check_schema(request.schema_version)?;
        let event = request.pitch.resolve(&self.session.config().geometry)?;

        let record = self.session.record_event(event).clone();
        let result = self.session.score(&record);

        Ok(serde_json::to_string(&RecordPitchResponse {
            sequence_number: record.sequence_number,
            result,
            summary: self.session.summarize(),
        })?)
    }

    fn configure_inner(&mut self, request_json: &str) -> Result<String> {
        let request: ConfigureSessionRequest = serde_json::from_str(request_json)?;
        check_schema(request.schema_version)?;
        let config = resolve_config(Some(request.config))?;
        self.session.set_config(config);
        self.state()
    }

    fn state(&self) -> Result<String> {
        Ok(serde_json::to_string(&SessionStateResponse {
            pitch_count: self.session.len(),
            summary: self.session.summarize(),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pitch(code: &str, target: u8, ball: u8) -> String {
        json!({
            "schema_version": 1,
            "pitch_type": code,
            "handedness": "RHP",
            "catcher_target": { "zone": target, "x": 50.0, "y": 50.0 },
            "ball_location": { "zone": ball, "x": 50.0, "y": 50.0 }
        })
        .to_string()
    }

    fn state(json: &str) -> SessionStateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_live_session_flow() {
        let mut live = JsonSession::default();

        let out = live.record_pitch_json(&pitch("FS", 2, 2)).unwrap();
        let first: RecordPitchResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(first.sequence_number, 1);
        assert_eq!(first.result.score, 10);

        let out = live.record_pitch_json(&pitch("FS", 5, 5)).unwrap();
        let second: RecordPitchResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(second.sequence_number, 2);
        assert_eq!(second.result.score, 8);
        assert_eq!(second.summary.overall.pitch_count, 2);
        assert_eq!(second.summary.overall.rounded_score, 9);

        let bad = live.record_pitch_json(&pitch("XX", 5, 5)).unwrap_err();
        assert!(bad.starts_with("JSON error"), "{bad}");
        assert_eq!(state(&live.summary_json().unwrap()).pitch_count, 2);

        let config = json!({
            "schema_version": 1,
            "config": CommandConfig::distance_only(),
        })
        .to_string();
        let regraded = state(&live.configure_json(&config).unwrap());
        assert_eq!(regraded.summary.overall.rounded_score, 10);

        let cleared = state(&live.reset_json().unwrap());
        assert_eq!(cleared.pitch_count, 0);
        assert!(cleared.summary.is_empty());

        let out = live.record_pitch_json(&pitch("CT", 4, 4)).unwrap();
        let restarted: RecordPitchResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(restarted.sequence_number, 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = JsonSession::default();
        let b = JsonSession::new(CommandConfig::distance_only());
        a.record_pitch_json(&pitch("SL", 3, 3)).unwrap();
        assert_eq!(a.session().len(), 1);
        assert!(b.session().is_empty());
    }

    #[test]
    fn test_record_repairs_unknown_ball_zone() {
        let mut live = JsonSession::default();
        let request = json!({
            "schema_version": 1,
            "pitch_type": "CB",
            "target_mark": { "zone": 7, "x": 50.0, "y": 50.0, "surface_x": 110.0, "surface_y": 314.0 },
            "ball_mark": { "zone": 0, "surface_x": 130.0, "surface_y": 290.0 }
        });
        let out = live.record_pitch_json(&request.to_string()).unwrap();
        let recorded: RecordPitchResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(recorded.result.distance_inches, 0.0);
        assert_eq!(recorded.result.score, 10);
        assert_eq!(
            live.session().history()[0].ball_location,
            live.session().history()[0].catcher_target
        );
    }

    #[test]
    fn test_configure_rejects_invalid_tables() {
        let mut live = JsonSession::default();
        let mut config = serde_json::to_value(CommandConfig::default()).unwrap();
        config["scoring"]["zone5_penalty"] = json!(-1.0);
        let err = live
            .configure_json(&json!({ "schema_version": 1, "config": config }).to_string())
            .unwrap_err();
        assert!(err.starts_with("Invalid config"), "{err}");
    }
}
