use serde::{Deserialize, Serialize};

use crate::capture::PitchInput;
use crate::config::CommandConfig;
use crate::error::{CommandError, Result};
use crate::pitch::PitchType;
use crate::scoring::{score_pitch, ScoreResult};
use crate::session::{PitchSession, SessionSummary};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ScorePitchRequest {
    pub schema_version: u8,
    #[serde(flatten)]
    pub pitch: PitchInput,
    /// Scoring tables; the standard tables when absent
    #[serde(default)]
    pub config: Option<CommandConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScorePitchResponse {
    pub schema_version: u8,
    pub result: ScoreResult,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub schema_version: u8,
    /// Pitches in throw order
    pub pitches: Vec<PitchInput>,
    #[serde(default)]
    pub config: Option<CommandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPitch {
    pub sequence_number: u32,
    pub pitch_type: PitchType,
    pub result: ScoreResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub schema_version: u8,
    pub pitches: Vec<ScoredPitch>,
    pub summary: SessionSummary,
}

pub(crate) fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CommandError::SchemaVersion {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}

pub(crate) fn resolve_config(config: Option<CommandConfig>) -> Result<CommandConfig> {
    match config {
        Some(config) => {
            config.validate()?;
            Ok(config)
        }
        None => Ok(CommandConfig::default()),
    }
}

/// Build a session from a decoded request
pub fn session_from_request(request: SessionRequest) -> Result<PitchSession> {
    check_schema(request.schema_version)?;
    let config = resolve_config(request.config)?;
    let events = request
        .pitches
        .iter()
        .map(|pitch| pitch.resolve(&config.geometry))
        .collect::<Result<Vec<_>>>()?;

    let mut session = PitchSession::new(config);
    for event in events {
        session.record_event(event);
    }
    Ok(session)
}

fn score_pitch_inner(request_json: &str) -> Result<String> {
    let request: ScorePitchRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    let config = resolve_config(request.config)?;

    let pitch = request.pitch.resolve(&config.geometry)?;
    let result = score_pitch(
        &pitch.descriptor,
        &pitch.catcher_target,
        &pitch.ball_location,
        &config,
    );

    Ok(serde_json::to_string(&ScorePitchResponse {
        schema_version: SCHEMA_VERSION,
        result,
    })?)
}

fn summarize_session_inner(request_json: &str) -> Result<String> {
    let request: SessionRequest = serde_json::from_str(request_json)?;
    let session = session_from_request(request)?;

    let pitches = session
        .scored_history()
        .into_iter()
        .map(|(record, result)| ScoredPitch {
            sequence_number: record.sequence_number,
            pitch_type: record.descriptor.pitch_type,
            result,
        })
        .collect();

    Ok(serde_json::to_string(&SessionResponse {
        schema_version: SCHEMA_VERSION,
        pitches,
        summary: session.summarize(),
    })?)
}

/// Score one pitch.
///
/// Request: `{"schema_version": 1, "pitch_type": "SI", "handedness": "RHP",
/// "catcher_target": {"zone": 5, "x": 50, "y": 50},
/// "ball_location": {"zone": 8, "x": 50, "y": 50}}` with an optional
/// `config` object. Either location may instead be sent as a raw surface
/// mark (`target_mark`, `ball_mark`); an unknown ball zone is then repaired
/// against the target.
pub fn score_pitch_json(request_json: &str) -> std::result::Result<String, String> {
    score_pitch_inner(request_json).map_err(|e| e.to_string())
}

/// Score every pitch of a session and summarize it
pub fn summarize_session_json(request_json: &str) -> std::result::Result<String, String> {
    summarize_session_inner(request_json).map_err(|e| e.to_string())
}
