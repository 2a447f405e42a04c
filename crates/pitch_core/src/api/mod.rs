//! JSON facade for hosts that exchange requests as strings.
//!
//! Every entry point takes a JSON request carrying `schema_version` (must be
//! [`SCHEMA_VERSION`](crate::SCHEMA_VERSION)) and returns the JSON response
//! or an error message.

pub mod json_api;
pub mod session_json;

pub use json_api::{
    score_pitch_json, session_from_request, summarize_session_json, ScorePitchRequest,
    ScorePitchResponse, ScoredPitch, SessionRequest, SessionResponse,
};
pub use session_json::{
    ConfigureSessionRequest, JsonSession, RecordPitchRequest, RecordPitchResponse,
    SessionStateResponse,
};
