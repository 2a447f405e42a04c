use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pitch::PitchDescriptor;
use crate::zone::ZonePosition;

/// One completed pitch. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    /// 1-based position in the session, restarts after a reset
    pub sequence_number: u32,
    pub descriptor: PitchDescriptor,
    pub catcher_target: ZonePosition,
    pub ball_location: ZonePosition,
    pub timestamp: DateTime<Utc>,
}

/// A pitch as handed over by the capture layer, before it gets a sequence
/// number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchEvent {
    #[serde(flatten)]
    pub descriptor: PitchDescriptor,
    pub catcher_target: ZonePosition,
    pub ball_location: ZonePosition,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PitchEvent {
    pub fn new(
        descriptor: PitchDescriptor,
        catcher_target: ZonePosition,
        ball_location: ZonePosition,
    ) -> Self {
        Self {
            descriptor,
            catcher_target,
            ball_location,
            timestamp: None,
        }
    }
}
