//! Pitch catalogue: pitch types, pitcher handedness and plate sides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::zone::Column;

/// Pitch type, serialized as its two-letter chart code
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum PitchType {
    #[default]
    #[serde(rename = "FS")]
    FourSeam,
    #[serde(rename = "SI")]
    Sinker,
    #[serde(rename = "CT")]
    Cutter,
    #[serde(rename = "SL")]
    Slider,
    #[serde(rename = "SW")]
    Sweeper,
    #[serde(rename = "CB")]
    Curveball,
    #[serde(rename = "CH")]
    ChangeUp,
    #[serde(rename = "SP")]
    Splitter,
    #[serde(rename = "KN")]
    Knuckleball,
}

impl PitchType {
    pub const ALL: [PitchType; 9] = [
        PitchType::FourSeam,
        PitchType::Sinker,
        PitchType::Cutter,
        PitchType::Slider,
        PitchType::Sweeper,
        PitchType::Curveball,
        PitchType::ChangeUp,
        PitchType::Splitter,
        PitchType::Knuckleball,
    ];

    /// Two-letter chart code
    pub fn code(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "FS",
            PitchType::Sinker => "SI",
            PitchType::Cutter => "CT",
            PitchType::Slider => "SL",
            PitchType::Sweeper => "SW",
            PitchType::Curveball => "CB",
            PitchType::ChangeUp => "CH",
            PitchType::Splitter => "SP",
            PitchType::Knuckleball => "KN",
        }
    }

    /// Name shown in history, breakdown tables and exports
    pub fn display_name(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "Four-Seam",
            PitchType::Sinker => "Sinker",
            PitchType::Cutter => "Cutter",
            PitchType::Slider => "Slider",
            PitchType::Sweeper => "Sweeper",
            PitchType::Curveball => "Curveball",
            PitchType::ChangeUp => "Change",
            PitchType::Splitter => "Splitter",
            PitchType::Knuckleball => "Knuckleball",
        }
    }

    /// Name used inside scoring reasoning tags
    pub fn tag_name(&self) -> &'static str {
        match self {
            PitchType::ChangeUp => "ChangeUp",
            other => other.display_name(),
        }
    }

    /// Default chart color
    pub fn default_color(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "darkred",
            PitchType::Sinker => "orange",
            PitchType::Cutter => "saddlebrown",
            PitchType::Slider => "gold",
            PitchType::Sweeper => "goldenrod",
            PitchType::Curveball => "royalblue",
            PitchType::ChangeUp => "green",
            PitchType::Splitter => "teal",
            PitchType::Knuckleball => "purple",
        }
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PitchType {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        PitchType::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or_else(|| CommandError::UnknownPitchType(s.to_string()))
    }
}

/// Pitcher handedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Handedness {
    #[serde(rename = "LHP")]
    Left,
    #[default]
    #[serde(rename = "RHP")]
    Right,
}

impl Handedness {
    pub fn code(&self) -> &'static str {
        match self {
            Handedness::Left => "LHP",
            Handedness::Right => "RHP",
        }
    }

    /// Batter standing on the pitcher's arm side
    pub fn same_side_batter(&self) -> &'static str {
        match self {
            Handedness::Left => "LHB",
            Handedness::Right => "RHB",
        }
    }

    /// Column on the given side of the plate, from the catcher's view
    pub fn column_for(&self, side: Side) -> Column {
        let rhp = match side {
            Side::GloveSide => Column::Left,
            Side::ArmSide => Column::Right,
        };
        match self {
            Handedness::Right => rhp,
            Handedness::Left => rhp.mirror(),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Handedness {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LHP" | "L" => Ok(Handedness::Left),
            "RHP" | "R" => Ok(Handedness::Right),
            _ => Err(CommandError::UnknownHandedness(s.to_string())),
        }
    }
}

/// Side of the plate relative to the pitcher's hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    GloveSide,
    ArmSide,
}

/// What was thrown and by whom. Missing fields read as a right-handed
/// four-seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchDescriptor {
    pub pitch_type: PitchType,
    pub handedness: Handedness,
}

impl PitchDescriptor {
    pub fn new(pitch_type: PitchType, handedness: Handedness) -> Self {
        Self {
            pitch_type,
            handedness,
        }
    }
}
