//! Strike Zone Grid
//!
//! The strike zone is a 3x3 grid of cells numbered 1-9 in row-major order,
//! seen from the catcher's point of view:
//!
//! ```text
//!  1 | 2 | 3     top
//! ---+---+---
//!  4 | 5 | 6     middle
//! ---+---+---
//!  7 | 8 | 9     bottom
//! ```
//!
//! Every location is stored relative to one cell as an offset inside a
//! virtual 0-100 unit square. Offsets outside 0-100 are "shadow" locations
//! that belong to the nearest cell.

pub mod classifier;
pub mod geometry;
pub mod position;

pub use classifier::{classify, ZoneFacts};
pub use geometry::{distance, distance_between, distance_inches, AbsolutePoint};
pub use position::ZonePosition;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CommandError, Result};

/// Grid row, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    pub fn index(&self) -> u8 {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }
}

/// Grid column as seen by the catcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub fn index(&self) -> u8 {
        match self {
            Column::Left => 0,
            Column::Center => 1,
            Column::Right => 2,
        }
    }

    /// Mirror across the middle column
    pub fn mirror(&self) -> Self {
        match self {
            Column::Left => Column::Right,
            Column::Center => Column::Center,
            Column::Right => Column::Left,
        }
    }
}

/// A validated strike-zone cell (1-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Zone(u8);

impl Zone {
    /// Dead-center cell, also the fallback for unresolvable locations
    pub const CENTER: Zone = Zone(5);

    /// All zones in row-major order
    pub const ALL: [Zone; 9] = [
        Zone(1),
        Zone(2),
        Zone(3),
        Zone(4),
        Zone(5),
        Zone(6),
        Zone(7),
        Zone(8),
        Zone(9),
    ];

    /// Validate a raw zone number
    pub fn new(number: i64) -> Option<Self> {
        if (1..=9).contains(&number) {
            Some(Zone(number as u8))
        } else {
            None
        }
    }

    /// Zone from 0-based grid coordinates; indices are clamped to the grid
    pub fn from_grid(row: i64, col: i64) -> Self {
        let row = row.clamp(0, 2) as u8;
        let col = col.clamp(0, 2) as u8;
        Zone(row * 3 + col + 1)
    }

    /// Raw number, or zone 5 when the number is outside 1-9.
    ///
    /// Only for display purposes that need some valid cell; scoring must use
    /// a properly resolved location.
    pub fn or_center(number: i64) -> Self {
        Self::new(number).unwrap_or(Self::CENTER)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// 0-based row index
    pub fn row_index(&self) -> u8 {
        (self.0 - 1) / 3
    }

    /// 0-based column index
    pub fn col_index(&self) -> u8 {
        (self.0 - 1) % 3
    }

    pub fn row(&self) -> Row {
        match self.row_index() {
            0 => Row::Top,
            1 => Row::Middle,
            _ => Row::Bottom,
        }
    }

    pub fn column(&self) -> Column {
        match self.col_index() {
            0 => Column::Left,
            1 => Column::Center,
            _ => Column::Right,
        }
    }

    pub fn is_center(&self) -> bool {
        *self == Self::CENTER
    }
}

impl TryFrom<i64> for Zone {
    type Error = CommandError;

    fn try_from(number: i64) -> Result<Self> {
        Zone::new(number).ok_or(CommandError::InvalidZone { zone: number })
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> u8 {
        zone.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_validation() {
        assert!(Zone::new(0).is_none());
        assert!(Zone::new(10).is_none());
        assert!(Zone::new(-3).is_none());
        for n in 1..=9 {
            assert_eq!(Zone::new(n).map(|z| z.number() as i64), Some(n));
        }
    }

    #[test]
    fn test_row_major_layout() {
        let zone = Zone::new(6).unwrap();
        assert_eq!(zone.row_index(), 1);
        assert_eq!(zone.col_index(), 2);
        assert_eq!(zone.row(), Row::Middle);
        assert_eq!(zone.column(), Column::Right);

        let zone = Zone::new(7).unwrap();
        assert_eq!(zone.row(), Row::Bottom);
        assert_eq!(zone.column(), Column::Left);
    }

    #[test]
    fn test_from_grid_clamps() {
        assert_eq!(Zone::from_grid(0, 0).number(), 1);
        assert_eq!(Zone::from_grid(2, 2).number(), 9);
        assert_eq!(Zone::from_grid(-1, 5).number(), 3);
        assert_eq!(Zone::from_grid(7, -2).number(), 7);
    }

    #[test]
    fn test_or_center_fallback() {
        assert_eq!(Zone::or_center(0), Zone::CENTER);
        assert_eq!(Zone::or_center(42), Zone::CENTER);
        assert_eq!(Zone::or_center(3).number(), 3);
    }

    #[test]
    fn test_zone_serde() {
        let zone = Zone::new(8).unwrap();
        assert_eq!(serde_json::to_string(&zone).unwrap(), "8");
        let parsed: Zone = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.number(), 4);
        assert!(serde_json::from_str::<Zone>("11").is_err());
    }

    #[test]
    fn test_column_mirror() {
        assert_eq!(Column::Left.mirror(), Column::Right);
        assert_eq!(Column::Center.mirror(), Column::Center);
        assert_eq!(Column::Right.mirror(), Column::Left);
    }
}
