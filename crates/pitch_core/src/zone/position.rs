use serde::{Deserialize, Serialize};

use super::Zone;
use crate::error::Result;

/// Local center of a cell in offset units
pub const CELL_CENTER: f64 = 50.0;

/// A location expressed relative to one strike-zone cell.
///
/// `x` grows to the catcher's right and `y` grows downward. Values outside
/// 0-100 are shadow locations attributed to this cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePosition {
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
}

impl ZonePosition {
    pub fn new(zone: Zone, x: f64, y: f64) -> Self {
        Self { zone, x, y }
    }

    /// Position from an untrusted zone number
    pub fn try_new(zone: i64, x: f64, y: f64) -> Result<Self> {
        Ok(Self::new(Zone::try_from(zone)?, x, y))
    }

    /// Dead center of a cell
    pub fn centered(zone: Zone) -> Self {
        Self::new(zone, CELL_CENTER, CELL_CENTER)
    }

    /// Both offsets are usable numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Inside the cell's own 0-100 square (edges included)
    pub fn is_inside_cell(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}
