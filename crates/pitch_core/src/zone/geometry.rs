//! Zone Geometry
//!
//! Distance between two zone-relative positions. Positions in the same cell
//! share a local frame; positions in different cells are first translated
//! into one grid frame where cell `z` starts at
//! `(col(z) * cell_pitch, row(z) * cell_pitch)` and `cell_pitch` is the cell
//! size plus the inter-cell gap.
//!
//! Distances are in the same abstract units as the cell offsets. Use
//! [`distance_inches`] for real-world inches.

use super::position::CELL_CENTER;
use super::ZonePosition;
use crate::config::GeometryConfig;

/// A point in the shared grid frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsolutePoint {
    pub x: f64,
    pub y: f64,
}

impl AbsolutePoint {
    pub fn distance_to(&self, other: &AbsolutePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Translate a zone-relative position into the shared grid frame
pub fn to_absolute(pos: &ZonePosition, geometry: &GeometryConfig) -> AbsolutePoint {
    let pitch = geometry.cell_pitch();
    let center_x = pos.zone.col_index() as f64 * pitch + pitch / 2.0;
    let center_y = pos.zone.row_index() as f64 * pitch + pitch / 2.0;

    AbsolutePoint {
        x: center_x + (pos.x - CELL_CENTER),
        y: center_y + (pos.y - CELL_CENTER),
    }
}

/// Distance between two positions in offset units.
///
/// Never returns NaN or infinity: degenerate offsets give 0.
pub fn distance(a: &ZonePosition, b: &ZonePosition, geometry: &GeometryConfig) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }

    let d = if a.zone == b.zone {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        (dx * dx + dy * dy).sqrt()
    } else {
        to_absolute(a, geometry).distance_to(&to_absolute(b, geometry))
    };

    finite_or_zero(d)
}

/// Distance when either side may still be missing (pitch half captured)
pub fn distance_between(
    a: Option<&ZonePosition>,
    b: Option<&ZonePosition>,
    geometry: &GeometryConfig,
) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => distance(a, b, geometry),
        _ => 0.0,
    }
}

/// Distance converted to inches with the configured scale
pub fn distance_inches(a: &ZonePosition, b: &ZonePosition, geometry: &GeometryConfig) -> f64 {
    geometry.to_inches(distance(a, b, geometry))
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
