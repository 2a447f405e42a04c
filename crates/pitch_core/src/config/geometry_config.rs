//! Geometry Configuration

use serde::{Deserialize, Serialize};

/// Grid layout and unit scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Side of one cell in offset units (default: 100)
    pub cell_size: f64,
    /// Gap between neighbouring cells (default: 2)
    pub cell_gap: f64,
    /// Offset units per real-world inch (default: 306 / 17 = 18)
    pub units_per_inch: f64,
    /// Shadow margin around the grid on the capture surface (default: 60)
    pub surface_padding: f64,
    /// Max surface distance between target and ball clicks for an invalid
    /// ball zone to be treated as a zone-exact hit (default: 60).
    ///
    /// Measured in capture-surface units, which only match cell offset units
    /// while the surface is drawn at the default 100-unit cell size.
    pub perfect_strike_radius: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            cell_gap: 2.0,
            units_per_inch: 306.0 / 17.0,
            surface_padding: 60.0,
            perfect_strike_radius: 60.0,
        }
    }
}

impl GeometryConfig {
    /// Cell size plus gap
    pub fn cell_pitch(&self) -> f64 {
        self.cell_size + self.cell_gap
    }

    /// Width of the full 3x3 grid
    pub fn grid_width(&self) -> f64 {
        3.0 * self.cell_size + 2.0 * self.cell_gap
    }

    /// Offset units to inches; 0 for degenerate scales or inputs
    pub fn to_inches(&self, units: f64) -> f64 {
        if self.units_per_inch <= 0.0 || !self.units_per_inch.is_finite() {
            return 0.0;
        }
        let inches = units / self.units_per_inch;
        if inches.is_finite() {
            inches
        } else {
            0.0
        }
    }
}
