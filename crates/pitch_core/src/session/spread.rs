//! # Location Spread
//!
//! Dispersion of a group of locations in the shared grid frame: the mean
//! point and the population standard deviation along each axis. This is the
//! numeric content behind a per-pitch heat-map ellipse.
//!
//! Units are grid offset units (see `GeometryConfig::units_per_inch`).

use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::zone::geometry::{finite_or_zero, to_absolute};
use crate::zone::ZonePosition;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationSpread {
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
}

impl LocationSpread {
    /// Average of the two axis deviations
    pub fn mean_std_dev(&self) -> f64 {
        (self.std_dev_x + self.std_dev_y) / 2.0
    }
}

/// Spread of the given positions; all zeros for an empty input
pub fn location_spread<'a, I>(positions: I, geometry: &GeometryConfig) -> LocationSpread
where
    I: IntoIterator<Item = &'a ZonePosition>,
{
    let points: Vec<_> = positions
        .into_iter()
        .filter(|p| p.is_finite())
        .map(|p| to_absolute(p, geometry))
        .collect();

    if points.is_empty() {
        return LocationSpread::default();
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
    let var_x = points.iter().map(|p| (p.x - mean_x).powi(2)).sum::<f64>() / n;
    let var_y = points.iter().map(|p| (p.y - mean_y).powi(2)).sum::<f64>() / n;

    LocationSpread {
        mean_x: finite_or_zero(mean_x),
        mean_y: finite_or_zero(mean_y),
        std_dev_x: finite_or_zero(var_x.sqrt()),
        std_dev_y: finite_or_zero(var_y.sqrt()),
    }
}
