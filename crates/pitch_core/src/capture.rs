//! # Capture Resolution
//!
//! Turns raw clicks on the charting surface into the two locations a pitch
//! is scored from.
//!
//! The surface is the 3x3 grid surrounded by a shadow margin of
//! `surface_padding` units. A click inside a cell arrives with that cell's
//! zone and local offset; a click in the margin arrives with only surface
//! coordinates and is attributed to the nearest cell, keeping an offset
//! that may fall outside 0-100.
//!
//! A ball click whose reported zone is not 1-9 is repaired: when it lies
//! within `perfect_strike_radius` of the target click it becomes the
//! target's exact location, otherwise the nearest cell is used.
//!
//! Hosts that hand over pitches as data use [`PitchInput`], which carries
//! either resolved zone positions or raw marks for each location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GeometryConfig;
use crate::error::{CommandError, Result};
use crate::pitch::PitchDescriptor;
use crate::session::PitchEvent;
use crate::zone::{Zone, ZonePosition};

/// Coordinate mapping for the padded capture surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeZoneSurface {
    padding: f64,
    cell_pitch: f64,
}

impl StrikeZoneSurface {
    pub fn new(geometry: &GeometryConfig) -> Self {
        Self {
            padding: geometry.surface_padding,
            cell_pitch: geometry.cell_pitch(),
        }
    }

    fn grid_index(&self, coord: f64) -> i64 {
        if self.cell_pitch <= 0.0 || !coord.is_finite() {
            return 1;
        }
        ((coord - self.padding) / self.cell_pitch).floor() as i64
    }

    /// Nearest cell to a surface point; margins clamp to the edge cells
    pub fn virtual_zone(&self, x: f64, y: f64) -> Zone {
        Zone::from_grid(self.grid_index(y), self.grid_index(x))
    }

    /// Surface point to a location relative to its nearest cell
    pub fn locate(&self, x: f64, y: f64) -> ZonePosition {
        let zone = self.virtual_zone(x, y);
        ZonePosition::new(
            zone,
            x - self.padding - zone.col_index() as f64 * self.cell_pitch,
            y - self.padding - zone.row_index() as f64 * self.cell_pitch,
        )
    }

    /// Inverse of [`locate`](Self::locate)
    pub fn surface_point(&self, pos: &ZonePosition) -> (f64, f64) {
        (
            self.padding + pos.zone.col_index() as f64 * self.cell_pitch + pos.x,
            self.padding + pos.zone.row_index() as f64 * self.cell_pitch + pos.y,
        )
    }
}

/// One click as reported by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMark {
    /// Reported zone number; anything outside 1-9 means "unknown"
    pub zone: i64,
    /// Offset inside the reported cell
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Same click in surface coordinates
    pub surface_x: f64,
    pub surface_y: f64,
}

impl RawMark {
    /// Click that landed inside a cell
    pub fn in_cell(surface: &StrikeZoneSurface, zone: Zone, x: f64, y: f64) -> Self {
        let (surface_x, surface_y) = surface.surface_point(&ZonePosition::new(zone, x, y));
        Self {
            zone: zone.number() as i64,
            x,
            y,
            surface_x,
            surface_y,
        }
    }

    /// Click that landed in the shadow margin
    pub fn on_surface(surface: &StrikeZoneSurface, surface_x: f64, surface_y: f64) -> Self {
        let pos = surface.locate(surface_x, surface_y);
        Self {
            zone: pos.zone.number() as i64,
            x: pos.x,
            y: pos.y,
            surface_x,
            surface_y,
        }
    }

    /// Click whose zone could not be determined
    pub fn unresolved(surface_x: f64, surface_y: f64) -> Self {
        Self {
            zone: 0,
            x: f64::NAN,
            y: f64::NAN,
            surface_x,
            surface_y,
        }
    }

    pub fn has_valid_zone(&self) -> bool {
        Zone::new(self.zone).is_some()
    }

    fn surface_distance(&self, other: &RawMark) -> f64 {
        let d = (self.surface_x - other.surface_x).hypot(self.surface_y - other.surface_y);
        if d.is_finite() {
            d
        } else {
            f64::INFINITY
        }
    }
}

/// How a location was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Reported zone was valid and used as is
    Reported,
    /// Invalid ball zone close enough to the target to count as a hit
    PerfectStrike,
    /// Invalid zone replaced by the cell nearest to the surface click
    NearestCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub position: ZonePosition,
    pub resolution: Resolution,
}

fn nearest_cell(mark: &RawMark, surface: &StrikeZoneSurface) -> ZonePosition {
    surface.locate(mark.surface_x, mark.surface_y)
}

/// Location of a catcher target click
pub fn resolve_target(target: &RawMark, geometry: &GeometryConfig) -> ResolvedLocation {
    match Zone::new(target.zone) {
        Some(zone) => ResolvedLocation {
            position: ZonePosition::new(zone, target.x, target.y),
            resolution: Resolution::Reported,
        },
        None => {
            let position = nearest_cell(target, &StrikeZoneSurface::new(geometry));
            warn!(
                reported = target.zone,
                zone = position.zone.number(),
                "target zone invalid, using nearest cell"
            );
            ResolvedLocation {
                position,
                resolution: Resolution::NearestCell,
            }
        }
    }
}

/// Location of a ball click, repairing an invalid zone
pub fn resolve_ball_location(
    target: &RawMark,
    ball: &RawMark,
    geometry: &GeometryConfig,
) -> ResolvedLocation {
    if let Some(zone) = Zone::new(ball.zone) {
        return ResolvedLocation {
            position: ZonePosition::new(zone, ball.x, ball.y),
            resolution: Resolution::Reported,
        };
    }

    let click_distance = ball.surface_distance(target);
    if click_distance <= geometry.perfect_strike_radius {
        warn!(
            reported = ball.zone,
            click_distance, "invalid ball zone resolved as perfect strike"
        );
        return ResolvedLocation {
            position: resolve_target(target, geometry).position,
            resolution: Resolution::PerfectStrike,
        };
    }

    let position = nearest_cell(ball, &StrikeZoneSurface::new(geometry));
    warn!(
        reported = ball.zone,
        click_distance,
        zone = position.zone.number(),
        "invalid ball zone, using nearest cell"
    );
    ResolvedLocation {
        position,
        resolution: Resolution::NearestCell,
    }
}

/// A pitch as delivered by a host. Each location is either a resolved zone
/// position or a raw mark; a position wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchInput {
    #[serde(flatten)]
    pub descriptor: PitchDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catcher_target: Option<ZonePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball_location: Option<ZonePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_mark: Option<RawMark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball_mark: Option<RawMark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PitchInput {
    /// Resolve both locations into a scoreable event
    pub fn resolve(&self, geometry: &GeometryConfig) -> Result<PitchEvent> {
        let target_mark = match (self.target_mark, self.catcher_target) {
            (Some(mark), _) => mark,
            (None, Some(pos)) => {
                RawMark::in_cell(&StrikeZoneSurface::new(geometry), pos.zone, pos.x, pos.y)
            }
            (None, None) => return Err(CommandError::MissingLocation("catcher_target")),
        };
        let catcher_target = match self.catcher_target {
            Some(pos) => pos,
            None => resolve_target(&target_mark, geometry).position,
        };
        let ball_location = match (self.ball_location, self.ball_mark) {
            (Some(pos), _) => pos,
            (None, Some(mark)) => resolve_ball_location(&target_mark, &mark, geometry).position,
            (None, None) => return Err(CommandError::MissingLocation("ball_location")),
        };

        Ok(PitchEvent {
            descriptor: self.descriptor,
            catcher_target,
            ball_location,
            timestamp: self.timestamp,
        })
    }
}

impl From<PitchEvent> for PitchInput {
    fn from(event: PitchEvent) -> Self {
        Self {
            descriptor: event.descriptor,
            catcher_target: Some(event.catcher_target),
            ball_location: Some(event.ball_location),
            target_mark: None,
            ball_mark: None,
            timestamp: event.timestamp,
        }
    }
}

/// Where the two-click capture currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureStep {
    AwaitingTarget,
    AwaitingBall { target: RawMark },
}

/// Two-click pitch capture: catcher target first, then ball location
#[derive(Debug, Clone)]
pub struct PitchCapture {
    geometry: GeometryConfig,
    descriptor: PitchDescriptor,
    step: CaptureStep,
}

impl PitchCapture {
    pub fn new(geometry: GeometryConfig) -> Self {
        Self {
            geometry,
            descriptor: PitchDescriptor::default(),
            step: CaptureStep::AwaitingTarget,
        }
    }

    pub fn surface(&self) -> StrikeZoneSurface {
        StrikeZoneSurface::new(&self.geometry)
    }

    pub fn step(&self) -> &CaptureStep {
        &self.step
    }

    pub fn descriptor(&self) -> PitchDescriptor {
        self.descriptor
    }

    /// Pitch type and handedness applied to the next completed pitch
    pub fn set_descriptor(&mut self, descriptor: PitchDescriptor) {
        self.descriptor = descriptor;
    }

    /// Feed one click. Returns the finished pitch on the ball click.
    pub fn mark(&mut self, mark: RawMark) -> Option<PitchEvent> {
        match self.step {
            CaptureStep::AwaitingTarget => {
                self.step = CaptureStep::AwaitingBall { target: mark };
                None
            }
            CaptureStep::AwaitingBall { target } => {
                let catcher_target = resolve_target(&target, &self.geometry).position;
                let ball_location = resolve_ball_location(&target, &mark, &self.geometry).position;
                self.step = CaptureStep::AwaitingTarget;
                Some(PitchEvent::new(
                    self.descriptor,
                    catcher_target,
                    ball_location,
                ))
            }
        }
    }

    /// Drop a half-captured pitch
    pub fn clear(&mut self) {
        self.step = CaptureStep::AwaitingTarget;
    }
}

impl Default for PitchCapture {
    fn default() -> Self {
        Self::new(GeometryConfig::default())
    }
}
