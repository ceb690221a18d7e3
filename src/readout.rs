//! Read-outs shown next to the pointer and on measurement labels.
//!
//! The generic read-out shows the Cartesian position and its displayed polar
//! form. While a circle's radius handle is hovered it is replaced by the
//! distance from that circle's center. Hovering a phasor's tip shows that
//! phasor's magnitude and displayed angle. The tape and angle measures carry
//! a label of their own.

#[cfg(test)]
#[path = "readout_test.rs"]
mod readout_test;

use std::f64::consts::TAU;

use crate::consts::{PHASOR_UNIT, TAPE_LABEL};
use crate::coords::{AxisLabels, Point, display_polar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Readout {
    Coordinates {
        x: f64,
        y: f64,
        magnitude: f64,
        angle: f64,
    },
    Radius(f64),
    Phasor {
        magnitude: f64,
        angle: f64,
    },
    Tape(f64),
    Angle(f64),
}

impl Readout {
    /// Generic read-out of `at` under `axes`.
    #[must_use]
    pub fn coordinates(at: Point, axes: AxisLabels) -> Self {
        let polar = display_polar(at, axes);
        Self::Coordinates {
            x: at.x,
            y: at.y,
            magnitude: polar.magnitude,
            angle: polar.angle,
        }
    }

    /// Radius read-out: distance from `center` to `at`.
    #[must_use]
    pub fn radius(center: Point, at: Point) -> Self {
        Self::Radius(center.distance(at))
    }

    /// Phasor read-out of the arrow `tail -> tip` under `axes`.
    #[must_use]
    pub fn phasor(tail: Point, tip: Point, axes: AxisLabels) -> Self {
        let polar = display_polar(tip.minus(tail), axes);
        Self::Phasor {
            magnitude: polar.magnitude,
            angle: polar.angle,
        }
    }

    /// Tape measure read-out: length of `from -> to`.
    #[must_use]
    pub fn tape(from: Point, to: Point) -> Self {
        Self::Tape(from.distance(to))
    }

    /// Angle measure read-out, swept counter-clockwise at `center` from the
    /// ray through `start` to the ray through `end`, in `[0, 360)`.
    #[must_use]
    pub fn angle(start: Point, center: Point, end: Point) -> Self {
        let from = (start.y - center.y).atan2(start.x - center.x);
        let to = (end.y - center.y).atan2(end.x - center.x);
        Self::Angle((to - from).rem_euclid(TAU).to_degrees())
    }

    /// Text with every number rounded to `digits` decimals.
    #[must_use]
    pub fn text(&self, digits: usize) -> String {
        match *self {
            Self::Coordinates {
                x,
                y,
                magnitude,
                angle,
            } => {
                let cartesian = format!("(x= {x:.digits$}, y= {y:.digits$})");
                format!("{cartesian} (r= {magnitude:.digits$}, φ= {angle:.digits$}°)")
            }
            Self::Radius(r) => format!("Radius: {r:.digits$}"),
            Self::Phasor { magnitude, angle } => {
                format!("{magnitude:.digits$} {PHASOR_UNIT}, {angle:.digits$}°")
            }
            Self::Tape(length) => format!("{TAPE_LABEL} = {length:.digits$}"),
            Self::Angle(degrees) => format!("φ = {degrees:.digits$}°"),
        }
    }
}
