//! Coordinate layer: Cartesian points, polar form, and axis-label semantics.
//!
//! Board coordinates are plain Cartesian `(x, y)`. The polar form shown to the
//! user is derived from them with [`to_polar`], then passed through
//! [`display_polar`], which applies the axis-label correction: when the y
//! axis is labelled `Re` the diagram is rotated by −90° relative to the usual
//! complex plane, so every displayed angle is reduced by 90°. The correction
//! is display-only and never touches stored coordinates.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::RE_AXIS_ANGLE_CORRECTION;

/// A point in board coordinates. Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// This point shifted by `delta`.
    #[must_use]
    pub fn offset(self, delta: Self) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Magnitude and angle (degrees) of a point seen from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: f64,
}

/// Convert a magnitude and an angle in degrees to Cartesian coordinates.
#[must_use]
pub fn to_cartesian(magnitude: f64, angle_degrees: f64) -> Point {
    let rad = angle_degrees.to_radians();
    Point {
        x: magnitude * rad.cos(),
        y: magnitude * rad.sin(),
    }
}

/// Convert Cartesian coordinates to polar form with the angle in `[0, 360)`.
///
/// Branches on the sign of `x` in a fixed order: `x >= 0` (including `x == 0`,
/// where `atan(±inf)` yields 90° or 270°) first, then `x < 0`. The origin has
/// no direction and reports angle 0.
#[must_use]
pub fn to_polar(p: Point) -> Polar {
    let magnitude = p.x.hypot(p.y);
    if magnitude == 0.0 {
        return Polar {
            magnitude,
            angle: 0.0,
        };
    }
    let slope_deg = (p.y / p.x).atan().to_degrees();
    let angle = if p.x >= 0.0 {
        (360.0 + slope_deg).rem_euclid(360.0)
    } else if p.x < 0.0 {
        180.0 + slope_deg
    } else {
        0.0
    };
    Polar { magnitude, angle }
}

/// What a screen axis represents, as chosen in the axis-label dropdowns.
///
/// The discriminants are the dropdown indices stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLabel {
    #[default]
    NoChoice = 0,
    NegIm = 1,
    NegRe = 2,
    Im = 3,
    Re = 4,
}

impl AxisLabel {
    /// Map a (possibly fractional) dropdown index to a label. Out-of-range
    /// values map to [`AxisLabel::NoChoice`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_index(index: f64) -> Self {
        // NaN casts to 0.
        match index.round() as i64 {
            1 => Self::NegIm,
            2 => Self::NegRe,
            3 => Self::Im,
            4 => Self::Re,
            _ => Self::NoChoice,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Label text as shown in the dropdown (without the unit).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoChoice => "",
            Self::NegIm => "-Im",
            Self::NegRe => "-Re",
            Self::Im => "Im",
            Self::Re => "Re",
        }
    }

    /// The signed raw component this label assigns to `raw`, if any.
    fn component(self, raw: Point) -> Option<f64> {
        match self {
            Self::NoChoice => None,
            Self::NegIm => Some(-raw.y),
            Self::NegRe => Some(-raw.x),
            Self::Im => Some(raw.y),
            Self::Re => Some(raw.x),
        }
    }
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown axis label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis label `{0}` (expected -Im, -Re, Im or Re)")]
pub struct ParseAxisLabelError(String);

impl FromStr for AxisLabel {
    type Err = ParseAxisLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "nochoice" => Ok(Self::NoChoice),
            "-Im" => Ok(Self::NegIm),
            "-Re" => Ok(Self::NegRe),
            "Im" => Ok(Self::Im),
            "Re" => Ok(Self::Re),
            other => Err(ParseAxisLabelError(other.to_owned())),
        }
    }
}

/// The label pair for the x and y screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisLabels {
    pub x: AxisLabel,
    pub y: AxisLabel,
}

impl AxisLabels {
    #[must_use]
    pub fn new(x: AxisLabel, y: AxisLabel) -> Self {
        Self { x, y }
    }

    /// Decode the host's bound point `(xIndex, yIndex)`.
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        Self {
            x: AxisLabel::from_index(p.x),
            y: AxisLabel::from_index(p.y),
        }
    }

    /// Encode as the host's bound point `(xIndex, yIndex)`.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x.index()), f64::from(self.y.index()))
    }

    /// Whether displayed angles need the `Re`-on-y correction.
    #[must_use]
    pub fn corrects_angle(self) -> bool {
        self.y == AxisLabel::Re
    }
}

/// Apply the axis-label display correction to a polar value.
#[must_use]
pub fn correct_for_axes(polar: Polar, axes: AxisLabels) -> Polar {
    if axes.corrects_angle() {
        Polar {
            magnitude: polar.magnitude,
            angle: (polar.angle - RE_AXIS_ANGLE_CORRECTION).rem_euclid(360.0),
        }
    } else {
        polar
    }
}

/// Polar form of `p` as it is shown to the user under `axes`.
#[must_use]
pub fn display_polar(p: Point, axes: AxisLabels) -> Polar {
    correct_for_axes(to_polar(p), axes)
}

/// Remap raw board coordinates to the signed components named by `axes`.
///
/// The first result component is what the x axis label denotes, the second
/// what the y axis label denotes; e.g. with `(-Im, Re)` the point `(x, y)`
/// becomes `(-y, x)`. A component whose label is "no choice" is `None`.
#[must_use]
pub fn interpret_coords(raw: Point, axes: AxisLabels) -> [Option<f64>; 2] {
    [axes.x.component(raw), axes.y.component(raw)]
}
