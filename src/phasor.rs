//! Phasor diagram: a fixed list of free endpoints drawn as labelled arrows.
//!
//! Endpoints come in consecutive pairs; pair `j` is the arrow from point
//! `2j` to point `2j + 1`. A trailing unpaired point is drawn but has no
//! arrow. Only the tip of an arrow shows its hover label, placed on the
//! arrow's midpoint. The endpoint list is published to its own answer field
//! as `[[x, y], ...]` and restored from it when the lengths agree.

#[cfg(test)]
#[path = "phasor_test.rs"]
mod phasor_test;

use crate::config::BoardOptions;
use crate::coords::{AxisLabels, Point};
use crate::error::SceneError;
use crate::readout::Readout;

/// Which side of its tip an arrow's name is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// One arrow of the diagram, read from the current endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorArrow<'a> {
    pub index: usize,
    pub tail: Point,
    pub tip: Point,
    /// Name from the options; `None` when fewer names than arrows were given.
    pub label: Option<&'a str>,
}

impl PhasorArrow<'_> {
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.tail.x + self.tip.x) / 2.0,
            (self.tail.y + self.tip.y) / 2.0,
        )
    }

    /// Tips on or left of the y axis carry their name on the left.
    #[must_use]
    pub fn label_side(&self) -> LabelSide {
        if self.tip.x <= 0.0 {
            LabelSide::Left
        } else {
            LabelSide::Right
        }
    }

    /// Magnitude and displayed angle of `tip - tail` under `axes`.
    #[must_use]
    pub fn readout(&self, axes: AxisLabels) -> Readout {
        Readout::phasor(self.tail, self.tip, axes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhasorDiagram {
    points: Vec<Point>,
    labels: Vec<String>,
}

impl PhasorDiagram {
    #[must_use]
    pub fn new(points: Vec<Point>, labels: Vec<String>) -> Self {
        Self { points, labels }
    }

    /// The diagram configured by `options`, or `None` when it is switched off.
    #[must_use]
    pub fn from_options(options: &BoardOptions) -> Option<Self> {
        if !options.with_phasor_diagram {
            return None;
        }
        let labels = options.vector_labels.clone();
        Some(Self::new(options.phasor_points.clone(), labels))
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn arrow_count(&self) -> usize {
        self.points.len() / 2
    }

    #[must_use]
    pub fn arrow(&self, index: usize) -> Option<PhasorArrow<'_>> {
        let tail = *self.points.get(2 * index)?;
        let tip = *self.points.get(2 * index + 1)?;
        Some(PhasorArrow {
            index,
            tail,
            tip,
            label: self.labels.get(index).map(String::as_str),
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = PhasorArrow<'_>> {
        (0..self.arrow_count()).filter_map(|index| self.arrow(index))
    }

    /// The arrow whose tip is endpoint `point_index`, if any.
    #[must_use]
    pub fn arrow_of_tip(&self, point_index: usize) -> Option<usize> {
        let is_tip = point_index % 2 == 1 && point_index < self.points.len();
        is_tip.then_some(point_index / 2)
    }

    /// Move endpoint `index` to `to`. Returns `false` for an unknown index.
    pub fn move_point(&mut self, index: usize, to: Point) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = to;
                true
            }
            None => false,
        }
    }

    /// Move endpoint `index` by `delta`. Returns `false` for an unknown index.
    pub fn drag_point(&mut self, index: usize, delta: Point) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = point.offset(delta);
                true
            }
            None => false,
        }
    }

    /// Endpoint list as stored in the phasor field.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn field_text(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(&self.points)?)
    }

    /// Replace the endpoints with the stored field text. Blank text keeps the
    /// configured endpoints and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] for malformed text and
    /// [`SceneError::PhasorLength`] when the stored list does not have one
    /// entry per endpoint. The endpoints are unchanged on error.
    pub fn restore(&mut self, text: &str) -> Result<bool, SceneError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let points: Vec<Point> = serde_json::from_str(text)?;
        if points.len() != self.points.len() {
            return Err(SceneError::PhasorLength {
                expected: self.points.len(),
                found: points.len(),
            });
        }
        self.points = points;
        Ok(true)
    }
}
