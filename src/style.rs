//! Element styling derived from kind, part, and selection.
//!
//! Colors are never stored on an object. The renderer asks [`element_style`]
//! on every redraw, so a selection change is reflected immediately without
//! touching the objects themselves. [`Attributes`] carries the few host-level
//! overrides that `set_attributes` applies uniformly to all sub-elements.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BLUE, ORANGE, POINT_STROKE_WIDTH, PURPLE, RADIUS_HANDLE_STROKE, RED, SHAPE_OPACITY,
    SHAPE_STROKE_WIDTH,
};
use crate::doc::ObjectKind;
use crate::shape::Part;

/// Base color of a kind, or the selection accent when `selected`.
#[must_use]
pub fn color_for(kind: ObjectKind, selected: bool) -> &'static str {
    if selected {
        return BLUE;
    }
    match kind {
        ObjectKind::Vector => PURPLE,
        ObjectKind::Line => RED,
        ObjectKind::Circle => ORANGE,
    }
}

/// Resolved style of one sub-element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub stroke: &'static str,
    pub fill: &'static str,
    pub stroke_width: f64,
    pub opacity: f64,
    /// Draw an arrowhead at the second point (vector bodies only).
    pub last_arrow: bool,
    pub visible: bool,
}

/// Sparse host overrides applied to every sub-element of a composite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// A fixed composite ignores drags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
}

impl Attributes {
    /// Merge `other` into `self`; present fields win.
    pub fn merge(&mut self, other: &Attributes) {
        if let Some(v) = other.visible {
            self.visible = Some(v);
        }
        if let Some(w) = other.stroke_width {
            self.stroke_width = Some(w);
        }
        if let Some(o) = other.opacity {
            self.opacity = Some(o);
        }
        if let Some(f) = other.fixed {
            self.fixed = Some(f);
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed.unwrap_or(false)
    }
}

/// Style of `part` of a composite of `kind`.
#[must_use]
pub fn element_style(
    kind: ObjectKind,
    part: Part,
    selected: bool,
    overrides: &Attributes,
) -> ElementStyle {
    let color = color_for(kind, selected);
    let mut style = match part {
        Part::Body => ElementStyle {
            stroke: color,
            fill: "none",
            stroke_width: SHAPE_STROKE_WIDTH,
            opacity: SHAPE_OPACITY,
            last_arrow: kind == ObjectKind::Vector,
            visible: true,
        },
        // The radius handle keeps its own stroke so it stays distinguishable
        // from the center.
        Part::RadiusHandle => ElementStyle {
            stroke: RADIUS_HANDLE_STROKE,
            fill: color,
            stroke_width: SHAPE_STROKE_WIDTH,
            opacity: 1.0,
            last_arrow: false,
            visible: true,
        },
        Part::First | Part::Second | Part::Center => ElementStyle {
            stroke: color,
            fill: color,
            stroke_width: POINT_STROKE_WIDTH,
            opacity: 1.0,
            last_arrow: false,
            visible: true,
        },
    };
    if let Some(v) = overrides.visible {
        style.visible = v;
    }
    if let Some(w) = overrides.stroke_width {
        style.stroke_width = w;
    }
    if let Some(o) = overrides.opacity {
        style.opacity = o;
    }
    style
}
