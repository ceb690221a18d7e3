//! Factories that build composites from state records.
//!
//! Fresh objects and restored objects go through the same path: a state
//! record (default or stored) is turned into live free points by
//! [`create_from_state`]. A circle record only carries its radius, so the
//! radius handle is placed at 45° from the center.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use crate::consts::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_LINE_SECOND, DEFAULT_VECTOR_SECOND, RADIUS_HANDLE_ANGLE,
};
use crate::coords::Point;
use crate::doc::{ObjectId, ObjectKind, ObjectState};
use crate::shape::{Composite, Geometry};

/// Default state of a freshly added object of `kind`.
#[must_use]
pub fn default_state(kind: ObjectKind, id: ObjectId) -> ObjectState {
    match kind {
        ObjectKind::Vector => ObjectState::Vector {
            id,
            coords_first: Point::ORIGIN,
            coords_second: Point::from(DEFAULT_VECTOR_SECOND),
        },
        ObjectKind::Line => ObjectState::Line {
            id,
            coords_first: Point::ORIGIN,
            coords_second: Point::from(DEFAULT_LINE_SECOND),
        },
        ObjectKind::Circle => circle_state(id, Point::ORIGIN, DEFAULT_CIRCLE_RADIUS),
    }
}

/// State of a circle at `center` with `radius`.
#[must_use]
pub fn circle_state(id: ObjectId, center: Point, radius: f64) -> ObjectState {
    ObjectState::Circle {
        id,
        coords_center: center,
        radius,
    }
}

/// Offset of the radius handle from the center of a circle with `radius`.
#[must_use]
pub fn radius_handle_offset(radius: f64) -> Point {
    Point::new(
        RADIUS_HANDLE_ANGLE.cos() * radius,
        RADIUS_HANDLE_ANGLE.sin() * radius,
    )
}

/// Where the radius handle of a circle at `center` with `radius` is placed.
#[must_use]
pub fn radius_handle_position(center: Point, radius: f64) -> Point {
    center.offset(radius_handle_offset(radius))
}

/// Build the live composite described by `state`, keeping its id.
#[must_use]
pub fn create_from_state(state: &ObjectState) -> Composite {
    match state {
        ObjectState::Vector {
            id,
            coords_first,
            coords_second,
        } => Composite::new(
            id.clone(),
            Geometry::Vector {
                first: *coords_first,
                second: *coords_second,
            },
        ),
        ObjectState::Line {
            id,
            coords_first,
            coords_second,
        } => Composite::new(
            id.clone(),
            Geometry::Line {
                first: *coords_first,
                second: *coords_second,
            },
        ),
        ObjectState::Circle {
            id,
            coords_center,
            radius,
        } => Composite::new(
            id.clone(),
            Geometry::Circle {
                center: *coords_center,
                handle_offset: radius_handle_offset(*radius),
                radius: *radius,
            },
        ),
    }
}
