//! Composite objects: free control points plus the shape derived from them.
//!
//! A [`Composite`] owns only its free points. The rendered segment, line, or
//! circle is recomputed from them on demand by [`Composite::derived`], and the
//! persisted record is produced by [`Composite::state`]. Hosts address the
//! rendered sub-elements through [`ElementRef`]s, which is how pointer events
//! are routed back to the owning object.
//!
//! Circle drag rules: moving the center translates both points (the radius is
//! kept), moving the radius handle changes only the radius and the handle's
//! angle around the center. The radius is held as a value of its own and is
//! only re-measured when the handle moves, so a restored radius is saved back
//! bit for bit.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::coords::Point;
use crate::doc::{ObjectId, ObjectKind, ObjectState};
use crate::style::{Attributes, ElementStyle, element_style};

/// A rendered sub-element of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// First free point of a vector (tail) or line.
    First,
    /// Second free point of a vector (tip) or line.
    Second,
    /// Center point of a circle.
    Center,
    /// Radius-defining point of a circle.
    RadiusHandle,
    /// The derived segment, line, or circle.
    Body,
}

const TWO_POINT_PARTS: [Part; 3] = [Part::First, Part::Second, Part::Body];
const CIRCLE_PARTS: [Part; 3] = [Part::Center, Part::RadiusHandle, Part::Body];

/// Address of one sub-element on the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub object_id: ObjectId,
    pub part: Part,
}

impl ElementRef {
    #[must_use]
    pub fn new(object_id: ObjectId, part: Part) -> Self {
        Self { object_id, part }
    }
}

/// The free control points of a composite.
///
/// A circle keeps its radius handle as an offset from the center, plus the
/// radius itself. `radius` equals the offset's length up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Vector { first: Point, second: Point },
    Line { first: Point, second: Point },
    Circle {
        center: Point,
        handle_offset: Point,
        radius: f64,
    },
}

impl Geometry {
    /// Circle whose radius handle sits at `radius_point`.
    #[must_use]
    pub fn circle(center: Point, radius_point: Point) -> Self {
        Self::Circle {
            center,
            handle_offset: radius_point.minus(center),
            radius: center.distance(radius_point),
        }
    }
}

/// Shape rendered from the free points. Never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedShape {
    /// Directed segment `from -> to`, drawn with an arrowhead at `to`.
    Arrow { from: Point, to: Point },
    /// Infinite line through both points.
    Line { through: [Point; 2] },
    Circle { center: Point, radius: f64 },
}

/// A user-manipulable vector, line, or circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    id: ObjectId,
    geometry: Geometry,
    attributes: Attributes,
}

impl Composite {
    #[must_use]
    pub fn new(id: ObjectId, geometry: Geometry) -> Self {
        Self {
            id,
            geometry,
            attributes: Attributes::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self.geometry {
            Geometry::Vector { .. } => ObjectKind::Vector,
            Geometry::Line { .. } => ObjectKind::Line,
            Geometry::Circle { .. } => ObjectKind::Circle,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Sub-elements this composite renders, in creation order.
    #[must_use]
    pub fn parts(&self) -> &'static [Part] {
        match self.geometry {
            Geometry::Vector { .. } | Geometry::Line { .. } => &TWO_POINT_PARTS,
            Geometry::Circle { .. } => &CIRCLE_PARTS,
        }
    }

    /// Host addresses of every sub-element.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementRef> {
        self.parts()
            .iter()
            .map(|part| ElementRef::new(self.id.clone(), *part))
            .collect()
    }

    #[must_use]
    pub fn has_part(&self, part: Part) -> bool {
        self.parts().contains(&part)
    }

    /// Current position of a free point, `None` for the body or a part this
    /// kind does not have.
    #[must_use]
    pub fn point(&self, part: Part) -> Option<Point> {
        match (self.geometry, part) {
            (Geometry::Vector { first, .. } | Geometry::Line { first, .. }, Part::First) => {
                Some(first)
            }
            (Geometry::Vector { second, .. } | Geometry::Line { second, .. }, Part::Second) => {
                Some(second)
            }
            (Geometry::Circle { center, .. }, Part::Center) => Some(center),
            (
                Geometry::Circle {
                    center,
                    handle_offset,
                    ..
                },
                Part::RadiusHandle,
            ) => Some(center.offset(handle_offset)),
            _ => None,
        }
    }

    /// The point that lands on the origin when duplicating.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match self.geometry {
            Geometry::Vector { first, .. } | Geometry::Line { first, .. } => first,
            Geometry::Circle { center, .. } => center,
        }
    }

    /// Live radius of a circle.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        match self.geometry {
            Geometry::Circle { radius, .. } => Some(radius),
            _ => None,
        }
    }

    #[must_use]
    pub fn derived(&self) -> DerivedShape {
        match self.geometry {
            Geometry::Vector { first, second } => DerivedShape::Arrow {
                from: first,
                to: second,
            },
            Geometry::Line { first, second } => DerivedShape::Line {
                through: [first, second],
            },
            Geometry::Circle { center, radius, .. } => DerivedShape::Circle { center, radius },
        }
    }

    /// Minimal persisted geometry, read fresh from the points.
    #[must_use]
    pub fn state(&self) -> ObjectState {
        let id = self.id.clone();
        match self.geometry {
            Geometry::Vector { first, second } => ObjectState::Vector {
                id,
                coords_first: first,
                coords_second: second,
            },
            Geometry::Line { first, second } => ObjectState::Line {
                id,
                coords_first: first,
                coords_second: second,
            },
            Geometry::Circle { center, radius, .. } => ObjectState::Circle {
                id,
                coords_center: center,
                radius,
            },
        }
    }

    /// Move `part` by `delta`. Returns `false` when nothing moved (fixed
    /// composite or a part this kind does not have).
    pub fn drag(&mut self, part: Part, delta: Point) -> bool {
        if self.attributes.is_fixed() || !self.has_part(part) {
            return false;
        }
        match (&mut self.geometry, part) {
            (Geometry::Vector { first, .. } | Geometry::Line { first, .. }, Part::First) => {
                *first = first.offset(delta);
            }
            (Geometry::Vector { second, .. } | Geometry::Line { second, .. }, Part::Second) => {
                *second = second.offset(delta);
            }
            (
                Geometry::Circle {
                    handle_offset,
                    radius,
                    ..
                },
                Part::RadiusHandle,
            ) => {
                *handle_offset = handle_offset.offset(delta);
                *radius = Point::ORIGIN.distance(*handle_offset);
            }
            // Center and body translate the whole shape.
            (Geometry::Vector { first, second } | Geometry::Line { first, second }, _) => {
                *first = first.offset(delta);
                *second = second.offset(delta);
            }
            (Geometry::Circle { center, .. }, _) => {
                *center = center.offset(delta);
            }
        }
        true
    }

    /// Move a free point to an absolute position, applying the same rules as
    /// [`Composite::drag`]. The body has no position and is rejected.
    pub fn move_to(&mut self, part: Part, to: Point) -> bool {
        let Some(current) = self.point(part) else {
            return false;
        };
        if part == Part::RadiusHandle && !self.attributes.is_fixed() {
            // Measured from `to` directly so the radius is exact.
            if let Geometry::Circle { center, .. } = self.geometry {
                self.geometry = Geometry::circle(center, to);
                return true;
            }
        }
        self.drag(part, to.minus(current))
    }

    /// Merge host overrides into this composite's attributes.
    pub fn set_attributes(&mut self, attributes: &Attributes) {
        self.attributes.merge(attributes);
    }

    /// Resolved style of one sub-element.
    #[must_use]
    pub fn style(&self, part: Part, selected: bool) -> ElementStyle {
        element_style(self.kind(), part, selected, &self.attributes)
    }

    /// A copy under `new_id` translated so the anchor sits on the origin.
    /// Shape and size are preserved; host attributes are not copied.
    #[must_use]
    pub fn duplicate_at_origin(&self, new_id: ObjectId) -> Self {
        let shift = Point::ORIGIN.minus(self.anchor());
        let geometry = match self.geometry {
            Geometry::Vector { first, second } => Geometry::Vector {
                first: first.offset(shift),
                second: second.offset(shift),
            },
            Geometry::Line { first, second } => Geometry::Line {
                first: first.offset(shift),
                second: second.offset(shift),
            },
            Geometry::Circle {
                handle_offset,
                radius,
                ..
            } => Geometry::Circle {
                center: Point::ORIGIN,
                handle_offset,
                radius,
            },
        };
        Self::new(new_id, geometry)
    }

    /// Consume the composite, returning the sub-elements the host must remove.
    #[must_use]
    pub fn release(self) -> Vec<ElementRef> {
        self.elements()
    }
}
