//! Document model: object identity, primitive kinds, and persisted state records.
//!
//! An [`ObjectState`] is the minimal geometry a composite needs to be rebuilt:
//! the free control points of a vector or line, or the center and radius of a
//! circle. It is both what the composite reports from `state()` and what the
//! factories accept. Field names and the `type` tag match the stored answer
//! format, e.g.
//!
//! ```json
//! { "type": "flexvector", "id": "id3fa9", "coordsFirst": [0, 0], "coordsSecond": [2, 1] }
//! { "type": "flexcircle", "id": "id81c2", "coordsCenter": [0, 0], "radius": 1 }
//! ```

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::Point;

/// Stable, opaque object identity. Issued once and preserved verbatim
/// through every save/restore cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The variant of a composite object. Fixed for the object's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Arrow from a first (tail) point to a second (tip) point.
    #[serde(rename = "flexvector")]
    Vector,
    /// Infinite line through two points.
    #[serde(rename = "flexline")]
    Line,
    /// Circle given by a center and a radius-defining point.
    #[serde(rename = "flexcircle")]
    Circle,
}

impl ObjectKind {
    /// Wire name of the kind, as used in the `type` tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vector => "flexvector",
            Self::Line => "flexline",
            Self::Circle => "flexcircle",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted minimal geometry of one composite object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectState {
    #[serde(rename = "flexvector", rename_all = "camelCase")]
    Vector {
        id: ObjectId,
        coords_first: Point,
        coords_second: Point,
    },
    #[serde(rename = "flexline", rename_all = "camelCase")]
    Line {
        id: ObjectId,
        coords_first: Point,
        coords_second: Point,
    },
    /// On restore `radius` also positions the radius handle. The live circle
    /// keeps it as stored until the handle is moved.
    #[serde(rename = "flexcircle", rename_all = "camelCase")]
    Circle {
        id: ObjectId,
        coords_center: Point,
        radius: f64,
    },
}

impl ObjectState {
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        match self {
            Self::Vector { id, .. } | Self::Line { id, .. } | Self::Circle { id, .. } => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Vector { .. } => ObjectKind::Vector,
            Self::Line { .. } => ObjectKind::Line,
            Self::Circle { .. } => ObjectKind::Circle,
        }
    }

    /// The same geometry under a different identity.
    #[must_use]
    pub fn with_id(mut self, new_id: ObjectId) -> Self {
        match &mut self {
            Self::Vector { id, .. } | Self::Line { id, .. } | Self::Circle { id, .. } => {
                *id = new_id;
            }
        }
        self
    }
}
