//! Scene codec: registry and marks to stored text and back.
//!
//! DESIGN
//! ======
//! `save` produces three independent outputs. The scene record holds every
//! entry's minimal state plus the selection and both roles; it is the only
//! thing read back on the next session. The locus and operating-point
//! summaries are projections for the grader and are never read back.
//!
//! `decode` treats empty input (no text, `""`, or `null`) as a cold start.
//! Anything else must be a well-formed record: ids unique, every entry key
//! equal to its state id, no negative radius. Selection or roles naming an
//! id that is not among the entries are dropped with a warning rather than
//! rejected, since the entries themselves are intact.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::config::BoardOptions;
use crate::consts::{UNSET_RADIUS, UNSET_ROLE};
use crate::coords::Point;
use crate::doc::{ObjectId, ObjectKind, ObjectState};
use crate::error::SceneError;
use crate::registry::Registry;
use crate::selection::{Marks, Role};
use crate::shape::{Geometry, Part};

/// Persisted form of a whole scene.
///
/// Records written by older boards use `objMap`, `selectedID`, `sokID`, and
/// `bpID`; those are accepted on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    #[serde(default, alias = "objMap")]
    pub entries: Vec<(ObjectId, ObjectState)>,
    #[serde(default, alias = "selectedID")]
    pub selected_id: Option<ObjectId>,
    #[serde(default, alias = "sokID")]
    pub locus_id: Role,
    #[serde(default, alias = "bpID")]
    pub point_id: Role,
}

impl SceneRecord {
    /// Snapshot of the live scene.
    #[must_use]
    pub fn capture(registry: &Registry, marks: &Marks) -> Self {
        Self {
            entries: registry.serialize_all(),
            selected_id: marks.selected.clone(),
            locus_id: marks.locus.clone(),
            point_id: marks.point.clone(),
        }
    }
}

const NO_COORDS: [f64; 0] = [];

/// Locus summary for the grader: `[type | "-1", center | [], radius | -1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocusSummary {
    Unset,
    Circle {
        center: Point,
        radius: f64,
    },
    /// A non-circle was marked; published as `[type, null, -1]`.
    Other(ObjectKind),
}

impl Serialize for LocusSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        match self {
            Self::Unset => {
                tuple.serialize_element(UNSET_ROLE)?;
                tuple.serialize_element(&NO_COORDS)?;
                tuple.serialize_element(&UNSET_RADIUS)?;
            }
            Self::Circle { center, radius } => {
                tuple.serialize_element(&ObjectKind::Circle)?;
                tuple.serialize_element(center)?;
                tuple.serialize_element(radius)?;
            }
            Self::Other(kind) => {
                tuple.serialize_element(kind)?;
                tuple.serialize_element(&Option::<Point>::None)?;
                tuple.serialize_element(&UNSET_RADIUS)?;
            }
        }
        tuple.end()
    }
}

/// Operating-point summary for the grader: `[type | "-1", start | [], end | []]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointSummary {
    Unset,
    Vector {
        start: Point,
        end: Point,
    },
    /// A non-vector was marked; published as `[type, null, null]`.
    Other(ObjectKind),
}

impl Serialize for PointSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        match self {
            Self::Unset => {
                tuple.serialize_element(UNSET_ROLE)?;
                tuple.serialize_element(&NO_COORDS)?;
                tuple.serialize_element(&NO_COORDS)?;
            }
            Self::Vector { start, end } => {
                tuple.serialize_element(&ObjectKind::Vector)?;
                tuple.serialize_element(start)?;
                tuple.serialize_element(end)?;
            }
            Self::Other(kind) => {
                tuple.serialize_element(kind)?;
                tuple.serialize_element(&Option::<Point>::None)?;
                tuple.serialize_element(&Option::<Point>::None)?;
            }
        }
        tuple.end()
    }
}

/// Locus projection, or `None` when nothing is to be published: the role is
/// unset and the locus toggle is not shown, or it names a missing object.
#[must_use]
pub fn locus_summary(
    registry: &Registry,
    marks: &Marks,
    options: &BoardOptions,
) -> Option<LocusSummary> {
    let Some(id) = marks.locus.id() else {
        return options.check_locus.then_some(LocusSummary::Unset);
    };
    let composite = registry.get(id)?;
    let circle = composite.point(Part::Center).zip(composite.radius());
    Some(match circle {
        Some((center, radius)) => LocusSummary::Circle { center, radius },
        None => LocusSummary::Other(composite.kind()),
    })
}

/// Operating-point projection; `None` under the same rules as [`locus_summary`].
#[must_use]
pub fn point_summary(
    registry: &Registry,
    marks: &Marks,
    options: &BoardOptions,
) -> Option<PointSummary> {
    let Some(id) = marks.point.id() else {
        return options.check_point.then_some(PointSummary::Unset);
    };
    let composite = registry.get(id)?;
    Some(match composite.geometry() {
        Geometry::Vector { first, second } => PointSummary::Vector {
            start: first,
            end: second,
        },
        _ => PointSummary::Other(composite.kind()),
    })
}

/// Text for the three answer fields. A `None` summary leaves its field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFields {
    pub locus: Option<String>,
    pub point: Option<String>,
    pub scene: String,
}

/// Serialize the scene and both summaries.
///
/// # Errors
///
/// Returns [`SceneError::Json`] if serialization fails.
pub fn save(
    registry: &Registry,
    marks: &Marks,
    options: &BoardOptions,
) -> Result<SavedFields, SceneError> {
    let locus = locus_summary(registry, marks, options)
        .map(|s| serde_json::to_string(&s))
        .transpose()?;
    let point = point_summary(registry, marks, options)
        .map(|s| serde_json::to_string(&s))
        .transpose()?;
    let scene = serde_json::to_string(&SceneRecord::capture(registry, marks))?;
    Ok(SavedFields {
        locus,
        point,
        scene,
    })
}

/// Parse stored text. `Ok(None)` means the field is empty (cold start).
///
/// # Errors
///
/// Returns [`SceneError::Json`] if the text is not a scene record.
pub fn parse_record(text: &str) -> Result<Option<SceneRecord>, SceneError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(text)?;
    let blank = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        _ => false,
    };
    if blank {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Rebuild registry and marks from a parsed record, keeping every id.
///
/// # Errors
///
/// Returns [`SceneError::IdMismatch`], [`SceneError::NegativeRadius`], or
/// [`SceneError::DuplicateId`] for a malformed record.
pub fn rebuild(record: SceneRecord) -> Result<(Registry, Marks), SceneError> {
    let mut registry = Registry::new();
    for (key, state) in &record.entries {
        if key != state.id() {
            return Err(SceneError::IdMismatch {
                key: key.clone(),
                state_id: state.id().clone(),
            });
        }
        if let ObjectState::Circle { id, radius, .. } = state {
            if *radius < 0.0 {
                return Err(SceneError::NegativeRadius(id.clone()));
            }
        }
        registry.create(state)?;
    }

    let mut marks = Marks {
        selected: record.selected_id,
        locus: record.locus_id,
        point: record.point_id,
    };
    for id in marks.retain_existing(|id| registry.contains(id)) {
        warn!(%id, "stored selection or role names a missing object; dropped");
    }
    Ok((registry, marks))
}

/// Parse and rebuild in one step. `Ok(None)` means cold start.
///
/// # Errors
///
/// See [`parse_record`] and [`rebuild`].
pub fn decode(text: &str) -> Result<Option<(Registry, Marks)>, SceneError> {
    parse_record(text)?.map(rebuild).transpose()
}
