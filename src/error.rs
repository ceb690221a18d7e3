//! Error taxonomy for decoding and mutating scenes.

use crate::doc::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The stored text is not JSON of the expected shape, or an entry has an
    /// unknown `type`.
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate object id: {0}")]
    DuplicateId(ObjectId),
    #[error("entry key {key} does not match its state id {state_id}")]
    IdMismatch { key: ObjectId, state_id: ObjectId },
    #[error("circle {0} has a negative radius")]
    NegativeRadius(ObjectId),
    #[error("phasor field holds {found} points, the diagram has {expected}")]
    PhasorLength { expected: usize, found: usize },
}

impl SceneError {
    /// Stable machine-readable code for logs and CLI output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "E_SCENE_JSON",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
            Self::IdMismatch { .. } => "E_ID_MISMATCH",
            Self::NegativeRadius(_) => "E_NEGATIVE_RADIUS",
            Self::PhasorLength { .. } => "E_PHASOR_LENGTH",
        }
    }
}
