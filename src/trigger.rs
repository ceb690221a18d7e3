//! Update trigger: connects the engine to the host page's answer fields.
//!
//! The host calls [`UpdateTrigger::fire`] from its global "scene changed"
//! notification. Each fire saves the scene and writes the locus summary, the
//! operating-point summary, the scene record, and (on boards with a phasor
//! diagram) the phasor endpoints to their own fields. A summary the codec
//! declines to publish leaves its field untouched.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::coords::{AxisLabels, Point};
use crate::engine::{Action, EngineCore};
use crate::error::SceneError;

/// One of the host's answer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Locus,
    OperatingPoint,
    Scene,
    /// Axis-label dropdown indices, stored as `[x, y]`.
    AxisLabels,
    /// Phasor endpoints, stored as `[[x, y], ...]`.
    Phasor,
}

/// Host form-field storage.
pub trait AnswerFields {
    fn read(&self, field: Field) -> Option<String>;
    fn write(&mut self, field: Field, value: &str);
}

/// In-memory field storage for tests and offline tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFields {
    values: HashMap<Field, String>,
}

impl MemoryFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

impl AnswerFields for MemoryFields {
    fn read(&self, field: Field) -> Option<String> {
        self.values.get(&field).cloned()
    }

    fn write(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_owned());
    }
}

/// Publishes saves to the answer fields and remembers the last published
/// scene and phasor text.
#[derive(Debug, Default)]
pub struct UpdateTrigger {
    last_scene: Option<String>,
    last_phasor: Option<String>,
}

impl UpdateTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `engine` and write all published fields. Returns whether the
    /// scene record or the phasor endpoints differ from the previous fire.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails; no field is
    /// written in that case.
    pub fn fire(
        &mut self,
        engine: &EngineCore,
        fields: &mut impl AnswerFields,
    ) -> Result<bool, SceneError> {
        let saved = engine.save()?;
        let phasor = engine.save_phasor()?;
        if let Some(locus) = &saved.locus {
            fields.write(Field::Locus, locus);
        }
        if let Some(point) = &saved.point {
            fields.write(Field::OperatingPoint, point);
        }
        fields.write(Field::Scene, &saved.scene);
        if let Some(points) = &phasor {
            fields.write(Field::Phasor, points);
        }

        let scene_changed = self.last_scene.as_deref() != Some(saved.scene.as_str());
        if scene_changed {
            debug!(bytes = saved.scene.len(), "scene field updated");
            self.last_scene = Some(saved.scene);
        }
        let phasor_changed = phasor.is_some() && self.last_phasor != phasor;
        if phasor_changed {
            debug!("phasor field updated");
            self.last_phasor = phasor;
        }
        Ok(scene_changed || phasor_changed)
    }

    /// Initialize `engine` from the stored fields: axis labels first, then
    /// the scene record and the phasor endpoints. The loaded state counts as
    /// already published.
    pub fn load(&mut self, engine: &mut EngineCore, fields: &impl AnswerFields) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(axes) = fields
            .read(Field::AxisLabels)
            .and_then(|raw| parse_axis_labels(&raw))
        {
            actions.extend(engine.set_axis_labels(axes));
        }
        let text = fields.read(Field::Scene).unwrap_or_default();
        actions.extend(engine.restore(&text));
        let points = fields.read(Field::Phasor).unwrap_or_default();
        actions.extend(engine.restore_phasor(&points));

        self.last_scene = match engine.save() {
            Ok(saved) => Some(saved.scene),
            Err(e) => {
                warn!(error = %e, "loaded scene could not be re-serialized");
                None
            }
        };
        self.last_phasor = match engine.save_phasor() {
            Ok(points) => points,
            Err(e) => {
                warn!(error = %e, "loaded phasor endpoints could not be re-serialized");
                None
            }
        };
        actions
    }
}

/// Parse the stored axis indices. Blank or malformed text yields `None`.
fn parse_axis_labels(raw: &str) -> Option<AxisLabels> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Point>(raw) {
        Ok(p) => Some(AxisLabels::from_point(p)),
        Err(e) => {
            warn!(error = %e, "axis label field ignored");
            None
        }
    }
}
