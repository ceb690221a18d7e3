use tracing::{debug, warn};

use crate::codec::{self, SavedFields};
use crate::config::BoardOptions;
use crate::consts::{ANGLE_MEASURE_DIGITS, PHASOR_LABEL_DIGITS};
use crate::coords::{AxisLabels, Point, Polar, display_polar};
use crate::doc::{ObjectId, ObjectKind};
use crate::error::SceneError;
use crate::factory::{circle_state, create_from_state, default_state};
use crate::ids::IdGenerator;
use crate::phasor::PhasorDiagram;
use crate::readout::Readout;
use crate::registry::Registry;
use crate::selection::{Marks, RoleKind, RoleToggles};
use crate::shape::{Composite, ElementRef, Part};
use crate::style::{Attributes, ElementStyle};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Render these new sub-elements.
    ObjectCreated {
        id: ObjectId,
        elements: Vec<ElementRef>,
    },
    /// Remove these sub-elements from the scene.
    ObjectDeleted {
        id: ObjectId,
        elements: Vec<ElementRef>,
    },
    SelectionChanged(Option<ObjectId>),
    /// Set the role toggles' checked state.
    TogglesChanged(RoleToggles),
    /// Move the phasor endpoints to these positions, in endpoint order.
    PhasorPointsChanged(Vec<Point>),
    /// The scene changed; the host should redraw and fire its update
    /// notification so the answer fields are saved.
    SceneChanged,
}

/// Hover label of one phasor, drawn centered on `at`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorLabel {
    pub arrow: usize,
    pub at: Point,
    pub text: String,
}

/// Session state and every user-facing operation on it.
///
/// All operations are infallible from the host's point of view: references
/// to missing ids are no-ops and a bad stored record falls back to an empty
/// scene.
pub struct EngineCore {
    registry: Registry,
    marks: Marks,
    ids: IdGenerator,
    options: BoardOptions,
    axes: AxisLabels,
    /// Circle whose radius handle is under the pointer.
    hovered_radius: Option<ObjectId>,
    phasor: Option<PhasorDiagram>,
    /// Phasor whose tip is under the pointer.
    hovered_arrow: Option<usize>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(BoardOptions::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(options: BoardOptions) -> Self {
        let phasor = PhasorDiagram::from_options(&options);
        Self {
            registry: Registry::new(),
            marks: Marks::new(),
            ids: IdGenerator::new(),
            options,
            axes: AxisLabels::default(),
            hovered_radius: None,
            phasor,
            hovered_arrow: None,
        }
    }

    // --- Add / copy / delete ---

    /// Add a vector from the origin to `(2, 1)`. No-op when the board has no
    /// vector button.
    pub fn add_vector(&mut self) -> Vec<Action> {
        if !self.options.with_vector_button {
            return Vec::new();
        }
        let id = self.ids.generate();
        self.insert(create_from_state(&default_state(ObjectKind::Vector, id)))
    }

    /// Add a line through the origin and `(1, 1)`.
    pub fn add_line(&mut self) -> Vec<Action> {
        let id = self.ids.generate();
        self.insert(create_from_state(&default_state(ObjectKind::Line, id)))
    }

    /// Add a unit circle centered on the origin.
    pub fn add_circle(&mut self) -> Vec<Action> {
        let id = self.ids.generate();
        self.insert(create_from_state(&default_state(ObjectKind::Circle, id)))
    }

    /// Add a circle of `radius` centered on `center`. A negative radius is
    /// taken by magnitude.
    pub fn add_circle_at(&mut self, center: Point, radius: f64) -> Vec<Action> {
        let id = self.ids.generate();
        self.insert(create_from_state(&circle_state(id, center, radius.abs())))
    }

    /// Duplicate `id` at the origin under a fresh id.
    pub fn duplicate(&mut self, id: &ObjectId) -> Vec<Action> {
        let Some(source) = self.registry.get(id) else {
            debug!(%id, "duplicate of missing object ignored");
            return Vec::new();
        };
        let copy = source.duplicate_at_origin(self.ids.generate());
        self.insert(copy)
    }

    /// Duplicate the selected object at the origin.
    pub fn copy_selected(&mut self) -> Vec<Action> {
        match self.marks.selected().cloned() {
            Some(id) => self.duplicate(&id),
            None => Vec::new(),
        }
    }

    /// Delete `id`, clearing the selection and any role it holds.
    pub fn delete(&mut self, id: &ObjectId) -> Vec<Action> {
        let Some(removed) = self.registry.delete(id) else {
            debug!(%id, "delete of missing object ignored");
            return Vec::new();
        };
        let was_selected = self.marks.selected() == Some(id);
        self.marks.forget(id);
        if self.hovered_radius.as_ref() == Some(id) {
            self.hovered_radius = None;
        }

        let mut actions = vec![Action::ObjectDeleted {
            id: id.clone(),
            elements: removed.release(),
        }];
        if was_selected {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::TogglesChanged(self.toggles()));
        actions.push(Action::SceneChanged);
        actions
    }

    /// Delete the selected object.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.marks.selected().cloned() {
            Some(id) => self.delete(&id),
            None => Vec::new(),
        }
    }

    fn insert(&mut self, composite: Composite) -> Vec<Action> {
        let elements = composite.elements();
        match self.registry.insert(composite) {
            Ok(id) => vec![Action::ObjectCreated { id, elements }, Action::SceneChanged],
            Err(e) => {
                warn!(error = %e, "object not added");
                Vec::new()
            }
        }
    }

    // --- Pointer input ---

    /// Pointer down on any sub-element selects its owner.
    pub fn on_pointer_down(&mut self, element: &ElementRef) -> Vec<Action> {
        self.select(&element.object_id)
    }

    /// Select `id` and resynchronize the role toggles.
    pub fn select(&mut self, id: &ObjectId) -> Vec<Action> {
        if !self.registry.contains(id) {
            debug!(%id, "select of missing object ignored");
            return Vec::new();
        }
        self.marks.select(id.clone());
        vec![
            Action::SelectionChanged(Some(id.clone())),
            Action::TogglesChanged(self.toggles()),
            Action::SceneChanged,
        ]
    }

    /// Drag a sub-element by `delta` in board coordinates.
    pub fn drag(&mut self, element: &ElementRef, delta: Point) -> Vec<Action> {
        let moved = self
            .registry
            .get_mut(&element.object_id)
            .is_some_and(|c| c.drag(element.part, delta));
        scene_changed_if(moved)
    }

    /// Move a free point to an absolute position, as reported by a host that
    /// tracks point positions itself.
    pub fn move_point(&mut self, element: &ElementRef, to: Point) -> Vec<Action> {
        let moved = self
            .registry
            .get_mut(&element.object_id)
            .is_some_and(|c| c.move_to(element.part, to));
        scene_changed_if(moved)
    }

    /// Pointer entered a sub-element. Only radius handles change the read-out.
    pub fn on_pointer_over(&mut self, element: &ElementRef) {
        if element.part == Part::RadiusHandle && self.registry.contains(&element.object_id) {
            self.hovered_radius = Some(element.object_id.clone());
        }
    }

    /// Pointer left a sub-element.
    pub fn on_pointer_out(&mut self, element: &ElementRef) {
        let hovered = self.hovered_radius.as_ref() == Some(&element.object_id);
        if element.part == Part::RadiusHandle && hovered {
            self.hovered_radius = None;
        }
    }

    // --- Role toggles ---

    /// The locus toggle changed. Turning it on marks the selection.
    pub fn set_locus_toggle(&mut self, on: bool) -> Vec<Action> {
        if !self.options.check_locus {
            return Vec::new();
        }
        self.apply_toggle(RoleKind::Locus, on)
    }

    /// The operating-point toggle changed. Turning it on marks the selection.
    pub fn set_point_toggle(&mut self, on: bool) -> Vec<Action> {
        if !self.options.check_point {
            return Vec::new();
        }
        self.apply_toggle(RoleKind::OperatingPoint, on)
    }

    fn apply_toggle(&mut self, kind: RoleKind, on: bool) -> Vec<Action> {
        if self
            .marks
            .selected()
            .is_some_and(|id| !self.registry.contains(id))
        {
            return Vec::new();
        }
        if self.marks.set_toggle(kind, on) {
            vec![Action::TogglesChanged(self.toggles()), Action::SceneChanged]
        } else {
            Vec::new()
        }
    }

    // --- Styling ---

    /// Merge host overrides into every sub-element of `id`.
    pub fn set_attributes(&mut self, id: &ObjectId, attributes: &Attributes) -> Vec<Action> {
        match self.registry.get_mut(id) {
            Some(composite) => {
                composite.set_attributes(attributes);
                vec![Action::SceneChanged]
            }
            None => Vec::new(),
        }
    }

    /// Current style of a sub-element, recomputed from the selection.
    #[must_use]
    pub fn style_of(&self, element: &ElementRef) -> Option<ElementStyle> {
        let composite = self.registry.get(&element.object_id)?;
        if !composite.has_part(element.part) {
            return None;
        }
        let selected = self.marks.selected() == Some(composite.id());
        Some(composite.style(element.part, selected))
    }

    // --- Coordinates ---

    pub fn set_axis_labels(&mut self, axes: AxisLabels) -> Vec<Action> {
        if self.axes == axes {
            return Vec::new();
        }
        self.axes = axes;
        vec![Action::SceneChanged]
    }

    #[must_use]
    pub fn axis_labels(&self) -> AxisLabels {
        self.axes
    }

    /// Polar form of `p` as displayed under the current axis labels.
    #[must_use]
    pub fn display_polar(&self, p: Point) -> Polar {
        display_polar(p, self.axes)
    }

    /// Read-out for the pointer at `at`.
    #[must_use]
    pub fn readout(&self, at: Point) -> Readout {
        let hovered_center = self
            .hovered_radius
            .as_ref()
            .and_then(|id| self.registry.get(id))
            .and_then(|c| c.point(Part::Center));
        match hovered_center {
            Some(center) => Readout::radius(center, at),
            None => Readout::coordinates(at, self.axes),
        }
    }

    /// Read-out text formatted with the configured number of digits.
    #[must_use]
    pub fn readout_text(&self, at: Point) -> String {
        self.readout(at).text(self.options.readout_digits)
    }

    // --- Measurements ---

    /// Tape measure label for the tape `from -> to`.
    #[must_use]
    pub fn tape_text(&self, from: Point, to: Point) -> String {
        Readout::tape(from, to).text(self.options.tape_precision)
    }

    /// Angle measure label for the angle at `center` from `start` to `end`.
    #[must_use]
    pub fn angle_text(&self, start: Point, center: Point, end: Point) -> String {
        Readout::angle(start, center, end).text(ANGLE_MEASURE_DIGITS)
    }

    // --- Phasor diagram ---

    /// The phasor diagram, when the board shows one.
    #[must_use]
    pub fn phasor(&self) -> Option<&PhasorDiagram> {
        self.phasor.as_ref()
    }

    /// Drag phasor endpoint `index` by `delta`.
    pub fn drag_phasor_point(&mut self, index: usize, delta: Point) -> Vec<Action> {
        let moved = self
            .phasor
            .as_mut()
            .is_some_and(|diagram| diagram.drag_point(index, delta));
        scene_changed_if(moved)
    }

    /// Move phasor endpoint `index` to an absolute position.
    pub fn move_phasor_point(&mut self, index: usize, to: Point) -> Vec<Action> {
        let moved = self
            .phasor
            .as_mut()
            .is_some_and(|diagram| diagram.move_point(index, to));
        scene_changed_if(moved)
    }

    /// Pointer entered phasor endpoint `point_index`. Only tips show a label.
    pub fn on_phasor_over(&mut self, point_index: usize) {
        if let Some(arrow) = self
            .phasor
            .as_ref()
            .and_then(|diagram| diagram.arrow_of_tip(point_index))
        {
            self.hovered_arrow = Some(arrow);
        }
    }

    /// Pointer left phasor endpoint `point_index`.
    pub fn on_phasor_out(&mut self, point_index: usize) {
        let arrow = self
            .phasor
            .as_ref()
            .and_then(|diagram| diagram.arrow_of_tip(point_index));
        if arrow.is_some() && self.hovered_arrow == arrow {
            self.hovered_arrow = None;
        }
    }

    /// Magnitude and displayed angle of phasor `arrow`.
    #[must_use]
    pub fn phasor_measure_text(&self, arrow: usize) -> Option<String> {
        let arrow = self.phasor.as_ref()?.arrow(arrow)?;
        Some(arrow.readout(self.axes).text(PHASOR_LABEL_DIGITS))
    }

    /// The label of the phasor whose tip is hovered, if any.
    #[must_use]
    pub fn phasor_label(&self) -> Option<PhasorLabel> {
        let index = self.hovered_arrow?;
        let arrow = self.phasor.as_ref()?.arrow(index)?;
        Some(PhasorLabel {
            arrow: index,
            at: arrow.midpoint(),
            text: arrow.readout(self.axes).text(PHASOR_LABEL_DIGITS),
        })
    }

    /// Endpoint list for the phasor field; `None` without a phasor diagram.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn save_phasor(&self) -> Result<Option<String>, SceneError> {
        self.phasor
            .as_ref()
            .map(PhasorDiagram::field_text)
            .transpose()
    }

    /// Replace the phasor endpoints with the stored field text. Blank text
    /// keeps the configured endpoints; a rejected list is logged and keeps
    /// them too.
    pub fn restore_phasor(&mut self, text: &str) -> Vec<Action> {
        let Some(diagram) = self.phasor.as_mut() else {
            return Vec::new();
        };
        match diagram.restore(text) {
            Ok(true) => vec![Action::PhasorPointsChanged(diagram.points().to_vec())],
            Ok(false) => Vec::new(),
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "stored phasor endpoints rejected");
                Vec::new()
            }
        }
    }

    // --- Persistence ---

    /// Serialize the scene and both summaries for the answer fields.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn save(&self) -> Result<SavedFields, SceneError> {
        codec::save(&self.registry, &self.marks, &self.options)
    }

    /// Replace the scene with the stored `text`. Empty text is a cold start;
    /// a malformed record is logged and leaves an empty scene.
    pub fn restore(&mut self, text: &str) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .registry
            .iter()
            .map(|c| Action::ObjectDeleted {
                id: c.id().clone(),
                elements: c.elements(),
            })
            .collect();

        let (registry, marks) = match codec::decode(text) {
            Ok(Some(scene)) => scene,
            Ok(None) => (Registry::new(), Marks::new()),
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "stored scene rejected; starting empty");
                (Registry::new(), Marks::new())
            }
        };
        for composite in registry.iter() {
            self.ids.reserve(composite.id());
        }
        self.registry = registry;
        self.marks = marks;
        self.hovered_radius = None;

        actions.extend(self.registry.iter().map(|c| Action::ObjectCreated {
            id: c.id().clone(),
            elements: c.elements(),
        }));
        actions.push(Action::SelectionChanged(self.marks.selected().cloned()));
        actions.push(Action::TogglesChanged(self.toggles()));
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ObjectId> {
        self.marks.selected()
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&Composite> {
        self.registry.get(id)
    }

    /// Toggle feedback for the current selection.
    #[must_use]
    pub fn toggles(&self) -> RoleToggles {
        self.marks.toggles(self.options.check_locus, self.options.check_point)
    }
}

fn scene_changed_if(moved: bool) -> Vec<Action> {
    if moved {
        vec![Action::SceneChanged]
    } else {
        Vec::new()
    }
}
