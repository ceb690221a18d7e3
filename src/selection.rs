//! Selection and role marking.
//!
//! DESIGN
//! ======
//! At most one object is selected. Two roles, the locus curve and the
//! operating point, each name at most one object. A role is assigned by
//! turning its toggle on while an object is selected; turning a toggle off
//! never changes the role. Roles survive shape edits and are only reverted to
//! unset when the object holding them is deleted, so a role never names an id
//! that is not in the registry.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::UNSET_ROLE;
use crate::doc::ObjectId;

/// Which role a toggle assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    /// The current-locus curve ("SOK"); expected to be a circle.
    Locus,
    /// The operating point ("BP"); expected to be a vector.
    OperatingPoint,
}

/// A role assignment. Serialized as the object id, or `"-1"` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Role(Option<ObjectId>);

impl Role {
    #[must_use]
    pub fn unset() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn of(id: ObjectId) -> Self {
        Self(Some(id))
    }

    #[must_use]
    pub fn id(&self) -> Option<&ObjectId> {
        self.0.as_ref()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn is(&self, id: &ObjectId) -> bool {
        self.0.as_ref() == Some(id)
    }

    fn clear(&mut self) {
        self.0 = None;
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(id) => serializer.serialize_str(id.as_str()),
            None => serializer.serialize_str(UNSET_ROLE),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older records may carry `null` where a toggle was turned on
        // without a selection.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(s) if s != UNSET_ROLE => Self(Some(ObjectId::new(s))),
            _ => Self(None),
        })
    }
}

/// Checked state of the two role toggles. `None` means the toggle is not
/// shown on this board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleToggles {
    pub locus: Option<bool>,
    pub operating_point: Option<bool>,
}

/// Selection plus role assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    pub(crate) selected: Option<ObjectId>,
    pub(crate) locus: Role,
    pub(crate) point: Role,
}

impl Marks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn locus(&self) -> &Role {
        &self.locus
    }

    #[must_use]
    pub fn operating_point(&self) -> &Role {
        &self.point
    }

    #[must_use]
    pub fn role(&self, kind: RoleKind) -> &Role {
        match kind {
            RoleKind::Locus => &self.locus,
            RoleKind::OperatingPoint => &self.point,
        }
    }

    /// Make `id` the selection. The caller checks that it exists.
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    /// Whether the toggle for `kind` shows checked: its role is the selection.
    #[must_use]
    pub fn role_checked(&self, kind: RoleKind) -> bool {
        self.selected.as_ref().is_some_and(|id| self.role(kind).is(id))
    }

    /// Toggle feedback for the toggles that are shown.
    #[must_use]
    pub fn toggles(&self, show_locus: bool, show_point: bool) -> RoleToggles {
        RoleToggles {
            locus: show_locus.then(|| self.role_checked(RoleKind::Locus)),
            operating_point: show_point.then(|| self.role_checked(RoleKind::OperatingPoint)),
        }
    }

    /// Apply a toggle change. Turning on assigns the role to the selection;
    /// turning off, or turning on with nothing selected, does nothing.
    /// Returns whether the role changed.
    pub fn set_toggle(&mut self, kind: RoleKind, on: bool) -> bool {
        if !on {
            return false;
        }
        let Some(selected) = self.selected.clone() else {
            return false;
        };
        let role = match kind {
            RoleKind::Locus => &mut self.locus,
            RoleKind::OperatingPoint => &mut self.point,
        };
        if role.is(&selected) {
            return false;
        }
        *role = Role::of(selected);
        true
    }

    /// Drop every reference to a deleted object: the selection if it is `id`
    /// and any role held by `id`.
    pub fn forget(&mut self, id: &ObjectId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.locus.is(id) {
            self.locus.clear();
        }
        if self.point.is(id) {
            self.point.clear();
        }
    }

    /// Drop the selection and any role whose id fails `exists`. Returns the
    /// ids that were dropped.
    pub fn retain_existing(&mut self, exists: impl Fn(&ObjectId) -> bool) -> Vec<ObjectId> {
        let mut dropped = Vec::new();
        for slot in [&mut self.locus.0, &mut self.point.0, &mut self.selected] {
            if let Some(id) = slot.as_ref() {
                if !exists(id) {
                    dropped.push(id.clone());
                    *slot = None;
                }
            }
        }
        dropped
    }
}
