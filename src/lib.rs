//! Construction board engine for circle and phasor diagram exercises.
//!
//! A learner places vectors, lines, and circles on a 2-D board, marks one
//! object as the locus curve and one as the operating point, and the board
//! writes its state to the host page's answer fields for grading. This crate
//! owns the object model, selection and role marking, coordinate display,
//! and the save/restore codec. The host is a generic scene graph: it renders
//! the sub-elements named in [`engine::Action`]s, routes pointer events back
//! through [`engine::EngineCore`], and stores the text produced by
//! [`trigger::UpdateTrigger`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session state and every user-facing operation ([`engine::EngineCore`]) |
//! | [`doc`] | Object ids, kinds, and persisted state records |
//! | [`registry`] | Ordered id-to-composite store |
//! | [`shape`] | Composite objects, sub-element parts, drag rules |
//! | [`factory`] | Default states and state-to-composite construction |
//! | [`style`] | Selection-dependent styling and host attribute overrides |
//! | [`selection`] | Selection, locus and operating-point roles, toggle feedback |
//! | [`codec`] | Scene record, grader summaries, save and restore |
//! | [`trigger`] | Answer-field storage seam and the update trigger |
//! | [`coords`] | Cartesian/polar conversion and axis-label semantics |
//! | [`phasor`] | Phasor diagram endpoints, arrows, and hover labels |
//! | [`readout`] | Hover and measurement read-out text |
//! | [`ids`] | Session-unique id generation |
//! | [`config`] | Board options |
//! | [`error`] | Error types |
//! | [`consts`] | Sentinels, default geometry, palette |

pub mod codec;
pub mod config;
pub mod consts;
pub mod coords;
pub mod doc;
pub mod engine;
pub mod error;
pub mod factory;
pub mod ids;
pub mod phasor;
pub mod readout;
pub mod registry;
pub mod selection;
pub mod shape;
pub mod style;
pub mod trigger;
