//! Board options.
//!
//! Hosts pass an options object whose fields override the defaults one by
//! one; absent fields keep their default. The CLI reads the same options
//! from `BOARD_*` environment variables. The phasor endpoints and labels are
//! board content rather than switches and only come from the options object.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_PHASOR_POINTS, DEFAULT_READOUT_DIGITS, DEFAULT_TAPE_PRECISION, DEFAULT_VECTOR_LABELS,
};
use crate::coords::Point;
use crate::error::SceneError;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardOptions {
    /// Show the locus toggle and publish the locus summary.
    #[serde(rename = "checkSOK")]
    pub check_locus: bool,
    /// Show the operating-point toggle and publish its summary.
    #[serde(rename = "checkBP")]
    pub check_point: bool,
    /// Offer the "add vector" action.
    pub with_vector_button: bool,
    /// Decimals of the tape measure label.
    pub tape_precision: usize,
    /// Decimals of the hover read-out.
    pub readout_digits: usize,
    /// Show the phasor diagram and publish its endpoints.
    pub with_phasor_diagram: bool,
    /// Initial phasor endpoints as consecutive (tail, tip) pairs.
    #[serde(rename = "taZD")]
    pub phasor_points: Vec<Point>,
    /// One name per phasor.
    #[serde(rename = "vecLabels")]
    pub vector_labels: Vec<String>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            check_locus: true,
            check_point: true,
            with_vector_button: true,
            tape_precision: DEFAULT_TAPE_PRECISION,
            readout_digits: DEFAULT_READOUT_DIGITS,
            with_phasor_diagram: false,
            phasor_points: DEFAULT_PHASOR_POINTS.into_iter().map(Point::from).collect(),
            vector_labels: DEFAULT_VECTOR_LABELS.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl BoardOptions {
    /// Parse a host options object, keeping defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Build options from environment variables.
    ///
    /// Optional (unparseable values keep the default):
    /// - `BOARD_CHECK_SOK`: `true`/`false`
    /// - `BOARD_CHECK_BP`: `true`/`false`
    /// - `BOARD_WITH_VECTOR_BUTTON`: `true`/`false`
    /// - `BOARD_WITH_PHASOR_DIAGRAM`: `true`/`false`
    /// - `BOARD_TAPE_PRECISION`: default 1
    /// - `BOARD_READOUT_DIGITS`: default 2
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            check_locus: env_parse_bool("BOARD_CHECK_SOK", defaults.check_locus),
            check_point: env_parse_bool("BOARD_CHECK_BP", defaults.check_point),
            with_vector_button: env_parse_bool(
                "BOARD_WITH_VECTOR_BUTTON",
                defaults.with_vector_button,
            ),
            tape_precision: env_parse_usize("BOARD_TAPE_PRECISION", defaults.tape_precision),
            readout_digits: env_parse_usize("BOARD_READOUT_DIGITS", defaults.readout_digits),
            with_phasor_diagram: env_parse_bool(
                "BOARD_WITH_PHASOR_DIAGRAM",
                defaults.with_phasor_diagram,
            ),
            ..defaults
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_parse_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => parse_bool(&v).unwrap_or(default),
        Err(_) => default,
    }
}

fn env_parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(v) => v.trim().parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}
