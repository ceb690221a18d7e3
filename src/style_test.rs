#![allow(clippy::float_cmp)]

use super::*;

fn plain(kind: ObjectKind, part: Part, selected: bool) -> ElementStyle {
    element_style(kind, part, selected, &Attributes::default())
}

// =============================================================
// color_for
// =============================================================

#[test]
fn unselected_base_colors() {
    assert_eq!(color_for(ObjectKind::Vector, false), PURPLE);
    assert_eq!(color_for(ObjectKind::Line, false), RED);
    assert_eq!(color_for(ObjectKind::Circle, false), ORANGE);
}

#[test]
fn selected_is_accent_for_every_kind() {
    for kind in [ObjectKind::Vector, ObjectKind::Line, ObjectKind::Circle] {
        assert_eq!(color_for(kind, true), BLUE);
    }
}

// =============================================================
// element_style
// =============================================================

#[test]
fn vector_body_has_arrowhead() {
    let style = plain(ObjectKind::Vector, Part::Body, false);
    assert!(style.last_arrow);
    assert_eq!(style.stroke, PURPLE);
    assert_eq!(style.opacity, SHAPE_OPACITY);
}

#[test]
fn line_body_has_no_arrowhead() {
    let style = plain(ObjectKind::Line, Part::Body, true);
    assert!(!style.last_arrow);
    assert_eq!(style.stroke, BLUE);
}

#[test]
fn radius_handle_stroke_ignores_selection() {
    let unselected = plain(ObjectKind::Circle, Part::RadiusHandle, false);
    let selected = plain(ObjectKind::Circle, Part::RadiusHandle, true);
    assert_eq!(unselected.stroke, RADIUS_HANDLE_STROKE);
    assert_eq!(selected.stroke, RADIUS_HANDLE_STROKE);
    assert_eq!(unselected.fill, ORANGE);
    assert_eq!(selected.fill, BLUE);
}

#[test]
fn center_follows_selection() {
    let style = plain(ObjectKind::Circle, Part::Center, false);
    assert_eq!(style.stroke, ORANGE);
    assert_eq!(style.fill, ORANGE);
}

#[test]
fn overrides_apply() {
    let overrides = Attributes {
        visible: Some(false),
        stroke_width: Some(3.0),
        opacity: Some(0.2),
        fixed: None,
    };
    let style = element_style(ObjectKind::Line, Part::First, false, &overrides);
    assert!(!style.visible);
    assert_eq!(style.stroke_width, 3.0);
    assert_eq!(style.opacity, 0.2);
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn merge_keeps_absent_fields() {
    let mut attrs = Attributes {
        visible: Some(false),
        stroke_width: Some(2.0),
        ..Default::default()
    };
    attrs.merge(&Attributes {
        stroke_width: Some(4.0),
        fixed: Some(true),
        ..Default::default()
    });
    assert_eq!(attrs.visible, Some(false));
    assert_eq!(attrs.stroke_width, Some(4.0));
    assert!(attrs.is_fixed());
}

#[test]
fn attributes_parse_sparse_json() {
    let attrs: Attributes = serde_json::from_str(r#"{"strokeWidth": 2, "fixed": true}"#).unwrap();
    assert_eq!(attrs.stroke_width, Some(2.0));
    assert_eq!(attrs.visible, None);
    assert!(attrs.is_fixed());
    let text = serde_json::to_string(&attrs).unwrap();
    assert_eq!(text, r#"{"strokeWidth":2.0,"fixed":true}"#);
}
