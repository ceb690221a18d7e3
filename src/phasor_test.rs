#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::PHASOR_LABEL_DIGITS;
use crate::coords::AxisLabel;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn default_diagram() -> PhasorDiagram {
    let options = BoardOptions {
        with_phasor_diagram: true,
        ..Default::default()
    };
    PhasorDiagram::from_options(&options).unwrap()
}

fn label_text(diagram: &PhasorDiagram, arrow: usize, axes: AxisLabels) -> String {
    diagram
        .arrow(arrow)
        .unwrap()
        .readout(axes)
        .text(PHASOR_LABEL_DIGITS)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn switched_off_by_default() {
    assert_eq!(PhasorDiagram::from_options(&BoardOptions::default()), None);
}

#[test]
fn default_diagram_has_eight_named_arrows() {
    let diagram = default_diagram();
    assert_eq!(diagram.points().len(), 16);
    assert_eq!(diagram.arrow_count(), 8);
    let names: Vec<_> = diagram.arrows().map(|a| a.label).collect();
    assert_eq!(names[0], Some(r"\(\underline{U}_1\)"));
    assert!(names.iter().all(Option::is_some));
}

#[test]
fn unpaired_point_has_no_arrow() {
    let diagram = PhasorDiagram::new(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 2.0)], Vec::new());
    assert_eq!(diagram.arrow_count(), 1);
    assert_eq!(diagram.arrow(1), None);
    assert_eq!(diagram.arrow(0).unwrap().label, None);
}

// =============================================================
// Arrows and labels
// =============================================================

#[test]
fn arrow_reads_consecutive_pair() {
    let diagram = default_diagram();
    let arrow = diagram.arrow(4).unwrap();
    assert_eq!(arrow.tail, pt(-3.22144715417, 3.28653346969));
    assert_eq!(arrow.tip, pt(0.609665977407, -4.39161794651));
}

#[test]
fn hover_text_shows_magnitude_and_angle() {
    let diagram = default_diagram();
    let axes = AxisLabels::default();
    assert_eq!(label_text(&diagram, 0, axes), "5.2 cm, 0.0°");
    assert_eq!(label_text(&diagram, 1, axes), "4.6 cm, 134.4°");
    assert_eq!(label_text(&diagram, 2, axes), "11.9 cm, 26.5°");
    assert_eq!(label_text(&diagram, 4, axes), "8.6 cm, 296.5°");
}

#[test]
fn hover_text_rotates_when_y_axis_is_real() {
    let diagram = default_diagram();
    let axes = AxisLabels::new(AxisLabel::NegIm, AxisLabel::Re);
    assert_eq!(label_text(&diagram, 0, axes), "5.2 cm, 270.0°");
    assert_eq!(label_text(&diagram, 1, axes), "4.6 cm, 44.4°");

    let axes = AxisLabels::new(AxisLabel::Re, AxisLabel::Im);
    assert_eq!(label_text(&diagram, 1, axes), "4.6 cm, 134.4°");
}

#[test]
fn midpoint_and_label_side() {
    let diagram = PhasorDiagram::new(
        vec![pt(0.0, 0.0), pt(-2.0, 4.0), pt(1.0, 1.0), pt(3.0, 1.0)],
        Vec::new(),
    );
    let left = diagram.arrow(0).unwrap();
    assert_eq!(left.midpoint(), pt(-1.0, 2.0));
    assert_eq!(left.label_side(), LabelSide::Left);
    let right = diagram.arrow(1).unwrap();
    assert_eq!(right.midpoint(), pt(2.0, 1.0));
    assert_eq!(right.label_side(), LabelSide::Right);
}

#[test]
fn tip_on_y_axis_is_labelled_left() {
    let diagram = PhasorDiagram::new(vec![pt(1.0, 0.0), pt(0.0, 3.0)], Vec::new());
    assert_eq!(diagram.arrow(0).unwrap().label_side(), LabelSide::Left);
}

#[test]
fn only_tips_map_to_arrows() {
    let diagram = default_diagram();
    assert_eq!(diagram.arrow_of_tip(1), Some(0));
    assert_eq!(diagram.arrow_of_tip(15), Some(7));
    assert_eq!(diagram.arrow_of_tip(0), None);
    assert_eq!(diagram.arrow_of_tip(17), None);
}

// =============================================================
// Moving endpoints
// =============================================================

#[test]
fn move_and_drag_endpoints() {
    let mut diagram = PhasorDiagram::new(vec![pt(0.0, 0.0), pt(1.0, 0.0)], Vec::new());
    assert!(diagram.move_point(1, pt(0.0, 2.0)));
    assert!(diagram.drag_point(0, pt(0.0, 1.0)));
    assert_eq!(diagram.points(), &[pt(0.0, 1.0), pt(0.0, 2.0)]);
    assert!(!diagram.move_point(2, pt(5.0, 5.0)));
    assert!(!diagram.drag_point(9, pt(1.0, 1.0)));
}

// =============================================================
// Field text
// =============================================================

#[test]
fn field_text_lists_every_endpoint() {
    let diagram = PhasorDiagram::new(vec![pt(0.0, 0.0), pt(1.5, -2.0)], Vec::new());
    assert_eq!(diagram.field_text().unwrap(), "[[0.0,0.0],[1.5,-2.0]]");
}

#[test]
fn field_round_trips_moved_endpoints() {
    let mut source = default_diagram();
    assert!(source.move_point(3, pt(-3.3, 3.4)));
    assert!(source.move_point(7, pt(0.126, -4.37)));
    let text = source.field_text().unwrap();

    let mut restored = default_diagram();
    assert!(restored.restore(&text).unwrap());
    assert_eq!(restored, source);
    assert_eq!(restored.field_text().unwrap(), text);
}

#[test]
fn blank_field_keeps_configured_endpoints() {
    let mut diagram = default_diagram();
    assert!(!diagram.restore("  ").unwrap());
    assert_eq!(diagram, default_diagram());
}

#[test]
fn field_of_wrong_length_is_rejected() {
    let mut diagram = default_diagram();
    let result = diagram.restore("[[0, 0], [1, 1]]");
    assert!(matches!(
        result,
        Err(SceneError::PhasorLength {
            expected: 16,
            found: 2
        })
    ));
    assert_eq!(diagram, default_diagram());
}

#[test]
fn malformed_field_is_rejected() {
    let mut diagram = default_diagram();
    let result = diagram.restore(r#"{"x": 1}"#);
    assert!(matches!(result, Err(SceneError::Json(_))));
    assert_eq!(diagram, default_diagram());
}
