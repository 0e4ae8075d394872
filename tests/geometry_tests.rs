//! Geometry Loader Tests
//!
//! Tests for:
//! - Section handling (`[points]` / `[indices]`), comments, blank lines
//! - CRLF normalization and prologue text
//! - 2D and 3D point dimensionality
//! - Row arity and malformed-token errors with line numbers
//! - Count arithmetic (floats per point, indices per triangle)

use ember::{EmberError, GeometryData};

const EPSILON: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn single_triangle() {
    let text = "[points]\n0 0 1 0 0\n1 0 0 1 0\n0 1 0 0 1\n[indices]\n0 1 2\n";
    let geo = GeometryData::parse(text, 2).unwrap();

    assert_eq!(geo.point_data.len(), 15);
    assert_eq!(geo.index_data, vec![0, 1, 2]);
    assert_eq!(geo.point_count(), 3);
    assert_eq!(geo.index_count(), 3);
}

#[test]
fn float_count_matches_point_count() {
    let text = "[points]\n0.5 0.0 1 0 0\n-0.5 0.0 0 1 0\n0.0 0.5 0 0 1\n0.0 -0.5 1 1 1\n[indices]\n0 1 2\n1 2 3\n";
    let geo = GeometryData::parse(text, 2).unwrap();

    assert_eq!(
        geo.point_data.len() as u32,
        geo.point_count() * geo.components_per_point()
    );
    assert_eq!(geo.index_count() % 3, 0);
}

#[test]
fn comments_blank_lines_and_crlf() {
    let text = "# header comment\r\n\r\n[points]\r\n# inline comment\r\n0.25 -0.75 1 0 0\r\n\r\n[indices]\r\n# one triangle\r\n0 0 0\r\n";
    let geo = GeometryData::parse(text, 2).unwrap();

    assert_eq!(geo.point_count(), 1);
    assert!(approx(geo.point_data[0], 0.25));
    assert!(approx(geo.point_data[1], -0.75));
    assert_eq!(geo.index_data, vec![0, 0, 0]);
}

#[test]
fn trailing_carriage_return_without_newline() {
    let text = "[points]\n0 0 1 0 0\r";
    let geo = GeometryData::parse(text, 2).unwrap();
    assert_eq!(geo.point_count(), 1);
}

#[test]
fn three_dimensional_points() {
    let text = "[points]\n0 0 0.5 1 0 0\n1 0 0.5 0 1 0\n0 1 0.5 0 0 1\n[indices]\n0 1 2\n";
    let geo = GeometryData::parse(text, 3).unwrap();

    assert_eq!(geo.components_per_point(), 6);
    assert_eq!(geo.point_data.len(), 18);
    assert_eq!(geo.point_count(), 3);
    assert!(approx(geo.point_data[2], 0.5));
}

#[test]
fn prologue_before_first_section_is_ignored() {
    let text = "free-form prologue text\n[points]\n0 0 1 0 0\n";
    let geo = GeometryData::parse(text, 2).unwrap();
    assert_eq!(geo.point_count(), 1);
}

#[test]
fn empty_input_yields_empty_geometry() {
    let geo = GeometryData::parse("", 2).unwrap();
    assert_eq!(geo.point_count(), 0);
    assert_eq!(geo.index_count(), 0);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn malformed_float_is_an_error_with_line_number() {
    let text = "[points]\n0 0 1 0 0\n0 oops 1 0 0\n";
    let err = GeometryData::parse(text, 2).unwrap_err();

    match err {
        EmberError::GeometryParse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("oops"));
        }
        other => panic!("expected GeometryParse, got {other:?}"),
    }
}

#[test]
fn wrong_point_row_arity_is_an_error() {
    let text = "[points]\n0 0 1 0\n";
    assert!(matches!(
        GeometryData::parse(text, 2),
        Err(EmberError::GeometryParse { line: 2, .. })
    ));
}

#[test]
fn wrong_index_row_arity_is_an_error() {
    let text = "[points]\n0 0 1 0 0\n[indices]\n0 1\n";
    assert!(matches!(
        GeometryData::parse(text, 2),
        Err(EmberError::GeometryParse { line: 4, .. })
    ));
}

#[test]
fn index_out_of_u16_range_is_an_error() {
    let text = "[indices]\n0 1 70000\n";
    assert!(matches!(
        GeometryData::parse(text, 2),
        Err(EmberError::GeometryParse { line: 2, .. })
    ));
}

#[test]
fn negative_index_is_an_error() {
    let text = "[indices]\n0 1 -1\n";
    assert!(GeometryData::parse(text, 2).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GeometryData::load("/definitely/not/a/real/path.txt", 2).unwrap_err();
    assert!(matches!(err, EmberError::IoError(_)));
}
