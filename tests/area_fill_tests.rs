use linegraph_rs::core::{
    DataPoint, ValueRange, Viewport, fill_polygon_under, project_fill_polygon,
    project_series_anchors,
};

#[test]
fn fill_is_empty_for_empty_series() {
    let viewport = Viewport::new(800.0, 600.0);
    let x_range = ValueRange::new(0.0, 10.0).expect("x range");
    let y_range = ValueRange::new(0.0, 100.0).expect("y range");

    let polygon = project_fill_polygon(&[], x_range, y_range, viewport).expect("project");
    assert!(polygon.is_empty());
}

#[test]
fn fill_is_empty_for_single_point() {
    let viewport = Viewport::new(800.0, 600.0);
    let x_range = ValueRange::new(0.0, 10.0).expect("x range");
    let y_range = ValueRange::new(0.0, 100.0).expect("y range");
    let points = vec![DataPoint::new(5.0, 50.0)];

    let polygon = project_fill_polygon(&points, x_range, y_range, viewport).expect("project");
    assert!(polygon.is_empty());
}

#[test]
fn fill_polygon_follows_line_then_drops_to_bottom() {
    let viewport = Viewport::new(100.0, 50.0);
    let x_range = ValueRange::new(0.0, 2.0).expect("x range");
    let y_range = ValueRange::new(0.0, 1.0).expect("y range");
    let points = vec![
        DataPoint::new(0.0, 0.5),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 0.5),
    ];

    let polygon = project_fill_polygon(&points, x_range, y_range, viewport).expect("project");
    assert_eq!(polygon.len(), 6);

    // Line vertices first.
    assert!((polygon[0].x - 1.0).abs() <= 1e-9);
    assert!((polygon[0].y - 25.0).abs() <= 1e-9);
    assert!((polygon[1].x - 51.0).abs() <= 1e-9);
    assert!((polygon[1].y - 0.0).abs() <= 1e-9);
    assert!((polygon[2].x - 101.0).abs() <= 1e-9);
    assert!((polygon[2].y - 25.0).abs() <= 1e-9);

    // Baseline run: under the last point, back under the first.
    assert!((polygon[3].x - 101.0).abs() <= 1e-9);
    assert!((polygon[3].y - 50.0).abs() <= 1e-9);
    assert!((polygon[4].x - 1.0).abs() <= 1e-9);
    assert!((polygon[4].y - 50.0).abs() <= 1e-9);

    // Explicit closure: first vertex repeated as last.
    assert_eq!(polygon[5], polygon[0]);
}

#[test]
fn border_shifts_the_baseline() {
    let viewport = Viewport::new(100.0, 50.0).with_border(8.0);
    let x_range = ValueRange::new(0.0, 1.0).expect("x range");
    let y_range = ValueRange::new(0.0, 1.0).expect("y range");
    let points = vec![DataPoint::new(0.0, 0.5), DataPoint::new(1.0, 0.5)];

    let polygon = project_fill_polygon(&points, x_range, y_range, viewport).expect("project");
    assert_eq!(polygon.len(), 5);
    // bottom = height + border
    assert!((polygon[2].y - 58.0).abs() <= 1e-9);
    assert!((polygon[3].y - 58.0).abs() <= 1e-9);
}

#[test]
fn anchor_based_fill_matches_point_based_fill() {
    let viewport = Viewport::new(640.0, 480.0);
    let x_range = ValueRange::new(-5.0, 10.0).expect("x range");
    let y_range = ValueRange::new(-1.0, 2.0).expect("y range");
    let points = vec![
        DataPoint::new(-5.0, -1.0),
        DataPoint::new(0.0, 0.5),
        DataPoint::new(5.0, 1.0),
    ];

    let anchors = project_series_anchors(&points, x_range, y_range, viewport).expect("anchors");
    let from_anchors = fill_polygon_under(&anchors, viewport);
    let from_points = project_fill_polygon(&points, x_range, y_range, viewport).expect("project");
    assert_eq!(from_anchors, from_points);
}
