use approx::assert_relative_eq;

use tui_spin::core::Shape;
use tui_spin::types::{ColorMode, Point, Rotation, ShapeKind};

fn staged_cube() -> Shape {
    Shape::staged(ShapeKind::Cube, 60, 1.0, ColorMode::Mono)
}

fn assert_points_eq(a: &[Point], b: &[Point]) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert_relative_eq!(p.x, q.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, q.y, epsilon = 1e-9);
        assert_relative_eq!(p.z, q.z, epsilon = 1e-9);
        assert_eq!(p.glyph, q.glyph);
    }
}

#[test]
fn identity_rotation() {
    let shape = staged_cube();
    assert_points_eq(&shape.rotated().points, &shape.points);
}

#[test]
fn full_turn_rotation() {
    let mut shape = staged_cube();
    shape.rotation = Rotation::new(360.0, 360.0, 360.0);
    assert_points_eq(&shape.rotated().points, &shape.points);
}

#[test]
fn rotation_preserves_centroid() {
    let mut shape = staged_cube();
    shape.rotation = Rotation::new(17.0, 123.0, -48.0);
    let (ax, ay, az) = shape.centroid().unwrap();
    let (bx, by, bz) = shape.rotated().centroid().unwrap();
    assert_relative_eq!(ax, bx, epsilon = 1e-9);
    assert_relative_eq!(ay, by, epsilon = 1e-9);
    assert_relative_eq!(az, bz, epsilon = 1e-9);
}

#[test]
fn rotation_preserves_distances_from_centroid() {
    let mut shape = Shape::build(ShapeKind::Pyramid, 6.0, 1.0, ColorMode::Mono);
    shape.rotation = Rotation::new(33.0, 71.0, 12.0);
    let (cx, cy, cz) = shape.centroid().unwrap();
    let dist = |p: &Point| ((p.x - cx).powi(2) + (p.y - cy).powi(2) + (p.z - cz).powi(2)).sqrt();

    for (before, after) in shape.points.iter().zip(shape.rotated().points.iter()) {
        assert_relative_eq!(dist(before), dist(after), epsilon = 1e-9);
    }
}

#[test]
fn order_of_axes_matters() {
    // Same angles, different axes: roll-then-pitch is not pitch-then-roll.
    let mut a = Shape::new(vec![
        Point::new(1.0, 0.0, 0.0, 'p'),
        Point::new(-1.0, 0.0, 0.0, 'q'),
    ]);
    a.rotation = Rotation::new(90.0, 0.0, 90.0);
    let out = a.rotated();
    // +x rolls to +y, then pitches to +z
    assert_relative_eq!(out.points[0].z, 1.0, epsilon = 1e-12);
    assert_relative_eq!(out.points[0].y, 0.0, epsilon = 1e-12);
}

#[test]
fn rotating_original_each_frame_does_not_drift() {
    let mut shape = staged_cube();
    for _ in 0..120 {
        shape.rotation.advance(3.0);
    }
    // 120 frames at speed 3: A = 1080, B = C = 360 -> identity
    assert_eq!(shape.rotation, Rotation::new(1080.0, 360.0, 360.0));
    assert_points_eq(&shape.rotated().points, &shape.points);
}
