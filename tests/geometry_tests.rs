use tui_spin::core::{cube_points, pyramid_points, CubePalette, Shape};
use tui_spin::types::{ColorMode, ShapeKind};

#[test]
fn cube_size_10_density_2_has_216_points() {
    let points = cube_points(10.0, 2.0, &CubePalette::color());
    assert_eq!(points.len(), 216);

    let palette = CubePalette::color();
    for face in palette.faces.iter() {
        assert_eq!(points.iter().filter(|p| p.glyph == *face).count(), 36);
    }
}

#[test]
fn cube_faces_have_distinct_glyphs() {
    for palette in [CubePalette::color(), CubePalette::mono()] {
        for (i, a) in palette.faces.iter().enumerate() {
            for b in palette.faces.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn cube_points_stay_on_the_surface() {
    let points = cube_points(6.0, 0.5, &CubePalette::mono());
    for p in &points {
        let on_face = [p.x, p.y, p.z].iter().any(|c| (c.abs() - 3.0).abs() < 1e-9);
        let inside = [p.x, p.y, p.z].iter().all(|c| c.abs() <= 3.0 + 1e-9);
        assert!(on_face && inside, "{:?}", p);
    }
}

#[test]
fn pyramid_glyphs_and_counts() {
    let points = pyramid_points(10.0, 1.0);
    assert_eq!(points.iter().filter(|p| p.glyph.ch == '#').count(), 121);
    for ch in ['*', '+', 'x', '%'] {
        assert_eq!(points.iter().filter(|p| p.glyph.ch == ch).count(), 66);
    }
}

#[test]
fn pyramid_sides_stay_within_the_solid() {
    for p in pyramid_points(8.0, 0.5) {
        assert!(p.y >= -1e-9 && p.y <= 8.0 + 1e-9);
        // cross-section at height y is a square of half-edge 4 * (1 - y / 8)
        let half = 4.0 * (1.0 - p.y / 8.0);
        assert!(p.x.abs() <= half + 1e-9 && p.z.abs() <= half + 1e-9, "{:?}", p);
    }
}

#[test]
fn shape_build_matches_generators() {
    let cube = Shape::build(ShapeKind::Cube, 10.0, 2.0, ColorMode::Mono);
    assert_eq!(cube.points, cube_points(10.0, 2.0, &CubePalette::mono()));

    let pyramid = Shape::build(ShapeKind::Pyramid, 4.0, 1.0, ColorMode::Color);
    assert_eq!(pyramid.points, pyramid_points(4.0, 1.0));
}

#[test]
fn vanishing_density_from_the_command_line_builds_an_empty_shape() {
    let mut c = tui_spin::config::Config::default();
    c.apply_args(&["--density".to_string(), "1e-300".to_string()])
        .unwrap();
    for kind in [ShapeKind::Cube, ShapeKind::Pyramid] {
        assert!(Shape::staged(kind, 120, c.density, ColorMode::Mono).is_empty());
    }
}
