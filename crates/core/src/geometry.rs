//! Geometry module - surface point clouds for the built-in solids
//!
//! Every generator is deterministic for a given `(size, density)` and returns
//! an ordered `Vec<Point>`. Sampling is count-based: an extent of `size`
//! sampled every `density` units yields `floor(size / density) + 1` samples,
//! with both boundaries included whenever the step divides the extent.
//!
//! Points shared by two faces (edges, corners) are emitted once per face.
//! The depth test makes the duplicates harmless.

use crate::types::{ColorMode, Glyph, Point, Rgb};

/// Slack so that `10.0 / 0.2` still counts as 50 steps.
const STEP_EPSILON: f64 = 1e-9;

/// Most steps sampled along one edge. A cube at this limit is about
/// 6.3 million points; anything finer yields an empty point set.
pub const MAX_STEPS: usize = 1024;

/// Glyphs for the six cube faces, in generation order:
/// front (+z), back (-z), right (+x), left (-x), top (+y), bottom (-y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePalette {
    pub faces: [Glyph; 6],
}

impl CubePalette {
    /// Solid background-colored faces.
    pub const fn color() -> Self {
        Self {
            faces: [
                Glyph::on(' ', Rgb::new(255, 85, 85)),   // front, red
                Glyph::on(' ', Rgb::new(85, 85, 255)),   // back, blue
                Glyph::on(' ', Rgb::new(85, 255, 85)),   // right, green
                Glyph::on(' ', Rgb::new(255, 255, 85)),  // left, yellow
                Glyph::on(' ', Rgb::new(255, 255, 255)), // top, white
                Glyph::on(' ', Rgb::new(255, 85, 255)),  // bottom, magenta
            ],
        }
    }

    /// One distinct character per face, for outputs without color.
    pub const fn mono() -> Self {
        Self {
            faces: [
                Glyph::plain('@'),
                Glyph::plain('#'),
                Glyph::plain('$'),
                Glyph::plain('%'),
                Glyph::plain('&'),
                Glyph::plain('='),
            ],
        }
    }

    /// Palette for an already resolved color mode.
    ///
    /// `ColorMode::Auto` is treated as color; resolve it against the output first.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Mono => Self::mono(),
            ColorMode::Auto | ColorMode::Color => Self::color(),
        }
    }
}

impl Default for CubePalette {
    fn default() -> Self {
        Self::color()
    }
}

/// Pyramid base glyph.
pub const PYRAMID_BASE: char = '#';

/// Pyramid side glyphs: back, right, front, left.
pub const PYRAMID_SIDES: [char; 4] = ['*', '+', 'x', '%'];

/// Number of whole steps of `step` that fit in `extent`.
///
/// Returns `None` for degenerate inputs (non-positive or non-finite) and when
/// the count would exceed [`MAX_STEPS`].
fn step_count(extent: f64, step: f64) -> Option<usize> {
    if !(extent.is_finite() && step.is_finite()) || extent <= 0.0 || step <= 0.0 {
        return None;
    }
    let steps = (extent / step + STEP_EPSILON).floor();
    if steps > MAX_STEPS as f64 {
        log::warn!(
            "geometry: {} / {} needs {} steps per edge, limit is {}",
            extent,
            step,
            steps,
            MAX_STEPS
        );
        return None;
    }
    Some(steps as usize)
}

/// Sample the six faces of an axis-aligned cube centered on the origin.
///
/// Each face is an `(n + 1) x (n + 1)` grid with `n = floor(size / density)`.
pub fn cube_points(size: f64, density: f64, palette: &CubePalette) -> Vec<Point> {
    let Some(n) = step_count(size, density) else {
        return Vec::new();
    };
    let half = size / 2.0;
    let coord = |i: usize| -half + (i as f64) * density;

    let mut points = Vec::with_capacity(6 * (n + 1) * (n + 1));
    for (face, &glyph) in palette.faces.iter().enumerate() {
        for i in 0..=n {
            for j in 0..=n {
                let (u, v) = (coord(i), coord(j));
                let (x, y, z) = match face {
                    0 => (u, v, half),
                    1 => (u, v, -half),
                    2 => (half, v, u),
                    3 => (-half, v, u),
                    4 => (u, half, v),
                    _ => (u, -half, v),
                };
                points.push(Point::new(x, y, z, glyph));
            }
        }
    }
    points
}

/// Sample a square pyramid: base edge and height both `size`, base on `y = 0`,
/// apex at `(0, size, 0)`.
///
/// The base is a grid like one cube face. Each side triangle `(a, b, apex)` is
/// filled with `a + t(b - a) + s(apex - a)` for `t` in `[0, 1]` and `s` in
/// `[0, 1 - t]`, both stepping by `density / size`, which gives
/// `(n + 1)(n + 2) / 2` points per side.
pub fn pyramid_points(size: f64, density: f64) -> Vec<Point> {
    let Some(n) = step_count(size, density) else {
        return Vec::new();
    };
    let half = size / 2.0;
    let base_glyph = Glyph::plain(PYRAMID_BASE);

    let mut points = Vec::with_capacity((n + 1) * (n + 1) + 2 * (n + 1) * (n + 2));

    for i in 0..=n {
        for j in 0..=n {
            let x = -half + (i as f64) * density;
            let z = -half + (j as f64) * density;
            points.push(Point::new(x, 0.0, z, base_glyph));
        }
    }

    let corners = [
        (-half, 0.0, -half), // back-left
        (half, 0.0, -half),  // back-right
        (half, 0.0, half),   // front-right
        (-half, 0.0, half),  // front-left
    ];
    let apex = (0.0, size, 0.0);
    let inv = if n == 0 { 0.0 } else { 1.0 / n as f64 };

    for (side, &ch) in PYRAMID_SIDES.iter().enumerate() {
        let a = corners[side];
        let b = corners[(side + 1) % corners.len()];
        let glyph = Glyph::plain(ch);
        for i in 0..=n {
            let t = i as f64 * inv;
            for j in 0..=(n - i) {
                let s = j as f64 * inv;
                points.push(Point::new(
                    a.0 + (b.0 - a.0) * t + (apex.0 - a.0) * s,
                    a.1 + (b.1 - a.1) * t + (apex.1 - a.1) * s,
                    a.2 + (b.2 - a.2) * t + (apex.2 - a.2) * s,
                    glyph,
                ));
            }
        }
    }

    points
}
