//! Shape module - a point cloud plus its current rotation
//!
//! The driver keeps the generated points untouched and asks for a rotated copy
//! every frame, so rotation error never accumulates.

use crate::geometry::{cube_points, pyramid_points, CubePalette};
use crate::types::{ColorMode, Point, Rotation, ShapeKind, SIZE_DIVISOR};

/// A solid: its original sample points and the cumulative rotation to apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub points: Vec<Point>,
    pub rotation: Rotation,
}

impl Shape {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            rotation: Rotation::default(),
        }
    }

    /// Generate one of the built-in solids.
    ///
    /// `color` must already be resolved; `Auto` paints like `Color`.
    pub fn build(kind: ShapeKind, size: f64, density: f64, color: ColorMode) -> Self {
        let points = match kind {
            ShapeKind::Cube => cube_points(size, density, &CubePalette::for_mode(color)),
            ShapeKind::Pyramid => pyramid_points(size, density),
        };
        Self::new(points)
    }

    /// The solid sized for a `width`-column screen and pushed out in front of
    /// the camera: edge `width / 5`, moved `2 * edge` along +z.
    pub fn staged(kind: ShapeKind, width: u16, density: f64, color: ColorMode) -> Self {
        let size = f64::from(width / SIZE_DIVISOR);
        let mut shape = Self::build(kind, size, density, color);
        shape.translate(0.0, 0.0, size * 2.0);
        shape
    }

    /// Shift every point by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for p in &mut self.points {
            *p = p.offset(dx, dy, dz);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the points, `None` for an empty shape.
    pub fn centroid(&self) -> Option<(f64, f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (sx, sy, sz) = self
            .points
            .iter()
            .fold((0.0, 0.0, 0.0), |(x, y, z), p| (x + p.x, y + p.y, z + p.z));
        let n = self.points.len() as f64;
        Some((sx / n, sy / n, sz / n))
    }

    /// A copy rotated about the centroid by `self.rotation`.
    ///
    /// Point order and glyphs are preserved, and the rotation field is copied
    /// through unchanged.
    pub fn rotated(&self) -> Shape {
        let Some(center) = self.centroid() else {
            return self.clone();
        };
        let basis = RotationBasis::new(self.rotation);
        Shape {
            points: self
                .points
                .iter()
                .map(|p| basis.rotate_about(*p, center))
                .collect(),
            rotation: self.rotation,
        }
    }
}

/// Precomputed sines and cosines for one set of Euler angles.
#[derive(Debug, Clone, Copy)]
pub struct RotationBasis {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
    sin_c: f64,
    cos_c: f64,
}

impl RotationBasis {
    pub fn new(rotation: Rotation) -> Self {
        let (sin_a, cos_a) = rotation.a.to_radians().sin_cos();
        let (sin_b, cos_b) = rotation.b.to_radians().sin_cos();
        let (sin_c, cos_c) = rotation.c.to_radians().sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }

    /// Rotate `p` about `center`: roll about Z, then yaw about Y, then pitch about X.
    pub fn rotate_about(&self, p: Point, center: (f64, f64, f64)) -> Point {
        let (x, y, z) = (p.x - center.0, p.y - center.1, p.z - center.2);

        let x1 = x * self.cos_c - y * self.sin_c;
        let y1 = x * self.sin_c + y * self.cos_c;
        let z1 = z;

        let x2 = x1 * self.cos_b + z1 * self.sin_b;
        let y2 = y1;
        let z2 = -x1 * self.sin_b + z1 * self.cos_b;

        let x3 = x2;
        let y3 = y2 * self.cos_a - z2 * self.sin_a;
        let z3 = y2 * self.sin_a + z2 * self.cos_a;

        Point {
            x: x3 + center.0,
            y: y3 + center.1,
            z: z3 + center.2,
            glyph: p.glyph,
        }
    }
}
