//! Rasterizer: perspective projection onto the character grid with a depth test.
//!
//! This module is pure (no I/O). The render context owns the framebuffer and
//! the camera, so nothing about a frame lives in globals.

use crate::fb::FrameBuffer;
use crate::types::{Camera, Point, FOCAL_LENGTH};

/// Where a point lands on screen and how far it is from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: u16,
    pub y: u16,
    pub depth: f64,
}

/// Project a world-space point for a `width` x `height` grid.
///
/// Returns `None` when the point is at or behind the camera plane, or when it
/// lands outside the grid. Y is flipped (rows grow downward) and halved to
/// make up for character cells being about twice as tall as wide.
pub fn project(point: &Point, camera: &Camera, width: u16, height: u16) -> Option<Projection> {
    let x = point.x - camera.x;
    let y = -(point.y - camera.y) / 2.0;
    let z = point.z - camera.z;

    if z.is_nan() || z <= 0.0 {
        return None;
    }

    let scale = FOCAL_LENGTH / z;
    // Truncate toward zero, then shift so the grid center is the origin.
    let sx = (x * scale).trunc() + f64::from(width / 2);
    let sy = (y * scale).trunc() + f64::from(height / 2);

    if !(0.0..f64::from(width)).contains(&sx) || !(0.0..f64::from(height)).contains(&sy) {
        return None;
    }

    Some(Projection {
        x: sx as u16,
        y: sy as u16,
        depth: z,
    })
}

/// Per-frame render state: framebuffer, depth plane and camera.
#[derive(Debug, Clone)]
pub struct RenderContext {
    fb: FrameBuffer,
    camera: Camera,
}

impl RenderContext {
    /// A context ready for its first frame (cleared, axes drawn).
    pub fn new(width: u16, height: u16, camera: Camera) -> Self {
        let mut fb = FrameBuffer::new(width, height);
        fb.reset(&camera);
        Self { fb, camera }
    }

    pub fn width(&self) -> u16 {
        self.fb.width()
    }

    pub fn height(&self) -> u16 {
        self.fb.height()
    }

    pub fn fb(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Project `point` and write it if it is the nearest so far in its cell.
    ///
    /// Returns whether a cell changed.
    pub fn plot(&mut self, point: &Point) -> bool {
        match project(point, &self.camera, self.fb.width(), self.fb.height()) {
            Some(p) => self.fb.test_and_set(p.x, p.y, p.depth, point.glyph),
            None => false,
        }
    }

    /// Plot every point in order. Returns how many writes won the depth test.
    pub fn plot_all<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) -> usize {
        points.into_iter().filter(|p| self.plot(p)).count()
    }

    /// Wipe the frame and redraw the axes for the current camera.
    pub fn reset(&mut self) {
        self.fb.reset(&self.camera);
    }
}
