//! Framebuffer: a grid of glyph cells with a parallel depth plane.

use crate::types::{Camera, Glyph, AXIS_HORIZONTAL, AXIS_ORIGIN, AXIS_VERTICAL};

/// 2D framebuffer of glyph cells plus one depth value per cell.
///
/// Both planes always share the same dimensions and are reset together.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
    depth: Vec<f64>,
}

impl FrameBuffer {
    /// A blank framebuffer: background cells, infinite depth, no axes.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Glyph::background(); len],
            depth: vec![f64::INFINITY; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    pub fn depths(&self) -> &[f64] {
        &self.depth
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn depth(&self, x: u16, y: u16) -> Option<f64> {
        self.idx(x, y).map(|i| self.depth[i])
    }

    /// Overwrite a cell's glyph without touching its depth.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Write `glyph` at `(x, y)` if `z` is strictly nearer than what the cell holds.
    ///
    /// Returns whether the cell was written. Equal depths keep the earlier writer.
    #[inline]
    pub fn test_and_set(&mut self, x: u16, y: u16, z: f64, glyph: Glyph) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        if z < self.depth[i] {
            self.depth[i] = z;
            self.cells[i] = glyph;
            true
        } else {
            false
        }
    }

    /// Background everywhere, infinite depth everywhere.
    pub fn clear(&mut self) {
        self.cells.fill(Glyph::background());
        self.depth.fill(f64::INFINITY);
    }

    /// Draw the reference axes through the screen point under the world origin.
    ///
    /// Axes only touch glyphs; their cells keep infinite depth so any point
    /// drawn afterwards covers them.
    pub fn draw_axes(&mut self, camera: &Camera) {
        let origin_x = (f64::from(self.width) / 2.0 - camera.x) as i64;
        let origin_y = (f64::from(self.height) / 2.0 - camera.y) as i64;
        let col = u16::try_from(origin_x).ok().filter(|&x| x < self.width);
        let row = u16::try_from(origin_y).ok().filter(|&y| y < self.height);

        if let Some(x) = col {
            for y in 0..self.height {
                self.set(x, y, Glyph::plain(AXIS_VERTICAL));
            }
        }
        if let Some(y) = row {
            for x in 0..self.width {
                self.set(x, y, Glyph::plain(AXIS_HORIZONTAL));
            }
        }
        if let (Some(x), Some(y)) = (col, row) {
            self.set(x, y, Glyph::plain(AXIS_ORIGIN));
        }
    }

    /// Prepare for the next frame: clear both planes, then redraw the axes.
    pub fn reset(&mut self, camera: &Camera) {
        self.clear();
        self.draw_axes(camera);
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Glyph> {
        // A zero-width grid has no cells, so the clamped chunk size yields no rows.
        self.cells.chunks_exact(usize::from(self.width).max(1))
    }

    /// Characters only: each row concatenated, rows joined by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|g| g.ch));
        }
        out
    }
}
