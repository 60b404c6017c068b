//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! `Full` mode clears the screen and redraws every frame. `Diff` mode keeps
//! the previous frame and only rewrites runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::{FrameBuffer, Presenter};
use crate::types::{Glyph, PresentMode, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: PresentMode,
    last: Option<FrameBuffer>,
    rows: u16,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    /// `PresentMode::Text` has no terminal encoding and is drawn like `Full`.
    pub fn new(mode: PresentMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any byte sink instead of stdout.
    pub fn with_writer(out: W, mode: PresentMode) -> Self {
        Self {
            out,
            mode,
            last: None,
            rows: 0,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        log::debug!("renderer: entering terminal, {:?} mode", self.mode);
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore colors and leave the cursor on a fresh line below the frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match (self.mode, self.last.as_ref()) {
            (PresentMode::Diff, Some(prev))
                if prev.width() == fb.width() && prev.height() == fb.height() =>
            {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.rows = fb.height();

        if self.mode == PresentMode::Diff {
            match self.last.as_mut() {
                Some(prev) => prev.clone_from(fb),
                None => self.last = Some(fb.clone()),
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new(PresentMode::Full)
    }
}

impl<W: Write> Presenter for TerminalRenderer<W> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_bg: Option<Option<Rgb>> = None;
    for (y, row) in fb.rows().enumerate() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for glyph in row {
            put_glyph_into(out, *glyph, &mut current_bg)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_bg: Option<Option<Rgb>> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = next.get(x + dx, y).unwrap_or_default();
            put_glyph_into(out, glyph, &mut current_bg)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn put_glyph_into(
    out: &mut Vec<u8>,
    glyph: Glyph,
    current_bg: &mut Option<Option<Rgb>>,
) -> Result<()> {
    if *current_bg != Some(glyph.bg) {
        out.queue(SetBackgroundColor(bg_to_color(glyph.bg)))?;
        *current_bg = Some(glyph.bg);
    }
    out.queue(Print(glyph.ch))?;
    Ok(())
}

fn bg_to_color(bg: Option<Rgb>) -> Color {
    match bg {
        Some(rgb) => Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        None => Color::Reset,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Camera;

    fn text_of(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn full_redraw_clears_then_prints_rows() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, Glyph::plain('A'));
        fb.set(2, 1, Glyph::plain('B'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = text_of(&out);

        assert!(s.starts_with("\x1b[2J"));
        assert!(s.contains("A  \r\n  B"));
    }

    #[test]
    fn colored_glyphs_set_the_background() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(1, 0, Glyph::on(' ', Rgb::new(255, 85, 85)));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(text_of(&out).contains("\x1b[48;2;255;85;85m"));
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Glyph::plain('X'));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let mut a = FrameBuffer::new(6, 4);
        a.draw_axes(&Camera::default());
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(!text_of(&out).contains('|'));
        assert!(!text_of(&out).contains('+'));
    }

    #[test]
    fn depth_only_changes_are_not_redrawn() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.test_and_set(1, 0, 4.0, Glyph::background());

        let mut runs = 0;
        for_each_changed_run(&a, &b, |_, _, _| {
            runs += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, 0);
    }

    #[test]
    fn diff_mode_draws_full_first_then_only_changes() {
        let red = Rgb::new(255, 85, 85);
        let mut first = FrameBuffer::new(4, 3);
        first.set(0, 0, Glyph::plain('A'));
        let mut second = first.clone();
        second.set(2, 1, Glyph::on(' ', red));

        let mut renderer = TerminalRenderer::with_writer(Vec::new(), PresentMode::Diff);
        renderer.draw(&first).unwrap();
        let first_len = renderer.get_ref().len();
        renderer.draw(&second).unwrap();
        let out = renderer.into_inner();

        let full = text_of(&out[..first_len]);
        assert!(full.starts_with("\x1b[2J"));
        assert!(full.contains('A'));

        let diff = text_of(&out[first_len..]);
        assert!(!diff.contains("\x1b[2J"));
        assert!(!diff.contains('A'));
        // row 1, column 2 is 1-based "2;3"
        assert!(diff.starts_with("\x1b[2;3H"));
        assert!(diff.contains("\x1b[48;2;255;85;85m "));
    }

    #[test]
    fn full_mode_redraws_every_frame() {
        let fb = FrameBuffer::new(2, 2);
        let mut renderer = TerminalRenderer::with_writer(Vec::new(), PresentMode::Full);
        renderer.present(&fb).unwrap();
        renderer.present(&fb).unwrap();
        let s = text_of(&renderer.into_inner());
        assert_eq!(s.matches("\x1b[2J").count(), 2);
    }

    #[test]
    fn diff_encodes_move_then_glyph_for_a_changed_cell() {
        let a = FrameBuffer::new(5, 2);
        let mut b = a.clone();
        b.set(3, 0, Glyph::plain('Z'));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(text_of(&out).contains("\x1b[1;4H"));
        assert!(text_of(&out).contains('Z'));
    }

    #[test]
    fn exit_moves_below_the_last_frame() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new(), PresentMode::Full);
        renderer.draw(&FrameBuffer::new(3, 5)).unwrap();
        let drawn = renderer.get_ref().len();
        renderer.exit().unwrap();
        let tail = text_of(&renderer.into_inner()[drawn..]);
        assert!(tail.contains("\x1b[5;1H"));
        assert!(tail.ends_with("\r\n"));
    }
}
