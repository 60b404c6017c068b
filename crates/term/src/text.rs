//! Plain text presenter: no escape sequences, no colors.

use std::io::Write;

use anyhow::Result;

use crate::core::{FrameBuffer, Presenter};

/// Writes each frame as text followed by a blank line.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.write_all(fb.to_text().as_bytes())?;
        self.out.write_all(b"\n\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Camera;

    #[test]
    fn frames_are_separated_by_blank_lines() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.draw_axes(&Camera::default());
        let mut p = TextPresenter::new(Vec::new());
        p.present(&fb).unwrap();
        p.present(&fb).unwrap();
        let out = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(out, " | \n-+-\n | \n\n | \n-+-\n | \n\n");
    }
}
