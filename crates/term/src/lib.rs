//! Terminal presentation module.
//!
//! Frames come out of `core` as a [`FrameBuffer`] of glyphs; this crate gets
//! them onto an output:
//!
//! - [`TerminalRenderer`]: crossterm, full clear-and-redraw or changed-run diffs
//! - [`TextPresenter`]: plain text frames for pipes, files and tests
//! - [`FramePacer`]: fixed per-frame delay (~60 FPS by default)

pub mod pacer;
pub mod renderer;
pub mod text;

pub use tui_spin_core as core;
pub use tui_spin_types as types;

pub use tui_spin_core::FrameBuffer;
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::TextPresenter;
