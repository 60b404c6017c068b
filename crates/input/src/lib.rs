//! Terminal input module.
//!
//! The renderer takes exactly one piece of interactive input: the rotation
//! speed, read once at startup. Anything unusable falls back to
//! [`crate::types::DEFAULT_SPEED`] instead of failing.

pub mod prompt;

pub use tui_spin_types as types;

pub use prompt::{parse_speed, prompt_text, read_speed};
