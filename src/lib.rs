//! TUI Spin (workspace facade crate).
//!
//! Re-exports the member crates as `tui_spin::{core,input,term,types}` and
//! hosts the command-line/environment configuration used by the binary.

pub mod config;

pub use tui_spin_core as core;
pub use tui_spin_input as input;
pub use tui_spin_term as term;
pub use tui_spin_types as types;
