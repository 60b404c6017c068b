//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the whole rendering pipeline for the spinning solids.
//! It has **no dependencies** on the terminal, making it:
//!
//! - **Deterministic**: Same size, density and angles produce identical frames
//! - **Testable**: Every stage can be checked on a tiny framebuffer
//! - **Portable**: Frames can go to a terminal, a file, or a test recorder
//!
//! # Module Structure
//!
//! - [`geometry`]: surface point clouds for the cube and the pyramid
//! - [`shape`]: a point cloud plus its Euler rotation about the centroid
//! - [`fb`]: glyph grid with a parallel depth plane and reference axes
//! - [`raster`]: perspective projection and the depth-tested plot
//! - [`camera`]: the camera's dolly path along z
//! - [`driver`]: per-frame simulation step and the frame loop
//!
//! # Pipeline
//!
//! Points are generated once. Every frame the driver bumps the rotation,
//! moves the camera, rotates the *original* points by the cumulative angles,
//! plots them nearest-wins, hands the framebuffer to a [`Presenter`], and
//! resets the framebuffer for the next frame.
//!
//! # Example
//!
//! ```
//! use tui_spin_core::{RenderContext, Shape};
//! use tui_spin_core::types::{Camera, ColorMode, Point, ShapeKind};
//!
//! let mut ctx = RenderContext::new(80, 24, Camera::new(0.0, 0.0, 20.0));
//! assert!(ctx.plot(&Point::new(0.0, 0.0, 40.0, 'X')));
//! assert_eq!(ctx.fb().get(40, 12).unwrap().ch, 'X');
//! assert_eq!(ctx.fb().depth(40, 12), Some(20.0));
//!
//! let cube = Shape::build(ShapeKind::Cube, 10.0, 2.0, ColorMode::Mono);
//! assert_eq!(cube.len(), 216);
//! ```

pub mod camera;
pub mod driver;
pub mod fb;
pub mod geometry;
pub mod raster;
pub mod shape;

pub use tui_spin_types as types;

// Re-export commonly used types for convenience
pub use camera::CameraPath;
pub use driver::{Driver, Pacer, Presenter};
pub use fb::FrameBuffer;
pub use geometry::{cube_points, pyramid_points, CubePalette};
pub use raster::{project, Projection, RenderContext};
pub use shape::{RotationBasis, Shape};
