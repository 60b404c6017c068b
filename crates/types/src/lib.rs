//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rasterization, terminal presentation).
//!
//! # Coordinate System
//!
//! - **x** grows to the right
//! - **y** grows upward (screen rows grow downward, the rasterizer flips it)
//! - **z** grows away from the viewer; the camera looks down +z
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOCAL_LENGTH` | 40 | Perspective divide numerator |
//! | `FRAME_MS` | 16 | Fixed per-frame delay (~60 FPS) |
//! | `CAMERA_RADIUS` | 50 | Amplitude of the camera dolly |
//! | `CAMERA_ANGULAR_SPEED` | 1 | Radians per second of the dolly |
//! | `CAMERA_MIN_Z` | 20 | Closest the camera gets |
//! | `DEFAULT_SPEED` | 3.0 | Rotation speed when none is given |
//! | `DEFAULT_DENSITY` | 0.2 | Surface sampling step |
//!
//! # Examples
//!
//! ```
//! use tui_spin_types::{Camera, Point, Rotation, ShapeKind};
//!
//! let kind = ShapeKind::from_str("Pyramid").unwrap();
//! assert_eq!(kind, ShapeKind::Pyramid);
//!
//! let p = Point::new(1.0, 2.0, 3.0, '#');
//! assert_eq!(p.glyph.ch, '#');
//!
//! let camera = Camera::default();
//! assert_eq!((camera.x, camera.y), (0.0, 0.0));
//!
//! let mut rot = Rotation::default();
//! rot.advance(2.0);
//! assert_eq!((rot.a, rot.b, rot.c), (6.0, 2.0, 2.0));
//! ```

/// Perspective focal length: `scale = FOCAL_LENGTH / z`.
pub const FOCAL_LENGTH: f64 = 40.0;

/// Terminal width used when the real size cannot be queried.
pub const DEFAULT_WIDTH: u16 = 120;

/// Terminal height used when the real size cannot be queried.
pub const DEFAULT_HEIGHT: u16 = 40;

/// Rotation speed used when the prompt yields nothing usable.
pub const DEFAULT_SPEED: f64 = 3.0;

/// Surface sampling step for the generated solids.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Fixed per-frame delay in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Camera dolly amplitude.
pub const CAMERA_RADIUS: f64 = 50.0;

/// Camera dolly angular speed in radians per second.
pub const CAMERA_ANGULAR_SPEED: f64 = 1.0;

/// The camera never gets closer than this.
pub const CAMERA_MIN_Z: f64 = 20.0;

/// Per-frame degrees added to angles (A, B, C) for a speed of 1.
pub const SPIN_RATES: (f64, f64, f64) = (3.0, 1.0, 1.0);

/// Solid edge length is `terminal width / SIZE_DIVISOR`.
pub const SIZE_DIVISOR: u16 = 5;

/// Background glyph of an empty cell.
pub const BACKGROUND: char = ' ';

/// Vertical axis glyph.
pub const AXIS_VERTICAL: char = '|';

/// Horizontal axis glyph.
pub const AXIS_HORIZONTAL: char = '-';

/// Glyph at the axis intersection.
pub const AXIS_ORIGIN: char = '+';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What a sample point (and later a screen cell) looks like.
///
/// A glyph is one visible character, optionally painted on a colored
/// background. Colored spaces are how the cube faces get their solid look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub bg: Option<Rgb>,
}

impl Glyph {
    pub const fn plain(ch: char) -> Self {
        Self { ch, bg: None }
    }

    pub const fn on(ch: char, bg: Rgb) -> Self {
        Self { ch, bg: Some(bg) }
    }

    pub const fn background() -> Self {
        Self::plain(BACKGROUND)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::background()
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Self::plain(ch)
    }
}

/// A labeled sample point on the surface of a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub glyph: Glyph,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64, glyph: impl Into<Glyph>) -> Self {
        Self {
            x,
            y,
            z,
            glyph: glyph.into(),
        }
    }

    /// Same point, shifted by `(dx, dy, dz)`.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
            glyph: self.glyph,
        }
    }
}

/// Euler angles in degrees.
///
/// Applied as roll about Z by `c`, then yaw about Y by `b`, then pitch
/// about X by `a`. Angles accumulate without wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Rotation {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Bump every angle by its [`SPIN_RATES`] multiple of `speed`.
    pub fn advance(&mut self, speed: f64) {
        self.a += SPIN_RATES.0 * speed;
        self.b += SPIN_RATES.1 * speed;
        self.c += SPIN_RATES.2 * speed;
    }
}

/// Viewer position. Only `z` moves; `x` and `y` stay at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Camera {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0, CAMERA_MIN_Z)
    }
}

/// The solids the renderer knows how to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Pyramid,
}

impl ShapeKind {
    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_spin_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("cube"), Some(ShapeKind::Cube));
    /// assert_eq!(ShapeKind::from_str("PYRAMID"), Some(ShapeKind::Pyramid));
    /// assert_eq!(ShapeKind::from_str("sphere"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cube" => Some(ShapeKind::Cube),
            "pyramid" => Some(ShapeKind::Pyramid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
        }
    }
}

/// How face glyphs are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Color when stdout is a terminal, mono otherwise.
    #[default]
    Auto,
    Color,
    Mono,
}

impl ColorMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "color" | "colour" => Some(ColorMode::Color),
            "mono" | "monochrome" => Some(ColorMode::Mono),
            _ => None,
        }
    }

    /// Resolve `Auto` against whether the output is a terminal.
    pub fn resolve(self, is_tty: bool) -> Self {
        match self {
            ColorMode::Auto if is_tty => ColorMode::Color,
            ColorMode::Auto => ColorMode::Mono,
            other => other,
        }
    }
}

/// How finished frames reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentMode {
    /// Clear the terminal and redraw everything.
    #[default]
    Full,
    /// Redraw only the cell runs that changed since the previous frame.
    Diff,
    /// Plain text frames, no terminal control sequences.
    Text,
}

impl PresentMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Some(PresentMode::Full),
            "diff" => Some(PresentMode::Diff),
            "text" | "plain" => Some(PresentMode::Text),
            _ => None,
        }
    }
}
