//! Runtime configuration: defaults, then `SPIN_*` environment variables, then
//! command-line flags.

use anyhow::{anyhow, Result};

use crate::types::{
    ColorMode, PresentMode, ShapeKind, DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS,
};

pub const USAGE: &str = "\
Usage: tui-spin [OPTIONS]

Options:
  --shape <cube|pyramid>       solid to render (SPIN_SHAPE)
  --speed <F>                  rotation speed; prompts when absent (SPIN_SPEED)
  --density <F>                surface sampling step (SPIN_DENSITY)
  --frame-ms <N>               delay after each frame (SPIN_FRAME_MS)
  --frames <N>                 stop after N frames; runs forever by default
  --color <auto|color|mono>    face painting (SPIN_COLOR)
  --present <full|diff|text>   output mode (SPIN_PRESENT)
  --size <WxH>                 screen size instead of the terminal's
  -h, --help                   print this help
";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub shape: ShapeKind,
    /// `None` means ask on stdin.
    pub speed: Option<f64>,
    pub density: f64,
    pub frame_ms: u64,
    /// `None` means run until killed.
    pub frames: Option<u64>,
    pub color: ColorMode,
    pub present: PresentMode,
    /// `None` means query the terminal.
    pub size: Option<(u16, u16)>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cube,
            speed: None,
            density: DEFAULT_DENSITY,
            frame_ms: FRAME_MS,
            frames: None,
            color: ColorMode::Auto,
            present: PresentMode::Full,
            size: None,
            help: false,
        }
    }
}

impl Config {
    /// Resolve from the process environment and `std::env::args()`.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_env_with(|key| std::env::var(key).ok());
        let args: Vec<String> = std::env::args().skip(1).collect();
        config.apply_args(&args)?;
        Ok(config)
    }

    /// Defaults overlaid with whatever `get` returns for the `SPIN_*` keys.
    ///
    /// Malformed values are logged and ignored.
    pub fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var("SPIN_SHAPE") {
            match ShapeKind::from_str(&v) {
                Some(kind) => config.shape = kind,
                None => log::warn!("config: ignoring SPIN_SHAPE={:?}", v),
            }
        }
        if let Some(v) = var("SPIN_SPEED") {
            match parse_finite(&v) {
                Some(speed) => config.speed = Some(speed),
                None => log::warn!("config: ignoring SPIN_SPEED={:?}", v),
            }
        }
        if let Some(v) = var("SPIN_DENSITY") {
            match parse_finite(&v).filter(|d| *d > 0.0) {
                Some(density) => config.density = density,
                None => log::warn!("config: ignoring SPIN_DENSITY={:?}", v),
            }
        }
        if let Some(v) = var("SPIN_FRAME_MS") {
            match v.parse::<u64>() {
                Ok(ms) => config.frame_ms = ms,
                Err(_) => log::warn!("config: ignoring SPIN_FRAME_MS={:?}", v),
            }
        }
        if let Some(v) = var("SPIN_COLOR") {
            match ColorMode::from_str(&v) {
                Some(mode) => config.color = mode,
                None => log::warn!("config: ignoring SPIN_COLOR={:?}", v),
            }
        }
        if let Some(v) = var("SPIN_PRESENT") {
            match PresentMode::from_str(&v) {
                Some(mode) => config.present = mode,
                None => log::warn!("config: ignoring SPIN_PRESENT={:?}", v),
            }
        }

        config
    }

    /// Apply command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "-h" || flag == "--help" {
                self.help = true;
                i += 1;
                continue;
            }

            i += 1;
            let v = args
                .get(i)
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag {
                "--shape" => {
                    self.shape = ShapeKind::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --shape value: {}", v))?;
                }
                "--speed" => {
                    self.speed = Some(
                        parse_finite(v).ok_or_else(|| anyhow!("invalid --speed value: {}", v))?,
                    );
                }
                "--density" => {
                    self.density = parse_finite(v)
                        .filter(|d| *d > 0.0)
                        .ok_or_else(|| anyhow!("invalid --density value: {}", v))?;
                }
                "--frame-ms" => {
                    self.frame_ms = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --frame-ms value: {}", v))?;
                }
                "--frames" => {
                    self.frames = Some(
                        v.parse::<u64>()
                            .map_err(|_| anyhow!("invalid --frames value: {}", v))?,
                    );
                }
                "--color" => {
                    self.color = ColorMode::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --color value: {}", v))?;
                }
                "--present" => {
                    self.present = PresentMode::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --present value: {}", v))?;
                }
                "--size" => {
                    self.size = Some(
                        parse_size(v).ok_or_else(|| anyhow!("invalid --size value: {}", v))?,
                    );
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured size, else the terminal's, else 120x40.
    pub fn screen_size(&self) -> (u16, u16) {
        self.size.unwrap_or_else(terminal_size)
    }

    /// Text frames go to stdout for piping, so the speed prompt must not.
    pub fn prompt_on_stderr(&self) -> bool {
        self.present == PresentMode::Text
    }
}

/// Current terminal size, or the 120x40 default when it cannot be read.
pub fn terminal_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((w, h)) if w > 0 && h > 0 => (w, h),
        Ok(_) => {
            log::debug!("config: terminal reported zero size, using default");
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        }
        Err(e) => {
            log::debug!("config: terminal size unavailable ({}), using default", e);
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"80x24"` (also `X`) into `(80, 24)`; both sides must be non-zero.
pub fn parse_size(s: &str) -> Option<(u16, u16)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse::<u16>().ok().filter(|w| *w > 0)?;
    let h = h.trim().parse::<u16>().ok().filter(|h| *h > 0)?;
    Some((w, h))
}
