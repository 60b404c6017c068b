//! Spinning solid runner (default binary).
//!
//! Reads the configuration, asks for a rotation speed when none was given,
//! then animates the solid until the process is killed (or `--frames` runs out).

use std::io::{self, IsTerminal};

use anyhow::Result;

use tui_spin::config::{Config, USAGE};
use tui_spin::core::{Driver, RenderContext, Shape};
use tui_spin::input::read_speed;
use tui_spin::term::{FramePacer, TerminalRenderer, TextPresenter};
use tui_spin::types::{Camera, ColorMode, PresentMode};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load()?;
    if config.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let (width, height) = config.screen_size();
    let color = match config.present {
        PresentMode::Text => ColorMode::Mono,
        _ => config.color.resolve(io::stdout().is_terminal()),
    };

    let speed = match config.speed {
        Some(speed) => speed,
        None if config.prompt_on_stderr() => {
            read_speed(&mut io::stdin().lock(), &mut io::stderr(), config.shape)
        }
        None => read_speed(&mut io::stdin().lock(), &mut io::stdout(), config.shape),
    };

    let shape = Shape::staged(config.shape, width, config.density, color);
    log::info!(
        "{} with {} points on {}x{}, speed {}, {:?} {:?}",
        config.shape.as_str(),
        shape.len(),
        width,
        height,
        speed,
        color,
        config.present
    );

    let mut driver = Driver::new(shape, speed);
    let mut ctx = RenderContext::new(width, height, Camera::default());
    let mut pacer = FramePacer::from_millis(config.frame_ms);

    if config.present == PresentMode::Text {
        let mut presenter = TextPresenter::new(io::stdout().lock());
        return driver.run(&mut ctx, &mut presenter, &mut pacer, config.frames);
    }

    let mut term = TerminalRenderer::new(config.present);
    term.enter()?;

    let result = driver.run(&mut ctx, &mut term, &mut pacer, config.frames);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
