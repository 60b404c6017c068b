//! Startup prompt for the rotation speed.

use std::io::{BufRead, Write};

use crate::types::{ShapeKind, DEFAULT_SPEED};

/// The question shown before reading a speed.
pub fn prompt_text(kind: ShapeKind) -> String {
    format!(
        "Please enter {} rotation speed (0 < r < 40) [default {}]: ",
        kind.as_str(),
        DEFAULT_SPEED
    )
}

/// Parse the first whitespace-separated token of `line` as a speed.
///
/// Out-of-range values are accepted (they just spin faster, slower, or
/// backwards); only non-numbers and non-finite values are rejected.
pub fn parse_speed(line: &str) -> Option<f64> {
    let token = line.split_whitespace().next()?;
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ask for a speed on `output` and read one line from `input`.
///
/// Never fails: EOF, read errors and parse errors all yield the default.
pub fn read_speed<R: BufRead, W: Write>(input: &mut R, output: &mut W, kind: ShapeKind) -> f64 {
    if let Err(e) = output
        .write_all(prompt_text(kind).as_bytes())
        .and_then(|_| output.flush())
    {
        log::debug!("prompt: could not write prompt: {}", e);
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            log::debug!("prompt: no input, using default speed {}", DEFAULT_SPEED);
            DEFAULT_SPEED
        }
        Ok(_) => parse_speed(&line).unwrap_or_else(|| {
            log::debug!(
                "prompt: unusable speed {:?}, using default {}",
                line.trim(),
                DEFAULT_SPEED
            );
            DEFAULT_SPEED
        }),
        Err(e) => {
            log::debug!("prompt: read failed ({}), using default speed", e);
            DEFAULT_SPEED
        }
    }
}
