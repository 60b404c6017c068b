//! Fixed-delay frame pacing.

use std::thread;
use std::time::Duration;

use crate::core::Pacer;
use crate::types::FRAME_MS;

/// Sleeps a fixed amount after every frame.
///
/// Drawing time is not subtracted; the demo only needs to stay near 60 FPS,
/// not hit it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    delay: Duration,
}

impl FramePacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_millis(FRAME_MS)
    }
}

impl Pacer for FramePacer {
    fn pace(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn default_is_about_sixty_fps() {
        assert_eq!(FramePacer::default().delay(), Duration::from_millis(16));
    }

    #[test]
    fn pace_sleeps_at_least_the_delay() {
        let mut pacer = FramePacer::from_millis(5);
        let start = Instant::now();
        pacer.pace();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn zero_delay_does_not_sleep() {
        let mut pacer = FramePacer::from_millis(0);
        let start = Instant::now();
        for _ in 0..1000 {
            pacer.pace();
        }
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
