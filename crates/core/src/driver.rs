//! Animation driver: owns the simulation state and runs the frame loop.
//!
//! Presentation and pacing are injected through [`Presenter`] and [`Pacer`],
//! so the loop itself never touches a terminal.

use std::time::Instant;

use anyhow::Result;

use crate::camera::CameraPath;
use crate::fb::FrameBuffer;
use crate::raster::RenderContext;
use crate::shape::Shape;

/// Somewhere finished frames go.
pub trait Presenter {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

/// Called once per frame to hold the frame rate.
pub trait Pacer {
    fn pace(&mut self);
}

/// Owns the solid and its rotation; moves the camera; draws frames.
#[derive(Debug, Clone)]
pub struct Driver {
    shape: Shape,
    speed: f64,
    path: CameraPath,
    frames: u64,
}

impl Driver {
    pub fn new(shape: Shape, speed: f64) -> Self {
        Self {
            shape,
            speed,
            path: CameraPath::default(),
            frames: 0,
        }
    }

    pub fn with_camera_path(mut self, path: CameraPath) -> Self {
        self.path = path;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Frames presented by [`Driver::run`] so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Step the simulation: spin the solid and move the camera to its
    /// position `elapsed_secs` into the run.
    pub fn advance(&mut self, ctx: &mut RenderContext, elapsed_secs: f64) {
        self.shape.rotation.advance(self.speed);
        ctx.camera_mut().z = self.path.z_at(elapsed_secs);
    }

    /// Rotate the original points by the current angles and rasterize them.
    ///
    /// Returns how many cells were written.
    pub fn draw(&self, ctx: &mut RenderContext) -> usize {
        let rotated = self.shape.rotated();
        ctx.plot_all(&rotated.points)
    }

    /// Run the frame loop.
    ///
    /// Each frame: advance, draw, present, reset the framebuffer, pace.
    /// With `limit` set to `None` this only returns when presenting fails.
    pub fn run<P, C>(
        &mut self,
        ctx: &mut RenderContext,
        presenter: &mut P,
        pacer: &mut C,
        limit: Option<u64>,
    ) -> Result<()>
    where
        P: Presenter + ?Sized,
        C: Pacer + ?Sized,
    {
        let start = Instant::now();
        log::debug!(
            "driver: starting, {} points, speed {}, limit {:?}",
            self.shape.len(),
            self.speed,
            limit
        );

        let mut remaining = limit;
        while remaining != Some(0) {
            self.advance(ctx, start.elapsed().as_secs_f64());
            let written = self.draw(ctx);
            log::trace!(
                "driver: frame {} camera z {:.2} cells written {}",
                self.frames,
                ctx.camera().z,
                written
            );

            presenter.present(ctx.fb())?;
            ctx.reset();
            pacer.pace();

            self.frames += 1;
            remaining = remaining.map(|n| n - 1);
        }

        log::debug!("driver: stopped after {} frames", self.frames);
        Ok(())
    }
}
