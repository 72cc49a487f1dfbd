//! Per-frame pixel fan-out.

use field::DistanceField;
use glam::Vec3;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::frame::Framebuffer;
use crate::shade::{shade, SKY};
use crate::tracer::{surface_normal, trace, MarchConfig};

/// Everything fixed for the duration of a run: camera, field, march budget
/// and light. Animation time is the only per-frame input, passed explicitly
/// to [`Renderer::render`] so no worker can observe another frame's time.
pub struct Renderer {
    pub camera: Camera,
    pub field: DistanceField,
    pub march: MarchConfig,
    pub light_pos: Vec3,
}

impl Renderer {
    /// Render one frame at animation time `time` (seconds).
    ///
    /// Rows are distributed across the rayon pool; every worker writes a
    /// disjoint slice of the framebuffer and the join happens before the
    /// buffer is returned, so callers always see a fully populated frame.
    #[must_use]
    pub fn render(&self, time: f32) -> Framebuffer {
        let started = std::time::Instant::now();
        let mut frame = Framebuffer::new(self.camera.width, self.camera.height);
        let width = self.camera.width as usize;

        frame
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, line)| {
                for (col, pixel) in line.iter_mut().enumerate() {
                    *pixel = self.color_at(col as u32, row as u32, time);
                }
            });

        tracing::debug!(
            "rendered {}x{} frame at t={time:.3}s in {:?}",
            self.camera.width,
            self.camera.height,
            started.elapsed()
        );
        frame
    }

    fn color_at(&self, col: u32, row: u32, time: f32) -> Vec3 {
        let dir = self.camera.ray_direction(col, row);
        let Some(hit) = trace(self.field, self.camera.eye, dir, time, self.march) else {
            return SKY;
        };
        // A degenerate gradient has no usable normal; treat it like a miss
        // rather than shading with garbage.
        match surface_normal(self.field, hit, time) {
            Some(normal) => shade(hit, normal, time, self.camera.eye, self.light_pos),
            None => SKY,
        }
    }
}
