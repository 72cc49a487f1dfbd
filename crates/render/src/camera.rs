//! Pinhole camera: pixel coordinates to primary ray directions.

use glam::Vec3;

/// Fixed camera looking down the negative Z axis.
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Camera {
    #[must_use]
    pub const fn new(eye: Vec3, fov: f32, width: u32, height: u32) -> Self {
        Self {
            eye,
            fov,
            width,
            height,
        }
    }

    /// Unit direction of the primary ray through the center of pixel
    /// `(col, row)`, with row 0 at the top of the image.
    #[must_use]
    pub fn ray_direction(&self, col: u32, row: u32) -> Vec3 {
        let width = self.width as f32;
        let height = self.height as f32;
        let x = (col as f32 + 0.5) - width / 2.0;
        // Flip so +y points up in the image.
        let y = -(row as f32 + 0.5) + height / 2.0;
        let z = -height / (2.0 * (self.fov / 2.0).tan());
        // z is strictly negative for any positive fov below pi, so the
        // direction can never be the zero vector.
        Vec3::new(x, y, z).normalize()
    }
}
