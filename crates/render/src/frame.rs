//! One frame of HDR pixels.

use glam::Vec3;

/// Row-major framebuffer, pixel at `row * width + col`, row 0 at the top.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Allocate a frame cleared to black.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width as usize * height as usize],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Vec3] {
        &mut self.pixels
    }

    #[must_use]
    pub fn pixel(&self, col: u32, row: u32) -> Vec3 {
        self.pixels[row as usize * self.width as usize + col as usize]
    }
}
