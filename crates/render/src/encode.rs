//! Frame serialization: binary PPM per frame, PNG for previews.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::frame::Framebuffer;

/// Clamp an HDR channel into a display byte.
fn tone_map(channel: f32) -> u8 {
    (255.0 * channel.clamp(0.0, 1.0)).round() as u8
}

/// Write a frame as binary PPM: `P6\n<w> <h>\n255\n` then one RGB byte
/// triple per pixel, row-major, top row first.
pub fn write_ppm(path: &Path, frame: &Framebuffer) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "P6\n{} {}\n255\n", frame.width(), frame.height())
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    let mut bytes = Vec::with_capacity(frame.pixels().len() * 3);
    for pixel in frame.pixels() {
        bytes.push(tone_map(pixel.x));
        bytes.push(tone_map(pixel.y));
        bytes.push(tone_map(pixel.z));
    }
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write pixels to {}", path.display()))
}

/// Write a frame as PNG with the same clamping tone map.
pub fn write_png(path: &Path, frame: &Framebuffer) -> Result<()> {
    let mut img = image::RgbImage::new(frame.width(), frame.height());
    for (col, row, out) in img.enumerate_pixels_mut() {
        let pixel = frame.pixel(col, row);
        *out = image::Rgb([tone_map(pixel.x), tone_map(pixel.y), tone_map(pixel.z)]);
    }
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
