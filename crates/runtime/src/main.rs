#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
//! Frame driver: fixes the animation time per frame, renders, and hands
//! each completed framebuffer to the encoders.

use std::f32::consts::FRAC_PI_3;
use std::path::Path;

use anyhow::{Context, Result};
use field::DistanceField;
use glam::Vec3;
use render::{write_png, write_ppm, Camera, MarchConfig, Renderer};

// Run configuration, fixed for the whole animation.
const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const FOV: f32 = FRAC_PI_3;
const MAX_STEPS: u32 = 128;
const MIN_STEP: f32 = 0.01;
const SPHERE_RADIUS: f32 = 1.5;
const NOISE_AMPLITUDE: f32 = 1.0;
const NFRAMES: u32 = 120;
const FPS: f32 = 24.0;

const CAMERA_POS: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const LIGHT_POS: Vec3 = Vec3::new(10.0, 10.0, 10.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let renderer = Renderer {
        camera: Camera::new(CAMERA_POS, FOV, WIDTH, HEIGHT),
        field: DistanceField::new(SPHERE_RADIUS, NOISE_AMPLITUDE),
        march: MarchConfig {
            max_steps: MAX_STEPS,
            min_step: MIN_STEP,
        },
        light_pos: LIGHT_POS,
    };

    tracing::info!(
        "rendering {NFRAMES} frames at {WIDTH}x{HEIGHT}, {FPS} fps"
    );

    for frame_index in 0..NFRAMES {
        // Captured once here; workers inside render() only ever see this
        // frame's time.
        let time = frame_index as f32 / FPS;
        let frame = renderer.render(time);

        let name = frame_filename(frame_index);
        write_ppm(Path::new(&name), &frame)
            .with_context(|| format!("failed to write frame {frame_index}"))?;
        tracing::info!("wrote {name}");

        if frame_index == 0 {
            write_png(Path::new("preview.png"), &frame)
                .context("failed to write preview image")?;
            tracing::info!("wrote preview.png");
        }
    }

    tracing::info!("done, {NFRAMES} frames written");
    Ok(())
}

/// Zero-padded output name so frames sort in playback order.
fn frame_filename(index: u32) -> String {
    format!("out_{index:04}.ppm")
}

#[cfg(test)]
mod tests {
    use super::frame_filename;

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_filename(0), "out_0000.ppm");
        assert_eq!(frame_filename(42), "out_0042.ppm");
        assert_eq!(frame_filename(1200), "out_1200.ppm");
    }
}
