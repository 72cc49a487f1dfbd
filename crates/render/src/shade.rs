//! Surface shading: Lambert + rim lighting through a fire color ramp.

use field::fbm;
use glam::Vec3;

/// Flat background color for rays that miss the surface.
pub const SKY: Vec3 = Vec3::new(0.2, 0.7, 0.8);

const GRAY: Vec3 = Vec3::new(0.4, 0.4, 0.4);
const DARK_GRAY: Vec3 = Vec3::new(0.2, 0.2, 0.2);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const ORANGE: Vec3 = Vec3::new(1.0, 0.6, 0.0);
// Deliberately above 1.0: the hottest highlight stays over-bright until the
// encoder clamps it.
const YELLOW: Vec3 = Vec3::new(1.7, 1.3, 1.0);

const AMBIENT: f32 = 0.25;
const LAMBERT_WEIGHT: f32 = 0.9;
const RIM_WEIGHT: f32 = 0.4;

/// Four-segment fire ramp: gray, darkgray, red, orange, yellow.
///
/// The input is clamped to `[0, 1]`; each quarter-width segment lerps
/// between successive stops with parameter `4d - k`, which makes the ramp
/// continuous at the segment boundaries.
#[must_use]
pub fn palette_fire(d: f32) -> Vec3 {
    let x = d.clamp(0.0, 1.0);
    if x < 0.25 {
        GRAY.lerp(DARK_GRAY, 4.0 * x)
    } else if x < 0.5 {
        DARK_GRAY.lerp(RED, 4.0 * x - 1.0)
    } else if x < 0.75 {
        RED.lerp(ORANGE, 4.0 * x - 2.0)
    } else {
        ORANGE.lerp(YELLOW, 4.0 * x - 3.0)
    }
}

/// Shade a surface hit.
///
/// Combines a Lambert term toward `light_pos`, a Fresnel-like rim term
/// toward `eye`, and a surface tint sampled from a second, slower-scrolling
/// `fbm` field. The result is HDR; clamping happens at encode time.
#[must_use]
pub fn shade(hit: Vec3, normal: Vec3, time: f32, eye: Vec3, light_pos: Vec3) -> Vec3 {
    let light_dir = (light_pos - hit).normalize_or_zero();
    let lambert = normal.dot(light_dir).max(0.0);

    let view_dir = (eye - hit).normalize_or_zero();
    let rim = (1.0 - normal.dot(view_dir).max(0.0)).max(0.0).powi(2);

    let intensity = AMBIENT + LAMBERT_WEIGHT * lambert + RIM_WEIGHT * rim;

    let tint = palette_fire(fbm(2.5 * hit + Vec3::new(0.0, 0.0, 1.2 * time)));
    tint * intensity
}
