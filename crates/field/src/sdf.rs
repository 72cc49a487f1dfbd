//! The animated implicit surface: a breathing sphere displaced by a
//! standing-wave ripple and `fbm` turbulence.

use glam::Vec3;

use crate::fbm::fbm;

/// How far the base radius swings over the breathing cycle.
const BREATH_AMPLITUDE: f32 = 0.25;

/// Spatial frequency of the standing-wave ripple. The normal-estimation
/// epsilon in the render crate is tuned against this; change them together.
const RIPPLE_FREQUENCY: f32 = 16.0;

/// Time-parameterized approximate signed distance field.
///
/// Negative inside the surface, positive outside. The displacement terms
/// distort true distances, so marchers must treat the returned value as a
/// bound hint, not an exact distance (see the tracer's damped step).
#[derive(Clone, Copy, Debug)]
pub struct DistanceField {
    /// Base sphere radius before breathing and displacement.
    pub radius: f32,
    /// Magnitude of the combined ripple + turbulence displacement.
    pub amplitude: f32,
}

impl DistanceField {
    #[must_use]
    pub const fn new(radius: f32, amplitude: f32) -> Self {
        Self { radius, amplitude }
    }

    /// Evaluate the field at `p` for animation time `time` (seconds).
    ///
    /// Pure in `(p, time)`: repeat calls with identical arguments return
    /// bit-identical results.
    #[must_use]
    pub fn eval(self, p: Vec3, time: f32) -> f32 {
        let radius = self.radius + BREATH_AMPLITUDE * (2.0 * time).sin();

        // High-frequency standing wave, scrolled by a shared phase.
        let phase = 6.0 * time;
        let ripple = (RIPPLE_FREQUENCY * p.x + phase).sin()
            * (RIPPLE_FREQUENCY * p.y + phase).sin()
            * (RIPPLE_FREQUENCY * p.z + phase).sin();

        // Turbulence scrolls at a different rate per axis so the motion
        // never visibly repeats.
        let drift = Vec3::new(time, 0.7 * time, 1.3 * time);
        let turbulence = fbm(2.0 * p + drift);

        let displacement = self.amplitude * (0.6 * ripple + 0.8 * (turbulence - 0.5));
        p.length() - (radius + displacement)
    }
}
