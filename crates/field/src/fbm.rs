//! Fractal Brownian motion: rotated, rescaled octaves of lattice noise.

use glam::{Mat3, Vec3};

use crate::noise::noise;

/// Fixed rotation applied to the sample point before the first octave,
/// so octave lattices do not share axes with the input space.
const OCTAVE_ROTATION: Mat3 = Mat3::from_cols(
    Vec3::new(0.0, -0.8, -0.6),
    Vec3::new(0.8, 0.36, -0.48),
    Vec3::new(0.6, -0.48, 0.64),
);

/// Sum of the four octave amplitudes; divides the accumulated signal back
/// into a nominal `[0, 1]` range.
const AMPLITUDE_SUM: f32 = 0.9375;

/// Four-octave fractal noise with a nominal `[0, 1]` output range.
///
/// The inter-octave rescale factors (2.32, 3.03, 2.61) are deliberately
/// irrational-like so the octave lattices never align periodically. Pure in
/// `p`; callers animate the field by offsetting the sample point by time.
#[must_use]
pub fn fbm(p: Vec3) -> f32 {
    let mut p = OCTAVE_ROTATION * p;
    let mut f = 0.5 * noise(p);
    p *= 2.32;
    f += 0.25 * noise(p);
    p *= 3.03;
    f += 0.125 * noise(p);
    p *= 2.61;
    f += 0.0625 * noise(p);
    f / AMPLITUDE_SUM
}
