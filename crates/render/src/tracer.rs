//! Sphere tracing and normal estimation against the distance field.

use field::DistanceField;
use glam::Vec3;

/// Fraction of the reported distance actually stepped. The field is only an
/// approximate distance (displacement distorts it), so stepping the raw
/// value can tunnel through thin surface detail.
const STEP_DAMPING: f32 = 0.1;

/// Finite-difference offset for [`surface_normal`]. Tuned against the 16x
/// ripple frequency in the field crate; change the two together.
const NORMAL_EPS: f32 = 0.05;

/// Ray-march iteration budget and step floor.
#[derive(Clone, Copy, Debug)]
pub struct MarchConfig {
    /// Maximum iterations before a ray is declared a miss.
    pub max_steps: u32,
    /// Minimum forward progress per step, bounding worst-case iteration
    /// count in near-zero-gradient regions.
    pub min_step: f32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 128,
            min_step: 0.01,
        }
    }
}

/// March a ray from `origin` along unit `dir` through `field` at animation
/// time `time`.
///
/// Returns the first position where the field goes negative, or `None` if
/// the step budget runs out. A miss is the normal background outcome, not
/// an error.
#[must_use]
pub fn trace(
    field: DistanceField,
    origin: Vec3,
    dir: Vec3,
    time: f32,
    config: MarchConfig,
) -> Option<Vec3> {
    let mut pos = origin;
    for _ in 0..config.max_steps {
        let d = field.eval(pos, time);
        if d < 0.0 {
            return Some(pos);
        }
        pos += dir * (d * STEP_DAMPING).max(config.min_step);
    }
    None
}

/// Finite-difference surface normal at `p`.
///
/// Returns `None` when the sampled gradient is too short to normalize, so a
/// degenerate neighborhood never turns into NaN shading.
#[must_use]
pub fn surface_normal(field: DistanceField, p: Vec3, time: f32) -> Option<Vec3> {
    let d = field.eval(p, time);
    let grad = Vec3::new(
        field.eval(p + Vec3::new(NORMAL_EPS, 0.0, 0.0), time) - d,
        field.eval(p + Vec3::new(0.0, NORMAL_EPS, 0.0), time) - d,
        field.eval(p + Vec3::new(0.0, 0.0, NORMAL_EPS), time) - d,
    );
    grad.try_normalize()
}
