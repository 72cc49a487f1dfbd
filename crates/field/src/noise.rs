//! Deterministic scalar hash and 3-D lattice value noise.

use glam::Vec3;

/// Linear interpolation with the parameter clamped to `[0, 1]`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Deterministic pseudo-random scalar in `[0, 1)`.
///
/// Scales `sin(n)` by a large irrational-ish constant and keeps the
/// fractional part. Adjacent integer inputs decorrelate visually; nothing
/// about this is cryptographic.
#[must_use]
pub fn hash(n: f32) -> f32 {
    let x = n.sin() * 43_758.5453;
    x - x.floor()
}

/// Value noise over the integer lattice.
///
/// Splits `p` into an integer cell and a fractional offset, applies the
/// Hermite fade `f*f*(3 - 2f)` per axis, and trilinearly interpolates the
/// hashed values of the cell's eight corners. The fade gives the field a
/// continuous derivative across cell boundaries, which the finite-difference
/// normal estimator relies on.
///
/// At exact lattice points the result equals `hash` of the cell's linear
/// index `p . (1, 57, 113)`.
#[must_use]
pub fn noise(p: Vec3) -> f32 {
    let cell = p.floor();
    let f = p - cell;
    let f = f * f * (Vec3::splat(3.0) - 2.0 * f);
    // Linear corner index; the per-corner offsets below are its strides.
    let n = cell.dot(Vec3::new(1.0, 57.0, 113.0));
    lerp(
        lerp(
            lerp(hash(n), hash(n + 1.0), f.x),
            lerp(hash(n + 57.0), hash(n + 58.0), f.x),
            f.y,
        ),
        lerp(
            lerp(hash(n + 113.0), hash(n + 114.0), f.x),
            lerp(hash(n + 170.0), hash(n + 171.0), f.x),
            f.y,
        ),
        f.z,
    )
}
