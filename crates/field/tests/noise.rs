use field::{hash, noise};
use glam::Vec3;

#[test]
fn hash_stays_in_unit_interval() {
    let mut n = -2000.0_f32;
    while n < 2000.0 {
        let h = hash(n);
        assert!((0.0..1.0).contains(&h), "hash({n}) = {h} out of [0,1)");
        n += 0.37;
    }
}

#[test]
fn hash_is_deterministic() {
    for n in [0.0_f32, 1.0, -57.5, 113.0, 43758.5453] {
        assert_eq!(hash(n).to_bits(), hash(n).to_bits());
    }
}

#[test]
fn noise_matches_hash_on_lattice() {
    let cells = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.0, 5.0, -6.0),
        Vec3::new(7.0, -8.0, 9.0),
    ];
    for cell in cells {
        let linear_index = cell.dot(Vec3::new(1.0, 57.0, 113.0));
        let expected = hash(linear_index);
        let got = noise(cell);
        assert!(
            (got - expected).abs() < 1e-6,
            "noise({cell:?}) = {got}, expected corner hash {expected}"
        );
    }
}

#[test]
fn noise_is_continuous_across_cell_boundary() {
    // Hermite fade has zero derivative at corners, so values straddling a
    // boundary must be close.
    let p = Vec3::new(3.0, -1.0, 2.0);
    let eps = 1e-3;
    let below = noise(p - Vec3::splat(eps));
    let above = noise(p + Vec3::splat(eps));
    assert!(
        (below - above).abs() < 1e-2,
        "noise jumps across lattice boundary: {below} vs {above}"
    );
}
