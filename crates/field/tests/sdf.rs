use field::DistanceField;
use glam::Vec3;

#[test]
fn eval_is_pure() {
    let field = DistanceField::new(1.5, 1.0);
    let p = Vec3::new(0.2, -1.1, 2.4);
    for t in [0.0_f32, 0.5, 3.75] {
        assert_eq!(
            field.eval(p, t).to_bits(),
            field.eval(p, t).to_bits(),
            "sdf not bit-identical at t={t}"
        );
    }
}

#[test]
fn sign_is_negative_inside_positive_outside() {
    let field = DistanceField::new(1.5, 1.0);
    // Displacement is bounded by the amplitude, so the origin is always
    // well inside and a point at distance 10 always well outside.
    assert!(field.eval(Vec3::ZERO, 0.0) < 0.0);
    assert!(field.eval(Vec3::new(0.0, 0.0, 10.0), 0.0) > 0.0);
}

#[test]
fn zero_amplitude_reduces_to_breathing_sphere() {
    let field = DistanceField::new(1.5, 0.0);
    let p = Vec3::new(0.0, 0.0, 3.0);

    // t = 0: sin(0) = 0, radius is exactly the base radius.
    let d = field.eval(p, 0.0);
    assert!((d - 1.5).abs() < 1e-5, "d = {d}");

    // t = pi/4: sin(2t) = 1, radius has grown by the breathing amplitude.
    let d = field.eval(p, std::f32::consts::FRAC_PI_4);
    assert!((d - 1.25).abs() < 1e-5, "d = {d}");
}
