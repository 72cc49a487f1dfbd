use glam::Vec3;
use render::palette_fire;

#[test]
fn endpoints_match_the_stops() {
    assert_eq!(palette_fire(0.0), Vec3::new(0.4, 0.4, 0.4));
    assert_eq!(palette_fire(1.0), Vec3::new(1.7, 1.3, 1.0));
}

#[test]
fn input_is_clamped() {
    assert_eq!(palette_fire(-3.0), palette_fire(0.0));
    assert_eq!(palette_fire(7.5), palette_fire(1.0));
}

#[test]
fn hot_end_is_hdr() {
    let hot = palette_fire(1.0);
    assert!(hot.x > 1.0 && hot.y > 1.0, "hottest stop should exceed 1.0");
}

#[test]
fn ramp_is_continuous_at_segment_boundaries() {
    for boundary in [0.25_f32, 0.5, 0.75] {
        let eps = 1e-4;
        let below = palette_fire(boundary - eps);
        let above = palette_fire(boundary + eps);
        let diff = (below - above).abs().max_element();
        assert!(
            diff < 1e-2,
            "palette jumps at {boundary}: {below:?} vs {above:?}"
        );
    }
}
