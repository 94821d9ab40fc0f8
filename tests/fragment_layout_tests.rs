use std::f64::consts::{FRAC_PI_4, TAU};

use approx::assert_abs_diff_eq;
use kyros_portal::core::{Easing, FragmentLayout, layout, strut_opacity};

#[test]
fn every_fragment_is_at_rest_when_assembled() {
    for index in 0..4 {
        let fragment = layout(index, 1.0);
        assert!(fragment.is_identity());
        assert_eq!(fragment.opacity, 1.0);
    }
}

#[test]
fn scattered_fragments_follow_the_explosion_geometry() {
    let fragment = layout(0, 0.0);
    assert_abs_diff_eq!(fragment.position.x, FRAC_PI_4.cos() * 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.position.z, FRAC_PI_4.sin() * 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.position.y, -3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.rotation, TAU, epsilon = 1e-12);
    assert_eq!(fragment.opacity, 0.0);

    let core = layout(3, 0.0);
    assert_abs_diff_eq!(core.position.y, 3.0, epsilon = 1e-12);
}

#[test]
fn halfway_uses_cubic_ease_out() {
    let fragment = layout(2, 0.5);
    assert_abs_diff_eq!(fragment.opacity, 0.875, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.position.y, 0.125 * 0.5 * 2.0, epsilon = 1e-12);
}

#[test]
fn out_of_range_and_non_finite_progress_are_clamped() {
    assert_eq!(layout(1, f64::NAN), layout(1, 0.0));
    assert_eq!(layout(1, -2.0), layout(1, 0.0));
    assert_eq!(layout(1, 7.0), layout(1, 1.0));
}

#[test]
fn cylinder_preset_is_linear_and_spin_free() {
    let cylinder = FragmentLayout::cylinder();
    assert_eq!(cylinder.easing, Easing::Linear);
    let fragment = cylinder.layout(0, 0.5);
    assert_eq!(fragment.rotation, 0.0);
    assert_abs_diff_eq!(fragment.opacity, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.position.x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fragment.position.y, -1.5, epsilon = 1e-12);
}

#[test]
fn layout_validation_rejects_degenerate_presets() {
    let empty = FragmentLayout {
        fragment_count: 0,
        ..FragmentLayout::celestial()
    };
    assert!(empty.validate().is_err());
    let negative = FragmentLayout {
        spread_distance: -1.0,
        ..FragmentLayout::celestial()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn struts_fade_in_after_eighty_percent() {
    assert_eq!(strut_opacity(0.8), None);
    assert_abs_diff_eq!(strut_opacity(0.9).unwrap_or_default(), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(strut_opacity(1.0).unwrap_or_default(), 1.0, epsilon = 1e-12);
}
