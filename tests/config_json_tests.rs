use kyros_portal::animation::{AssemblyConfig, TypingPulsePolicy};
use kyros_portal::api::{PortalConfig, PortalEngine};
use kyros_portal::core::{Easing, Viewport};
use kyros_portal::render::NullRenderer;

#[test]
fn config_json_survives_a_round_trip() {
    let config = PortalConfig::new(Viewport::new(1920, 1080))
        .with_cylinder_timing()
        .with_seed(7)
        .with_particles(10, 5);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = PortalConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn minimal_json_fills_in_portal_defaults() {
    let parsed = PortalConfig::from_json_str(r#"{ "viewport": { "width": 800, "height": 600 } }"#)
        .expect("parse");
    assert_eq!(parsed, PortalConfig::new(Viewport::new(800, 600)));
    assert_eq!(parsed.error_hold_ms, 500);
    assert_eq!(parsed.login_delay_ms, 2000);
    assert_eq!(parsed.particles.login, 600);
    assert_eq!(parsed.particles.dashboard, 400);
    assert_eq!(parsed.sphere.assembly, AssemblyConfig::default());
    assert_eq!(parsed.sphere.typing.policy, TypingPulsePolicy::Debounce);
}

#[test]
fn cylinder_timing_switches_cadence_and_layout() {
    let config = PortalConfig::new(Viewport::new(800, 600)).with_cylinder_timing();
    assert_eq!(config.sphere.assembly.tick_interval_ms, 50);
    assert_eq!(config.sphere.typing.clear_delay_ms, 200);
    assert_eq!(config.sphere.fragments.easing, Easing::Linear);
    assert_eq!(config.sphere.shake.decay, 0.9);
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    assert!(PortalConfig::from_json_str("{").is_err());
    let bad_factor = r#"{
        "viewport": { "width": 800, "height": 600 },
        "sphere": { "ring": {
            "spin_speed": 1.5,
            "rotation_smoothing": 0.0,
            "open_smoothing": 0.05,
            "open_offset": 0.4,
            "glow_per_char": 0.08
        } }
    }"#;
    assert!(PortalConfig::from_json_str(bad_factor).is_err());
}

#[test]
fn engine_rejects_invalid_timings() {
    let config = PortalConfig::new(Viewport::new(800, 600)).with_assembly(AssemblyConfig {
        tick_interval_ms: 0,
        increment: 0.015,
    });
    assert!(PortalEngine::new(NullRenderer::default(), config).is_err());

    let no_hold = PortalConfig::new(Viewport::new(800, 600)).with_error_hold_ms(0);
    assert!(PortalEngine::new(NullRenderer::default(), no_hold).is_err());
}
