use std::time::Duration;

use approx::assert_abs_diff_eq;
use kyros_portal::core::{FrameTime, Viewport};
use kyros_portal::interaction::{ActiveField, FrameState};
use kyros_portal::scene::{
    CelestialRing, CelestialSphere, DashboardScene, RingConfig, RingProps, SphereConfig,
    field_pose, rune_for,
};

const FRAME: Duration = Duration::from_millis(16);

fn frame_time(frame: u32) -> FrameTime {
    FrameTime::new(FRAME, FRAME * frame)
}

#[test]
fn focused_ring_spins_only_while_typing() {
    let mut ring = CelestialRing::new(0, 1.2, 0.4, RingConfig::default());
    let typing = RingProps {
        is_active: true,
        is_typing: true,
        glow_intensity: 0.16,
        is_open: false,
        typed_chars: "ab",
    };
    for frame in 1..=60 {
        ring.update(&typing, frame_time(frame));
    }
    assert_abs_diff_eq!(ring.target_rotation(), 60.0 * 0.016 * 1.5, epsilon = 1e-9);
    assert!(ring.rotation_y() > 0.0 && ring.rotation_y() < ring.target_rotation());
    assert_eq!(ring.holograms(), &[rune_for('a'), rune_for('b')]);

    let settled = RingProps {
        is_typing: false,
        ..typing
    };
    let target = ring.target_rotation();
    ring.update(&settled, frame_time(61));
    assert_eq!(ring.target_rotation(), target);
}

#[test]
fn holograms_keep_the_last_eight_characters() {
    let mut ring = CelestialRing::new(1, 1.0, 0.0, RingConfig::default());
    ring.update(
        &RingProps {
            is_active: true,
            is_typing: false,
            glow_intensity: 0.0,
            is_open: false,
            typed_chars: "abcdefghij",
        },
        frame_time(1),
    );
    let expected: Vec<char> = "cdefghij".chars().map(rune_for).collect();
    assert_eq!(ring.holograms(), expected.as_slice());
}

#[test]
fn decorative_ring_drops_when_revealed() {
    let mut ring = CelestialRing::new(2, 0.8, -0.4, RingConfig::default());
    for frame in 1..=400 {
        ring.update(&RingProps::idle(0.15, true), frame_time(frame));
    }
    assert_abs_diff_eq!(ring.open_offset(), -0.4, epsilon = 1e-6);
}

#[test]
fn assembled_sphere_mounts_complete_with_struts() {
    let state = FrameState {
        assembled: true,
        ..FrameState::default()
    };
    let mut sphere = CelestialSphere::new(SphereConfig::default(), &state, 3).expect("sphere");
    let update = sphere.update(&state, frame_time(1));
    assert!(update.assembly_completed);
    assert!(!sphere.update(&state, frame_time(2)).assembly_completed);

    let node = sphere.node();
    assert_eq!(node.find_all("strut").len(), 4);
    assert_eq!(node.find_all("ring-fragment").len(), 3);
    assert_eq!(node.find_all("rune-plate").len(), 48);
    for fragment in node.find_all("ring-fragment") {
        assert_eq!(fragment.opacity, 1.0);
        assert!(fragment.transform.translation.length() < 1e-12);
    }
}

#[test]
fn scattered_sphere_hides_struts() {
    let state = FrameState::default();
    let mut sphere = CelestialSphere::new(SphereConfig::default(), &state, 3).expect("sphere");
    sphere.update(&state, frame_time(1));
    assert!(sphere.node().find("struts").is_none());
}

#[test]
fn typing_into_focused_field_pulses_the_sphere() {
    let blank = FrameState {
        active_field: ActiveField::Username,
        ..FrameState::default()
    };
    let mut sphere = CelestialSphere::new(SphereConfig::default(), &blank, 3).expect("sphere");
    sphere.update(&blank, frame_time(1));
    let typed = FrameState {
        username: "a",
        ..blank
    };
    sphere.update(&typed, frame_time(2));
    assert!(sphere.is_typing(ActiveField::Username));
    assert!(!sphere.is_typing(ActiveField::Password));
    for frame in 3..=12 {
        sphere.update(&typed, frame_time(frame));
    }
    assert!(!sphere.is_typing(ActiveField::Username));
}

#[test]
fn shake_offset_returns_to_rest() {
    let calm = FrameState::default();
    let mut sphere = CelestialSphere::new(SphereConfig::default(), &calm, 5).expect("sphere");
    sphere.update(&calm, frame_time(1));
    let error = FrameState {
        has_error: true,
        ..calm
    };
    assert!(sphere.update(&error, frame_time(2)).error_triggered);
    assert!(!sphere.update(&error, frame_time(3)).error_triggered);
    for frame in 4..400 {
        sphere.update(&calm, frame_time(frame));
    }
    let (offset_x, tilt_z) = sphere.shake_offset();
    assert!(offset_x.abs() < 1e-6);
    assert!(tilt_z.abs() < 1e-6);
}

#[test]
fn dashboard_fades_in_and_clears_loading_overlay() {
    let mut dashboard = DashboardScene::new("flamel", 16, 1);
    assert_eq!(dashboard.fade(), 0.0);
    assert!(dashboard.is_loading());

    let step = Duration::from_millis(50);
    let mut elapsed = Duration::ZERO;
    for _ in 0..12 {
        elapsed += step;
        dashboard.update(FrameTime::new(step, elapsed));
    }
    assert!(dashboard.fade() > 0.0 && dashboard.fade() < 1.0);
    assert!(dashboard.is_loading());

    for _ in 0..20 {
        elapsed += step;
        dashboard.update(FrameTime::new(step, elapsed));
    }
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.fade(), 1.0);

    let frame = dashboard.build_frame(Viewport::new(800, 600));
    frame.validate().expect("valid dashboard frame");
    assert_eq!(frame.root.find_all("dashboard-card").len(), 4);
    assert!(frame.root.find("welcome-name").is_some());
}

#[test]
fn hovered_card_grows_toward_pulse_scale() {
    let mut dashboard = DashboardScene::new("flamel", 0, 1);
    dashboard.set_hovered(Some(2)).expect("hover");
    let mut elapsed = Duration::ZERO;
    for _ in 0..200 {
        elapsed += FRAME;
        dashboard.update(FrameTime::new(FRAME, elapsed));
    }
    assert_abs_diff_eq!(dashboard.cards()[2].scale(), 1.1, epsilon = 1e-6);
    assert_abs_diff_eq!(dashboard.cards()[0].scale(), 1.0, epsilon = 1e-12);
}

#[test]
fn password_focus_frames_the_orb_from_above() {
    let pose = field_pose(ActiveField::Password);
    assert_eq!(pose.position.y, 1.5);
    assert_eq!(pose.look_at.y, -0.2);
}
