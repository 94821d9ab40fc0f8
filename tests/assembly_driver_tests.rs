use std::time::Duration;

use approx::assert_abs_diff_eq;
use kyros_portal::animation::{AssemblyConfig, AssemblyDriver, AssemblyPhase, AssemblyStep};

const TICK: Duration = Duration::from_millis(30);

fn running_driver() -> AssemblyDriver {
    let mut driver = AssemblyDriver::new(AssemblyConfig::default()).expect("driver init");
    assert_eq!(driver.start(false), AssemblyStep::Idle);
    assert_eq!(driver.phase(), AssemblyPhase::Running);
    driver
}

#[test]
fn already_assembled_completes_immediately_once() {
    let mut driver = AssemblyDriver::new(AssemblyConfig::default()).expect("driver init");
    assert_eq!(driver.start(true), AssemblyStep::Completed);
    assert!(driver.is_complete());
    assert_eq!(driver.progress(), 1.0);
    assert!(!driver.is_ticking());

    assert_eq!(driver.start(true), AssemblyStep::Idle);
    assert_eq!(driver.set_assembled(true), AssemblyStep::Idle);
    assert_eq!(driver.advance(Duration::from_secs(10)), AssemblyStep::Idle);
}

#[test]
fn animated_assembly_completes_on_sixty_seventh_tick() {
    let mut driver = running_driver();
    for _ in 0..66 {
        assert_eq!(driver.advance(TICK), AssemblyStep::Advanced);
    }
    assert!(!driver.is_complete());
    assert_abs_diff_eq!(driver.progress(), 0.99, epsilon = 1e-9);

    assert_eq!(driver.advance(TICK), AssemblyStep::Completed);
    assert_eq!(driver.progress(), 1.0);
    assert!(!driver.is_ticking());
}

#[test]
fn completion_is_reported_exactly_once_under_a_mock_clock() {
    let mut driver = running_driver();
    let mut completions = 0;
    for _ in 0..500 {
        if driver.advance(Duration::from_millis(7)).is_completed() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(driver.progress(), 1.0);
}

#[test]
fn sub_period_deltas_accumulate_into_ticks() {
    let mut driver = running_driver();
    assert_eq!(driver.advance(Duration::from_millis(29)), AssemblyStep::Idle);
    assert_eq!(driver.progress(), 0.0);
    assert_eq!(driver.advance(Duration::from_millis(1)), AssemblyStep::Advanced);
    assert_abs_diff_eq!(driver.progress(), 0.015, epsilon = 1e-12);
}

#[test]
fn one_long_frame_finishes_without_overshooting() {
    let mut driver = running_driver();
    assert_eq!(driver.advance(Duration::from_secs(5)), AssemblyStep::Completed);
    assert_eq!(driver.progress(), 1.0);
}

#[test]
fn external_assembled_flag_short_circuits_a_running_driver() {
    let mut driver = running_driver();
    driver.advance(TICK * 10);
    assert_eq!(driver.set_assembled(false), AssemblyStep::Idle);
    assert_eq!(driver.set_assembled(true), AssemblyStep::Completed);
    assert_eq!(driver.set_assembled(false), AssemblyStep::Idle);
    assert_eq!(driver.progress(), 1.0);
}

#[test]
fn cylinder_timing_needs_fifty_ticks() {
    let mut driver = AssemblyDriver::new(AssemblyConfig::cylinder()).expect("driver init");
    driver.start(false);
    let tick = Duration::from_millis(50);
    for _ in 0..49 {
        assert!(!driver.advance(tick).is_completed());
    }
    assert!(driver.advance(tick).is_completed());
}

#[test]
fn invalid_assembly_config_is_rejected() {
    let zero_interval = AssemblyConfig {
        tick_interval_ms: 0,
        ..AssemblyConfig::default()
    };
    assert!(AssemblyDriver::new(zero_interval).is_err());
    let no_increment = AssemblyConfig {
        increment: 0.0,
        ..AssemblyConfig::default()
    };
    assert!(AssemblyDriver::new(no_increment).is_err());
}
