use std::time::Duration;

use kyros_portal::animation::{TypingPulse, TypingPulseConfig, TypingPulsePolicy};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn pulse(policy: TypingPulsePolicy) -> TypingPulse {
    let config = TypingPulseConfig {
        policy,
        ..TypingPulseConfig::default()
    };
    TypingPulse::new(config, 0).expect("pulse init")
}

#[test]
fn single_change_clears_after_delay() {
    let mut pulse = pulse(TypingPulsePolicy::Debounce);
    assert!(pulse.observe(3));
    assert!(pulse.is_typing());
    pulse.advance(ms(149));
    assert!(pulse.is_typing());
    pulse.advance(ms(1));
    assert!(!pulse.is_typing());
    assert_eq!(pulse.pending_timers(), 0);
}

#[test]
fn unchanged_length_does_not_pulse() {
    let mut pulse = TypingPulse::new(TypingPulseConfig::default(), 4).expect("pulse init");
    assert!(!pulse.observe(4));
    assert!(!pulse.is_typing());
    assert!(pulse.observe(3));
}

#[test]
fn debounce_clears_after_the_latest_change() {
    let mut pulse = pulse(TypingPulsePolicy::Debounce);
    pulse.observe(1);
    pulse.advance(ms(100));
    pulse.observe(2);
    pulse.advance(ms(100));
    assert!(pulse.is_typing());
    pulse.advance(ms(50));
    assert!(!pulse.is_typing());
}

#[test]
fn overlapping_timers_clear_on_the_oldest_deadline() {
    let mut pulse = pulse(TypingPulsePolicy::OverlappingTimers);
    pulse.observe(1);
    pulse.advance(ms(100));
    pulse.observe(2);
    assert_eq!(pulse.pending_timers(), 2);
    pulse.advance(ms(50));
    assert!(!pulse.is_typing());
    assert_eq!(pulse.pending_timers(), 1);
}

#[test]
fn cylinder_delay_is_longer() {
    let mut pulse = TypingPulse::new(TypingPulseConfig::cylinder(), 0).expect("pulse init");
    pulse.observe(1);
    pulse.advance(ms(150));
    assert!(pulse.is_typing());
    pulse.advance(ms(50));
    assert!(!pulse.is_typing());
}

#[test]
fn zero_delay_is_rejected() {
    let config = TypingPulseConfig {
        clear_delay_ms: 0,
        ..TypingPulseConfig::default()
    };
    assert!(TypingPulse::new(config, 0).is_err());
}
