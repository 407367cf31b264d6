//! Tests for clock-based default seeding
//!
//! A generator built without an explicit seed takes `now_millis mod m`.

use lehmer_rng_core_rs::{BoundedLehmer, Clock, ExtendedLehmer, FixedClock, Lehmer, SystemClock};

#[test]
fn test_bounded_default_seed_from_clock() {
    let rng = BoundedLehmer::with_clock(FixedClock::new(1_700_000_000_000));
    assert_eq!(
        rng.get_state(),
        1_700_000_000_000 % BoundedLehmer::MODULUS
    );
}

#[test]
fn test_extended_default_seed_from_clock() {
    // Current epoch millis are far below 2^53 - 111, so no reduction happens.
    let rng = ExtendedLehmer::with_clock(FixedClock::new(1_700_000_000_000));
    assert_eq!(rng.get_state(), 1_700_000_000_000);
}

#[test]
fn test_pre_epoch_clock_stays_in_range() {
    let clock = FixedClock::new(-1);

    let bounded = BoundedLehmer::with_clock(clock);
    let extended = ExtendedLehmer::with_clock(clock);

    assert_eq!(bounded.get_state(), BoundedLehmer::MODULUS - 1);
    assert_eq!(extended.get_state(), ExtendedLehmer::MODULUS - 1);
}

#[test]
fn test_same_clock_same_sequence() {
    let clock = FixedClock::new(123_456_789);
    let mut rng1 = BoundedLehmer::with_clock(clock);
    let mut rng2 = BoundedLehmer::with_clock(clock);

    for _ in 0..50 {
        assert_eq!(rng1.next_f64(), rng2.next_f64());
    }
}

#[test]
fn test_system_clock_seeds_within_modulus() {
    let now = SystemClock.now_millis();
    assert!(now > 0);

    let bounded = BoundedLehmer::new();
    let extended = ExtendedLehmer::default();
    assert!(bounded.get_state() < BoundedLehmer::MODULUS);
    assert!(extended.get_state() < ExtendedLehmer::MODULUS);
}
