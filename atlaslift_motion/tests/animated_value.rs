// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `AnimatedValue`, focused on supersession and settling.

use core::time::Duration;

use atlaslift_motion::{AnimatedValue, Easing};

const FRAME: Duration = Duration::from_millis(16);
const LIFT: Duration = Duration::from_millis(600);

fn settle(value: &mut AnimatedValue) -> usize {
    let mut updates = 0;
    while value.tick(FRAME).is_some() {
        updates += 1;
        assert!(updates < 10_000, "animation never settled");
    }
    updates
}

#[test]
fn idle_value_does_not_tick() {
    let mut value = AnimatedValue::new(4.0);
    assert!(!value.is_animating());
    assert_eq!(value.tick(FRAME), None);
    assert_eq!(value.value(), 4.0);
    assert_eq!(value.starts(), 0);
}

#[test]
fn animation_settles_on_target_with_many_updates() {
    let mut value = AnimatedValue::new(0.0);
    value.animate_to(-15.0, LIFT, Easing::OutCubic);
    assert!(value.is_animating());
    assert_eq!(value.target(), Some(-15.0));

    let updates = settle(&mut value);
    // 600ms at 16ms per frame.
    assert_eq!(updates, 38);
    assert_eq!(value.value(), -15.0);
    assert!(!value.is_animating());
    assert_eq!(value.target(), None);
}

#[test]
fn new_animation_supersedes_in_flight_one() {
    let mut value = AnimatedValue::new(0.0);
    value.animate_to(-15.0, LIFT, Easing::OutCubic);
    for _ in 0..5 {
        value.tick(FRAME);
    }
    let midway = value.value();
    assert!(midway < 0.0 && midway > -15.0);

    value.animate_to(10.0, LIFT, Easing::OutCubic);
    assert_eq!(value.starts(), 2);
    // Exactly one active animation, starting where the previous one was left.
    let tween = value.active().expect("animation in flight");
    assert_eq!(tween.start(), midway);
    assert_eq!(tween.target(), 10.0);

    settle(&mut value);
    assert_eq!(value.value(), 10.0);
}

#[test]
fn rapid_restarts_settle_on_latest_target() {
    let mut value = AnimatedValue::new(0.0);
    for (i, target) in [-15.0, 3.0, -7.0, -15.0, 42.0].into_iter().enumerate() {
        value.animate_to(target, LIFT, Easing::OutCubic);
        value.tick(FRAME * u32::try_from(i).unwrap());
    }
    settle(&mut value);
    assert_eq!(value.value(), 42.0);
    assert_eq!(value.starts(), 5);
}

#[test]
fn set_snaps_and_cancels() {
    let mut value = AnimatedValue::new(0.0);
    value.animate_to(-15.0, LIFT, Easing::OutCubic);
    value.tick(FRAME);

    value.set(0.0);
    assert!(!value.is_animating());
    assert_eq!(value.value(), 0.0);
    assert_eq!(value.tick(FRAME), None, "cancelled animation must not update");
}

#[test]
fn cancel_reports_whether_anything_was_running() {
    let mut value = AnimatedValue::new(1.0);
    assert!(!value.cancel());
    value.animate_to(2.0, LIFT, Easing::Linear);
    value.tick(Duration::from_millis(300));
    assert!(value.cancel());
    assert!((value.value() - 1.5).abs() < 1e-9);
    assert_eq!(value.tick(FRAME), None);
}
