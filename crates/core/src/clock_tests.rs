// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn fake_clock_stands_still_until_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(2));
    assert_eq!(clock.now(), t1);

    clock.advance(Duration::from_millis(1500));
    assert_eq!(clock.now().duration_since(t1), Duration::from_millis(1500));
}

#[test]
fn fake_clock_clones_share_time() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    assert_eq!(clock1.now().duration_since(t1), Duration::from_secs(30));
}

#[test]
fn fake_clock_set() {
    let clock = FakeClock::default();
    let future = Instant::now() + Duration::from_secs(3600);
    clock.set(future);
    assert_eq!(clock.now(), future);
}
