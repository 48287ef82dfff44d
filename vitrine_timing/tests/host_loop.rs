// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the timer primitives the way a host event loop would: arm one
//! platform timer at the earliest deadline, then poll everything when it fires.

use vitrine_timing::{Debounce, Interval, Millis, TimerQueue};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Reveal,
    Finish,
}

fn earliest(a: Option<Millis>, b: Option<Millis>) -> Option<Millis> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[test]
fn single_platform_timer_serves_several_sources() {
    let mut phases = TimerQueue::new();
    let mut ticker = Interval::new(6_000);
    let mut fired = Vec::new();
    let mut ticks = 0;

    phases.schedule(Phase::Reveal, 10);
    phases.schedule(Phase::Finish, 300);
    ticker.start(0);

    let mut now = 0;
    while let Some(deadline) = earliest(phases.next_deadline(), ticker.next_deadline()) {
        if deadline > 12_000 {
            break;
        }
        now = deadline;
        fired.extend(phases.poll(now));
        if ticker.poll(now) {
            ticks += 1;
        }
    }

    assert_eq!(fired, vec![Phase::Reveal, Phase::Finish]);
    assert_eq!(ticks, 2);
    assert_eq!(now, 12_000);
}

#[test]
fn restarting_a_phase_timer_moves_it() {
    let mut phases = TimerQueue::new();
    phases.schedule(Phase::Finish, 300);
    // A new interaction during the delay window restarts the timer.
    phases.schedule(Phase::Finish, 450);
    assert!(phases.poll(300).is_empty());
    assert_eq!(phases.poll(450), vec![Phase::Finish]);
}

#[test]
fn debounce_and_queue_are_independent() {
    let mut scroll = Debounce::new(50);
    let mut phases = TimerQueue::new();
    scroll.trigger(0);
    phases.schedule(Phase::Reveal, 20);

    assert_eq!(phases.poll(20), vec![Phase::Reveal]);
    assert!(!scroll.poll(20));
    assert!(scroll.poll(50));
}
