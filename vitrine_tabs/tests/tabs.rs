// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_tabs` crate, driven through [`TabSwitcher::handle`].

use vitrine_tabs::{SlideDirection, TabSwap, TabSwitcher, TabsConfig, TabsInput, TabsUpdate};

fn field_trip() -> TabSwitcher<&'static str> {
    TabSwitcher::new(vec!["sylhet", "cox", "sundarbans"], TabsConfig::default()).unwrap()
}

#[test]
fn click_then_timer_swaps() {
    let mut tabs = field_trip();
    let update = tabs.handle(TabsInput::Select("sundarbans"), 1_000);
    let Some(TabsUpdate::Animate(transition)) = update else {
        panic!("expected an animation, got {update:?}");
    };
    assert_eq!((transition.from, transition.to), (0, 2));
    assert_eq!(transition.direction, SlideDirection::Forward);

    assert_eq!(tabs.next_deadline(), Some(1_400));
    assert_eq!(tabs.poll(1_400), Some(TabSwap { previous: 0, active: 2 }));
    assert_eq!(tabs.active_id(), &"sundarbans");
}

#[test]
fn swipe_walks_through_all_tabs_and_stops() {
    let mut tabs = field_trip();
    let mut now = 0;
    let mut visited = vec![tabs.active()];
    for _ in 0..5 {
        tabs.handle(TabsInput::TouchStart { x: 300.0 }, now);
        tabs.handle(TabsInput::TouchEnd { x: 200.0 }, now + 2_000);
        now += 2_000;
        tabs.poll(now + 400);
        now += 400;
        if visited.last() != Some(&tabs.active()) {
            visited.push(tabs.active());
        }
    }
    assert_eq!(visited, vec![0, 1, 2]);

    for _ in 0..5 {
        tabs.handle(TabsInput::TouchStart { x: 0.0 }, now);
        if let Some(TabsUpdate::Animate(t)) = tabs.handle(TabsInput::TouchEnd { x: 60.0 }, now) {
            assert_eq!(t.direction, SlideDirection::Backward);
        }
        tabs.handle(TabsInput::AnimationEnd, now);
        now += 10;
    }
    assert_eq!(tabs.active(), 0);
}

#[test]
fn unknown_tab_leaves_state_alone() {
    let mut tabs = field_trip();
    assert_eq!(tabs.handle(TabsInput::Select("dhaka"), 0), None);
    assert_eq!(tabs.pending(), None);
    assert_eq!(tabs.handle(TabsInput::AnimationEnd, 0), None);
}
