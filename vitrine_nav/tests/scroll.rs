// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_nav` crate: a simulated scroll through a whole page.

use vitrine_nav::{LinkTarget, NavConfig, NavHighlighter, NavLink, NavPane, Section, SectionRole};

const IDS: [&str; 5] = ["about", "education", "projects", "skills", "references"];

fn portfolio() -> NavHighlighter<&'static str> {
    let mut top = 0.0;
    let sections = IDS
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let section = Section::new(id, top, 800.0).with_role(match i {
                0 => SectionRole::Top,
                4 => SectionRole::Bottom,
                _ => SectionRole::Body,
            });
            top += 800.0;
            section
        })
        .collect();
    let links = IDS
        .iter()
        .enumerate()
        .map(|(i, &id)| NavLink {
            target: if i == 0 {
                LinkTarget::PageTop
            } else {
                LinkTarget::Section(id)
            },
            top: 100.0 + 50.0 * i as f64,
            height: 50.0,
        })
        .collect();
    NavHighlighter::new(
        sections,
        links,
        NavPane { top: 100.0, height: 120.0 },
        NavConfig::default(),
    )
}

#[test]
fn every_position_has_exactly_one_section() {
    let nav = portfolio();
    let mut scroll = 0.0;
    while scroll < 4_000.0 {
        assert!(nav.active_section(scroll).is_some(), "no section at {scroll}");
        scroll += 25.0;
    }
}

#[test]
fn scrolling_down_visits_sections_in_order() {
    let mut nav = portfolio();
    let mut seen = Vec::new();
    let mut scroll = 0.0;
    while scroll <= 3_600.0 {
        if let Some(update) = nav.update(scroll) {
            if let Some(section) = update.section {
                if seen.last() != Some(&section) {
                    seen.push(section);
                }
            }
        }
        scroll += 10.0;
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn gap_between_about_and_education_falls_back() {
    let nav = portfolio();
    // about ends at 200; education's effective top is 600.
    assert_eq!(nav.active_section(250.0), Some(1));
    assert!(nav.active_links(250.0, Some(1)).contains(&1));
}

#[test]
fn sidebar_scroll_never_negative() {
    let nav = portfolio();
    for scroll in [0.0, 700.0, 1_500.0, 3_500.0] {
        let state = nav.state(scroll);
        let target = state.sidebar_scroll.unwrap();
        assert!(target >= 0.0, "negative sidebar scroll at {scroll}");
    }
    // references link: 300 - 100 - 60 + 25.
    assert_eq!(nav.state(3_500.0).sidebar_scroll, Some(165.0));
}
