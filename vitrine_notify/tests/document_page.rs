// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_notify` crate: reference clicks and caption copies
//! on a report page.

use vitrine_notify::{NotifyConfig, copied_message};

#[test]
fn reference_click_then_caption_copy() {
    let config = NotifyConfig::default();
    let mut highlights = config.highlights::<usize>();
    let mut toasts = config.toasts();

    // Follow a link to figure 3, then copy table 1's caption.
    assert!(highlights.flash(3, 0));
    toasts.show(copied_message("Table 1: Land cover classes"), 500);

    // Highlight clears first.
    let mut now = 0;
    let mut cleared = Vec::new();
    while let Some(deadline) = [highlights.next_deadline(), toasts.next_deadline()]
        .into_iter()
        .flatten()
        .min()
    {
        now = deadline;
        for key in highlights.poll(now) {
            cleared.push(format!("highlight {key}"));
        }
        for id in toasts.poll(now) {
            cleared.push(format!("toast {}", id.get()));
        }
    }
    assert_eq!(cleared, vec!["highlight 3", "toast 0"]);
    assert_eq!(now, 3_500);
}

#[test]
fn default_durations() {
    let config = NotifyConfig::default();
    assert_eq!(config.highlight, 2_000);
    assert_eq!(config.toast, 3_000);
}
