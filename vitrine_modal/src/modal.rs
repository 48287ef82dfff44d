// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vitrine_gesture::key::Key;
use vitrine_timing::{Millis, TimerQueue};

/// Delays for the staged open and close sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    /// Delay between displaying the modal and adding the `show` class, so
    /// the CSS transition has a starting frame.
    pub reveal_delay: Millis,
    /// Fallback delay between removing `show` and hiding the modal.
    pub close_delay: Millis,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            reveal_delay: 10,
            close_delay: 300,
        }
    }
}

/// Where the modal is in its open/close sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not displayed.
    Hidden,
    /// Displayed, waiting to add the `show` class.
    Opening,
    /// Displayed with the `show` class.
    Shown,
    /// `show` removed, waiting to hide.
    Closing,
}

/// Input events understood by a [`DocumentModal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalInput {
    /// A document button was clicked.
    Open,
    /// The close control was clicked.
    Close,
    /// A click landed on the modal backdrop itself.
    BackdropClick,
    /// A key was pressed anywhere in the document.
    Key(Key),
    /// The fade-out transition finished.
    TransitionEnd,
}

/// A change the host should apply to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEffect {
    /// Hide floating navigation controls (hamburger menu, mobile toggle).
    HideFloatingNav,
    /// Restore floating navigation controls.
    ShowFloatingNav,
    /// Set the modal's `display` (`true` for block, `false` for none).
    Display(bool),
    /// Add the `show` class.
    AddShowClass,
    /// Remove the `show` class.
    RemoveShowClass,
    /// Point the viewer frame at this URL.
    LoadDocument(String),
    /// Clear the viewer frame's source.
    ClearDocument,
    /// Lock (`true`) or restore (`false`) background scrolling.
    LockScroll(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Reveal,
    Finish,
}

/// A modal that displays a single document.
///
/// ```
/// use vitrine_modal::{DocumentModal, ModalConfig, ModalEffect, ViewerParams};
///
/// let url = ViewerParams::default().url("documents/CV.pdf");
/// let mut modal = DocumentModal::new(url.clone(), ModalConfig::default());
///
/// let effects = modal.open(0);
/// assert!(effects.contains(&ModalEffect::LoadDocument(url)));
/// assert_eq!(modal.poll(10), vec![ModalEffect::AddShowClass]);
///
/// assert_eq!(modal.close(1_000), vec![ModalEffect::RemoveShowClass]);
/// assert!(modal.is_displayed());
/// assert!(modal.poll(1_300).contains(&ModalEffect::Display(false)));
/// assert!(!modal.is_displayed());
/// ```
#[derive(Clone, Debug)]
pub struct DocumentModal {
    document: String,
    config: ModalConfig,
    phase: Phase,
    timers: TimerQueue<Timer>,
}

impl DocumentModal {
    /// Create a hidden modal that loads `document` when opened.
    #[must_use]
    pub fn new(document: String, config: ModalConfig) -> Self {
        Self {
            document,
            config,
            phase: Phase::Hidden,
            timers: TimerQueue::new(),
        }
    }

    /// URL loaded on open.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` whenever the modal has `display: block`, including while fading out.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Open the modal.
    ///
    /// Opening while a close is pending cancels the close and fades back in.
    pub fn open(&mut self, now: Millis) -> Vec<ModalEffect> {
        let effects = match self.phase {
            Phase::Hidden => vec![
                ModalEffect::HideFloatingNav,
                ModalEffect::Display(true),
                ModalEffect::LoadDocument(self.document.clone()),
                ModalEffect::LockScroll(true),
            ],
            Phase::Closing => {
                self.timers.cancel(Timer::Finish);
                Vec::new()
            }
            Phase::Opening | Phase::Shown => return Vec::new(),
        };
        self.phase = Phase::Opening;
        self.timers
            .schedule(Timer::Reveal, now.saturating_add(self.config.reveal_delay));
        effects
    }

    /// Start closing. The modal stays displayed until the fade-out completes.
    pub fn close(&mut self, now: Millis) -> Vec<ModalEffect> {
        if !matches!(self.phase, Phase::Opening | Phase::Shown) {
            return Vec::new();
        }
        self.timers.cancel(Timer::Reveal);
        self.phase = Phase::Closing;
        self.timers
            .schedule(Timer::Finish, now.saturating_add(self.config.close_delay));
        vec![ModalEffect::RemoveShowClass]
    }

    /// Finish closing now because the host saw the fade-out complete.
    pub fn transition_end(&mut self) -> Vec<ModalEffect> {
        if self.phase != Phase::Closing {
            return Vec::new();
        }
        self.timers.cancel(Timer::Finish);
        self.finish()
    }

    /// Run due timers.
    pub fn poll(&mut self, now: Millis) -> Vec<ModalEffect> {
        let mut effects = Vec::new();
        for timer in self.timers.poll(now) {
            match timer {
                Timer::Reveal => {
                    self.phase = Phase::Shown;
                    effects.push(ModalEffect::AddShowClass);
                }
                Timer::Finish => effects.extend(self.finish()),
            }
        }
        effects
    }

    /// Deadline at which [`DocumentModal::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, input: ModalInput, now: Millis) -> Vec<ModalEffect> {
        match input {
            ModalInput::Open => self.open(now),
            ModalInput::Close | ModalInput::BackdropClick => self.close(now),
            ModalInput::Key(Key::Escape) if self.is_displayed() => self.close(now),
            ModalInput::Key(_) => Vec::new(),
            ModalInput::TransitionEnd => self.transition_end(),
        }
    }

    /// Snapshot of the modal state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ModalDebugInfo {
        ModalDebugInfo {
            phase: self.phase,
            reveal_at: self.timers.deadline(Timer::Reveal),
            finish_at: self.timers.deadline(Timer::Finish),
        }
    }

    fn finish(&mut self) -> Vec<ModalEffect> {
        self.phase = Phase::Hidden;
        vec![
            ModalEffect::Display(false),
            ModalEffect::ShowFloatingNav,
            ModalEffect::ClearDocument,
            ModalEffect::LockScroll(false),
        ]
    }
}

/// Debug snapshot of a [`DocumentModal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalDebugInfo {
    /// Current phase.
    pub phase: Phase,
    /// Pending `show` class deadline.
    pub reveal_at: Option<Millis>,
    /// Pending hide deadline.
    pub finish_at: Option<Millis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> DocumentModal {
        DocumentModal::new(String::from("doc.pdf"), ModalConfig::default())
    }

    #[test]
    fn open_sequence() {
        let mut m = modal();
        assert_eq!(
            m.open(100),
            vec![
                ModalEffect::HideFloatingNav,
                ModalEffect::Display(true),
                ModalEffect::LoadDocument(String::from("doc.pdf")),
                ModalEffect::LockScroll(true),
            ]
        );
        assert_eq!(m.phase(), Phase::Opening);
        assert!(m.poll(109).is_empty());
        assert_eq!(m.poll(110), vec![ModalEffect::AddShowClass]);
        assert_eq!(m.phase(), Phase::Shown);
        assert!(m.open(200).is_empty());
    }

    #[test]
    fn close_restores_everything() {
        let mut m = modal();
        m.open(0);
        m.poll(10);
        m.close(50);
        assert_eq!(m.phase(), Phase::Closing);
        assert!(m.poll(349).is_empty());
        assert_eq!(
            m.poll(350),
            vec![
                ModalEffect::Display(false),
                ModalEffect::ShowFloatingNav,
                ModalEffect::ClearDocument,
                ModalEffect::LockScroll(false),
            ]
        );
        assert_eq!(m.phase(), Phase::Hidden);
    }

    #[test]
    fn close_before_reveal_skips_show_class() {
        let mut m = modal();
        m.open(0);
        m.close(5);
        let effects = m.poll(1_000);
        assert!(!effects.contains(&ModalEffect::AddShowClass));
        assert_eq!(m.phase(), Phase::Hidden);
    }

    #[test]
    fn reopen_during_close_cancels_it() {
        let mut m = modal();
        m.open(0);
        m.poll(10);
        m.close(100);
        assert!(m.open(200).is_empty());
        assert_eq!(m.poll(210), vec![ModalEffect::AddShowClass]);
        assert!(m.poll(1_000).is_empty());
        assert_eq!(m.phase(), Phase::Shown);
    }

    #[test]
    fn escape_only_while_displayed() {
        let mut m = modal();
        assert!(m.handle(ModalInput::Key(Key::Escape), 0).is_empty());
        m.open(0);
        assert_eq!(
            m.handle(ModalInput::Key(Key::Escape), 20),
            vec![ModalEffect::RemoveShowClass]
        );
        assert!(m.handle(ModalInput::Key(Key::Enter), 20).is_empty());
    }

    #[test]
    fn transition_end_finishes_early() {
        let mut m = modal();
        assert!(m.transition_end().is_empty());
        m.open(0);
        m.handle(ModalInput::BackdropClick, 50);
        assert_eq!(m.handle(ModalInput::TransitionEnd, 60).len(), 4);
        assert_eq!(m.next_deadline(), None);
        assert!(m.poll(10_000).is_empty());
    }

    #[test]
    fn debug_info_tracks_timers() {
        let mut m = modal();
        m.open(0);
        assert_eq!(m.debug_info().reveal_at, Some(10));
        m.close(5);
        let info = m.debug_info();
        assert_eq!(info.phase, Phase::Closing);
        assert_eq!(info.reveal_at, None);
        assert_eq!(info.finish_at, Some(305));
    }
}
