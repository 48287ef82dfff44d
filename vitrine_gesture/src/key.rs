// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard keys the components respond to.

/// A recognized key, parsed from a DOM `KeyboardEvent.key` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowDown`
    ArrowDown,
    /// `Escape`
    Escape,
    /// `Enter`
    Enter,
    /// The space bar (`" "`).
    Space,
}

impl Key {
    /// Parse a DOM key name. Unrecognized names yield `None`.
    ///
    /// ```
    /// use vitrine_gesture::key::Key;
    ///
    /// assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::ArrowLeft));
    /// assert_eq!(Key::from_dom(" "), Some(Key::Space));
    /// assert_eq!(Key::from_dom("a"), None);
    /// ```
    #[must_use]
    pub fn from_dom(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Escape" => Self::Escape,
            "Enter" => Self::Enter,
            " " => Self::Space,
            _ => return None,
        })
    }

    /// Enter and Space activate the focused control.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
