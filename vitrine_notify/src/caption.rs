// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Selector matching every in-text cross-reference link.
pub const REFERENCE_LINK_SELECTOR: &str = ".figure-ref, .table-ref, .equation-ref";

/// Selector matching equation number labels.
pub const EQUATION_NUMBER_SELECTOR: &str = ".equation-number";

/// A captioned block whose caption can be copied by clicking it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionKind {
    /// `.figure-container` / `.figure-caption`
    Figure,
    /// `.table-wrapper` / `.table-caption`
    Table,
    /// `.equation-container` / `.equation-caption`
    Equation,
}

impl CaptionKind {
    /// All kinds.
    pub const ALL: [Self; 3] = [Self::Figure, Self::Table, Self::Equation];

    /// Selector for the clickable container.
    #[must_use]
    pub fn container_selector(self) -> &'static str {
        match self {
            Self::Figure => ".figure-container",
            Self::Table => ".table-wrapper",
            Self::Equation => ".equation-container",
        }
    }

    /// Selector for the caption inside the container.
    #[must_use]
    pub fn caption_selector(self) -> &'static str {
        match self {
            Self::Figure => ".figure-caption",
            Self::Table => ".table-caption",
            Self::Equation => ".equation-caption",
        }
    }
}

/// Toast text confirming a copied caption.
#[must_use]
pub fn copied_message(caption: &str) -> String {
    format!("Copied: {caption}")
}

/// Remove the first `Equation` word, plus one following whitespace
/// character if present, from an equation number label.
///
/// ```
/// use vitrine_notify::strip_equation_label;
///
/// assert_eq!(strip_equation_label("Equation 3.2"), "3.2");
/// assert_eq!(strip_equation_label("(Equation4)"), "(4)");
/// assert_eq!(strip_equation_label("(7)"), "(7)");
/// ```
#[must_use]
pub fn strip_equation_label(label: &str) -> String {
    const WORD: &str = "Equation";
    let Some(start) = label.find(WORD) else {
        return String::from(label);
    };
    let (head, rest) = label.split_at(start);
    let mut tail = rest[WORD.len()..].chars();
    let after = match tail.clone().next() {
        Some(c) if c.is_whitespace() => {
            tail.next();
            tail.as_str()
        }
        _ => tail.as_str(),
    };
    let mut out = String::with_capacity(head.len() + after.len());
    out.push_str(head);
    out.push_str(after);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_occurrence_and_one_space() {
        assert_eq!(strip_equation_label("Equation  Equation 1"), " Equation 1");
        assert_eq!(strip_equation_label("Equation\t5"), "5");
        assert_eq!(strip_equation_label("equation 5"), "equation 5");
        assert_eq!(strip_equation_label(""), "");
    }

    #[test]
    fn message_and_selectors() {
        assert_eq!(copied_message("Figure 2: Study area"), "Copied: Figure 2: Study area");
        assert_eq!(CaptionKind::Table.container_selector(), ".table-wrapper");
        assert_eq!(CaptionKind::Equation.caption_selector(), ".equation-caption");
    }
}
