// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// How the embedded viewer fits pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFit {
    /// Fit the whole page.
    Page,
    /// Fit the page width.
    Width,
    /// Fit the page height.
    Height,
}

impl PageFit {
    /// The `view=` value understood by browser PDF viewers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "Fit",
            Self::Width => "FitH",
            Self::Height => "FitV",
        }
    }
}

/// Open parameters passed to the browser's PDF viewer in the URL fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerParams {
    /// Show the viewer toolbar.
    pub toolbar: bool,
    /// Show the navigation (thumbnail) pane.
    pub navpanes: bool,
    /// Show scrollbars.
    pub scrollbar: bool,
    /// Page fit mode.
    pub view: PageFit,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            toolbar: true,
            navpanes: false,
            scrollbar: false,
            view: PageFit::Width,
        }
    }
}

impl ViewerParams {
    /// The URL fragment, including the leading `#`.
    ///
    /// ```
    /// use vitrine_modal::ViewerParams;
    ///
    /// assert_eq!(
    ///     ViewerParams::default().fragment(),
    ///     "#toolbar=1&navpanes=0&scrollbar=0&view=FitH"
    /// );
    /// ```
    #[must_use]
    pub fn fragment(&self) -> String {
        format!(
            "#toolbar={}&navpanes={}&scrollbar={}&view={}",
            u8::from(self.toolbar),
            u8::from(self.navpanes),
            u8::from(self.scrollbar),
            self.view.as_str()
        )
    }

    /// `path` with these parameters appended. Any existing fragment on `path` is replaced.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = path.split_once('#').map_or(path, |(base, _)| base);
        format!("{base}{}", self.fragment())
    }
}
