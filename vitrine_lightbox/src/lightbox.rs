// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use vitrine_gesture::click::{TapConfig, TapResult, TapState};
use vitrine_gesture::drag::DragState;
use vitrine_gesture::key::Key;
use vitrine_gesture::pinch::PinchState;
use vitrine_timing::Millis;

use crate::zoom::{ZoomLimits, ZoomPan};

/// Gesture thresholds and zoom steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightboxConfig {
    /// Click-vs-drag slop and the maximum duration of a closing tap.
    pub tap: TapConfig,
    /// Horizontal travel (exclusive) that turns an unzoomed drag into navigation.
    pub swipe_distance: f64,
    /// Scale change per wheel event.
    pub wheel_step: f64,
    /// Scale change per zoom button press.
    pub button_step: f64,
    /// Limits for wheel and pinch zoom.
    pub gesture_limits: ZoomLimits,
    /// Limits for the zoom buttons.
    pub button_limits: ZoomLimits,
    /// Viewports strictly wider than this many pixels are [`Platform::Desktop`].
    pub desktop_min_width: f64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            tap: TapConfig::default(),
            swipe_distance: 50.0,
            wheel_step: 0.1,
            button_step: 0.25,
            gesture_limits: ZoomLimits::new(0.5, 3.0),
            button_limits: ZoomLimits::new(1.0, 3.0),
            desktop_min_width: 768.0,
        }
    }
}

/// Which dismissal rules apply to backdrop clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Clicks anywhere except the image and the arrows close the lightbox.
    Desktop,
    /// Only a direct tap on the backdrop closes the lightbox.
    Mobile,
}

impl Platform {
    /// Classify a viewport width.
    #[must_use]
    pub fn from_viewport_width(width: f64, config: &LightboxConfig) -> Self {
        if width > config.desktop_min_width {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// The element an event landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The lightbox image.
    Image,
    /// A previous/next arrow or anything inside one.
    NavArrow,
    /// The overlay behind the content.
    Backdrop,
    /// Anything else inside the lightbox content area.
    Content,
}

/// Up to two active touch points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touches {
    /// First touch.
    pub first: Point,
    /// Second touch, present during a pinch.
    pub second: Option<Point>,
}

impl Touches {
    /// A single touch.
    #[must_use]
    pub fn one(first: Point) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Two touches.
    #[must_use]
    pub fn two(first: Point, second: Point) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// Build from a slice of touch points; `None` if it is empty.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(Self {
            first,
            second: rest.first().copied(),
        })
    }
}

/// Input events understood by a [`Lightbox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightboxInput {
    /// A gallery item was activated.
    Open(usize),
    /// An explicit close request.
    Close,
    /// Move by the given number of images (-1 previous, +1 next).
    Navigate(isize),
    /// The zoom-in button.
    ZoomIn,
    /// The zoom-out button.
    ZoomOut,
    /// The image for the given gallery index finished loading.
    ImageLoaded(usize),
    /// Mouse button pressed.
    MouseDown {
        /// Element under the pointer.
        target: Target,
        /// Client coordinates.
        pos: Point,
    },
    /// Mouse moved anywhere in the document.
    MouseMove {
        /// Client coordinates.
        pos: Point,
    },
    /// Mouse button released anywhere in the document.
    MouseUp {
        /// Client coordinates.
        pos: Point,
    },
    /// Touch started.
    TouchStart {
        /// Element touched.
        target: Target,
        /// Active touches.
        touches: Touches,
    },
    /// Touch moved.
    TouchMove {
        /// Active touches.
        touches: Touches,
    },
    /// A finger lifted.
    TouchEnd {
        /// Element the touch ended on.
        target: Target,
        /// The first finger still down, if any.
        remaining: Option<Point>,
    },
    /// Wheel scrolled over the content.
    Wheel {
        /// Vertical wheel delta; negative zooms in.
        delta_y: f64,
    },
    /// A click reached the lightbox overlay.
    Click {
        /// Element clicked.
        target: Target,
    },
    /// A key was pressed anywhere in the document.
    Key(Key),
    /// The viewport was resized.
    Resize {
        /// New viewport width.
        width: f64,
    },
}

/// A change the host should apply to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightboxEffect {
    /// Make the overlay visible.
    Show,
    /// Hide the overlay.
    Hide,
    /// Load the image for this gallery index.
    LoadImage(usize),
    /// Apply this transform to the image.
    Transform(ZoomPan),
    /// Switch the cursor between grabbing (`true`) and grab (`false`).
    Grabbing(bool),
}

/// Coarse interaction mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Not visible.
    Closed,
    /// Open with no gesture in progress.
    Idle,
    /// A mouse button or a single finger is down on the image.
    Panning,
    /// Two fingers are pinching.
    Zooming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pointer {
    None,
    Mouse,
    Touch { pinched: bool },
}

#[derive(Clone, Copy, Debug)]
struct Viewer {
    index: usize,
    pending_load: Option<usize>,
    view: ZoomPan,
    pointer: Pointer,
    tap: TapState,
    drag: DragState,
    pinch: PinchState,
    suppress_click: bool,
}

impl Viewer {
    fn new(index: usize, config: &LightboxConfig) -> Self {
        Self {
            index,
            pending_load: Some(index),
            view: ZoomPan::IDENTITY,
            pointer: Pointer::None,
            tap: TapState::new(config.tap),
            drag: DragState::default(),
            pinch: PinchState::default(),
            suppress_click: false,
        }
    }
}

/// What to do when a press on the image ends.
enum Release {
    Navigate(isize),
    Close,
    Nothing,
}

/// Full-screen viewer over a gallery of `len` images.
///
/// All methods return the effects the host should apply, in order.
#[derive(Clone, Debug)]
pub struct Lightbox {
    len: usize,
    config: LightboxConfig,
    platform: Platform,
    viewer: Option<Viewer>,
}

impl Lightbox {
    /// Create a closed lightbox over `len` images.
    #[must_use]
    pub fn new(len: usize, config: LightboxConfig, platform: Platform) -> Self {
        Self {
            len,
            config,
            platform,
            viewer: None,
        }
    }

    /// Number of gallery images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty gallery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &LightboxConfig {
        &self.config
    }

    /// Current dismissal rules.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns `true` while visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_some()
    }

    /// Index of the image on display.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.viewer.as_ref().map(|v| v.index)
    }

    /// Current transform; identity while closed.
    #[must_use]
    pub fn view(&self) -> ZoomPan {
        self.viewer.as_ref().map(|v| v.view).unwrap_or_default()
    }

    /// Coarse interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        let Some(viewer) = &self.viewer else {
            return Mode::Closed;
        };
        if viewer.pinch.is_active() {
            Mode::Zooming
        } else if viewer.pointer != Pointer::None {
            Mode::Panning
        } else {
            Mode::Idle
        }
    }

    /// Show the image at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Vec<LightboxEffect> {
        if index >= self.len {
            return Vec::new();
        }
        let was_open = self.is_open();
        self.viewer = Some(Viewer::new(index, &self.config));
        let mut effects = vec![LightboxEffect::LoadImage(index)];
        if !was_open {
            effects.push(LightboxEffect::Show);
        }
        effects.push(LightboxEffect::Transform(ZoomPan::IDENTITY));
        effects
    }

    /// Hide the lightbox.
    pub fn close(&mut self) -> Vec<LightboxEffect> {
        match self.viewer.take() {
            Some(viewer) => {
                let mut effects = vec![
                    LightboxEffect::Hide,
                    LightboxEffect::Transform(ZoomPan::IDENTITY),
                ];
                if viewer.pointer == Pointer::Mouse {
                    effects.push(LightboxEffect::Grabbing(false));
                }
                effects
            }
            None => Vec::new(),
        }
    }

    /// Move by `delta` images. Moves past either end are ignored; there is no wraparound.
    ///
    /// A pending post-drag click suppression carries over to the new image, since
    /// the click that ends a navigating drag arrives after the swap.
    pub fn navigate(&mut self, delta: isize) -> Vec<LightboxEffect> {
        let Some(viewer) = &self.viewer else {
            return Vec::new();
        };
        let suppress_click = viewer.suppress_click;
        match viewer.index.checked_add_signed(delta) {
            Some(target) if target < self.len && delta != 0 => {
                let effects = self.open(target);
                if let Some(viewer) = &mut self.viewer {
                    viewer.suppress_click = suppress_click;
                }
                effects
            }
            _ => Vec::new(),
        }
    }

    /// Zoom in by one button step.
    pub fn zoom_in(&mut self) -> Vec<LightboxEffect> {
        let (step, limits) = (self.config.button_step, self.config.button_limits);
        self.zoom_by(step, limits)
    }

    /// Zoom out by one button step. Reaching 1.0 recenters the image.
    pub fn zoom_out(&mut self) -> Vec<LightboxEffect> {
        let (step, limits) = (-self.config.button_step, self.config.button_limits);
        self.zoom_by(step, limits)
    }

    /// Dispatch an input event observed at `now`.
    pub fn handle(&mut self, input: LightboxInput, now: Millis) -> Vec<LightboxEffect> {
        match input {
            LightboxInput::Open(index) => self.open(index),
            LightboxInput::Close => self.close(),
            LightboxInput::Navigate(delta) => self.navigate(delta),
            LightboxInput::ZoomIn => self.zoom_in(),
            LightboxInput::ZoomOut => self.zoom_out(),
            LightboxInput::ImageLoaded(index) => self.image_loaded(index),
            LightboxInput::MouseDown { target, pos } => self.mouse_down(target, pos, now),
            LightboxInput::MouseMove { pos } => self.mouse_move(pos),
            LightboxInput::MouseUp { pos } => self.mouse_up(pos, now),
            LightboxInput::TouchStart { target, touches } => {
                self.touch_start(target, touches, now)
            }
            LightboxInput::TouchMove { touches } => self.touch_move(touches),
            LightboxInput::TouchEnd { target, remaining } => {
                self.touch_end(target, remaining, now)
            }
            LightboxInput::Wheel { delta_y } => self.wheel(delta_y),
            LightboxInput::Click { target } => self.click(target),
            LightboxInput::Key(key) => self.key(key),
            LightboxInput::Resize { width } => {
                self.platform = Platform::from_viewport_width(width, &self.config);
                Vec::new()
            }
        }
    }

    /// Snapshot of the lightbox state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> LightboxDebugInfo {
        LightboxDebugInfo {
            mode: self.mode(),
            platform: self.platform,
            index: self.index(),
            len: self.len,
            view: self.view(),
            pending_load: self.viewer.as_ref().and_then(|v| v.pending_load),
        }
    }

    fn zoom_by(&mut self, step: f64, limits: ZoomLimits) -> Vec<LightboxEffect> {
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if viewer.view.zoom_by(step, limits) {
            vec![LightboxEffect::Transform(viewer.view)]
        } else {
            Vec::new()
        }
    }

    fn image_loaded(&mut self, index: usize) -> Vec<LightboxEffect> {
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if viewer.index != index || viewer.pending_load != Some(index) {
            return Vec::new();
        }
        viewer.pending_load = None;
        viewer.view.reset();
        vec![LightboxEffect::Transform(viewer.view)]
    }

    fn mouse_down(&mut self, target: Target, pos: Point, now: Millis) -> Vec<LightboxEffect> {
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if target != Target::Image {
            return Vec::new();
        }
        viewer.pointer = Pointer::Mouse;
        viewer.suppress_click = false;
        viewer.tap.on_down(pos, now);
        viewer.drag.start(pos, viewer.view.offset());
        vec![LightboxEffect::Grabbing(true)]
    }

    fn mouse_move(&mut self, pos: Point) -> Vec<LightboxEffect> {
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if viewer.pointer != Pointer::Mouse {
            return Vec::new();
        }
        viewer.tap.on_move(pos);
        viewer.drag.update(pos);
        if !viewer.view.is_zoomed() {
            return Vec::new();
        }
        match viewer.drag.dragged_origin(pos) {
            Some(offset) => {
                viewer.view.set_offset(offset);
                vec![LightboxEffect::Transform(viewer.view)]
            }
            None => Vec::new(),
        }
    }

    fn mouse_up(&mut self, pos: Point, now: Millis) -> Vec<LightboxEffect> {
        let swipe_distance = self.config.swipe_distance;
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if viewer.pointer != Pointer::Mouse {
            return Vec::new();
        }
        viewer.pointer = Pointer::None;
        let dx = viewer.drag.total_offset(pos).map_or(0.0, |d| d.x);
        viewer.drag.end();
        let result = viewer.tap.on_up(now);
        if result == TapResult::Drag {
            viewer.suppress_click = true;
        }
        let release = classify_release(result, viewer.view.is_zoomed(), dx, swipe_distance);

        let mut effects = vec![LightboxEffect::Grabbing(false)];
        effects.extend(self.apply_release(release));
        effects
    }

    fn touch_start(&mut self, target: Target, touches: Touches, now: Millis) -> Vec<LightboxEffect> {
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if target != Target::Image {
            return Vec::new();
        }
        match touches.second {
            Some(second) => {
                if !viewer.tap.is_pressed() {
                    viewer.tap.on_down(touches.first, now);
                }
                viewer.tap.mark_moved();
                viewer.pinch.begin(touches.first, second, viewer.view.scale());
                viewer.pointer = Pointer::Touch { pinched: true };
            }
            None => {
                viewer.tap.on_down(touches.first, now);
                viewer.drag.start(touches.first, viewer.view.offset());
                viewer.pointer = Pointer::Touch { pinched: false };
            }
        }
        Vec::new()
    }

    fn touch_move(&mut self, touches: Touches) -> Vec<LightboxEffect> {
        let limits = self.config.gesture_limits;
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        if !matches!(viewer.pointer, Pointer::Touch { .. }) {
            return Vec::new();
        }
        if let Some(second) = touches.second {
            if !viewer.pinch.is_active() {
                viewer.tap.mark_moved();
                viewer.pinch.begin(touches.first, second, viewer.view.scale());
                viewer.pointer = Pointer::Touch { pinched: true };
                return Vec::new();
            }
            return match viewer.pinch.scale_for(touches.first, second) {
                Some(scale) if viewer.view.set_scale(scale, limits) => {
                    vec![LightboxEffect::Transform(viewer.view)]
                }
                _ => Vec::new(),
            };
        }
        viewer.tap.on_move(touches.first);
        let delta = viewer.drag.update(touches.first);
        if !viewer.view.is_zoomed() {
            return Vec::new();
        }
        match delta {
            Some(delta) => {
                viewer.view.pan_by(delta);
                vec![LightboxEffect::Transform(viewer.view)]
            }
            None => Vec::new(),
        }
    }

    fn touch_end(
        &mut self,
        target: Target,
        remaining: Option<Point>,
        now: Millis,
    ) -> Vec<LightboxEffect> {
        let swipe_distance = self.config.swipe_distance;
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        let Pointer::Touch { pinched } = viewer.pointer else {
            // A tap that began and ended on the backdrop dismisses on any platform.
            return if target == Target::Backdrop {
                self.close()
            } else {
                Vec::new()
            };
        };
        if let Some(pos) = remaining {
            // Down to one finger: keep panning from where it is now.
            viewer.pinch.end();
            viewer.drag.start(pos, viewer.view.offset());
            return Vec::new();
        }
        viewer.pointer = Pointer::None;
        viewer.pinch.end();
        let dx = viewer
            .drag
            .last_pos()
            .and_then(|last| viewer.drag.total_offset(last))
            .map_or(0.0, |d| d.x);
        viewer.drag.end();
        let result = viewer.tap.on_up(now);
        let release = if pinched {
            Release::Nothing
        } else {
            classify_release(result, viewer.view.is_zoomed(), dx, swipe_distance)
        };
        self.apply_release(release)
    }

    fn wheel(&mut self, delta_y: f64) -> Vec<LightboxEffect> {
        let step = if delta_y < 0.0 {
            self.config.wheel_step
        } else if delta_y > 0.0 {
            -self.config.wheel_step
        } else {
            return Vec::new();
        };
        let limits = self.config.gesture_limits;
        self.zoom_by(step, limits)
    }

    fn click(&mut self, target: Target) -> Vec<LightboxEffect> {
        let platform = self.platform;
        let Some(viewer) = &mut self.viewer else {
            return Vec::new();
        };
        let close = match platform {
            Platform::Desktop => {
                let suppressed = viewer.suppress_click || viewer.pointer == Pointer::Mouse;
                viewer.suppress_click = false;
                !suppressed && !matches!(target, Target::Image | Target::NavArrow)
            }
            Platform::Mobile => target == Target::Backdrop,
        };
        if close { self.close() } else { Vec::new() }
    }

    fn key(&mut self, key: Key) -> Vec<LightboxEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.navigate(-1),
            Key::ArrowRight => self.navigate(1),
            _ => Vec::new(),
        }
    }

    fn apply_release(&mut self, release: Release) -> Vec<LightboxEffect> {
        match release {
            Release::Navigate(delta) => self.navigate(delta),
            Release::Close => self.close(),
            Release::Nothing => Vec::new(),
        }
    }
}

/// Decide what a finished press on the image means.
///
/// An unzoomed drag that travelled far enough horizontally navigates
/// (leftward = next); a quick, still press closes.
fn classify_release(result: TapResult, zoomed: bool, dx: f64, swipe_distance: f64) -> Release {
    if !zoomed && result == TapResult::Drag && dx.abs() > swipe_distance {
        Release::Navigate(if dx < 0.0 { 1 } else { -1 })
    } else if result == TapResult::Tap {
        Release::Close
    } else {
        Release::Nothing
    }
}

/// Debug snapshot of a [`Lightbox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightboxDebugInfo {
    /// Interaction mode.
    pub mode: Mode,
    /// Dismissal rules in effect.
    pub platform: Platform,
    /// Image on display.
    pub index: Option<usize>,
    /// Gallery size.
    pub len: usize,
    /// Current transform.
    pub view: ZoomPan,
    /// Image whose load completion is still awaited.
    pub pending_load: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn open_at(len: usize, index: usize, platform: Platform) -> Lightbox {
        let mut lb = Lightbox::new(len, LightboxConfig::default(), platform);
        lb.open(index);
        lb
    }

    fn image_press(lb: &mut Lightbox, from: Point, to: Point, t0: Millis, t1: Millis) -> Vec<LightboxEffect> {
        let mut effects = lb.handle(
            LightboxInput::MouseDown {
                target: Target::Image,
                pos: from,
            },
            t0,
        );
        effects.extend(lb.handle(LightboxInput::MouseMove { pos: to }, t0));
        effects.extend(lb.handle(LightboxInput::MouseUp { pos: to }, t1));
        effects
    }

    #[test]
    fn open_resets_and_requests_image() {
        let mut lb = Lightbox::new(3, LightboxConfig::default(), Platform::Desktop);
        assert_eq!(
            lb.open(1),
            vec![
                LightboxEffect::LoadImage(1),
                LightboxEffect::Show,
                LightboxEffect::Transform(ZoomPan::IDENTITY),
            ]
        );
        assert_eq!(lb.mode(), Mode::Idle);
        assert_eq!(lb.debug_info().pending_load, Some(1));
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut lb = Lightbox::new(2, LightboxConfig::default(), Platform::Desktop);
        assert!(lb.open(2).is_empty());
        assert!(!lb.is_open());
    }

    #[test]
    fn stale_image_load_is_ignored() {
        let mut lb = open_at(3, 0, Platform::Desktop);
        lb.navigate(1);
        assert!(lb.handle(LightboxInput::ImageLoaded(0), 0).is_empty());
        assert_eq!(
            lb.handle(LightboxInput::ImageLoaded(1), 0),
            vec![LightboxEffect::Transform(ZoomPan::IDENTITY)]
        );
        // Only the first completion re-centers.
        assert!(lb.handle(LightboxInput::ImageLoaded(1), 0).is_empty());
    }

    #[test]
    fn load_recenters_after_early_zoom() {
        let mut lb = open_at(3, 0, Platform::Desktop);
        lb.zoom_in();
        assert_eq!(lb.view().scale(), 1.25);
        lb.handle(LightboxInput::ImageLoaded(0), 0);
        assert_eq!(lb.view(), ZoomPan::IDENTITY);
    }

    #[test]
    fn navigation_does_not_wrap() {
        let mut lb = open_at(3, 0, Platform::Desktop);
        assert!(lb.navigate(-1).is_empty());
        assert_eq!(lb.index(), Some(0));
        lb.navigate(2);
        assert_eq!(lb.index(), Some(2));
        assert!(lb.navigate(1).is_empty());
        assert_eq!(lb.index(), Some(2));
    }

    #[test]
    fn navigation_keeps_overlay_shown() {
        let mut lb = open_at(3, 0, Platform::Desktop);
        let effects = lb.navigate(1);
        assert!(!effects.contains(&LightboxEffect::Show));
        assert!(effects.contains(&LightboxEffect::LoadImage(1)));
    }

    #[test]
    fn buttons_clamp_to_unit_and_three() {
        let mut lb = open_at(1, 0, Platform::Desktop);
        assert!(lb.zoom_out().is_empty());
        for _ in 0..20 {
            lb.zoom_in();
        }
        assert_eq!(lb.view().scale(), 3.0);
        for _ in 0..20 {
            lb.zoom_out();
        }
        assert_eq!(lb.view().scale(), 1.0);
    }

    #[test]
    fn wheel_zooms_by_tenths_and_clamps() {
        let mut lb = open_at(1, 0, Platform::Desktop);
        lb.handle(LightboxInput::Wheel { delta_y: 120.0 }, 0);
        assert!((lb.view().scale() - 0.9).abs() < 1e-9);
        for _ in 0..20 {
            lb.handle(LightboxInput::Wheel { delta_y: 120.0 }, 0);
        }
        assert_eq!(lb.view().scale(), 0.5);
        assert!(lb.handle(LightboxInput::Wheel { delta_y: 0.0 }, 0).is_empty());
    }

    #[test]
    fn mouse_pan_only_when_zoomed() {
        let mut lb = open_at(1, 0, Platform::Desktop);
        let effects = image_press(&mut lb, Point::new(100.0, 100.0), Point::new(120.0, 130.0), 0, 500);
        assert!(!effects.iter().any(|e| matches!(e, LightboxEffect::Transform(_))));
        assert_eq!(lb.view().offset(), Vec2::ZERO);

        lb.zoom_in();
        image_press(&mut lb, Point::new(100.0, 100.0), Point::new(120.0, 130.0), 1_000, 1_500);
        assert_eq!(lb.view().offset(), Vec2::new(20.0, 30.0));

        // A second drag continues from the current offset.
        image_press(&mut lb, Point::new(0.0, 0.0), Point::new(-5.0, 10.0), 2_000, 2_500);
        assert_eq!(lb.view().offset(), Vec2::new(15.0, 40.0));
        assert!(lb.is_open());
    }

    #[test]
    fn quick_still_click_on_image_closes() {
        let mut lb = open_at(2, 0, Platform::Desktop);
        let effects = image_press(&mut lb, Point::new(50.0, 50.0), Point::new(53.0, 52.0), 0, 150);
        assert!(effects.contains(&LightboxEffect::Hide));
        assert!(!lb.is_open());
    }

    #[test]
    fn slow_still_press_does_not_close() {
        let mut lb = open_at(2, 0, Platform::Desktop);
        image_press(&mut lb, Point::new(50.0, 50.0), Point::new(50.0, 50.0), 0, 300);
        assert!(lb.is_open());
    }

    #[test]
    fn drag_suppresses_following_backdrop_click_once() {
        let mut lb = open_at(2, 0, Platform::Desktop);
        lb.zoom_in();
        image_press(&mut lb, Point::new(50.0, 50.0), Point::new(70.0, 50.0), 0, 100);
        assert!(lb.handle(LightboxInput::Click { target: Target::Content }, 100).is_empty());
        assert!(lb.is_open());
        lb.handle(LightboxInput::Click { target: Target::Content }, 500);
        assert!(!lb.is_open());
    }

    #[test]
    fn navigating_drag_suppresses_following_content_click() {
        let mut lb = open_at(3, 1, Platform::Desktop);
        image_press(&mut lb, Point::new(300.0, 50.0), Point::new(200.0, 50.0), 0, 100);
        assert_eq!(lb.index(), Some(2));
        assert!(lb.handle(LightboxInput::Click { target: Target::Content }, 100).is_empty());
        assert!(lb.is_open());
        lb.handle(LightboxInput::Click { target: Target::Backdrop }, 500);
        assert!(!lb.is_open());
    }

    #[test]
    fn unzoomed_mouse_drag_navigates() {
        let mut lb = open_at(3, 1, Platform::Desktop);
        image_press(&mut lb, Point::new(300.0, 50.0), Point::new(200.0, 60.0), 0, 400);
        assert_eq!(lb.index(), Some(2));
        image_press(&mut lb, Point::new(200.0, 50.0), Point::new(260.0, 50.0), 1_000, 1_100);
        assert_eq!(lb.index(), Some(1));
    }

    #[test]
    fn desktop_backdrop_rules() {
        let mut lb = open_at(2, 0, Platform::Desktop);
        lb.handle(LightboxInput::Click { target: Target::NavArrow }, 0);
        lb.handle(LightboxInput::Click { target: Target::Image }, 0);
        assert!(lb.is_open());
        lb.handle(LightboxInput::Click { target: Target::Content }, 0);
        assert!(!lb.is_open());
    }

    #[test]
    fn mobile_backdrop_rules() {
        let mut lb = open_at(2, 0, Platform::Mobile);
        lb.handle(LightboxInput::Click { target: Target::Content }, 0);
        assert!(lb.is_open());
        lb.handle(LightboxInput::Click { target: Target::Backdrop }, 0);
        assert!(!lb.is_open());
    }

    #[test]
    fn resize_switches_platform() {
        let mut lb = open_at(2, 0, Platform::Desktop);
        lb.handle(LightboxInput::Resize { width: 768.0 }, 0);
        assert_eq!(lb.platform(), Platform::Mobile);
        lb.handle(LightboxInput::Resize { width: 769.0 }, 0);
        assert_eq!(lb.platform(), Platform::Desktop);
    }

    #[test]
    fn backdrop_touch_closes() {
        let mut lb = open_at(2, 0, Platform::Mobile);
        lb.handle(
            LightboxInput::TouchEnd {
                target: Target::Backdrop,
                remaining: None,
            },
            0,
        );
        assert!(!lb.is_open());
    }

    #[test]
    fn keys_only_act_while_open() {
        let mut lb = Lightbox::new(3, LightboxConfig::default(), Platform::Desktop);
        assert!(lb.handle(LightboxInput::Key(Key::ArrowRight), 0).is_empty());
        lb.open(0);
        lb.handle(LightboxInput::Key(Key::ArrowRight), 0);
        assert_eq!(lb.index(), Some(1));
        lb.handle(LightboxInput::Key(Key::ArrowLeft), 0);
        assert_eq!(lb.index(), Some(0));
        lb.handle(LightboxInput::Key(Key::Escape), 0);
        assert!(!lb.is_open());
    }

    #[test]
    fn touches_from_points() {
        assert_eq!(Touches::from_points(&[]), None);
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(Touches::from_points(&[a]), Some(Touches::one(a)));
        assert_eq!(Touches::from_points(&[a, b, a]), Some(Touches::two(a, b)));
    }
}
