// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Vec2};

/// Inclusive scale range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ZoomLimits {
    /// Create a range; the bounds are normalized so that `min <= max`.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Clamp `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Pan offset and uniform scale applied to the lightbox image.
///
/// The offset is in view pixels and is applied before the scale, matching a
/// CSS `translate(..) scale(..)` transform. Whenever the scale lands on 1.0
/// the offset snaps back to the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPan {
    scale: f64,
    offset: Vec2,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Wheel steps of 0.1 accumulate rounding error; treat anything this close to
// 1.0 as exactly unzoomed.
const UNIT_EPSILON: f64 = 1e-9;

impl ZoomPan {
    /// Unscaled, centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns `true` when scaled above 1.0, which is when panning is allowed.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    /// Back to [`ZoomPan::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Set the scale, clamped into `limits`. Returns `true` if anything changed.
    pub fn set_scale(&mut self, scale: f64, limits: ZoomLimits) -> bool {
        let mut clamped = limits.clamp(scale);
        if (clamped - 1.0).abs() < UNIT_EPSILON {
            clamped = 1.0;
        }
        let before = *self;
        self.scale = clamped;
        if clamped == 1.0 {
            self.offset = Vec2::ZERO;
        }
        before != *self
    }

    /// Add `step` to the scale, clamped into `limits`.
    pub fn zoom_by(&mut self, step: f64, limits: ZoomLimits) -> bool {
        self.set_scale(self.scale + step, limits)
    }

    /// Move the offset by `delta`.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Replace the offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// The transform as an affine map from image space to view space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// The transform as a CSS `transform` value.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use vitrine_lightbox::{ZoomLimits, ZoomPan};
    ///
    /// let mut view = ZoomPan::IDENTITY;
    /// view.set_scale(2.5, ZoomLimits::new(0.5, 3.0));
    /// view.set_offset(Vec2::new(-12.0, 40.5));
    /// assert_eq!(view.css_transform(), "translate(-12px, 40.5px) scale(2.5)");
    /// ```
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}
