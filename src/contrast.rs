//! This module implements the relative luminance and contrast ratio of the W3C's [WCAG
//! 2.0](https://www.w3.org/TR/WCAG20/#contrast-ratiodef), the usual measure of whether text is
//! legible against its background. Both are defined on sRGB, so any [`Color`] works: it is converted
//! first.
//!
//! Luminance re-linearizes the gamma-encoded channels before weighting them. Weighting the encoded
//! channels directly is a common shortcut, but it overstates the luminance of midtones and gives
//! ratios that don't match the standard.

use color::{to_linear, Color, Rgb};

/// The smallest ratio WCAG accepts for normal-size text.
pub const NORMAL_TEXT_CONTRAST: f64 = 4.5;
/// The smallest ratio WCAG accepts for large text (18pt, or 14pt bold).
pub const LARGE_TEXT_CONTRAST: f64 = 3.0;

/// Describes a Color whose legibility against other colors can be measured. Implemented for every
/// [`Color`].
pub trait Contrast: Color {
    /// The relative luminance of this color, from 0 for black to 1 for white.
    fn relative_luminance(&self) -> f64 {
        let rgb: Rgb = self.convert();
        let luminance =
            0.2126 * to_linear(rgb.r) + 0.7152 * to_linear(rgb.g) + 0.0722 * to_linear(rgb.b);
        luminance.max(0.).min(1.)
    }

    /// The contrast ratio between two colors, `(lighter + 0.05) / (darker + 0.05)`. It doesn't
    /// matter which one is the text and which is the background: the result is always between 1 (the
    /// same luminance) and 21 (black against white).
    ///
    /// # Example
    /// ```
    /// # use chromaluv::prelude::*;
    /// let black = Rgb { r: 0., g: 0., b: 0. };
    /// let white = Rgb { r: 1., g: 1., b: 1. };
    /// assert!((black.contrast_ratio(&white) - 21.).abs() <= 1e-6);
    /// assert_eq!(white.contrast_ratio(&white), 1.);
    /// ```
    fn contrast_ratio<T: Color>(&self, other: &T) -> f64 {
        let ours = self.relative_luminance();
        let theirs = other.convert::<Rgb>().relative_luminance();
        let lighter = ours.max(theirs);
        let darker = ours.min(theirs);
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Returns `true` if the contrast between the two colors is enough for text under WCAG 2.0: more
    /// than 4.5 for normal text, or more than 3 for large text.
    fn meets_contrast_threshold<T: Color>(&self, other: &T, large_text: bool) -> bool {
        let threshold = if large_text {
            LARGE_TEXT_CONTRAST
        } else {
            NORMAL_TEXT_CONTRAST
        };
        self.contrast_ratio(other) > threshold
    }
}

impl<T: Color> Contrast for T {
    // nothing to do
}
