//! This module describes gradients: sequences of colors where each of the three channels moves
//! linearly from a start value to an end value. A gradient works on the channels of any color type
//! that can be rebuilt from a [`Coord`], so the same description gives an HSLuv gradient, an RGB
//! gradient, or anything else.
//!
//! There are two kinds. A [`GradientDescriptor`] has a fixed number of evenly spaced steps. A
//! [`ContrastGradientDescriptor`] picks its own step sizes: each color is the first one along the
//! gradient whose contrast against the previous color reaches a minimum, which is useful for building
//! palettes where neighboring shades are always distinguishable.

use std::marker::PhantomData;

use color::Color;
use contrast::Contrast;
use coord::{Coord, Scalar};
use num;

/// How a single channel changes over the course of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaKind {
    /// The channel keeps the same value throughout.
    Static,
    /// The channel goes from a smaller value to a larger one.
    Increasing,
    /// The channel goes from a larger value to a smaller one.
    Decreasing,
}

/// The range one channel covers in a gradient, and which way it is traversed.
///
/// # Example
/// ```
/// # use chromaluv::gradient::{Delta, DeltaKind};
/// let fading = Delta::new(100., 50.);
/// assert_eq!(fading.kind(), DeltaKind::Decreasing);
/// assert_eq!(fading.value_at(0.), 100.);
/// assert_eq!(fading.value_at(0.25), 87.5);
/// assert_eq!(Delta::fixed(12.2).value_at(0.7), 12.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    lower: f64,
    upper: f64,
    kind: DeltaKind,
}

impl Delta {
    /// A channel that moves from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Delta {
        if start == end {
            Delta::fixed(start)
        } else if start < end {
            Delta {
                lower: start,
                upper: end,
                kind: DeltaKind::Increasing,
            }
        } else {
            Delta {
                lower: end,
                upper: start,
                kind: DeltaKind::Decreasing,
            }
        }
    }
    /// A channel that stays at `value`.
    pub fn fixed(value: f64) -> Delta {
        Delta {
            lower: value,
            upper: value,
            kind: DeltaKind::Static,
        }
    }
    /// Which way the channel moves.
    pub fn kind(&self) -> DeltaKind {
        self.kind
    }
    /// The value at the start of the gradient.
    pub fn start(&self) -> f64 {
        match self.kind {
            DeltaKind::Decreasing => self.upper,
            _ => self.lower,
        }
    }
    /// The value at the end of the gradient.
    pub fn end(&self) -> f64 {
        match self.kind {
            DeltaKind::Decreasing => self.lower,
            _ => self.upper,
        }
    }
    /// The distance between the two ends. Never negative.
    pub fn magnitude(&self) -> f64 {
        self.upper - self.lower
    }
    /// The value a fraction `ratio` of the way through the gradient, where 0 is the start and 1 is
    /// the end.
    pub fn value_at(&self, ratio: f64) -> f64 {
        match self.kind {
            DeltaKind::Static => self.lower,
            DeltaKind::Increasing => self.lower + self.magnitude() * ratio,
            DeltaKind::Decreasing => self.upper - self.magnitude() * ratio,
        }
    }
}

// index / count, clamped to [0, 1]; a gradient with no steps only has its start
fn step_ratio<U: Scalar>(index: U, count: U) -> f64 {
    let count: f64 = num::cast(count).unwrap_or(0.);
    let index: f64 = num::cast(index).unwrap_or(0.);
    if count == 0. {
        return 0.;
    }
    let ratio = index / count;
    if ratio < 0. {
        0.
    } else if ratio > 1. {
        1.
    } else {
        ratio
    }
}

/// A trait that models a gradient over three channels, producing colors of type `T`. The channels
/// map to the axes of the [`Coord`] that `T` is built from, in order.
pub trait Gradient<T: From<Coord>> {
    /// The three channel ranges.
    fn deltas(&self) -> [Delta; 3];

    /// Maps a number between 0 and 1 to a color, where 0 is the start of the gradient and 1 is the
    /// end. Values outside of that range are clamped to it.
    fn sample(&self, ratio: f64) -> T {
        let ratio = if ratio < 0. {
            0.
        } else if ratio > 1. {
            1.
        } else {
            ratio
        };
        let [a, b, c] = self.deltas();
        T::from(Coord::new(
            a.value_at(ratio),
            b.value_at(ratio),
            c.value_at(ratio),
        ))
    }
    /// The color at step `index` of a gradient split into `count` steps: `index / count` of the way
    /// through.
    fn color_at<U: Scalar>(&self, index: U, count: U) -> T {
        self.sample(step_ratio(index, count))
    }
    /// The color the gradient starts at.
    fn first(&self) -> T {
        self.sample(0.)
    }
    /// The color halfway through the gradient.
    fn mid(&self) -> T {
        self.sample(0.5)
    }
    /// The color the gradient ends at.
    fn last(&self) -> T {
        self.sample(1.)
    }
}

/// A gradient with `count + 1` evenly spaced colors: steps 0 through `count`, both ends included.
///
/// # Example
/// ```
/// # use chromaluv::gradient::{Delta, Gradient, GradientDescriptor};
/// # use chromaluv::colors::Hsluv;
/// let reds: GradientDescriptor<Hsluv> =
///     GradientDescriptor::new(10, Delta::fixed(12.2), Delta::new(100., 50.), Delta::new(30., 60.));
/// let colors: Vec<Hsluv> = reds.iter().collect();
/// assert_eq!(colors.len(), 11);
/// assert_eq!(colors[0], reds.first());
/// assert_eq!(colors[10], reds.last());
/// assert_eq!(colors[5].l, 45.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescriptor<T> {
    /// The range of the first channel.
    pub a: Delta,
    /// The range of the second channel.
    pub b: Delta,
    /// The range of the third channel.
    pub c: Delta,
    /// The number of steps. The gradient has one more color than this.
    pub count: usize,
    marker: PhantomData<T>,
}

impl<T: From<Coord>> GradientDescriptor<T> {
    /// Builds a gradient with `count` steps over the three channel ranges.
    pub fn new(count: usize, a: Delta, b: Delta, c: Delta) -> GradientDescriptor<T> {
        GradientDescriptor {
            a,
            b,
            c,
            count,
            marker: PhantomData,
        }
    }
    /// Iterates over every color in the gradient, from start to end. Each call starts over.
    pub fn iter(&self) -> GradientIter<T> {
        GradientIter {
            deltas: self.deltas(),
            count: self.count,
            index: 0,
            marker: PhantomData,
        }
    }
}

impl<T: From<Coord>> Gradient<T> for GradientDescriptor<T> {
    fn deltas(&self) -> [Delta; 3] {
        [self.a, self.b, self.c]
    }
}

impl<'a, T: From<Coord>> IntoIterator for &'a GradientDescriptor<T> {
    type Item = T;
    type IntoIter = GradientIter<T>;

    fn into_iter(self) -> GradientIter<T> {
        self.iter()
    }
}

/// An iterator over the colors of a [`GradientDescriptor`].
#[derive(Debug, Clone)]
pub struct GradientIter<T> {
    deltas: [Delta; 3],
    count: usize,
    index: usize,
    marker: PhantomData<T>,
}

impl<T: From<Coord>> Gradient<T> for GradientIter<T> {
    fn deltas(&self) -> [Delta; 3] {
        self.deltas
    }
}

impl<T: From<Coord>> Iterator for GradientIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index > self.count {
            return None;
        }
        let color = self.color_at(self.index, self.count);
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: From<Coord>> ExactSizeIterator for GradientIter<T> {}

/// The default resolution of a [`ContrastGradientDescriptor`]: the gradient is searched as if it had
/// this many steps.
pub const DEFAULT_MAX_INDEX: u64 = ::std::u32::MAX as u64;

/// A gradient whose colors are chosen by contrast instead of being evenly spaced. Iteration starts at
/// the beginning of the gradient; each following color is the first step whose WCAG contrast ratio
/// against the previous color is at least `min_contrast`. The gradient is treated as having
/// `max_index` steps, and iteration stops once the end is reached or no later step has enough
/// contrast.
///
/// The search for the next color is a binary search, so it assumes the contrast against the current
/// color only grows further along the gradient. That holds for gradients that move lightness in one
/// direction.
///
/// # Example
/// ```
/// # use chromaluv::prelude::*;
/// # use chromaluv::gradient::{ContrastGradientDescriptor, Delta};
/// # use chromaluv::colors::Hsluv;
/// let blues: ContrastGradientDescriptor<Hsluv> = ContrastGradientDescriptor::new(
///     1.5,
///     Delta::fixed(258.6),
///     Delta::new(100., 50.),
///     Delta::new(30., 60.),
/// );
/// let shades: Vec<Hsluv> = blues.iter().collect();
/// assert_eq!(shades.len(), 3);
/// for pair in shades.windows(2) {
///     assert!(pair[0].contrast_ratio(&pair[1]) >= 1.5);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastGradientDescriptor<T> {
    /// The smallest contrast ratio allowed between neighboring colors.
    pub min_contrast: f64,
    /// The range of the first channel.
    pub a: Delta,
    /// The range of the second channel.
    pub b: Delta,
    /// The range of the third channel.
    pub c: Delta,
    /// The number of steps the gradient is divided into when searching. Larger values find colors
    /// closer to exactly `min_contrast` apart.
    pub max_index: u64,
    marker: PhantomData<T>,
}

impl<T: From<Coord> + Color + Copy> ContrastGradientDescriptor<T> {
    /// Builds a contrast gradient over the three channel ranges, searched at [`DEFAULT_MAX_INDEX`]
    /// resolution.
    pub fn new(min_contrast: f64, a: Delta, b: Delta, c: Delta) -> ContrastGradientDescriptor<T> {
        ContrastGradientDescriptor {
            min_contrast,
            a,
            b,
            c,
            max_index: DEFAULT_MAX_INDEX,
            marker: PhantomData,
        }
    }
    /// Returns a copy of this gradient searched at a different resolution.
    pub fn with_max_index(mut self, max_index: u64) -> ContrastGradientDescriptor<T> {
        self.max_index = max_index;
        self
    }
    /// Iterates over the colors of the gradient. Each call starts over.
    pub fn iter(&self) -> ContrastGradientIter<T> {
        ContrastGradientIter {
            descriptor: *self,
            current: None,
            position: 0,
        }
    }
}

impl<T: From<Coord>> Gradient<T> for ContrastGradientDescriptor<T> {
    fn deltas(&self) -> [Delta; 3] {
        [self.a, self.b, self.c]
    }
}

impl<'a, T: From<Coord> + Color + Copy> IntoIterator for &'a ContrastGradientDescriptor<T> {
    type Item = T;
    type IntoIter = ContrastGradientIter<T>;

    fn into_iter(self) -> ContrastGradientIter<T> {
        self.iter()
    }
}

/// An iterator over the colors of a [`ContrastGradientDescriptor`]. It remembers the last color it
/// produced and where that color sits on the gradient, so it can't be shared between consumers, but
/// separate iterators are independent.
#[derive(Debug, Clone)]
pub struct ContrastGradientIter<T> {
    descriptor: ContrastGradientDescriptor<T>,
    current: Option<T>,
    position: u64,
}

impl<T: From<Coord> + Color + Copy> Iterator for ContrastGradientIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let max = self.descriptor.max_index;
        let current = match self.current {
            Some(color) => color,
            None => {
                let first = self.descriptor.color_at(self.position, max);
                self.current = Some(first);
                return Some(first);
            }
        };
        if self.position >= max {
            return None;
        }

        let min_contrast = self.descriptor.min_contrast;
        let reaches =
            |index: u64| current.contrast_ratio(&self.descriptor.color_at(index, max)) >= min_contrast;

        if !reaches(max) {
            trace!(
                "no step after {} reaches contrast {}, ending gradient",
                self.position,
                min_contrast
            );
            self.position = max;
            return None;
        }
        // lo never reaches the minimum, hi always does
        let mut lo = self.position;
        let mut hi = max;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if reaches(mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        trace!("contrast gradient step {} -> {}", self.position, hi);
        let next = self.descriptor.color_at(hi, max);
        self.position = hi;
        self.current = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::Rgb;
    use colors::Hsluv;

    fn red_gradient() -> GradientDescriptor<Hsluv> {
        GradientDescriptor::new(
            10,
            Delta::fixed(12.2),
            Delta::new(100., 50.),
            Delta::new(30., 60.),
        )
    }

    fn blue_gradient(min_contrast: f64) -> ContrastGradientDescriptor<Hsluv> {
        ContrastGradientDescriptor::new(
            min_contrast,
            Delta::fixed(258.6),
            Delta::new(100., 50.),
            Delta::new(30., 60.),
        )
    }

    #[test]
    fn test_delta_kinds() {
        assert_eq!(Delta::new(3., 3.).kind(), DeltaKind::Static);
        assert_eq!(Delta::new(3., 4.).kind(), DeltaKind::Increasing);
        assert_eq!(Delta::new(4., 3.).kind(), DeltaKind::Decreasing);
        let d = Delta::new(80., 20.);
        assert_eq!((d.start(), d.end(), d.magnitude()), (80., 20., 60.));
        let d = Delta::new(20., 80.);
        assert_eq!((d.start(), d.end(), d.magnitude()), (20., 80., 60.));
        assert_eq!(Delta::fixed(5.).magnitude(), 0.);
    }

    #[test]
    fn test_gradient_boundaries() {
        let grad = red_gradient();
        let colors: Vec<Hsluv> = grad.iter().collect();
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[0], grad.first());
        assert_eq!(colors[10], grad.last());
        assert_eq!(colors[5], grad.mid());
        assert_eq!(
            grad.first(),
            Hsluv {
                h: 12.2,
                s: 100.,
                l: 30.
            }
        );
        assert_eq!(
            grad.last(),
            Hsluv {
                h: 12.2,
                s: 50.,
                l: 60.
            }
        );
        // halfway, whichever way each channel runs
        assert_eq!(
            grad.mid(),
            Hsluv {
                h: 12.2,
                s: 75.,
                l: 45.
            }
        );
    }

    #[test]
    fn test_gradient_is_restartable() {
        let grad = red_gradient();
        let first_pass: Vec<Hsluv> = grad.iter().collect();
        let second_pass: Vec<Hsluv> = (&grad).into_iter().collect();
        assert_eq!(first_pass, second_pass);
        let mut iter = grad.iter();
        assert_eq!(iter.len(), 11);
        iter.next();
        assert_eq!(iter.len(), 10);
    }

    #[test]
    fn test_empty_gradient() {
        let grad: GradientDescriptor<Hsluv> =
            GradientDescriptor::new(0, Delta::fixed(0.), Delta::fixed(0.), Delta::new(0., 40.));
        let colors: Vec<Hsluv> = grad.iter().collect();
        assert_eq!(colors, vec![grad.first()]);
    }

    #[test]
    fn test_color_at_clamps() {
        let grad = red_gradient();
        assert_eq!(grad.color_at(-3, 10), grad.first());
        assert_eq!(grad.color_at(15, 10), grad.last());
        assert_eq!(grad.color_at(2.5, 10.), grad.sample(0.25));
    }

    #[test]
    fn test_rgb_gradient() {
        let fade: GradientDescriptor<Rgb> =
            GradientDescriptor::new(4, Delta::new(1., 0.), Delta::fixed(0.), Delta::new(0., 1.));
        let hexes: Vec<String> = fade
            .iter()
            .map(|c| c.to_hex().unwrap().to_string())
            .collect();
        assert_eq!(
            hexes,
            vec!["#ff0000", "#bf0040", "#800080", "#4000bf", "#0000ff"]
        );
    }

    #[test]
    fn test_contrast_gradient_steps() {
        let grad = blue_gradient(1.1);
        let colors: Vec<Hsluv> = grad.iter().collect();
        assert_eq!(colors[0], grad.first());
        assert!(colors.len() > 2);
        for pair in colors.windows(2) {
            assert!(pair[0].contrast_ratio(&pair[1]) >= 1.1);
            assert!(pair[1].l > pair[0].l);
        }
        // nothing left on the gradient is far enough from the last color
        let last = colors[colors.len() - 1];
        assert!(last.contrast_ratio(&grad.last()) < 1.1);
    }

    #[test]
    fn test_contrast_gradient_matches_linear_scan() {
        let max = 1000u64;
        let grad = blue_gradient(1.1).with_max_index(max);
        let found: Vec<Hsluv> = grad.iter().collect();

        let mut expected = vec![grad.color_at(0, max)];
        let mut position = 0;
        loop {
            let current = expected[expected.len() - 1];
            let next = (position + 1..max + 1)
                .find(|&i| current.contrast_ratio(&grad.color_at(i, max)) >= 1.1);
            match next {
                Some(i) => {
                    position = i;
                    expected.push(grad.color_at(i, max));
                }
                None => break,
            }
        }
        assert_eq!(found, expected);
    }

    #[test]
    fn test_contrast_gradient_ends_at_last_index() {
        // every step reaches a minimum of 1, so the search walks to the very end and stops
        let grad = blue_gradient(1.).with_max_index(4);
        let colors: Vec<Hsluv> = grad.iter().collect();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[4], grad.last());
    }

    #[test]
    fn test_contrast_gradient_unreachable() {
        let grad = blue_gradient(25.);
        let colors: Vec<Hsluv> = grad.iter().collect();
        assert_eq!(colors, vec![grad.first()]);
    }

    #[test]
    fn test_contrast_iterators_are_independent() {
        let grad = blue_gradient(1.3).with_max_index(10000);
        let mut a = grad.iter();
        let mut b = grad.iter();
        a.next();
        a.next();
        assert_eq!(b.next(), Some(grad.first()));
        assert_eq!(a.count() + 2, grad.iter().count());
    }
}
