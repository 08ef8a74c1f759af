//! Chromaluv converts colors between sRGB, CIE XYZ, CIELUV, CIELCHuv, and the HSLuv and HPLuv color
//! spaces. HSLuv keeps the convenience of HSL, a hue, a saturation and a lightness that can all be
//! picked independently, while fixing its biggest flaw: lightness in HSLuv is perceptual lightness,
//! so two colors with the same `l` really do look equally light. Every HSLuv color with saturation and
//! lightness in [0, 100] is inside the sRGB gamut, which makes it safe to generate colors in
//! programmatically.
//!
//! Beyond the conversions, the crate encodes colors as hex strings, measures WCAG contrast, and builds
//! gradients, including gradients whose steps are chosen so neighboring colors keep a minimum
//! contrast.
//!
//! ```
//! # use chromaluv::prelude::*;
//! # use chromaluv::colors::{hsluv_to_rgb, Hsluv};
//! let teal = hsluv_to_rgb(Hsluv { h: 198.15, s: 66.97, l: 43.22 });
//! assert_eq!(teal.to_hex().unwrap().as_str(), "#3c6e71");
//! ```

#![doc(html_root_url = "https://docs.rs/chromaluv/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but the conversion constants are copied digit for digit
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

extern crate csv;
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
pub mod gradient;
pub mod math;
pub mod prelude;
pub mod snapshot;

pub use colors::{hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};
