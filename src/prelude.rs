//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait in the crate, the base [`Rgb`] and [`Xyz`]
//! types, hex encoding and its error type, and nothing else. The color spaces in the [`colors`]
//! module are not included.
//!
//! [`colors`]: ../colors/index.html

pub use color::{Color, ColorError, Hex, Rgb, Xyz};
pub use contrast::Contrast;
pub use gradient::Gradient;
