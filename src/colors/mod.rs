//! This module contains the color spaces built on top of XYZ, from CIELUV through its polar form
//! CIELCHuv to HSLuv and HPLuv. Each type lives in its own file and is imported into this module's
//! namespace directly, as are the composite conversions between sRGB and HSLuv/HPLuv.
//!
//! The chain is `HSLuv/HPLuv <-> LCH <-> LUV <-> XYZ <-> RGB`, and every step is a pure function.
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;

pub use self::cielchuvcolor::Lch;
pub use self::cieluvcolor::Luv;
pub use self::hpluvcolor::{hpluv_to_rgb, rgb_to_hpluv, Hpluv};
pub use self::hsluvcolor::{hsluv_to_rgb, rgb_to_hsluv, Hsluv};

// black and white are achromatic: the gamut shrinks to a point there
fn is_extreme_lightness(l: f64) -> bool {
    l > ::consts::L_MAX || l < ::consts::L_MIN
}
