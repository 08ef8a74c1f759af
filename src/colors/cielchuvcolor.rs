//! This module implements CIELCHuv, the cylindrical form of CIELUV: the same lightness, with the
//! (u, v) plane written as a chroma (distance from gray) and a hue angle.

use super::cieluvcolor::Luv;
use super::hpluvcolor::Hpluv;
use super::hsluvcolor::Hsluv;
use super::is_extreme_lightness;
use bound::{max_chroma_for_lh, max_safe_chroma_for_l};
use color::{Color, Xyz};
use consts::GRAY_CHROMA;
use coord::Coord;

/// The polar version of CIELUV. Grays have no meaningful hue, and are given a hue of 0.
/// # Example
///
/// ```
/// # use chromaluv::prelude::*;
/// # use chromaluv::colors::Lch;
/// let gray: Lch = Rgb { r: 0.5, g: 0.5, b: 0.5 }.convert();
/// assert!(gray.c <= 1e-9);
/// assert_eq!(gray.h, 0.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    /// The lightness component, the same as in CIELUV. Ranges from 0 to 100.
    pub l: f64,
    /// The chroma component: how far the color is from the gray of the same lightness. Never negative.
    pub c: f64,
    /// The hue angle in degrees, in [0, 360).
    pub h: f64,
}

impl Lch {
    /// Converts from CIELUV. Colors with chroma below 1e-8 are treated as gray and get a hue of 0.
    pub fn from_luv(luv: Luv) -> Lch {
        let c = (luv.u * luv.u + luv.v * luv.v).sqrt();
        if c < GRAY_CHROMA {
            return Lch { l: luv.l, c, h: 0. };
        }
        let mut h = luv.v.atan2(luv.u) * 360. / 2. / ::std::f64::consts::PI;
        if h < 0. {
            h += 360.;
        }
        Lch { l: luv.l, c, h }
    }
    /// Converts back to the cartesian CIELUV.
    pub fn to_luv(&self) -> Luv {
        let hrad = self.h / 360. * 2. * ::std::f64::consts::PI;
        Luv {
            l: self.l,
            u: hrad.cos() * self.c,
            v: hrad.sin() * self.c,
        }
    }
    /// Converts to HSLuv by expressing chroma as a percentage of the largest chroma available at this
    /// lightness and hue. Black and white get a saturation of 0.
    pub fn to_hsluv(&self) -> Hsluv {
        if is_extreme_lightness(self.l) {
            return Hsluv {
                h: self.h,
                s: 0.,
                l: self.l,
            };
        }
        let max = max_chroma_for_lh(self.l, self.h);
        Hsluv {
            h: self.h,
            s: self.c / max * 100.,
            l: self.l,
        }
    }
    /// Converts to HPLuv by expressing chroma as a percentage of the largest chroma available at this
    /// lightness for every hue. Saturated colors can exceed 100. Black and white get a saturation of 0.
    pub fn to_hpluv(&self) -> Hpluv {
        if is_extreme_lightness(self.l) {
            return Hpluv {
                h: self.h,
                s: 0.,
                l: self.l,
            };
        }
        let max = max_safe_chroma_for_l(self.l);
        Hpluv {
            h: self.h,
            s: self.c / max * 100.,
            l: self.l,
        }
    }
}

impl Color for Lch {
    fn from_xyz(xyz: Xyz) -> Lch {
        Lch::from_luv(Luv::from_xyz(xyz))
    }
    fn to_xyz(&self) -> Xyz {
        self.to_luv().to_xyz()
    }
}

impl From<Coord> for Lch {
    fn from(c: Coord) -> Lch {
        Lch {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<Lch> for Coord {
    fn from(lch: Lch) -> Coord {
        Coord::new(lch.l, lch.c, lch.h)
    }
}
