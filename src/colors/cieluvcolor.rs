//! This module implements the CIELUV color space under the D65 illuminant. CIELUV is close enough to
//! perceptually uniform that distances in it are meaningful, and its (u, v) plane is where the sRGB
//! gamut turns into straight lines, which is what HSLuv is built on.

use super::cielchuvcolor::Lch;
use color::{Color, Xyz};
use consts::{EPSILON, KAPPA, REF_U, REF_V};
use coord::Coord;

/// A color in CIELUV. L is lightness and (u, v) is chromaticity relative to the D65 white point.
///
/// # Example
///
/// ```
/// # use chromaluv::prelude::*;
/// # use chromaluv::colors::Luv;
/// let white: Luv = Rgb { r: 1., g: 1., b: 1. }.convert();
/// assert!((white.l - 100.).abs() <= 1e-9);
/// assert!(white.u.abs() <= 1e-9 && white.v.abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Luv {
    /// The lightness component. Ranges from 0 to 100.
    pub l: f64,
    /// The component that runs from green (negative) to red (positive).
    pub u: f64,
    /// The component that runs from blue (negative) to yellow (positive).
    pub v: f64,
}

// the white point has Y = 1, so these skip dividing by it
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116. * y.powf(1. / 3.) - 16.
    }
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8. {
        l / KAPPA
    } else {
        ((l + 16.) / 116.).powi(3)
    }
}

impl Luv {
    /// Converts to the polar form, CIELCHuv.
    pub fn to_lch(&self) -> Lch {
        Lch::from_luv(*self)
    }
}

impl Color for Luv {
    fn from_xyz(xyz: Xyz) -> Luv {
        let l = y_to_l(xyz.y);
        if l == 0. {
            // black has no chromaticity, and would divide by zero below
            return Luv {
                l: 0.,
                u: 0.,
                v: 0.,
            };
        }
        let denom = xyz.x + 15. * xyz.y + 3. * xyz.z;
        let var_u = 4. * xyz.x / denom;
        let var_v = 9. * xyz.y / denom;
        Luv {
            l,
            u: 13. * l * (var_u - REF_U),
            v: 13. * l * (var_v - REF_V),
        }
    }
    fn to_xyz(&self) -> Xyz {
        if self.l == 0. {
            return Xyz {
                x: 0.,
                y: 0.,
                z: 0.,
            };
        }
        let var_u = self.u / (13. * self.l) + REF_U;
        let var_v = self.v / (13. * self.l) + REF_V;
        let y = l_to_y(self.l);
        // kept unsimplified: this is the form the reference values were generated with
        let x_divisor = (var_u - 4.) * var_v - var_u * var_v;
        let x = 0. - (9. * y * var_u) / x_divisor;
        let z = (9. * y - 15. * var_v * y - var_v * x) / (3. * var_v);
        Xyz { x, y, z }
    }
}

impl From<Coord> for Luv {
    fn from(c: Coord) -> Luv {
        Luv {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<Luv> for Coord {
    fn from(luv: Luv) -> Coord {
        Coord::new(luv.l, luv.u, luv.v)
    }
}
