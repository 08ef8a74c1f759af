//! This module implements HSLuv, a human-friendly alternative to HSL built on CIELCHuv. Hue and
//! lightness come straight from LCH, and saturation is chroma expressed as a percentage of the most
//! chroma sRGB can show at that lightness and hue. Unlike HSL, equal lightness looks equally light,
//! and unlike LCH, every value with `s` and `l` in [0, 100] is a displayable color.

use super::cielchuvcolor::Lch;
use super::is_extreme_lightness;
use bound::max_chroma_for_lh;
use color::{Color, Rgb, Xyz};
use coord::Coord;

/// A color in HSLuv.
///
/// # Example
///
/// ```
/// # use chromaluv::colors::{hsluv_to_rgb, Hsluv};
/// let navy = Hsluv { h: 250., s: 60., l: 40. };
/// assert_eq!(hsluv_to_rgb(navy).to_hex().unwrap().as_str(), "#415f8b");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsluv {
    /// The hue, in degrees in [0, 360). The same as the LCH hue.
    pub h: f64,
    /// The saturation, from 0 (gray) to 100 (the edge of the sRGB gamut for this hue and lightness).
    pub s: f64,
    /// The lightness, from 0 to 100. The same as the CIELUV lightness.
    pub l: f64,
}

impl Hsluv {
    /// Pure black.
    pub fn black() -> Hsluv {
        Hsluv {
            h: 0.,
            s: 0.,
            l: 0.,
        }
    }
    /// Converts to CIELCHuv. At lightness below 1e-8 or above 99.9999999 the chroma is 0 no matter
    /// the saturation.
    pub fn to_lch(&self) -> Lch {
        if is_extreme_lightness(self.l) {
            return Lch {
                l: self.l,
                c: 0.,
                h: self.h,
            };
        }
        let max = max_chroma_for_lh(self.l, self.h);
        Lch {
            l: self.l,
            c: max / 100. * self.s,
            h: self.h,
        }
    }
}

impl Color for Hsluv {
    fn from_xyz(xyz: Xyz) -> Hsluv {
        Lch::from_xyz(xyz).to_hsluv()
    }
    fn to_xyz(&self) -> Xyz {
        self.to_lch().to_xyz()
    }
}

impl From<Coord> for Hsluv {
    fn from(c: Coord) -> Hsluv {
        Hsluv {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<Hsluv> for Coord {
    fn from(hsluv: Hsluv) -> Coord {
        Coord::new(hsluv.h, hsluv.s, hsluv.l)
    }
}

/// Converts HSLuv to sRGB. For `h` in [0, 360) and `s`, `l` in [0, 100], every channel of the result
/// is in [0, 1] up to floating-point error.
pub fn hsluv_to_rgb(hsluv: Hsluv) -> Rgb {
    hsluv.to_lch().to_luv().to_xyz().to_rgb()
}

/// Converts sRGB to HSLuv.
pub fn rgb_to_hsluv(rgb: Rgb) -> Hsluv {
    rgb.to_xyz().to_luv().to_lch().to_hsluv()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use snapshot::hex_samples;
    use color::Hex;

    const RGB_RANGE_TOLERANCE: f64 = 0.000000001;

    #[test]
    fn test_known_colors() {
        let reference = hashmap! {
            "#ff0000" => Coord::new(12.177050630061162, 100.00000000000007, 53.23711559542937),
            "#00ff00" => Coord::new(127.7150129492431, 100.00000000000007, 87.73551910966),
            "#0000ff" => Coord::new(265.87432021817733, 100.00000000000003, 32.30087290398018),
            "#3c6e71" => Coord::new(198.1496561985153, 66.97091622062402, 43.21826935674005),
            "#ffcc00" => Coord::new(63.592693764869836, 100.00000000000016, 84.1983464973245),
        };
        for (hex, expected) in reference {
            let hsluv = rgb_to_hsluv(Hex::new(hex).to_rgb().unwrap());
            assert!(
                Coord::from(hsluv).approx_eq(&expected, 1e-9),
                "{}: {:?}",
                hex,
                hsluv
            );
        }
    }

    #[test]
    fn test_conversion_consistency() {
        for hex in hex_samples() {
            let rgb = Hex::new(hex.as_str()).to_rgb().unwrap();
            let xyz = rgb.to_xyz();
            let luv = xyz.to_luv();
            let lch = luv.to_lch();
            let hsluv = lch.to_hsluv();

            let to_lch = hsluv.to_lch();
            let to_luv = to_lch.to_luv();
            let to_xyz = to_luv.to_xyz();
            let to_rgb = to_xyz.to_rgb();

            let tol = RGB_RANGE_TOLERANCE;
            assert!(Coord::from(lch).approx_eq(&Coord::from(to_lch), tol), "{}", hex);
            assert!(Coord::from(luv).approx_eq(&Coord::from(to_luv), tol), "{}", hex);
            assert!(Coord::from(xyz).approx_eq(&Coord::from(to_xyz), tol), "{}", hex);
            assert!(Coord::from(rgb).approx_eq(&Coord::from(to_rgb), tol), "{}", hex);
            assert_eq!(to_rgb.to_hex().unwrap().as_str(), hex.as_str());
        }
    }

    #[test]
    fn test_rgb_range_tolerance() {
        for h in (0..=360).step_by(5) {
            for s in (0..=100).step_by(5) {
                for l in (0..=100).step_by(5) {
                    let hsluv = Hsluv {
                        h: h as f64,
                        s: s as f64,
                        l: l as f64,
                    };
                    let rgb = hsluv_to_rgb(hsluv);
                    for &channel in [rgb.r, rgb.g, rgb.b].iter() {
                        assert!(
                            channel > -RGB_RANGE_TOLERANCE && channel <= 1. + RGB_RANGE_TOLERANCE,
                            "HSLuv: {:?} -> RGB: {:?}",
                            hsluv,
                            rgb
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_achromatic_guard() {
        for &h in [0., 45., 359.].iter() {
            for &s in [0., 50., 100.].iter() {
                let black = Hsluv { h, s, l: 0. }.to_lch();
                assert_eq!(black, Lch { l: 0., c: 0., h });
                let white = Hsluv { h, s, l: 100. }.to_lch();
                assert_eq!(white, Lch { l: 100., c: 0., h });
            }
        }
        assert_eq!(hsluv_to_rgb(Hsluv::black()), Rgb { r: 0., g: 0., b: 0. });
    }

    #[test]
    fn test_full_saturation_touches_gamut() {
        // at s = 100 some channel sits on the edge of [0, 1]
        let rgb = hsluv_to_rgb(Hsluv {
            h: 30.,
            s: 100.,
            l: 60.,
        });
        let edge = [rgb.r, rgb.g, rgb.b]
            .iter()
            .any(|c| c.abs() <= 1e-9 || (c - 1.).abs() <= 1e-9);
        assert!(edge, "{:?}", rgb);
    }
}
