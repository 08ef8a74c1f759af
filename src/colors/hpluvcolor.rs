//! This module implements HPLuv, the pastel sibling of HSLuv. Saturation is measured against the
//! chroma that every hue can reach at a given lightness instead of the chroma this particular hue can
//! reach, so equal saturation means equal chroma across hues. The price is that HPLuv with `s` in
//! [0, 100] only covers the pastel core of sRGB, and saturated sRGB colors have `s` above 100.

use super::cielchuvcolor::Lch;
use super::is_extreme_lightness;
use bound::max_safe_chroma_for_l;
use color::{Color, Rgb, Xyz};
use coord::Coord;

/// A color in HPLuv.
///
/// # Example
///
/// ```
/// # use chromaluv::colors::{hpluv_to_rgb, Hpluv};
/// let slate = Hpluv { h: 250., s: 60., l: 40. };
/// assert_eq!(hpluv_to_rgb(slate).to_hex().unwrap().as_str(), "#545f73");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hpluv {
    /// The hue, in degrees in [0, 360). The same as the LCH hue.
    pub h: f64,
    /// The saturation, as a percentage of the chroma that stays in sRGB for every hue at this
    /// lightness.
    pub s: f64,
    /// The lightness, from 0 to 100. The same as the CIELUV lightness.
    pub l: f64,
}

impl Hpluv {
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
        let max = max_safe_chroma_for_l(self.l);
        Lch {
            l: self.l,
            c: max / 100. * self.s,
            h: self.h,
        }
    }
}

impl Color for Hpluv {
    fn from_xyz(xyz: Xyz) -> Hpluv {
        Lch::from_xyz(xyz).to_hpluv()
    }
    fn to_xyz(&self) -> Xyz {
        self.to_lch().to_xyz()
    }
}

impl From<Coord> for Hpluv {
    fn from(c: Coord) -> Hpluv {
        Hpluv {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<Hpluv> for Coord {
    fn from(hpluv: Hpluv) -> Coord {
        Coord::new(hpluv.h, hpluv.s, hpluv.l)
    }
}

/// Converts HPLuv to sRGB. For `h` in [0, 360) and `s`, `l` in [0, 100], every channel of the result
/// is in [0, 1] up to floating-point error.
pub fn hpluv_to_rgb(hpluv: Hpluv) -> Rgb {
    hpluv.to_lch().to_luv().to_xyz().to_rgb()
}

/// Converts sRGB to HPLuv.
pub fn rgb_to_hpluv(rgb: Rgb) -> Hpluv {
    rgb.to_xyz().to_luv().to_lch().to_hpluv()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::Hex;
    use snapshot::hex_samples;

    #[test]
    fn test_saturated_colors_exceed_100() {
        let red = rgb_to_hpluv(Rgb {
            r: 1.,
            g: 0.,
            b: 0.,
        });
        assert!((red.s - 426.74678918312827).abs() <= 1e-9);
        assert!((red.h - 12.177050630061162).abs() <= 1e-9);
        // and still come back unchanged
        let back = hpluv_to_rgb(red);
        assert!(Coord::from(back).approx_eq(&Coord::new(1., 0., 0.), 1e-9));
    }

    #[test]
    fn test_round_trip() {
        for hex in hex_samples().iter().step_by(7) {
            let rgb = Hex::new(hex.as_str()).to_rgb().unwrap();
            let back = hpluv_to_rgb(rgb_to_hpluv(rgb));
            assert!(Coord::from(rgb).approx_eq(&Coord::from(back), 1e-9), "{}", hex);
            assert_eq!(back.to_hex().unwrap().as_str(), hex.as_str());
        }
    }

    #[test]
    fn test_rgb_range_tolerance() {
        for h in (0..=360).step_by(5) {
            for s in (0..=100).step_by(5) {
                for l in (0..=100).step_by(5) {
                    let hpluv = Hpluv {
                        h: h as f64,
                        s: s as f64,
                        l: l as f64,
                    };
                    let rgb = hpluv_to_rgb(hpluv);
                    for &channel in [rgb.r, rgb.g, rgb.b].iter() {
                        assert!(
                            channel > -1e-9 && channel <= 1. + 1e-9,
                            "HPLuv: {:?} -> RGB: {:?}",
                            hpluv,
                            rgb
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_hue_independent_chroma() {
        // same s and l means the same chroma whatever the hue
        let c1 = Hpluv { h: 10., s: 80., l: 55. }.to_lch().c;
        let c2 = Hpluv { h: 200., s: 80., l: 55. }.to_lch().c;
        assert!((c1 - c2).abs() <= 1e-12);
    }

    #[test]
    fn test_extreme_lightness_keeps_lightness() {
        let white = Hpluv { h: 90., s: 100., l: 100. }.to_lch();
        assert_eq!(white, Lch { l: 100., c: 0., h: 90. });
        let black = Hpluv { h: 90., s: 100., l: 0. }.to_lch();
        assert_eq!(black, Lch { l: 0., c: 0., h: 90. });
    }
}
