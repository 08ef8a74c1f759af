//! This file defines the [`Color`] trait, the two base color types that everything else is defined
//! in terms of ([`Xyz`] and [`Rgb`]), and the hexadecimal encoding of sRGB colors.
//!
//! Every color space converts to and from CIE 1931 XYZ under the D65 illuminant, with Y normalized so
//! that reference white has Y = 1. That makes XYZ the hub of all conversions: `a.convert::<T>()` is
//! always `T::from_xyz(a.to_xyz())`.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use colors::Luv;
use consts::{M, M_INV};
use coord::Coord;
use math::dot_product;
use regex::Regex;

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space.
///
/// # Example
/// ```
/// # use chromaluv::prelude::*;
/// # use chromaluv::colors::Hsluv;
/// let orange = Rgb { r: 1., g: 0.5, b: 0. };
/// let hsluv: Hsluv = orange.convert();
/// let back: Rgb = hsluv.convert();
/// assert!((back.g - 0.5).abs() <= 1e-9);
/// ```
pub trait Color: Sized {
    /// Converts from an XYZ color into this color space.
    fn from_xyz(xyz: Xyz) -> Self;
    /// Converts this color into XYZ.
    fn to_xyz(&self) -> Xyz;
    /// Converts this color into any other color space, going through XYZ.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

/// A point in the CIE 1931 XYZ color space, under the D65 illuminant. Values are scaled so that the
/// reference white has `y = 1`: `y` is then exactly the relative luminance of the color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    /// The X tristimulus value. Non-negative for real light.
    pub x: f64,
    /// The Y tristimulus value: relative luminance, from 0 for black to 1 for white.
    pub y: f64,
    /// The Z tristimulus value. Non-negative for real light.
    pub z: f64,
}

// sRGB companding, IEC 61966-2-1
fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1. / 2.4) - 0.055
    }
}

pub(crate) fn to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

impl Xyz {
    /// Converts to gamma-encoded sRGB. Colors outside of the sRGB gamut give channels outside of
    /// [0, 1]: nothing is clamped.
    pub fn to_rgb(&self) -> Rgb {
        let xyz = [self.x, self.y, self.z];
        Rgb {
            r: from_linear(dot_product(&M[0], &xyz)),
            g: from_linear(dot_product(&M[1], &xyz)),
            b: from_linear(dot_product(&M[2], &xyz)),
        }
    }
    /// Converts to CIELUV.
    pub fn to_luv(&self) -> Luv {
        Luv::from_xyz(*self)
    }
}

impl Color for Xyz {
    fn from_xyz(xyz: Xyz) -> Xyz {
        xyz
    }
    fn to_xyz(&self) -> Xyz {
        *self
    }
}

impl From<Coord> for Xyz {
    fn from(c: Coord) -> Xyz {
        Xyz {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<Xyz> for Coord {
    fn from(xyz: Xyz) -> Coord {
        Coord::new(xyz.x, xyz.y, xyz.z)
    }
}

/// A color in the sRGB color space, with gamma-encoded channels. Colors that come out of a
/// conversion from HSLuv or HPLuv always have every channel in [0, 1] (up to floating-point error),
/// but intermediate results from other spaces can fall outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel, from 0 to 1.
    pub r: f64,
    /// The green channel, from 0 to 1.
    pub g: f64,
    /// The blue channel, from 0 to 1.
    pub b: f64,
}

// rounds to 6 decimal places first, so that values a hair outside of [0, 1] from floating-point error
// still encode
fn quantize_channel(channel: f64) -> Result<u8, ColorError> {
    let ch = (channel * 1e6).round() / 1e6;
    if !(0.0..=1.0).contains(&ch) {
        Err(ColorError::ChannelOutOfRange(ch))
    } else {
        Ok((ch * 255.).round() as u8)
    }
}

impl Rgb {
    /// Builds a color from 8-bit channels, where 255 maps to 1.
    pub fn from_rgb8(rgb: [u8; 3]) -> Rgb {
        Rgb {
            r: f64::from(rgb[0]) / 255.,
            g: f64::from(rgb[1]) / 255.,
            b: f64::from(rgb[2]) / 255.,
        }
    }
    /// Rounds each channel to the nearest of 256 levels.
    /// # Errors
    /// Returns [`ColorError::ChannelOutOfRange`] if a channel is outside of [0, 1] after rounding to
    /// six decimal places, or is NaN.
    pub fn to_rgb8(&self) -> Result<[u8; 3], ColorError> {
        Ok([
            quantize_channel(self.r)?,
            quantize_channel(self.g)?,
            quantize_channel(self.b)?,
        ])
    }
    /// Encodes this color as a lowercase `#rrggbb` hex string.
    /// # Example
    /// ```
    /// # use chromaluv::color::Rgb;
    /// let rgb = Rgb { r: 1., g: 0., b: 0.5 };
    /// assert_eq!(rgb.to_hex().unwrap().as_str(), "#ff0080");
    /// assert!(Rgb { r: 1.2, g: 0., b: 0. }.to_hex().is_err());
    /// ```
    /// # Errors
    /// The same as [`Rgb::to_rgb8`].
    pub fn to_hex(&self) -> Result<Hex, ColorError> {
        let [r, g, b] = self.to_rgb8()?;
        Ok(Hex::new(format!("#{:02x}{:02x}{:02x}", r, g, b)))
    }
}

impl Color for Rgb {
    fn from_xyz(xyz: Xyz) -> Rgb {
        xyz.to_rgb()
    }
    fn to_xyz(&self) -> Xyz {
        let lin = [to_linear(self.r), to_linear(self.g), to_linear(self.b)];
        Xyz {
            x: dot_product(&M_INV[0], &lin),
            y: dot_product(&M_INV[1], &lin),
            z: dot_product(&M_INV[2], &lin),
        }
    }
}

impl From<Coord> for Rgb {
    fn from(c: Coord) -> Rgb {
        Rgb {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<Rgb> for Coord {
    fn from(rgb: Rgb) -> Coord {
        Coord::new(rgb.r, rgb.g, rgb.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Rgb, ColorError> {
        Hex::new(s).to_rgb()
    }
}

/// An error that occurs when encoding or decoding a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The given string is not six hexadecimal digits with an optional leading `#`. Holds the input.
    InvalidEncoding(String),
    /// An RGB channel lies outside of [0, 1] and can't be encoded. Holds the channel value.
    ChannelOutOfRange(f64),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidEncoding(ref s) => write!(f, "invalid hex color {:?}", s),
            ColorError::ChannelOutOfRange(ch) => write!(f, "RGB channel {} outside of [0, 1]", ch),
        }
    }
}

impl Error for ColorError {}

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#?([0-9a-fA-F]{6})$").unwrap();
}

/// A color written as six hexadecimal digits, `#rrggbb`. A `Hex` built with [`Hex::new`] is not
/// checked until it is decoded; parsing one with [`str::parse`] checks it immediately.
///
/// # Example
/// ```
/// # use chromaluv::color::{Hex, Rgb};
/// let red = Hex::new("#FF0000").to_rgb().unwrap();
/// assert_eq!(red, Rgb { r: 1., g: 0., b: 0. });
/// assert!("#12345".parse::<Hex>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    string: String,
}

impl Hex {
    /// Wraps a string without validating it.
    pub fn new<S: Into<String>>(string: S) -> Hex {
        Hex {
            string: string.into(),
        }
    }
    /// The string this was built from.
    pub fn as_str(&self) -> &str {
        &self.string
    }
    /// Decodes into an RGB color, each channel being a multiple of 1/255. The leading `#` is optional
    /// and digits may be either case.
    /// # Errors
    /// Returns [`ColorError::InvalidEncoding`] if the string isn't exactly six hex digits after the
    /// optional `#`.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        let invalid = || ColorError::InvalidEncoding(self.string.clone());
        let digits = match HEX_RE.captures(&self.string) {
            Some(caps) => caps.get(1).ok_or_else(invalid)?.as_str(),
            None => {
                debug!("rejecting hex color {:?}", self.string);
                return Err(invalid());
            }
        };
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Rgb::from_rgb8([
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ]))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.string)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Hex, ColorError> {
        let hex = Hex::new(s);
        hex.to_rgb()?;
        Ok(hex)
    }
}
