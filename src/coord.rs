//! This module contains a struct, [`Coord`](coord::Coord), that models the three channels of any color
//! as a point in 3D space. Every color type in this crate converts to and from a `Coord`, which is what
//! lets gradients and snapshots treat all of them the same way without knowing which space they are
//! in.

use float_cmp::ApproxEq;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be used as a sampling position in a
/// gradient. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space, holding the three channels of a color. `Coord` has three axes, denoted `x`,
/// `y`, and `z`. Any color that converts to and from a `Coord` matches its components with these axes
/// in the order of its fields: for example, `Hsluv` maps `h` to the x-axis, `s` to the y-axis, and `l`
/// to the z-axis.
///
/// # Example
/// ```
/// # use chromaluv::coord::Coord;
/// # use chromaluv::color::Rgb;
/// let coord: Coord = Rgb { r: 1., g: 0.5, b: 0. }.into();
/// assert_eq!(coord.to_array(), [1., 0.5, 0.]);
/// let back = Rgb::from(coord);
/// assert_eq!(back.g, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// Builds a point from its three axes.
    pub fn new(x: f64, y: f64, z: f64) -> Coord {
        Coord { x, y, z }
    }
    /// The axes as an array, in `x`, `y`, `z` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    /// Returns `true` if every axis of the two points differs by no more than `epsilon`.
    /// # Example
    /// ```
    /// # use chromaluv::coord::Coord;
    /// let a = Coord::new(0.1 + 0.2, 1., 2.);
    /// let b = Coord::new(0.3, 1., 2. + 1e-12);
    /// assert!(a.approx_eq(&b, 1e-9));
    /// assert!(!a.approx_eq(&Coord::new(0.3, 1.1, 2.), 1e-9));
    /// ```
    pub fn approx_eq(&self, other: &Coord, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (*a).approx_eq(*b, (epsilon, 0)))
    }
}

impl From<[f64; 3]> for Coord {
    fn from(arr: [f64; 3]) -> Coord {
        Coord {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
