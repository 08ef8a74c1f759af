//! This module describes the edges of the sRGB gamut as seen from CIELUV. At a fixed lightness, the
//! set of (u, v) pairs that stay inside sRGB is a convex polygon bounded by six lines: one for each of
//! the R, G, and B channels hitting 0 and one for each hitting 1. Everything that HSLuv and HPLuv do
//! to turn chroma into saturation comes down to measuring distances to those lines.

use consts::{EPSILON, KAPPA, M};
use math::{distance_from_pole, intersect_line, length_of_ray_until_intersect, Line};

/// For a given CIELUV lightness, returns the six lines in the u-v plane that bound the sRGB gamut,
/// ordered as (R = 0, R = 1, G = 0, G = 1, B = 0, B = 1). Stepping over any of them pushes a color out
/// of the gamut.
///
/// # Example
/// ```
/// # use chromaluv::bound::get_bounds;
/// let bounds = get_bounds(50.);
/// assert_eq!(bounds.len(), 6);
/// assert!(bounds.iter().all(|line| line.slope.is_finite() && line.intercept.is_finite()));
/// ```
pub fn get_bounds(lightness: f64) -> [Line; 6] {
    // Y for this lightness, the inverse of the lightness function
    let sub1 = (lightness + 16.).powi(3) / 1560896.;
    let sub2 = if sub1 > EPSILON {
        sub1
    } else {
        lightness / KAPPA
    };

    let mut bounds = [Line {
        slope: 0.,
        intercept: 0.,
    }; 6];
    for (i, row) in M.iter().enumerate() {
        let (m1, m2, m3) = (row[0], row[1], row[2]);
        for (j, &target) in [0f64, 1f64].iter().enumerate() {
            let top1 = (284517. * m1 - 94839. * m3) * sub2;
            let top2 = (838422. * m3 + 769860. * m2 + 731718. * m1) * lightness * sub2
                - 769860. * target * lightness;
            let bottom = (632260. * m3 - 126452. * m2) * sub2 + 126452. * target;
            bounds[2 * i + j] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    bounds
}

/// The largest chroma a color with the given lightness and hue (in degrees) can have while staying in
/// sRGB: the distance along the hue direction to the nearest gamut edge. This is what 100% saturation
/// means in HSLuv.
pub fn max_chroma_for_lh(lightness: f64, hue: f64) -> f64 {
    let hrad = hue / 360. * 2. * ::std::f64::consts::PI;
    get_bounds(lightness)
        .iter()
        .filter_map(|line| length_of_ray_until_intersect(hrad, line))
        .fold(f64::MAX, f64::min)
}

/// The largest chroma that stays in sRGB for every hue at the given lightness: the radius of the
/// biggest circle around the gray axis that fits inside the gamut polygon. This is what 100%
/// saturation means in HPLuv.
pub fn max_safe_chroma_for_l(lightness: f64) -> f64 {
    get_bounds(lightness)
        .iter()
        .map(|line| {
            if line.slope == 0. {
                // the foot of the perpendicular is on the vertical axis
                line.intercept.abs()
            } else {
                let perpendicular = Line {
                    slope: -1. / line.slope,
                    intercept: 0.,
                };
                let x = intersect_line(line, &perpendicular);
                distance_from_pole(x, line.intercept + x * line.slope)
            }
        })
        .fold(f64::MAX, f64::min)
}
