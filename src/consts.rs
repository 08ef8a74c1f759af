//! This file provides the fixed constants behind every conversion: the sRGB matrices, the D65 reference
//! white in CIE 1976 u'v' coordinates, and the CIE LUV lightness constants. None of these are computed
//! at runtime. The matrices are written out to full double precision because the gamut boundary
//! solver and the round trip through XYZ both depend on them agreeing with each other exactly.

/// XYZ to linear sRGB, one row per output channel (R, G, B).
pub const M: [[f64; 3]; 3] = [
    [3.2409699419045214, -1.5373831775700935, -0.49861076029300328],
    [-0.96924363628087983, 1.8759675015077207, 0.041555057407175613],
    [0.055630079696993609, -0.20397695888897657, 1.0569715142428786],
];

/// Linear sRGB to XYZ, one row per output channel (X, Y, Z).
pub const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595948, 0.35758433938387796, 0.18048078840183429],
    [0.21263900587151036, 0.71516867876775593, 0.072192315360733715],
    [0.019330818715591851, 0.11919477979462599, 0.95053215224966058],
];

/// u' chromaticity of the D65 white point.
pub const REF_U: f64 = 0.19783000664283681;
/// v' chromaticity of the D65 white point.
pub const REF_V: f64 = 0.468319994938791;

/// CIE LUV kappa, (29/3)^3.
pub const KAPPA: f64 = 903.2962962962963;
/// CIE LUV epsilon, (6/29)^3.
pub const EPSILON: f64 = 0.0088564516790356308;

// lightness outside of these is treated as pure black or white: the gamut solver divides by values
// that vanish there
pub const L_MIN: f64 = 0.00000001;
pub const L_MAX: f64 = 99.9999999;

/// Chroma below this is gray, and hue is reported as 0.
pub const GRAY_CHROMA: f64 = 0.00000001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverse() {
        for i in 0..3 {
            for j in 0..3 {
                let cell: f64 = (0..3).map(|k| M[i][k] * M_INV[k][j]).sum();
                let expected = if i == j { 1. } else { 0. };
                assert!((cell - expected).abs() <= 1e-12);
            }
        }
    }

    #[test]
    fn test_white_point_luminance() {
        // D65 white in linear sRGB is (1, 1, 1), which needs to land on Y = 1
        let y: f64 = M_INV[1].iter().sum();
        assert!((y - 1.).abs() <= 1e-12);
    }
}
