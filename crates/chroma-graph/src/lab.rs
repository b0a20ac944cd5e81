//! Conversions out of CIELab.
//!
//! CIELch is the polar form and is reached directly; everything else routes
//! through XYZ under the configured reference white.

use chroma_core::{ChromaResult, WhitePoint};

use crate::xyz::{self, CIE_EPSILON};

/// Inverse CIE nonlinearity: cube above the threshold, linear below.
#[inline]
pub(crate) fn cie_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// CIELab to XYZ under the given reference white.
pub fn to_xyz(lab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    let [l, a, b] = lab;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [
        white.x * cie_f_inv(fx),
        white.y * cie_f_inv(fy),
        white.z * cie_f_inv(fz),
    ]
}

/// CIELab to CIELch.
///
/// C is the Euclidean norm of (a, b); h is `atan2(b, a)` in degrees,
/// wrapped to [0, 360). The achromatic axis (a = b = 0) gets h = 0.
pub fn to_lch(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;

    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }

    [l, c, h]
}

/// CIELab to HEX, via XYZ and RGB.
pub fn to_hex(lab: [f64; 3], white: &WhitePoint) -> String {
    xyz::to_hex(to_xyz(lab, white))
}

/// CIELab to RGB, via XYZ.
pub fn to_rgb(lab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_rgb(to_xyz(lab, white))
}

/// CIELab to HSL, via XYZ and RGB.
pub fn to_hsl(lab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_hsl(to_xyz(lab, white))
}

/// CIELab to HSV, via XYZ and RGB.
pub fn to_hsv(lab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_hsv(to_xyz(lab, white))
}

/// CIELab to CMY, via XYZ and RGB.
pub fn to_cmy(lab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_cmy(to_xyz(lab, white))
}

/// CIELab to CMYK, via XYZ, RGB, and CMY.
pub fn to_cmyk(lab: [f64; 3], white: &WhitePoint) -> [f64; 4] {
    xyz::to_cmyk(to_xyz(lab, white))
}

/// CIELab to Yxy, via XYZ. Fails for black.
pub fn to_yxy(lab: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(lab, white))
}

/// CIELab to Hunter Lab, via XYZ. Fails for black.
pub fn to_hunter_lab(lab: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(lab, white))
}

/// CIELab to CIELuv, via XYZ. Fails for black.
pub fn to_luv(lab: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(lab, white), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xyz_roundtrip() {
        let wp = WhitePoint::default();
        let lab_in = [53.24, 80.09, 67.20];
        let back = xyz::to_lab(to_xyz(lab_in, &wp), &wp);
        for i in 0..3 {
            assert_relative_eq!(back[i], lab_in[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lch_quadrants() {
        // first quadrant
        let [_, c, h] = to_lch([50.0, 30.0, 30.0]);
        assert_relative_eq!(c, 30.0 * std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(h, 45.0, epsilon = 1e-9);

        // negative b wraps into [180, 360)
        let [_, _, h] = to_lch([50.0, 0.0, -30.0]);
        assert_relative_eq!(h, 270.0, epsilon = 1e-9);

        let [_, _, h] = to_lch([50.0, -30.0, 0.0]);
        assert_relative_eq!(h, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lch_achromatic_axis() {
        let [l, c, h] = to_lch([42.0, 0.0, 0.0]);
        assert_eq!(l, 42.0);
        assert_eq!(c, 0.0);
        assert_eq!(h, 0.0);
    }
}
