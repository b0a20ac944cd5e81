//! Conversions out of CMY.
//!
//! CMY is the complement of RGB on [0, 1]; CMYK is reached directly, the
//! rest routes through RGB.

use chroma_core::{ChromaResult, WhitePoint};

use crate::{rgb, xyz};

/// CMY to RGB.
pub fn to_rgb(cmy: [f64; 3]) -> [f64; 3] {
    cmy.map(|v| (1.0 - v) * 255.0)
}

/// CMY to CMYK.
///
/// K is the minimum component. Pure black (K = 1) zeroes the chromatic
/// channels instead of rescaling by 1 − K, which would divide by zero.
pub fn to_cmyk(cmy: [f64; 3]) -> [f64; 4] {
    let [c, m, y] = cmy;
    let k = c.min(m).min(y);

    if k == 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    [
        (c - k) / (1.0 - k),
        (m - k) / (1.0 - k),
        (y - k) / (1.0 - k),
        k,
    ]
}

/// CMY to HEX, via RGB.
pub fn to_hex(cmy: [f64; 3]) -> String {
    rgb::to_hex(to_rgb(cmy))
}

/// CMY to HSL, via RGB.
pub fn to_hsl(cmy: [f64; 3]) -> [f64; 3] {
    rgb::to_hsl(to_rgb(cmy))
}

/// CMY to HSV, via RGB.
pub fn to_hsv(cmy: [f64; 3]) -> [f64; 3] {
    rgb::to_hsv(to_rgb(cmy))
}

/// CMY to XYZ, via RGB.
pub fn to_xyz(cmy: [f64; 3]) -> [f64; 3] {
    rgb::to_xyz(to_rgb(cmy))
}

/// CMY to Yxy, via RGB and XYZ. Fails for black.
pub fn to_yxy(cmy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(cmy))
}

/// CMY to Hunter Lab, via RGB and XYZ. Fails for black.
pub fn to_hunter_lab(cmy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(cmy))
}

/// CMY to CIELab, via RGB and XYZ.
pub fn to_lab(cmy: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(cmy), white)
}

/// CMY to CIELch, via RGB, XYZ, and CIELab.
pub fn to_lch(cmy: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(cmy), white)
}

/// CMY to CIELuv, via RGB and XYZ. Fails for black.
pub fn to_luv(cmy: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(cmy), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complement_of_rgb() {
        assert_eq!(to_rgb([0.0, 0.0, 0.0]), [255.0, 255.0, 255.0]);
        assert_eq!(to_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pure_black_cmyk() {
        // white in CMY is (0,0,0); full ink is (1,1,1) -> K = 1, C = M = Y = 0
        assert_eq!(to_cmyk([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cmyk_rescaling() {
        let [c, m, y, k] = to_cmyk([0.6, 0.2, 0.4]);
        assert_relative_eq!(k, 0.2, epsilon = 1e-12);
        assert_relative_eq!(c, 0.5, epsilon = 1e-12);
        assert_relative_eq!(m, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_roundtrip() {
        let cmy_in = [0.1, 0.5, 0.9];
        let back = rgb::to_cmy(to_rgb(cmy_in));
        for i in 0..3 {
            assert_relative_eq!(back[i], cmy_in[i], epsilon = 1e-12);
        }
    }
}
