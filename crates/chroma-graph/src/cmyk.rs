//! Conversions out of CMYK. Everything routes through CMY and RGB.

use chroma_core::{ChromaResult, WhitePoint};

use crate::{cmy, rgb, xyz};

/// CMYK to CMY: `C' = C(1 − K) + K`, exact inverse of the K extraction.
pub fn to_cmy(cmyk: [f64; 4]) -> [f64; 3] {
    let [c, m, y, k] = cmyk;
    [
        c * (1.0 - k) + k,
        m * (1.0 - k) + k,
        y * (1.0 - k) + k,
    ]
}

/// CMYK to RGB, via CMY.
pub fn to_rgb(cmyk: [f64; 4]) -> [f64; 3] {
    cmy::to_rgb(to_cmy(cmyk))
}

/// CMYK to HEX, via CMY and RGB.
pub fn to_hex(cmyk: [f64; 4]) -> String {
    rgb::to_hex(to_rgb(cmyk))
}

/// CMYK to HSL, via CMY and RGB.
pub fn to_hsl(cmyk: [f64; 4]) -> [f64; 3] {
    rgb::to_hsl(to_rgb(cmyk))
}

/// CMYK to HSV, via CMY and RGB.
pub fn to_hsv(cmyk: [f64; 4]) -> [f64; 3] {
    rgb::to_hsv(to_rgb(cmyk))
}

/// CMYK to XYZ, via CMY and RGB.
pub fn to_xyz(cmyk: [f64; 4]) -> [f64; 3] {
    rgb::to_xyz(to_rgb(cmyk))
}

/// CMYK to Yxy, via RGB and XYZ. Fails for black.
pub fn to_yxy(cmyk: [f64; 4]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(cmyk))
}

/// CMYK to Hunter Lab, via RGB and XYZ. Fails for black.
pub fn to_hunter_lab(cmyk: [f64; 4]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(cmyk))
}

/// CMYK to CIELab, via RGB and XYZ.
pub fn to_lab(cmyk: [f64; 4], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(cmyk), white)
}

/// CMYK to CIELch, via RGB, XYZ, and CIELab.
pub fn to_lch(cmyk: [f64; 4], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(cmyk), white)
}

/// CMYK to CIELuv, via RGB and XYZ. Fails for black.
pub fn to_luv(cmyk: [f64; 4], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(cmyk), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_black_reconstruction() {
        assert_eq!(to_cmy([0.0, 0.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);
        assert_eq!(to_rgb([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cmy_roundtrip() {
        let cmy_in = [0.6, 0.2, 0.4];
        let back = to_cmy(cmy::to_cmyk(cmy_in));
        for i in 0..3 {
            assert_relative_eq!(back[i], cmy_in[i], epsilon = 1e-12);
        }
    }
}
