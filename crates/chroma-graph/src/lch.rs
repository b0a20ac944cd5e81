//! Conversions out of CIELch. Everything goes through the CIELab rectangular
//! form first.

use chroma_core::{ChromaResult, WhitePoint};

use crate::{lab, xyz};

/// CIELch to CIELab: `a = C cos(h°)`, `b = C sin(h°)`.
pub fn to_lab(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let h = h.to_radians();
    [l, h.cos() * c, h.sin() * c]
}

/// CIELch to XYZ, via CIELab.
pub fn to_xyz(lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_xyz(to_lab(lch), white)
}

/// CIELch to HEX, via CIELab, XYZ, and RGB.
pub fn to_hex(lch: [f64; 3], white: &WhitePoint) -> String {
    lab::to_hex(to_lab(lch), white)
}

/// CIELch to RGB, via CIELab and XYZ.
pub fn to_rgb(lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_rgb(to_lab(lch), white)
}

/// CIELch to HSL, via CIELab, XYZ, and RGB.
pub fn to_hsl(lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_hsl(to_lab(lch), white)
}

/// CIELch to HSV, via CIELab, XYZ, and RGB.
pub fn to_hsv(lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_hsv(to_lab(lch), white)
}

/// CIELch to CMY, via CIELab, XYZ, and RGB.
pub fn to_cmy(lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_cmy(to_lab(lch), white)
}

/// CIELch to CMYK, via CIELab, XYZ, RGB, and CMY.
pub fn to_cmyk(lch: [f64; 3], white: &WhitePoint) -> [f64; 4] {
    lab::to_cmyk(to_lab(lch), white)
}

/// CIELch to Yxy, via CIELab and XYZ. Fails for black.
pub fn to_yxy(lch: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(lch, white))
}

/// CIELch to Hunter Lab, via CIELab and XYZ. Fails for black.
pub fn to_hunter_lab(lch: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(lch, white))
}

/// CIELch to CIELuv, via CIELab and XYZ. Fails for black.
pub fn to_luv(lch: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(lch, white), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lab_roundtrip() {
        let lab_in = [60.0, -35.0, 12.0];
        let back = to_lab(lab::to_lch(lab_in));
        for i in 0..3 {
            assert_relative_eq!(back[i], lab_in[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cardinal_hues() {
        let [_, a, b] = to_lab([50.0, 40.0, 0.0]);
        assert_relative_eq!(a, 40.0, epsilon = 1e-9);
        assert_relative_eq!(b, 0.0, epsilon = 1e-9);

        let [_, a, b] = to_lab([50.0, 40.0, 90.0]);
        assert_relative_eq!(a, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b, 40.0, epsilon = 1e-9);
    }
}
