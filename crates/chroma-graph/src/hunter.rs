//! Conversions out of Hunter Lab.
//!
//! The inverse transform recovers Y as (L/10)², so L values below zero are
//! folded onto the same luminance as their positive mirror.

use chroma_core::{ChromaResult, WhitePoint};

use crate::xyz;

/// Hunter Lab to XYZ.
///
/// Exact inverse of [`crate::xyz::to_hunter_lab`] wherever that edge is
/// defined (Y > 0).
pub fn to_xyz(hlab: [f64; 3]) -> [f64; 3] {
    let [hl, ha, hb] = hlab;

    let var_x = ha / 17.5 * hl / 10.0;
    let var_y = hl / 10.0;
    let var_z = hb / 7.0 * hl / 10.0;

    let y = var_y * var_y;
    let x = (var_x + y) / 1.02;
    let z = -(var_z - y) / 0.847;

    [x, y, z]
}

/// Hunter Lab to HEX, via XYZ and RGB.
pub fn to_hex(hlab: [f64; 3]) -> String {
    xyz::to_hex(to_xyz(hlab))
}

/// Hunter Lab to RGB, via XYZ.
pub fn to_rgb(hlab: [f64; 3]) -> [f64; 3] {
    xyz::to_rgb(to_xyz(hlab))
}

/// Hunter Lab to HSL, via XYZ and RGB.
pub fn to_hsl(hlab: [f64; 3]) -> [f64; 3] {
    xyz::to_hsl(to_xyz(hlab))
}

/// Hunter Lab to HSV, via XYZ and RGB.
pub fn to_hsv(hlab: [f64; 3]) -> [f64; 3] {
    xyz::to_hsv(to_xyz(hlab))
}

/// Hunter Lab to CMY, via XYZ and RGB.
pub fn to_cmy(hlab: [f64; 3]) -> [f64; 3] {
    xyz::to_cmy(to_xyz(hlab))
}

/// Hunter Lab to CMYK, via XYZ, RGB, and CMY.
pub fn to_cmyk(hlab: [f64; 3]) -> [f64; 4] {
    xyz::to_cmyk(to_xyz(hlab))
}

/// Hunter Lab to Yxy, via XYZ. Fails for black.
pub fn to_yxy(hlab: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(hlab))
}

/// Hunter Lab to CIELab, via XYZ.
pub fn to_lab(hlab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(hlab), white)
}

/// Hunter Lab to CIELch, via XYZ and CIELab.
pub fn to_lch(hlab: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(hlab), white)
}

/// Hunter Lab to CIELuv, via XYZ. Fails for black.
pub fn to_luv(hlab: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(hlab), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xyz_roundtrip() {
        let xyz_in = [41.24, 21.26, 1.93];
        let back = to_xyz(xyz::to_hunter_lab(xyz_in).unwrap());
        for i in 0..3 {
            assert_relative_eq!(back[i], xyz_in[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_known_reference_pair() {
        // Y = (L/10)^2, X = (a/17.5 * L/10 + Y)/1.02, Z = -(b/7 * L/10 - Y)/0.847
        let [x, y, z] = to_xyz([50.0, 10.0, -20.0]);
        assert_relative_eq!(y, 25.0, epsilon = 1e-12);
        assert_relative_eq!(x, (10.0 / 17.5 * 5.0 + 25.0) / 1.02, epsilon = 1e-12);
        assert_relative_eq!(z, -(-20.0 / 7.0 * 5.0 - 25.0) / 0.847, epsilon = 1e-12);
    }

    #[test]
    fn test_white_point_fixed_point() {
        // L of a perfect diffuser is 100, recovering Y = 100
        let [_, y, _] = to_xyz([100.0, 0.0, 0.0]);
        assert_relative_eq!(y, 100.0, epsilon = 1e-12);
    }
}
