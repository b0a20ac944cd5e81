//! Conversions out of Yxy.
//!
//! The XYZ edge divides by the y chromaticity, so every function here is
//! fallible: y = 0 is outside the formula's domain.

use chroma_core::{ChromaError, ChromaResult, WhitePoint};

use crate::xyz;

/// Yxy to XYZ.
///
/// # Errors
///
/// `NumericDomain` when y = 0.
pub fn to_xyz(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    let [big_y, x, y] = yxy;

    if y == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "Yxy -> XYZ",
            detail: "y chromaticity is zero",
        });
    }

    Ok([x * (big_y / y), big_y, (1.0 - x - y) * (big_y / y)])
}

/// Yxy to RGB, via XYZ.
pub fn to_rgb(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_rgb(to_xyz(yxy)?))
}

/// Yxy to HEX, via XYZ and RGB.
pub fn to_hex(yxy: [f64; 3]) -> ChromaResult<String> {
    Ok(xyz::to_hex(to_xyz(yxy)?))
}

/// Yxy to HSL, via XYZ and RGB.
pub fn to_hsl(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_hsl(to_xyz(yxy)?))
}

/// Yxy to HSV, via XYZ and RGB.
pub fn to_hsv(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_hsv(to_xyz(yxy)?))
}

/// Yxy to CMY, via XYZ and RGB.
pub fn to_cmy(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_cmy(to_xyz(yxy)?))
}

/// Yxy to CMYK, via XYZ, RGB, and CMY.
pub fn to_cmyk(yxy: [f64; 3]) -> ChromaResult<[f64; 4]> {
    Ok(xyz::to_cmyk(to_xyz(yxy)?))
}

/// Yxy to Hunter Lab, via XYZ.
pub fn to_hunter_lab(yxy: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(yxy)?)
}

/// Yxy to CIELab, via XYZ.
pub fn to_lab(yxy: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lab(to_xyz(yxy)?, white))
}

/// Yxy to CIELch, via XYZ and CIELab.
pub fn to_lch(yxy: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lch(to_xyz(yxy)?, white))
}

/// Yxy to CIELuv, via XYZ.
pub fn to_luv(yxy: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(yxy)?, white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xyz_roundtrip() {
        let xyz_in = [41.24, 21.26, 1.93];
        let back = to_xyz(xyz::to_yxy(xyz_in).unwrap()).unwrap();
        for i in 0..3 {
            assert_relative_eq!(back[i], xyz_in[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_y_fails() {
        assert!(matches!(
            to_xyz([50.0, 0.3, 0.0]),
            Err(ChromaError::NumericDomain { .. })
        ));
    }
}
