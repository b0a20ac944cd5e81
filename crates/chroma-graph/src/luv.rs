//! Conversions out of CIELuv.
//!
//! The XYZ edge divides by 13L, so every function here is fallible: L = 0
//! is outside the formula's domain.

use chroma_core::{ChromaError, ChromaResult, WhitePoint};

use crate::{lab, xyz};

/// CIELuv to XYZ under the given reference white.
///
/// # Errors
///
/// `NumericDomain` when L = 0, or when the recovered v′ chromaticity is zero.
pub fn to_xyz(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    let [l, u, v] = luv;

    if l == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "CIELuv -> XYZ",
            detail: "L is zero",
        });
    }

    let u_prime = u / (13.0 * l) + white.u_prime();
    let v_prime = v / (13.0 * l) + white.v_prime();

    if v_prime == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "CIELuv -> XYZ",
            detail: "recovered v' chromaticity is zero",
        });
    }

    let y = lab::cie_f_inv((l + 16.0) / 116.0) * 100.0;
    let x = -(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime);
    let z = (9.0 * y - (15.0 * v_prime * y) - (v_prime * x)) / (3.0 * v_prime);

    Ok([x, y, z])
}

/// CIELuv to HEX, via XYZ and RGB.
pub fn to_hex(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<String> {
    Ok(xyz::to_hex(to_xyz(luv, white)?))
}

/// CIELuv to RGB, via XYZ.
pub fn to_rgb(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_rgb(to_xyz(luv, white)?))
}

/// CIELuv to HSL, via XYZ and RGB.
pub fn to_hsl(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_hsl(to_xyz(luv, white)?))
}

/// CIELuv to HSV, via XYZ and RGB.
pub fn to_hsv(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_hsv(to_xyz(luv, white)?))
}

/// CIELuv to CMY, via XYZ and RGB.
pub fn to_cmy(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_cmy(to_xyz(luv, white)?))
}

/// CIELuv to CMYK, via XYZ, RGB, and CMY.
pub fn to_cmyk(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 4]> {
    Ok(xyz::to_cmyk(to_xyz(luv, white)?))
}

/// CIELuv to Yxy, via XYZ.
pub fn to_yxy(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(luv, white)?)
}

/// CIELuv to Hunter Lab, via XYZ.
pub fn to_hunter_lab(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(luv, white)?)
}

/// CIELuv to CIELab, via XYZ.
pub fn to_lab(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lab(to_xyz(luv, white)?, white))
}

/// CIELuv to CIELch, via XYZ and CIELab.
pub fn to_lch(luv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lch(to_xyz(luv, white)?, white))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xyz_roundtrip() {
        let wp = WhitePoint::default();
        let xyz_in = [41.24, 21.26, 1.93];
        let back = to_xyz(xyz::to_luv(xyz_in, &wp).unwrap(), &wp).unwrap();
        for i in 0..3 {
            assert_relative_eq!(back[i], xyz_in[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_l_fails() {
        assert!(matches!(
            to_xyz([0.0, 10.0, 10.0], &WhitePoint::default()),
            Err(ChromaError::NumericDomain { .. })
        ));
    }
}
