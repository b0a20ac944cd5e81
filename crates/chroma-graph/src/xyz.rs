//! Conversions out of XYZ.
//!
//! XYZ is the second hub space: Yxy, Hunter Lab, CIELab, and CIELuv are
//! reached directly, display-oriented spaces route through RGB.
//!
//! The CIELab and CIELuv edges are normalized against a [`WhitePoint`]
//! (default D65/2°).

use chroma_core::{ChromaError, ChromaResult, WhitePoint};

use crate::{cmy, lab, rgb};

/// Threshold of the CIE cube-root nonlinearity (6/29)³.
pub(crate) const CIE_EPSILON: f64 = 0.008856;

/// Forward CIE nonlinearity: cube root above [`CIE_EPSILON`], linear below.
#[inline]
pub(crate) fn cie_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// XYZ to RGB (D65/2° matrix).
///
/// Inverse of [`crate::rgb::to_xyz`]: the inverse sRGB matrix followed by
/// sRGB companding (linear below 0.0031308, power 1/2.4 above).
///
/// The matrix is the full-precision inverse of the forward matrix, so
/// RGB -> XYZ -> RGB round-trips to machine precision.
pub fn to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz.map(|v| v / 100.0);

    let lin = [
        x * 3.2404548360214083 + y * -1.5371388501025751 + z * -0.4985315468684809,
        x * -0.9692663898756537 + y * 1.8760109288424913 + z * 0.0415560823466735,
        x * 0.0556434196042137 + y * -0.2040258542676981 + z * 1.0572251624579287,
    ];

    lin.map(|v| {
        let v = if v > 0.0031308 {
            1.055 * v.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * v
        };
        v * 255.0
    })
}

/// XYZ to Yxy.
///
/// # Errors
///
/// `NumericDomain` when X + Y + Z = 0: black has no chromaticity.
pub fn to_yxy(xyz: [f64; 3]) -> ChromaResult<[f64; 3]> {
    let [x, y, z] = xyz;
    let sum = x + y + z;

    if sum == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "XYZ -> Yxy",
            detail: "X + Y + Z is zero",
        });
    }

    Ok([y, x / sum, y / sum])
}

/// XYZ to Hunter Lab.
///
/// # Formula
///
/// ```text
/// L = 10 * sqrt(Y)
/// a = 17.5 * (1.02 X - Y) / sqrt(Y)
/// b = 7 * (Y - 0.847 Z) / sqrt(Y)
/// ```
///
/// # Errors
///
/// `NumericDomain` when Y = 0 (the a and b terms divide by `sqrt(Y)`).
pub fn to_hunter_lab(xyz: [f64; 3]) -> ChromaResult<[f64; 3]> {
    let [x, y, z] = xyz;

    if y == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "XYZ -> HunterLab",
            detail: "Y is zero",
        });
    }

    let sqrt_y = y.sqrt();
    Ok([
        10.0 * sqrt_y,
        17.5 * ((1.02 * x) - y) / sqrt_y,
        7.0 * (y - (0.847 * z)) / sqrt_y,
    ])
}

/// XYZ to CIELab under the given reference white.
pub fn to_lab(xyz: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    let fx = cie_f(xyz[0] / white.x);
    let fy = cie_f(xyz[1] / white.y);
    let fz = cie_f(xyz[2] / white.z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// XYZ to CIELuv under the given reference white.
///
/// # Errors
///
/// `NumericDomain` when X + 15Y + 3Z = 0 (the u′v′ denominator).
pub fn to_luv(xyz: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    let [x, y, z] = xyz;
    let denom = x + 15.0 * y + 3.0 * z;

    if denom == 0.0 {
        return Err(ChromaError::NumericDomain {
            conversion: "XYZ -> CIELuv",
            detail: "X + 15Y + 3Z is zero",
        });
    }

    let u_prime = (4.0 * x) / denom;
    let v_prime = (9.0 * y) / denom;

    let l = 116.0 * cie_f(y / 100.0) - 16.0;
    Ok([
        l,
        13.0 * l * (u_prime - white.u_prime()),
        13.0 * l * (v_prime - white.v_prime()),
    ])
}

/// XYZ to HEX, via RGB.
pub fn to_hex(xyz: [f64; 3]) -> String {
    rgb::to_hex(to_rgb(xyz))
}

/// XYZ to CIELch, via CIELab.
pub fn to_lch(xyz: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    lab::to_lch(to_lab(xyz, white))
}

/// XYZ to HSL, via RGB.
pub fn to_hsl(xyz: [f64; 3]) -> [f64; 3] {
    rgb::to_hsl(to_rgb(xyz))
}

/// XYZ to HSV, via RGB.
pub fn to_hsv(xyz: [f64; 3]) -> [f64; 3] {
    rgb::to_hsv(to_rgb(xyz))
}

/// XYZ to CMY, via RGB.
pub fn to_cmy(xyz: [f64; 3]) -> [f64; 3] {
    rgb::to_cmy(to_rgb(xyz))
}

/// XYZ to CMYK, via RGB and CMY.
pub fn to_cmyk(xyz: [f64; 3]) -> [f64; 4] {
    cmy::to_cmyk(rgb::to_cmy(to_rgb(xyz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rgb_roundtrip() {
        // includes dark values, where companding amplifies matrix error most
        for rgb_in in [
            [12.0, 130.0, 250.0],
            [1.0, 2.0, 3.0],
            [200.0, 120.0, 40.0],
            [255.0, 255.0, 255.0],
        ] {
            let back = to_rgb(rgb::to_xyz(rgb_in));
            for i in 0..3 {
                assert_relative_eq!(back[i], rgb_in[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_yxy_chromaticity_of_white() {
        let [y, x, small_y] = to_yxy([95.047, 100.000, 108.883]).unwrap();
        assert_relative_eq!(y, 100.0, epsilon = 1e-9);
        // D65 white chromaticity
        assert_relative_eq!(x, 0.3127, epsilon = 1e-4);
        assert_relative_eq!(small_y, 0.3290, epsilon = 1e-4);
    }

    #[test]
    fn test_yxy_of_black_fails() {
        assert!(matches!(
            to_yxy([0.0, 0.0, 0.0]),
            Err(ChromaError::NumericDomain { .. })
        ));
    }

    #[test]
    fn test_hunter_lab_of_white() {
        // perfect diffuser: L = 100, a/b near zero by construction of the
        // 1.02 and 0.847 factors
        let [l, a, b] = to_hunter_lab([95.047, 100.000, 108.883]).unwrap();
        assert_relative_eq!(l, 100.0, epsilon = 1e-9);
        assert_relative_eq!(a, 17.5 * (1.02 * 95.047 - 100.0) / 10.0, epsilon = 1e-9);
        assert_relative_eq!(b, 7.0 * (100.0 - 0.847 * 108.883) / 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lab_of_reference_white() {
        let wp = WhitePoint::default();
        let [l, a, b] = to_lab([wp.x, wp.y, wp.z], &wp);
        assert_relative_eq!(l, 100.0, epsilon = 1e-9);
        assert_relative_eq!(a, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lab_linear_segment() {
        // below the 0.008856 threshold the linear extension applies
        let wp = WhitePoint::default();
        let xyz = [0.5, 0.5, 0.5];
        let [l, _, _] = to_lab(xyz, &wp);
        let fy = 7.787 * (0.5 / 100.0) + 16.0 / 116.0;
        assert_relative_eq!(l, 116.0 * fy - 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_luv_of_reference_white() {
        let wp = WhitePoint::default();
        let [l, u, v] = to_luv([wp.x, wp.y, wp.z], &wp).unwrap();
        assert_relative_eq!(l, 100.0, epsilon = 1e-9);
        assert_relative_eq!(u, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_luv_of_black_fails() {
        assert!(to_luv([0.0, 0.0, 0.0], &WhitePoint::default()).is_err());
    }
}
