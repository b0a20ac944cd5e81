//! Conversions out of RGB.
//!
//! RGB is one of the two hub spaces: HEX, HSL, HSV, and CMY are reached
//! directly, everything else routes through XYZ.
//!
//! # Range
//!
//! - Input channels: [0, 255]

use chroma_core::{ChromaResult, WhitePoint};

use crate::{cmy, xyz};

/// RGB to lowercase `#rrggbb` notation.
///
/// Channels are rounded to the nearest integer before formatting.
///
/// # Example
///
/// ```rust
/// use chroma_graph::rgb;
///
/// assert_eq!(rgb::to_hex([255.0, 0.0, 0.0]), "#ff0000");
/// ```
pub fn to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|v| v.round().clamp(0.0, 255.0) as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// RGB to XYZ (D65/2° matrix).
///
/// Applies the inverse sRGB companding (linear below 0.04045, power 2.4
/// above) and the standard sRGB matrix.
///
/// # Formula
///
/// ```text
/// v = v / 255
/// v = v > 0.04045 ? ((v + 0.055) / 1.055)^2.4 : v / 12.92
/// v = v * 100
/// X = 0.4124564 R + 0.3575761 G + 0.1804375 B
/// Y = 0.2126729 R + 0.7151522 G + 0.0721750 B
/// Z = 0.0193339 R + 0.1191920 G + 0.9503041 B
/// ```
pub fn to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|v| {
        let v = v / 255.0;
        let v = if v > 0.04045 {
            ((v + 0.055) / 1.055).powf(2.4)
        } else {
            v / 12.92
        };
        v * 100.0
    });

    [
        r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
        r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
        r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
    ]
}

/// RGB to HSL, hue in degrees.
///
/// Achromatic inputs (max == min) short-circuit to H = 0, S = 0 so the hue
/// bias terms never divide by a zero delta.
pub fn to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|v| v / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        // gray, no chroma
        return [0.0, 0.0, l];
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [hue_degrees(r, g, b, max, delta), s, l]
}

/// RGB to HSV, hue in degrees.
///
/// Same achromatic shortcut as [`to_hsl`].
pub fn to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|v| v / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, max];
    }

    [hue_degrees(r, g, b, max, delta), delta / max, max]
}

/// Shared HSL/HSV hue computation, wrapped to [0, 360).
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let del_r = (((max - r) / 6.0) + (delta / 2.0)) / delta;
    let del_g = (((max - g) / 6.0) + (delta / 2.0)) / delta;
    let del_b = (((max - b) / 6.0) + (delta / 2.0)) / delta;

    let mut h = if r == max {
        del_b - del_g
    } else if g == max {
        (1.0 / 3.0) + del_r - del_b
    } else {
        (2.0 / 3.0) + del_g - del_r
    };

    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }

    h * 360.0
}

/// RGB to CMY.
pub fn to_cmy(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|v| 1.0 - v / 255.0)
}

/// RGB to CMYK, via CMY.
pub fn to_cmyk(rgb: [f64; 3]) -> [f64; 4] {
    cmy::to_cmyk(to_cmy(rgb))
}

/// RGB to Yxy, via XYZ.
///
/// Fails for black (X + Y + Z = 0 has no chromaticity).
pub fn to_yxy(rgb: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(rgb))
}

/// RGB to Hunter Lab, via XYZ.
///
/// Fails for black (Y = 0).
pub fn to_hunter_lab(rgb: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(rgb))
}

/// RGB to CIELab, via XYZ.
pub fn to_lab(rgb: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(rgb), white)
}

/// RGB to CIELch, via XYZ and CIELab.
pub fn to_lch(rgb: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(rgb), white)
}

/// RGB to CIELuv, via XYZ.
///
/// Fails for black (the u′v′ denominator is zero).
pub fn to_luv(rgb: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(rgb), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_red_to_xyz() {
        // sRGB red reference tristimulus
        let [x, y, z] = to_xyz([255.0, 0.0, 0.0]);
        assert_relative_eq!(x, 41.24564, epsilon = 1e-5);
        assert_relative_eq!(y, 21.26729, epsilon = 1e-5);
        assert_relative_eq!(z, 1.93339, epsilon = 1e-5);
    }

    #[test]
    fn test_white_to_xyz_is_reference_white() {
        // the matrix rows sum to the D65 white within rounding of the
        // published coefficients
        let [x, y, z] = to_xyz([255.0, 255.0, 255.0]);
        assert_relative_eq!(x, 95.047, epsilon = 1e-4);
        assert_relative_eq!(y, 100.000, epsilon = 1e-4);
        assert_relative_eq!(z, 108.883, epsilon = 1e-4);
    }

    #[test]
    fn test_to_hex_fixed_points() {
        assert_eq!(to_hex([255.0, 0.0, 0.0]), "#ff0000");
        assert_eq!(to_hex([0.0, 0.0, 0.0]), "#000000");
        assert_eq!(to_hex([255.0, 255.0, 255.0]), "#ffffff");
        // conversion outputs land near-integral and must round, not truncate
        assert_eq!(to_hex([254.9999, 0.0001, 127.5]), "#ff0080");
    }

    #[test]
    fn test_achromatic_shortcut() {
        let [h, s, l] = to_hsl([128.0, 128.0, 128.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_relative_eq!(l, 128.0 / 255.0, epsilon = 1e-12);

        let [h, s, v] = to_hsv([128.0, 128.0, 128.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_relative_eq!(v, 128.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_primary_hues() {
        assert_relative_eq!(to_hsl([255.0, 0.0, 0.0])[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(to_hsl([0.0, 255.0, 0.0])[0], 120.0, epsilon = 1e-9);
        assert_relative_eq!(to_hsl([0.0, 0.0, 255.0])[0], 240.0, epsilon = 1e-9);
        assert_relative_eq!(to_hsv([0.0, 255.0, 255.0])[0], 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_cmy() {
        let [c, m, y] = to_cmy([255.0, 0.0, 51.0]);
        assert_relative_eq!(c, 0.0, epsilon = 1e-12);
        assert_relative_eq!(m, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_black_chromaticity_fails() {
        assert!(to_yxy([0.0, 0.0, 0.0]).is_err());
        assert!(to_hunter_lab([0.0, 0.0, 0.0]).is_err());
        assert!(to_luv([0.0, 0.0, 0.0], &WhitePoint::default()).is_err());
    }

    #[test]
    fn test_black_to_lab_is_origin() {
        let lab = to_lab([0.0, 0.0, 0.0], &WhitePoint::default());
        assert_relative_eq!(lab[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(lab[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(lab[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_red_to_lab_reference() {
        let [l, a, b] = to_lab([255.0, 0.0, 0.0], &WhitePoint::default());
        assert_relative_eq!(l, 53.2408, epsilon = 1e-3);
        assert_relative_eq!(a, 80.0925, epsilon = 1e-3);
        assert_relative_eq!(b, 67.2032, epsilon = 1e-3);
    }
}
