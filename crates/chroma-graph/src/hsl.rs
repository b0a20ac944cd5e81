//! Conversions out of HSL. Hue is in degrees; everything routes through RGB.

use chroma_core::{ChromaResult, WhitePoint};

use crate::{cmy, rgb, xyz};

/// HSL to RGB.
///
/// S = 0 short-circuits to gray; chromatic inputs go through the classic
/// two-level interpolation.
pub fn to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;

    if s == 0.0 {
        return [l * 255.0, l * 255.0, l * 255.0];
    }

    let h = h / 360.0;
    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (s * l) };
    let v1 = 2.0 * l - v2;

    [
        255.0 * hue_to_rgb(v1, v2, h + 1.0 / 3.0),
        255.0 * hue_to_rgb(v1, v2, h),
        255.0 * hue_to_rgb(v1, v2, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(v1: f64, v2: f64, h: f64) -> f64 {
    let mut h = h;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if 6.0 * h < 1.0 {
        v1 + (v2 - v1) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        v2
    } else if 3.0 * h < 2.0 {
        v1 + (v2 - v1) * ((2.0 / 3.0) - h) * 6.0
    } else {
        v1
    }
}

/// HSL to HEX, via RGB.
pub fn to_hex(hsl: [f64; 3]) -> String {
    rgb::to_hex(to_rgb(hsl))
}

/// HSL to HSV, via RGB.
pub fn to_hsv(hsl: [f64; 3]) -> [f64; 3] {
    rgb::to_hsv(to_rgb(hsl))
}

/// HSL to CMY, via RGB.
pub fn to_cmy(hsl: [f64; 3]) -> [f64; 3] {
    rgb::to_cmy(to_rgb(hsl))
}

/// HSL to CMYK, via RGB and CMY.
pub fn to_cmyk(hsl: [f64; 3]) -> [f64; 4] {
    cmy::to_cmyk(rgb::to_cmy(to_rgb(hsl)))
}

/// HSL to XYZ, via RGB.
pub fn to_xyz(hsl: [f64; 3]) -> [f64; 3] {
    rgb::to_xyz(to_rgb(hsl))
}

/// HSL to Yxy, via RGB and XYZ. Fails for black.
pub fn to_yxy(hsl: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(hsl))
}

/// HSL to Hunter Lab, via RGB and XYZ. Fails for black.
pub fn to_hunter_lab(hsl: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(hsl))
}

/// HSL to CIELab, via RGB and XYZ.
pub fn to_lab(hsl: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(hsl), white)
}

/// HSL to CIELch, via RGB, XYZ, and CIELab.
pub fn to_lch(hsl: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(hsl), white)
}

/// HSL to CIELuv, via RGB and XYZ. Fails for black.
pub fn to_luv(hsl: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(hsl), white)
}
