//! Conversions out of HSV. Hue is in degrees; everything routes through RGB.

use chroma_core::{ChromaResult, WhitePoint};

use crate::{cmy, rgb, xyz};

/// HSV to RGB.
///
/// S = 0 short-circuits to gray; otherwise the hue selects one of six
/// sectors of the color wheel.
pub fn to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;

    if s == 0.0 {
        return [v * 255.0, v * 255.0, v * 255.0];
    }

    let mut sector = h / 60.0;
    if sector >= 6.0 {
        // 360° wraps to 0°
        sector = 0.0;
    }
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let rgb = match i as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    rgb.map(|c| c * 255.0)
}

/// HSV to HEX, via RGB.
pub fn to_hex(hsv: [f64; 3]) -> String {
    rgb::to_hex(to_rgb(hsv))
}

/// HSV to HSL, via RGB.
pub fn to_hsl(hsv: [f64; 3]) -> [f64; 3] {
    rgb::to_hsl(to_rgb(hsv))
}

/// HSV to CMY, via RGB.
pub fn to_cmy(hsv: [f64; 3]) -> [f64; 3] {
    rgb::to_cmy(to_rgb(hsv))
}

/// HSV to CMYK, via RGB and CMY.
pub fn to_cmyk(hsv: [f64; 3]) -> [f64; 4] {
    cmy::to_cmyk(rgb::to_cmy(to_rgb(hsv)))
}

/// HSV to XYZ, via RGB.
pub fn to_xyz(hsv: [f64; 3]) -> [f64; 3] {
    rgb::to_xyz(to_rgb(hsv))
}

/// HSV to Yxy, via RGB and XYZ. Fails for black.
pub fn to_yxy(hsv: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(hsv))
}

/// HSV to Hunter Lab, via RGB and XYZ. Fails for black.
pub fn to_hunter_lab(hsv: [f64; 3]) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(hsv))
}

/// HSV to CIELab, via RGB and XYZ.
pub fn to_lab(hsv: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lab(to_xyz(hsv), white)
}

/// HSV to CIELch, via RGB, XYZ, and CIELab.
pub fn to_lch(hsv: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    xyz::to_lch(to_xyz(hsv), white)
}

/// HSV to CIELuv, via RGB and XYZ. Fails for black.
pub fn to_luv(hsv: [f64; 3], white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(hsv), white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sectors() {
        let [r, g, b] = to_rgb([0.0, 1.0, 1.0]);
        assert_eq!([r, g, b], [255.0, 0.0, 0.0]);

        let [r, g, b] = to_rgb([240.0, 1.0, 1.0]);
        assert_eq!([r, g, b], [0.0, 0.0, 255.0]);

        // 360° is the same as 0°
        assert_eq!(to_rgb([360.0, 1.0, 1.0]), to_rgb([0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_achromatic_to_rgb() {
        let [r, g, b] = to_rgb([123.0, 0.0, 0.25]);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_relative_eq!(r, 63.75, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_roundtrip() {
        let rgb_in = [13.0, 77.0, 250.0];
        let back = to_rgb(rgb::to_hsv(rgb_in));
        for i in 0..3 {
            assert_relative_eq!(back[i], rgb_in[i], epsilon = 1e-9);
        }
    }
}
