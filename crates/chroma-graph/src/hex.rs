//! Conversions out of HEX notation. Everything routes through RGB.
//!
//! Every function here is fallible: the payload is a string, and even though
//! construction validates it, the graph never trusts unparsed input.

use chroma_core::{ChromaError, ChromaResult, ColorSpace, WhitePoint};

use crate::{cmy, rgb, xyz};

/// HEX to RGB.
///
/// Accepts an optional leading `#`; 3-digit shorthand expands each nibble by
/// duplication (`#fa0` → `#ffaa00`) before splitting into channel pairs.
pub fn to_rgb(hex: &str) -> ChromaResult<[f64; 3]> {
    let invalid = |detail: String| ChromaError::InvalidValues {
        space: ColorSpace::Hex,
        detail,
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // byte lengths and slice offsets below assume ASCII input
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(format!("{digits:?} contains non-hex characters")));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        n => return Err(invalid(format!("expected 3 or 6 hex digits, got {n}"))),
    };

    let mut out = [0.0; 3];
    for (i, pair) in [&expanded[0..2], &expanded[2..4], &expanded[4..6]]
        .into_iter()
        .enumerate()
    {
        out[i] = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid(format!("{pair:?} is not hexadecimal: {e}")))?
            .into();
    }

    Ok(out)
}

/// HEX to XYZ, via RGB.
pub fn to_xyz(hex: &str) -> ChromaResult<[f64; 3]> {
    Ok(rgb::to_xyz(to_rgb(hex)?))
}

/// HEX to HSL, via RGB.
pub fn to_hsl(hex: &str) -> ChromaResult<[f64; 3]> {
    Ok(rgb::to_hsl(to_rgb(hex)?))
}

/// HEX to HSV, via RGB.
pub fn to_hsv(hex: &str) -> ChromaResult<[f64; 3]> {
    Ok(rgb::to_hsv(to_rgb(hex)?))
}

/// HEX to CMY, via RGB.
pub fn to_cmy(hex: &str) -> ChromaResult<[f64; 3]> {
    Ok(rgb::to_cmy(to_rgb(hex)?))
}

/// HEX to CMYK, via RGB and CMY.
pub fn to_cmyk(hex: &str) -> ChromaResult<[f64; 4]> {
    Ok(cmy::to_cmyk(rgb::to_cmy(to_rgb(hex)?)))
}

/// HEX to Yxy, via RGB and XYZ. Fails for black.
pub fn to_yxy(hex: &str) -> ChromaResult<[f64; 3]> {
    xyz::to_yxy(to_xyz(hex)?)
}

/// HEX to Hunter Lab, via RGB and XYZ. Fails for black.
pub fn to_hunter_lab(hex: &str) -> ChromaResult<[f64; 3]> {
    xyz::to_hunter_lab(to_xyz(hex)?)
}

/// HEX to CIELab, via RGB and XYZ.
pub fn to_lab(hex: &str, white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lab(to_xyz(hex)?, white))
}

/// HEX to CIELch, via RGB, XYZ, and CIELab.
pub fn to_lch(hex: &str, white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    Ok(xyz::to_lch(to_xyz(hex)?, white))
}

/// HEX to CIELuv, via RGB and XYZ. Fails for black.
pub fn to_luv(hex: &str, white: &WhitePoint) -> ChromaResult<[f64; 3]> {
    xyz::to_luv(to_xyz(hex)?, white)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit() {
        assert_eq!(to_rgb("#ff0000").unwrap(), [255.0, 0.0, 0.0]);
        assert_eq!(to_rgb("00ff80").unwrap(), [0.0, 255.0, 128.0]);
    }

    #[test]
    fn test_three_digit_expansion() {
        assert_eq!(to_rgb("#fff").unwrap(), to_rgb("#ffffff").unwrap());
        assert_eq!(to_rgb("fa0").unwrap(), [255.0, 170.0, 0.0]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(to_rgb("#ABCDEF").unwrap(), to_rgb("#abcdef").unwrap());
    }

    #[test]
    fn test_malformed() {
        assert!(to_rgb("#ff00").is_err());
        assert!(to_rgb("gggggg").is_err());
        assert!(to_rgb("").is_err());
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        // multi-byte chars can hit the 3- or 6-byte arms; they must error,
        // not split the string mid-character
        assert!(to_rgb("\u{20ac}\u{20ac}").is_err());
        assert!(to_rgb("#\u{e9}").is_err());
        assert!(to_rgb("ff\u{20ac}0").is_err());
    }

    #[test]
    fn test_roundtrip_canonicalizes() {
        assert_eq!(rgb::to_hex(to_rgb("#FFF").unwrap()), "#ffffff");
    }
}
