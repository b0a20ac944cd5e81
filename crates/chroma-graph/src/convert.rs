//! Runtime dispatch over the conversion graph.
//!
//! [`convert`] resolves an ordered (source, target) pair to its formula or
//! pre-composed chain. The graph never changes shape, so there is no path
//! search: every pair is a fixed arm of one exhaustive match.

use chroma_core::{Channels, ChromaError, ChromaResult, ColorSpace, WhitePoint};

use crate::{cmy, cmyk, hex, hsl, hsv, hunter, lab, lch, luv, rgb, xyz, yxy};

fn triple(space: ColorSpace, channels: &Channels) -> ChromaResult<[f64; 3]> {
    match channels.as_values() {
        Some(&[a, b, c]) => Ok([a, b, c]),
        _ => Err(ChromaError::InvalidValues {
            space,
            detail: "expected 3 numeric channels".to_owned(),
        }),
    }
}

fn quad(space: ColorSpace, channels: &Channels) -> ChromaResult<[f64; 4]> {
    match channels.as_values() {
        Some(&[a, b, c, d]) => Ok([a, b, c, d]),
        _ => Err(ChromaError::InvalidValues {
            space,
            detail: "expected 4 numeric channels".to_owned(),
        }),
    }
}

fn hex_str(channels: &Channels) -> ChromaResult<&str> {
    channels.as_hex().ok_or_else(|| ChromaError::InvalidValues {
        space: ColorSpace::Hex,
        detail: "expected a HEX string".to_owned(),
    })
}

/// Converts channel values from one space to another.
///
/// Identity pairs are rejected as [`ChromaError::UnsupportedConversion`]:
/// short-circuiting `from == to` is the caller's concern, the graph only
/// holds formulas for distinct pairs.
///
/// # Errors
///
/// - `InvalidValues` if the payload shape does not match `from`
/// - `NumericDomain` if a step divides by zero (Yxy y = 0, CIELuv L = 0,
///   chromaticity of black)
/// - `UnsupportedConversion` for identity pairs
///
/// # Example
///
/// ```rust
/// use chroma_core::{Channels, ColorSpace, WhitePoint};
/// use chroma_graph::convert;
///
/// let lab = convert(
///     ColorSpace::Rgb,
///     ColorSpace::Lab,
///     &Channels::from([255.0, 0.0, 0.0]),
///     &WhitePoint::default(),
/// )
/// .unwrap();
/// ```
pub fn convert(
    from: ColorSpace,
    to: ColorSpace,
    channels: &Channels,
    white: &WhitePoint,
) -> ChromaResult<Channels> {
    use ColorSpace as S;

    let out: Channels = match (from, to) {
        // ==================================================================
        // RGB
        // ==================================================================
        (S::Rgb, S::Hex) => rgb::to_hex(triple(from, channels)?).into(),
        (S::Rgb, S::Hsl) => rgb::to_hsl(triple(from, channels)?).into(),
        (S::Rgb, S::Hsv) => rgb::to_hsv(triple(from, channels)?).into(),
        (S::Rgb, S::Cmy) => rgb::to_cmy(triple(from, channels)?).into(),
        (S::Rgb, S::Cmyk) => rgb::to_cmyk(triple(from, channels)?).into(),
        (S::Rgb, S::Xyz) => rgb::to_xyz(triple(from, channels)?).into(),
        (S::Rgb, S::Yxy) => rgb::to_yxy(triple(from, channels)?)?.into(),
        (S::Rgb, S::Lab) => rgb::to_lab(triple(from, channels)?, white).into(),
        (S::Rgb, S::Lch) => rgb::to_lch(triple(from, channels)?, white).into(),
        (S::Rgb, S::Luv) => rgb::to_luv(triple(from, channels)?, white)?.into(),
        (S::Rgb, S::HunterLab) => rgb::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // HEX
        // ==================================================================
        (S::Hex, S::Rgb) => hex::to_rgb(hex_str(channels)?)?.into(),
        (S::Hex, S::Hsl) => hex::to_hsl(hex_str(channels)?)?.into(),
        (S::Hex, S::Hsv) => hex::to_hsv(hex_str(channels)?)?.into(),
        (S::Hex, S::Cmy) => hex::to_cmy(hex_str(channels)?)?.into(),
        (S::Hex, S::Cmyk) => hex::to_cmyk(hex_str(channels)?)?.into(),
        (S::Hex, S::Xyz) => hex::to_xyz(hex_str(channels)?)?.into(),
        (S::Hex, S::Yxy) => hex::to_yxy(hex_str(channels)?)?.into(),
        (S::Hex, S::Lab) => hex::to_lab(hex_str(channels)?, white)?.into(),
        (S::Hex, S::Lch) => hex::to_lch(hex_str(channels)?, white)?.into(),
        (S::Hex, S::Luv) => hex::to_luv(hex_str(channels)?, white)?.into(),
        (S::Hex, S::HunterLab) => hex::to_hunter_lab(hex_str(channels)?)?.into(),

        // ==================================================================
        // HSL
        // ==================================================================
        (S::Hsl, S::Rgb) => hsl::to_rgb(triple(from, channels)?).into(),
        (S::Hsl, S::Hex) => hsl::to_hex(triple(from, channels)?).into(),
        (S::Hsl, S::Hsv) => hsl::to_hsv(triple(from, channels)?).into(),
        (S::Hsl, S::Cmy) => hsl::to_cmy(triple(from, channels)?).into(),
        (S::Hsl, S::Cmyk) => hsl::to_cmyk(triple(from, channels)?).into(),
        (S::Hsl, S::Xyz) => hsl::to_xyz(triple(from, channels)?).into(),
        (S::Hsl, S::Yxy) => hsl::to_yxy(triple(from, channels)?)?.into(),
        (S::Hsl, S::Lab) => hsl::to_lab(triple(from, channels)?, white).into(),
        (S::Hsl, S::Lch) => hsl::to_lch(triple(from, channels)?, white).into(),
        (S::Hsl, S::Luv) => hsl::to_luv(triple(from, channels)?, white)?.into(),
        (S::Hsl, S::HunterLab) => hsl::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // HSV
        // ==================================================================
        (S::Hsv, S::Rgb) => hsv::to_rgb(triple(from, channels)?).into(),
        (S::Hsv, S::Hex) => hsv::to_hex(triple(from, channels)?).into(),
        (S::Hsv, S::Hsl) => hsv::to_hsl(triple(from, channels)?).into(),
        (S::Hsv, S::Cmy) => hsv::to_cmy(triple(from, channels)?).into(),
        (S::Hsv, S::Cmyk) => hsv::to_cmyk(triple(from, channels)?).into(),
        (S::Hsv, S::Xyz) => hsv::to_xyz(triple(from, channels)?).into(),
        (S::Hsv, S::Yxy) => hsv::to_yxy(triple(from, channels)?)?.into(),
        (S::Hsv, S::Lab) => hsv::to_lab(triple(from, channels)?, white).into(),
        (S::Hsv, S::Lch) => hsv::to_lch(triple(from, channels)?, white).into(),
        (S::Hsv, S::Luv) => hsv::to_luv(triple(from, channels)?, white)?.into(),
        (S::Hsv, S::HunterLab) => hsv::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // CMY
        // ==================================================================
        (S::Cmy, S::Rgb) => cmy::to_rgb(triple(from, channels)?).into(),
        (S::Cmy, S::Hex) => cmy::to_hex(triple(from, channels)?).into(),
        (S::Cmy, S::Hsl) => cmy::to_hsl(triple(from, channels)?).into(),
        (S::Cmy, S::Hsv) => cmy::to_hsv(triple(from, channels)?).into(),
        (S::Cmy, S::Cmyk) => cmy::to_cmyk(triple(from, channels)?).into(),
        (S::Cmy, S::Xyz) => cmy::to_xyz(triple(from, channels)?).into(),
        (S::Cmy, S::Yxy) => cmy::to_yxy(triple(from, channels)?)?.into(),
        (S::Cmy, S::Lab) => cmy::to_lab(triple(from, channels)?, white).into(),
        (S::Cmy, S::Lch) => cmy::to_lch(triple(from, channels)?, white).into(),
        (S::Cmy, S::Luv) => cmy::to_luv(triple(from, channels)?, white)?.into(),
        (S::Cmy, S::HunterLab) => cmy::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // CMYK
        // ==================================================================
        (S::Cmyk, S::Rgb) => cmyk::to_rgb(quad(from, channels)?).into(),
        (S::Cmyk, S::Hex) => cmyk::to_hex(quad(from, channels)?).into(),
        (S::Cmyk, S::Hsl) => cmyk::to_hsl(quad(from, channels)?).into(),
        (S::Cmyk, S::Hsv) => cmyk::to_hsv(quad(from, channels)?).into(),
        (S::Cmyk, S::Cmy) => cmyk::to_cmy(quad(from, channels)?).into(),
        (S::Cmyk, S::Xyz) => cmyk::to_xyz(quad(from, channels)?).into(),
        (S::Cmyk, S::Yxy) => cmyk::to_yxy(quad(from, channels)?)?.into(),
        (S::Cmyk, S::Lab) => cmyk::to_lab(quad(from, channels)?, white).into(),
        (S::Cmyk, S::Lch) => cmyk::to_lch(quad(from, channels)?, white).into(),
        (S::Cmyk, S::Luv) => cmyk::to_luv(quad(from, channels)?, white)?.into(),
        (S::Cmyk, S::HunterLab) => cmyk::to_hunter_lab(quad(from, channels)?)?.into(),

        // ==================================================================
        // XYZ
        // ==================================================================
        (S::Xyz, S::Rgb) => xyz::to_rgb(triple(from, channels)?).into(),
        (S::Xyz, S::Hex) => xyz::to_hex(triple(from, channels)?).into(),
        (S::Xyz, S::Hsl) => xyz::to_hsl(triple(from, channels)?).into(),
        (S::Xyz, S::Hsv) => xyz::to_hsv(triple(from, channels)?).into(),
        (S::Xyz, S::Cmy) => xyz::to_cmy(triple(from, channels)?).into(),
        (S::Xyz, S::Cmyk) => xyz::to_cmyk(triple(from, channels)?).into(),
        (S::Xyz, S::Yxy) => xyz::to_yxy(triple(from, channels)?)?.into(),
        (S::Xyz, S::Lab) => xyz::to_lab(triple(from, channels)?, white).into(),
        (S::Xyz, S::Lch) => xyz::to_lch(triple(from, channels)?, white).into(),
        (S::Xyz, S::Luv) => xyz::to_luv(triple(from, channels)?, white)?.into(),
        (S::Xyz, S::HunterLab) => xyz::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // Yxy
        // ==================================================================
        (S::Yxy, S::Rgb) => yxy::to_rgb(triple(from, channels)?)?.into(),
        (S::Yxy, S::Hex) => yxy::to_hex(triple(from, channels)?)?.into(),
        (S::Yxy, S::Hsl) => yxy::to_hsl(triple(from, channels)?)?.into(),
        (S::Yxy, S::Hsv) => yxy::to_hsv(triple(from, channels)?)?.into(),
        (S::Yxy, S::Cmy) => yxy::to_cmy(triple(from, channels)?)?.into(),
        (S::Yxy, S::Cmyk) => yxy::to_cmyk(triple(from, channels)?)?.into(),
        (S::Yxy, S::Xyz) => yxy::to_xyz(triple(from, channels)?)?.into(),
        (S::Yxy, S::Lab) => yxy::to_lab(triple(from, channels)?, white)?.into(),
        (S::Yxy, S::Lch) => yxy::to_lch(triple(from, channels)?, white)?.into(),
        (S::Yxy, S::Luv) => yxy::to_luv(triple(from, channels)?, white)?.into(),
        (S::Yxy, S::HunterLab) => yxy::to_hunter_lab(triple(from, channels)?)?.into(),

        // ==================================================================
        // CIELab
        // ==================================================================
        (S::Lab, S::Rgb) => lab::to_rgb(triple(from, channels)?, white).into(),
        (S::Lab, S::Hex) => lab::to_hex(triple(from, channels)?, white).into(),
        (S::Lab, S::Hsl) => lab::to_hsl(triple(from, channels)?, white).into(),
        (S::Lab, S::Hsv) => lab::to_hsv(triple(from, channels)?, white).into(),
        (S::Lab, S::Cmy) => lab::to_cmy(triple(from, channels)?, white).into(),
        (S::Lab, S::Cmyk) => lab::to_cmyk(triple(from, channels)?, white).into(),
        (S::Lab, S::Xyz) => lab::to_xyz(triple(from, channels)?, white).into(),
        (S::Lab, S::Yxy) => lab::to_yxy(triple(from, channels)?, white)?.into(),
        (S::Lab, S::Lch) => lab::to_lch(triple(from, channels)?).into(),
        (S::Lab, S::Luv) => lab::to_luv(triple(from, channels)?, white)?.into(),
        (S::Lab, S::HunterLab) => lab::to_hunter_lab(triple(from, channels)?, white)?.into(),

        // ==================================================================
        // CIELch
        // ==================================================================
        (S::Lch, S::Rgb) => lch::to_rgb(triple(from, channels)?, white).into(),
        (S::Lch, S::Hex) => lch::to_hex(triple(from, channels)?, white).into(),
        (S::Lch, S::Hsl) => lch::to_hsl(triple(from, channels)?, white).into(),
        (S::Lch, S::Hsv) => lch::to_hsv(triple(from, channels)?, white).into(),
        (S::Lch, S::Cmy) => lch::to_cmy(triple(from, channels)?, white).into(),
        (S::Lch, S::Cmyk) => lch::to_cmyk(triple(from, channels)?, white).into(),
        (S::Lch, S::Xyz) => lch::to_xyz(triple(from, channels)?, white).into(),
        (S::Lch, S::Yxy) => lch::to_yxy(triple(from, channels)?, white)?.into(),
        (S::Lch, S::Lab) => lch::to_lab(triple(from, channels)?).into(),
        (S::Lch, S::Luv) => lch::to_luv(triple(from, channels)?, white)?.into(),
        (S::Lch, S::HunterLab) => lch::to_hunter_lab(triple(from, channels)?, white)?.into(),

        // ==================================================================
        // CIELuv
        // ==================================================================
        (S::Luv, S::Rgb) => luv::to_rgb(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Hex) => luv::to_hex(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Hsl) => luv::to_hsl(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Hsv) => luv::to_hsv(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Cmy) => luv::to_cmy(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Cmyk) => luv::to_cmyk(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Xyz) => luv::to_xyz(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Yxy) => luv::to_yxy(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Lab) => luv::to_lab(triple(from, channels)?, white)?.into(),
        (S::Luv, S::Lch) => luv::to_lch(triple(from, channels)?, white)?.into(),
        (S::Luv, S::HunterLab) => luv::to_hunter_lab(triple(from, channels)?, white)?.into(),

        // ==================================================================
        // Hunter Lab
        // ==================================================================
        (S::HunterLab, S::Rgb) => hunter::to_rgb(triple(from, channels)?).into(),
        (S::HunterLab, S::Hex) => hunter::to_hex(triple(from, channels)?).into(),
        (S::HunterLab, S::Hsl) => hunter::to_hsl(triple(from, channels)?).into(),
        (S::HunterLab, S::Hsv) => hunter::to_hsv(triple(from, channels)?).into(),
        (S::HunterLab, S::Cmy) => hunter::to_cmy(triple(from, channels)?).into(),
        (S::HunterLab, S::Cmyk) => hunter::to_cmyk(triple(from, channels)?).into(),
        (S::HunterLab, S::Xyz) => hunter::to_xyz(triple(from, channels)?).into(),
        (S::HunterLab, S::Yxy) => hunter::to_yxy(triple(from, channels)?)?.into(),
        (S::HunterLab, S::Lab) => hunter::to_lab(triple(from, channels)?, white).into(),
        (S::HunterLab, S::Lch) => hunter::to_lch(triple(from, channels)?, white).into(),
        (S::HunterLab, S::Luv) => hunter::to_luv(triple(from, channels)?, white)?.into(),

        // identity pairs and any future space without formulas
        _ => return Err(ChromaError::UnsupportedConversion { from, to }),
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wp() -> WhitePoint {
        WhitePoint::default()
    }

    #[test]
    fn test_every_distinct_pair_dispatches() {
        // a mid-gamut color that stays clear of every domain edge
        let rgb = Channels::from([200.0, 120.0, 40.0]);
        for to in ColorSpace::ALL {
            if to == ColorSpace::Rgb {
                continue;
            }
            let out = convert(ColorSpace::Rgb, to, &rgb, &wp()).unwrap();
            let back = convert(to, ColorSpace::Rgb, &out, &wp()).unwrap();
            let values = back.as_values().unwrap();
            for (i, v) in values.iter().enumerate() {
                assert_relative_eq!(
                    *v,
                    rgb.as_values().unwrap()[i],
                    epsilon = 1e-6,
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn test_identity_pair_is_rejected() {
        let rgb = Channels::from([1.0, 2.0, 3.0]);
        assert!(matches!(
            convert(ColorSpace::Rgb, ColorSpace::Rgb, &rgb, &wp()),
            Err(ChromaError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let bad = Channels::from([1.0, 2.0]);
        assert!(matches!(
            convert(ColorSpace::Rgb, ColorSpace::Xyz, &bad, &wp()),
            Err(ChromaError::InvalidValues { .. })
        ));
        let hex = Channels::from("#ffffff");
        assert!(matches!(
            convert(ColorSpace::Rgb, ColorSpace::Xyz, &hex, &wp()),
            Err(ChromaError::InvalidValues { .. })
        ));
    }

    #[test]
    fn test_cmy_black_to_cmyk() {
        // CMY (0,0,0) is white; full ink (1,1,1) collapses to K = 1
        let out = convert(
            ColorSpace::Cmy,
            ColorSpace::Cmyk,
            &Channels::from([1.0, 1.0, 1.0]),
            &wp(),
        )
        .unwrap();
        assert_eq!(out.as_values().unwrap(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hex_shorthand_matches_full_form() {
        let a = convert(ColorSpace::Hex, ColorSpace::Rgb, &Channels::from("#FFF"), &wp()).unwrap();
        let b = convert(
            ColorSpace::Hex,
            ColorSpace::Rgb,
            &Channels::from("#FFFFFF"),
            &wp(),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_values().unwrap(), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_domain_errors_propagate_through_chains() {
        let black = Channels::from([0.0, 0.0, 0.0]);
        for to in [ColorSpace::Yxy, ColorSpace::Luv, ColorSpace::HunterLab] {
            assert!(matches!(
                convert(ColorSpace::Rgb, to, &black, &wp()),
                Err(ChromaError::NumericDomain { .. })
            ));
        }
    }
}
