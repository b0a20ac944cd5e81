//! The twelve supported color spaces and their static metadata.
//!
//! [`ColorSpace`] is a closed enumeration: channel counts, labels, and value
//! boundaries are fixed constants, except for XYZ and Yxy whose upper bound
//! follows the configured [`WhitePoint`]. Informal names ("Lab", "Hex",
//! "Hunter-Lab") resolve through an alias table memoized process-wide.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::channels::Channels;
use crate::error::{ChromaError, ChromaResult};
use crate::white::WhitePoint;

/// A supported color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// sRGB, channels 0..=255.
    Rgb,
    /// Hexadecimal RGB notation, 3 or 6 digits with optional `#`.
    Hex,
    /// Hue (degrees), saturation, lightness.
    Hsl,
    /// Hue (degrees), saturation, value.
    Hsv,
    /// Cyan, magenta, yellow, 0..=1.
    Cmy,
    /// Cyan, magenta, yellow, key, 0..=1.
    Cmyk,
    /// CIE 1931 tristimulus values.
    Xyz,
    /// CIE Yxy (luminance + chromaticity).
    Yxy,
    /// CIE L\*a\*b\*.
    Lab,
    /// CIE L\*C\*h° (polar form of L\*a\*b\*).
    Lch,
    /// CIE L\*u\*v\*.
    Luv,
    /// Hunter 1948 L, a, b.
    HunterLab,
}

/// Value boundaries of a color space.
///
/// HEX is structurally special: its single channel is a string constrained by
/// a pattern, not a numeric range.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundaries {
    /// Per-channel inclusive minimum and maximum.
    Numeric {
        /// Minimum per channel.
        min: Vec<f64>,
        /// Maximum per channel.
        max: Vec<f64>,
    },
    /// HEX string range.
    HexRange {
        /// Lowest value.
        min: &'static str,
        /// Highest value.
        max: &'static str,
    },
}

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid pattern"));

/// Alias-resolution memo, keyed by the original input string.
///
/// Write-once-per-key and read-mostly; a race only duplicates the lookup,
/// every writer for a key stores the same result.
static RESOLVE_MEMO: LazyLock<RwLock<HashMap<String, Option<ColorSpace>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

impl ColorSpace {
    /// All twelve spaces, in canonical order.
    pub const ALL: [ColorSpace; 12] = [
        ColorSpace::Rgb,
        ColorSpace::Hex,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Cmy,
        ColorSpace::Cmyk,
        ColorSpace::Xyz,
        ColorSpace::Yxy,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Luv,
        ColorSpace::HunterLab,
    ];

    /// Canonical identifier of this space.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Hex => "HEX",
            ColorSpace::Hsl => "HSL",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Cmy => "CMY",
            ColorSpace::Cmyk => "CMYK",
            ColorSpace::Xyz => "XYZ",
            ColorSpace::Yxy => "Yxy",
            ColorSpace::Lab => "CIELab",
            ColorSpace::Lch => "CIELch",
            ColorSpace::Luv => "CIELuv",
            ColorSpace::HunterLab => "HunterLab",
        }
    }

    /// Number of channels (HEX counts its string as one).
    pub fn channel_count(&self) -> usize {
        match self {
            ColorSpace::Hex => 1,
            ColorSpace::Cmyk => 4,
            _ => 3,
        }
    }

    /// Ordered channel labels.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ColorSpace::Rgb => &["R", "G", "B"],
            ColorSpace::Hex => &["value"],
            ColorSpace::Hsl => &["H", "S", "L"],
            ColorSpace::Hsv => &["H", "S", "V"],
            ColorSpace::Cmy => &["C", "M", "Y"],
            ColorSpace::Cmyk => &["C", "M", "Y", "K"],
            ColorSpace::Xyz => &["X", "Y", "Z"],
            ColorSpace::Yxy => &["Y", "x", "y"],
            ColorSpace::Lab => &["L", "a", "b"],
            ColorSpace::Lch => &["L", "c", "h"],
            ColorSpace::Luv => &["L", "u", "v"],
            ColorSpace::HunterLab => &["L", "a", "b"],
        }
    }

    /// Value boundaries under the given reference white.
    ///
    /// Only XYZ and Yxy depend on the white point; every other space has
    /// fixed constants.
    pub fn boundaries(&self, white: &WhitePoint) -> Boundaries {
        match self {
            ColorSpace::Rgb => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![255.0, 255.0, 255.0],
            },
            ColorSpace::Hex => Boundaries::HexRange {
                min: "#000000",
                max: "#ffffff",
            },
            ColorSpace::Hsl | ColorSpace::Hsv => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![360.0, 1.0, 1.0],
            },
            ColorSpace::Cmy => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![1.0, 1.0, 1.0],
            },
            ColorSpace::Cmyk => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0, 0.0],
                max: vec![1.0, 1.0, 1.0, 1.0],
            },
            ColorSpace::Xyz => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![white.x, white.y, white.z],
            },
            ColorSpace::Yxy => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![white.y, 1.0, 1.0],
            },
            ColorSpace::Lab | ColorSpace::HunterLab => Boundaries::Numeric {
                min: vec![0.0, -128.0, -128.0],
                max: vec![100.0, 127.0, 127.0],
            },
            ColorSpace::Lch => Boundaries::Numeric {
                min: vec![0.0, 0.0, 0.0],
                max: vec![100.0, 100.0, 360.0],
            },
            ColorSpace::Luv => Boundaries::Numeric {
                min: vec![0.0, -100.0, -100.0],
                max: vec![100.0, 100.0, 100.0],
            },
        }
    }

    /// Resolves a canonical name or recognized alias to its space.
    ///
    /// Resolution (success or failure) is memoized process-wide, keyed by the
    /// original input string, so repeated lookups are O(1) after the first.
    ///
    /// # Recognized aliases
    ///
    /// - `Hunter-Lab`, `HLab` → `HunterLab`
    /// - `CIE-L*ab`, `Lab`, `L*a*b*`, `CIELAB` → `CIELab`
    /// - `CIE-L*CH°`, `LCH`, `L*c*h*` → `CIELch`
    /// - `CIE-L*uv`, `CIELUV`, `L*u*v*` → `CIELuv`
    /// - `Hex` → `HEX`
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::ColorSpace;
    ///
    /// assert_eq!(ColorSpace::resolve("Lab").unwrap(), ColorSpace::Lab);
    /// assert!(ColorSpace::resolve("YUV").is_err());
    /// ```
    pub fn resolve(name: &str) -> ChromaResult<ColorSpace> {
        if let Some(memoized) = RESOLVE_MEMO.read().get(name) {
            return memoized.ok_or_else(|| ChromaError::UnsupportedSpace(name.to_owned()));
        }

        let resolved = Self::lookup(name);
        RESOLVE_MEMO.write().insert(name.to_owned(), resolved);
        resolved.ok_or_else(|| ChromaError::UnsupportedSpace(name.to_owned()))
    }

    fn lookup(name: &str) -> Option<ColorSpace> {
        let space = match name {
            "RGB" => ColorSpace::Rgb,
            "HEX" | "Hex" => ColorSpace::Hex,
            "HSL" => ColorSpace::Hsl,
            "HSV" => ColorSpace::Hsv,
            "CMY" => ColorSpace::Cmy,
            "CMYK" => ColorSpace::Cmyk,
            "XYZ" => ColorSpace::Xyz,
            "Yxy" => ColorSpace::Yxy,
            "CIELab" | "CIE-L*ab" | "Lab" | "L*a*b*" | "CIELAB" => ColorSpace::Lab,
            "CIELch" | "CIE-L*CH°" | "LCH" | "L*c*h*" => ColorSpace::Lch,
            "CIELuv" | "CIE-L*uv" | "CIELUV" | "L*u*v*" => ColorSpace::Luv,
            "HunterLab" | "Hunter-Lab" | "HLab" => ColorSpace::HunterLab,
            _ => return None,
        };
        Some(space)
    }

    /// Whether `channels` satisfies this space's arity and boundaries.
    pub fn validate(&self, channels: &Channels, white: &WhitePoint) -> bool {
        self.check(channels, white).is_ok()
    }

    /// Validates `channels`, reporting what failed.
    pub fn check(&self, channels: &Channels, white: &WhitePoint) -> ChromaResult<()> {
        if let ColorSpace::Hex = self {
            return check_hex(channels);
        }

        let values = channels.as_values().ok_or_else(|| ChromaError::InvalidValues {
            space: *self,
            detail: "expected numeric channels".to_owned(),
        })?;

        let Boundaries::Numeric { min, max } = self.boundaries(white) else {
            unreachable!("non-HEX spaces have numeric boundaries");
        };

        if values.len() != min.len() {
            return Err(ChromaError::InvalidValues {
                space: *self,
                detail: format!("expected {} channels, got {}", min.len(), values.len()),
            });
        }

        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v < min[i] || v > max[i] {
                return Err(ChromaError::InvalidValues {
                    space: *self,
                    detail: format!(
                        "channel {} = {} outside [{}, {}]",
                        self.labels()[i],
                        v,
                        min[i],
                        max[i]
                    ),
                });
            }
        }

        Ok(())
    }
}

fn check_hex(channels: &Channels) -> ChromaResult<()> {
    let invalid = |detail: String| ChromaError::InvalidValues {
        space: ColorSpace::Hex,
        detail,
    };

    let hex = channels
        .as_hex()
        .ok_or_else(|| invalid("expected a HEX string".to_owned()))?;

    if !HEX_PATTERN.is_match(hex) {
        return Err(invalid(format!("{hex:?} is not a 3- or 6-digit hex value")));
    }

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let decoded = u32::from_str_radix(digits, 16)
        .map_err(|e| invalid(format!("{hex:?} does not decode: {e}")))?;
    if digits.len() == 6 && decoded > 0xFFFFFF {
        return Err(invalid(format!("{hex:?} decodes outside [0, 0xFFFFFF]")));
    }

    Ok(())
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_resolve() {
        for space in ColorSpace::ALL {
            assert_eq!(ColorSpace::resolve(space.name()).unwrap(), space);
        }
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(ColorSpace::resolve("Lab").unwrap(), ColorSpace::Lab);
        assert_eq!(ColorSpace::resolve("L*a*b*").unwrap(), ColorSpace::Lab);
        assert_eq!(ColorSpace::resolve("CIELAB").unwrap(), ColorSpace::Lab);
        assert_eq!(ColorSpace::resolve("Hunter-Lab").unwrap(), ColorSpace::HunterLab);
        assert_eq!(ColorSpace::resolve("HLab").unwrap(), ColorSpace::HunterLab);
        assert_eq!(ColorSpace::resolve("LCH").unwrap(), ColorSpace::Lch);
        assert_eq!(ColorSpace::resolve("CIE-L*CH°").unwrap(), ColorSpace::Lch);
        assert_eq!(ColorSpace::resolve("CIELUV").unwrap(), ColorSpace::Luv);
        assert_eq!(ColorSpace::resolve("Hex").unwrap(), ColorSpace::Hex);
    }

    #[test]
    fn test_unknown_name_fails_and_is_memoized() {
        assert!(ColorSpace::resolve("YUV").is_err());
        // second lookup hits the memo and must fail identically
        assert!(matches!(
            ColorSpace::resolve("YUV"),
            Err(ChromaError::UnsupportedSpace(name)) if name == "YUV"
        ));
    }

    #[test]
    fn test_labels_match_boundary_arity() {
        let wp = WhitePoint::default();
        for space in ColorSpace::ALL {
            match space.boundaries(&wp) {
                Boundaries::Numeric { min, max } => {
                    assert_eq!(min.len(), space.channel_count(), "{space}");
                    assert_eq!(max.len(), space.channel_count(), "{space}");
                    assert_eq!(space.labels().len(), space.channel_count(), "{space}");
                }
                Boundaries::HexRange { .. } => {
                    assert_eq!(space, ColorSpace::Hex);
                    assert_eq!(space.labels(), ["value"]);
                }
            }
        }
    }

    #[test]
    fn test_xyz_boundaries_follow_white_point() {
        let wp = crate::white::WhitePoint::new(
            crate::white::Illuminant::A,
            crate::white::Observer::Deg2,
        );
        let Boundaries::Numeric { max, .. } = ColorSpace::Xyz.boundaries(&wp) else {
            panic!("XYZ has numeric boundaries");
        };
        assert_eq!(max, vec![109.850, 100.000, 35.585]);
    }

    #[test]
    fn test_validate_ranges() {
        let wp = WhitePoint::default();
        assert!(ColorSpace::Rgb.validate(&Channels::from([0.0, 0.0, 0.0]), &wp));
        assert!(ColorSpace::Rgb.validate(&Channels::from([255.0, 255.0, 255.0]), &wp));
        assert!(!ColorSpace::Rgb.validate(&Channels::from([256.0, 0.0, 0.0]), &wp));
        assert!(!ColorSpace::Rgb.validate(&Channels::from([-1.0, 0.0, 0.0]), &wp));
        assert!(!ColorSpace::Rgb.validate(&Channels::from([0.0, 0.0]), &wp));
        assert!(!ColorSpace::Rgb.validate(&Channels::from([f64::NAN, 0.0, 0.0]), &wp));
    }

    #[test]
    fn test_validate_hex() {
        let wp = WhitePoint::default();
        for ok in ["#ff0000", "ff0000", "#FFF", "fff", "#AbCdEf"] {
            assert!(ColorSpace::Hex.validate(&Channels::from(ok), &wp), "{ok}");
        }
        for bad in ["", "#ff00", "red", "#ff00000", "#ggg"] {
            assert!(!ColorSpace::Hex.validate(&Channels::from(bad), &wp), "{bad}");
        }
        // numeric payload is never a valid HEX
        assert!(!ColorSpace::Hex.validate(&Channels::from([0.0]), &wp));
    }
}
