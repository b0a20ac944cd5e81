//! The immutable [`Color`] value type.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use chroma_core::{Channels, ChromaError, ChromaResult, ColorSpace, WhitePoint};

/// A color: a space identifier plus validated channel values.
///
/// A `Color` is never observably invalid: construction validates against the
/// space's boundaries, conversions produce trusted formula output, and
/// in-place channel mutation re-validates the new value.
///
/// # Example
///
/// ```rust
/// use chroma::{Color, ColorSpace};
///
/// let red = Color::new(ColorSpace::Rgb, [255.0, 0.0, 0.0]).unwrap();
/// let hex = red.to_hex().unwrap();
/// assert_eq!(hex.hex_value(), Some("#ff0000"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    space: ColorSpace,
    channels: Channels,
    white: WhitePoint,
}

impl Color {
    /// Constructs a color in `space`, validating the values against the
    /// space's boundaries under the default (D65/2°) reference white.
    ///
    /// # Errors
    ///
    /// `InvalidValues` on arity or range failure.
    pub fn new(space: ColorSpace, channels: impl Into<Channels>) -> ChromaResult<Color> {
        Self::new_with_white(space, channels, &WhitePoint::default())
    }

    /// Constructs a color validated under an explicit reference white.
    ///
    /// Only the XYZ and Yxy boundaries depend on the white point. The white
    /// point is kept on the color: later mutation and plain [`Color::to`]
    /// conversions use it, so a color built under illuminant A is never
    /// re-judged against D65 bounds.
    pub fn new_with_white(
        space: ColorSpace,
        channels: impl Into<Channels>,
        white: &WhitePoint,
    ) -> ChromaResult<Color> {
        let channels = channels.into();
        space.check(&channels, white)?;
        Ok(Color {
            space,
            channels,
            white: *white,
        })
    }

    /// Constructs a color from a space name or recognized alias.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma::Color;
    ///
    /// let a = Color::with_space_name("Lab", [50.0, 20.0, 20.0]).unwrap();
    /// let b = Color::with_space_name("CIELab", [50.0, 20.0, 20.0]).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn with_space_name(name: &str, channels: impl Into<Channels>) -> ChromaResult<Color> {
        Self::new(ColorSpace::resolve(name)?, channels)
    }

    /// Constructs a HEX color from its string notation.
    pub fn from_hex(hex: &str) -> ChromaResult<Color> {
        Self::new(ColorSpace::Hex, hex)
    }

    /// The color's space.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The raw channel payload.
    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    /// The reference white this color was validated under.
    pub fn white_point(&self) -> &WhitePoint {
        &self.white
    }

    /// Converts to `target` under the color's own reference white (D65/2°
    /// unless constructed via [`Color::new_with_white`]).
    ///
    /// Converting to the current space returns a clone without recomputation.
    /// The formula output is trusted and not re-validated against the target
    /// boundaries; see the crate documentation for the caveat on spaces whose
    /// nominal bounds are narrower than their image (CIELch chroma).
    pub fn to(&self, target: ColorSpace) -> ChromaResult<Color> {
        self.to_with_white(target, &self.white)
    }

    /// Converts to `target` under an explicit reference white.
    ///
    /// The result carries that white point.
    pub fn to_with_white(&self, target: ColorSpace, white: &WhitePoint) -> ChromaResult<Color> {
        if target == self.space {
            return Ok(self.clone());
        }

        let channels = chroma_graph::convert(self.space, target, &self.channels, white)?;
        Ok(Color {
            space: target,
            channels,
            white: *white,
        })
    }

    /// Converts to a space given by name or recognized alias.
    pub fn to_named(&self, name: &str) -> ChromaResult<Color> {
        self.to(ColorSpace::resolve(name)?)
    }

    /// Perceptual distance (Delta-E, CIE76) to another color.
    ///
    /// Both colors are converted to CIELab and the Euclidean distance over
    /// (L, a, b) is returned. Symmetric; zero for identical colors.
    pub fn delta_e(&self, other: &Color) -> ChromaResult<f64> {
        let a = self.to(ColorSpace::Lab)?;
        let b = other.to(ColorSpace::Lab)?;

        // Lab channels are always numeric triples
        let a = a.channels.as_values().ok_or(ChromaError::UnsupportedConversion {
            from: self.space,
            to: ColorSpace::Lab,
        })?.to_vec();
        let b = b.channels.as_values().ok_or(ChromaError::UnsupportedConversion {
            from: other.space,
            to: ColorSpace::Lab,
        })?.to_vec();

        Ok(((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2) + (b[2] - a[2]).powi(2)).sqrt())
    }

    /// The numeric channel at `index`.
    ///
    /// # Errors
    ///
    /// `IllegalChannelIndex` if the index does not exist; `InvalidValues` for
    /// HEX colors, whose single channel is a string (use [`Color::hex_value`]).
    pub fn channel(&self, index: usize) -> ChromaResult<f64> {
        let values = self.numeric_channels()?;
        values
            .get(index)
            .copied()
            .ok_or(ChromaError::IllegalChannelIndex {
                space: self.space,
                index,
                count: values.len(),
            })
    }

    /// Replaces the numeric channel at `index`.
    ///
    /// The index must already exist (channels never grow or shrink) and the
    /// new value must lie within that channel's boundary under the color's
    /// own white point, so the color stays valid through mutation.
    pub fn set_channel(&mut self, index: usize, value: f64) -> ChromaResult<()> {
        self.numeric_channels()?;

        let candidate = {
            let Channels::Values(values) = &self.channels else {
                unreachable!("numeric_channels rejected HEX");
            };
            if index >= values.len() {
                return Err(ChromaError::IllegalChannelIndex {
                    space: self.space,
                    index,
                    count: values.len(),
                });
            }
            let mut candidate = values.clone();
            candidate[index] = value;
            candidate
        };

        self.space
            .check(&Channels::Values(candidate.clone()), &self.white)?;
        self.channels = Channels::Values(candidate);
        Ok(())
    }

    /// The HEX string, if this color is in the HEX space.
    pub fn hex_value(&self) -> Option<&str> {
        self.channels.as_hex()
    }

    /// Ordered (label, value) pairs; `None` for HEX colors.
    pub fn labeled(&self) -> Option<Vec<(&'static str, f64)>> {
        let values = self.channels.as_values()?;
        Some(self.space.labels().iter().copied().zip(values.iter().copied()).collect())
    }

    fn numeric_channels(&self) -> ChromaResult<&[f64]> {
        self.channels.as_values().ok_or_else(|| ChromaError::InvalidValues {
            space: self.space,
            detail: "HEX stores a string, not numeric channels".to_owned(),
        })
    }
}

macro_rules! conversion_sugar {
    ($($(#[$doc:meta])* $fn_name:ident => $variant:ident),* $(,)?) => {
        impl Color {
            $(
                $(#[$doc])*
                pub fn $fn_name(&self) -> ChromaResult<Color> {
                    self.to(ColorSpace::$variant)
                }
            )*
        }
    };
}

conversion_sugar! {
    /// Converts to RGB.
    to_rgb => Rgb,
    /// Converts to HEX.
    to_hex => Hex,
    /// Converts to HSL.
    to_hsl => Hsl,
    /// Converts to HSV.
    to_hsv => Hsv,
    /// Converts to CMY.
    to_cmy => Cmy,
    /// Converts to CMYK.
    to_cmyk => Cmyk,
    /// Converts to XYZ.
    to_xyz => Xyz,
    /// Converts to Yxy.
    to_yxy => Yxy,
    /// Converts to CIELab.
    to_lab => Lab,
    /// Converts to CIELch.
    to_lch => Lch,
    /// Converts to CIELuv.
    to_luv => Luv,
    /// Converts to Hunter Lab.
    to_hunter_lab => HunterLab,
}

/// Serializes as a map from channel label to value, e.g.
/// `{"L": 53.2, "a": 80.1, "b": 67.2}` (HEX: `{"value": "#ff0000"}`).
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let labels = self.space.labels();
        let mut map = serializer.serialize_map(Some(labels.len()))?;
        match &self.channels {
            Channels::Values(values) => {
                for (label, value) in labels.iter().zip(values) {
                    map.serialize_entry(label, value)?;
                }
            }
            Channels::Hex(hex) => {
                map.serialize_entry(&labels[0], hex)?;
            }
        }
        map.end()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.space)?;
        match &self.channels {
            Channels::Values(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
            }
            Channels::Hex(hex) => f.write_str(hex)?,
        }
        f.write_str(")")
    }
}
