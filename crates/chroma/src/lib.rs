//! # chroma
//!
//! Colorimetric conversion between twelve color spaces, wrapped in an
//! immutable [`Color`] value type.
//!
//! Supported spaces: RGB, HEX, HSL, HSV, CMY, CMYK, XYZ, Yxy, CIELab,
//! CIELch, CIELuv, and Hunter Lab. Every ordered pair converts directly;
//! CIE spaces take a reference white (D65/2° by default, any standard
//! illuminant/observer via [`Color::to_with_white`]).
//!
//! # Architecture
//!
//! - `chroma-core` - space metadata, boundaries, white points, errors
//! - `chroma-graph` - the pure conversion formulas ([`convert`])
//! - `chroma` (this crate) - the validated [`Color`] facade
//!
//! # Quick Start
//!
//! ```rust
//! use chroma::{Color, ColorSpace};
//!
//! let red = Color::new(ColorSpace::Rgb, [255.0, 0.0, 0.0])?;
//!
//! let lab = red.to_lab()?;
//! let hex = red.to_hex()?;
//! assert_eq!(hex.hex_value(), Some("#ff0000"));
//!
//! let blue = Color::from_hex("#00f")?;
//! assert!(red.delta_e(&blue)? > 100.0);
//! # Ok::<(), chroma::ChromaError>(())
//! ```
//!
//! # Caveats
//!
//! Conversion output is trusted, not re-validated: a handful of nominal
//! boundaries are narrower than the space's true image (CIELch chroma of a
//! saturated sRGB primary exceeds 100), and rejecting such output would make
//! legal conversions fail. Boundaries apply to construction and
//! [`Color::set_channel`] only.
//!
//! # Dependencies
//!
//! - [`chroma_core`] / [`chroma_graph`] - the layers described above
//! - `serde` - `Color` serializes as a label→value map
//!
//! # Used By
//!
//! - downstream tooling needing device/perceptual color math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;

pub use color::Color;

pub use chroma_core::{
    Boundaries, Channels, ChromaError, ChromaResult, ColorSpace, Illuminant, Observer, WhitePoint,
};
pub use chroma_graph::convert;
