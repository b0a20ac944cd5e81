//! # chroma-graph
//!
//! Pairwise conversion formulas between the twelve supported color spaces.
//!
//! # Design
//!
//! The graph is fully connected through two hub spaces, RGB and XYZ: only
//! edges anchored at a hub (plus a few direct shortcuts like CMY↔CMYK and
//! CIELab↔CIELch) are hand-written. Every other ordered pair is a fixed
//! composition of 2 to 4 edges baked in as a direct function; the graph's
//! shape never changes, so there is no runtime path search.
//!
//! ```text
//! HEX  HSL  HSV  CMY──CMYK          Yxy  CIELab──CIELch
//!   \   |   /   /                     \    |
//!    \  |  /   /                       \   |
//!      RGB ═══════════ XYZ ──────────── CIELuv
//!                       \
//!                        HunterLab
//! ```
//!
//! Every formula is pure: no shared state, no I/O. Steps whose domain
//! excludes an input (Yxy with y = 0, CIELuv with L = 0, chromaticity of
//! black) fail fast with [`ChromaError::NumericDomain`] instead of
//! propagating `NaN` or `Inf`.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::{Channels, ColorSpace, WhitePoint};
//! use chroma_graph::convert;
//!
//! let hsl = convert(
//!     ColorSpace::Rgb,
//!     ColorSpace::Hsl,
//!     &Channels::from([255.0, 0.0, 0.0]),
//!     &WhitePoint::default(),
//! )
//! .unwrap();
//! assert_eq!(hsl.as_values().unwrap(), [0.0, 1.0, 0.5]);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma_core`] - space metadata, channel payloads, errors
//!
//! # Used By
//!
//! - `chroma` - the `Color` facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;

pub mod cmy;
pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod hunter;
pub mod lab;
pub mod lch;
pub mod luv;
pub mod rgb;
pub mod xyz;
pub mod yxy;

pub use convert::convert;

// Re-export the core types the conversion API is written in terms of.
pub use chroma_core::{Channels, ChromaError, ChromaResult, ColorSpace, WhitePoint};
