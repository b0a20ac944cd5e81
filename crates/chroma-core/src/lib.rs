//! # chroma-core
//!
//! Core types for the chroma color conversion workspace.
//!
//! This crate is the leaf of the workspace: it defines the closed set of
//! supported color spaces with their static metadata (channel counts, labels,
//! value boundaries), informal-name resolution, reference white points, and
//! the shared error type.
//!
//! # Architecture
//!
//! ```text
//!        chroma
//!          |
//!     chroma-graph
//!          |
//!     chroma-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::{Channels, ColorSpace, WhitePoint};
//!
//! let space = ColorSpace::resolve("Lab").unwrap();
//! assert_eq!(space, ColorSpace::Lab);
//!
//! let ok = space.validate(&Channels::from([50.0, 20.0, -20.0]), &WhitePoint::default());
//! assert!(ok);
//! ```
//!
//! # Used By
//!
//! - `chroma-graph` - pairwise conversion formulas
//! - `chroma` - the `Color` facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod channels;
mod error;
mod space;
mod white;

pub use channels::Channels;
pub use error::{ChromaError, ChromaResult};
pub use space::{Boundaries, ColorSpace};
pub use white::{Illuminant, Observer, WhitePoint};
