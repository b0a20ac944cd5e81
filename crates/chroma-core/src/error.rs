//! Error types for color operations.
//!
//! All failures in this workspace are local, synchronous, and non-retryable:
//! pure computation has no transient failure mode. A conversion either yields
//! a fully valid result or fails with one of the variants below.

use thiserror::Error;

use crate::space::ColorSpace;

/// Color operation error.
///
/// Covers every failure mode of construction, channel access, and conversion:
/// - Unknown space names (not canonical, not a known alias)
/// - Values failing arity or range validation
/// - Channel indices beyond the space's channel count
/// - Conversion pairs with no defined formula
/// - Numeric domain failures (division by zero in a formula)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChromaError {
    /// The space name cannot be resolved to a supported color space.
    #[error("unsupported color space: {0}")]
    UnsupportedSpace(String),

    /// Values fail arity or range validation for the resolved space.
    #[error("invalid {space} values: {detail}")]
    InvalidValues {
        /// Space the values were validated against.
        space: ColorSpace,
        /// What failed.
        detail: String,
    },

    /// Channel index beyond the space's channel count.
    #[error("illegal channel index {index} for {space} ({count} channels)")]
    IllegalChannelIndex {
        /// Space of the color.
        space: ColorSpace,
        /// Requested index.
        index: usize,
        /// Number of addressable channels.
        count: usize,
    },

    /// No formula defined for this ordered pair.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source color space.
        from: ColorSpace,
        /// Target color space.
        to: ColorSpace,
    },

    /// A formula hit a value outside its numeric domain.
    ///
    /// Raised instead of silently propagating `NaN`/`Inf`, e.g. Yxy with
    /// y = 0 or CIELuv with L = 0.
    #[error("numeric domain failure in {conversion}: {detail}")]
    NumericDomain {
        /// Conversion step that failed, e.g. `"Yxy -> XYZ"`.
        conversion: &'static str,
        /// The offending condition.
        detail: &'static str,
    },
}

/// Result type for color operations.
pub type ChromaResult<T> = Result<T, ChromaError>;
