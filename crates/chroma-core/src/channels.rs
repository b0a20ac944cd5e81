//! Channel value payloads.
//!
//! Every space but HEX carries an ordered sequence of numeric channels;
//! HEX carries a single string. [`Channels`] is the common payload type the
//! validation and conversion layers operate on.

use serde::{Deserialize, Serialize};

/// Ordered channel values of a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Channels {
    /// Numeric channels, one per channel of the space.
    Values(Vec<f64>),
    /// A HEX string such as `"#ff0000"` or `"fff"`.
    Hex(String),
}

impl Channels {
    /// Number of stored channels (1 for HEX).
    pub fn len(&self) -> usize {
        match self {
            Channels::Values(v) => v.len(),
            Channels::Hex(_) => 1,
        }
    }

    /// Whether no channel is stored.
    pub fn is_empty(&self) -> bool {
        match self {
            Channels::Values(v) => v.is_empty(),
            Channels::Hex(_) => false,
        }
    }

    /// Numeric channels, if this is not a HEX payload.
    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Channels::Values(v) => Some(v),
            Channels::Hex(_) => None,
        }
    }

    /// The HEX string, if this is a HEX payload.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Channels::Values(_) => None,
            Channels::Hex(s) => Some(s),
        }
    }
}

impl From<Vec<f64>> for Channels {
    fn from(values: Vec<f64>) -> Self {
        Channels::Values(values)
    }
}

impl From<&[f64]> for Channels {
    fn from(values: &[f64]) -> Self {
        Channels::Values(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Channels {
    fn from(values: [f64; N]) -> Self {
        Channels::Values(values.to_vec())
    }
}

impl From<String> for Channels {
    fn from(hex: String) -> Self {
        Channels::Hex(hex)
    }
}

impl From<&str> for Channels {
    fn from(hex: &str) -> Self {
        Channels::Hex(hex.to_owned())
    }
}
