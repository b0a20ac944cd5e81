//! Reference white points.
//!
//! XYZ tristimulus values of a perfect reflecting diffuser, indexed by
//! illuminant and observer angle. These normalize the CIELab, CIELuv, and Yxy
//! conversions and set the upper boundary of the XYZ space.
//!
//! # Observers
//!
//! - 2° (CIE 1931)
//! - 10° (CIE 1964)

use serde::{Deserialize, Serialize};

/// Standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illuminant {
    /// Incandescent / tungsten.
    A,
    /// Average daylight (obsolete).
    C,
    /// Horizon light.
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight. The sRGB reference.
    D65,
    /// North sky daylight.
    D75,
    /// Cool white fluorescent.
    F2,
    /// Daylight fluorescent.
    F7,
    /// Narrow-band white fluorescent.
    F11,
}

/// Standard observer angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// 2° (CIE 1931).
    Deg2,
    /// 10° (CIE 1964).
    Deg10,
}

/// Reference white tristimulus values, Y normalized to 100.
///
/// # Example
///
/// ```rust
/// use chroma_core::{Illuminant, Observer, WhitePoint};
///
/// let d65 = WhitePoint::new(Illuminant::D65, Observer::Deg2);
/// assert_eq!(d65, WhitePoint::default());
/// assert_eq!(d65.x, 95.047);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhitePoint {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus, always 100.
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

impl WhitePoint {
    /// D65 / 2°, the default reference white.
    pub const D65_2: WhitePoint = WhitePoint {
        x: 95.047,
        y: 100.000,
        z: 108.883,
    };

    /// Looks up the tristimulus values for an illuminant/observer pair.
    pub fn new(illuminant: Illuminant, observer: Observer) -> WhitePoint {
        use Illuminant::*;
        let (x, z) = match (illuminant, observer) {
            (A, Observer::Deg2) => (109.850, 35.585),
            (A, Observer::Deg10) => (111.144, 35.200),
            (C, Observer::Deg2) => (98.074, 118.232),
            (C, Observer::Deg10) => (97.285, 116.145),
            (D50, Observer::Deg2) => (96.422, 82.521),
            (D50, Observer::Deg10) => (96.720, 81.427),
            (D55, Observer::Deg2) => (95.682, 92.149),
            (D55, Observer::Deg10) => (95.799, 90.926),
            (D65, Observer::Deg2) => (95.047, 108.883),
            (D65, Observer::Deg10) => (94.811, 107.304),
            (D75, Observer::Deg2) => (94.972, 122.638),
            (D75, Observer::Deg10) => (94.416, 120.641),
            (F2, Observer::Deg2) => (99.187, 67.395),
            (F2, Observer::Deg10) => (103.280, 69.026),
            (F7, Observer::Deg2) => (95.044, 108.755),
            (F7, Observer::Deg10) => (95.792, 107.687),
            (F11, Observer::Deg2) => (100.966, 64.370),
            (F11, Observer::Deg10) => (103.866, 65.627),
        };
        WhitePoint { x, y: 100.000, z }
    }

    /// The CIE u′ chromaticity of this white point.
    #[inline]
    pub fn u_prime(&self) -> f64 {
        (4.0 * self.x) / (self.x + 15.0 * self.y + 3.0 * self.z)
    }

    /// The CIE v′ chromaticity of this white point.
    #[inline]
    pub fn v_prime(&self) -> f64 {
        (9.0 * self.y) / (self.x + 15.0 * self.y + 3.0 * self.z)
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        WhitePoint::D65_2
    }
}
