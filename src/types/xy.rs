//! CIE 1931 xy chromaticity coordinates.

use serde::{Deserialize, Serialize};

/// A chromaticity expressed as CIE 1931 xy coordinates, each in 0.0-1.0.
///
/// Carried as-is; no gamut clamping or color-space conversion happens
/// in this crate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Xy {
    x: f64,
    y: f64,
}

impl Xy {
    /// Create a new coordinate pair.
    ///
    /// Returns `None` if either component falls outside 0.0-1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_descriptors_rs::Xy;
    ///
    /// assert!(Xy::create(0.3127, 0.3290).is_some()); // D65 white point
    /// assert!(Xy::create(1.2, 0.5).is_none());
    /// ```
    pub fn create(x: f64, y: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
            Some(Xy { x, y })
        } else {
            None
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}
