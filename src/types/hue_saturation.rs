//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

/// A chromaticity expressed as hue and saturation:
/// - Hue: the color angle on the color wheel (0-360 degrees)
/// - Saturation: the intensity of the color (0-100 percent)
///
/// The value is carried as-is; converting between color spaces is the
/// consuming framework's job.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_descriptors_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0, 100).is_some());
    /// assert!(HueSaturation::create(120, 50).is_some());
    /// assert!(HueSaturation::create(361, 50).is_none());
    /// assert!(HueSaturation::create(180, 101).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if hue <= 360 && saturation <= 100 {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Get the hue value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }
}
