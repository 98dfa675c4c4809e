//! Color-space modes a light control can accept.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A color-space representation for issuing color commands.
///
/// Both modes may be enabled on the same endpoint, letting the
/// consuming controller pick either representation per command.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// CIE 1931 xy chromaticity coordinates.
    Xy,
    /// Hue angle plus saturation percentage.
    Hs,
}

impl ColorMode {
    /// Look up a mode by its lowercase wire name ("xy" or "hs").
    pub fn create(name: &str) -> Option<Self> {
        ColorMode::iter().find(|mode| mode.to_string() == name)
    }
}

/// The set of color modes a capability extension enables.
///
/// Preserves the configured order and silently drops duplicates. An
/// empty config means the generated entities expose no color control.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(from = "RawColorConfig")]
pub struct ColorConfig {
    modes: Vec<ColorMode>,
}

#[derive(Deserialize)]
struct RawColorConfig {
    #[serde(default)]
    modes: Vec<ColorMode>,
}

impl From<RawColorConfig> for ColorConfig {
    fn from(raw: RawColorConfig) -> Self {
        ColorConfig::with_modes(&raw.modes)
    }
}

impl ColorConfig {
    /// Create an empty config (no color control).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from a list of modes, keeping first occurrences.
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_descriptors_rs::{ColorConfig, ColorMode};
    ///
    /// let config = ColorConfig::with_modes(&[ColorMode::Xy, ColorMode::Hs, ColorMode::Xy]);
    /// assert_eq!(config.modes(), &[ColorMode::Xy, ColorMode::Hs]);
    /// ```
    pub fn with_modes(modes: &[ColorMode]) -> Self {
        let mut config = ColorConfig::new();
        for mode in modes {
            config.push(*mode);
        }
        config
    }

    /// Add a mode, keeping the config duplicate-free.
    pub fn push(&mut self, mode: ColorMode) {
        if !self.modes.contains(&mode) {
            self.modes.push(mode);
        }
    }

    pub fn modes(&self) -> &[ColorMode] {
        &self.modes
    }

    pub fn contains(&self, mode: ColorMode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
