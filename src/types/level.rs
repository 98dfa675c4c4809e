//! Brightness levels.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Brightness level from 0 to 254, the level-control convention used
/// by the consuming framework.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level {
    value: u8,
}

impl Level {
    const MAX: u8 = 254;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-254).
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Level { value })
        } else {
            None
        }
    }

    /// Returns full brightness (254) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        if value <= Self::MAX {
            Level { value }
        } else {
            Level { value: Self::MAX }
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Level::create(value).ok_or(Error::LevelOutOfRange { value })
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.value
    }
}
