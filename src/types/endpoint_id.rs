//! Numeric endpoint identifiers.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A Zigbee endpoint id from 1 to 255.
///
/// Endpoint 0 is reserved by the protocol for the device itself, so a
/// descriptor can never address it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct EndpointId {
    value: u8,
}

impl EndpointId {
    const MIN: u8 = 1;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-255).
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_descriptors_rs::EndpointId;
    ///
    /// assert!(EndpointId::create(10).is_some());
    /// assert!(EndpointId::create(0).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value >= Self::MIN {
            Some(EndpointId { value })
        } else {
            None
        }
    }
}

impl TryFrom<u8> for EndpointId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        EndpointId::create(value).ok_or(Error::EndpointIdOutOfRange { id: value })
    }
}

impl From<EndpointId> for u8 {
    fn from(id: EndpointId) -> u8 {
        id.value
    }
}
