//! Opaque device handles supplied by the framework.

use serde::{Deserialize, Serialize};

/// The per-device handle the framework passes to an endpoint resolver.
///
/// Carries the attributes the device reported at join time. The
/// `model` field is the Basic cluster's self-reported model string and
/// is matched byte-for-byte against descriptor identifiers.
///
/// # Example
///
/// ```
/// use zigbee_descriptors_rs::DeviceHandle;
///
/// let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
/// assert_eq!(handle.model(), Some("DIY-C6-PIX5"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHandle {
    ieee_address: String,
    model: Option<String>,
    network_address: Option<u16>,
}

impl DeviceHandle {
    /// Create a handle for a device with the given IEEE address and
    /// optional self-reported model string.
    pub fn new(ieee_address: &str, model: Option<&str>) -> Self {
        DeviceHandle {
            ieee_address: String::from(ieee_address),
            model: model.map(String::from),
            network_address: None,
        }
    }

    /// Record the short network address the device joined with.
    pub fn set_network_address(&mut self, address: u16) {
        self.network_address = Some(address);
    }

    /// Get the IEEE address of this device.
    pub fn ieee_address(&self) -> &str {
        &self.ieee_address
    }

    /// Get the self-reported model string, if the device sent one.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Get the short network address, if known.
    pub fn network_address(&self) -> Option<u16> {
        self.network_address
    }
}
