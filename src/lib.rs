//! # zigbee_descriptors_rs
//!
//! A Rust library for declaring **Zigbee device descriptors**: the
//! static records a home-automation hub uses to recognize a joining
//! device and expose its endpoints as controllable entities.
//!
//! A descriptor binds a device's self-reported model string to an
//! endpoint topology and a list of capability extensions. The hub's
//! device-management framework does the actual network communication;
//! this crate only models the configuration records, validates them at
//! load time, and performs the matching/binding step over them.
//!
//! ## Quick Start
//!
//! ```
//! use zigbee_descriptors_rs::{DescriptorRegistry, DeviceHandle, devices};
//!
//! // Register the built-in descriptor for an ESP32-C6 NeoPixel light
//! // with five color zones on endpoints 10..14.
//! let mut registry = DescriptorRegistry::new();
//! registry.register(devices::espressif::diy_c6_pix5().unwrap());
//!
//! // A device joins and reports its model string.
//! let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
//! let bound = registry.bind(&handle).unwrap();
//!
//! // Five independently addressable zones, each with on/off,
//! // brightness and xy + hue/saturation color controls.
//! assert_eq!(bound.entities().len(), 5);
//! ```
//!
//! ## Features
//!
//! - **Validated descriptors**: schema checks run once at build/load
//!   time with [`DeviceDescriptor::builder`] — non-empty identifiers,
//!   endpoint ids within 1-255, unique names and ids
//! - **Byte-exact matching**: identifiers match the Basic cluster's
//!   reported model string exactly, with no normalization
//! - **Endpoint resolvers**: constant maps for most devices, or a
//!   handle-dependent [`EndpointResolver::Custom`] strategy
//! - **Light extensions**: one [`LightExtend`] covers any subset of
//!   endpoints and expands into per-endpoint entities with their own
//!   [`LightState`]
//! - **Loader wire shape**: descriptors round-trip through the
//!   framework's `{zigbeeModel, model, vendor, description, endpoint,
//!   meta, extend}` JSON contract
//!
//! ## Scope
//!
//! The crate owns no runtime resources: no mesh protocol, no command
//! dispatch, no color-space conversion, no discovery or pairing. Those
//! belong to the consuming framework.

mod descriptor;
pub mod devices;
mod endpoint;
mod entity;
mod errors;
mod extend;
mod handle;
mod registry;
mod types;

// Re-export public API
pub use descriptor::{DescriptorBuilder, DeviceDescriptor, Meta};
pub use endpoint::{EndpointMap, EndpointResolver};
pub use entity::{Control, LightEntity, LightState};
pub use errors::Error;
pub use extend::LightExtend;
pub use handle::DeviceHandle;
pub use registry::{BoundDevice, DescriptorRegistry};
pub use types::{ColorConfig, ColorMode, EndpointId, HueSaturation, Level, Xy};
