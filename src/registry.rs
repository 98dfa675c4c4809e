//! Descriptor registration and device binding.

use log::{debug, warn};
use uuid::Uuid;

use crate::descriptor::DeviceDescriptor;
use crate::endpoint::EndpointMap;
use crate::entity::LightEntity;
use crate::errors::Error;
use crate::handle::DeviceHandle;

type Result<T> = std::result::Result<T, Error>;

/// The set of descriptors a hub knows about.
///
/// This is the matching/binding step of the device-management
/// framework: given a joining device's handle, find the descriptor
/// whose identifiers exactly equal the reported model, resolve its
/// endpoint topology, and instantiate its capability extensions.
///
/// # Example
///
/// ```
/// use zigbee_descriptors_rs::{DescriptorRegistry, DeviceHandle, devices};
///
/// let mut registry = DescriptorRegistry::new();
/// registry.register(devices::espressif::diy_c6_pix5().unwrap());
///
/// let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
/// let bound = registry.bind(&handle).unwrap();
/// assert_eq!(bound.entities().len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: Vec<DeviceDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor. Descriptors are consulted in registration
    /// order.
    pub fn register(&mut self, descriptor: DeviceDescriptor) {
        debug!("registered descriptor for model {:?}", descriptor.model());
        self.descriptors.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Find the descriptor whose identifiers exactly equal the
    /// reported model string, if any.
    pub fn match_model(&self, reported_model: &str) -> Option<&DeviceDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.matches(reported_model))
    }

    /// Bind a joining device to its descriptor.
    ///
    /// A device whose reported model matches nothing is not an error
    /// condition of the descriptors themselves, but the caller gets
    /// [`Error::Unrecognized`] so it can surface "device not
    /// recognized". Extension application errors mean the matched
    /// descriptor is misconfigured.
    pub fn bind(&self, handle: &DeviceHandle) -> Result<BoundDevice> {
        let reported_model = handle
            .model()
            .ok_or_else(|| Error::no_reported_model(handle.ieee_address()))?;

        let Some(descriptor) = self.match_model(reported_model) else {
            debug!(
                "no descriptor for {:?} reported by {}",
                reported_model,
                handle.ieee_address()
            );
            return Err(Error::unrecognized(reported_model));
        };

        let endpoints = descriptor.resolve_endpoints(handle);
        let mut entities = Vec::new();
        for extend in descriptor.extends() {
            match extend.apply(&endpoints) {
                Ok(generated) => entities.extend(generated),
                Err(err) => {
                    warn!("rejecting extension on {:?}: {}", descriptor.model(), err);
                    return Err(err);
                }
            }
        }

        debug!(
            "bound {} as {:?} with {} entities",
            handle.ieee_address(),
            descriptor.model(),
            entities.len()
        );

        Ok(BoundDevice {
            id: Uuid::new_v4(),
            model: String::from(descriptor.model()),
            ieee_address: String::from(handle.ieee_address()),
            endpoints,
            entities,
        })
    }
}

/// A device instance bound to a descriptor, with its resolved endpoint
/// map and instantiated entities.
///
/// Re-binding the same physical device produces a fresh instance with
/// a fresh id; entity state never survives a re-bind.
#[derive(Debug, Clone)]
pub struct BoundDevice {
    id: Uuid,
    model: String,
    ieee_address: String,
    endpoints: EndpointMap,
    entities: Vec<LightEntity>,
}

impl BoundDevice {
    /// Get the instance id assigned at bind time.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the model name of the matched descriptor.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the IEEE address of the physical device.
    pub fn ieee_address(&self) -> &str {
        &self.ieee_address
    }

    /// Get the resolved endpoint map.
    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    /// Get all entities, in registration order.
    pub fn entities(&self) -> &[LightEntity] {
        &self.entities
    }

    /// Look up an entity by its endpoint name.
    pub fn entity(&self, endpoint_name: &str) -> Option<&LightEntity> {
        self.entities
            .iter()
            .find(|entity| entity.endpoint_name() == endpoint_name)
    }

    /// Look up an entity by its endpoint name, for state updates.
    pub fn entity_mut(&mut self, endpoint_name: &str) -> Option<&mut LightEntity> {
        self.entities
            .iter_mut()
            .find(|entity| entity.endpoint_name() == endpoint_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extend::LightExtend;

    fn registry_with(models: &[&str]) -> DescriptorRegistry {
        let mut registry = DescriptorRegistry::new();
        for model in models {
            let descriptor = DeviceDescriptor::builder(model)
                .zigbee_model(model)
                .endpoints(EndpointMap::from_entries(&[("main", 1)]).unwrap())
                .extend(LightExtend::new(&["main"]))
                .build()
                .unwrap();
            registry.register(descriptor);
        }
        registry
    }

    #[test]
    fn test_match_model_is_exact() {
        let registry = registry_with(&["LAMP-A", "LAMP-B"]);
        assert_eq!(registry.match_model("LAMP-B").unwrap().model(), "LAMP-B");
        assert!(registry.match_model("lamp-b").is_none());
        assert!(registry.match_model("LAMP-C").is_none());
    }

    #[test]
    fn test_bind_unrecognized_model() {
        let registry = registry_with(&["LAMP-A"]);
        let handle = DeviceHandle::new("0x1", Some("LAMP-X"));
        assert_eq!(
            registry.bind(&handle).unwrap_err(),
            Error::unrecognized("LAMP-X")
        );
    }

    #[test]
    fn test_bind_requires_reported_model() {
        let registry = registry_with(&["LAMP-A"]);
        let handle = DeviceHandle::new("0x1", None);
        assert_eq!(
            registry.bind(&handle).unwrap_err(),
            Error::no_reported_model("0x1")
        );
    }

    #[test]
    fn test_rebind_creates_fresh_instance() {
        let registry = registry_with(&["LAMP-A"]);
        let handle = DeviceHandle::new("0x1", Some("LAMP-A"));

        let first = registry.bind(&handle).unwrap();
        let second = registry.bind(&handle).unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(first.endpoints(), second.endpoints());
    }

    #[test]
    fn test_entity_lookup_by_endpoint_name() {
        let registry = registry_with(&["LAMP-A"]);
        let mut bound = registry.bind(&DeviceHandle::new("0x1", Some("LAMP-A"))).unwrap();

        assert!(bound.entity("main").is_some());
        assert!(bound.entity("ep99").is_none());

        bound.entity_mut("main").unwrap().state_mut().set_on(true);
        assert!(bound.entity("main").unwrap().state().on());
    }
}
