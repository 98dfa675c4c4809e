//! Endpoint maps and the resolver strategy that produces them.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::Error;
use crate::handle::DeviceHandle;
use crate::types::EndpointId;

type Result<T> = std::result::Result<T, Error>;

/// Mapping from symbolic endpoint names to numeric wire endpoint ids.
///
/// Preserves insertion order, which becomes entity-suffix order in the
/// consuming framework. Names and ids are both unique; `insert`
/// rejects duplicates of either.
///
/// # Example
///
/// ```
/// use zigbee_descriptors_rs::EndpointMap;
///
/// let map = EndpointMap::from_entries(&[("left", 1), ("right", 2)]).unwrap();
/// assert_eq!(map.get("left").unwrap().value(), 1);
/// assert!(map.get("center").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointMap {
    entries: Vec<(String, EndpointId)>,
}

impl EndpointMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from name/id pairs, in order.
    pub fn from_entries(entries: &[(&str, u8)]) -> Result<Self> {
        let mut map = EndpointMap::new();
        for (name, id) in entries {
            map.insert(name, *id)?;
        }
        Ok(map)
    }

    /// Append an entry, enforcing the uniqueness invariants.
    pub fn insert(&mut self, name: &str, id: u8) -> Result<()> {
        let id = EndpointId::try_from(id)?;
        if self.contains(name) {
            return Err(Error::duplicate_name(name));
        }
        if self.entries.iter().any(|(_, existing)| *existing == id) {
            return Err(Error::duplicate_id(name, id.value()));
        }
        self.entries.push((String::from(name), id));
        Ok(())
    }

    /// Look up the wire id for a symbolic name.
    pub fn get(&self, name: &str) -> Option<EndpointId> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, id)| *id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry_name, _)| entry_name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EndpointId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

// The wire form is a plain JSON object, `{"ep10": 10, ...}`, in entry
// order. Loading re-runs the uniqueness checks.
impl Serialize for EndpointMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, id) in &self.entries {
            map.serialize_entry(name, &id.value())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EndpointMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EndpointMapVisitor;

        impl<'de> Visitor<'de> for EndpointMapVisitor {
            type Value = EndpointMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of endpoint names to ids")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<EndpointMap, A::Error> {
                let mut map = EndpointMap::new();
                while let Some((name, id)) = access.next_entry::<String, u8>()? {
                    map.insert(&name, id).map_err(de::Error::custom)?;
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(EndpointMapVisitor)
    }
}

/// How a descriptor derives the endpoint map for a concrete device.
///
/// Most descriptors ship a [`EndpointResolver::Fixed`] map. The
/// [`EndpointResolver::Custom`] variant exists for device families
/// whose endpoint layout depends on the joined device, e.g. computed
/// from its reported endpoint list. Resolution is deterministic, total
/// and side-effect-free either way.
#[derive(Debug, Clone)]
pub enum EndpointResolver {
    /// The same map for every device instance.
    Fixed(EndpointMap),
    /// Computed from the device handle.
    Custom(fn(&DeviceHandle) -> EndpointMap),
}

impl EndpointResolver {
    /// Resolve the endpoint map for the given device.
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_descriptors_rs::{DeviceHandle, EndpointMap, EndpointResolver};
    ///
    /// let map = EndpointMap::from_entries(&[("ep10", 10)]).unwrap();
    /// let resolver = EndpointResolver::Fixed(map.clone());
    ///
    /// let handle = DeviceHandle::new("0x00124b0023a1f802", None);
    /// assert_eq!(resolver.resolve(&handle), map);
    /// ```
    pub fn resolve(&self, handle: &DeviceHandle) -> EndpointMap {
        match self {
            EndpointResolver::Fixed(map) => map.clone(),
            EndpointResolver::Custom(resolve) => resolve(handle),
        }
    }
}

// Only the fixed form exists on the wire; a custom resolver is code,
// not data, and refuses to serialize rather than emitting an empty map.
impl Serialize for EndpointResolver {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            EndpointResolver::Fixed(map) => map.serialize(serializer),
            EndpointResolver::Custom(_) => Err(ser::Error::custom(
                "custom endpoint resolvers have no serialized form",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for EndpointResolver {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(EndpointResolver::Fixed(EndpointMap::deserialize(
            deserializer,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_name() {
        let mut map = EndpointMap::new();
        map.insert("ep10", 10).unwrap();
        assert_eq!(
            map.insert("ep10", 11).unwrap_err(),
            Error::duplicate_name("ep10")
        );
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut map = EndpointMap::new();
        map.insert("ep10", 10).unwrap();
        assert_eq!(
            map.insert("ep11", 10).unwrap_err(),
            Error::duplicate_id("ep11", 10)
        );
    }

    #[test]
    fn test_insert_rejects_id_zero() {
        let mut map = EndpointMap::new();
        assert_eq!(
            map.insert("ep0", 0).unwrap_err(),
            Error::EndpointIdOutOfRange { id: 0 }
        );
    }

    #[test]
    fn test_preserves_insertion_order() {
        let map = EndpointMap::from_entries(&[("b", 2), ("a", 1), ("c", 3)]).unwrap();
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_wire_round_trip() {
        let map = EndpointMap::from_entries(&[("ep10", 10), ("ep11", 11)]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"ep10":10,"ep11":11}"#);

        let reloaded: EndpointMap = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, map);
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let result: Result<EndpointMap> = serde_json::from_str(r#"{"a":1,"b":1}"#)
            .map_err(Error::JsonLoad);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_resolver_sees_the_handle() {
        fn per_device(handle: &DeviceHandle) -> EndpointMap {
            let mut map = EndpointMap::new();
            let id = if handle.model() == Some("two-gang") { 2 } else { 1 };
            map.insert("main", id).unwrap();
            map
        }

        let resolver = EndpointResolver::Custom(per_device);
        let handle = DeviceHandle::new("0x1", Some("two-gang"));
        assert_eq!(resolver.resolve(&handle).get("main").unwrap().value(), 2);
    }

    #[test]
    fn test_custom_resolver_refuses_to_serialize() {
        fn fixed(_handle: &DeviceHandle) -> EndpointMap {
            EndpointMap::new()
        }
        let resolver = EndpointResolver::Custom(fixed);
        assert!(serde_json::to_string(&resolver).is_err());
    }
}
