//! Device descriptor records and their load-time validation.

use serde::{Deserialize, Serialize};

use crate::endpoint::{EndpointMap, EndpointResolver};
use crate::errors::Error;
use crate::extend::LightExtend;
use crate::handle::DeviceHandle;

type Result<T> = std::result::Result<T, Error>;

/// Framework metadata flags attached to a descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    multi_endpoint: bool,
}

impl Meta {
    /// Whether the framework should disambiguate generated entities by
    /// endpoint name instead of collapsing them into one.
    pub fn multi_endpoint(&self) -> bool {
        self.multi_endpoint
    }
}

/// The static record the framework matches joining devices against.
///
/// A descriptor is inert data: it binds a set of self-reported model
/// strings to an endpoint topology and a list of capability
/// extensions, and is read (never mutated) every time a matching
/// device binds or re-binds.
///
/// The serialized shape is the loader contract:
/// `{zigbeeModel, model, vendor, description, endpoint, meta, extend}`.
/// All schema checks run once, at build or load time; consuming the
/// record raises no errors of its own.
///
/// # Example
///
/// ```
/// use zigbee_descriptors_rs::{DeviceDescriptor, EndpointMap, LightExtend};
///
/// let descriptor = DeviceDescriptor::builder("TWO-GANG")
///     .zigbee_model("TWO-GANG")
///     .vendor("Acme")
///     .description("Two-gang dimmer")
///     .endpoints(EndpointMap::from_entries(&[("left", 1), ("right", 2)]).unwrap())
///     .extend(LightExtend::new(&["left", "right"]).brightness(true))
///     .build()
///     .unwrap();
///
/// assert!(descriptor.matches("TWO-GANG"));
/// assert!(descriptor.meta().multi_endpoint());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", try_from = "WireDescriptor")]
pub struct DeviceDescriptor {
    zigbee_model: Vec<String>,
    model: String,
    vendor: String,
    description: String,
    endpoint: EndpointResolver,
    meta: Meta,
    extend: Vec<LightExtend>,
}

// Raw loader shape. `meta` is accepted but re-derived: multiEndpoint
// always reflects the actual endpoint map size.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDescriptor {
    zigbee_model: Vec<String>,
    model: String,
    vendor: String,
    description: String,
    endpoint: EndpointResolver,
    #[serde(default)]
    #[allow(dead_code)]
    meta: Meta,
    #[serde(default)]
    extend: Vec<LightExtend>,
}

impl TryFrom<WireDescriptor> for DeviceDescriptor {
    type Error = Error;

    fn try_from(wire: WireDescriptor) -> Result<Self> {
        let mut builder = DeviceDescriptor::builder(&wire.model)
            .vendor(&wire.vendor)
            .description(&wire.description)
            .endpoint_resolver(wire.endpoint);
        for identifier in &wire.zigbee_model {
            builder = builder.zigbee_model(identifier);
        }
        for extend in wire.extend {
            builder = builder.extend(extend);
        }
        builder.build()
    }
}

impl DeviceDescriptor {
    /// Start building a descriptor for the given model name.
    pub fn builder(model: &str) -> DescriptorBuilder {
        DescriptorBuilder {
            model: String::from(model),
            zigbee_model: Vec::new(),
            vendor: String::new(),
            description: String::new(),
            endpoint: None,
            extend: Vec::new(),
        }
    }

    /// Check whether a self-reported model string binds to this
    /// descriptor.
    ///
    /// Matching is byte-exact equality against any declared
    /// identifier. No trimming, no case folding, no prefix matching;
    /// the identifier must equal the Basic cluster's reported model
    /// exactly.
    pub fn matches(&self, reported_model: &str) -> bool {
        self.zigbee_model
            .iter()
            .any(|identifier| identifier == reported_model)
    }

    /// Resolve the endpoint map for a concrete device instance.
    pub fn resolve_endpoints(&self, handle: &DeviceHandle) -> EndpointMap {
        self.endpoint.resolve(handle)
    }

    /// Get the declared match identifiers.
    pub fn zigbee_models(&self) -> &[String] {
        &self.zigbee_model
    }

    /// Get the display model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the display vendor name.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Get the display description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the framework metadata flags.
    pub fn meta(&self) -> Meta {
        self.meta
    }

    /// Get the capability extensions, in entity-registration order.
    pub fn extends(&self) -> &[LightExtend] {
        &self.extend
    }

    /// Serialize to the loader's JSON shape.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::JsonDump)
    }

    /// Load and validate a descriptor from the loader's JSON shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }
}

/// Builder running the schema checks a loosely-typed loader would
/// defer to consumption time: non-empty identifiers, endpoint ids in
/// range and unique, extension names resolvable.
#[derive(Debug)]
pub struct DescriptorBuilder {
    model: String,
    zigbee_model: Vec<String>,
    vendor: String,
    description: String,
    endpoint: Option<EndpointResolver>,
    extend: Vec<LightExtend>,
}

impl DescriptorBuilder {
    /// Add a match identifier. May be called more than once for
    /// devices that report different model strings across firmware
    /// revisions.
    pub fn zigbee_model(mut self, identifier: &str) -> Self {
        self.zigbee_model.push(String::from(identifier));
        self
    }

    /// Set the display vendor name.
    pub fn vendor(mut self, vendor: &str) -> Self {
        self.vendor = String::from(vendor);
        self
    }

    /// Set the display description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = String::from(description);
        self
    }

    /// Use a fixed endpoint map for every device instance.
    pub fn endpoints(self, map: EndpointMap) -> Self {
        self.endpoint_resolver(EndpointResolver::Fixed(map))
    }

    /// Use an explicit resolver strategy.
    pub fn endpoint_resolver(mut self, resolver: EndpointResolver) -> Self {
        self.endpoint = Some(resolver);
        self
    }

    /// Append a capability extension. Order establishes
    /// entity-registration order only.
    pub fn extend(mut self, extend: LightExtend) -> Self {
        self.extend.push(extend);
        self
    }

    /// Validate and produce the descriptor.
    pub fn build(self) -> Result<DeviceDescriptor> {
        if self.model.is_empty() {
            return Err(Error::EmptyModel);
        }
        if self.zigbee_model.is_empty() {
            return Err(Error::NoMatchIdentifiers { model: self.model });
        }
        if self.zigbee_model.iter().any(|identifier| identifier.is_empty()) {
            return Err(Error::EmptyMatchIdentifier { model: self.model });
        }
        let Some(endpoint) = self.endpoint else {
            return Err(Error::NoEndpoints { model: self.model });
        };

        // Registration-time view of the topology. A custom resolver is
        // re-run per device at bind time; it is total, so probing it
        // with a blank handle is valid.
        let probed = endpoint.resolve(&DeviceHandle::new("", None));
        for extend in &self.extend {
            extend.apply(&probed)?;
        }

        Ok(DeviceDescriptor {
            zigbee_model: self.zigbee_model,
            model: self.model,
            vendor: self.vendor,
            description: self.description,
            endpoint,
            meta: Meta {
                multi_endpoint: probed.len() > 1,
            },
            extend: self.extend,
        })
    }
}
