/// All error types that can occur when building or binding device descriptors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a descriptor to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a descriptor from JSON.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A descriptor was built without any match identifiers.
    #[error("descriptor {model:?} declares no match identifiers")]
    NoMatchIdentifiers { model: String },

    /// A descriptor was built with an empty model name.
    #[error("descriptor has an empty model name")]
    EmptyModel,

    /// A match identifier was the empty string, which can never equal
    /// a reported model.
    #[error("descriptor {model:?} declares an empty match identifier")]
    EmptyMatchIdentifier { model: String },

    /// A descriptor was built without an endpoint resolver.
    #[error("descriptor {model:?} has no endpoint resolver")]
    NoEndpoints { model: String },

    /// An endpoint id outside the Zigbee range of 1-255.
    #[error("endpoint id {id} is out of range (1-255)")]
    EndpointIdOutOfRange { id: u8 },

    /// Two endpoint map entries share a symbolic name.
    #[error("duplicate endpoint name {name:?}")]
    DuplicateEndpointName { name: String },

    /// Two endpoint map entries share a wire id.
    #[error("duplicate endpoint id {id} for name {name:?}")]
    DuplicateEndpointId { name: String, id: u8 },

    /// A capability extension listed an endpoint name the descriptor
    /// does not define, so there is no wire endpoint to bind its
    /// controls to. Raised at registration time.
    #[error("extension references unknown endpoint {name:?}")]
    UnknownEndpoint { name: String },

    /// A capability extension listed no endpoint names at all.
    #[error("extension lists no endpoint names")]
    EmptyExtension,

    /// A brightness level outside the 0-254 convention.
    #[error("level {value} is out of range (0-254)")]
    LevelOutOfRange { value: u8 },

    /// The handle's reported model matched no registered descriptor.
    #[error("no descriptor matches reported model {model:?}")]
    Unrecognized { model: String },

    /// The handle carried no model attribute to match against.
    #[error("device handle {ieee_address:?} reports no model")]
    NoReportedModel { ieee_address: String },
}

impl Error {
    /// Create a new duplicate endpoint name error
    pub fn duplicate_name(name: &str) -> Self {
        Error::DuplicateEndpointName {
            name: name.to_string(),
        }
    }

    /// Create a new duplicate endpoint id error
    pub fn duplicate_id(name: &str, id: u8) -> Self {
        Error::DuplicateEndpointId {
            name: name.to_string(),
            id,
        }
    }

    /// Create a new unknown endpoint error
    pub fn unknown_endpoint(name: &str) -> Self {
        Error::UnknownEndpoint {
            name: name.to_string(),
        }
    }

    /// Create a new unrecognized model error
    pub fn unrecognized(model: &str) -> Self {
        Error::Unrecognized {
            model: model.to_string(),
        }
    }

    /// Create a new missing reported model error
    pub fn no_reported_model(ieee_address: &str) -> Self {
        Error::NoReportedModel {
            ieee_address: ieee_address.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
