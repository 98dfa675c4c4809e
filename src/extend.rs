//! The light capability extension.

use serde::{Deserialize, Serialize};

use crate::endpoint::EndpointMap;
use crate::entity::LightEntity;
use crate::errors::Error;
use crate::types::{ColorConfig, ColorMode};

type Result<T> = std::result::Result<T, Error>;

/// Configuration for a light capability extension.
///
/// One extension can cover any subset of a descriptor's named
/// endpoints; applying it yields one independently addressable entity
/// per listed name. On/off comes for free, brightness and color are
/// opt-in.
///
/// # Example
///
/// ```
/// use zigbee_descriptors_rs::{ColorMode, LightExtend};
///
/// let extend = LightExtend::new(&["left", "right"])
///     .brightness(true)
///     .color_modes(&[ColorMode::Xy]);
/// assert_eq!(extend.endpoint_names(), &["left", "right"]);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightExtend {
    endpoint_names: Vec<String>,
    #[serde(default)]
    brightness: bool,
    #[serde(default, skip_serializing_if = "ColorConfig::is_empty")]
    color: ColorConfig,
}

impl LightExtend {
    /// Create an on/off-only extension over the given endpoint names.
    pub fn new(endpoint_names: &[&str]) -> Self {
        LightExtend {
            endpoint_names: endpoint_names.iter().map(|name| String::from(*name)).collect(),
            brightness: false,
            color: ColorConfig::new(),
        }
    }

    /// Enable or disable the brightness control.
    pub fn brightness(mut self, enabled: bool) -> Self {
        self.brightness = enabled;
        self
    }

    /// Enable color control for the given modes.
    pub fn color_modes(mut self, modes: &[ColorMode]) -> Self {
        self.color = ColorConfig::with_modes(modes);
        self
    }

    /// Get the endpoint names this extension applies to.
    pub fn endpoint_names(&self) -> &[String] {
        &self.endpoint_names
    }

    pub fn has_brightness(&self) -> bool {
        self.brightness
    }

    /// Get the configured color modes.
    pub fn color(&self) -> &ColorConfig {
        &self.color
    }

    /// Expand this extension against a descriptor's endpoint map,
    /// producing one entity per listed endpoint name.
    ///
    /// Fails if the extension lists no names, or names an endpoint the
    /// map does not define.
    pub fn apply(&self, endpoints: &EndpointMap) -> Result<Vec<LightEntity>> {
        if self.endpoint_names.is_empty() {
            return Err(Error::EmptyExtension);
        }

        let mut entities = Vec::with_capacity(self.endpoint_names.len());
        for name in &self.endpoint_names {
            let id = endpoints
                .get(name)
                .ok_or_else(|| Error::unknown_endpoint(name))?;
            entities.push(LightEntity::generate(name, id, self));
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Control;
    use crate::types::Level;

    fn five_zones() -> EndpointMap {
        EndpointMap::from_entries(&[
            ("ep10", 10),
            ("ep11", 11),
            ("ep12", 12),
            ("ep13", 13),
            ("ep14", 14),
        ])
        .unwrap()
    }

    #[test]
    fn test_apply_generates_one_entity_per_name() {
        let extend = LightExtend::new(&["ep10", "ep11", "ep12", "ep13", "ep14"])
            .brightness(true)
            .color_modes(&[ColorMode::Xy, ColorMode::Hs]);

        let entities = extend.apply(&five_zones()).unwrap();
        assert_eq!(entities.len(), 5);

        for (entity, expected_id) in entities.iter().zip(10u8..) {
            assert_eq!(entity.endpoint_id().value(), expected_id);
            assert_eq!(
                entity.controls(),
                &[
                    Control::OnOff,
                    Control::Brightness,
                    Control::ColorXy,
                    Control::ColorHs,
                ]
            );
        }
    }

    #[test]
    fn test_on_off_is_the_baseline() {
        let extend = LightExtend::new(&["ep10"]);
        let entities = extend.apply(&five_zones()).unwrap();
        assert_eq!(entities[0].controls(), &[Control::OnOff]);
    }

    #[test]
    fn test_entities_do_not_share_state() {
        let extend = LightExtend::new(&["ep10", "ep11"]).brightness(true);
        let mut entities = extend.apply(&five_zones()).unwrap();

        entities[0].state_mut().set_on(true);
        entities[0].state_mut().set_brightness(Level::create(200).unwrap());

        assert!(entities[0].state().on());
        assert!(!entities[1].state().on());
        assert!(entities[1].state().brightness().is_none());
    }

    #[test]
    fn test_apply_rejects_unknown_endpoint() {
        let extend = LightExtend::new(&["ep10", "ep99"]);
        assert_eq!(
            extend.apply(&five_zones()).unwrap_err(),
            Error::unknown_endpoint("ep99")
        );
    }

    #[test]
    fn test_apply_rejects_empty_name_list() {
        let extend = LightExtend::new(&[]);
        assert_eq!(extend.apply(&five_zones()).unwrap_err(), Error::EmptyExtension);
    }

    #[test]
    fn test_wire_shape() {
        let extend = LightExtend::new(&["ep10"])
            .brightness(true)
            .color_modes(&[ColorMode::Xy, ColorMode::Hs]);

        let value = serde_json::to_value(&extend).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "endpointNames": ["ep10"],
                "brightness": true,
                "color": { "modes": ["xy", "hs"] },
            })
        );
    }
}
