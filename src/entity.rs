//! Entities generated by applying a capability extension.

use serde::{Deserialize, Serialize};

use crate::extend::LightExtend;
use crate::types::{ColorMode, EndpointId, HueSaturation, Level, Xy};

/// A user-facing control exposed by a generated entity.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// On/off switching, the baseline for any light.
    OnOff,
    /// Dimming over the framework's 0-254 level convention.
    Brightness,
    /// Color via CIE 1931 xy coordinates.
    ColorXy,
    /// Color via hue and saturation.
    ColorHs,
}

impl Control {
    fn from_color_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Xy => Control::ColorXy,
            ColorMode::Hs => Control::ColorHs,
        }
    }
}

/// Last-known values for one entity.
///
/// Every entity owns its state; nothing is shared between the zones of
/// a multi-endpoint device.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightState {
    on: bool,
    brightness: Option<Level>,
    color_xy: Option<Xy>,
    color_hs: Option<HueSaturation>,
}

impl LightState {
    pub fn on(&self) -> bool {
        self.on
    }

    pub fn brightness(&self) -> Option<Level> {
        self.brightness
    }

    pub fn color_xy(&self) -> Option<Xy> {
        self.color_xy
    }

    pub fn color_hs(&self) -> Option<HueSaturation> {
        self.color_hs
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub fn set_brightness(&mut self, level: Level) {
        self.brightness = Some(level);
    }

    pub fn set_color_xy(&mut self, xy: Xy) {
        self.color_xy = Some(xy);
    }

    pub fn set_color_hs(&mut self, hs: HueSaturation) {
        self.color_hs = Some(hs);
    }
}

/// One independently addressable light entity, bound to a single wire
/// endpoint of the physical device.
///
/// Generated by [`LightExtend::apply`]; the control set reflects the
/// extension's feature flags at generation time and never changes
/// afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightEntity {
    endpoint_name: String,
    endpoint_id: EndpointId,
    controls: Vec<Control>,
    state: LightState,
}

impl LightEntity {
    pub(crate) fn generate(endpoint_name: &str, endpoint_id: EndpointId, extend: &LightExtend) -> Self {
        let mut controls = vec![Control::OnOff];
        if extend.has_brightness() {
            controls.push(Control::Brightness);
        }
        for mode in extend.color().modes() {
            controls.push(Control::from_color_mode(*mode));
        }
        LightEntity {
            endpoint_name: String::from(endpoint_name),
            endpoint_id,
            controls,
            state: LightState::default(),
        }
    }

    /// Get the symbolic endpoint name this entity is bound to.
    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    /// Get the wire endpoint id this entity is bound to.
    pub fn endpoint_id(&self) -> EndpointId {
        self.endpoint_id
    }

    /// Get the controls this entity exposes, in registration order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn has_control(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }

    /// Get the entity's cached state.
    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// Get the entity's cached state for updating.
    pub fn state_mut(&mut self) -> &mut LightState {
        &mut self.state
    }
}
