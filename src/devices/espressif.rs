//! Descriptors for Espressif-based DIY devices.

use crate::descriptor::DeviceDescriptor;
use crate::endpoint::EndpointMap;
use crate::errors::Error;
use crate::extend::LightExtend;
use crate::types::ColorMode;

type Result<T> = std::result::Result<T, Error>;

/// ESP32-C6 NeoPixel controller with five color-dimmable zones.
///
/// The firmware exposes each zone as its own endpoint (10..14), so the
/// hub gets five independently controllable lights with brightness and
/// xy + hue/saturation color. The match identifier must equal the
/// Basic cluster's reported model byte-for-byte.
pub fn diy_c6_pix5() -> Result<DeviceDescriptor> {
    DeviceDescriptor::builder("DIY-C6-PIX5")
        .zigbee_model("DIY-C6-PIX5")
        .vendor("Espressif")
        .description("ESP32-C6 NeoPixel - 5x Color-dimmable, 5 endpoints (10..14)")
        .endpoints(EndpointMap::from_entries(&[
            ("ep10", 10),
            ("ep11", 11),
            ("ep12", 12),
            ("ep13", 13),
            ("ep14", 14),
        ])?)
        // one light extend covering all endpoints
        .extend(
            LightExtend::new(&["ep10", "ep11", "ep12", "ep13", "ep14"])
                .brightness(true)
                .color_modes(&[ColorMode::Xy, ColorMode::Hs]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Control;
    use crate::handle::DeviceHandle;
    use crate::registry::DescriptorRegistry;

    #[test]
    fn test_matches_only_the_exact_model_string() {
        let descriptor = diy_c6_pix5().unwrap();
        assert!(descriptor.matches("DIY-C6-PIX5"));
        assert!(!descriptor.matches("DIY-C6-PIX4"));
        assert!(!descriptor.matches("diy-c6-pix5"));
        assert!(!descriptor.matches("DIY-C6-PIX5 "));
    }

    #[test]
    fn test_resolver_is_constant_over_handles() {
        let descriptor = diy_c6_pix5().unwrap();
        let expected = EndpointMap::from_entries(&[
            ("ep10", 10),
            ("ep11", 11),
            ("ep12", 12),
            ("ep13", 13),
            ("ep14", 14),
        ])
        .unwrap();

        let with_model = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
        let without_model = DeviceHandle::new("0xdeadbeef00000000", None);
        assert_eq!(descriptor.resolve_endpoints(&with_model), expected);
        assert_eq!(descriptor.resolve_endpoints(&without_model), expected);
    }

    #[test]
    fn test_multi_endpoint_flag() {
        let descriptor = diy_c6_pix5().unwrap();
        assert!(descriptor.meta().multi_endpoint());
    }

    #[test]
    fn test_binding_yields_five_full_entities() {
        let mut registry = DescriptorRegistry::new();
        registry.register(diy_c6_pix5().unwrap());

        let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
        let bound = registry.bind(&handle).unwrap();

        assert_eq!(bound.entities().len(), 5);
        for (entity, expected_id) in bound.entities().iter().zip(10u8..) {
            assert_eq!(entity.endpoint_id().value(), expected_id);
            assert!(entity.has_control(Control::OnOff));
            assert!(entity.has_control(Control::Brightness));
            assert!(entity.has_control(Control::ColorXy));
            assert!(entity.has_control(Control::ColorHs));
        }
    }

    #[test]
    fn test_zone_state_is_independent() {
        let mut registry = DescriptorRegistry::new();
        registry.register(diy_c6_pix5().unwrap());

        let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
        let mut bound = registry.bind(&handle).unwrap();

        bound.entity_mut("ep12").unwrap().state_mut().set_on(true);
        for name in ["ep10", "ep11", "ep13", "ep14"] {
            assert!(!bound.entity(name).unwrap().state().on());
        }
    }

    #[test]
    fn test_round_trip_through_loader_shape() {
        let descriptor = diy_c6_pix5().unwrap();
        let reloaded = DeviceDescriptor::from_json(&descriptor.to_json().unwrap()).unwrap();

        let handle = DeviceHandle::new("0x00124b0023a1f802", Some("DIY-C6-PIX5"));
        assert_eq!(
            reloaded.resolve_endpoints(&handle),
            descriptor.resolve_endpoints(&handle)
        );
        assert_eq!(reloaded.extends(), descriptor.extends());
        assert_eq!(reloaded.zigbee_models(), descriptor.zigbee_models());
    }
}
