//! Value types for descriptor fields.

mod color_mode;
mod endpoint_id;
mod hue_saturation;
mod level;
mod xy;

pub use color_mode::{ColorConfig, ColorMode};
pub use endpoint_id::EndpointId;
pub use hue_saturation::HueSaturation;
pub use level::Level;
pub use xy::Xy;
