//! Built-in device descriptor catalog, grouped by vendor.

pub mod espressif;
