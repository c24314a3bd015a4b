//! Core functionality of the actions
//! Geo URI conversion and Bluetooth device discovery, independent of the host.

pub mod bluetooth;
pub mod geo;

// Re-export commonly used types
pub use bluetooth::{DeviceRecord, ScanOptions};
pub use geo::{Coordinate, Placemark};
