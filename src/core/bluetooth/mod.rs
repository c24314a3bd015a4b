//! Bluetooth functionality for the "Get Bluetooth Devices" action
//! This module opens the local adapter, scans for nearby peripherals and
//! turns what it sees into device records.

mod central;
mod constants;
mod permission;
mod scanner;
mod types;

// Re-export types that should be publicly accessible
pub use central::{BluestCentral, Central};
pub use constants::*; // Re-export all constants
pub use permission::{Authorization, ensure_access, system_authorization, wait_until_ready};
pub use scanner::{get_bluetooth_devices, scan_devices};
pub use types::{
    ConnectedPeripheral, DeviceRecord, Discovery, ScanOptions, signal_strength_percentage,
};
