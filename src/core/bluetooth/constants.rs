//! Constants used by the Bluetooth action
//! Scan limits, signal reference points, and the list of common GATT services
//! used to look up peripherals that are already connected to the system.

use uuid::Uuid;

/// Default scan duration in seconds
pub const DEFAULT_SCAN_DURATION_SECS: f64 = 5.0;

/// Longest scan the action allows, in seconds
pub const MAX_SCAN_DURATION_SECS: f64 = 25.0;

/// Timeout for the adapter to become available, in seconds
pub const BLUETOOTH_READY_TIMEOUT_SECS: u64 = 10;

/// RSSI treated as 0% signal strength
pub const MIN_RSSI: i16 = -100;

/// RSSI treated as 100% signal strength
pub const MAX_RSSI: i16 = -40;

/// Status message shown while scanning
pub const SCANNING_MESSAGE: &str = "Scanning for Bluetooth devices";

/// Standard Bluetooth Service UUIDs
pub const UUID_GENERIC_ACCESS_SERVICE: Uuid = Uuid::from_u128(0x00001800_0000_1000_8000_00805f9b34fb);
pub const UUID_GENERIC_ATTRIBUTE_SERVICE: Uuid = Uuid::from_u128(0x00001801_0000_1000_8000_00805f9b34fb);
pub const UUID_IMMEDIATE_ALERT_SERVICE: Uuid = Uuid::from_u128(0x00001802_0000_1000_8000_00805f9b34fb);
pub const UUID_LINK_LOSS_SERVICE: Uuid = Uuid::from_u128(0x00001803_0000_1000_8000_00805f9b34fb);
pub const UUID_TX_POWER_SERVICE: Uuid = Uuid::from_u128(0x00001804_0000_1000_8000_00805f9b34fb);
pub const UUID_CURRENT_TIME_SERVICE: Uuid = Uuid::from_u128(0x00001805_0000_1000_8000_00805f9b34fb);
pub const UUID_DEVICE_INFORMATION_SERVICE: Uuid = Uuid::from_u128(0x0000180a_0000_1000_8000_00805f9b34fb);
pub const UUID_HEART_RATE_SERVICE: Uuid = Uuid::from_u128(0x0000180d_0000_1000_8000_00805f9b34fb);
pub const UUID_BATTERY_SERVICE: Uuid = Uuid::from_u128(0x0000180f_0000_1000_8000_00805f9b34fb);
pub const UUID_BLOOD_PRESSURE_SERVICE: Uuid = Uuid::from_u128(0x00001810_0000_1000_8000_00805f9b34fb);
pub const UUID_HUMAN_INTERFACE_DEVICE_SERVICE: Uuid = Uuid::from_u128(0x00001812_0000_1000_8000_00805f9b34fb);
pub const UUID_SCAN_PARAMETERS_SERVICE: Uuid = Uuid::from_u128(0x00001813_0000_1000_8000_00805f9b34fb);
pub const UUID_RUNNING_SPEED_SERVICE: Uuid = Uuid::from_u128(0x00001814_0000_1000_8000_00805f9b34fb);
pub const UUID_CYCLING_SPEED_SERVICE: Uuid = Uuid::from_u128(0x00001816_0000_1000_8000_00805f9b34fb);
pub const UUID_CYCLING_POWER_SERVICE: Uuid = Uuid::from_u128(0x00001818_0000_1000_8000_00805f9b34fb);
pub const UUID_LOCATION_NAVIGATION_SERVICE: Uuid = Uuid::from_u128(0x00001819_0000_1000_8000_00805f9b34fb);
pub const UUID_ENVIRONMENTAL_SENSING_SERVICE: Uuid = Uuid::from_u128(0x0000181a_0000_1000_8000_00805f9b34fb);
pub const UUID_WEIGHT_SCALE_SERVICE: Uuid = Uuid::from_u128(0x0000181d_0000_1000_8000_00805f9b34fb);
pub const UUID_FITNESS_MACHINE_SERVICE: Uuid = Uuid::from_u128(0x00001826_0000_1000_8000_00805f9b34fb);
pub const UUID_AUDIO_INPUT_CONTROL_SERVICE: Uuid = Uuid::from_u128(0x00001843_0000_1000_8000_00805f9b34fb);
pub const UUID_VOLUME_CONTROL_SERVICE: Uuid = Uuid::from_u128(0x00001844_0000_1000_8000_00805f9b34fb);
pub const UUID_MEDIA_CONTROL_SERVICE: Uuid = Uuid::from_u128(0x00001848_0000_1000_8000_00805f9b34fb);

/// Services used to find system-connected peripherals.
///
/// The platforms only list connected peripherals that expose one of the
/// requested services, so arbitrary devices cannot be enumerated this way.
pub const COMMON_SERVICES: &[Uuid] = &[
    UUID_GENERIC_ACCESS_SERVICE,
    UUID_GENERIC_ATTRIBUTE_SERVICE,
    UUID_IMMEDIATE_ALERT_SERVICE,
    UUID_LINK_LOSS_SERVICE,
    UUID_TX_POWER_SERVICE,
    UUID_CURRENT_TIME_SERVICE,
    UUID_DEVICE_INFORMATION_SERVICE,
    UUID_HEART_RATE_SERVICE,
    UUID_BATTERY_SERVICE,
    UUID_BLOOD_PRESSURE_SERVICE,
    UUID_HUMAN_INTERFACE_DEVICE_SERVICE,
    UUID_SCAN_PARAMETERS_SERVICE,
    UUID_RUNNING_SPEED_SERVICE,
    UUID_CYCLING_SPEED_SERVICE,
    UUID_CYCLING_POWER_SERVICE,
    UUID_LOCATION_NAVIGATION_SERVICE,
    UUID_ENVIRONMENTAL_SENSING_SERVICE,
    UUID_WEIGHT_SCALE_SERVICE,
    UUID_FITNESS_MACHINE_SERVICE,
    UUID_AUDIO_INPUT_CONTROL_SERVICE,
    UUID_VOLUME_CONTROL_SERVICE,
    UUID_MEDIA_CONTROL_SERVICE,
];
