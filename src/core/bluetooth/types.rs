//! Defines shared data structures for the Bluetooth module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::bluetooth::constants::{
    COMMON_SERVICES, DEFAULT_SCAN_DURATION_SECS, MAX_RSSI, MAX_SCAN_DURATION_SECS, MIN_RSSI,
};

/// One advertisement seen during a scan
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Platform-specific unique identifier of the peripheral
    pub id: String,
    /// Name the system knows the peripheral by
    pub name: Option<String>,
    /// Local name carried in the advertisement
    pub local_name: Option<String>,
    /// The signal strength (RSSI) of the advertisement
    pub rssi: Option<i16>,
    /// Advertised transmit power level
    pub tx_power_level: Option<i16>,
    /// Advertised service UUIDs
    pub services: Vec<Uuid>,
}

impl Discovery {
    /// The peripheral name, falling back to the advertised local name.
    pub fn resolved_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.local_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// A peripheral that was already connected to the system when the scan started
#[derive(Debug, Clone, Default)]
pub struct ConnectedPeripheral {
    pub id: String,
    pub name: Option<String>,
    pub rssi: Option<i16>,
}

/// Represents a Bluetooth device returned by the action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Platform-specific unique identifier for the device
    pub identifier: String,
    /// The name of the device, if available
    pub name: Option<String>,
    /// Whether the device is connected to the system
    pub is_connected: bool,
    /// Signal strength as a percentage in the range 0...1
    pub signal_strength: f64,
    /// Received signal strength indicator in dBm
    pub rssi: i16,
    /// Transmit power level (Tx), if advertised
    pub transmit_power_level: Option<i16>,
    /// Service UUIDs
    pub services: Vec<String>,
}

impl DeviceRecord {
    /// Creates a record from an advertisement
    pub fn from_discovery(discovery: &Discovery, is_connected: bool) -> Self {
        let rssi = discovery.rssi.unwrap_or(MIN_RSSI);
        Self {
            identifier: discovery.id.clone(),
            name: discovery.resolved_name().map(str::to_string),
            is_connected,
            signal_strength: signal_strength_percentage(rssi),
            rssi,
            transmit_power_level: discovery.tx_power_level,
            services: discovery.services.iter().map(Uuid::to_string).collect(),
        }
    }

    /// Creates a record for a peripheral from the connected snapshot
    pub fn from_connected(peripheral: &ConnectedPeripheral) -> Self {
        let rssi = peripheral.rssi.unwrap_or(MIN_RSSI);
        Self {
            identifier: peripheral.id.clone(),
            name: peripheral.name.clone().filter(|name| !name.is_empty()),
            is_connected: true,
            signal_strength: signal_strength_percentage(rssi),
            rssi,
            transmit_power_level: None,
            services: Vec::new(),
        }
    }

    /// Services that are not in the common service list
    pub fn unique_services(&self) -> Vec<&str> {
        self.services
            .iter()
            .filter(|service| {
                Uuid::parse_str(service)
                    .map(|uuid| !COMMON_SERVICES.contains(&uuid))
                    .unwrap_or(true)
            })
            .map(String::as_str)
            .collect()
    }

    /// Human-readable multi-line description of the device
    pub fn summary(&self) -> String {
        format!(
            "Identifier: {}\nConnected: {}\nSignal: {:.0}%\nRSSI: {}\nUnique Services: {}\nServices: {}",
            self.identifier,
            self.is_connected,
            self.signal_strength * 100.0,
            self.rssi,
            self.unique_services().join(", "),
            self.services.join(", "),
        )
    }
}

/// Maps RSSI to a signal strength percentage in the range 0...1.
///
/// This is a linear approximation over the typical range of Bluetooth
/// connections (-100 dBm weak to -40 dBm strong), not a calibrated measurement.
pub fn signal_strength_percentage(rssi: i16) -> f64 {
    let min = f64::from(MIN_RSSI);
    let max = f64::from(MAX_RSSI);
    ((f64::from(rssi) - min) / (max - min)).clamp(0.0, 1.0)
}

/// Parameters of one scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    /// Scan duration in seconds
    pub duration_secs: f64,
    /// Whether devices without a resolvable name are returned
    pub include_unnamed: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SCAN_DURATION_SECS,
            include_unnamed: false,
        }
    }
}

impl ScanOptions {
    pub fn new(duration_secs: f64, include_unnamed: bool) -> Self {
        Self {
            duration_secs,
            include_unnamed,
        }
    }

    /// The scan duration clamped to the allowed range.
    pub fn duration(&self) -> std::time::Duration {
        let secs = if self.duration_secs.is_nan() {
            DEFAULT_SCAN_DURATION_SECS
        } else {
            self.duration_secs.min(MAX_SCAN_DURATION_SECS)
        };
        if secs > 0.0 {
            std::time::Duration::from_secs_f64(secs)
        } else {
            std::time::Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_signal_strength_bounds() {
        assert_eq!(signal_strength_percentage(-100), 0.0);
        assert_eq!(signal_strength_percentage(-120), 0.0);
        assert_eq!(signal_strength_percentage(i16::MIN), 0.0);
        assert_eq!(signal_strength_percentage(-40), 1.0);
        assert_eq!(signal_strength_percentage(-10), 1.0);
        assert_eq!(signal_strength_percentage(i16::MAX), 1.0);
    }

    #[test]
    fn test_signal_strength_midpoint() {
        assert!((signal_strength_percentage(-70) - 0.5).abs() < 1e-9);
        assert!((signal_strength_percentage(-85) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_duration_clamp() {
        assert_eq!(ScanOptions::new(5.0, false).duration(), Duration::from_secs(5));
        assert_eq!(ScanOptions::new(-3.0, false).duration(), Duration::ZERO);
        assert_eq!(ScanOptions::new(60.0, false).duration(), Duration::from_secs(25));
        assert_eq!(ScanOptions::new(f64::INFINITY, false).duration(), Duration::from_secs(25));
        assert_eq!(ScanOptions::new(f64::NAN, false).duration(), Duration::from_secs(5));
        assert_eq!(ScanOptions::new(0.5, false).duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_resolved_name_falls_back_to_local_name() {
        let mut discovery = Discovery {
            id: "A".into(),
            local_name: Some("Sensor".into()),
            ..Default::default()
        };
        assert_eq!(discovery.resolved_name(), Some("Sensor"));

        discovery.name = Some("Kitchen Sensor".into());
        assert_eq!(discovery.resolved_name(), Some("Kitchen Sensor"));

        discovery.name = None;
        discovery.local_name = Some(String::new());
        assert_eq!(discovery.resolved_name(), None);
    }

    #[test]
    fn test_unique_services_and_summary() {
        let vendor = Uuid::from_u128(0x4f63756c_7573_2054_6872_65656d6f7465);
        let discovery = Discovery {
            id: "DEV-1".into(),
            name: Some("Remote".into()),
            rssi: Some(-70),
            tx_power_level: Some(4),
            services: vec![COMMON_SERVICES[8], vendor],
            ..Default::default()
        };
        let record = DeviceRecord::from_discovery(&discovery, false);
        let vendor = vendor.to_string();
        assert_eq!(record.unique_services(), vec![vendor.as_str()]);

        let summary = record.summary();
        assert!(summary.contains("Identifier: DEV-1"));
        assert!(summary.contains("Connected: false"));
        assert!(summary.contains("Signal: 50%"));
        assert!(summary.contains("RSSI: -70"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = DeviceRecord::from_connected(&ConnectedPeripheral {
            id: "DEV-2".into(),
            name: Some("Headphones".into()),
            rssi: None,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["identifier"], "DEV-2");
        assert_eq!(json["isConnected"], true);
        assert_eq!(json["rssi"], -100);
        assert_eq!(json["signalStrength"], 0.0);
        assert!(json["transmitPowerLevel"].is_null());
    }
}
