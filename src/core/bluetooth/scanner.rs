use std::collections::{HashMap, HashSet};

use futures_util::StreamExt;
use log::{debug, info, warn};

use crate::core::bluetooth::central::Central;
use crate::core::bluetooth::constants::{COMMON_SERVICES, SCANNING_MESSAGE};
use crate::core::bluetooth::types::{DeviceRecord, ScanOptions};
use crate::error::ActionResult;
use crate::host::ActionHost;
use crate::status::StatusBoard;

/// Runs the "Get Bluetooth Devices" action against the host.
///
/// Shows the scanning status for the whole invocation, including while the
/// adapter is being opened, and clears it on every exit path.
pub async fn get_bluetooth_devices<H>(
    host: &H,
    status: &StatusBoard,
    options: &ScanOptions,
) -> ActionResult<Vec<DeviceRecord>>
where
    H: ActionHost + ?Sized,
{
    let foreground = host.scans_in_foreground();
    if foreground {
        if let Err(e) = host.bring_to_foreground() {
            warn!("Failed to bring the app to the foreground: {}", e);
        }
    }

    let result = {
        let _status = status.begin(SCANNING_MESSAGE);
        match host.open_central().await {
            Ok(central) => scan_devices(central.as_ref(), options).await,
            Err(e) => Err(e),
        }
    };

    if foreground {
        host.return_to_caller();
    }

    result
}

/// Collects the devices seen within the scan window.
///
/// Peripherals already connected to the system seed the result. Live
/// advertisements are then upserted by identifier, so the last one seen for
/// a device wins.
pub async fn scan_devices<C>(central: &C, options: &ScanOptions) -> ActionResult<Vec<DeviceRecord>>
where
    C: Central + ?Sized,
{
    // Only peripherals exposing one of the listed services can be retrieved.
    let connected = central.connected_peripherals(COMMON_SERVICES).await?;
    let connected_ids: HashSet<String> = connected.iter().map(|p| p.id.clone()).collect();

    let mut devices: HashMap<String, DeviceRecord> = HashMap::new();
    for peripheral in &connected {
        let record = DeviceRecord::from_connected(peripheral);
        if record.name.is_none() && !options.include_unnamed {
            continue;
        }
        devices.insert(record.identifier.clone(), record);
    }

    let duration = options.duration();
    if duration.is_zero() {
        info!("Scan duration is zero, skipping live scan");
    } else {
        let mut scan_stream = central
            .scan()
            .await?
            .take_until(Box::pin(tokio::time::sleep(duration)));

        while let Some(discovery) = scan_stream.next().await {
            let name = discovery.resolved_name();
            if name.is_none() && !options.include_unnamed {
                continue;
            }

            debug!("Discovered: {} {}", name.unwrap_or("Unknown"), discovery.id);
            let is_connected = connected_ids.contains(&discovery.id);
            devices.insert(
                discovery.id.clone(),
                DeviceRecord::from_discovery(&discovery, is_connected),
            );
        }
        info!("Bluetooth scan stream has ended.");
    }

    let mut records: Vec<DeviceRecord> = devices.into_values().collect();
    records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    info!("Found {} Bluetooth devices", records.len());
    Ok(records)
}
