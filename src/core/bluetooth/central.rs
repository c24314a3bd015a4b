//! Access to the local Bluetooth radio
//! The scanner only talks to the `Central` trait; `BluestCentral` backs it
//! with a real adapter.

use std::time::Duration;

use async_trait::async_trait;
use bluest::Adapter;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use log::{debug, info};
use uuid::Uuid;

use crate::core::bluetooth::permission::{ensure_access, system_authorization, wait_until_ready};
use crate::core::bluetooth::types::{ConnectedPeripheral, Discovery};
use crate::error::{ActionError, ActionResult};

/// The local radio, as seen by the scanner
#[async_trait]
pub trait Central: Send + Sync {
    /// Peripherals connected to the system that expose one of `services`.
    async fn connected_peripherals(&self, services: &[Uuid]) -> ActionResult<Vec<ConnectedPeripheral>>;

    /// Starts scanning. The stream runs until it is dropped.
    async fn scan(&self) -> ActionResult<BoxStream<'_, Discovery>>;
}

/// `Central` backed by the default bluest adapter
#[derive(Clone)]
pub struct BluestCentral {
    adapter: Adapter,
}

impl BluestCentral {
    /// Checks the permission, opens the default adapter and waits until it is available.
    pub async fn open(ready_timeout: Duration) -> ActionResult<Self> {
        ensure_access(system_authorization())?;

        let adapter = Adapter::default()
            .await
            .ok_or(ActionError::BluetoothUnavailable)?;
        wait_until_ready(adapter.wait_available(), ready_timeout).await?;

        Ok(Self { adapter })
    }
}

#[async_trait]
impl Central for BluestCentral {
    async fn connected_peripherals(&self, services: &[Uuid]) -> ActionResult<Vec<ConnectedPeripheral>> {
        info!("Checking for connected devices");
        let devices = self.adapter.connected_devices_with_services(services).await?;

        let mut peripherals = Vec::with_capacity(devices.len());
        for device in devices {
            let peripheral = ConnectedPeripheral {
                id: device.id().to_string(),
                name: device.name().ok(),
                rssi: device.rssi().await.ok(),
            };
            debug!("Connected device: {:?}", peripheral);
            peripherals.push(peripheral);
        }
        Ok(peripherals)
    }

    async fn scan(&self) -> ActionResult<BoxStream<'_, Discovery>> {
        info!("Starting bluetooth scan");
        let scan_stream = self.adapter.scan(&[]).await?;

        Ok(scan_stream
            .map(|found| Discovery {
                id: found.device.id().to_string(),
                name: found.device.name().ok(),
                local_name: found.adv_data.local_name,
                rssi: found.rssi,
                tx_power_level: found.adv_data.tx_power_level,
                services: found.adv_data.services.iter().copied().collect(),
            })
            .boxed())
    }
}
