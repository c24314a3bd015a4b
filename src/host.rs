//! Hooks into the application that runs the actions.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::bluetooth::{BluestCentral, Central};
use crate::error::ActionResult;

/// What an action needs from the application hosting it
#[async_trait]
pub trait ActionHost: Send + Sync {
    /// Opens the Bluetooth radio, failing if access is denied or it never becomes ready.
    async fn open_central(&self) -> ActionResult<Box<dyn Central>>;

    /// Whether scanning only works while the app is in the foreground.
    fn scans_in_foreground(&self) -> bool {
        false
    }

    /// Brings the app to the foreground before scanning.
    fn bring_to_foreground(&self) -> Result<()> {
        Ok(())
    }

    /// Hands control back once the scan is over.
    fn return_to_caller(&self) {}
}

/// Host without a window: opens the default adapter and nothing else
pub struct HeadlessHost {
    ready_timeout: Duration,
}

impl HeadlessHost {
    pub fn new(ready_timeout: Duration) -> Self {
        Self { ready_timeout }
    }
}

#[async_trait]
impl ActionHost for HeadlessHost {
    async fn open_central(&self) -> ActionResult<Box<dyn Central>> {
        let central = BluestCentral::open(self.ready_timeout).await?;
        Ok(Box::new(central))
    }
}
