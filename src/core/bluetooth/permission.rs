//! Bluetooth permission and readiness checks
//! CoreBluetooth never reports "powered on" once access is denied, so the
//! authorization has to be checked before waiting for the adapter.

use std::future::Future;
use std::time::Duration;

use log::{info, warn};

use crate::error::{ActionError, ActionResult};

/// Whether the app may use Bluetooth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// The user has not been asked yet; opening the adapter prompts them.
    NotDetermined,
    Restricted,
    Denied,
    Allowed,
}

/// Fails with `PermissionDenied` unless Bluetooth access is usable.
pub fn ensure_access(authorization: Authorization) -> ActionResult<()> {
    match authorization {
        Authorization::Denied | Authorization::Restricted => {
            warn!("Bluetooth authorization is {:?}", authorization);
            Err(ActionError::PermissionDenied)
        }
        Authorization::NotDetermined | Authorization::Allowed => Ok(()),
    }
}

/// The app's Bluetooth authorization as reported by CoreBluetooth.
#[cfg(target_vendor = "apple")]
pub fn system_authorization() -> Authorization {
    use objc2_core_bluetooth::{CBManager, CBManagerAuthorization};

    #[allow(unused_unsafe)]
    let authorization = unsafe { CBManager::authorization_class() };
    if authorization == CBManagerAuthorization::AllowedAlways {
        Authorization::Allowed
    } else if authorization == CBManagerAuthorization::Denied {
        Authorization::Denied
    } else if authorization == CBManagerAuthorization::Restricted {
        Authorization::Restricted
    } else {
        Authorization::NotDetermined
    }
}

/// Other platforms surface a denied permission as an adapter error instead.
#[cfg(not(target_vendor = "apple"))]
pub fn system_authorization() -> Authorization {
    Authorization::Allowed
}

/// Waits for `ready` to resolve, giving up after `ready_timeout`.
pub async fn wait_until_ready<F>(ready: F, ready_timeout: Duration) -> ActionResult<()>
where
    F: Future<Output = bluest::Result<()>>,
{
    match tokio::time::timeout(ready_timeout, ready).await {
        Ok(result) => result?,
        Err(_) => return Err(ActionError::NotReady(ready_timeout.as_secs())),
    }
    info!("Bluetooth adapter is available.");
    Ok(())
}
