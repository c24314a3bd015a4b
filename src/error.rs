//! Error types shared by both actions.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Failed to get the latitude and longitude for the given location.")]
    UnresolvableLocation,
    #[error(
        "Bluetooth access was denied. Open the app and allow the Bluetooth permission before using this action."
    )]
    PermissionDenied,
    #[error("No Bluetooth adapter found")]
    BluetoothUnavailable,
    #[error("Bluetooth did not become ready within {0} seconds")]
    NotReady(u64),
    #[error("Bluetooth error: {0}")]
    Bluetooth(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

pub type ActionResult<T> = Result<T, ActionError>;

impl From<bluest::Error> for ActionError {
    fn from(value: bluest::Error) -> Self {
        match value.kind() {
            bluest::error::ErrorKind::NotAuthorized => Self::PermissionDenied,
            bluest::error::ErrorKind::AdapterUnavailable => Self::BluetoothUnavailable,
            _ => Self::Bluetooth(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

impl From<io::Error> for ActionError {
    fn from(value: io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluest::error::ErrorKind;

    #[test]
    fn test_bluest_not_authorized_is_permission_denied() {
        let error = ActionError::from(bluest::Error::from(ErrorKind::NotAuthorized));
        assert!(matches!(error, ActionError::PermissionDenied));
    }

    #[test]
    fn test_bluest_adapter_unavailable() {
        let error = ActionError::from(bluest::Error::from(ErrorKind::AdapterUnavailable));
        assert!(matches!(error, ActionError::BluetoothUnavailable));
    }

    #[test]
    fn test_other_bluest_errors_are_wrapped() {
        let error = ActionError::from(bluest::Error::from(ErrorKind::Timeout));
        assert!(matches!(error, ActionError::Bluetooth(_)));
    }

    #[test]
    fn test_bad_config_json_is_config_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ActionError::from(parse_error), ActionError::Config(_)));
    }
}
