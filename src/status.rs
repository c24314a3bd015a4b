//! Transient status message shown by the host while an action runs.

use std::sync::Mutex;

use log::debug;

type StatusListener = Box<dyn Fn(Option<&str>) + Send + Sync>;

/// Holds the current status message and notifies the host when it changes
#[derive(Default)]
pub struct StatusBoard {
    message: Mutex<Option<String>>,
    listener: Option<StatusListener>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board that calls `listener` on every change.
    pub fn with_listener<F>(listener: F) -> Self
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        Self {
            message: Mutex::new(None),
            listener: Some(Box::new(listener)),
        }
    }

    /// Returns the message currently shown, if any.
    pub fn message(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, message: Option<String>) {
        debug!("Status message: {:?}", message);
        {
            let mut current = self
                .message
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *current = message.clone();
        }
        if let Some(listener) = &self.listener {
            listener(message.as_deref());
        }
    }

    /// Shows `message` until the returned guard is dropped.
    ///
    /// Boards are not reference counted: overlapping guards overwrite each
    /// other and the first one dropped clears the message.
    pub fn begin(&self, message: impl Into<String>) -> StatusGuard<'_> {
        self.set(Some(message.into()));
        StatusGuard { board: self }
    }
}

/// Clears the status message when dropped
#[must_use = "the status message is cleared as soon as the guard is dropped"]
pub struct StatusGuard<'a> {
    board: &'a StatusBoard,
}

impl Drop for StatusGuard<'_> {
    fn drop(&mut self) {
        self.board.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_guard_clears_message() {
        let board = StatusBoard::new();
        {
            let _guard = board.begin("Working");
            assert_eq!(board.message().as_deref(), Some("Working"));
        }
        assert_eq!(board.message(), None);
    }

    #[test]
    fn test_listener_sees_set_and_clear() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_for_listener = seen.clone();
        let board = StatusBoard::with_listener(move |message| {
            seen_for_listener
                .lock()
                .unwrap()
                .push(message.map(str::to_string));
        });

        drop(board.begin("Scanning"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some("Scanning".to_string()), None]
        );
    }
}
