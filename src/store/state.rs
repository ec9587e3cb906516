//! State ownership and action application.

use tokio::sync::{mpsc, watch};

use crate::protocol::types::DeviceRecord;
use crate::store::actions::StoreAction;
use crate::updater::UpdateStatus;

/// UI-facing application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Currently connected devices, in background-process order.
    pub devices: Vec<DeviceRecord>,

    /// Most recent auto-updater status, if any was reported.
    pub update: Option<UpdateStatus>,
}

impl AppState {
    /// Apply one action. Pure state transition, no I/O.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::DevicesReplaced(devices) => {
                self.devices = devices;
            }
            StoreAction::DeviceAdded(device) => {
                // Re-plugging the same path replaces the stale record.
                self.devices.retain(|d| d.path != device.path);
                self.devices.push(device);
            }
            StoreAction::DeviceRemoved(device) => {
                self.devices.retain(|d| d.path != device.path);
            }
            StoreAction::UpdateStatusSet(status) => {
                self.update = Some(status);
            }
        }
    }
}

/// Dispatch half handed to subsystems that mutate state.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreAction>,
}

impl StoreHandle {
    /// Wrap a raw action queue. Unit tests use this to observe dispatches
    /// without running a store task.
    pub(crate) fn from_sender(tx: mpsc::Sender<StoreAction>) -> Self {
        Self { tx }
    }

    /// Dispatch an action, fire-and-forget.
    ///
    /// A stopped store is logged and swallowed, matching the channel layer.
    pub fn dispatch(&self, action: StoreAction) {
        if let Err(e) = self.tx.try_send(action) {
            tracing::warn!(error = %e, "Store dispatch dropped");
        }
    }
}

/// The store task: owns [`AppState`], consumes the action queue, and
/// publishes each new state on a watch channel for observers.
#[derive(Debug)]
pub struct Store {
    rx: mpsc::Receiver<StoreAction>,
    state: AppState,
    published: watch::Sender<AppState>,
}

impl Store {
    /// Create a store with the given action queue capacity.
    pub fn new(capacity: usize) -> (Self, StoreHandle, watch::Receiver<AppState>) {
        let (tx, rx) = mpsc::channel(capacity);
        let (published, observer) = watch::channel(AppState::default());
        (
            Self {
                rx,
                state: AppState::default(),
                published,
            },
            StoreHandle { tx },
            observer,
        )
    }

    /// Run until every [`StoreHandle`] is dropped.
    pub async fn run(mut self) {
        while let Some(action) = self.rx.recv().await {
            tracing::debug!(action = ?action, "Applying store action");
            self.state.apply(action);
            // Observers may all be gone; state still advances.
            let _ = self.published.send(self.state.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updater::UpdateStatus;

    fn device(path: &str) -> DeviceRecord {
        DeviceRecord::with_path(path)
    }

    #[test]
    fn test_devices_replaced_overwrites_list() {
        let mut state = AppState::default();
        state.apply(StoreAction::DevicesReplaced(vec![device("p1"), device("p2")]));
        state.apply(StoreAction::DevicesReplaced(vec![device("p3")]));
        assert_eq!(state.devices, vec![device("p3")]);
    }

    #[test]
    fn test_device_add_replaces_same_path() {
        let mut state = AppState::default();
        state.apply(StoreAction::DeviceAdded(device("p1")));
        state.apply(StoreAction::DeviceAdded(device("p1")));
        assert_eq!(state.devices.len(), 1);
    }

    #[test]
    fn test_device_remove_by_path() {
        let mut state = AppState::default();
        state.apply(StoreAction::DevicesReplaced(vec![device("p1"), device("p2")]));
        state.apply(StoreAction::DeviceRemoved(device("p1")));
        assert_eq!(state.devices, vec![device("p2")]);

        // Removing an unknown path is a no-op.
        state.apply(StoreAction::DeviceRemoved(device("p9")));
        assert_eq!(state.devices, vec![device("p2")]);
    }

    #[test]
    fn test_last_update_status_wins() {
        let mut state = AppState::default();
        state.apply(StoreAction::UpdateStatusSet(UpdateStatus::Checking));
        state.apply(StoreAction::UpdateStatusSet(UpdateStatus::Downloaded));
        assert_eq!(state.update, Some(UpdateStatus::Downloaded));
    }

    #[tokio::test]
    async fn test_store_task_applies_in_dispatch_order() {
        let (store, handle, observer) = Store::new(16);
        let task = tokio::spawn(store.run());

        handle.dispatch(StoreAction::DevicesReplaced(vec![device("p1")]));
        handle.dispatch(StoreAction::DeviceAdded(device("p2")));
        drop(handle);

        task.await.unwrap();
        let state = observer.borrow().clone();
        assert_eq!(state.devices, vec![device("p1"), device("p2")]);
    }
}
