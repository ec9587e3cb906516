//! Store action definitions.

use crate::protocol::types::DeviceRecord;
use crate::updater::UpdateStatus;

/// The closed set of mutations the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Replace the device list with a full snapshot.
    DevicesReplaced(Vec<DeviceRecord>),
    /// A single device was plugged in.
    DeviceAdded(DeviceRecord),
    /// A single device was unplugged.
    DeviceRemoved(DeviceRecord),
    /// The auto-updater moved to a new status.
    UpdateStatusSet(UpdateStatus),
}
