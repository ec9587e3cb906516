//! Outbound request construction.

use serde_json::json;

use crate::ipc::Envelope;

/// `devices.all` — ask the device-access process for every connected device.
pub fn devices_all() -> Envelope {
    Envelope::bare("devices.all")
}

/// `devices.listen` — subscribe to plug/unplug notifications.
pub fn devices_listen() -> Envelope {
    Envelope::bare("devices.listen")
}

/// `wallet.infos.request` — query wallet info for the device at `path`.
pub fn wallet_info_request(path: &str, wallet: &str) -> Envelope {
    Envelope::with_data(
        "wallet.infos.request",
        json!({
            "path": path,
            "wallet": wallet,
        }),
    )
}

/// `updater.init` — kick off the auto-update check.
pub fn updater_init() -> Envelope {
    Envelope::bare("updater.init")
}
