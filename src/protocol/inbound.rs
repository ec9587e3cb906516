//! Typed decoding of inbound envelopes.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::ipc::Envelope;
use crate::protocol::types::{DeviceRecord, DownloadProgress, UpdateError, UpdateInfo};

/// Errors that can occur while decoding a known message kind.
///
/// An *unknown* kind is deliberately not represented here: it is a no-op by
/// contract, not a failure.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The payload of a known message kind did not match its expected shape.
    #[error("malformed payload for '{kind}': {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The closed set of messages the UI process understands.
///
/// One variant per dotted path the background process emits. Paths outside
/// this set decode to `None` so that protocol skew between processes (an
/// older UI with a newer background process, or vice versa) stays harmless.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// `devices.update` — full snapshot of connected devices.
    DevicesUpdate(Vec<DeviceRecord>),
    /// `device.add` — a device was plugged in.
    DeviceAdd(DeviceRecord),
    /// `device.remove` — a device was unplugged.
    DeviceRemove(DeviceRecord),
    /// `wallet.infos.success` — wallet query answered.
    WalletInfoSuccess { path: String, public_key: String },
    /// `wallet.infos.fail` — wallet query failed.
    WalletInfoFail { path: String, err: String },
    /// `updater.checking` — update check started.
    UpdaterChecking,
    /// `updater.updateAvailable`
    UpdaterUpdateAvailable(UpdateInfo),
    /// `updater.updateNotAvailable`
    UpdaterUpdateNotAvailable,
    /// `updater.error`
    UpdaterError(UpdateError),
    /// `updater.downloadProgress`
    UpdaterDownloadProgress(DownloadProgress),
    /// `updater.downloaded`
    UpdaterDownloaded,
}

#[derive(serde::Deserialize)]
struct WalletInfoSuccessPayload {
    path: String,
    #[serde(rename = "publicKey")]
    public_key: String,
}

#[derive(serde::Deserialize)]
struct WalletInfoFailPayload {
    path: String,
    err: String,
}

fn payload<T: DeserializeOwned>(envelope: &Envelope) -> Result<T, ProtocolError> {
    serde_json::from_value(envelope.data.clone()).map_err(|source| ProtocolError::Payload {
        kind: envelope.kind.clone(),
        source,
    })
}

impl InboundMessage {
    /// Decode an envelope into a typed message.
    ///
    /// Returns `Ok(None)` for a kind outside the known set, `Err` only when
    /// a known kind carries a payload of the wrong shape.
    pub fn decode(envelope: &Envelope) -> Result<Option<Self>, ProtocolError> {
        let message = match envelope.kind.as_str() {
            "devices.update" => Self::DevicesUpdate(payload(envelope)?),
            "device.add" => Self::DeviceAdd(payload(envelope)?),
            "device.remove" => Self::DeviceRemove(payload(envelope)?),
            "wallet.infos.success" => {
                let p: WalletInfoSuccessPayload = payload(envelope)?;
                Self::WalletInfoSuccess {
                    path: p.path,
                    public_key: p.public_key,
                }
            }
            "wallet.infos.fail" => {
                let p: WalletInfoFailPayload = payload(envelope)?;
                Self::WalletInfoFail {
                    path: p.path,
                    err: p.err,
                }
            }
            "updater.checking" => Self::UpdaterChecking,
            "updater.updateAvailable" => Self::UpdaterUpdateAvailable(payload(envelope)?),
            "updater.updateNotAvailable" => Self::UpdaterUpdateNotAvailable,
            "updater.error" => Self::UpdaterError(payload(envelope)?),
            "updater.downloadProgress" => Self::UpdaterDownloadProgress(payload(envelope)?),
            "updater.downloaded" => Self::UpdaterDownloaded,
            _ => return Ok(None),
        };

        Ok(Some(message))
    }
}
