//! Envelope dispatch into store actions and outbound requests.

use crate::ipc::{ChannelSender, Envelope};
use crate::protocol::inbound::InboundMessage;
use crate::protocol::outbound;
use crate::store::{StoreAction, StoreHandle};
use crate::updater::UpdateStatus;

/// Outcome of routing one envelope, for logging and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler ran.
    Handled,
    /// Kind outside the known set; dropped silently by contract.
    Ignored,
    /// Known kind, payload of the wrong shape; dropped with a warning.
    Malformed,
}

/// Routes inbound envelopes from the background process.
///
/// Stateless between messages. Constructed once at startup with explicit
/// handles to the channels and store it is allowed to touch.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    usb: ChannelSender,
    store: StoreHandle,
    default_wallet: String,
}

impl MessageRouter {
    /// Create a router.
    ///
    /// `default_wallet` is the currency tag attached to wallet info
    /// requests (`"btc"` unless configured otherwise).
    pub fn new(usb: ChannelSender, store: StoreHandle, default_wallet: impl Into<String>) -> Self {
        Self {
            usb,
            store,
            default_wallet: default_wallet.into(),
        }
    }

    /// Route one envelope to completion.
    pub fn handle(&self, envelope: &Envelope) -> Dispatch {
        let message = match InboundMessage::decode(envelope) {
            Ok(Some(message)) => message,
            Ok(None) => {
                tracing::debug!(kind = %envelope.kind, "No handler for message kind");
                metrics::counter!("bridge_messages_ignored_total").increment(1);
                return Dispatch::Ignored;
            }
            Err(e) => {
                tracing::warn!(kind = %envelope.kind, error = %e, "Dropping malformed message");
                metrics::counter!("bridge_messages_malformed_total").increment(1);
                return Dispatch::Malformed;
            }
        };

        self.dispatch(message);
        metrics::counter!("bridge_messages_routed_total", "kind" => envelope.kind.clone())
            .increment(1);
        Dispatch::Handled
    }

    fn dispatch(&self, message: InboundMessage) {
        match message {
            InboundMessage::DevicesUpdate(devices) => {
                let first_path = devices.first().map(|d| d.path.clone());
                self.store.dispatch(StoreAction::DevicesReplaced(devices));
                if let Some(path) = first_path {
                    self.usb
                        .send(outbound::wallet_info_request(&path, &self.default_wallet));
                }
            }
            InboundMessage::DeviceAdd(device) => {
                self.store.dispatch(StoreAction::DeviceAdded(device));
            }
            InboundMessage::DeviceRemove(device) => {
                self.store.dispatch(StoreAction::DeviceRemoved(device));
            }
            // Wallet query results are diagnostic-only for now. The store
            // has no wallet slice yet; when it grows one, dispatch here.
            InboundMessage::WalletInfoSuccess { path, public_key } => {
                tracing::info!(path = %path, public_key = %public_key, "Wallet info received");
            }
            InboundMessage::WalletInfoFail { path, err } => {
                tracing::warn!(path = %path, error = %err, "Wallet info request failed");
            }
            InboundMessage::UpdaterChecking => {
                self.set_update_status(UpdateStatus::Checking);
            }
            InboundMessage::UpdaterUpdateAvailable(info) => {
                self.set_update_status(UpdateStatus::Available(info));
            }
            InboundMessage::UpdaterUpdateNotAvailable => {
                self.set_update_status(UpdateStatus::Unavailable);
            }
            InboundMessage::UpdaterError(err) => {
                self.set_update_status(UpdateStatus::Error(err));
            }
            InboundMessage::UpdaterDownloadProgress(progress) => {
                self.set_update_status(UpdateStatus::Progress(progress));
            }
            InboundMessage::UpdaterDownloaded => {
                self.set_update_status(UpdateStatus::Downloaded);
            }
        }
    }

    fn set_update_status(&self, status: UpdateStatus) {
        tracing::debug!(status = status.name(), "Updater status changed");
        self.store.dispatch(StoreAction::UpdateStatusSet(status));
    }
}
