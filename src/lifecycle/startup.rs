//! Bridge installation and the router event loop.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::BridgeConfig;
use crate::ipc::{ChannelReceiver, ChannelSender};
use crate::lifecycle::shutdown::Shutdown;
use crate::protocol::outbound;
use crate::routing::MessageRouter;
use crate::store::StoreHandle;
use crate::updater::{schedule_update_check, UpdateCheckHandle};

/// Handles to the running bridge tasks.
pub struct Bridge {
    router_task: JoinHandle<()>,
    update_check: Option<UpdateCheckHandle>,
}

impl Bridge {
    /// Wait for the router loop to stop (all senders gone or shutdown
    /// triggered), cancelling any still-pending update check.
    pub async fn stopped(self) {
        let _ = self.router_task.await;
        if let Some(check) = self.update_check {
            check.cancel();
        }
    }
}

/// Install the message router against the inbound channel.
///
/// Before the first inbound message is processed this sends, in order, the
/// two initial device requests on `usb`:
///
/// 1. `devices.all` — snapshot of currently connected devices
/// 2. `devices.listen` — subscribe to plug/unplug events
///
/// When `updater.check_on_startup` is set (production), a one-shot
/// `updater.init` is also scheduled on the self-addressed channel after the
/// configured delay.
pub fn install(
    config: &BridgeConfig,
    mut inbound: ChannelReceiver,
    usb: ChannelSender,
    self_channel: ChannelSender,
    store: StoreHandle,
    shutdown: &Shutdown,
) -> Bridge {
    let router = MessageRouter::new(usb.clone(), store, config.router.default_wallet.clone());

    // First time, we get all devices; then start plug/unplug detection.
    usb.send(outbound::devices_all());
    usb.send(outbound::devices_listen());

    let update_check = if config.updater.check_on_startup {
        Some(schedule_update_check(
            self_channel,
            Duration::from_millis(config.updater.check_delay_ms),
        ))
    } else {
        None
    };

    let mut shutdown_rx = shutdown.subscribe();
    let router_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                // Each message is handled to completion before the next is
                // taken; handler order is arrival order.
                received = inbound.recv() => match received {
                    Some(envelope) => {
                        router.handle(&envelope);
                    }
                    None => {
                        tracing::info!("Inbound channel closed, router stopping");
                        break;
                    }
                },
                _ = shutdown_rx.recv() => {
                    tracing::info!("Shutdown signal received, router stopping");
                    break;
                }
            }
        }
    });

    Bridge {
        router_task,
        update_check,
    }
}
