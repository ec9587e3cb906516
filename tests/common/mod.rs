//! Shared harness for bridge integration tests.

// Each test binary uses a different slice of the harness.
#![allow(dead_code)]

use tokio::sync::watch;

use wallet_bridge::config::BridgeConfig;
use wallet_bridge::ipc::{channel_pair, ChannelReceiver, ChannelSender, Envelope};
use wallet_bridge::lifecycle::{install, Bridge, Shutdown};
use wallet_bridge::store::{AppState, Store};

/// A fully wired bridge with every external seam held by the test.
pub struct Harness {
    /// Sender feeding the inbound `"msg"` channel.
    pub inbound: ChannelSender,
    /// Receiver observing the outbound `"usb"` channel.
    pub usb: ChannelReceiver,
    /// Receiver observing the self-addressed `"msg"` channel.
    pub self_msg: ChannelReceiver,
    /// Watch over the store state after each applied action.
    pub state: watch::Receiver<AppState>,
    pub shutdown: Shutdown,
    pub bridge: Bridge,
}

impl Harness {
    /// Install a bridge with the given config.
    pub fn start(config: BridgeConfig) -> Self {
        let capacity = config.router.channel_capacity;
        let (inbound_tx, inbound_rx) = channel_pair("msg", capacity);
        let (usb_tx, usb_rx) = channel_pair("usb", capacity);
        let (self_tx, self_rx) = channel_pair("msg", capacity);

        let (store, store_handle, state) = Store::new(capacity);
        tokio::spawn(store.run());

        let shutdown = Shutdown::new();
        let bridge = install(
            &config,
            inbound_rx,
            usb_tx,
            self_tx,
            store_handle,
            &shutdown,
        );

        Self {
            inbound: inbound_tx,
            usb: usb_rx,
            self_msg: self_rx,
            state,
            shutdown,
            bridge,
        }
    }

    /// Install a bridge with default (non-production) config.
    pub fn start_default() -> Self {
        Self::start(BridgeConfig::default())
    }

    /// Send one inbound envelope.
    pub fn send(&self, envelope: Envelope) {
        self.inbound.send(envelope);
    }

    /// Wait until the store has applied at least one more action, then
    /// return the state.
    pub async fn next_state(&mut self) -> AppState {
        self.state.changed().await.expect("store task gone");
        self.state.borrow_and_update().clone()
    }

    /// Drain the two initial device requests sent at install time.
    pub async fn drain_initial_requests(&mut self) {
        let first = self.usb.recv().await.expect("usb channel closed");
        assert_eq!(first.kind, "devices.all");
        let second = self.usb.recv().await.expect("usb channel closed");
        assert_eq!(second.kind, "devices.listen");
    }

    /// Tear the bridge down and wait for its tasks.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.bridge.stopped().await;
    }
}
