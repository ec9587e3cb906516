//! Wallet Bridge (UI-process side)
//!
//! Receives tagged messages from the privileged parent process and routes
//! them into the application state store.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 WALLET BRIDGE                  │
//!                    │                                                │
//!   parent process   │  ┌─────────┐    ┌──────────┐    ┌─────────┐   │
//!   ──── stdin ──────┼─▶│  ipc    │───▶│ routing  │───▶│  store  │   │
//!                    │  │ reader  │    │  router  │    │  task   │   │
//!                    │  └─────────┘    └────┬─────┘    └─────────┘   │
//!                    │                      │                        │
//!                    │                      ▼                        │
//!   parent process   │  ┌─────────┐    ┌──────────┐                  │
//!   ◀─── stdout ─────┼──│  ipc    │◀───│ outbound │◀── updater       │
//!                    │  │ writer  │    │ channels │    check timer   │
//!                    │  └─────────┘    └──────────┘                  │
//!                    │                                                │
//!                    │  cross-cutting: config, observability,         │
//!                    │                 lifecycle (startup/shutdown)   │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use wallet_bridge::config::{load_config, BridgeConfig};
use wallet_bridge::ipc::{channel_pair, stdio};
use wallet_bridge::lifecycle::{install, Shutdown};
use wallet_bridge::observability::{logging, metrics};
use wallet_bridge::store::Store;

#[derive(Parser)]
#[command(name = "wallet-bridge")]
#[command(about = "IPC message router for the wallet UI process", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Production mode: schedule the startup update check.
    #[arg(long)]
    production: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };
    if cli.production {
        config.updater.check_on_startup = true;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        default_wallet = %config.router.default_wallet,
        check_on_startup = config.updater.check_on_startup,
        check_delay_ms = config.updater.check_delay_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let capacity = config.router.channel_capacity;
    let (inbound_tx, inbound_rx) = channel_pair("msg", capacity);
    let (usb_tx, usb_rx) = channel_pair("usb", capacity);
    let (msg_out_tx, msg_out_rx) = channel_pair("msg", capacity);

    let (store, store_handle, _state) = Store::new(capacity);
    let store_task = tokio::spawn(store.run());

    let reader = stdio::spawn_stdin_reader(inbound_tx);
    let writer = stdio::spawn_stdout_writer(usb_rx, msg_out_rx);

    let shutdown = Shutdown::new();
    let bridge = install(
        &config,
        inbound_rx,
        usb_tx,
        msg_out_tx,
        store_handle,
        &shutdown,
    );

    tracing::info!("Bridge installed, routing messages");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, shutting down");
            shutdown.trigger();
        }
        _ = reader => {
            // Parent closed stdin; the inbound channel drains and the
            // router loop exits on its own.
        }
    }

    bridge.stopped().await;
    drop(writer);
    let _ = store_task.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
