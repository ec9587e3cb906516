//! Wallet Bridge Library
//!
//! IPC message router for the UI process of a desktop hardware-wallet
//! application.

pub mod config;
pub mod ipc;
pub mod lifecycle;
pub mod observability;
pub mod protocol;
pub mod routing;
pub mod store;
pub mod updater;

pub use config::BridgeConfig;
pub use lifecycle::{install, Bridge, Shutdown};
pub use routing::MessageRouter;
pub use store::{AppState, Store, StoreAction, StoreHandle};
