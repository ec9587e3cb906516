//! Cross-process message plumbing.
//!
//! # Data Flow
//! ```text
//! background process ──("msg" channel)──▶ inbound receiver ──▶ routing
//! routing ──("usb" channel)──▶ device-access process
//! routing ──("msg" channel, self-addressed)──▶ inbound receiver
//! ```
//!
//! # Design Decisions
//! - All channels carry the same envelope shape `{type, data}`
//! - Sends are fire-and-forget: a closed channel is logged, never retried
//! - Channel names exist for logging only, not for routing

pub mod channel;
pub mod envelope;
pub mod stdio;

pub use channel::{channel_pair, ChannelReceiver, ChannelSender};
pub use envelope::Envelope;
