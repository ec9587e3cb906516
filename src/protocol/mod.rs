//! Message vocabulary between the UI process and the background process.
//!
//! # Responsibilities
//! - Define the closed set of inbound message kinds
//! - Decode envelopes into typed messages (unknown kind is not an error)
//! - Construct the small set of outbound request envelopes
//!
//! # Design Decisions
//! - Dotted paths map to a closed enum, not a dynamic handler table: known
//!   kinds get compile-time exhaustiveness, unknown kinds stay a no-op
//! - Payload shapes are typed; unrecognized payload fields are ignored so
//!   the background process can grow its records without breaking us

pub mod inbound;
pub mod outbound;
pub mod types;

pub use inbound::{InboundMessage, ProtocolError};
pub use types::{DeviceRecord, DownloadProgress, UpdateError, UpdateInfo};
