//! Inbound message routing.
//!
//! # Responsibilities
//! - Decode each inbound envelope against the known message set
//! - Dispatch exactly one handler per recognized message
//! - Drop unknown kinds silently, malformed payloads loudly
//!
//! # Design Decisions
//! - Dispatch is a match over a closed enum: adding a message kind without
//!   handling it is a compile error
//! - The router holds explicit handles to everything it touches (usb
//!   channel, store); nothing ambient
//! - Stateless between messages; no ordering dependency across kinds

pub mod router;

pub use router::{Dispatch, MessageRouter};
