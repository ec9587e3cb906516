//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build channels → Install router → Send initial device requests
//!     → Schedule update check (production only)
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop router loop → Cancel pending update check
//! ```
//!
//! # Design Decisions
//! - Initial requests go out before the first inbound message is processed
//! - The router loop owns the inbound receiver; one task, strict order
//! - Shutdown is cooperative via a broadcast channel

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{install, Bridge};
