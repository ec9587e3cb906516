//! Auto-updater integration.
//!
//! The update pipeline itself (check, download, install) lives in the
//! background process; this side only mirrors its status into the store and
//! fires the initial check request.

pub mod check;
pub mod status;

pub use check::{schedule_update_check, UpdateCheckHandle};
pub use status::UpdateStatus;
