//! Auto-updater status as mirrored into the store.

use crate::protocol::types::{DownloadProgress, UpdateError, UpdateInfo};

/// Named updater status plus its optional payload.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    /// An update check is in flight.
    Checking,
    /// An update exists and will be downloaded.
    Available(UpdateInfo),
    /// The application is up to date.
    Unavailable,
    /// The updater reported an error.
    Error(UpdateError),
    /// Download progress notification.
    Progress(DownloadProgress),
    /// The update is downloaded and ready to install.
    Downloaded,
}

impl UpdateStatus {
    /// Short status name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Available(_) => "available",
            Self::Unavailable => "unavailable",
            Self::Error(_) => "error",
            Self::Progress(_) => "progress",
            Self::Downloaded => "downloaded",
        }
    }
}
