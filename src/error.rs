//! Error types for loop device operations.

use std::path::{Path, PathBuf};

use rustix::io::Errno;
use thiserror::Error;

/// Result type alias for operations that may return a [`LoopError`].
pub type Result<T> = std::result::Result<T, LoopError>;

/// A loop device operation failed.
#[derive(Error, Debug)] // can't derive PartialEq because of std::io::Error
pub enum LoopError {
    /// The device node could not be opened.
    #[error("couldn't open loop device {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The device was opened but the control request failed.
    #[error("{request} failed on {}", path.display())]
    Ioctl {
        path: PathBuf,
        request: &'static str,
        #[source]
        source: Errno,
    },
}

impl LoopError {
    /// The operating system error that caused this failure, if one was reported.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            LoopError::Open { source, .. } => source.raw_os_error().map(Errno::from_raw_os_error),
            LoopError::Ioctl { source, .. } => Some(*source),
        }
    }

    /// The device node the failed operation was addressed to.
    pub fn path(&self) -> &Path {
        match self {
            LoopError::Open { path, .. } | LoopError::Ioctl { path, .. } => path,
        }
    }
}
