//! The seam between [`LoopDevice`](crate::LoopDevice) and the operating system.
//!
//! A backend opens device nodes and issues control requests against the handles it opened.
//! Handles are released when dropped, so a caller that holds one in a local binding gets the
//! release on every exit path for free.

use std::{os::fd::OwnedFd, path::Path};

use rustix::{
    fs::{open, Mode, OFlags},
    io::Errno,
};

use crate::ioctl::{blksszget, loop_set_block_size};

/// Opening and controlling loop device nodes.
pub trait LoopBackend {
    /// An open device node.  Dropping it closes the node.
    type Handle;

    /// Open the node at `path` with `flags` and permission bits `mode`.
    fn open(&self, path: &Path, flags: OFlags, mode: Mode) -> std::io::Result<Self::Handle>;

    /// Issue `LOOP_SET_BLOCK_SIZE` against an open node.
    fn set_block_size(&self, handle: &Self::Handle, block_size: u32) -> Result<(), Errno>;

    /// Issue `BLKSSZGET` against an open node.
    fn logical_block_size(&self, handle: &Self::Handle) -> Result<u32, Errno>;
}

/// The real kernel, reached through `open(2)` and `ioctl(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kernel;

impl LoopBackend for Kernel {
    type Handle = OwnedFd;

    fn open(&self, path: &Path, flags: OFlags, mode: Mode) -> std::io::Result<OwnedFd> {
        Ok(open(path, flags, mode)?)
    }

    fn set_block_size(&self, handle: &OwnedFd, block_size: u32) -> Result<(), Errno> {
        loop_set_block_size(handle, block_size)
    }

    fn logical_block_size(&self, handle: &OwnedFd) -> Result<u32, Errno> {
        blksszget(handle)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_kernel_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Kernel
            .open(
                &dir.path().join("loop0"),
                OFlags::RDWR | OFlags::CLOEXEC,
                Mode::from_bits_retain(0o660),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_kernel_control_on_regular_file() {
        let tf = NamedTempFile::new().unwrap();
        let fd = Kernel
            .open(tf.path(), OFlags::RDONLY, Mode::from_bits_retain(0o660))
            .unwrap();
        assert!(Kernel.set_block_size(&fd, 4096).is_err());
        assert!(Kernel.logical_block_size(&fd).is_err());
    }
}
