use std::{fmt, path::PathBuf};

use log::debug;
use rustix::fs::{Mode, OFlags};

use crate::{
    backend::{Kernel, LoopBackend},
    error::{LoopError, Result},
    DEVICE_PREFIX,
};

/// Permission bits passed to `open(2)`.  Irrelevant unless `flags` contains `O_CREAT`.
const OPEN_MODE: Mode = Mode::from_bits_retain(0o660);

/// A reference to the loop device `/dev/loop<number>`.
///
/// This is only a description of which node to open and how: constructing one performs no I/O
/// and succeeds even if the node doesn't exist.  Each operation opens the node and closes it
/// again before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopDevice {
    number: u64,
    flags: OFlags,
}

impl LoopDevice {
    pub fn new(number: u64, flags: OFlags) -> Self {
        LoopDevice { number, flags }
    }

    /// The device number, e.g. 7 for `/dev/loop7`.
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn flags(&self) -> OFlags {
        self.flags
    }

    /// The path to the device node.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }

    fn open<B: LoopBackend>(&self, backend: &B) -> Result<B::Handle> {
        let path = self.path();
        debug!("opening {} with {:?}", path.display(), self.flags);
        backend
            .open(&path, self.flags, OPEN_MODE)
            .map_err(|source| LoopError::Open { path, source })
    }

    /// Change the logical block size of the device from its default of 512 bytes.
    ///
    /// The device must already be bound to a backing file.
    pub fn set_block_size(&self, block_size: u32) -> Result<()> {
        self.set_block_size_with(&Kernel, block_size)
    }

    /// Like [`LoopDevice::set_block_size`], but against an explicit backend.
    pub fn set_block_size_with<B: LoopBackend>(&self, backend: &B, block_size: u32) -> Result<()> {
        let handle = self.open(backend)?;
        debug!("LOOP_SET_BLOCK_SIZE {block_size} on {self}");
        backend
            .set_block_size(&handle, block_size)
            .map_err(|source| LoopError::Ioctl {
                path: self.path(),
                request: "LOOP_SET_BLOCK_SIZE",
                source,
            })
    }

    /// Read back the logical block size the device currently reports.
    pub fn logical_block_size(&self) -> Result<u32> {
        self.logical_block_size_with(&Kernel)
    }

    /// Like [`LoopDevice::logical_block_size`], but against an explicit backend.
    pub fn logical_block_size_with<B: LoopBackend>(&self, backend: &B) -> Result<u32> {
        let handle = self.open(backend)?;
        backend
            .logical_block_size(&handle)
            .map_err(|source| LoopError::Ioctl {
                path: self.path(),
                request: "BLKSSZGET",
                source,
            })
    }
}

impl fmt::Display for LoopDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEVICE_PREFIX}{}", self.number)
    }
}
