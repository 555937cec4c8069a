//! Bindings for configuring Linux loop devices.
//!
//! A [`LoopDevice`] names one `/dev/loop<N>` node and the flags it should be
//! opened with.  It holds no file descriptor: every operation opens the node,
//! issues its request and closes it again before returning.
//!
//! # Safety
//!
//! All unsafe ioctl code is contained in the [`ioctl`] module.
//!
//! # Example
//!
//! ```no_run
//! use losetup::LoopDevice;
//! use rustix::fs::OFlags;
//!
//! let device = LoopDevice::new(7, OFlags::RDWR);
//! assert_eq!(device.path().to_str(), Some("/dev/loop7"));
//! device.set_block_size(4096)?;
//! # Ok::<(), losetup::LoopError>(())
//! ```

#![deny(unsafe_code)]

pub mod backend;
pub mod device;
pub mod error;
pub mod ioctl;


pub use backend::{Kernel, LoopBackend};
pub use device::LoopDevice;
pub use error::{LoopError, Result};

/// Loop device nodes are named by appending the decimal device number to this prefix.
pub const DEVICE_PREFIX: &str = "/dev/loop";

/// The logical block size of a loop device that has never been reconfigured.
pub const DEFAULT_BLOCK_SIZE: u32 = 512;
