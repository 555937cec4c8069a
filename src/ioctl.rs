//! Raw ioctl wrappers.
//!
//! These are thin safe wrappers around the kernel requests used by this crate.
//! They take any open descriptor and pass the kernel's errno through unchanged.

#![allow(unsafe_code)]

use std::{ffi::c_int, os::fd::AsFd};

use rustix::{
    io::{Errno, Result},
    ioctl::{ioctl, opcode, Getter, IntegerSetter, Opcode},
};

// See /usr/include/linux/loop.h
// #define LOOP_SET_BLOCK_SIZE     0x4C09
pub const LOOP_SET_BLOCK_SIZE: Opcode = opcode::none(0x4C, 0x09);

// See /usr/include/linux/fs.h
// #define BLKSSZGET  _IO(0x12,104)
pub const BLKSSZGET: Opcode = opcode::none(0x12, 104);

/// Set the logical block size of a bound loop device.  The kernel takes the size by value in
/// the argument word rather than through a pointer.
pub fn loop_set_block_size(fd: impl AsFd, block_size: u32) -> Result<()> {
    unsafe {
        ioctl(
            fd,
            IntegerSetter::<{ LOOP_SET_BLOCK_SIZE }>::new_usize(block_size as usize),
        )
    }
}

/// Query the logical sector size of a block device.  A negative size fails with `EINVAL`.
pub fn blksszget(fd: impl AsFd) -> Result<u32> {
    let size = unsafe { ioctl(fd, Getter::<{ BLKSSZGET }, c_int>::new()) }?;
    sector_size(size)
}

fn sector_size(raw: c_int) -> Result<u32> {
    u32::try_from(raw).map_err(|_| Errno::INVAL)
}
