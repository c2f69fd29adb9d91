//! # NFL8 Core
//!
//! Core components for the NFL8 bit-inflation codec.
//!
//! This crate provides the building blocks the codec is made of:
//!
//! - [`bits`]: Bit-addressable views ([`BitView`]) and owning bit vectors
//!   ([`BitBuffer`]) with splice-style insert/erase
//! - [`prbs`]: Seeded LFSR used to pick padding positions
//! - [`crc`]: CRC-32 checksum
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     nfl8 CLI (file I/O, level/seed selection)           │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Levels, header, inflate/deflate, NFL8 framing       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bits (this crate)                                   │
//! │     BitView/BitBuffer, LFSR, CRC-32                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nfl8_core::bits::BitBuffer;
//! use nfl8_core::crc::Crc32;
//!
//! let mut buf = BitBuffer::from_bytes(vec![0xC0, 0x1D]);
//! buf.push_bits([true, false, true]).unwrap();
//! assert_eq!(buf.bit_len(), 19);
//! assert!(buf.pop_bit().unwrap());
//!
//! let crc = Crc32::compute(b"Hello, World!");
//! assert_eq!(crc, 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bits;
pub mod crc;
pub mod error;
pub mod prbs;

// Re-exports for convenience
pub use bits::{BitBuffer, BitView, Bits};
pub use crc::Crc32;
pub use error::{Nfl8Error, Result};
pub use prbs::Lfsr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bits::{BitBuffer, BitView};
    pub use crate::crc::Crc32;
    pub use crate::error::{Nfl8Error, Result};
    pub use crate::prbs::Lfsr;
}
