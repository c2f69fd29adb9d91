//! # NFL8: Reversible Bit Inflation
//!
//! This crate inflates byte buffers by inserting zero filler bits between the
//! real bits, and deflates them back. The padded payload has lower byte
//! entropy than the input, and the header carries everything needed to undo
//! the transform.
//!
//! ## Levels
//!
//! Every level except `NoOp` carries a width `n` in `1..=7`. Source bits are
//! cut into groups of `8 - n` bits:
//!
//! - **NoOp**: bits are copied verbatim
//! - **Fixed(n)**: `n` zero bits follow every full group
//! - **RandomPartial(n)**: `n` zero bits are spliced into every full group at
//!   an LFSR-chosen offset
//! - **RandomFull(n)**: every group is scattered over LFSR-chosen positions of
//!   an 8-bit window
//!
//! The random levels are seeded per call; the seed is stored in the header.
//!
//! ## Example
//!
//! ```rust
//! use nfl8::{Level, deflate_memory, inflate_memory};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let level: Level = "partial:3".parse().unwrap();
//!
//! let (payload, header) = inflate_memory(original, level, Some(42)).unwrap();
//! assert!(payload.len() > original.len());
//!
//! let restored = deflate_memory(&payload, &header, true).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! ## Disk format
//!
//! ```rust
//! use nfl8::{Level, deflate_disk, inflate_disk};
//!
//! let framed = inflate_disk(b"Hello", Level::default(), None).unwrap();
//! assert_eq!(&framed[..4], b"NFL8");
//! assert_eq!(deflate_disk(&framed).unwrap(), b"Hello");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod deflate;
mod frame;
mod header;
mod inflate;
mod level;
mod seed;
mod transform;

pub use deflate::Deflater;
pub use frame::{
    FRAME_HEADER_SIZE, MAGIC, deflate_disk, deflate_disk_with, inflate_disk, read_frame_header,
    write_frame,
};
pub use header::{HEADER_SIZE, Header};
pub use inflate::Inflater;
pub use level::{Level, Width};
pub use nfl8_core::error::{Nfl8Error, Result};
pub use seed::{ClockSeed, FixedSeed, SeedSource};

/// Inflate `data` with `level`.
///
/// Without a `seed` the system clock supplies one. Returns the payload and
/// the header needed to deflate it.
///
/// # Example
///
/// ```rust
/// use nfl8::{Level, inflate_memory};
///
/// let (payload, header) = inflate_memory(&[0xFF], Level::fixed(3).unwrap(), Some(1)).unwrap();
/// assert_eq!(header.inflated_bits, 11);
/// assert_eq!(payload, [0x1F, 0x07]);
/// ```
pub fn inflate_memory(data: &[u8], level: Level, seed: Option<u32>) -> Result<(Vec<u8>, Header)> {
    Inflater::new(level).inflate(data, seed)
}

/// Deflate `payload` described by `header`.
///
/// With `validate` set, the CRC-32 of the output must match the header.
///
/// # Errors
///
/// - `InsufficientSize` if `payload` does not have `ceil(inflated_bits / 8)`
///   bytes
/// - `BadCrc` if validation is on and the checksum differs
pub fn deflate_memory(payload: &[u8], header: &Header, validate: bool) -> Result<Vec<u8>> {
    let deflater = if validate {
        Deflater::new()
    } else {
        Deflater::without_validation()
    };
    deflater.deflate(payload, header)
}
