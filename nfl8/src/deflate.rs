//! Deflater: payload and header in, original bytes out.

use crate::header::Header;
use crate::transform::deflate_bits;
use nfl8_core::bits::BitView;
use nfl8_core::crc::Crc32;
use nfl8_core::error::{Nfl8Error, Result};

/// Reverses an inflate call described by a [`Header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deflater {
    validate: bool,
}

impl Deflater {
    /// Create a deflater that checks the CRC-32 of the output.
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Create a deflater that skips the CRC-32 check.
    pub fn without_validation() -> Self {
        Self { validate: false }
    }

    /// Whether the CRC-32 is checked.
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Recover the original bytes from `payload`.
    ///
    /// # Errors
    ///
    /// - `InsufficientSize` if the header's bit counts disagree with its level,
    ///   or `payload` is not exactly `ceil(inflated_bits / 8)` bytes
    /// - `BadCrc` if validation is on and the output checksum differs
    pub fn deflate(&self, payload: &[u8], header: &Header) -> Result<Vec<u8>> {
        match header.level.inflated_len(header.deflated_bits) {
            Some(bits) if bits == header.inflated_bits => {}
            expected => {
                return Err(Nfl8Error::insufficient_size(
                    saturate(header.inflated_bits),
                    expected.map_or(usize::MAX, saturate),
                ));
            }
        }

        let needed = header.payload_len();
        if payload.len() as u64 != needed {
            return Err(Nfl8Error::insufficient_size(payload.len(), saturate(needed)));
        }

        // deflated_bits <= inflated_bits <= 8 * payload.len() for every level
        let source = BitView::with_bit_len(payload, saturate(header.inflated_bits))?;
        let output = deflate_bits(
            &source,
            header.level,
            header.seed,
            saturate(header.deflated_bits),
        )?
        .into_bytes();

        if self.validate {
            let computed = Crc32::compute(&output);
            if computed != header.checksum {
                return Err(Nfl8Error::bad_crc(computed, header.checksum));
            }
        }

        Ok(output)
    }
}

impl Default for Deflater {
    fn default() -> Self {
        Self::new()
    }
}

fn saturate(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
