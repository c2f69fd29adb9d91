//! NFL8 header: what deflate needs to undo an inflate.
//!
//! The header is serialized field by field in little-endian order; its
//! in-memory layout never matters.
//!
//! | Offset | Size | Field           |
//! |--------|------|-----------------|
//! | 0      | 1    | level tag       |
//! | 1      | 8    | inflated bits   |
//! | 9      | 8    | deflated bits   |
//! | 17     | 4    | CRC-32          |
//! | 21     | 4    | LFSR seed       |

use crate::level::Level;
use nfl8_core::error::{Nfl8Error, Result};

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 25;

/// Parameters of one inflate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    /// Transform that produced the payload.
    pub level: Level,
    /// Bit length of the inflated payload.
    pub inflated_bits: u64,
    /// Bit length of the original data.
    pub deflated_bits: u64,
    /// CRC-32 of the original data.
    pub checksum: u32,
    /// LFSR seed used by the random levels.
    pub seed: u32,
}

impl Header {
    /// Number of payload bytes the header describes, `ceil(inflated_bits / 8)`.
    pub fn payload_len(&self) -> u64 {
        self.inflated_bits.div_ceil(8)
    }

    /// Number of original bytes, `ceil(deflated_bits / 8)`.
    pub fn deflated_len(&self) -> u64 {
        self.deflated_bits.div_ceil(8)
    }

    /// Inflated size over deflated size, `1.0` for empty data.
    pub fn expansion_ratio(&self) -> f64 {
        if self.deflated_bits == 0 {
            return 1.0;
        }
        self.inflated_bits as f64 / self.deflated_bits as f64
    }

    /// Serialize to the 25-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0] = self.level.tag();
        out[1..9].copy_from_slice(&self.inflated_bits.to_le_bytes());
        out[9..17].copy_from_slice(&self.deflated_bits.to_le_bytes());
        out[17..21].copy_from_slice(&self.checksum.to_le_bytes());
        out[21..25].copy_from_slice(&self.seed.to_le_bytes());
        out
    }

    /// Parse the wire form from the start of `bytes`.
    ///
    /// Bytes past [`HEADER_SIZE`] are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let buf: &[u8; HEADER_SIZE] = bytes
            .get(..HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| Nfl8Error::insufficient_size(bytes.len(), HEADER_SIZE))?;

        let level = Level::from_tag(buf[0])?;
        let inflated_bits = u64::from_le_bytes([
            buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7], buf[8],
        ]);
        let deflated_bits = u64::from_le_bytes([
            buf[9], buf[10], buf[11], buf[12], buf[13], buf[14], buf[15], buf[16],
        ]);
        let checksum = u32::from_le_bytes([buf[17], buf[18], buf[19], buf[20]]);
        let seed = u32::from_le_bytes([buf[21], buf[22], buf[23], buf[24]]);

        Ok(Self {
            level,
            inflated_bits,
            deflated_bits,
            checksum,
            seed,
        })
    }
}
