//! Self-describing framing for storing inflated data.
//!
//! ```text
//! +------+----------------+----------------------------+
//! | NFL8 | header (25 B)  | payload (ceil(bits/8) B)   |
//! +------+----------------+----------------------------+
//! ```

use crate::deflate::Deflater;
use crate::header::{HEADER_SIZE, Header};
use crate::inflate::Inflater;
use crate::level::Level;
use nfl8_core::error::{Nfl8Error, Result};

/// Frame tag.
pub const MAGIC: [u8; 4] = *b"NFL8";

/// Bytes before the payload: magic plus header.
pub const FRAME_HEADER_SIZE: usize = MAGIC.len() + HEADER_SIZE;

/// Inflate `data` and wrap the payload in a frame.
pub fn inflate_disk(data: &[u8], level: Level, seed: Option<u32>) -> Result<Vec<u8>> {
    let (payload, header) = Inflater::new(level).inflate(data, seed)?;
    Ok(write_frame(&header, &payload))
}

/// Build a frame from a header and its payload.
pub fn write_frame(header: &Header, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(payload);
    out
}

/// Parse the frame prefix without touching the payload.
pub fn read_frame_header(framed: &[u8]) -> Result<Header> {
    let magic = framed
        .get(..MAGIC.len())
        .ok_or_else(|| Nfl8Error::insufficient_size(framed.len(), MAGIC.len()))?;
    if magic != MAGIC {
        return Err(Nfl8Error::bad_magic(magic));
    }

    if framed.len() < FRAME_HEADER_SIZE {
        return Err(Nfl8Error::insufficient_size(
            framed.len(),
            FRAME_HEADER_SIZE,
        ));
    }

    Header::from_bytes(&framed[MAGIC.len()..])
}

/// Decode a frame, checking the CRC-32.
pub fn deflate_disk(framed: &[u8]) -> Result<Vec<u8>> {
    deflate_disk_with(framed, &Deflater::new())
}

/// Decode a frame with a caller-configured [`Deflater`].
pub fn deflate_disk_with(framed: &[u8], deflater: &Deflater) -> Result<Vec<u8>> {
    let header = read_frame_header(framed)?;
    deflater.deflate(&framed[FRAME_HEADER_SIZE..], &header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let framed = inflate_disk(b"frame me", Level::fixed(2).unwrap(), Some(5)).unwrap();
        assert_eq!(&framed[..4], b"NFL8");
        assert_eq!(framed[4], 2);

        let header = read_frame_header(&framed).unwrap();
        assert_eq!(header.seed, 5);
        assert_eq!(
            framed.len() as u64,
            FRAME_HEADER_SIZE as u64 + header.payload_len()
        );
        assert_eq!(deflate_disk(&framed).unwrap(), b"frame me");
    }

    #[test]
    fn test_too_short_for_magic() {
        assert_eq!(
            deflate_disk(b"NF"),
            Err(Nfl8Error::insufficient_size(2, 4))
        );
    }

    #[test]
    fn test_bad_magic() {
        assert_eq!(
            deflate_disk(b"GZIP and more bytes"),
            Err(Nfl8Error::BadHeaderMagic {
                found: *b"GZIP"
            })
        );
    }

    #[test]
    fn test_truncated_header() {
        let framed = inflate_disk(b"x", Level::NoOp, Some(0)).unwrap();
        assert_eq!(
            deflate_disk(&framed[..20]),
            Err(Nfl8Error::insufficient_size(20, FRAME_HEADER_SIZE))
        );
    }

    #[test]
    fn test_unknown_level_tag() {
        let mut framed = inflate_disk(b"x", Level::NoOp, Some(0)).unwrap();
        framed[4] = 22;
        assert_eq!(
            deflate_disk(&framed),
            Err(Nfl8Error::UnsupportedInflateLevel(22))
        );
    }

    #[test]
    fn test_oversized_bit_counts() {
        for (level, deflated_bits) in [
            (Level::fixed(1).unwrap(), u64::MAX),
            (Level::random_full(1).unwrap(), 7 << 61),
        ] {
            let header = Header {
                level,
                inflated_bits: 0,
                deflated_bits,
                checksum: 0,
                seed: 0,
            };
            let framed = write_frame(&header, &[]);
            assert_eq!(framed.len(), FRAME_HEADER_SIZE);
            assert!(matches!(
                deflate_disk(&framed),
                Err(Nfl8Error::InsufficientSize { given: 0, .. })
            ));
        }
    }

    #[test]
    fn test_no_verify() {
        let mut framed = inflate_disk(b"abc", Level::NoOp, Some(0)).unwrap();
        let last = framed.len() - 1;
        framed[last] ^= 0x01;
        assert!(matches!(
            deflate_disk(&framed),
            Err(Nfl8Error::BadCrc { .. })
        ));
        let raw = deflate_disk_with(&framed, &Deflater::without_validation()).unwrap();
        assert_eq!(raw, b"abb");
    }
}
