//! Inflater: original bytes in, padded payload and header out.

use crate::header::Header;
use crate::level::Level;
use crate::seed::{ClockSeed, SeedSource};
use crate::transform::inflate_bits;
use nfl8_core::bits::BitView;
use nfl8_core::crc::Crc32;
use nfl8_core::error::Result;

/// Inflates whole buffers with one level.
///
/// The seed source is only consulted when [`Inflater::inflate`] is called
/// without an explicit seed.
#[derive(Debug, Clone, Default)]
pub struct Inflater<S: SeedSource = ClockSeed> {
    level: Level,
    seeds: S,
}

impl Inflater {
    /// Create an inflater that seeds from the system clock.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            seeds: ClockSeed,
        }
    }
}

impl<S: SeedSource> Inflater<S> {
    /// Create an inflater with a custom seed source.
    pub fn with_seed_source(level: Level, seeds: S) -> Self {
        Self { level, seeds }
    }

    /// Level applied by this inflater.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Inflate `data`.
    ///
    /// Returns the payload (exactly `ceil(inflated_bits / 8)` bytes, zero tail
    /// bits) and the header needed to deflate it.
    pub fn inflate(&mut self, data: &[u8], seed: Option<u32>) -> Result<(Vec<u8>, Header)> {
        let seed = seed.unwrap_or_else(|| self.seeds.next_seed());
        let source = BitView::new(data);

        let inflated = inflate_bits(&source, self.level, seed)?;
        let header = Header {
            level: self.level,
            inflated_bits: inflated.bit_len() as u64,
            deflated_bits: source.bit_len() as u64,
            checksum: Crc32::compute(data),
            seed,
        };

        Ok((inflated.into_bytes(), header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FixedSeed;

    #[test]
    fn test_header_fields() {
        let level = Level::fixed(3).unwrap();
        let mut inflater = Inflater::new(level);
        let (payload, header) = inflater.inflate(b"hello", Some(42)).unwrap();

        assert_eq!(header.level, level);
        assert_eq!(header.seed, 42);
        assert_eq!(header.deflated_bits, 40);
        assert_eq!(header.inflated_bits, level.inflated_len(40).unwrap());
        assert_eq!(header.checksum, Crc32::compute(b"hello"));
        assert_eq!(payload.len() as u64, header.payload_len());
    }

    #[test]
    fn test_seed_source_used_without_seed() {
        let mut inflater =
            Inflater::with_seed_source(Level::random_full(2).unwrap(), FixedSeed(0x1234));
        let (_, header) = inflater.inflate(b"abc", None).unwrap();
        assert_eq!(header.seed, 0x1234);
    }

    #[test]
    fn test_explicit_seed_wins() {
        let mut calls = 0u32;
        let mut inflater = Inflater::with_seed_source(Level::random_partial(1).unwrap(), || {
            calls += 1;
            7
        });
        let (_, header) = inflater.inflate(b"abc", Some(99)).unwrap();
        assert_eq!(header.seed, 99);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_empty_input() {
        let mut inflater = Inflater::new(Level::default());
        let (payload, header) = inflater.inflate(&[], Some(1)).unwrap();
        assert!(payload.is_empty());
        assert_eq!(header.inflated_bits, 0);
        assert_eq!(header.deflated_bits, 0);
        assert_eq!(header.checksum, 0);
    }

    #[test]
    fn test_deterministic() {
        let level = Level::random_full(5).unwrap();
        let a = Inflater::new(level).inflate(b"same input", Some(3)).unwrap();
        let b = Inflater::new(level).inflate(b"same input", Some(3)).unwrap();
        assert_eq!(a, b);
    }
}
