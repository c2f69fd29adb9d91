//! Where inflate gets its LFSR seed when the caller does not pass one.
//!
//! The seed source is consulted at most once per inflate call and only when no
//! explicit seed is given. The chosen seed always ends up in the header.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies seeds for inflate calls without an explicit seed.
pub trait SeedSource {
    /// Produce the next seed.
    fn next_seed(&mut self) -> u32;
}

/// Seeds from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
            .unwrap_or(0)
    }
}

/// Always returns the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u32 {
        self.0
    }
}

impl<F: FnMut() -> u32> SeedSource for F {
    fn next_seed(&mut self) -> u32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed() {
        let mut source = FixedSeed(7);
        assert_eq!(source.next_seed(), 7);
        assert_eq!(source.next_seed(), 7);
    }

    #[test]
    fn test_closure_seed() {
        let mut n = 0u32;
        let mut source = || {
            n += 1;
            n
        };
        assert_eq!(source.next_seed(), 1);
        assert_eq!(source.next_seed(), 2);
    }
}
