//! Pseudorandom bit source.
//!
//! A 32-bit Galois linear-feedback shift register. The codec seeds one per
//! operation from the header seed; inflate and deflate must drive their
//! registers with exactly the same sequence of draws, otherwise the two passes
//! pick different bit positions and the data cannot be recovered.
//!
//! ```
//! use nfl8_core::prbs::Lfsr;
//!
//! let mut a = Lfsr::new(0xC0FFEE);
//! let mut b = Lfsr::new(0xC0FFEE);
//! for _ in 0..16 {
//!     assert_eq!(a.choose(5), b.choose(5));
//! }
//! ```

/// Feedback mask for taps 32, 22, 2, 1 (maximal length).
const FEEDBACK: u32 = 0x8020_0003;

/// State substituted for a zero seed; zero is a fixed point of the register.
const ZERO_SEED_STATE: u32 = 0xACE1_ACE1;

/// Seeded linear-feedback shift register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: u32,
}

impl Lfsr {
    /// Create a register from `seed`.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_STATE } else { seed };
        Self { state }
    }

    /// Current register state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Clock the register once and return the output bit.
    #[inline]
    pub fn step(&mut self) -> bool {
        let out = self.state & 1 != 0;
        self.state >>= 1;
        if out {
            self.state ^= FEEDBACK;
        }
        out
    }

    /// Draw the next value: 32 output bits packed LSB-first.
    pub fn next_u32(&mut self) -> u32 {
        let mut value = 0u32;
        for i in 0..32 {
            value |= (self.step() as u32) << i;
        }
        value
    }

    /// Draw the next value reduced modulo `bound`.
    ///
    /// `bound` must be non-zero.
    #[inline]
    pub fn choose(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "choose() needs a non-zero bound");
        self.next_u32() as usize % bound
    }
}
