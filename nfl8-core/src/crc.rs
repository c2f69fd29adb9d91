//! Checksum over the original bytes.
//!
//! The header stores the reflected CRC-32 of the data passed to inflate, and
//! deflate recomputes it over what it recovers. Buffers of 16 bytes or more
//! are folded eight bytes at a time; anything shorter goes byte by byte.

/// Reflected CRC-32 polynomial.
const POLY: u32 = 0xEDB88320;

/// Byte tables for the eight-wide fold. `[0]` alone drives the byte-by-byte fold.
const CRC32_TABLES: [[u32; 256]; 8] = {
    let mut tables = [[0u32; 256]; 8];

    let mut byte = 0;
    while byte < 256 {
        let mut reg = byte as u32;
        let mut bit = 0;
        while bit < 8 {
            reg = (reg >> 1) ^ (POLY & (reg & 1).wrapping_neg());
            bit += 1;
        }
        tables[0][byte] = reg;
        byte += 1;
    }

    // tables[k][b] is tables[k - 1][b] pushed through one more zero byte
    let mut k = 1;
    while k < 8 {
        let mut byte = 0;
        while byte < 256 {
            let prev = tables[k - 1][byte];
            tables[k][byte] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
            byte += 1;
        }
        k += 1;
    }

    tables
};

/// Register value before any byte is folded in, and the mask applied on output.
const INVERT: u32 = 0xFFFF_FFFF;

/// Running CRC-32 over data fed in pieces.
///
/// ```
/// use nfl8_core::crc::Crc32;
///
/// let mut crc = Crc32::new();
/// crc.update(b"Hello, ");
/// crc.update(b"World!");
/// assert_eq!(crc.finalize(), 0xEC4AC3D0);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Empty checksum.
    pub fn new() -> Self {
        Self::resume(0)
    }

    /// Pick up where a finished checksum left off.
    pub fn resume(previous: u32) -> Self {
        Self {
            state: !previous,
        }
    }

    /// Forget everything fed so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold `data` into the checksum.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.state = if data.len() >= 16 {
            fold_wide(self.state, data)
        } else {
            fold_bytes(self.state, data)
        };
    }

    /// Checksum of everything fed so far; more data may follow.
    #[inline]
    pub fn value(&self) -> u32 {
        self.state ^ INVERT
    }

    /// Checksum of everything fed so far.
    #[inline]
    pub fn finalize(self) -> u32 {
        self.value()
    }

    /// One-shot checksum of `data`.
    #[inline]
    pub fn compute(data: &[u8]) -> u32 {
        Self::compute_with_init(data, 0)
    }

    /// One-shot checksum of `data` appended to whatever produced `init`.
    ///
    /// `compute_with_init(b, compute(a)) == compute(a ++ b)`.
    pub fn compute_with_init(data: &[u8], init: u32) -> u32 {
        let mut crc = Self::resume(init);
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn fold_bytes(state: u32, data: &[u8]) -> u32 {
    data.iter().fold(state, |reg, &byte| {
        CRC32_TABLES[0][usize::from(reg as u8 ^ byte)] ^ (reg >> 8)
    })
}

#[inline]
fn fold_wide(state: u32, data: &[u8]) -> u32 {
    let mut chunks = data.chunks_exact(8);
    let mut reg = state;

    for chunk in &mut chunks {
        let [a, b, c, d] = (reg ^ u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .to_le_bytes();

        reg = CRC32_TABLES[7][usize::from(a)]
            ^ CRC32_TABLES[6][usize::from(b)]
            ^ CRC32_TABLES[5][usize::from(c)]
            ^ CRC32_TABLES[4][usize::from(d)]
            ^ CRC32_TABLES[3][usize::from(chunk[4])]
            ^ CRC32_TABLES[2][usize::from(chunk[5])]
            ^ CRC32_TABLES[1][usize::from(chunk[6])]
            ^ CRC32_TABLES[0][usize::from(chunk[7])];
    }

    fold_bytes(reg, chunks.remainder())
}
