//! Inflate levels: which transform runs and how many filler bits it adds.

use nfl8_core::error::{Nfl8Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of filler bits per 8-bit window, `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Width(u8);

impl Width {
    /// Smallest allowed width.
    pub const MIN: u8 = 1;
    /// Largest allowed width.
    pub const MAX: u8 = 7;

    /// Create a width, rejecting values outside `1..=7`.
    pub fn new(width: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(Nfl8Error::InvalidWidth(width))
        }
    }

    /// Filler bits per window.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Filler bits per window as `usize`.
    #[inline]
    pub const fn bits(self) -> usize {
        self.0 as usize
    }

    /// Real bits carried per window, `8 - width`.
    #[inline]
    pub const fn modulus(self) -> usize {
        8 - self.0 as usize
    }
}

impl TryFrom<u8> for Width {
    type Error = Nfl8Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transform family and width applied uniformly to a whole buffer.
///
/// The wire tag is one byte:
///
/// | Level              | Tag      |
/// |--------------------|----------|
/// | `NoOp`             | 0        |
/// | `Fixed(n)`         | n        |
/// | `RandomPartial(n)` | 7 + n    |
/// | `RandomFull(n)`    | 14 + n   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Copy bits verbatim.
    NoOp,
    /// Append `n` zero bits after every full group.
    Fixed(Width),
    /// Splice `n` zero bits at an LFSR-chosen offset inside every full group.
    RandomPartial(Width),
    /// Scatter every group over LFSR-chosen positions of an 8-bit window.
    RandomFull(Width),
}

const PARTIAL_BASE: u8 = 7;
const FULL_BASE: u8 = 14;

impl Level {
    /// Highest defined tag.
    pub const MAX_TAG: u8 = FULL_BASE + Width::MAX;

    /// `Fixed(width)`, validating the width.
    pub fn fixed(width: u8) -> Result<Self> {
        Width::new(width).map(Self::Fixed)
    }

    /// `RandomPartial(width)`, validating the width.
    pub fn random_partial(width: u8) -> Result<Self> {
        Width::new(width).map(Self::RandomPartial)
    }

    /// `RandomFull(width)`, validating the width.
    pub fn random_full(width: u8) -> Result<Self> {
        Width::new(width).map(Self::RandomFull)
    }

    /// Wire tag of the level.
    pub fn tag(self) -> u8 {
        match self {
            Self::NoOp => 0,
            Self::Fixed(w) => w.get(),
            Self::RandomPartial(w) => PARTIAL_BASE + w.get(),
            Self::RandomFull(w) => FULL_BASE + w.get(),
        }
    }

    /// Decode a wire tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::NoOp),
            1..=7 => Width::new(tag).map(Self::Fixed),
            8..=14 => Width::new(tag - PARTIAL_BASE).map(Self::RandomPartial),
            15..=21 => Width::new(tag - FULL_BASE).map(Self::RandomFull),
            _ => Err(Nfl8Error::UnsupportedInflateLevel(tag)),
        }
    }

    /// Filler width, `None` for `NoOp`.
    pub fn width(self) -> Option<Width> {
        match self {
            Self::NoOp => None,
            Self::Fixed(w) | Self::RandomPartial(w) | Self::RandomFull(w) => Some(w),
        }
    }

    /// Whether the transform draws from the LFSR.
    pub fn is_random(self) -> bool {
        matches!(self, Self::RandomPartial(_) | Self::RandomFull(_))
    }

    /// Number of inflated bits produced from `deflated_bits` source bits.
    ///
    /// `None` if the count does not fit in a `u64`.
    pub fn inflated_len(self, deflated_bits: u64) -> Option<u64> {
        match self {
            Self::NoOp => Some(deflated_bits),
            Self::Fixed(w) | Self::RandomPartial(w) => (deflated_bits / w.modulus() as u64)
                .checked_mul(w.get() as u64)
                .and_then(|pad| deflated_bits.checked_add(pad)),
            Self::RandomFull(w) => deflated_bits.div_ceil(w.modulus() as u64).checked_mul(8),
        }
    }
}

impl Default for Level {
    /// `Fixed(3)`.
    fn default() -> Self {
        Self::Fixed(Width(3))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => write!(f, "noop"),
            Self::Fixed(w) => write!(f, "fixed:{}", w),
            Self::RandomPartial(w) => write!(f, "partial:{}", w),
            Self::RandomFull(w) => write!(f, "full:{}", w),
        }
    }
}

impl FromStr for Level {
    type Err = Nfl8Error;

    /// Parse `noop`, `fixed:N`, `partial:N` or `full:N`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s == "noop" {
            return Ok(Self::NoOp);
        }

        let (family, width) = s
            .split_once(':')
            .ok_or_else(|| Nfl8Error::invalid_level(format!("'{}' is not FAMILY:WIDTH", s)))?;
        let width: u8 = width
            .parse()
            .map_err(|_| Nfl8Error::invalid_level(format!("bad width '{}'", width)))?;

        match family {
            "fixed" => Self::fixed(width),
            "partial" => Self::random_partial(width),
            "full" => Self::random_full(width),
            other => Err(Nfl8Error::invalid_level(format!(
                "unknown family '{}' (expected noop, fixed, partial or full)",
                other
            ))),
        }
    }
}
