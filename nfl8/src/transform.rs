//! The four inflate/deflate transforms.
//!
//! Source bits are processed in groups of `modulus = 8 - width` bits; the last
//! group may be short. Every full group becomes one 8-bit window of the
//! inflated stream.
//!
//! The random transforms draw from an [`Lfsr`] seeded with the header seed.
//! Inflate and deflate make the same draws in the same order with the same
//! bounds:
//!
//! - `RandomPartial`: one `choose(modulus)` per full group, none for a short
//!   trailing group.
//! - `RandomFull`: `group_len` draws per group, the k-th one with bound
//!   `8 - k`.

use crate::level::{Level, Width};
use nfl8_core::prelude::{BitBuffer, BitView, Lfsr, Result};
use std::iter::repeat_n;

const WINDOW: usize = 8;

/// Inflate every bit of `source` with `level`.
pub(crate) fn inflate_bits(source: &BitView<'_>, level: Level, seed: u32) -> Result<BitBuffer> {
    match level {
        Level::NoOp => source.to_buffer(),
        Level::Fixed(width) => inflate_fixed(source, width),
        Level::RandomPartial(width) => inflate_partial(source, width, &mut Lfsr::new(seed)),
        Level::RandomFull(width) => inflate_full(source, width, &mut Lfsr::new(seed)),
    }
}

/// Undo [`inflate_bits`]. `deflated_bits` is the original bit length.
pub(crate) fn deflate_bits(
    source: &BitView<'_>,
    level: Level,
    seed: u32,
    deflated_bits: usize,
) -> Result<BitBuffer> {
    match level {
        Level::NoOp => source.to_buffer(),
        Level::Fixed(width) => deflate_fixed(source, width),
        Level::RandomPartial(width) => deflate_partial(source, width, &mut Lfsr::new(seed)),
        Level::RandomFull(width) => {
            deflate_full(source, width, &mut Lfsr::new(seed), deflated_bits)
        }
    }
}

fn output_for(source: &BitView<'_>, level: Level) -> BitBuffer {
    let bits = level.inflated_len(source.bit_len() as u64).unwrap_or(0);
    BitBuffer::with_capacity(usize::try_from(bits).unwrap_or(0))
}

fn inflate_fixed(source: &BitView<'_>, width: Width) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let total = source.bit_len();
    let mut out = output_for(source, Level::Fixed(width));

    let mut offset = 0;
    while offset < total {
        let len = modulus.min(total - offset);
        out.push_bits(&source.read_bits(offset, len)?)?;

        // short trailing groups are not padded
        if len == modulus {
            out.push_bits(repeat_n(false, width.bits()))?;
        }
        offset += len;
    }

    Ok(out)
}

fn deflate_fixed(source: &BitView<'_>, width: Width) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let total = source.bit_len();
    let mut out = BitBuffer::with_capacity(total);

    let mut offset = 0;
    while offset < total {
        let len = modulus.min(total - offset);
        out.push_bits(&source.read_bits(offset, len)?)?;
        offset += WINDOW;
    }

    Ok(out)
}

fn inflate_partial(source: &BitView<'_>, width: Width, lfsr: &mut Lfsr) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let total = source.bit_len();
    let mut out = output_for(source, Level::RandomPartial(width));

    let mut offset = 0;
    while offset < total {
        let len = modulus.min(total - offset);
        let mut group = source.read_bits(offset, len)?;

        if len == modulus {
            let index = lfsr.choose(modulus);
            group.insert_bits(index, repeat_n(false, width.bits()))?;
        }

        out.push_bits(&group)?;
        offset += len;
    }

    Ok(out)
}

fn deflate_partial(source: &BitView<'_>, width: Width, lfsr: &mut Lfsr) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let total = source.bit_len();
    let mut out = BitBuffer::with_capacity(total);

    let mut offset = 0;
    while offset < total {
        let remaining = total - offset;

        // A window shorter than 8 bits can only be the unpadded trailing group.
        if remaining < WINDOW {
            out.push_bits(&source.read_bits(offset, remaining)?)?;
            break;
        }

        let mut window = source.read_bits(offset, WINDOW)?;
        let index = lfsr.choose(modulus);
        window.erase_bits(index, width.bits())?;
        out.push_bits(&window)?;
        offset += WINDOW;
    }

    Ok(out)
}

/// Pick `count` distinct window positions.
///
/// Each draw indexes into the positions not taken yet, in ascending order.
/// Only the first `count` entries of the result are meaningful.
fn select_positions(lfsr: &mut Lfsr, count: usize) -> [usize; WINDOW] {
    let mut free = [0, 1, 2, 3, 4, 5, 6, 7];
    let mut remaining = WINDOW;
    let mut chosen = [0usize; WINDOW];

    for slot in chosen.iter_mut().take(count) {
        let j = lfsr.choose(remaining);
        *slot = free[j];
        free.copy_within(j + 1..remaining, j);
        remaining -= 1;
    }

    chosen
}

fn inflate_full(source: &BitView<'_>, width: Width, lfsr: &mut Lfsr) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let total = source.bit_len();
    let mut out = output_for(source, Level::RandomFull(width));

    let mut offset = 0;
    while offset < total {
        let len = modulus.min(total - offset);
        let positions = select_positions(lfsr, len);

        let mut window = BitBuffer::zeroed(WINDOW);
        for (k, &pos) in positions[..len].iter().enumerate() {
            window.set_bit(pos, source.get_bit(offset + k)?)?;
        }

        out.push_bits(&window)?;
        offset += len;
    }

    Ok(out)
}

fn deflate_full(
    source: &BitView<'_>,
    width: Width,
    lfsr: &mut Lfsr,
    deflated_bits: usize,
) -> Result<BitBuffer> {
    let modulus = width.modulus();
    let mut out = BitBuffer::with_capacity(deflated_bits.min(source.bit_len()));

    let mut window_start = 0;
    while out.bit_len() < deflated_bits {
        let len = modulus.min(deflated_bits - out.bit_len());
        let positions = select_positions(lfsr, len);

        for &pos in &positions[..len] {
            out.push_bit(source.get_bit(window_start + pos)?);
        }
        window_start += WINDOW;
    }

    Ok(out)
}
