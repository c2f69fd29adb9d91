//! Bit-addressable views and buffers.
//!
//! [`BitView`] is a non-owning window over a byte slice, [`BitBuffer`] is an
//! owning, resizable bit vector built on top of it. Both address bits
//! LSB-first: bit `i` lives in byte `i / 8` at bit position `i % 8`.
//!
//! A view either borrows its storage read-only ([`BitView::new`]) or holds the
//! only mutable borrow of it ([`BitView::new_mut`]). Writes through a
//! read-only view fail with [`Nfl8Error::ImmutableBufferWrite`]; the borrow
//! checker rules out aliasing between the two kinds.
//!
//! # Example
//!
//! ```
//! use nfl8_core::bits::{BitBuffer, BitView};
//!
//! let data = [0xC0, 0x1D];
//! let view = BitView::new(&data);
//! assert!(!view.get_bit(0).unwrap());
//! assert!(view.get_bit(7).unwrap());
//!
//! let mut buf = view.to_buffer().unwrap();
//! buf.insert_bits(4, [true, true]).unwrap();
//! assert_eq!(buf.bit_len(), 18);
//! buf.erase_bits(4, 2).unwrap();
//! assert_eq!(buf.as_bytes(), &data);
//! ```

use crate::error::{Nfl8Error, Result};
use std::iter::FusedIterator;

#[inline]
fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[inline]
fn get_raw(bytes: &[u8], index: usize) -> bool {
    (bytes[index / 8] >> (index % 8)) & 1 != 0
}

#[inline]
fn set_raw(bytes: &mut [u8], index: usize, bit: bool) {
    let mask = 1u8 << (index % 8);
    if bit {
        bytes[index / 8] |= mask;
    } else {
        bytes[index / 8] &= !mask;
    }
}

#[derive(Debug, Default)]
enum Storage<'a> {
    #[default]
    Unbound,
    Shared(&'a [u8]),
    Exclusive(&'a mut [u8]),
}

/// A non-owning, bit-addressable window over a byte slice.
#[derive(Debug, Default)]
pub struct BitView<'a> {
    storage: Storage<'a>,
    bit_len: usize,
}

impl<'a> BitView<'a> {
    /// Read-only view over all bits of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bit_len: data.len() * 8,
            storage: Storage::Shared(data),
        }
    }

    /// Read-only view over the first `bit_len` bits of `data`.
    pub fn with_bit_len(data: &'a [u8], bit_len: usize) -> Result<Self> {
        let boundary = data.len().saturating_mul(8);
        if bit_len > boundary {
            return Err(Nfl8Error::out_of_bounds(bit_len, boundary));
        }
        Ok(Self {
            storage: Storage::Shared(data),
            bit_len,
        })
    }

    /// Mutable view over all bits of `data`.
    pub fn new_mut(data: &'a mut [u8]) -> Self {
        Self {
            bit_len: data.len() * 8,
            storage: Storage::Exclusive(data),
        }
    }

    /// Mutable view over the first `bit_len` bits of `data`.
    pub fn with_bit_len_mut(data: &'a mut [u8], bit_len: usize) -> Result<Self> {
        let boundary = data.len().saturating_mul(8);
        if bit_len > boundary {
            return Err(Nfl8Error::out_of_bounds(bit_len, boundary));
        }
        Ok(Self {
            storage: Storage::Exclusive(data),
            bit_len,
        })
    }

    /// A view that is not bound to any storage. Every access fails with
    /// [`Nfl8Error::NullBuffer`].
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Whether the view is bound to storage.
    pub fn is_bound(&self) -> bool {
        !matches!(self.storage, Storage::Unbound)
    }

    /// Whether writes through this view are allowed.
    pub fn is_mutable(&self) -> bool {
        matches!(self.storage, Storage::Exclusive(_))
    }

    /// Number of addressable bits.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of bytes covering the addressable bits.
    #[inline]
    pub fn byte_len(&self) -> usize {
        bytes_for(self.bit_len)
    }

    /// Whether the view covers zero bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// The bytes covered by the view.
    ///
    /// Bits of the last byte past [`bit_len`](Self::bit_len) are whatever the
    /// underlying storage holds.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        let byte_len = self.byte_len();
        match &self.storage {
            Storage::Unbound => Err(Nfl8Error::NullBuffer),
            Storage::Shared(data) => Ok(&data[..byte_len]),
            Storage::Exclusive(data) => Ok(&data[..byte_len]),
        }
    }

    fn bytes_mut(&mut self) -> Result<&mut [u8]> {
        let byte_len = self.byte_len();
        match &mut self.storage {
            Storage::Unbound => Err(Nfl8Error::NullBuffer),
            Storage::Shared(_) => Err(Nfl8Error::ImmutableBufferWrite),
            Storage::Exclusive(data) => Ok(&mut data[..byte_len]),
        }
    }

    /// Reborrow as a read-only view of the same bits.
    pub fn as_shared(&self) -> BitView<'_> {
        let storage = match &self.storage {
            Storage::Unbound => Storage::Unbound,
            Storage::Shared(data) => Storage::Shared(data),
            Storage::Exclusive(data) => Storage::Shared(data),
        };
        BitView {
            storage,
            bit_len: self.bit_len,
        }
    }

    /// Read the bit at `index`.
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        let bytes = self.as_bytes()?;
        if index >= self.bit_len {
            return Err(Nfl8Error::out_of_bounds(index, self.bit_len));
        }
        Ok(get_raw(bytes, index))
    }

    /// Write the bit at `index`.
    pub fn set_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        let bit_len = self.bit_len;
        let bytes = self.bytes_mut()?;
        if index >= bit_len {
            return Err(Nfl8Error::out_of_bounds(index, bit_len));
        }
        set_raw(bytes, index, bit);
        Ok(())
    }

    /// Read the byte at `index`.
    pub fn get_byte(&self, index: usize) -> Result<u8> {
        let bytes = self.as_bytes()?;
        bytes
            .get(index)
            .copied()
            .ok_or_else(|| Nfl8Error::out_of_bounds(index, bytes.len()))
    }

    /// Write the byte at `index`.
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<()> {
        let bytes = self.bytes_mut()?;
        let boundary = bytes.len();
        let slot = bytes
            .get_mut(index)
            .ok_or_else(|| Nfl8Error::out_of_bounds(index, boundary))?;
        *slot = value;
        Ok(())
    }

    /// Copy `count` bits starting at `index` into a new buffer.
    pub fn read_bits(&self, index: usize, count: usize) -> Result<BitBuffer> {
        let bytes = self.as_bytes()?;
        let end = index.saturating_add(count);
        if end > self.bit_len {
            return Err(Nfl8Error::out_of_bounds(end, self.bit_len));
        }

        let first = index / 8;
        let shift = index % 8;
        let out_len = bytes_for(count);
        let mut out = Vec::with_capacity(out_len);

        if shift == 0 {
            out.extend_from_slice(&bytes[first..first + out_len]);
        } else {
            for j in first..first + out_len {
                let lo = bytes[j] >> shift;
                let hi = bytes.get(j + 1).map_or(0, |b| b << (8 - shift));
                out.push(lo | hi);
            }
        }

        Ok(BitBuffer::from_raw_parts(out, count))
    }

    /// Overwrite bits starting at `index` with `bits`.
    ///
    /// The whole range is checked before anything is written.
    pub fn write_bits<I>(&mut self, index: usize, bits: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: ExactSizeIterator,
    {
        let bits = bits.into_iter();
        let count = bits.len();
        let bit_len = self.bit_len;
        let bytes = self.bytes_mut()?;

        let end = index.saturating_add(count);
        if end > bit_len {
            return Err(Nfl8Error::out_of_bounds(end, bit_len));
        }

        for (offset, bit) in bits.take(count).enumerate() {
            set_raw(bytes, index + offset, bit);
        }
        Ok(())
    }

    /// Iterate over the bits of the view.
    pub fn iter(&self) -> Bits<'_> {
        let bytes = self.as_bytes().unwrap_or(&[]);
        Bits::new(bytes, self.bit_len)
    }

    /// Copy the whole view into a new buffer.
    pub fn to_buffer(&self) -> Result<BitBuffer> {
        self.read_bits(0, self.bit_len)
    }
}

impl PartialEq for BitView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bit_len == other.bit_len && self.iter().eq(other.iter())
    }
}

impl Eq for BitView<'_> {}

impl PartialEq<BitBuffer> for BitView<'_> {
    fn eq(&self, other: &BitBuffer) -> bool {
        self.bit_len == other.bit_len && self.iter().eq(other.iter())
    }
}

impl PartialEq<BitView<'_>> for BitBuffer {
    fn eq(&self, other: &BitView<'_>) -> bool {
        other == self
    }
}

impl<'a> IntoIterator for &'a BitView<'_> {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over bits, front to back.
///
/// Cloning the iterator restarts from the clone's position without touching
/// the original.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Bits<'a> {
    fn new(bytes: &'a [u8], bit_len: usize) -> Self {
        Self {
            bytes,
            front: 0,
            back: bit_len,
        }
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = get_raw(self.bytes, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(get_raw(self.bytes, self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

/// An owning, resizable bit vector.
///
/// Storage is always exactly `ceil(bit_len / 8)` bytes and the unused high
/// bits of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    data: Vec<u8>,
    bit_len: usize,
}

impl BitBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes_for(bits)),
            bit_len: 0,
        }
    }

    /// Create a buffer of `bits` zero bits.
    pub fn zeroed(bits: usize) -> Self {
        Self {
            data: vec![0; bytes_for(bits)],
            bit_len: bits,
        }
    }

    /// Take ownership of `bytes`; the bit length is `8 * bytes.len()`.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let bit_len = bytes.len() * 8;
        Self {
            data: bytes,
            bit_len,
        }
    }

    /// Take ownership of `bytes`, keeping only the first `bit_len` bits.
    pub fn from_bytes_with_len(bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        let boundary = bytes.len().saturating_mul(8);
        if bit_len > boundary {
            return Err(Nfl8Error::out_of_bounds(bit_len, boundary));
        }
        Ok(Self::from_raw_parts(bytes, bit_len))
    }

    fn from_raw_parts(mut data: Vec<u8>, bit_len: usize) -> Self {
        data.truncate(bytes_for(bit_len));
        let mut buf = Self { data, bit_len };
        buf.clear_tail();
        buf
    }

    /// Zero the bits past `bit_len` in the last byte.
    fn clear_tail(&mut self) {
        let used = self.bit_len % 8;
        if used != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }

    /// Number of bits.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of bytes of storage.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// The packed storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the packed storage.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Read-only view over the buffer.
    pub fn view(&self) -> BitView<'_> {
        BitView {
            storage: Storage::Shared(&self.data),
            bit_len: self.bit_len,
        }
    }

    /// Mutable view over the buffer. The view cannot change the length.
    pub fn view_mut(&mut self) -> BitView<'_> {
        BitView {
            storage: Storage::Exclusive(&mut self.data),
            bit_len: self.bit_len,
        }
    }

    /// Read the bit at `index`.
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.view().get_bit(index)
    }

    /// Write the bit at `index`.
    pub fn set_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        self.view_mut().set_bit(index, bit)
    }

    /// Read the byte at `index`.
    pub fn get_byte(&self, index: usize) -> Result<u8> {
        self.view().get_byte(index)
    }

    /// Write the byte at `index`. Bits past the end of the buffer are dropped.
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<()> {
        self.view_mut().set_byte(index, value)?;
        self.clear_tail();
        Ok(())
    }

    /// Copy `count` bits starting at `index` into a new buffer.
    pub fn read_bits(&self, index: usize, count: usize) -> Result<BitBuffer> {
        self.view().read_bits(index, count)
    }

    /// Overwrite bits starting at `index` with `bits`.
    pub fn write_bits<I>(&mut self, index: usize, bits: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: ExactSizeIterator,
    {
        self.view_mut().write_bits(index, bits)
    }

    /// Iterate over the bits of the buffer.
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(&self.data, self.bit_len)
    }

    /// Grow with zero bits or shrink to `bit_len` bits.
    pub fn resize(&mut self, bit_len: usize) {
        if bit_len < self.bit_len {
            self.bit_len = bit_len;
            self.data.truncate(bytes_for(bit_len));
            self.clear_tail();
        } else {
            self.bit_len = bit_len;
            self.data.resize(bytes_for(bit_len), 0);
        }
    }

    /// Shrink to `bit_len` bits; does nothing if the buffer is shorter.
    pub fn truncate(&mut self, bit_len: usize) {
        if bit_len < self.bit_len {
            self.resize(bit_len);
        }
    }

    /// Remove all bits.
    pub fn clear(&mut self) {
        self.data.clear();
        self.bit_len = 0;
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        let index = self.bit_len;
        self.resize(index + 1);
        set_raw(&mut self.data, index, bit);
    }

    /// Append `bits`.
    pub fn push_bits<I>(&mut self, bits: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: ExactSizeIterator,
    {
        let bits = bits.into_iter();
        let index = self.bit_len;
        self.resize(index + bits.len());
        self.write_bits(index, bits)
    }

    /// Remove and return the last bit.
    pub fn pop_bit(&mut self) -> Result<bool> {
        if self.bit_len == 0 {
            return Err(Nfl8Error::NoBits);
        }
        let bit = get_raw(&self.data, self.bit_len - 1);
        self.resize(self.bit_len - 1);
        Ok(bit)
    }

    /// Remove the last `count` bits.
    ///
    /// The bits come back in the order they are popped, last bit of the buffer
    /// first, as `count` calls to [`pop_bit`](Self::pop_bit) would return them.
    pub fn pop_bits(&mut self, count: usize) -> Result<BitBuffer> {
        if count > self.bit_len {
            return Err(Nfl8Error::out_of_bounds(count, self.bit_len));
        }
        let start = self.bit_len - count;
        let tail = self.read_bits(start, count)?;
        self.resize(start);
        Ok(tail.iter().rev().collect())
    }

    /// Insert one bit before `index`.
    pub fn insert_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        self.insert_bits(index, [bit])
    }

    /// Insert `bits` before `index`, shifting the rest of the buffer up.
    pub fn insert_bits<I>(&mut self, index: usize, bits: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: ExactSizeIterator,
    {
        if index > self.bit_len {
            return Err(Nfl8Error::out_of_bounds(index, self.bit_len));
        }
        if index == self.bit_len {
            return self.push_bits(bits);
        }

        let bits = bits.into_iter();
        let count = bits.len();
        let suffix = self.read_bits(index, self.bit_len - index)?;

        self.resize(self.bit_len + count);
        self.write_bits(index, bits)?;
        self.write_bits(index + count, &suffix)
    }

    /// Remove the bit at `index`.
    pub fn erase_bit(&mut self, index: usize) -> Result<()> {
        self.erase_bits(index, 1)
    }

    /// Remove `count` bits starting at `index`, shifting the rest down.
    pub fn erase_bits(&mut self, index: usize, count: usize) -> Result<()> {
        let end = index.saturating_add(count);
        if end > self.bit_len {
            return Err(Nfl8Error::out_of_bounds(end, self.bit_len));
        }
        if end == self.bit_len {
            self.resize(index);
            return Ok(());
        }

        let suffix = self.read_bits(end, self.bit_len - end)?;
        self.resize(self.bit_len - count);
        self.write_bits(index, &suffix)
    }
}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut buf = Self::with_capacity(iter.size_hint().0);
        buf.extend(iter);
        buf
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for bit in iter {
            self.push_bit(bit);
        }
    }
}

impl From<Vec<u8>> for BitBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 5] = [0xC0, 0x1D, 0xC0, 0xFF, 0xEE];

    fn bits(v: &[bool]) -> BitBuffer {
        v.iter().copied().collect()
    }

    #[test]
    fn test_view_bit_order() {
        let view = BitView::new(&SAMPLE);
        assert_eq!(view.bit_len(), 40);
        assert_eq!(view.byte_len(), 5);
        assert!(!view.get_bit(0).unwrap());
        assert!(view.get_bit(7).unwrap());
        assert!(view.get_bit(35).unwrap());
        assert_eq!(view.get_byte(3).unwrap(), 0xFF);
    }

    #[test]
    fn test_view_bounds() {
        let view = BitView::new(&SAMPLE);
        assert_eq!(view.get_bit(40), Err(Nfl8Error::out_of_bounds(40, 40)));
        assert_eq!(view.get_byte(5), Err(Nfl8Error::out_of_bounds(5, 5)));
        assert_eq!(
            view.read_bits(36, 5).unwrap_err(),
            Nfl8Error::out_of_bounds(41, 40)
        );
        assert!(BitView::with_bit_len(&SAMPLE, 41).is_err());
    }

    #[test]
    fn test_view_partial_length() {
        let view = BitView::with_bit_len(&SAMPLE, 12).unwrap();
        assert_eq!(view.byte_len(), 2);
        assert!(view.get_bit(11).unwrap());
        assert!(view.get_bit(12).is_err());
        assert!(view.get_byte(2).is_err());
    }

    #[test]
    fn test_immutable_view_rejects_writes() {
        let data = [0u8; 2];
        let mut view = BitView::new(&data);
        assert!(!view.is_mutable());
        assert_eq!(view.set_bit(0, true), Err(Nfl8Error::ImmutableBufferWrite));
        assert_eq!(view.set_byte(0, 1), Err(Nfl8Error::ImmutableBufferWrite));
        assert_eq!(
            view.write_bits(0, [true]),
            Err(Nfl8Error::ImmutableBufferWrite)
        );
    }

    #[test]
    fn test_unbound_view() {
        let mut view = BitView::unbound();
        assert!(!view.is_bound());
        assert_eq!(view.get_bit(0), Err(Nfl8Error::NullBuffer));
        assert_eq!(view.set_bit(0, true), Err(Nfl8Error::NullBuffer));
        assert_eq!(view.get_byte(0), Err(Nfl8Error::NullBuffer));
        assert_eq!(view.read_bits(0, 0).unwrap_err(), Nfl8Error::NullBuffer);
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_mutable_view_writes_through() {
        let mut data = [0u8; 2];
        {
            let mut view = BitView::new_mut(&mut data);
            view.set_bit(0, true).unwrap();
            view.set_bit(9, true).unwrap();
            view.write_bits(12, [true, false, true]).unwrap();
            assert!(view.set_bit(16, true).is_err());
        }
        assert_eq!(data, [0x01, 0b0101_0010]);
    }

    #[test]
    fn test_read_bits_unaligned() {
        let view = BitView::new(&SAMPLE);
        // bits 4..20 of C0 1D C0 -> 0xDC, 0x01
        let chunk = view.read_bits(4, 16).unwrap();
        assert_eq!(chunk.as_bytes(), &[0xDC, 0x01]);

        let chunk = view.read_bits(6, 3).unwrap();
        assert_eq!(chunk, bits(&[true, true, true]));
        assert_eq!(chunk.as_bytes(), &[0b111]);
    }

    #[test]
    fn test_view_equality_ignores_trailing_bits() {
        let a = [0b0000_0101u8];
        let b = [0b1111_0101u8];
        let va = BitView::with_bit_len(&a, 4).unwrap();
        let vb = BitView::with_bit_len(&b, 4).unwrap();
        assert_eq!(va, vb);
        assert_ne!(BitView::new(&a), BitView::new(&b));
        assert_eq!(va, bits(&[true, false, true, false]));
    }

    #[test]
    fn test_iter_restart_and_reverse() {
        let view = BitView::new(&[0b0000_0110]);
        let iter = view.iter();
        let first: Vec<bool> = iter.clone().take(3).collect();
        let again: Vec<bool> = iter.clone().take(3).collect();
        assert_eq!(first, vec![false, true, true]);
        assert_eq!(first, again);
        assert_eq!(iter.len(), 8);
        assert_eq!(view.iter().rev().nth(5), Some(true));
    }

    #[test]
    fn test_pop_sequence() {
        let mut buf = BitBuffer::from_bytes(SAMPLE.to_vec());

        assert_eq!(buf.pop_bits(4).unwrap(), bits(&[true, true, true, false]));
        assert!(buf.pop_bit().unwrap());
        assert!(buf.pop_bit().unwrap());
        assert!(buf.pop_bit().unwrap());
        assert!(!buf.pop_bit().unwrap());
        assert_eq!(buf.pop_bits(10).unwrap(), bits(&[true; 10]));
        assert_eq!(buf.pop_bits(6).unwrap(), bits(&[false; 6]));
        assert_eq!(buf.as_bytes(), &[0xC0, 0x1D]);
    }

    #[test]
    fn test_push_insert_erase_sequence() {
        let mut buf = BitBuffer::from_bytes(vec![0xC0, 0x1D]);
        let abad1dea = BitBuffer::from_bytes(vec![0xAB, 0xAD, 0x1D, 0xEA]);
        buf.push_bits(&abad1dea).unwrap();
        assert_eq!(buf.as_bytes(), &[0xC0, 0x1D, 0xAB, 0xAD, 0x1D, 0xEA]);

        let beef = BitBuffer::from_bytes(vec![0xBE, 0xEF]);
        buf.insert_bits(20, &beef).unwrap();
        assert_eq!(
            buf.as_bytes(),
            &[0xC0, 0x1D, 0xEB, 0xFB, 0xAE, 0xAD, 0x1D, 0xEA]
        );

        buf.erase_bits(20, beef.bit_len()).unwrap();
        assert_eq!(buf.as_bytes(), &[0xC0, 0x1D, 0xAB, 0xAD, 0x1D, 0xEA]);
    }

    #[test]
    fn test_pop_empty() {
        let mut buf = BitBuffer::new();
        assert_eq!(buf.pop_bit(), Err(Nfl8Error::NoBits));
        assert_eq!(buf.pop_bits(1).unwrap_err(), Nfl8Error::out_of_bounds(1, 0));
        assert!(buf.pop_bits(0).unwrap().is_empty());
    }

    #[test]
    fn test_resize_clears_stale_bits() {
        let mut buf = BitBuffer::from_bytes(vec![0xFF, 0xFF]);
        buf.resize(11);
        assert_eq!(buf.as_bytes(), &[0xFF, 0x07]);
        buf.resize(3);
        assert_eq!(buf.as_bytes(), &[0x07]);
        buf.resize(16);
        assert_eq!(buf.as_bytes(), &[0x07, 0x00]);
        assert!(!buf.get_bit(3).unwrap());
    }

    #[test]
    fn test_from_bytes_with_len_masks() {
        let buf = BitBuffer::from_bytes_with_len(vec![0xFF, 0xFF, 0xFF], 10).unwrap();
        assert_eq!(buf.bit_len(), 10);
        assert_eq!(buf.as_bytes(), &[0xFF, 0x03]);
        assert!(BitBuffer::from_bytes_with_len(vec![0xFF], 9).is_err());
    }

    #[test]
    fn test_set_byte_keeps_tail_clear() {
        let mut buf = BitBuffer::zeroed(12);
        buf.set_byte(1, 0xFF).unwrap();
        assert_eq!(buf.as_bytes(), &[0x00, 0x0F]);
        assert!(buf.set_byte(2, 0).is_err());
    }

    #[test]
    fn test_insert_at_ends() {
        let mut buf = bits(&[true, true]);
        buf.insert_bit(0, false).unwrap();
        buf.insert_bit(3, false).unwrap();
        assert_eq!(buf, bits(&[false, true, true, false]));
        assert_eq!(
            buf.insert_bit(5, true),
            Err(Nfl8Error::out_of_bounds(5, 4))
        );
    }

    #[test]
    fn test_erase_tail_and_bounds() {
        let mut buf = bits(&[true, false, true, true]);
        buf.erase_bits(2, 2).unwrap();
        assert_eq!(buf, bits(&[true, false]));
        buf.erase_bit(0).unwrap();
        assert_eq!(buf, bits(&[false]));
        assert_eq!(buf.erase_bits(0, 2), Err(Nfl8Error::out_of_bounds(2, 1)));
    }

    #[test]
    fn test_push_pop_restores() {
        let mut buf = BitBuffer::from_bytes(vec![0x5A]);
        let before = buf.clone();
        buf.push_bit(true);
        assert_eq!(buf.bit_len(), 9);
        assert!(buf.pop_bit().unwrap());
        assert_eq!(buf, before);
    }

    #[test]
    fn test_view_mut_over_buffer() {
        let mut buf = BitBuffer::zeroed(8);
        let mut view = buf.view_mut();
        view.set_bit(7, true).unwrap();
        assert!(view.as_shared().get_bit(7).unwrap());
        assert_eq!(buf.as_bytes(), &[0x80]);
    }

    #[test]
    fn test_mutable_view_with_bit_len() {
        let mut data = [0u8; 2];
        assert_eq!(
            BitView::with_bit_len_mut(&mut data, 17).unwrap_err(),
            Nfl8Error::out_of_bounds(17, 16)
        );

        let mut view = BitView::with_bit_len_mut(&mut data, 10).unwrap();
        assert!(view.is_mutable());
        assert_eq!(view.byte_len(), 2);
        view.set_bit(9, true).unwrap();
        assert_eq!(
            view.set_bit(10, true),
            Err(Nfl8Error::out_of_bounds(10, 10))
        );
        assert_eq!(data, [0x00, 0x02]);
    }

    #[test]
    fn test_truncate() {
        let mut buf = BitBuffer::from_bytes(vec![0xFF, 0xFF]);
        buf.truncate(20);
        assert_eq!(buf.bit_len(), 16);

        buf.truncate(5);
        assert_eq!(buf.bit_len(), 5);
        assert_eq!(buf.as_bytes(), &[0x1F]);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.byte_len(), 0);
    }
}
