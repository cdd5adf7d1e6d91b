//! Bit-level cursor over a word-aligned compressed buffer.
//!
//! The surrounding parser hands the entropy core a byte-aligned slice
//! payload; `pack_words` converts it to the word-addressable form and
//! `BitCursor` tracks the read position in bits. Bit 0 is the most
//! significant bit of word 0 (network bit order).

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitstreamError {
    #[error("end of buffer on flush: offset {offset} past limit {limit}")]
    Exhausted { offset: u32, limit: u32 },
}

/// Packs a byte-aligned payload into big-endian 32-bit words.
///
/// The tail word is zero-padded, so look-ahead reads past the payload's
/// last byte stay within the returned slice.
pub fn pack_words(bytes: &[u8]) -> Vec<u32> {
    let mut words = Vec::with_capacity(bytes.len().div_ceil(4));
    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        words.push(BigEndian::read_u32(chunk));
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tail = [0u8; 4];
        tail[..rem.len()].copy_from_slice(rem);
        words.push(BigEndian::read_u32(&tail));
    }
    words
}

/// Cursor over a word buffer of compressed bits.
///
/// Created once per decoding unit, bound to that unit's payload, and
/// exclusively owned by the thread decoding the unit. Only `flush` can
/// fail; the non-consuming reads zero-pad past the end of the word slice
/// so the arithmetic decoder's read-ahead never indexes out of bounds.
#[derive(Debug)]
pub struct BitCursor<'a> {
    buffer: &'a [u32],
    bit_offset: u32,
    max_bit_offset: u32,
}

impl<'a> BitCursor<'a> {
    /// Binds a cursor to `buffer` with `bit_len` valid bits.
    pub fn new(buffer: &'a [u32], bit_len: u32) -> Self {
        debug_assert!(bit_len as usize <= buffer.len() * 32);
        Self {
            buffer,
            bit_offset: 0,
            max_bit_offset: bit_len,
        }
    }

    /// Current read position in bits from the start of the buffer.
    #[inline]
    pub fn bit_offset(&self) -> u32 {
        self.bit_offset
    }

    /// One past the last valid bit.
    #[inline]
    pub fn max_bit_offset(&self) -> u32 {
        self.max_bit_offset
    }

    #[inline]
    fn word(&self, index: usize) -> u32 {
        self.buffer.get(index).copied().unwrap_or(0)
    }

    /// Extracts `count` bits starting at absolute bit position `pos`,
    /// first bit in the most significant position of the result.
    #[inline]
    fn extract(&self, pos: u32, count: u32) -> u32 {
        debug_assert!(count <= 32);
        if count == 0 {
            return 0;
        }
        let word_off = (pos >> 5) as usize;
        let bit_off = pos & 0x1f;
        let mut code = self.word(word_off) << bit_off;
        if bit_off != 0 {
            code |= self.word(word_off + 1) >> (32 - bit_off);
        }
        if count < 32 { code >> (32 - count) } else { code }
    }

    /// Returns the next bit and advances by one.
    ///
    /// The caller must ensure data is available (`more_data`); reading
    /// past the valid range is a caller bug, not an input condition.
    #[inline]
    pub fn read_bit(&mut self) -> u32 {
        debug_assert!(self.bit_offset < self.max_bit_offset);
        let word_off = (self.bit_offset >> 5) as usize;
        let bit_off = self.bit_offset & 0x1f;
        self.bit_offset += 1;
        (self.word(word_off) << bit_off) >> 31
    }

    /// Returns the next `count` bits (first-read bit most significant)
    /// and advances. `count == 0` returns 0 without consuming.
    #[inline]
    pub fn read_bits(&mut self, count: u32) -> u32 {
        debug_assert!(self.bit_offset + count <= self.max_bit_offset);
        let code = self.extract(self.bit_offset, count);
        self.bit_offset += count;
        code
    }

    /// Same extraction as `read_bits` without advancing.
    #[inline]
    pub fn peek_bits(&self, count: u32) -> u32 {
        self.extract(self.bit_offset, count)
    }

    /// Look-ahead peek used by renormalization: extracts `count` bits
    /// starting `skip` bits past the current position.
    #[inline]
    pub(crate) fn peek_bits_ahead(&self, skip: u32, count: u32) -> u32 {
        self.extract(self.bit_offset + skip, count)
    }

    /// Advances by `count` bits without returning a value.
    ///
    /// Fails when the new offset would exceed the valid range; the
    /// decoding unit is then corrupt or truncated and must be aborted
    /// by the caller.
    #[inline]
    pub fn flush(&mut self, count: u32) -> Result<(), BitstreamError> {
        self.bit_offset += count;
        if self.bit_offset > self.max_bit_offset {
            return Err(BitstreamError::Exhausted {
                offset: self.bit_offset,
                limit: self.max_bit_offset,
            });
        }
        Ok(())
    }

    /// True when the cursor sits on a byte boundary.
    #[inline]
    pub fn is_byte_aligned(&self) -> bool {
        self.bit_offset & 0x7 == 0
    }

    /// True iff at least one more bit is available.
    #[inline]
    pub fn more_data(&self) -> bool {
        self.bit_offset < self.max_bit_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_words_big_endian() {
        let words = pack_words(&[0x12, 0x34, 0x56, 0x78, 0x9a]);
        assert_eq!(words, vec![0x12345678, 0x9a000000]);
    }

    #[test]
    fn test_read_bit_msb_first() {
        let words = pack_words(&[0b1011_0001]);
        let mut cursor = BitCursor::new(&words, 8);
        let bits: Vec<u32> = (0..8).map(|_| cursor.read_bit()).collect();
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(cursor.bit_offset(), 8);
    }

    #[test]
    fn test_read_bits_across_word_boundary() {
        let words = pack_words(&[0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe]);
        let mut cursor = BitCursor::new(&words, 48);
        assert_eq!(cursor.read_bits(12), 0xdea);
        assert_eq!(cursor.read_bits(24), 0xdbeefc);
        assert_eq!(cursor.bit_offset(), 36);
    }

    #[test]
    fn test_read_bits_zero_count() {
        let words = pack_words(&[0xff]);
        let mut cursor = BitCursor::new(&words, 8);
        assert_eq!(cursor.read_bits(0), 0);
        assert_eq!(cursor.bit_offset(), 0);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let words = pack_words(&[0xa5, 0x5a]);
        let mut cursor = BitCursor::new(&words, 16);
        assert_eq!(cursor.peek_bits(8), 0xa5);
        assert_eq!(cursor.peek_bits(8), 0xa5);
        assert_eq!(cursor.read_bits(8), 0xa5);
        assert_eq!(cursor.peek_bits(8), 0x5a);
    }

    #[test]
    fn test_peek_ahead() {
        let words = pack_words(&[0x01, 0x02, 0x03, 0x04]);
        let cursor = BitCursor::new(&words, 32);
        assert_eq!(cursor.peek_bits_ahead(8, 8), 0x02);
        assert_eq!(cursor.peek_bits_ahead(16, 16), 0x0304);
    }

    #[test]
    fn test_peek_past_end_zero_padded() {
        let words = pack_words(&[0xff]);
        let cursor = BitCursor::new(&words, 8);
        // Look-ahead beyond the payload reads zeros, never panics.
        assert_eq!(cursor.peek_bits_ahead(0, 32), 0xff00_0000);
        assert_eq!(cursor.peek_bits_ahead(32, 32), 0);
    }

    #[test]
    fn test_flush_and_alignment() {
        let words = pack_words(&[0x00, 0x00, 0x00]);
        let mut cursor = BitCursor::new(&words, 24);
        assert!(cursor.is_byte_aligned());
        cursor.flush(3).unwrap();
        assert!(!cursor.is_byte_aligned());
        cursor.flush(5).unwrap();
        assert!(cursor.is_byte_aligned());
        assert_eq!(cursor.bit_offset(), 8);
    }

    #[test]
    fn test_flush_past_end_fails() {
        let words = pack_words(&[0x00, 0x00]);
        let mut cursor = BitCursor::new(&words, 16);
        cursor.flush(16).unwrap();
        assert!(!cursor.more_data());
        let err = cursor.flush(1).unwrap_err();
        assert_eq!(err, BitstreamError::Exhausted { offset: 17, limit: 16 });
    }

    #[test]
    fn test_more_data() {
        let words = pack_words(&[0x80]);
        let mut cursor = BitCursor::new(&words, 2);
        assert!(cursor.more_data());
        cursor.read_bit();
        cursor.read_bit();
        assert!(!cursor.more_data());
    }
}
