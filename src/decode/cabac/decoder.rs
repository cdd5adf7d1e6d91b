//! Binary arithmetic decoder (H.264 clause 9.3.3.2).
//!
//! The two interval registers are kept left-shifted so the 9 significant
//! bits of `range` sit in a fixed high position with up to 23 bits of
//! future bitstream already folded into `value` as read-ahead. The
//! leading-zero count of `range` measures how much of that read-ahead has
//! been consumed; renormalization refills the window in one batch instead
//! of bit-at-a-time. Comparison and subtraction against the scaled
//! registers decode the same symbols the unscaled 9-bit formulation
//! would.

use super::context::{CabacError, ContextEntry, ContextTable};
use super::table::{self, TRANSITION_TABLE};
use crate::decode::bitstream::BitCursor;

/// Initial interval width: 510 scaled left by the read-ahead width.
pub const RANGE_INIT: u32 = 510 << 23;

/// Number of future bits folded into the registers.
pub const READ_AHEAD_BITS: u32 = 23;

/// Renormalization threshold for regular and terminal bins: below this
/// the consumed read-ahead exceeds the window.
const RENORM_THRESHOLD: u32 = 1 << 8;

/// Bypass decoding halves `range`, so it refills one bit earlier.
const BYPASS_THRESHOLD: u32 = 1 << 9;

/// Context-adaptive binary arithmetic decoder for one decoding unit.
///
/// Initialized once per slice by priming the registers from the cursor,
/// driven for every bin of the unit, and discarded with it. After a
/// terminal bin decodes 1 the caller must not decode further bins without
/// re-initializing.
#[derive(Debug)]
pub struct ArithmeticDecoder {
    range: u32,
    value: u32,
    table: &'static [[u32; 4]; 128],
}

impl ArithmeticDecoder {
    /// Primes the interval registers from the first bits of the cursor:
    /// 32 bits are peeked into `value` (9 working bits plus the
    /// read-ahead window) and 9 bits are committed.
    pub fn init(cursor: &mut BitCursor<'_>) -> Result<Self, CabacError> {
        let value = cursor.peek_bits(32);
        cursor.flush(9)?;
        Ok(Self {
            range: RANGE_INIT,
            value,
            table: &TRANSITION_TABLE,
        })
    }

    /// Current `(range, value)` registers, scaled form.
    #[inline]
    pub fn state(&self) -> (u32, u32) {
        (self.range, self.value)
    }

    #[cfg(test)]
    pub(crate) fn from_raw_parts(range: u32, value: u32) -> Self {
        Self {
            range,
            value,
            table: &TRANSITION_TABLE,
        }
    }

    /// Refills the read-ahead window: commits the bits consumed so far
    /// (the leading-zero drift of `range`) and splices fresh bits into
    /// the low end of `value`.
    #[inline]
    fn renormalize(&mut self, cursor: &mut BitCursor<'_>) -> Result<(), CabacError> {
        let shift = self.range.leading_zeros();
        let read = cursor.peek_bits_ahead(READ_AHEAD_BITS, shift);
        cursor.flush(shift)?;
        self.range <<= shift;
        self.value = (self.value << shift) | read;
        Ok(())
    }

    /// Decodes one context-modeled bin and adapts the context.
    pub fn decode_bin(
        &mut self,
        ctx: &mut ContextEntry,
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        let clz = self.range.leading_zeros();
        debug_assert!(clz <= READ_AHEAD_BITS);

        let qrange = ((self.range << clz) >> 29) & 0x3;
        let entry = self.table[ctx.packed() as usize][qrange as usize];
        let lps = table::lps_width(entry) << (READ_AHEAD_BITS - clz);

        self.range -= lps;
        let mut symbol = ctx.mps() as u32;
        let mut next_state = table::mps_next(entry);

        if self.value >= self.range {
            symbol = 1 - symbol;
            self.value -= self.range;
            self.range = lps;
            next_state = table::lps_next(entry);
        }

        if self.range < RENORM_THRESHOLD {
            self.renormalize(cursor)?;
        }
        ctx.set_packed(next_state as u8);

        #[cfg(feature = "cabac-trace")]
        log::trace!(
            "bin={} state={} mps={} range={:#010x} value={:#010x}",
            symbol,
            ctx.state_index(),
            ctx.mps(),
            self.range,
            self.value
        );

        Ok(symbol)
    }

    /// Decodes the terminal bin (end-of-slice / PCM escape). No context
    /// adapts. A result of 1 terminates the unit; the consumed
    /// read-ahead is committed so the caller can realign the cursor.
    pub fn decode_terminate(&mut self, cursor: &mut BitCursor<'_>) -> Result<u32, CabacError> {
        let clz = self.range.leading_zeros();
        debug_assert!(clz <= READ_AHEAD_BITS);

        self.range -= 2 << (READ_AHEAD_BITS - clz);
        if self.value >= self.range {
            cursor.flush(clz)?;
            Ok(1)
        } else {
            if self.range < RENORM_THRESHOLD {
                self.renormalize(cursor)?;
            }
            Ok(0)
        }
    }

    /// Decodes one equiprobable bin.
    pub fn decode_bypass(&mut self, cursor: &mut BitCursor<'_>) -> Result<u32, CabacError> {
        if self.range < BYPASS_THRESHOLD {
            self.renormalize(cursor)?;
        }
        self.range >>= 1;
        if self.value >= self.range {
            self.value -= self.range;
            Ok(1)
        } else {
            Ok(0)
        }
    }

    /// Decodes `count` bypass bins packed MSB-first.
    pub fn decode_bypass_bits(
        &mut self,
        count: u32,
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        debug_assert!(count <= 32);
        let mut bits = 0;
        for _ in 0..count {
            bits = (bits << 1) | self.decode_bypass(cursor)?;
        }
        Ok(bits)
    }

    /// Decodes bypass bins until a 0 bin or `max` 1-bins, returning the
    /// count of 1s.
    pub fn decode_bypass_unary(
        &mut self,
        max: u32,
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        let mut count = 0;
        while count < max && self.decode_bypass(cursor)? == 1 {
            count += 1;
        }
        Ok(count)
    }

    /// Decodes a fixed-length context-coded bin string, MSB first. The
    /// bin at position `j` uses context `base + incs[j]`.
    pub fn decode_bins_msb_first(
        &mut self,
        contexts: &mut ContextTable,
        base: usize,
        incs: &[u8],
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        debug_assert!(incs.len() <= 4);
        let mut value = 0;
        for &inc in incs {
            let bin = self.decode_bin(contexts.get_mut(base + inc as usize), cursor)?;
            value = (value << 1) | bin;
        }
        Ok(value)
    }

    /// Decodes a truncated-unary counter of at most `incs.len()` bins,
    /// the bin at position `j` using context `base + incs[j]`.
    pub fn decode_truncated_unary(
        &mut self,
        contexts: &mut ContextTable,
        base: usize,
        incs: &[u8],
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        debug_assert!(!incs.is_empty());
        let mut count: u32 = 0;
        let mut symbol = 0;
        for &inc in incs {
            symbol = self.decode_bin(contexts.get_mut(base + inc as usize), cursor)?;
            count += 1;
            if symbol == 0 {
                break;
            }
        }
        Ok(count - 1 + symbol)
    }

    /// Decodes a capped unary run where the first bin has its own
    /// context and all following bins share one (the magnitude-prefix
    /// shape). Returns the number of 1-bins, at most `max`.
    pub fn decode_unary(
        &mut self,
        max: u32,
        contexts: &mut ContextTable,
        base: usize,
        first_inc: u8,
        rest_inc: u8,
        cursor: &mut BitCursor<'_>,
    ) -> Result<u32, CabacError> {
        debug_assert!(max >= 1);
        let mut symbol = self.decode_bin(contexts.get_mut(base + first_inc as usize), cursor)?;
        let mut count = 1;
        while symbol == 1 && count < max {
            symbol = self.decode_bin(contexts.get_mut(base + rest_inc as usize), cursor)?;
            count += 1;
        }
        Ok(count - 1 + symbol)
    }
}
