//! Residual transform-block coefficient decoding (H.264 clause 7.3.5.3.2).
//!
//! One call decodes one block: the coded-block flag, the forward
//! significance/last scan, then the coefficient magnitudes and signs in
//! reverse scan order. Magnitude contexts depend on a running tally over
//! the block, which is why all significance bins decode before any
//! magnitude bin; the ordering is fixed by the bitstream syntax and must
//! not be rearranged.

use log::debug;

use super::bitstream::BitCursor;
use super::cabac::decoder::ArithmeticDecoder;
use super::cabac::{
    CTX_CODED_BLOCK_FLAG, CTX_COEFF_ABS_LEVEL, CTX_COEFF_ABS_LEVEL_8X8, CTX_SIG_COEFF_8X8_FIELD,
    CTX_SIG_COEFF_8X8_FRAME, CTX_SIG_COEFF_FIELD, CTX_SIG_COEFF_FRAME, CabacError, ContextTable,
    LAST_MINUS_SIG_OFFSET, LAST_MINUS_SIG_OFFSET_8X8,
};

/// Cap on the context-coded magnitude prefix; longer magnitudes switch
/// to the bypass-coded suffix.
const COEFF_PREFIX_CAP: u32 = 14;

/// Cap on the bypass unary run that selects the suffix width.
const SUFFIX_UNARY_CAP: u32 = 20;

/// Transform-block category. Selects the coefficient domain and the
/// context sub-ranges for every residual syntax element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockCategory {
    /// Intra-16x16 luma DC, 16 coefficients.
    LumaDc,
    /// Intra-16x16 luma AC, 15 coefficients starting at scan position 1.
    LumaAc,
    /// Plain 4x4 luma, 16 coefficients.
    Luma4x4,
    /// Chroma DC, 4 coefficients.
    ChromaDc,
    /// Chroma AC, 15 coefficients starting at scan position 1.
    ChromaAc,
    /// 8x8 luma, 64 coefficients.
    Luma8x8,
}

impl BlockCategory {
    /// Offsets of the 4x4 categories inside the significance groups.
    const SIG_CAT_OFFSET: [usize; 5] = [0, 15, 29, 44, 47];
    /// Offsets of the categories inside the magnitude group.
    const ABS_CAT_OFFSET: [usize; 5] = [0, 10, 20, 30, 39];

    fn cat_index(self) -> usize {
        match self {
            BlockCategory::LumaDc => 0,
            BlockCategory::LumaAc => 1,
            BlockCategory::Luma4x4 => 2,
            BlockCategory::ChromaDc => 3,
            BlockCategory::ChromaAc => 4,
            BlockCategory::Luma8x8 => 5,
        }
    }

    /// Index of the last candidate scan position (the position that is
    /// implicitly significant when the forward scan reaches it).
    fn last_scan_index(self) -> u32 {
        match self {
            BlockCategory::ChromaDc => 3,
            BlockCategory::LumaDc | BlockCategory::Luma4x4 => 15,
            BlockCategory::LumaAc | BlockCategory::ChromaAc => 14,
            BlockCategory::Luma8x8 => 63,
        }
    }

    /// Bitmap offset of scan position 0 (AC categories skip the DC
    /// slot).
    fn scan_offset(self) -> u32 {
        match self {
            BlockCategory::LumaAc | BlockCategory::ChromaAc => 1,
            _ => 0,
        }
    }

    /// Coded-block-flag context base; the neighbor increment 0-3 is
    /// added on top. The 8x8 category shares the plain-luma group.
    fn cbf_ctx_base(self) -> usize {
        let cat = match self {
            BlockCategory::Luma8x8 => 2,
            other => other.cat_index(),
        };
        CTX_CODED_BLOCK_FLAG + 4 * cat
    }

    fn sig_ctx_base(self, field_coding: bool) -> usize {
        match self {
            BlockCategory::Luma8x8 => {
                if field_coding {
                    CTX_SIG_COEFF_8X8_FIELD
                } else {
                    CTX_SIG_COEFF_8X8_FRAME
                }
            }
            other => {
                let group = if field_coding {
                    CTX_SIG_COEFF_FIELD
                } else {
                    CTX_SIG_COEFF_FRAME
                };
                group + Self::SIG_CAT_OFFSET[other.cat_index()]
            }
        }
    }

    fn last_ctx_base(self, field_coding: bool) -> usize {
        let dist = if self == BlockCategory::Luma8x8 {
            LAST_MINUS_SIG_OFFSET_8X8
        } else {
            LAST_MINUS_SIG_OFFSET
        };
        self.sig_ctx_base(field_coding) + dist
    }

    fn abs_ctx_base(self) -> usize {
        match self {
            BlockCategory::Luma8x8 => CTX_COEFF_ABS_LEVEL_8X8,
            other => CTX_COEFF_ABS_LEVEL + Self::ABS_CAT_OFFSET[other.cat_index()],
        }
    }

    /// Context increment for the significance bin at scan position `i`.
    fn sig_ctx_inc(self, i: u32, field_coding: bool) -> usize {
        match self {
            BlockCategory::Luma8x8 => {
                let map = if field_coding {
                    &SIG_INC_8X8_FIELD
                } else {
                    &SIG_INC_8X8_FRAME
                };
                map[i as usize] as usize
            }
            _ => i as usize,
        }
    }

    /// Context increment for the last-coefficient bin at scan position
    /// `i`.
    fn last_ctx_inc(self, i: u32) -> usize {
        match self {
            BlockCategory::Luma8x8 => LAST_INC_8X8[i as usize] as usize,
            _ => i as usize,
        }
    }
}

/// Coded-block flags of the already-decoded neighbor blocks, resolved by
/// the caller (including the unavailable-neighbor defaults, which depend
/// on macroblock state this core does not own).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CbfNeighbors {
    pub left_coded: bool,
    pub top_coded: bool,
}

impl CbfNeighbors {
    pub fn new(left_coded: bool, top_coded: bool) -> Self {
        Self {
            left_coded,
            top_coded,
        }
    }

    #[inline]
    fn ctx_inc(self) -> usize {
        ((self.top_coded as usize) << 1) | (self.left_coded as usize)
    }
}

/// Sparse output of one decoded transform block: a significance bitmap
/// over scan positions and the nonzero levels in decode order (highest
/// significant position first).
///
/// The value is caller-owned scratch: allocate once, pass `&mut` per
/// block, read after return, reuse freely. `decode_block` clears it
/// first.
#[derive(Clone)]
pub struct SparseCoefficientBlock {
    sig_map: u64,
    levels: [i32; 64],
    len: u8,
}

impl SparseCoefficientBlock {
    pub fn new() -> Self {
        Self {
            sig_map: 0,
            levels: [0; 64],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.sig_map = 0;
        self.len = 0;
    }

    /// Significance bitmap over scan positions. The low 16 bits are
    /// meaningful for the 4x4 categories, the low 4 for chroma DC, all
    /// 64 for 8x8 blocks.
    #[inline]
    pub fn sig_map(&self) -> u64 {
        self.sig_map
    }

    /// Decoded levels, one per set bitmap bit, in decode order (reverse
    /// scan). Never contains a zero.
    #[inline]
    pub fn levels(&self) -> &[i32] {
        &self.levels[..self.len as usize]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sig_map == 0
    }

    #[inline]
    fn set_significant(&mut self, pos: u32) {
        debug_assert!(pos < 64);
        self.sig_map |= 1u64 << pos;
    }

    #[inline]
    fn push_level(&mut self, level: i32) {
        debug_assert!(level != 0);
        self.levels[self.len as usize] = level;
        self.len += 1;
    }
}

impl Default for SparseCoefficientBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes residual blocks for one slice, orchestrating the arithmetic
/// decoder and the context table.
#[derive(Debug)]
pub struct ResidualBlockDecoder {
    field_coding: bool,
}

impl ResidualBlockDecoder {
    /// `field_coding` selects the field-mode significance context
    /// groups for every block of the slice.
    pub fn new(field_coding: bool) -> Self {
        Self { field_coding }
    }

    pub fn field_coding(&self) -> bool {
        self.field_coding
    }

    /// Decodes one transform block into `out`.
    ///
    /// Returns the coded-block-flag value; the caller records it as
    /// neighbor state for later blocks. When it is 0 exactly one bin was
    /// consumed and `out` is empty.
    pub fn decode_block(
        &self,
        arith: &mut ArithmeticDecoder,
        cursor: &mut BitCursor<'_>,
        contexts: &mut ContextTable,
        category: BlockCategory,
        neighbors: CbfNeighbors,
        out: &mut SparseCoefficientBlock,
    ) -> Result<bool, CabacError> {
        out.clear();

        let cbf_ctx = category.cbf_ctx_base() + neighbors.ctx_inc();
        let coded = arith.decode_bin(contexts.get_mut(cbf_ctx), cursor)?;
        if coded == 0 {
            return Ok(false);
        }

        let num_sig = self.decode_significance_map(arith, cursor, contexts, category, out)?;
        self.decode_levels(arith, cursor, contexts, category, num_sig, out)
            .inspect_err(|err| {
                debug!("residual level decode aborted: {}", err);
            })?;

        Ok(true)
    }

    /// Forward significance/last scan. Returns the number of significant
    /// positions (at least 1 for a coded block).
    fn decode_significance_map(
        &self,
        arith: &mut ArithmeticDecoder,
        cursor: &mut BitCursor<'_>,
        contexts: &mut ContextTable,
        category: BlockCategory,
        out: &mut SparseCoefficientBlock,
    ) -> Result<u32, CabacError> {
        let sig_base = category.sig_ctx_base(self.field_coding);
        let last_base = category.last_ctx_base(self.field_coding);
        let last_scan = category.last_scan_index();
        let offset = category.scan_offset();

        let mut num_sig = 0u32;
        let mut i = 0u32;
        loop {
            let sig_ctx = sig_base + category.sig_ctx_inc(i, self.field_coding);
            let sig = arith.decode_bin(contexts.get_mut(sig_ctx), cursor)?;
            if sig == 1 {
                num_sig += 1;
                out.set_significant(i + offset);

                let last_ctx = last_base + category.last_ctx_inc(i);
                let last = arith.decode_bin(contexts.get_mut(last_ctx), cursor)?;
                if last == 1 {
                    // Remaining higher positions are insignificant.
                    return Ok(num_sig);
                }
            }
            i += 1;
            if i >= last_scan {
                // The scan ran to the end: the final candidate position
                // is significant without a bin of its own.
                num_sig += 1;
                out.set_significant(i + offset);
                return Ok(num_sig);
            }
        }
    }

    /// Magnitude and sign decoding for `num_sig` coefficients, highest
    /// scan position first.
    fn decode_levels(
        &self,
        arith: &mut ArithmeticDecoder,
        cursor: &mut BitCursor<'_>,
        contexts: &mut ContextTable,
        category: BlockCategory,
        num_sig: u32,
        out: &mut SparseCoefficientBlock,
    ) -> Result<(), CabacError> {
        let abs_base = category.abs_ctx_base();

        // Saturating tallies driving the magnitude context selection:
        // coefficients equal to 1 seen so far, and greater than 1.
        let mut num_eq1: u32 = 1;
        let mut num_gt1: u32 = 0;

        for _ in 0..num_sig {
            let (first_inc, rest_inc) = if num_gt1 > 0 {
                (0, 5 + num_gt1.min(4) as u8)
            } else {
                (num_eq1.min(4) as u8, 5)
            };

            let prefix =
                arith.decode_unary(COEFF_PREFIX_CAP, contexts, abs_base, first_inc, rest_inc, cursor)?;

            let mut level = if prefix == COEFF_PREFIX_CAP {
                let k = arith.decode_bypass_unary(SUFFIX_UNARY_CAP, cursor)?;
                let suffix = arith.decode_bypass_bits(k, cursor)?;
                COEFF_PREFIX_CAP as i32 + (1i32 << k) + suffix as i32
            } else {
                1 + prefix as i32
            };

            if level > 1 {
                num_gt1 += 1;
            } else if num_gt1 == 0 {
                num_eq1 += 1;
            }

            if arith.decode_bypass(cursor)? == 1 {
                level = -level;
            }
            out.push_level(level);
        }
        Ok(())
    }
}

/// Significance context increments for 8x8 blocks, frame scan.
pub static SIG_INC_8X8_FRAME: [u8; 63] = [
    0, 1, 2, 3, 4, 5, 5, 4, 4, 3, 3, 4, 4, 4, 5, 5, 4, 4, 4, 4, 3, 3, 6, 7, 7, 7, 8, 9, 10, 9, 8,
    7, 7, 6, 11, 12, 13, 11, 6, 7, 8, 9, 14, 10, 9, 8, 6, 11, 12, 13, 11, 6, 9, 14, 10, 9, 11, 12,
    13, 11, 14, 10, 12,
];

/// Significance context increments for 8x8 blocks, field scan.
pub static SIG_INC_8X8_FIELD: [u8; 63] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
];

/// Last-coefficient context increments for 8x8 blocks.
pub static LAST_INC_8X8: [u8; 63] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6,
    6,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NUM_CABAC_CONTEXTS;

    #[test]
    fn test_context_inc_tables_cover_63_positions() {
        assert_eq!(SIG_INC_8X8_FRAME.len(), 63);
        assert_eq!(SIG_INC_8X8_FIELD.len(), 63);
        assert_eq!(LAST_INC_8X8.len(), 63);
        assert!(SIG_INC_8X8_FRAME.iter().all(|&v| v < 15));
        assert!(SIG_INC_8X8_FIELD.iter().all(|&v| v < 15));
        assert!(LAST_INC_8X8.iter().all(|&v| v < 9));
    }

    #[test]
    fn test_category_context_ranges_stay_in_table() {
        let cats = [
            BlockCategory::LumaDc,
            BlockCategory::LumaAc,
            BlockCategory::Luma4x4,
            BlockCategory::ChromaDc,
            BlockCategory::ChromaAc,
            BlockCategory::Luma8x8,
        ];
        for &cat in &cats {
            for &field in &[false, true] {
                for i in 0..cat.last_scan_index() {
                    let sig = cat.sig_ctx_base(field) + cat.sig_ctx_inc(i, field);
                    let last = cat.last_ctx_base(field) + cat.last_ctx_inc(i);
                    assert!(sig < NUM_CABAC_CONTEXTS, "{:?} sig pos {}", cat, i);
                    assert!(last < NUM_CABAC_CONTEXTS, "{:?} last pos {}", cat, i);
                }
            }
            for inc in 0..4 {
                assert!(cat.cbf_ctx_base() + inc < NUM_CABAC_CONTEXTS);
            }
            assert!(cat.abs_ctx_base() + 9 < NUM_CABAC_CONTEXTS);
        }
    }

    #[test]
    fn test_neighbor_ctx_inc() {
        assert_eq!(CbfNeighbors::new(false, false).ctx_inc(), 0);
        assert_eq!(CbfNeighbors::new(true, false).ctx_inc(), 1);
        assert_eq!(CbfNeighbors::new(false, true).ctx_inc(), 2);
        assert_eq!(CbfNeighbors::new(true, true).ctx_inc(), 3);
    }

    #[test]
    fn test_scratch_block_reuse() {
        let mut block = SparseCoefficientBlock::new();
        block.set_significant(0);
        block.set_significant(63);
        block.push_level(-3);
        block.push_level(7);
        assert_eq!(block.sig_map().count_ones() as usize, block.levels().len());
        block.clear();
        assert!(block.is_empty());
        assert!(block.levels().is_empty());
    }

    #[test]
    fn test_ac_categories_skip_dc_slot() {
        assert_eq!(BlockCategory::LumaAc.scan_offset(), 1);
        assert_eq!(BlockCategory::ChromaAc.scan_offset(), 1);
        assert_eq!(BlockCategory::Luma4x4.scan_offset(), 0);
        // AC blocks scan 15 coefficients into bitmap bits 1..=15.
        assert_eq!(BlockCategory::LumaAc.last_scan_index() + 1, 15);
    }
}
