//! Adaptive context models and the per-slice context table.
//!
//! A context model packs a 6-bit probability-state index and the current
//! most-probable-symbol value into one byte, the same layout the packed
//! transition table expects. The table holds one model per syntax-element
//! context; the constants below name the sub-range each syntax element
//! group occupies.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use super::init_tables::{CONTEXT_INIT_STATES, INIT_CLASS_INTRA};
use crate::{MAX_SLICE_QP, NUM_CABAC_CONTEXTS};

#[derive(Error, Debug)]
pub enum CabacError {
    #[error("bitstream exhausted during entropy decode: {0}")]
    BufferExhausted(#[from] crate::decode::bitstream::BitstreamError),
    #[error("invalid decoding unit parameters: {0}")]
    InvalidUnitParameters(String),
}

// Context-table partition, one base index per syntax-element group.
pub const CTX_MB_TYPE_SI: usize = 0;
pub const CTX_MB_TYPE_I: usize = 3;
pub const CTX_MB_SKIP_FLAG_P: usize = 11;
pub const CTX_MB_TYPE_P: usize = 14;
pub const CTX_SUB_MB_TYPE_P: usize = 21;
pub const CTX_MB_SKIP_FLAG_B: usize = 24;
pub const CTX_MB_TYPE_B: usize = 27;
pub const CTX_SUB_MB_TYPE_B: usize = 36;
pub const CTX_MVD_X: usize = 40;
pub const CTX_MVD_Y: usize = 47;
pub const CTX_REF_IDX: usize = 54;
pub const CTX_MB_QP_DELTA: usize = 60;
pub const CTX_INTRA_CHROMA_PRED_MODE: usize = 64;
pub const CTX_PREV_INTRA4X4_PRED_MODE: usize = 68;
pub const CTX_REM_INTRA4X4_PRED_MODE: usize = 69;
pub const CTX_MB_FIELD_DECODING_FLAG: usize = 70;
pub const CTX_CBP_LUMA: usize = 73;
pub const CTX_CBP_CHROMA: usize = 77;
pub const CTX_CODED_BLOCK_FLAG: usize = 85;
pub const CTX_SIG_COEFF_FRAME: usize = 105;
pub const CTX_LAST_COEFF_FRAME: usize = 166;
pub const CTX_COEFF_ABS_LEVEL: usize = 227;
pub const CTX_SIG_COEFF_FIELD: usize = 277;
pub const CTX_LAST_COEFF_FIELD: usize = 338;
pub const CTX_TRANSFORM_SIZE_8X8: usize = 399;
pub const CTX_SIG_COEFF_8X8_FRAME: usize = 402;
pub const CTX_LAST_COEFF_8X8_FRAME: usize = 417;
pub const CTX_COEFF_ABS_LEVEL_8X8: usize = 426;
pub const CTX_SIG_COEFF_8X8_FIELD: usize = 436;
pub const CTX_LAST_COEFF_8X8_FIELD: usize = 451;

/// Distance from a significance context to its last-coefficient partner
/// in the 4x4 categories.
pub const LAST_MINUS_SIG_OFFSET: usize = CTX_LAST_COEFF_FRAME - CTX_SIG_COEFF_FRAME;
/// Same distance for the 8x8 categories.
pub const LAST_MINUS_SIG_OFFSET_8X8: usize = CTX_LAST_COEFF_8X8_FRAME - CTX_SIG_COEFF_8X8_FRAME;

/// One adaptive context model: bits 0-5 probability-state index, bit 6
/// the current most probable symbol.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct ContextEntry(u8);

impl ContextEntry {
    /// Builds an entry from a state index (0-62) and MPS bit.
    #[inline]
    pub fn new(state_index: u8, mps: u8) -> Self {
        debug_assert!(state_index < 64 && mps < 2);
        Self(state_index | (mps << 6))
    }

    /// Probability-state index, 0-63.
    #[inline]
    pub fn state_index(self) -> u8 {
        self.0 & 0x3f
    }

    /// Current most probable symbol value.
    #[inline]
    pub fn mps(self) -> u8 {
        (self.0 >> 6) & 1
    }

    /// Packed form used to row-index the transition table.
    #[inline]
    pub(crate) fn packed(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn set_packed(&mut self, packed: u8) {
        debug_assert!(packed < 128);
        self.0 = packed;
    }
}

/// The per-slice array of adaptive context models.
///
/// Bulk-overwritten at slice start from the precomputed static table;
/// individual entries mutate only through the arithmetic decoder's
/// regular-bin decode. Nothing persists across slices.
#[derive(Debug)]
pub struct ContextTable {
    entries: [ContextEntry; NUM_CABAC_CONTEXTS],
}

impl ContextTable {
    /// Creates a table in the neutral all-zero state; call [`init`]
    /// before decoding.
    ///
    /// [`init`]: ContextTable::init
    pub fn new() -> Self {
        Self {
            entries: [ContextEntry::zeroed(); NUM_CABAC_CONTEXTS],
        }
    }

    /// Bulk-initializes every context from the static table column for
    /// `init_class` and `qp`. `init_class` 0-2 are the P/B
    /// cabac_init_idc columns, [`INIT_CLASS_INTRA`] the I-slice column.
    ///
    /// The overwrite is unconditional: no state leaks from a previous
    /// slice.
    pub fn init(&mut self, init_class: usize, qp: u8) -> Result<(), CabacError> {
        if init_class > INIT_CLASS_INTRA {
            return Err(CabacError::InvalidUnitParameters(format!(
                "init class {} out of range",
                init_class
            )));
        }
        if qp > MAX_SLICE_QP {
            return Err(CabacError::InvalidUnitParameters(format!(
                "slice qp {} out of range",
                qp
            )));
        }
        let src: &[u8; NUM_CABAC_CONTEXTS] = &CONTEXT_INIT_STATES[init_class][qp as usize];
        bytemuck::cast_slice_mut::<ContextEntry, u8>(&mut self.entries).copy_from_slice(src);
        Ok(())
    }

    /// Read access for a context model.
    #[inline]
    pub fn get(&self, index: usize) -> ContextEntry {
        debug_assert!(index < NUM_CABAC_CONTEXTS, "context index {}", index);
        self.entries[index]
    }

    /// Mutable access for a context model. An out-of-range index is a
    /// decoder bug, not a bitstream condition.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut ContextEntry {
        debug_assert!(index < NUM_CABAC_CONTEXTS, "context index {}", index);
        &mut self.entries[index]
    }
}

impl Default for ContextTable {
    fn default() -> Self {
        Self::new()
    }
}
