//! Per-slice parameters and entropy-state bundle.
//!
//! A decoding unit here is one slice: the cursor, the arithmetic
//! registers and the context table all live exactly as long as the slice
//! and are owned by the single thread decoding it. Independent slices
//! may decode in parallel, each with its own `SliceEntropy`; only the
//! static lookup tables are shared.

use log::debug;

use super::bitstream::BitCursor;
use super::cabac::decoder::ArithmeticDecoder;
use super::cabac::init_tables::INIT_CLASS_INTRA;
use super::cabac::{CabacError, ContextTable};
use super::residual::{
    BlockCategory, CbfNeighbors, ResidualBlockDecoder, SparseCoefficientBlock,
};
use crate::MAX_SLICE_QP;

/// Prediction class of the decoding unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceClass {
    Intra,
    Predictive,
    BiPredictive,
}

/// Per-slice initialization parameters, handed down by the header
/// parser.
#[derive(Clone, Copy, Debug)]
pub struct SliceParams {
    pub class: SliceClass,
    /// Context-initialization column for P/B slices (0..=2); ignored
    /// for intra slices, which use their dedicated column.
    pub cabac_init_idc: u8,
    /// Slice quantization parameter, 0..=51.
    pub qp: u8,
    /// Field-coded slice: selects the field significance context
    /// groups.
    pub field_coding: bool,
}

impl SliceParams {
    /// Checks the parameter domain. Violations are a contract breach by
    /// the header layer, caught before any decoding state is built.
    pub fn validate(&self) -> Result<(), CabacError> {
        if self.qp > MAX_SLICE_QP {
            return Err(CabacError::InvalidUnitParameters(format!(
                "slice qp {} out of [0, {}]",
                self.qp, MAX_SLICE_QP
            )));
        }
        if self.class != SliceClass::Intra && self.cabac_init_idc > 2 {
            return Err(CabacError::InvalidUnitParameters(format!(
                "cabac_init_idc {} out of [0, 2]",
                self.cabac_init_idc
            )));
        }
        Ok(())
    }

    fn init_class(&self) -> usize {
        match self.class {
            SliceClass::Intra => INIT_CLASS_INTRA,
            _ => self.cabac_init_idc as usize,
        }
    }
}

/// The complete entropy-decoding state of one slice.
#[derive(Debug)]
pub struct SliceEntropy<'a> {
    pub cursor: BitCursor<'a>,
    pub arith: ArithmeticDecoder,
    pub contexts: ContextTable,
    pub residual: ResidualBlockDecoder,
}

impl<'a> SliceEntropy<'a> {
    /// Validates `params`, initializes the context table for the slice
    /// class and QP, binds the cursor to the payload and primes the
    /// arithmetic registers.
    pub fn begin(
        words: &'a [u32],
        bit_len: u32,
        params: &SliceParams,
    ) -> Result<Self, CabacError> {
        params.validate()?;

        let mut contexts = ContextTable::new();
        contexts.init(params.init_class(), params.qp)?;

        let mut cursor = BitCursor::new(words, bit_len);
        let arith = ArithmeticDecoder::init(&mut cursor)?;

        debug!(
            "slice entropy init: class {:?} idc {} qp {} field {} ({} bits)",
            params.class, params.cabac_init_idc, params.qp, params.field_coding, bit_len
        );

        Ok(Self {
            cursor,
            arith,
            contexts,
            residual: ResidualBlockDecoder::new(params.field_coding),
        })
    }

    /// Decodes one residual block; see
    /// [`ResidualBlockDecoder::decode_block`].
    pub fn decode_residual_block(
        &mut self,
        category: BlockCategory,
        neighbors: CbfNeighbors,
        out: &mut SparseCoefficientBlock,
    ) -> Result<bool, CabacError> {
        self.residual.decode_block(
            &mut self.arith,
            &mut self.cursor,
            &mut self.contexts,
            category,
            neighbors,
            out,
        )
    }

    /// Decodes the end-of-slice terminal bin.
    pub fn decode_terminate(&mut self) -> Result<u32, CabacError> {
        self.arith.decode_terminate(&mut self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::bitstream::pack_words;

    fn intra_params() -> SliceParams {
        SliceParams {
            class: SliceClass::Intra,
            cabac_init_idc: 0,
            qp: 26,
            field_coding: false,
        }
    }

    #[test]
    fn test_validate_rejects_bad_qp() {
        let params = SliceParams { qp: 52, ..intra_params() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_idc() {
        let params = SliceParams {
            class: SliceClass::Predictive,
            cabac_init_idc: 3,
            qp: 26,
            field_coding: false,
        };
        assert!(params.validate().is_err());
        // Intra slices never consult the idc.
        let params = SliceParams { cabac_init_idc: 3, ..intra_params() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_begin_positions_cursor() {
        let words = pack_words(&[0x12, 0x34, 0x56, 0x78, 0x00, 0x00]);
        let entropy = SliceEntropy::begin(&words, 48, &intra_params()).unwrap();
        assert_eq!(entropy.cursor.bit_offset(), 9);
        let (range, value) = entropy.arith.state();
        assert_eq!(range, 0xff00_0000);
        assert_eq!(value, 0x1234_5678);
    }

    #[test]
    fn test_begin_fails_on_truncated_payload() {
        let words = pack_words(&[0x12]);
        let err = SliceEntropy::begin(&words, 8, &intra_params()).unwrap_err();
        assert!(matches!(err, CabacError::BufferExhausted(_)));
    }
}
