//! Context-model initialization data.
//!
//! Each decoding-unit class carries 460 (m, n) pairs; the adaptive state a
//! context starts in is derived from its pair and the slice quantization
//! parameter by the fixed rule of H.264 clause 9.3.1.1. The derivation is
//! run once at compile time for every (class, qp) combination so slice
//! startup is a straight bulk copy, and the expanded table is immutable
//! for the process lifetime.

use crate::NUM_CABAC_CONTEXTS;

/// Slice QP values 0..=51.
pub const QP_RANGE: usize = 52;

/// Number of initialization classes: cabac_init_idc 0..=2 for P/B
/// slices, plus the dedicated I-slice column.
pub const NUM_INIT_CLASSES: usize = 4;

/// Index of the I-slice column in the expanded table.
pub const INIT_CLASS_INTRA: usize = 3;

type InitPairs = [[i8; 2]; NUM_CABAC_CONTEXTS];

const INIT_INTRA: InitPairs = [
    // 0: mb_type (SI/I)
    [20, -15], [2, 54], [3, 74], [20, -15], [2, 54], [3, 74], [-28, 127], [-23, 104], [-6, 53], [-1, 54],
    [7, 51],
    // 11: mb_skip_flag (P)
    [0, 64], [0, 64], [0, 64],
    // 14: mb_type (P)
    [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64],
    // 21: sub_mb_type (P)
    [0, 64], [0, 64], [0, 64],
    // 24: mb_skip_flag (B)
    [0, 64], [0, 64], [0, 64],
    // 27: mb_type (B)
    [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64],
    // 36: sub_mb_type (B)
    [0, 64], [0, 64], [0, 64], [0, 64],
    // 40: mvd horizontal
    [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64],
    // 47: mvd vertical
    [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64],
    // 54: ref_idx
    [0, 64], [0, 64], [0, 64], [0, 64], [0, 64], [0, 64],
    // 60: mb_qp_delta
    [0, 41], [0, 63], [0, 63], [0, 63],
    // 64: intra_chroma_pred_mode
    [-9, 83], [4, 86], [0, 97], [-7, 72],
    // 68: prev_intra4x4_pred_mode_flag
    [13, 41],
    // 69: rem_intra4x4_pred_mode
    [3, 62],
    // 70: mb_field_decoding_flag
    [0, 45], [-4, 78], [-3, 96],
    // 73: coded_block_pattern luma
    [-27, 126], [-28, 98], [-25, 101], [-23, 67],
    // 77: coded_block_pattern chroma
    [-28, 82], [-20, 94], [-16, 83], [-22, 110], [-21, 91], [-18, 102], [-13, 93], [-29, 127],
    // 85: coded_block_flag
    [-7, 92], [-5, 89], [-7, 96], [-13, 108], [-3, 46], [-1, 65], [-1, 57], [-9, 93], [-3, 74], [-9, 92],
    [-8, 87], [-23, 126], [5, 54], [6, 60], [6, 59], [6, 69], [-1, 48], [0, 68], [-4, 69], [-8, 88],
    // 105: significant_coeff_flag frame
    [-2, 85], [-6, 78], [-1, 75], [-7, 77], [2, 54], [5, 50], [-3, 68], [1, 50], [6, 42], [-4, 81],
    [1, 63], [-4, 70], [0, 67], [2, 57], [-2, 76], [11, 35], [4, 64], [1, 61], [11, 35], [18, 25],
    [12, 24], [13, 29], [13, 36], [-10, 93], [-7, 73], [-2, 73], [13, 46], [9, 49], [-7, 100], [9, 53],
    [2, 53], [5, 53], [-2, 61], [0, 56], [0, 56], [-13, 63], [-5, 60], [-1, 62], [4, 57], [-6, 69],
    [4, 57], [14, 39], [4, 51], [13, 68], [3, 64], [1, 61], [9, 63], [7, 50], [16, 39], [5, 44],
    [4, 52], [11, 48], [-5, 60], [-1, 59], [0, 59], [22, 33], [5, 44], [14, 43], [-1, 78], [0, 60],
    [9, 69],
    // 166: last_significant_coeff_flag frame
    [11, 28], [2, 40], [3, 44], [0, 49], [0, 46], [2, 44], [2, 51], [0, 47], [4, 39], [2, 62],
    [6, 46], [0, 54], [3, 54], [2, 58], [4, 63], [6, 51], [6, 57], [7, 53], [6, 52], [6, 55],
    [11, 45], [14, 36], [8, 53], [-1, 82], [7, 55], [-3, 78], [15, 46], [22, 31], [-1, 84], [25, 7],
    [30, -7], [28, 3], [28, 4], [32, 0], [34, -1], [30, 6], [30, 6], [32, 9], [31, 19], [26, 27],
    [26, 30], [37, 20], [28, 34], [17, 70], [1, 67], [5, 59], [9, 67], [16, 30], [18, 32], [18, 35],
    [22, 29], [24, 31], [23, 38], [18, 43], [20, 41], [11, 63], [9, 59], [9, 64], [-1, 94], [-2, 89],
    [-9, 108],
    // 227: coeff_abs_level_minus1
    [-6, 76], [-2, 44], [0, 45], [0, 52], [-3, 64], [-2, 59], [-4, 70], [-4, 75], [-8, 82], [-17, 102],
    [-9, 77], [3, 24], [0, 42], [0, 48], [0, 55], [-6, 59], [-7, 71], [-12, 83], [-11, 87], [-30, 119],
    [1, 58], [-3, 29], [-1, 36], [1, 38], [2, 43], [-6, 55], [0, 58], [0, 64], [-3, 74], [-10, 90],
    [0, 70], [-4, 29], [5, 31], [7, 42], [1, 59], [-2, 58], [-3, 72], [-3, 81], [-11, 97], [0, 58],
    [8, 5], [10, 14], [14, 18], [13, 27], [2, 40], [0, 58], [-3, 70], [-6, 79], [-8, 85],
    // 276: terminal slot
    [0, 64],
    // 277: significant_coeff_flag field
    [-13, 106], [-16, 106], [-10, 87], [-21, 114], [-18, 110], [-14, 98], [-22, 110], [-21, 106], [-18, 103], [-21, 107],
    [-23, 108], [-26, 112], [-10, 96], [-12, 95], [-5, 91], [-9, 93], [-22, 94], [-5, 86], [9, 67], [-4, 80],
    [-10, 85], [-1, 70], [7, 64], [-10, 99], [-4, 91], [-5, 86], [-12, 87], [-8, 87], [-8, 88], [-5, 82],
    [-3, 72], [-10, 62], [-4, 84], [-7, 76], [-10, 79], [-13, 86], [-13, 90], [-13, 101], [-13, 102], [-10, 90],
    [-12, 92], [-12, 83], [-8, 80], [-8, 82], [-10, 85], [-8, 82], [-8, 74], [-5, 83], [-5, 79], [-5, 86],
    [-5, 92], [-5, 89], [-5, 74], [-3, 78], [-9, 108], [-10, 89], [-6, 76], [-5, 54], [4, 69], [-3, 81],
    [0, 88],
    // 338: last_significant_coeff_flag field
    [15, 6], [6, 19], [7, 16], [12, 14], [18, 13], [13, 11], [13, 15], [15, 16], [12, 23], [13, 23],
    [15, 20], [14, 26], [14, 44], [17, 40], [17, 47], [24, 17], [21, 21], [25, 22], [31, 27], [22, 29],
    [19, 35], [14, 50], [10, 57], [7, 63], [-2, 77], [-4, 82], [-3, 94], [9, 69], [-12, 109], [36, -35],
    [36, -34], [32, -26], [37, -30], [44, -32], [34, -18], [34, -15], [40, -15], [33, -7], [35, -5], [33, 0],
    [38, 2], [33, 13], [23, 35], [13, 58], [29, -3], [26, 0], [22, 30], [31, -7], [35, -15], [34, -3],
    [34, 3], [36, -1], [34, 5], [32, 11], [35, 5], [34, 12], [39, 11], [30, 29], [34, 26], [29, 39],
    [19, 66],
    // 399: transform_size_8x8_flag
    [31, 21], [31, 31], [25, 50],
    // 402: significant_coeff_flag 8x8 frame
    [-17, 120], [-20, 112], [-18, 114], [-11, 85], [-15, 92], [-14, 89], [-26, 71], [-15, 81], [-14, 80], [0, 68],
    [-14, 70], [-24, 56], [-23, 68], [-24, 50], [-11, 74],
    // 417: last_significant_coeff_flag 8x8
    [23, -13], [26, -13], [40, -15], [49, -14], [44, 3], [45, 6], [44, 34], [33, 54], [19, 82],
    // 426: coeff_abs_level_minus1 8x8
    [-3, 75], [-1, 23], [1, 34], [1, 43], [0, 54], [-2, 55], [0, 61], [1, 64], [0, 68], [-9, 92],
    // 436: significant_coeff_flag 8x8 field
    [-14, 106], [-13, 97], [-15, 90], [-12, 90], [-18, 88], [-10, 73], [-9, 79], [-14, 86], [-10, 73], [-10, 70],
    [-10, 69], [-5, 66], [-9, 64], [-5, 58], [2, 59],
    // 451: last_significant_coeff_flag 8x8 field
    [21, -10], [24, -11], [28, -8], [28, 1], [29, 3], [29, 9], [35, 20], [29, 36], [14, 67],
];

const INIT_INTER_0: InitPairs = [
    // 0: mb_type (SI/I)
    [20, -15], [2, 54], [3, 74], [20, -15], [2, 54], [3, 74], [-28, 127], [-23, 104], [-6, 53], [-1, 54],
    [7, 51],
    // 11: mb_skip_flag (P)
    [23, 33], [23, 2], [21, 0],
    // 14: mb_type (P)
    [1, 9], [0, 49], [-37, 118], [5, 57], [-13, 78], [-11, 65], [1, 62],
    // 21: sub_mb_type (P)
    [12, 49], [-4, 73], [17, 50],
    // 24: mb_skip_flag (B)
    [18, 64], [9, 43], [29, 0],
    // 27: mb_type (B)
    [26, 67], [16, 90], [9, 104], [-46, 127], [-20, 104], [1, 67], [-13, 78], [-11, 65], [1, 62],
    // 36: sub_mb_type (B)
    [-6, 86], [-17, 95], [-6, 61], [9, 45],
    // 40: mvd horizontal
    [-3, 69], [-6, 81], [-11, 96], [0, 58], [7, 55], [-5, 89], [2, 80],
    // 47: mvd vertical
    [-3, 75], [-8, 82], [-10, 92], [1, 56], [5, 57], [-6, 86], [4, 76],
    // 54: ref_idx
    [-5, 85], [-6, 81], [-10, 77], [-7, 81], [-17, 80], [-18, 73],
    // 60: mb_qp_delta
    [0, 41], [0, 63], [0, 63], [0, 63],
    // 64: intra_chroma_pred_mode
    [-8, 79], [6, 81], [0, 95], [-6, 69],
    // 68: prev_intra4x4_pred_mode_flag
    [15, 37],
    // 69: rem_intra4x4_pred_mode
    [3, 61],
    // 70: mb_field_decoding_flag
    [1, 43], [-5, 80], [-3, 96],
    // 73: coded_block_pattern luma
    [-26, 125], [-29, 101], [-25, 103], [-25, 72],
    // 77: coded_block_pattern chroma
    [-29, 86], [-20, 97], [-18, 78], [-23, 115], [-21, 95], [-20, 98], [-14, 88], [-32, 126],
    // 85: coded_block_flag
    [-13, 103], [-11, 91], [-9, 89], [-14, 92], [-8, 76], [-12, 87], [-23, 110], [-24, 105], [-10, 78], [-20, 112],
    [-17, 99], [-78, 127], [-70, 127], [-50, 127], [-46, 127], [-4, 66], [-5, 78], [-4, 71], [-8, 72], [2, 59],
    // 105: significant_coeff_flag frame
    [-1, 85], [-4, 77], [2, 73], [-6, 78], [4, 54], [5, 54], [-2, 70], [3, 51], [6, 47], [-3, 85],
    [3, 65], [-4, 65], [1, 72], [1, 54], [-2, 72], [12, 30], [3, 62], [1, 58], [12, 31], [17, 24],
    [12, 22], [11, 31], [12, 37], [-10, 92], [-9, 76], [-3, 75], [10, 51], [7, 53], [-8, 103], [6, 48],
    [0, 58], [4, 57], [-5, 57], [-2, 51], [3, 55], [-16, 61], [-7, 56], [2, 62], [1, 56], [-4, 71],
    [7, 58], [11, 39], [6, 54], [16, 70], [0, 65], [3, 65], [12, 66], [8, 46], [18, 34], [8, 48],
    [5, 49], [13, 44], [-2, 65], [0, 57], [2, 56], [22, 33], [6, 43], [16, 41], [-1, 79], [1, 60],
    [8, 73],
    // 166: last_significant_coeff_flag frame
    [11, 30], [3, 41], [2, 49], [0, 53], [1, 48], [1, 39], [2, 56], [-2, 44], [3, 35], [2, 57],
    [4, 44], [-1, 51], [3, 50], [0, 57], [3, 61], [3, 53], [4, 58], [6, 52], [3, 55], [4, 57],
    [14, 50], [11, 40], [6, 56], [2, 77], [4, 60], [-5, 82], [18, 42], [19, 26], [1, 83], [28, 5],
    [27, -11], [30, 3], [31, 3], [33, 2], [36, 0], [33, 6], [31, 9], [34, 11], [34, 20], [27, 31],
    [28, 33], [37, 16], [29, 29], [19, 74], [1, 64], [6, 55], [11, 72], [16, 28], [19, 29], [17, 35],
    [22, 28], [25, 29], [22, 39], [18, 43], [18, 45], [10, 66], [9, 60], [7, 69], [-2, 98], [-2, 91],
    [-11, 103],
    // 227: coeff_abs_level_minus1
    [-7, 81], [-5, 41], [-2, 41], [-1, 47], [-6, 62], [-4, 56], [-5, 66], [-7, 75], [-10, 80], [-14, 104],
    [-12, 78], [1, 23], [3, 45], [-3, 50], [2, 60], [-3, 63], [-10, 74], [-10, 78], [-8, 92], [-33, 123],
    [3, 54], [0, 24], [0, 35], [3, 36], [5, 39], [-5, 55], [2, 57], [0, 66], [-2, 75], [-8, 90],
    [0, 73], [-3, 31], [7, 32], [7, 46], [2, 62], [-3, 54], [-3, 67], [-2, 85], [-12, 94], [0, 54],
    [9, 10], [9, 12], [14, 15], [11, 27], [1, 39], [0, 56], [-5, 71], [-7, 79], [-11, 89],
    // 276: terminal slot
    [0, 64],
    // 277: significant_coeff_flag field
    [-14, 107], [-19, 111], [-12, 91], [-22, 116], [-21, 105], [-16, 103], [-19, 107], [-24, 102], [-20, 98], [-18, 105],
    [-26, 105], [-24, 113], [-7, 96], [-15, 93], [-3, 93], [-6, 94], [-25, 93], [-3, 89], [12, 69], [-3, 85],
    [-8, 89], [2, 73], [8, 59], [-8, 104], [-1, 95], [-4, 83], [-10, 82], [-8, 86], [-7, 86], [-3, 78],
    [-3, 72], [-9, 61], [-5, 86], [-7, 77], [-9, 79], [-14, 89], [-13, 92], [-12, 102], [-14, 107], [-10, 93],
    [-14, 88], [-13, 78], [-8, 84], [-10, 79], [-11, 81], [-8, 87], [-10, 72], [-6, 80], [-8, 79], [-7, 85],
    [-6, 90], [-8, 90], [-7, 74], [0, 82], [-12, 111], [-12, 90], [-3, 81], [-8, 58], [2, 71], [0, 76],
    [-3, 93],
    // 338: last_significant_coeff_flag field
    [17, 3], [9, 15], [4, 11], [14, 12], [21, 10], [14, 12], [15, 15], [18, 14], [13, 25], [15, 24],
    [18, 19], [15, 29], [16, 46], [17, 45], [18, 51], [26, 20], [21, 16], [26, 27], [33, 31], [22, 26],
    [20, 30], [13, 49], [10, 55], [8, 59], [-3, 77], [-4, 81], [-5, 96], [8, 70], [-12, 109], [34, -32],
    [35, -32], [32, -25], [35, -25], [43, -29], [31, -22], [32, -20], [39, -11], [30, -10], [33, -9], [36, -1],
    [35, 0], [31, 10], [26, 35], [10, 57], [27, -5], [29, 2], [19, 30], [33, -3], [38, -12], [31, -2],
    [36, 8], [39, 3], [31, 7], [34, 6], [38, 10], [35, 9], [41, 7], [33, 24], [35, 25], [31, 36],
    [19, 67],
    // 399: transform_size_8x8_flag
    [32, 21], [33, 29], [25, 52],
    // 402: significant_coeff_flag 8x8 frame
    [-16, 121], [-18, 111], [-18, 117], [-10, 87], [-16, 97], [-14, 93], [-25, 74], [-16, 77], [-14, 85], [1, 72],
    [-15, 67], [-24, 51], [-25, 67], [-25, 48], [-11, 70],
    // 417: last_significant_coeff_flag 8x8
    [21, -13], [25, -14], [37, -13], [47, -13], [43, 3], [42, 9], [42, 36], [32, 55], [16, 87],
    // 426: coeff_abs_level_minus1 8x8
    [-5, 78], [2, 19], [-2, 29], [-1, 47], [3, 51], [-5, 51], [2, 60], [4, 62], [-3, 65], [-7, 92],
    // 436: significant_coeff_flag 8x8 field
    [-11, 105], [-16, 95], [-13, 92], [-9, 90], [-17, 92], [-8, 76], [-6, 80], [-13, 91], [-8, 77], [-7, 72],
    [-9, 64], [-3, 71], [-9, 61], [-4, 54], [4, 54],
    // 451: last_significant_coeff_flag 8x8 field
    [21, -11], [25, -14], [27, -7], [28, 1], [30, 1], [28, 11], [35, 21], [30, 35], [13, 70],
];

const INIT_INTER_1: InitPairs = [
    // 0: mb_type (SI/I)
    [20, -15], [2, 54], [3, 74], [20, -15], [2, 54], [3, 74], [-28, 127], [-23, 104], [-6, 53], [-1, 54],
    [7, 51],
    // 11: mb_skip_flag (P)
    [25, 36], [26, 3], [18, 0],
    // 14: mb_type (P)
    [3, 13], [3, 51], [-36, 113], [7, 62], [-10, 81], [-10, 61], [3, 57],
    // 21: sub_mb_type (P)
    [12, 47], [-3, 70], [19, 46],
    // 24: mb_skip_flag (B)
    [18, 64], [10, 41], [31, -3],
    // 27: mb_type (B)
    [26, 68], [17, 89], [8, 107], [-46, 127], [-19, 104], [0, 71], [-13, 81], [-10, 66], [0, 67],
    // 36: sub_mb_type (B)
    [-6, 90], [-19, 92], [-7, 56], [9, 50],
    // 40: mvd horizontal
    [-5, 67], [-7, 77], [-14, 96], [-2, 57], [6, 52], [-8, 90], [0, 80],
    // 47: mvd vertical
    [-4, 73], [-11, 84], [-12, 93], [4, 61], [2, 60], [-8, 88], [7, 71],
    // 54: ref_idx
    [-8, 89], [-4, 78], [-7, 73], [-10, 86], [-15, 78], [-15, 70],
    // 60: mb_qp_delta
    [0, 41], [0, 63], [0, 63], [0, 63],
    // 64: intra_chroma_pred_mode
    [-7, 83], [7, 85], [1, 100], [-5, 73],
    // 68: prev_intra4x4_pred_mode_flag
    [16, 41],
    // 69: rem_intra4x4_pred_mode
    [4, 66],
    // 70: mb_field_decoding_flag
    [2, 47], [-4, 73], [-2, 101],
    // 73: coded_block_pattern luma
    [-25, 127], [-28, 94], [-24, 96], [-24, 65],
    // 77: coded_block_pattern chroma
    [-28, 79], [-19, 90], [-17, 83], [-22, 108], [-20, 88], [-19, 103], [-13, 92], [-31, 127],
    // 85: coded_block_flag
    [-8, 94], [-5, 89], [-9, 100], [-14, 111], [-3, 47], [-3, 70], [-2, 61], [-12, 90], [-5, 69], [-10, 97],
    [-11, 85], [-25, 122], [8, 54], [3, 59], [4, 56], [9, 70], [-4, 48], [-2, 66], [-1, 71], [-11, 89],
    // 105: significant_coeff_flag frame
    [0, 90], [-3, 81], [-4, 77], [-5, 72], [5, 58], [6, 47], [-1, 64], [4, 55], [7, 40], [-2, 78],
    [4, 58], [-3, 69], [2, 65], [2, 59], [-1, 76], [13, 34], [4, 67], [2, 62], [13, 35], [18, 29],
    [13, 26], [12, 24], [13, 41], [-9, 96], [-8, 69], [-2, 68], [11, 45], [8, 46], [-7, 96], [7, 53],
    [1, 51], [5, 50], [-4, 62], [-1, 55], [-3, 59], [-15, 65], [-6, 60], [-4, 66], [2, 60], [-3, 64],
    [1, 62], [12, 43], [7, 48], [10, 63], [1, 69], [4, 59], [6, 59], [9, 50], [19, 38], [2, 41],
    [6, 53], [14, 48], [-8, 58], [1, 61], [3, 60], [23, 38], [7, 47], [17, 45], [0, 73], [2, 64],
    [9, 66],
    // 166: last_significant_coeff_flag frame
    [12, 24], [4, 45], [3, 42], [1, 46], [2, 41], [2, 43], [3, 49], [-1, 49], [4, 39], [3, 61],
    [5, 49], [0, 55], [4, 54], [1, 62], [4, 65], [4, 46], [5, 62], [7, 56], [4, 48], [5, 50],
    [8, 44], [12, 33], [7, 49], [-4, 82], [5, 53], [-4, 75], [12, 47], [20, 30], [2, 87], [22, 9],
    [28, -7], [31, 7], [25, 7], [34, -4], [37, 4], [27, 10], [32, 3], [35, 4], [28, 24], [28, 25],
    [29, 26], [38, 20], [30, 33], [20, 67], [2, 68], [7, 59], [12, 66], [17, 32], [20, 33], [18, 40],
    [23, 32], [26, 33], [23, 33], [19, 47], [19, 38], [11, 59], [10, 64], [8, 62], [-1, 91], [-1, 84],
    [-10, 107],
    // 227: coeff_abs_level_minus1
    [-6, 74], [-4, 46], [-1, 45], [0, 51], [-5, 67], [-3, 60], [-4, 70], [-6, 79], [-9, 84], [-20, 97],
    [-11, 82], [2, 27], [-3, 38], [-2, 43], [3, 54], [-9, 56], [-9, 67], [-9, 83], [-14, 85], [-32, 116],
    [4, 59], [-6, 28], [1, 39], [4, 40], [-1, 43], [-4, 59], [3, 61], [1, 60], [-1, 79], [-7, 94],
    [1, 67], [-2, 24], [8, 36], [8, 40], [3, 55], [-2, 58], [-2, 71], [-1, 78], [-11, 98], [1, 58],
    [10, 4], [10, 16], [15, 19], [12, 32], [2, 43], [1, 60], [-4, 65], [-6, 83], [-10, 82],
    // 276: terminal slot
    [0, 64],
    // 277: significant_coeff_flag field
    [-13, 111], [-18, 104], [-11, 84], [-21, 110], [-20, 109], [-15, 96], [-25, 112], [-23, 106], [-19, 102], [-24, 110],
    [-25, 109], [-23, 117], [-13, 100], [-14, 97], [-2, 86], [-12, 98], [-24, 98], [-2, 82], [6, 62], [-2, 79],
    [-7, 82], [-4, 66], [9, 64], [-7, 97], [-7, 88], [-3, 87], [-9, 86], [-7, 90], [-6, 90], [-2, 83],
    [-2, 76], [-8, 65], [-4, 80], [-6, 81], [-8, 83], [-13, 83], [-12, 85], [-11, 106], [-13, 100], [-9, 86],
    [-13, 92], [-12, 82], [-7, 77], [-9, 83], [-10, 85], [-7, 81], [-9, 76], [-5, 84], [-7, 84], [-6, 89],
    [-5, 94], [-7, 84], [-6, 78], [-6, 75], [-11, 104], [-11, 94], [-9, 74], [-7, 51], [3, 65], [-6, 80],
    [-2, 86],
    // 338: last_significant_coeff_flag field
    [18, 8], [3, 19], [5, 15], [15, 17], [15, 14], [15, 16], [16, 19], [12, 18], [14, 18], [16, 28],
    [12, 24], [16, 22], [17, 39], [18, 39], [19, 44], [27, 13], [22, 21], [27, 20], [34, 24], [23, 30],
    [21, 34], [14, 53], [11, 59], [9, 64], [-2, 81], [-3, 85], [-4, 90], [9, 74], [-11, 113], [35, -38],
    [36, -39], [33, -21], [36, -32], [44, -36], [32, -18], [33, -16], [40, -17], [31, -6], [34, -5], [30, 4],
    [36, 4], [32, 14], [20, 40], [11, 61], [28, -1], [23, -5], [20, 34], [34, -10], [32, -19], [32, -8],
    [37, 1], [33, -4], [32, 1], [35, 10], [32, 3], [36, 14], [42, 11], [27, 28], [36, 29], [32, 40],
    [20, 71],
    // 399: transform_size_8x8_flag
    [33, 25], [34, 33], [26, 45],
    // 402: significant_coeff_flag 8x8 frame
    [-15, 125], [-17, 116], [-17, 110], [-9, 80], [-15, 91], [-13, 86], [-24, 67], [-15, 81], [-13, 78], [2, 65],
    [-14, 71], [-23, 55], [-24, 71], [-24, 52], [-10, 75],
    // 417: last_significant_coeff_flag 8x8
    [22, -9], [26, -10], [38, -19], [48, -9], [44, 7], [43, 3], [43, 29], [33, 59], [17, 80],
    // 426: coeff_abs_level_minus1 8x8
    [-4, 71], [-4, 23], [-1, 33], [0, 41], [-3, 55], [-4, 55], [3, 65], [-2, 66], [-2, 69], [-6, 97],
    // 436: significant_coeff_flag 8x8 field
    [-17, 109], [-15, 99], [-12, 85], [-15, 94], [-16, 85], [-7, 69], [-12, 74], [-12, 84], [-7, 70], [-13, 66],
    [-8, 68], [-2, 64], [-8, 66], [-3, 58], [5, 58],
    // 451: last_significant_coeff_flag 8x8 field
    [22, -7], [26, -10], [28, -3], [29, 5], [31, 6], [29, 4], [36, 25], [31, 40], [14, 63],
];

const INIT_INTER_2: InitPairs = [
    // 0: mb_type (SI/I)
    [20, -15], [2, 54], [3, 74], [20, -15], [2, 54], [3, 74], [-28, 127], [-23, 104], [-6, 53], [-1, 54],
    [7, 51],
    // 11: mb_skip_flag (P)
    [26, 29], [20, 7], [19, 4],
    // 14: mb_type (P)
    [4, 6], [-3, 45], [-35, 117], [8, 55], [-16, 75], [-9, 65], [4, 61],
    // 21: sub_mb_type (P)
    [13, 52], [-2, 74], [20, 50],
    // 24: mb_skip_flag (B)
    [19, 68], [11, 45], [32, 1],
    // 27: mb_type (B)
    [27, 72], [18, 94], [9, 100], [-45, 122], [-18, 109], [1, 64], [-12, 74], [-9, 60], [1, 60],
    // 36: sub_mb_type (B)
    [-5, 83], [-18, 96], [-6, 60], [10, 43],
    // 40: mvd horizontal
    [-4, 71], [-6, 81], [-13, 100], [-1, 61], [7, 57], [-7, 94], [1, 84],
    // 47: mvd vertical
    [-3, 78], [-10, 77], [-11, 97], [-2, 54], [3, 53], [-7, 81], [1, 75],
    // 54: ref_idx
    [-7, 82], [-3, 82], [-13, 77], [-9, 80], [-14, 82], [-21, 74],
    // 60: mb_qp_delta
    [0, 41], [0, 63], [0, 63], [0, 63],
    // 64: intra_chroma_pred_mode
    [-6, 87], [1, 89], [2, 93], [-4, 77],
    // 68: prev_intra4x4_pred_mode_flag
    [10, 45],
    // 69: rem_intra4x4_pred_mode
    [5, 59],
    // 70: mb_field_decoding_flag
    [3, 41], [-3, 77], [-1, 94],
    // 73: coded_block_pattern luma
    [-24, 123], [-27, 98], [-23, 100], [-23, 70],
    // 77: coded_block_pattern chroma
    [-27, 83], [-18, 94], [-16, 87], [-21, 112], [-19, 92], [-18, 107], [-12, 97], [-30, 123],
    // 85: coded_block_flag
    [-7, 87], [-4, 94], [-8, 93], [-13, 104], [-2, 41], [-2, 63], [-1, 54], [-11, 94], [-4, 73], [-9, 90],
    [-10, 89], [-24, 127], [2, 58], [4, 63], [5, 61], [3, 74], [-3, 52], [-1, 71], [-7, 64], [-10, 93],
    // 105: significant_coeff_flag frame
    [1, 83], [-9, 74], [-3, 70], [-4, 76], [-1, 52], [7, 51], [0, 68], [-2, 49], [8, 44], [-1, 82],
    [-2, 63], [-2, 73], [3, 69], [3, 52], [0, 80], [14, 38], [5, 60], [3, 66], [14, 39], [19, 22],
    [14, 20], [13, 28], [14, 34], [-8, 90], [-7, 73], [-1, 72], [12, 49], [9, 50], [-6, 100], [8, 57],
    [2, 55], [6, 54], [-3, 66], [0, 60], [-2, 52], [-14, 58], [-5, 65], [-3, 59], [3, 53], [-9, 69],
    [2, 55], [13, 36], [1, 52], [11, 67], [2, 62], [-2, 63], [7, 64], [10, 54], [13, 42], [3, 46],
    [7, 57], [8, 52], [-7, 63], [2, 54], [-3, 64], [24, 31], [8, 40], [11, 38], [1, 77], [3, 58],
    [10, 70],
    // 166: last_significant_coeff_flag frame
    [13, 28], [5, 39], [4, 46], [2, 50], [3, 46], [3, 47], [4, 53], [0, 42], [5, 43], [4, 65],
    [6, 42], [1, 49], [5, 58], [2, 55], [5, 59], [5, 50], [6, 55], [8, 50], [5, 52], [6, 54],
    [9, 48], [13, 37], [8, 53], [-3, 86], [6, 58], [-3, 79], [13, 51], [21, 35], [-4, 80], [23, 2],
    [29, -2], [25, 0], [26, 0], [35, 0], [31, -3], [28, 3], [33, 7], [29, 9], [29, 17], [29, 29],
    [23, 31], [39, 24], [31, 37], [14, 72], [3, 72], [8, 63], [6, 70], [18, 25], [21, 37], [19, 33],
    [24, 25], [27, 26], [24, 37], [20, 41], [20, 42], [12, 63], [11, 58], [9, 66], [0, 95], [0, 89],
    [-9, 111],
    // 227: coeff_abs_level_minus1
    [-5, 78], [-3, 39], [0, 49], [1, 55], [-4, 60], [-2, 54], [-3, 74], [-5, 72], [-8, 78], [-19, 101],
    [-10, 75], [3, 21], [-2, 42], [-1, 47], [-3, 58], [-8, 60], [-8, 71], [-15, 87], [-13, 90], [-31, 120],
    [-2, 63], [-5, 33], [2, 32], [-2, 33], [0, 48], [-3, 52], [-3, 54], [2, 64], [0, 72], [-13, 87],
    [2, 71], [-1, 29], [2, 29], [9, 44], [4, 60], [-1, 62], [-1, 75], [0, 83], [-10, 102], [2, 62],
    [11, 8], [11, 9], [16, 23], [13, 25], [3, 37], [2, 53], [-3, 69], [-5, 77], [-9, 86],
    // 276: terminal slot
    [0, 64],
    // 277: significant_coeff_flag field
    [-12, 105], [-17, 108], [-10, 88], [-20, 114], [-19, 113], [-14, 100], [-24, 105], [-22, 111], [-18, 106], [-23, 103],
    [-24, 103], [-29, 110], [-12, 93], [-13, 91], [-8, 90], [-11, 91], [-23, 91], [-8, 86], [7, 66], [-1, 83],
    [-13, 86], [-3, 70], [10, 68], [-13, 102], [-6, 92], [-2, 91], [-15, 91], [-6, 83], [-5, 83], [-8, 87],
    [-1, 69], [-7, 58], [-3, 84], [-5, 74], [-7, 76], [-12, 87], [-11, 90], [-10, 99], [-12, 104], [-8, 91],
    [-12, 96], [-11, 86], [-6, 82], [-8, 87], [-9, 89], [-6, 85], [-8, 69], [-4, 88], [-6, 77], [-5, 83],
    [-4, 87], [-6, 88], [-5, 72], [-5, 79], [-10, 108], [-10, 88], [-8, 78], [-6, 55], [4, 69], [-5, 84],
    [-1, 90],
    // 338: last_significant_coeff_flag field
    [12, 1], [4, 24], [6, 19], [9, 10], [16, 8], [16, 9], [10, 12], [13, 12], [15, 22], [10, 21],
    [13, 17], [17, 26], [11, 43], [19, 43], [20, 49], [21, 17], [23, 25], [28, 25], [28, 28], [24, 34],
    [22, 39], [15, 46], [12, 52], [10, 68], [-1, 74], [-2, 78], [-3, 94], [10, 68], [-10, 106], [36, -34],
    [37, -34], [34, -28], [37, -28], [45, -31], [33, -14], [34, -12], [41, -13], [32, -2], [35, -1], [31, -3],
    [37, -3], [33, 18], [21, 33], [12, 55], [29, -8], [24, -1], [21, 28], [28, -6], [33, -15], [33, -4],
    [31, 5], [34, 0], [33, 5], [29, 14], [33, 7], [37, 7], [36, 16], [28, 32], [37, 22], [26, 34],
    [21, 64],
    // 399: transform_size_8x8_flag
    [34, 18], [28, 27], [27, 49],
    // 402: significant_coeff_flag 8x8 frame
    [-14, 118], [-23, 109], [-16, 114], [-8, 84], [-14, 95], [-12, 91], [-23, 71], [-14, 85], [-12, 83], [3, 69],
    [-13, 75], [-22, 60], [-23, 64], [-23, 45], [-9, 79],
    // 417: last_significant_coeff_flag 8x8
    [23, -16], [27, -17], [39, -15], [49, -15], [45, 0], [44, 7], [44, 34], [34, 52], [18, 84],
    // 426: coeff_abs_level_minus1 8x8
    [-3, 76], [-3, 27], [0, 37], [1, 45], [-2, 59], [-3, 59], [-3, 58], [-1, 60], [-1, 73], [-12, 90],
    // 436: significant_coeff_flag 8x8 field
    [-16, 103], [-14, 92], [-18, 89], [-14, 88], [-15, 89], [-13, 73], [-11, 78], [-11, 88], [-13, 74], [-12, 70],
    [-7, 73], [-8, 68], [-7, 59], [-2, 63], [-1, 62],
    // 451: last_significant_coeff_flag 8x8 field
    [23, -14], [27, -16], [29, -10], [30, -2], [32, -1], [30, 8], [37, 18], [32, 33], [15, 68],
];

const fn clip3(lo: i32, hi: i32, v: i32) -> i32 {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Derives the packed initial context state (bits 0-5 state index, bit 6
/// MPS) for one (m, n) pair and slice QP.
const fn initial_state(m: i8, n: i8, qp: u8) -> u8 {
    let pre = clip3(1, 126, ((m as i32 * clip3(0, 51, qp as i32)) >> 4) + n as i32);
    if pre <= 63 {
        (63 - pre) as u8
    } else {
        ((pre - 64) as u8) | 0x40
    }
}

const fn expand_class(pairs: &InitPairs) -> [[u8; NUM_CABAC_CONTEXTS]; QP_RANGE] {
    let mut out = [[0u8; NUM_CABAC_CONTEXTS]; QP_RANGE];
    let mut qp = 0;
    while qp < QP_RANGE {
        let mut ctx = 0;
        while ctx < NUM_CABAC_CONTEXTS {
            out[qp][ctx] = initial_state(pairs[ctx][0], pairs[ctx][1], qp as u8);
            ctx += 1;
        }
        qp += 1;
    }
    out
}

/// Precomputed packed context states, indexed by
/// `[init class][slice qp][context]`. Classes 0-2 are cabac_init_idc for
/// P/B slices; class 3 ([`INIT_CLASS_INTRA`]) is the I-slice column.
pub static CONTEXT_INIT_STATES: [[[u8; NUM_CABAC_CONTEXTS]; QP_RANGE]; NUM_INIT_CLASSES] = [
    expand_class(&INIT_INTER_0),
    expand_class(&INIT_INTER_1),
    expand_class(&INIT_INTER_2),
    expand_class(&INIT_INTRA),
];
