//! Static probability-state tables for the binary arithmetic decoder.
//!
//! The 64-state LPS width table and the MPS/LPS state-transition tables
//! are the fixed data of H.264 clause 9.3.3.2 (Tables 9-44 and 9-45).
//! They are folded at compile time into one packed lookup keyed by
//! (packed context state, 2-bit quantized range) so a regular-bin decode
//! costs a single table read.

/// LPS sub-interval width per probability state and quantized range
/// (H.264 Table 9-44).
pub static RANGE_LPS: [[u8; 4]; 64] = [
    [128, 176, 208, 240],
    [128, 167, 197, 227],
    [128, 158, 187, 216],
    [123, 150, 178, 205],
    [116, 142, 169, 195],
    [111, 135, 160, 185],
    [105, 128, 152, 175],
    [100, 122, 144, 166],
    [95, 116, 137, 158],
    [90, 110, 130, 150],
    [85, 104, 123, 142],
    [81, 99, 117, 135],
    [77, 94, 111, 128],
    [73, 89, 105, 122],
    [69, 85, 100, 116],
    [66, 80, 95, 110],
    [62, 76, 90, 104],
    [59, 72, 86, 99],
    [56, 69, 81, 94],
    [53, 65, 77, 89],
    [51, 62, 73, 85],
    [48, 59, 69, 80],
    [46, 56, 66, 76],
    [43, 53, 63, 72],
    [41, 50, 59, 69],
    [39, 48, 56, 65],
    [37, 45, 54, 62],
    [35, 43, 51, 59],
    [33, 41, 48, 56],
    [32, 39, 46, 53],
    [30, 37, 43, 50],
    [29, 35, 41, 48],
    [27, 33, 39, 45],
    [26, 31, 37, 43],
    [24, 30, 35, 41],
    [23, 28, 33, 39],
    [22, 27, 32, 37],
    [21, 26, 30, 35],
    [20, 24, 29, 33],
    [19, 23, 27, 31],
    [18, 22, 26, 30],
    [17, 21, 25, 28],
    [16, 20, 23, 27],
    [15, 19, 22, 25],
    [14, 18, 21, 24],
    [14, 17, 20, 23],
    [13, 16, 19, 22],
    [12, 15, 18, 21],
    [12, 14, 17, 20],
    [11, 14, 16, 19],
    [11, 13, 15, 18],
    [10, 12, 15, 17],
    [10, 12, 14, 16],
    [9, 11, 13, 15],
    [9, 11, 12, 14],
    [8, 10, 12, 14],
    [8, 9, 11, 13],
    [7, 9, 11, 12],
    [7, 9, 10, 12],
    [7, 8, 10, 11],
    [6, 8, 9, 11],
    [6, 7, 9, 10],
    [6, 7, 8, 9],
    [2, 2, 2, 2],
];

/// Next probability state after decoding the most probable symbol
/// (H.264 Table 9-45).
pub static TRANS_MPS: [u8; 64] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 62, 63,
];

/// Next probability state after decoding the least probable symbol
/// (H.264 Table 9-45). State 0 additionally flips the MPS value.
pub static TRANS_LPS: [u8; 64] = [
    0, 0, 1, 2, 2, 4, 4, 5, 6, 7, 8, 9, 9, 11, 11, 12, 13, 13, 15, 15, 16, 16, 18, 18, 19, 19, 21,
    21, 22, 22, 23, 24, 24, 25, 26, 26, 27, 27, 28, 29, 29, 30, 30, 30, 31, 32, 32, 33, 33, 33, 34,
    34, 35, 35, 35, 36, 36, 36, 37, 37, 37, 38, 38, 63,
];

/// Bit position of the LPS width inside a packed transition entry.
const LPS_WIDTH_SHIFT: u32 = 0;
/// Bit position of the MPS-branch next packed state.
pub(crate) const MPS_NEXT_SHIFT: u32 = 8;
/// Bit position of the LPS-branch next packed state.
pub(crate) const LPS_NEXT_SHIFT: u32 = 15;

const fn pack_entry(lps_width: u8, mps_next: u32, lps_next: u32) -> u32 {
    ((lps_width as u32) << LPS_WIDTH_SHIFT) | (mps_next << MPS_NEXT_SHIFT) | (lps_next << LPS_NEXT_SHIFT)
}

const fn build_transition_table() -> [[u32; 4]; 128] {
    let mut table = [[0u32; 4]; 128];
    let mut packed = 0usize;
    while packed < 128 {
        let state = packed & 0x3f;
        let mps = (packed >> 6) as u32;
        let mps_next = TRANS_MPS[state] as u32 | (mps << 6);
        // Decoding the LPS from state 0 flips which symbol is most probable.
        let lps_next = if state == 0 {
            (1 - mps) << 6
        } else {
            TRANS_LPS[state] as u32 | (mps << 6)
        };
        let mut qrange = 0usize;
        while qrange < 4 {
            table[packed][qrange] = pack_entry(RANGE_LPS[state][qrange], mps_next, lps_next);
            qrange += 1;
        }
        packed += 1;
    }
    table
}

/// Packed transition lookup: 128 rows (state 0-63 × MPS bit) by 4
/// quantized-range columns. Each entry holds the LPS width in bits 0-7,
/// the MPS-branch next packed state in bits 8-14 and the LPS-branch next
/// packed state in bits 15-21.
pub static TRANSITION_TABLE: [[u32; 4]; 128] = build_transition_table();

#[inline]
pub(crate) fn lps_width(entry: u32) -> u32 {
    entry & 0xff
}

#[inline]
pub(crate) fn mps_next(entry: u32) -> u32 {
    (entry >> MPS_NEXT_SHIFT) & 0x7f
}

#[inline]
pub(crate) fn lps_next(entry: u32) -> u32 {
    (entry >> LPS_NEXT_SHIFT) & 0x7f
}
