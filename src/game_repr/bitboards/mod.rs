pub mod tables;
pub use tables::*;

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1; // Clear the LSB
    sq
}

/// Find the index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

#[inline(always)]
pub fn contains_square(bb: u64, square: usize) -> bool {
    (bb >> square) & 1 != 0
}

// File and rank masks
pub const FILE_A: u64 = 0x0101010101010101;
pub const FILE_H: u64 = 0x8080808080808080;

pub const RANK_1: u64 = 0x00000000000000FF;
pub const RANK_8: u64 = 0xFF00000000000000;

// Named squares used by castling and FEN handling
pub const A1: usize = 0;
pub const B1: usize = 1;
pub const C1: usize = 2;
pub const D1: usize = 3;
pub const E1: usize = 4;
pub const F1: usize = 5;
pub const G1: usize = 6;
pub const H1: usize = 7;
pub const A8: usize = 56;
pub const B8: usize = 57;
pub const C8: usize = 58;
pub const D8: usize = 59;
pub const E8: usize = 60;
pub const F8: usize = 61;
pub const G8: usize = 62;
pub const H8: usize = 63;

#[inline(always)]
pub fn rank_index(square: usize) -> usize {
    square >> 3
}

#[inline(always)]
pub fn file_index(square: usize) -> usize {
    square & 7
}

#[inline(always)]
pub fn square_index(file: usize, rank: usize) -> usize {
    rank * 8 + file
}

/// `0` -> `"a1"`, `63` -> `"h8"`.
pub fn square_name(square: usize) -> String {
    let file = (b'a' + file_index(square) as u8) as char;
    let rank = (b'1' + rank_index(square) as u8) as char;
    format!("{file}{rank}")
}

/// Inverse of [`square_name`]. Returns `None` for anything that is not `[a-h][1-8]`.
pub fn square_from_name(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(square_index((file - b'a') as usize, (rank - b'1') as usize))
}
