use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::piece::{Color, Piece};
use super::position::Position;

/// Random keys for incremental position hashing.
///
/// One key per (piece type, colour, square), one per castling-rights
/// combination, one per en-passant state (index 0 = no en-passant file)
/// and one for black to move.
pub struct ZobristKeys {
    pub pieces: [[[u64; 64]; 2]; 6],
    pub castling_rights: [u64; 16],
    pub en_passant_file: [u64; 9],
    pub side_to_move: u64,
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::generate);

impl ZobristKeys {
    /// Generate keys from a fixed seed so hashes are reproducible across runs.
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(0x517cc1b727220a95);

        let mut pieces = [[[0u64; 64]; 2]; 6];
        for piece_type in &mut pieces {
            for color in piece_type {
                for square in color {
                    *square = rng.gen();
                }
            }
        }

        let mut castling_rights = [0u64; 16];
        for key in &mut castling_rights {
            *key = rng.gen();
        }

        // Index 0 stays zero so "no en passant" contributes nothing.
        let mut en_passant_file = [0u64; 9];
        for key in en_passant_file.iter_mut().skip(1) {
            *key = rng.gen();
        }

        Self {
            pieces,
            castling_rights,
            en_passant_file,
            side_to_move: rng.gen(),
        }
    }

    #[inline(always)]
    pub fn piece(&self, piece: Piece, square: usize) -> u64 {
        self.pieces[piece.piece_type.index()][piece.color.index()][square]
    }
}

/// Hash of `pos` computed from scratch. The incrementally maintained
/// `Position::zobrist_key` must always equal this.
pub fn calculate(pos: &Position) -> u64 {
    let keys = &*ZOBRIST;
    let mut key = 0u64;

    for (square, piece) in pos.squares().iter().enumerate() {
        if !piece.is_none() {
            key ^= keys.piece(*piece, square);
        }
    }

    let state = pos.current_game_state();
    key ^= keys.en_passant_file[state.en_passant_file_raw() as usize];
    key ^= keys.castling_rights[state.castle_rights() as usize];

    if pos.colour_to_move() == Color::Black {
        key ^= keys.side_to_move;
    }

    key
}
