use std::fmt;

use rayon::prelude::*;

use super::bitboards::*;
use super::movegen::MoveGenerator;
use super::piece_list::PieceList;
use super::zobrist::{self, ZOBRIST};
use super::{Color, Move, MoveType, Piece, Type};
use crate::error::{FenError, MoveParseError};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE, MAKE/UNMAKE AND FEN
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_INDEX: usize = 0;
pub const BLACK_INDEX: usize = 1;

/// Irreversible part of the position, saved before every move so that
/// unmaking is a pop instead of a recomputation.
///
/// `flags` bits 0-3 hold castling rights, bits 4-7 the en-passant file + 1
/// (0 = none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    flags: u8,
    captured_piece_type: Type,
    fifty_move_counter: u32,
}

impl GameState {
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL_CASTLING: u8 = 0b1111;

    pub fn new(castle_rights: u8, en_passant_file_raw: u8, captured_piece_type: Type, fifty_move_counter: u32) -> Self {
        Self {
            flags: (castle_rights & 0x0F) | (en_passant_file_raw << 4),
            captured_piece_type,
            fifty_move_counter,
        }
    }

    #[inline(always)]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline(always)]
    pub fn castle_rights(&self) -> u8 {
        self.flags & 0x0F
    }

    /// En-passant file + 1, or 0 when no en-passant capture is available.
    #[inline(always)]
    pub fn en_passant_file_raw(&self) -> u8 {
        self.flags >> 4
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<usize> {
        match self.en_passant_file_raw() {
            0 => None,
            f => Some(f as usize - 1),
        }
    }

    /// Type captured by the move that produced this state.
    #[inline]
    pub fn captured_piece_type(&self) -> Type {
        self.captured_piece_type
    }

    #[inline]
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    pub fn has_kingside_right(&self, color: Color) -> bool {
        let mask = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        self.flags & mask != 0
    }

    pub fn has_queenside_right(&self, color: Color) -> bool {
        let mask = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        self.flags & mask != 0
    }
}

/// Outcome of the game from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Playing,
    WhiteIsMated,
    BlackIsMated,
    Stalemate,
    Repetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        *self != GameResult::Playing
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Mailbox, kept in sync with the piece lists and king squares.
    squares: [Piece; 64],
    king_square: [usize; 2],
    /// [colour][Pawn..Queen]
    piece_lists: [[PieceList; 5]; 2],
    white_to_move: bool,
    current_game_state: GameState,
    game_state_history: Vec<GameState>,
    fifty_move_counter: u32,
    ply_count: u32,
    zobrist_key: u64,
    repetition_history: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        Self::start_position()
    }
}

impl Position {
    pub fn start_position() -> Position {
        Self::from_fen(START_FEN).expect("start position FEN is valid")
    }

    fn empty() -> Position {
        Self {
            squares: [Piece::NONE; 64],
            king_square: [0; 2],
            piece_lists: Default::default(),
            white_to_move: true,
            current_game_state: GameState::default(),
            game_state_history: Vec::with_capacity(64),
            fifty_move_counter: 0,
            ply_count: 0,
            zobrist_key: 0,
            repetition_history: Vec::with_capacity(64),
        }
    }

    /// Parse a FEN string.
    ///
    /// Only the piece placement is required. Missing fields default to white
    /// to move, all castling rights, no en passant, half-move clock 0 and
    /// full-move number 1. Castling rights whose king or rook is not on its
    /// home square are dropped.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        let placement = parts.first().ok_or(FenError::Empty)?;

        let mut pos = Position::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidLayout(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut kings = [0usize; 2];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidLayout(format!("bad empty-square count '{c}'")));
                    }
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::InvalidLayout(format!("rank '{rank_str}' is too long")));
                    }
                    if piece.piece_type == Type::Pawn && (rank == 0 || rank == 7) {
                        return Err(FenError::InvalidLayout(format!("pawn on back rank '{rank_str}'")));
                    }
                    let square = square_index(file, rank);
                    pos.squares[square] = piece;
                    if piece.piece_type == Type::King {
                        pos.king_square[piece.color.index()] = square;
                        kings[piece.color.index()] += 1;
                    } else {
                        let list = pos.list_mut(piece.color, piece.piece_type);
                        if list.len() >= PieceList::CAPACITY {
                            return Err(FenError::InvalidLayout(format!("too many '{c}' pieces")));
                        }
                        list.add(square);
                    }
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidLayout(format!(
                    "rank '{rank_str}' describes {file} files"
                )));
            }
        }

        for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
            let count = kings[color.index()];
            if count != 1 {
                return Err(FenError::KingCount { color: name, count });
            }
        }

        pos.white_to_move = match parts.get(1).copied().unwrap_or("w") {
            "w" => true,
            "b" => false,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut castle_rights = 0u8;
        match parts.get(2).copied() {
            None => castle_rights = GameState::ALL_CASTLING,
            Some("-") => {}
            Some(castling) => {
                for c in castling.chars() {
                    castle_rights |= match c {
                        'K' => GameState::WHITE_KINGSIDE,
                        'Q' => GameState::WHITE_QUEENSIDE,
                        'k' => GameState::BLACK_KINGSIDE,
                        'q' => GameState::BLACK_QUEENSIDE,
                        _ => return Err(FenError::InvalidCastling(castling.to_string())),
                    };
                }
            }
        }
        castle_rights &= pos.consistent_castle_rights();

        let en_passant_file_raw = match parts.get(3).copied() {
            None | Some("-") => 0,
            Some(ep) => {
                let square = square_from_name(ep).ok_or_else(|| FenError::InvalidEnPassant(ep.to_string()))?;
                let expected_rank = if pos.white_to_move { 5 } else { 2 };
                if rank_index(square) != expected_rank {
                    return Err(FenError::InvalidEnPassant(ep.to_string()));
                }
                if pos.en_passant_is_consistent(square) {
                    file_index(square) as u8 + 1
                } else {
                    0
                }
            }
        };

        let half_move_clock = match parts.get(4) {
            None => 0,
            Some(s) => s.parse::<u32>().map_err(|_| FenError::InvalidCounter(s.to_string()))?,
        };
        let full_move_number = match parts.get(5) {
            None => 1,
            Some(s) => s.parse::<u32>().map_err(|_| FenError::InvalidCounter(s.to_string()))?.max(1),
        };

        pos.fifty_move_counter = half_move_clock;
        pos.ply_count = (full_move_number - 1)
            .checked_mul(2)
            .and_then(|ply| ply.checked_add(u32::from(!pos.white_to_move)))
            .ok_or_else(|| FenError::InvalidCounter(parts.get(5).copied().unwrap_or_default().to_string()))?;
        pos.current_game_state = GameState::new(castle_rights, en_passant_file_raw, Type::None, half_move_clock);
        pos.zobrist_key = zobrist::calculate(&pos);
        pos.repetition_history.push(pos.zobrist_key);

        Ok(pos)
    }

    /// An en-passant target needs an empty target square and the pawn that
    /// just double-pushed right behind it.
    fn en_passant_is_consistent(&self, target: usize) -> bool {
        let (victim_square, victim) = if self.white_to_move {
            (target - 8, Piece::new(Color::Black, Type::Pawn))
        } else {
            (target + 8, Piece::new(Color::White, Type::Pawn))
        };
        self.squares[target].is_none() && self.squares[victim_square] == victim
    }

    /// Castling bits whose king and rook are actually on their home squares.
    fn consistent_castle_rights(&self) -> u8 {
        let at = |sq: usize, color: Color, piece_type: Type| self.squares[sq] == Piece::new(color, piece_type);
        let mut rights = 0;
        if at(E1, Color::White, Type::King) {
            if at(H1, Color::White, Type::Rook) {
                rights |= GameState::WHITE_KINGSIDE;
            }
            if at(A1, Color::White, Type::Rook) {
                rights |= GameState::WHITE_QUEENSIDE;
            }
        }
        if at(E8, Color::Black, Type::King) {
            if at(H8, Color::Black, Type::Rook) {
                rights |= GameState::BLACK_KINGSIDE;
            }
            if at(A8, Color::Black, Type::Rook) {
                rights |= GameState::BLACK_QUEENSIDE;
            }
        }
        rights
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement (starting from rank 8 down to rank 1)
        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.squares[square_index(file, rank)].to_char() {
                    None => empty_count += 1,
                    Some(c) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(c);
                    }
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push_str(if self.white_to_move { " w " } else { " b " });

        let state = self.current_game_state;
        let mut castling = String::new();
        if state.has_kingside_right(Color::White) {
            castling.push('K');
        }
        if state.has_queenside_right(Color::White) {
            castling.push('Q');
        }
        if state.has_kingside_right(Color::Black) {
            castling.push('k');
        }
        if state.has_queenside_right(Color::Black) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);

        match state.en_passant_file() {
            Some(file) => {
                let rank = if self.white_to_move { 5 } else { 2 };
                fen.push(' ');
                fen.push_str(&square_name(square_index(file, rank)));
            }
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(" {} {}", self.fifty_move_counter, self.ply_count / 2 + 1));
        fen
    }

    // ==================== ACCESSORS ====================

    #[inline(always)]
    pub fn squares(&self) -> &[Piece; 64] {
        &self.squares
    }

    /// Raw mailbox access for the move generator's en-passant probe.
    /// Every edit must be reverted before the generator returns.
    #[inline(always)]
    pub(super) fn squares_mut(&mut self) -> &mut [Piece; 64] {
        &mut self.squares
    }

    #[inline(always)]
    pub fn piece_at(&self, square: usize) -> Piece {
        self.squares[square]
    }

    #[inline(always)]
    pub fn king_square(&self, color: Color) -> usize {
        self.king_square[color.index()]
    }

    /// Squares holding `piece_type` (Pawn..Queen) of `color`.
    #[inline(always)]
    pub fn pieces(&self, color: Color, piece_type: Type) -> &PieceList {
        debug_assert!(!matches!(piece_type, Type::King | Type::None));
        &self.piece_lists[color.index()][piece_type.index()]
    }

    #[inline(always)]
    fn list_mut(&mut self, color: Color, piece_type: Type) -> &mut PieceList {
        &mut self.piece_lists[color.index()][piece_type.index()]
    }

    #[inline(always)]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline(always)]
    pub fn colour_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline(always)]
    pub fn opponent_colour(&self) -> Color {
        self.colour_to_move().opposite()
    }

    #[inline(always)]
    pub fn colour_to_move_index(&self) -> usize {
        if self.white_to_move {
            WHITE_INDEX
        } else {
            BLACK_INDEX
        }
    }

    #[inline(always)]
    pub fn current_game_state(&self) -> GameState {
        self.current_game_state
    }

    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    #[inline(always)]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    /// Hash of every position reached by a game move (not search probes),
    /// starting with the loaded position.
    pub fn repetition_history(&self) -> &[u64] {
        &self.repetition_history
    }

    // ==================== MAKE / UNMAKE ====================

    /// Play `mv`, which must come from the move generator for this position.
    ///
    /// `in_search` skips the repetition-history push for search probes.
    pub fn make_move(&mut self, mv: Move, in_search: bool) {
        let keys = &*ZOBRIST;
        let us = self.colour_to_move();
        let them = us.opposite();
        let from = mv.from();
        let to = mv.to();
        let flag = mv.move_type();

        let moving = self.squares[from];
        let captured_type = if flag == MoveType::EnPassant {
            Type::Pawn
        } else {
            self.squares[to].piece_type
        };

        let old_state = self.current_game_state;
        let old_castle = old_state.castle_rights();
        let mut castle = old_castle;
        let mut key = self.zobrist_key;

        if captured_type != Type::None && flag != MoveType::EnPassant {
            key ^= keys.piece(Piece::new(them, captured_type), to);
            self.list_mut(them, captured_type).remove(to);
        }

        if moving.piece_type == Type::King {
            self.king_square[us.index()] = to;
            castle &= match us {
                Color::White => !(GameState::WHITE_KINGSIDE | GameState::WHITE_QUEENSIDE),
                Color::Black => !(GameState::BLACK_KINGSIDE | GameState::BLACK_QUEENSIDE),
            };
        } else {
            self.list_mut(us, moving.piece_type).move_piece(from, to);
        }

        let mut placed = moving;
        if flag.is_promotion() {
            let promotion_type = flag.promotion_type();
            placed = Piece::new(us, promotion_type);
            self.list_mut(us, Type::Pawn).remove(to);
            self.list_mut(us, promotion_type).add(to);
        } else if flag == MoveType::EnPassant {
            let captured_square = en_passant_victim_square(to, us);
            self.squares[captured_square] = Piece::NONE;
            self.list_mut(them, Type::Pawn).remove(captured_square);
            key ^= keys.piece(Piece::new(them, Type::Pawn), captured_square);
        } else if flag == MoveType::Castling {
            let (rook_from, rook_to) = castling_rook_squares(to);
            let rook = Piece::new(us, Type::Rook);
            self.squares[rook_from] = Piece::NONE;
            self.squares[rook_to] = rook;
            self.list_mut(us, Type::Rook).move_piece(rook_from, rook_to);
            key ^= keys.piece(rook, rook_from) ^ keys.piece(rook, rook_to);
        }

        self.squares[to] = placed;
        self.squares[from] = Piece::NONE;
        key ^= keys.piece(moving, from) ^ keys.piece(placed, to);

        let en_passant_file_raw = if flag == MoveType::PawnTwoForward {
            file_index(from) as u8 + 1
        } else {
            0
        };

        // A rook leaving or being captured on its home square loses that right
        if castle != 0 {
            for (square, right) in [
                (H1, GameState::WHITE_KINGSIDE),
                (A1, GameState::WHITE_QUEENSIDE),
                (H8, GameState::BLACK_KINGSIDE),
                (A8, GameState::BLACK_QUEENSIDE),
            ] {
                if from == square || to == square {
                    castle &= !right;
                }
            }
        }

        key ^= keys.en_passant_file[old_state.en_passant_file_raw() as usize];
        key ^= keys.en_passant_file[en_passant_file_raw as usize];
        if castle != old_castle {
            key ^= keys.castling_rights[old_castle as usize];
            key ^= keys.castling_rights[castle as usize];
        }
        key ^= keys.side_to_move;

        if moving.piece_type == Type::Pawn || captured_type != Type::None {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter += 1;
        }
        self.ply_count += 1;
        self.white_to_move = !self.white_to_move;

        self.game_state_history.push(old_state);
        self.current_game_state = GameState::new(castle, en_passant_file_raw, captured_type, self.fifty_move_counter);
        self.zobrist_key = key;

        if !in_search {
            self.repetition_history.push(key);
        }
    }

    /// Exact inverse of [`Position::make_move`] for the most recent move.
    pub fn unmake_move(&mut self, mv: Move, in_search: bool) {
        let Some(previous_state) = self.game_state_history.pop() else {
            debug_assert!(false, "unmake_move called with an empty state stack");
            return;
        };

        let keys = &*ZOBRIST;
        self.white_to_move = !self.white_to_move;
        let us = self.colour_to_move();
        let them = us.opposite();
        let from = mv.from();
        let to = mv.to();
        let flag = mv.move_type();

        let state = self.current_game_state;
        let captured_type = state.captured_piece_type();
        let mut key = self.zobrist_key;

        key ^= keys.side_to_move;
        key ^= keys.en_passant_file[state.en_passant_file_raw() as usize];
        key ^= keys.en_passant_file[previous_state.en_passant_file_raw() as usize];
        if state.castle_rights() != previous_state.castle_rights() {
            key ^= keys.castling_rights[state.castle_rights() as usize];
            key ^= keys.castling_rights[previous_state.castle_rights() as usize];
        }

        let placed = self.squares[to];
        let moving = if flag.is_promotion() {
            Piece::new(us, Type::Pawn)
        } else {
            placed
        };
        key ^= keys.piece(placed, to) ^ keys.piece(moving, from);

        if flag.is_promotion() {
            self.list_mut(us, placed.piece_type).remove(to);
            self.list_mut(us, Type::Pawn).add(from);
        } else if moving.piece_type == Type::King {
            self.king_square[us.index()] = from;
        } else {
            self.list_mut(us, moving.piece_type).move_piece(to, from);
        }

        self.squares[from] = moving;
        self.squares[to] = Piece::NONE;

        if captured_type != Type::None {
            let captured = Piece::new(them, captured_type);
            let captured_square = if flag == MoveType::EnPassant {
                en_passant_victim_square(to, us)
            } else {
                to
            };
            self.squares[captured_square] = captured;
            self.list_mut(them, captured_type).add(captured_square);
            key ^= keys.piece(captured, captured_square);
        }

        if flag == MoveType::Castling {
            let (rook_from, rook_to) = castling_rook_squares(to);
            let rook = Piece::new(us, Type::Rook);
            self.squares[rook_to] = Piece::NONE;
            self.squares[rook_from] = rook;
            self.list_mut(us, Type::Rook).move_piece(rook_to, rook_from);
            key ^= keys.piece(rook, rook_from) ^ keys.piece(rook, rook_to);
        }

        self.current_game_state = previous_state;
        self.fifty_move_counter = previous_state.fifty_move_counter();
        self.ply_count -= 1;
        self.zobrist_key = key;

        if !in_search {
            self.repetition_history.pop();
        }
    }

    // ==================== QUERIES ====================

    /// All legal moves for the side to move, every promotion piece included.
    pub fn legal_moves(&mut self) -> super::MoveList {
        MoveGenerator::default().generate_moves(self, true)
    }

    pub fn in_check(&mut self) -> bool {
        let mut generator = MoveGenerator::default();
        generator.generate_moves(self, false);
        generator.in_check()
    }

    /// Classify the current position: mate, stalemate, or one of the draw rules.
    pub fn game_result(&mut self) -> GameResult {
        let mut generator = MoveGenerator::default();
        let moves = generator.generate_moves(self, true);

        if moves.is_empty() {
            if !generator.in_check() {
                return GameResult::Stalemate;
            }
            return if self.white_to_move {
                GameResult::WhiteIsMated
            } else {
                GameResult::BlackIsMated
            };
        }

        if self.fifty_move_counter >= 100 {
            return GameResult::FiftyMoveRule;
        }

        let repetitions = self
            .repetition_history
            .iter()
            .filter(|&&key| key == self.zobrist_key)
            .count();
        if repetitions >= 3 {
            return GameResult::Repetition;
        }

        if self.has_insufficient_material() {
            return GameResult::InsufficientMaterial;
        }

        GameResult::Playing
    }

    /// Bare kings, or bare kings plus a single minor piece.
    fn has_insufficient_material(&self) -> bool {
        let count = |piece_type: Type| {
            self.pieces(Color::White, piece_type).len() + self.pieces(Color::Black, piece_type).len()
        };
        if count(Type::Pawn) + count(Type::Rook) + count(Type::Queen) != 0 {
            return false;
        }
        count(Type::Knight) + count(Type::Bishop) <= 1
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against the legal moves.
    /// A promotion without a piece letter is read as a queen promotion.
    pub fn move_from_name(&mut self, name: &str) -> Result<Move, MoveParseError> {
        let name = name.trim();
        let malformed = || MoveParseError::Malformed(name.to_string());

        if !name.is_ascii() || !(4..=5).contains(&name.len()) {
            return Err(malformed());
        }
        let from = square_from_name(&name[0..2]).ok_or_else(malformed)?;
        let to = square_from_name(&name[2..4]).ok_or_else(malformed)?;
        let promotion = match name[4..].chars().next() {
            None => None,
            Some(c) => match c.to_ascii_lowercase() {
                'q' => Some(Type::Queen),
                'n' => Some(Type::Knight),
                'r' => Some(Type::Rook),
                'b' => Some(Type::Bishop),
                _ => return Err(malformed()),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| {
                if mv.from() != from || mv.to() != to {
                    return false;
                }
                let promotion_type = mv.move_type().promotion_type();
                match promotion {
                    Some(t) => promotion_type == t,
                    None => promotion_type == Type::None || promotion_type == Type::Queen,
                }
            })
            .ok_or_else(|| MoveParseError::Illegal(name.to_string()))
    }

    // ==================== PERFT ====================

    /// Count leaf nodes `depth` plies below this position.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut pos = self.clone(); // Clone once at this level
        let mut generator = MoveGenerator::default();
        pos.perft_recursive(&mut generator, depth)
    }

    fn perft_recursive(&mut self, generator: &mut MoveGenerator, depth: u32) -> u64 {
        let moves = generator.generate_moves(self, true);

        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv, true);
            nodes += self.perft_recursive(generator, depth - 1);
            self.unmake_move(mv, true);
        }
        nodes
    }

    /// Per-root-move leaf counts, one worker per root move.
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mut root = self.clone();
        let moves = root.legal_moves();

        moves
            .par_iter()
            .map(|&mv| {
                let mut pos = self.clone();
                pos.make_move(mv, true);
                let count = if depth <= 1 { 1 } else { pos.perft(depth - 1) };
                (mv, count)
            })
            .collect()
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim_square(to: usize, mover: Color) -> usize {
    match mover {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}

/// Rook (from, to) for a castling king landing on `king_to`.
#[inline]
fn castling_rook_squares(king_to: usize) -> (usize, usize) {
    let kingside = king_to == G1 || king_to == G8;
    if kingside {
        (king_to + 1, king_to - 1)
    } else {
        (king_to - 2, king_to + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[square_index(file, rank)].to_char().unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{}", self.to_fen())
    }
}
