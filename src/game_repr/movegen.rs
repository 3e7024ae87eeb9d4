use std::ops::Range;

use super::bitboards::*;
use super::position::Position;
use super::{Color, Move, MoveList, MoveType, Piece, Type};

/// Which promotion pieces to generate for a pawn reaching the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionMode {
    #[default]
    All,
    QueenOnly,
    QueenAndKnight,
}

/// Legal move generator.
///
/// Works directly from the mailbox and piece lists: it first builds the
/// opponent's attack maps and the pin/check rays around the friendly king,
/// then only emits moves that respect them, so no move needs a trial
/// make/unmake except the en-passant probe.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    pub promotions_to_generate: PromotionMode,

    gen_quiets: bool,
    in_check: bool,
    in_double_check: bool,
    pins_exist_in_position: bool,
    check_ray_bitmask: u64,
    pin_ray_bitmask: u64,

    white_to_move: bool,
    friendly_colour: Color,
    opponent_colour: Color,
    friendly_king_square: usize,

    opponent_attack_map: u64,
    opponent_attack_map_no_pawns: u64,
    opponent_sliding_attack_map: u64,
    opponent_knight_attacks: u64,
    opponent_pawn_attack_map: u64,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(PromotionMode::All)
    }
}

impl MoveGenerator {
    pub fn new(promotions_to_generate: PromotionMode) -> Self {
        Self {
            promotions_to_generate,
            gen_quiets: true,
            in_check: false,
            in_double_check: false,
            pins_exist_in_position: false,
            check_ray_bitmask: 0,
            pin_ray_bitmask: 0,
            white_to_move: true,
            friendly_colour: Color::White,
            opponent_colour: Color::Black,
            friendly_king_square: 0,
            opponent_attack_map: 0,
            opponent_attack_map_no_pawns: 0,
            opponent_sliding_attack_map: 0,
            opponent_knight_attacks: 0,
            opponent_pawn_attack_map: 0,
        }
    }

    /// Legal moves for the side to move. With `include_quiet_moves == false`
    /// only captures and promotions are returned.
    ///
    /// `pos` is borrowed mutably for the en-passant probe only; it is
    /// unchanged when this returns.
    pub fn generate_moves(&mut self, pos: &mut Position, include_quiet_moves: bool) -> MoveList {
        self.gen_quiets = include_quiet_moves;
        self.init(pos);
        self.calculate_attack_data(pos);

        let mut moves = MoveList::new();
        self.generate_king_moves(pos, &mut moves);

        // Only king moves are legal in double check
        if self.in_double_check {
            return moves;
        }

        self.generate_sliding_moves(pos, &mut moves);
        self.generate_knight_moves(pos, &mut moves);
        self.generate_pawn_moves(pos, &mut moves);

        moves
    }

    /// Whether the side to move was in check during the last `generate_moves` call.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Squares attacked by the opponent, as of the last `generate_moves` call.
    pub fn opponent_attack_map(&self) -> u64 {
        self.opponent_attack_map
    }

    pub fn opponent_pawn_attack_map(&self) -> u64 {
        self.opponent_pawn_attack_map
    }

    fn init(&mut self, pos: &Position) {
        self.in_check = false;
        self.in_double_check = false;
        self.pins_exist_in_position = false;
        self.check_ray_bitmask = 0;
        self.pin_ray_bitmask = 0;

        self.white_to_move = pos.white_to_move();
        self.friendly_colour = pos.colour_to_move();
        self.opponent_colour = pos.opponent_colour();
        self.friendly_king_square = pos.king_square(self.friendly_colour);
    }

    // ==================== MOVE EMISSION ====================

    fn generate_king_moves(&self, pos: &Position, moves: &mut MoveList) {
        let king = self.friendly_king_square;
        let state = pos.current_game_state();
        let mut targets = KING_ATTACKS[king];

        while targets != 0 {
            let target = pop_lsb(&mut targets);
            let piece = pos.piece_at(target);

            if piece.is(self.friendly_colour) {
                continue;
            }

            let is_capture = piece.is(self.opponent_colour);
            if !is_capture && (!self.gen_quiets || self.square_is_in_check_ray(target)) {
                continue;
            }

            if self.square_is_attacked(target) {
                continue;
            }
            moves.push(Move::new(king as u8, target as u8, MoveType::Normal));

            // Castling passes through the square just stepped onto
            if self.in_check || is_capture {
                continue;
            }
            if (target == F1 || target == F8) && state.has_kingside_right(self.friendly_colour) {
                let castle_square = target + 1;
                if pos.piece_at(castle_square).is_none() && !self.square_is_attacked(castle_square) {
                    moves.push(Move::new(king as u8, castle_square as u8, MoveType::Castling));
                }
            } else if (target == D1 || target == D8) && state.has_queenside_right(self.friendly_colour) {
                let castle_square = target - 1;
                if pos.piece_at(castle_square).is_none()
                    && pos.piece_at(castle_square - 1).is_none()
                    && !self.square_is_attacked(castle_square)
                {
                    moves.push(Move::new(king as u8, castle_square as u8, MoveType::Castling));
                }
            }
        }
    }

    fn generate_sliding_moves(&self, pos: &Position, moves: &mut MoveList) {
        let us = self.friendly_colour;
        for square in pos.pieces(us, Type::Rook).iter() {
            self.generate_sliding_piece_moves(pos, square, NORTH..NORTH_WEST, moves);
        }
        for square in pos.pieces(us, Type::Bishop).iter() {
            self.generate_sliding_piece_moves(pos, square, NORTH_WEST..8, moves);
        }
        for square in pos.pieces(us, Type::Queen).iter() {
            self.generate_sliding_piece_moves(pos, square, NORTH..8, moves);
        }
    }

    fn generate_sliding_piece_moves(&self, pos: &Position, start: usize, directions: Range<usize>, moves: &mut MoveList) {
        let is_pinned = self.is_pinned(start);

        // A pinned piece can never resolve a check
        if self.in_check && is_pinned {
            return;
        }

        for dir in directions {
            let offset = DIRECTION_OFFSETS[dir];

            if is_pinned && !is_moving_along_ray(offset, self.friendly_king_square, start) {
                continue;
            }

            for n in 0..NUM_SQUARES_TO_EDGE[start][dir] as i32 {
                let target = (start as i32 + offset * (n + 1)) as usize;
                let piece = pos.piece_at(target);

                if piece.is(self.friendly_colour) {
                    break;
                }
                let is_capture = !piece.is_none();

                let prevents_check = self.square_is_in_check_ray(target);
                if (prevents_check || !self.in_check) && (self.gen_quiets || is_capture) {
                    moves.push(Move::new(start as u8, target as u8, MoveType::Normal));
                }

                // Past a blocker, or past the one square that blocks the check, nothing more is legal
                if is_capture || prevents_check {
                    break;
                }
            }
        }
    }

    fn generate_knight_moves(&self, pos: &Position, moves: &mut MoveList) {
        for start in pos.pieces(self.friendly_colour, Type::Knight).iter() {
            // A pinned knight can never stay on its pin ray
            if self.is_pinned(start) {
                continue;
            }

            let mut targets = KNIGHT_ATTACKS[start];
            while targets != 0 {
                let target = pop_lsb(&mut targets);
                let piece = pos.piece_at(target);
                let is_capture = piece.is(self.opponent_colour);

                if !(self.gen_quiets || is_capture) {
                    continue;
                }
                if piece.is(self.friendly_colour) || (self.in_check && !self.square_is_in_check_ray(target)) {
                    continue;
                }
                moves.push(Move::new(start as u8, target as u8, MoveType::Normal));
            }
        }
    }

    fn generate_pawn_moves(&self, pos: &mut Position, moves: &mut MoveList) {
        let us = self.friendly_colour;
        let friendly_index = us.index();
        let pawn_offset: i32 = if self.white_to_move { 8 } else { -8 };
        let start_rank = if self.white_to_move { 1 } else { 6 };
        let final_rank_before_promotion = if self.white_to_move { 6 } else { 1 };

        let en_passant_square = pos
            .current_game_state()
            .en_passant_file()
            .map(|file| square_index(file, if self.white_to_move { 5 } else { 2 }));

        // Indexed loop: the en-passant probe needs `pos` mutably
        for i in 0..pos.pieces(us, Type::Pawn).len() {
            let start = pos.pieces(us, Type::Pawn).get(i);
            let rank = rank_index(start);
            let one_step_from_promotion = rank == final_rank_before_promotion;
            let is_pinned = self.is_pinned(start);

            // Pushes. A push onto the last rank is a promotion and counts as non-quiet.
            if self.gen_quiets || one_step_from_promotion {
                let one_forward = (start as i32 + pawn_offset) as usize;

                let free_to_push = pos.piece_at(one_forward).is_none()
                    && (!is_pinned || is_moving_along_ray(pawn_offset, start, self.friendly_king_square));

                if free_to_push {
                    if !self.in_check || self.square_is_in_check_ray(one_forward) {
                        if one_step_from_promotion {
                            self.make_promotion_moves(start, one_forward, moves);
                        } else {
                            moves.push(Move::new(start as u8, one_forward as u8, MoveType::Normal));
                        }
                    }

                    if self.gen_quiets && rank == start_rank {
                        let two_forward = (one_forward as i32 + pawn_offset) as usize;
                        if pos.piece_at(two_forward).is_none()
                            && (!self.in_check || self.square_is_in_check_ray(two_forward))
                        {
                            moves.push(Move::new(start as u8, two_forward as u8, MoveType::PawnTwoForward));
                        }
                    }
                }
            }

            // Captures
            for dir in PAWN_ATTACK_DIRECTIONS[friendly_index] {
                if NUM_SQUARES_TO_EDGE[start][dir] == 0 {
                    continue;
                }

                let capture_offset = DIRECTION_OFFSETS[dir];
                let target = (start as i32 + capture_offset) as usize;

                if is_pinned && !is_moving_along_ray(capture_offset, self.friendly_king_square, start) {
                    continue;
                }

                if pos.piece_at(target).is(self.opponent_colour) {
                    if self.in_check && !self.square_is_in_check_ray(target) {
                        continue;
                    }
                    if one_step_from_promotion {
                        self.make_promotion_moves(start, target, moves);
                    } else {
                        moves.push(Move::new(start as u8, target as u8, MoveType::Normal));
                    }
                }

                if Some(target) == en_passant_square {
                    let captured_square = (target as i32 - pawn_offset) as usize;
                    if !self.in_check_after_en_passant(pos, start, target, captured_square) {
                        moves.push(Move::new(start as u8, target as u8, MoveType::EnPassant));
                    }
                }
            }
        }
    }

    fn make_promotion_moves(&self, from: usize, to: usize, moves: &mut MoveList) {
        let (from, to) = (from as u8, to as u8);
        moves.push(Move::new(from, to, MoveType::PromotionQueen));
        match self.promotions_to_generate {
            PromotionMode::All => {
                moves.push(Move::new(from, to, MoveType::PromotionKnight));
                moves.push(Move::new(from, to, MoveType::PromotionRook));
                moves.push(Move::new(from, to, MoveType::PromotionBishop));
            }
            PromotionMode::QueenAndKnight => {
                moves.push(Move::new(from, to, MoveType::PromotionKnight));
            }
            PromotionMode::QueenOnly => {}
        }
    }

    // ==================== ATTACK DATA ====================

    #[inline(always)]
    fn is_pinned(&self, square: usize) -> bool {
        self.pins_exist_in_position && contains_square(self.pin_ray_bitmask, square)
    }

    #[inline(always)]
    fn square_is_in_check_ray(&self, square: usize) -> bool {
        self.in_check && contains_square(self.check_ray_bitmask, square)
    }

    #[inline(always)]
    fn square_is_attacked(&self, square: usize) -> bool {
        contains_square(self.opponent_attack_map, square)
    }

    fn gen_sliding_attack_map(&mut self, pos: &Position) {
        self.opponent_sliding_attack_map = 0;
        let them = self.opponent_colour;

        for square in pos.pieces(them, Type::Rook).iter() {
            self.update_sliding_attack_piece(pos, square, NORTH..NORTH_WEST);
        }
        for square in pos.pieces(them, Type::Queen).iter() {
            self.update_sliding_attack_piece(pos, square, NORTH..8);
        }
        for square in pos.pieces(them, Type::Bishop).iter() {
            self.update_sliding_attack_piece(pos, square, NORTH_WEST..8);
        }
    }

    /// Rays continue through the friendly king so it cannot step back along a checking line.
    fn update_sliding_attack_piece(&mut self, pos: &Position, start: usize, directions: Range<usize>) {
        for dir in directions {
            let offset = DIRECTION_OFFSETS[dir];
            for n in 0..NUM_SQUARES_TO_EDGE[start][dir] as i32 {
                let target = (start as i32 + offset * (n + 1)) as usize;
                self.opponent_sliding_attack_map |= 1u64 << target;
                if target != self.friendly_king_square && !pos.piece_at(target).is_none() {
                    break;
                }
            }
        }
    }

    fn calculate_attack_data(&mut self, pos: &Position) {
        self.gen_sliding_attack_map(pos);

        let them = self.opponent_colour;
        let king = self.friendly_king_square;

        // Only scan ray types the opponent can actually attack along
        let mut directions = NORTH..8;
        if pos.pieces(them, Type::Queen).is_empty() {
            let start = if pos.pieces(them, Type::Rook).is_empty() { NORTH_WEST } else { NORTH };
            let end = if pos.pieces(them, Type::Bishop).is_empty() { NORTH_WEST } else { 8 };
            directions = start..end;
        }

        for dir in directions {
            let is_diagonal = dir >= NORTH_WEST;
            let offset = DIRECTION_OFFSETS[dir];
            let mut is_friendly_piece_along_ray = false;
            let mut ray_mask = 0u64;

            for n in 0..NUM_SQUARES_TO_EDGE[king][dir] as i32 {
                let square = (king as i32 + offset * (n + 1)) as usize;
                ray_mask |= 1u64 << square;
                let piece = pos.piece_at(square);

                if piece.is_none() {
                    continue;
                }

                if piece.is(self.friendly_colour) {
                    // A second friendly piece on the ray rules out a pin
                    if is_friendly_piece_along_ray {
                        break;
                    }
                    is_friendly_piece_along_ray = true;
                    continue;
                }

                let attacks_along_ray = if is_diagonal {
                    piece.piece_type.is_bishop_or_queen()
                } else {
                    piece.piece_type.is_rook_or_queen()
                };

                if attacks_along_ray {
                    if is_friendly_piece_along_ray {
                        self.pins_exist_in_position = true;
                        self.pin_ray_bitmask |= ray_mask;
                    } else {
                        self.check_ray_bitmask |= ray_mask;
                        self.in_double_check = self.in_check;
                        self.in_check = true;
                    }
                }

                // Any enemy piece ends the ray
                break;
            }

            if self.in_double_check {
                break;
            }
        }

        // Knight attacks
        self.opponent_knight_attacks = 0;
        let mut is_knight_check = false;
        for square in pos.pieces(them, Type::Knight).iter() {
            let attacks = KNIGHT_ATTACKS[square];
            self.opponent_knight_attacks |= attacks;

            if !is_knight_check && contains_square(attacks, king) {
                is_knight_check = true;
                self.in_double_check = self.in_check;
                self.in_check = true;
                self.check_ray_bitmask |= 1u64 << square;
            }
        }

        // Pawn attacks
        self.opponent_pawn_attack_map = 0;
        let mut is_pawn_check = false;
        for square in pos.pieces(them, Type::Pawn).iter() {
            let attacks = PAWN_ATTACKS[them.index()][square];
            self.opponent_pawn_attack_map |= attacks;

            if !is_pawn_check && contains_square(attacks, king) {
                is_pawn_check = true;
                self.in_double_check = self.in_check;
                self.in_check = true;
                self.check_ray_bitmask |= 1u64 << square;
            }
        }

        let enemy_king = pos.king_square(them);
        self.opponent_attack_map_no_pawns =
            self.opponent_sliding_attack_map | self.opponent_knight_attacks | KING_ATTACKS[enemy_king];
        self.opponent_attack_map = self.opponent_attack_map_no_pawns | self.opponent_pawn_attack_map;
    }

    // ==================== EN PASSANT PROBE ====================

    /// Speculatively play the en-passant capture on the mailbox, test the
    /// king, and put the three squares back as they were.
    fn in_check_after_en_passant(&self, pos: &mut Position, start: usize, target: usize, captured_square: usize) -> bool {
        let friendly_pawn = Piece::new(self.friendly_colour, Type::Pawn);
        let saved = {
            let squares = pos.squares_mut();
            let saved = (squares[start], squares[target], squares[captured_square]);
            squares[target] = friendly_pawn;
            squares[start] = Piece::NONE;
            squares[captured_square] = Piece::NONE;
            saved
        };

        let in_check = self.king_attacked_after_en_passant(pos);

        let squares = pos.squares_mut();
        (squares[start], squares[target], squares[captured_square]) = saved;

        in_check
    }

    /// King safety on the probed mailbox. Knight checks cannot be resolved by
    /// en passant and pawn/slider attacks are re-scanned because the capture
    /// changes which lines are open.
    fn king_attacked_after_en_passant(&self, pos: &Position) -> bool {
        let king = self.friendly_king_square;

        if contains_square(self.opponent_knight_attacks, king) {
            return true;
        }

        for dir in 0..8 {
            let is_diagonal = dir >= NORTH_WEST;
            let offset = DIRECTION_OFFSETS[dir];
            for n in 0..NUM_SQUARES_TO_EDGE[king][dir] as i32 {
                let square = (king as i32 + offset * (n + 1)) as usize;
                let piece = pos.piece_at(square);
                if piece.is_none() {
                    continue;
                }
                if piece.is(self.opponent_colour) {
                    let attacks = if is_diagonal {
                        piece.piece_type.is_bishop_or_queen()
                    } else {
                        piece.piece_type.is_rook_or_queen()
                    };
                    if attacks {
                        return true;
                    }
                }
                break;
            }
        }

        // Enemy pawns are read from the mailbox since the captured one is gone
        let enemy_pawn = Piece::new(self.opponent_colour, Type::Pawn);
        for dir in PAWN_ATTACK_DIRECTIONS[self.friendly_colour.index()] {
            if NUM_SQUARES_TO_EDGE[king][dir] > 0 {
                let square = (king as i32 + DIRECTION_OFFSETS[dir]) as usize;
                if pos.piece_at(square) == enemy_pawn {
                    return true;
                }
            }
        }

        false
    }
}

/// True when stepping by `ray_dir` keeps a piece on the line through `start` and `target`.
#[inline]
fn is_moving_along_ray(ray_dir: i32, start: usize, target: usize) -> bool {
    let move_dir = DIRECTION_BETWEEN[start][target] as i32;
    ray_dir == move_dir || -ray_dir == move_dir
}
