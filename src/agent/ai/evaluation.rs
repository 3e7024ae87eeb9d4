// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use crate::game_repr::bitboards::{CENTRE_MANHATTAN_DISTANCE, ORTHOGONAL_DISTANCE};
use crate::game_repr::{Color, Position, Type};

use super::piece_square_tables::{self as pst, KING_MIDDLEGAME_TABLE};

// Material values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 320;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Non-pawn material at which a side stops counting as "in the endgame"
const ENDGAME_MATERIAL_START: f32 = (ROOK_VALUE * 2 + BISHOP_VALUE + KNIGHT_VALUE) as f32;

/// Material value of a piece type (kings and empty squares are worth 0)
#[inline]
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King | Type::None => 0,
    }
}

/// Static evaluation from the point of view of the side to move.
///
/// The position is assumed to be quiet; tactics are left to quiescence.
pub fn evaluate(pos: &Position) -> i32 {
    let white_material = count_material(pos, Color::White);
    let black_material = count_material(pos, Color::Black);

    let white_without_pawns = white_material - pawn_material(pos, Color::White);
    let black_without_pawns = black_material - pawn_material(pos, Color::Black);
    let white_endgame_weight = endgame_phase_weight(white_without_pawns);
    let black_endgame_weight = endgame_phase_weight(black_without_pawns);

    let mut white_eval = white_material;
    let mut black_eval = black_material;

    white_eval += mop_up_eval(pos, Color::White, white_material, black_material, black_endgame_weight);
    black_eval += mop_up_eval(pos, Color::Black, black_material, white_material, white_endgame_weight);

    white_eval += evaluate_piece_square_tables(pos, Color::White, black_endgame_weight);
    black_eval += evaluate_piece_square_tables(pos, Color::Black, white_endgame_weight);

    let eval = white_eval - black_eval;
    if pos.white_to_move() {
        eval
    } else {
        -eval
    }
}

/// 0 while plenty of pieces remain, rising linearly to 1 once none are left.
pub fn endgame_phase_weight(material_without_pawns: i32) -> f32 {
    1.0 - (material_without_pawns as f32 / ENDGAME_MATERIAL_START).min(1.0)
}

fn count_material(pos: &Position, color: Color) -> i32 {
    [Type::Pawn, Type::Knight, Type::Bishop, Type::Rook, Type::Queen]
        .into_iter()
        .map(|piece_type| pos.pieces(color, piece_type).len() as i32 * piece_value(piece_type))
        .sum()
}

#[inline]
fn pawn_material(pos: &Position, color: Color) -> i32 {
    pos.pieces(color, Type::Pawn).len() as i32 * PAWN_VALUE
}

/// Drive the losing king to the edge and bring our own king closer,
/// once we are at least two pawns up and the opponent is short of pieces.
fn mop_up_eval(pos: &Position, us: Color, my_material: i32, opponent_material: i32, endgame_weight: f32) -> i32 {
    if my_material <= opponent_material + PAWN_VALUE * 2 || endgame_weight <= 0.0 {
        return 0;
    }

    let friendly_king = pos.king_square(us);
    let opponent_king = pos.king_square(us.opposite());

    let mut score = CENTRE_MANHATTAN_DISTANCE[opponent_king] as i32 * 10;
    // Orthogonal distance rewards taking the opposition
    score += (14 - ORTHOGONAL_DISTANCE[friendly_king][opponent_king] as i32) * 4;

    (score as f32 * endgame_weight) as i32
}

fn evaluate_piece_square_tables(pos: &Position, color: Color, opponent_endgame_weight: f32) -> i32 {
    let is_white = color == Color::White;
    let mut value = 0;

    for piece_type in [Type::Pawn, Type::Rook, Type::Knight, Type::Bishop, Type::Queen] {
        if let Some(table) = pst::table_for(piece_type) {
            value += pos
                .pieces(color, piece_type)
                .iter()
                .map(|square| pst::read(table, square, is_white))
                .sum::<i32>();
        }
    }

    // The king only cares about shelter while the opponent still has pieces
    let king_early_phase = pst::read(&KING_MIDDLEGAME_TABLE, pos.king_square(color), is_white);
    value += (king_early_phase as f32 * (1.0 - opponent_endgame_weight)) as i32;

    value
}
