use smallvec::SmallVec;

use super::bitboards::square_name;
use super::piece::Type;

/*-------ARCHITECTURE--------*/

// | 4 bits | 6 bits | 6 bits |
// |  Flag  |   To   |  From  |
// |        16 bits           |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveType {
    Normal = 0,
    EnPassant = 1,
    Castling = 2,
    PromotionQueen = 3,
    PromotionKnight = 4,
    PromotionRook = 5,
    PromotionBishop = 6,
    PawnTwoForward = 7,
}

impl MoveType {
    fn from_bits(value: u16) -> Self {
        match value {
            1 => MoveType::EnPassant,
            2 => MoveType::Castling,
            3 => MoveType::PromotionQueen,
            4 => MoveType::PromotionKnight,
            5 => MoveType::PromotionRook,
            6 => MoveType::PromotionBishop,
            7 => MoveType::PawnTwoForward,
            _ => MoveType::Normal,
        }
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        matches!(
            self,
            MoveType::PromotionQueen
                | MoveType::PromotionKnight
                | MoveType::PromotionRook
                | MoveType::PromotionBishop
        )
    }

    /// Piece a pawn turns into, `Type::None` for non-promotions.
    pub fn promotion_type(self) -> Type {
        match self {
            MoveType::PromotionQueen => Type::Queen,
            MoveType::PromotionKnight => Type::Knight,
            MoveType::PromotionRook => Type::Rook,
            MoveType::PromotionBishop => Type::Bishop,
            _ => Type::None,
        }
    }
}

/// Packed move. Equality is exact value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    buf: u16,
}

/// Legal move list produced by the move generator.
pub type MoveList = SmallVec<[Move; 64]>;

impl Move {
    /// Never produced by the move generator (a1 to a1).
    pub const INVALID: Move = Move { buf: 0 };

    const FROM_MASK: u16 = 0b0000_0000_0011_1111;
    const TO_MASK: u16 = 0b0000_1111_1100_0000;

    #[inline(always)]
    pub fn new(from: u8, to: u8, move_type: MoveType) -> Move {
        let buf = (from as u16 & 0x3F) | ((to as u16 & 0x3F) << 6) | ((move_type as u16) << 12);
        Self { buf }
    }

    #[inline(always)]
    pub fn from_raw(buf: u16) -> Move {
        Self { buf }
    }

    #[inline(always)]
    pub fn raw(&self) -> u16 {
        self.buf
    }

    #[inline(always)]
    pub fn from(&self) -> usize {
        (self.buf & Self::FROM_MASK) as usize
    }

    #[inline(always)]
    pub fn to(&self) -> usize {
        ((self.buf & Self::TO_MASK) >> 6) as usize
    }

    #[inline(always)]
    pub fn move_type(&self) -> MoveType {
        MoveType::from_bits(self.buf >> 12)
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.move_type().is_promotion()
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.buf == 0
    }

    /// Coordinate notation: `e2e4`, `e7e8q`.
    pub fn name(&self) -> String {
        let mut name = format!("{}{}", square_name(self.from()), square_name(self.to()));
        if let Some(c) = self.move_type().promotion_type().to_char() {
            name.push(c);
        }
        name
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_invalid() {
            return f.write_str("0000");
        }
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_packed_as_documented() {
        let mv = Move::new(12, 28, MoveType::PawnTwoForward);
        assert_eq!(mv.raw(), 12 | (28 << 6) | (7 << 12));
        assert_eq!(mv.from(), 12);
        assert_eq!(mv.to(), 28);
        assert_eq!(mv.move_type(), MoveType::PawnTwoForward);
    }

    #[test]
    fn test_invalid_move_is_zero() {
        assert!(Move::INVALID.is_invalid());
        assert_eq!(Move::default(), Move::INVALID);
        assert!(!Move::new(0, 8, MoveType::Normal).is_invalid());
    }

    #[test]
    fn test_names() {
        assert_eq!(Move::new(12, 28, MoveType::PawnTwoForward).name(), "e2e4");
        assert_eq!(Move::new(52, 60, MoveType::PromotionQueen).name(), "e7e8q");
        assert_eq!(Move::new(49, 56, MoveType::PromotionKnight).to_string(), "b7a8n");
        assert_eq!(Move::INVALID.to_string(), "0000");
    }

    #[test]
    fn test_equality_includes_flag() {
        let a = Move::new(52, 60, MoveType::PromotionQueen);
        let b = Move::new(52, 60, MoveType::PromotionRook);
        assert_ne!(a, b);
        assert!(a.is_promotion() && b.is_promotion());
        assert_eq!(b.move_type().promotion_type(), Type::Rook);
    }
}
