#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    #[default]
    None,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    /// Pawn..King in declaration order, used to index per-type tables.
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Zero-based index for Pawn..King. Must not be called on `Type::None`.
    #[inline(always)]
    pub fn index(self) -> usize {
        debug_assert!(self != Type::None, "Type::None has no table index");
        self as usize - 1
    }

    #[inline]
    pub fn is_sliding(self) -> bool {
        matches!(self, Type::Bishop | Type::Rook | Type::Queen)
    }

    #[inline]
    pub fn is_rook_or_queen(self) -> bool {
        matches!(self, Type::Rook | Type::Queen)
    }

    #[inline]
    pub fn is_bishop_or_queen(self) -> bool {
        matches!(self, Type::Bishop | Type::Queen)
    }

    /// Lowercase FEN letter, `None` for an empty square.
    pub fn to_char(self) -> Option<char> {
        match self {
            Type::Pawn => Some('p'),
            Type::Knight => Some('n'),
            Type::Bishop => Some('b'),
            Type::Rook => Some('r'),
            Type::Queen => Some('q'),
            Type::King => Some('k'),
            Type::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// White = 0, Black = 1.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::NONE
    }
}

impl Piece {
    /// The empty square. Always compare against this value, never build
    /// another `Type::None` piece with a different colour.
    pub const NONE: Piece = Piece {
        color: Color::White,
        piece_type: Type::None,
    };

    #[inline(always)]
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True for a real piece of the given colour.
    #[inline(always)]
    pub fn is(&self, color: Color) -> bool {
        self.piece_type != Type::None && self.color == color
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    /// FEN letter, uppercase for white. `None` for the empty square.
    pub fn to_char(&self) -> Option<char> {
        let c = self.piece_type.to_char()?;
        Some(match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        })
    }
}
