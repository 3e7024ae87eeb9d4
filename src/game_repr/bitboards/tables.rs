use once_cell::sync::Lazy;

// Direction indices. Orthogonal first, then diagonal, so rook-like
// pieces use 0..4, bishop-like 4..8 and queens 0..8.
pub const NORTH: usize = 0;
pub const SOUTH: usize = 1;
pub const WEST: usize = 2;
pub const EAST: usize = 3;
pub const NORTH_WEST: usize = 4;
pub const SOUTH_EAST: usize = 5;
pub const NORTH_EAST: usize = 6;
pub const SOUTH_WEST: usize = 7;

/// Square index delta for one step in each direction.
pub const DIRECTION_OFFSETS: [i32; 8] = [8, -8, -1, 1, 7, -7, 9, -9];

/// Capture directions per colour: white NW/NE, black SW/SE.
pub const PAWN_ATTACK_DIRECTIONS: [[usize; 2]; 2] = [[NORTH_WEST, NORTH_EAST], [SOUTH_WEST, SOUTH_EAST]];

/// NUM_SQUARES_TO_EDGE[square][direction] is how many steps fit before leaving the board
pub static NUM_SQUARES_TO_EDGE: [[u8; 8]; 64] = generate_num_squares_to_edge();

/// Precomputed knight attack tables
/// KNIGHT_ATTACKS[square] returns a bitboard of all squares a knight can attack from that square
pub static KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

/// Precomputed king attack tables
/// KING_ATTACKS[square] returns a bitboard of all squares a king can attack from that square
pub static KING_ATTACKS: [u64; 64] = generate_king_attacks();

/// Precomputed pawn attack tables
/// PAWN_ATTACKS[color][square] returns a bitboard of squares a pawn can attack from that square
pub static PAWN_ATTACKS: [[u64; 64]; 2] = generate_pawn_attacks();

/// DIRECTION_BETWEEN[a][b] is the unit step from a towards b when both squares
/// share a rank, file or diagonal, and 0 otherwise.
pub static DIRECTION_BETWEEN: [[i8; 64]; 64] = generate_direction_between();

/// Rook distance (|dfile| + |drank|).
pub static ORTHOGONAL_DISTANCE: Lazy<[[u8; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u8; 64]; 64];
    for (a, row) in table.iter_mut().enumerate() {
        for (b, dist) in row.iter_mut().enumerate() {
            let (df, dr) = file_rank_delta(a, b);
            *dist = (df + dr) as u8;
        }
    }
    table
});

/// King distance (max(|dfile|, |drank|)).
pub static KING_DISTANCE: Lazy<[[u8; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u8; 64]; 64];
    for (a, row) in table.iter_mut().enumerate() {
        for (b, dist) in row.iter_mut().enumerate() {
            let (df, dr) = file_rank_delta(a, b);
            *dist = df.max(dr) as u8;
        }
    }
    table
});

/// Manhattan distance from the nearest of the four centre squares.
pub static CENTRE_MANHATTAN_DISTANCE: Lazy<[u8; 64]> = Lazy::new(|| {
    let mut table = [0u8; 64];
    for (sq, dist) in table.iter_mut().enumerate() {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let file_dst = (3 - file).max(file - 4);
        let rank_dst = (3 - rank).max(rank - 4);
        *dist = (file_dst + rank_dst) as u8;
    }
    table
});

fn file_rank_delta(a: usize, b: usize) -> (i32, i32) {
    let df = (a % 8) as i32 - (b % 8) as i32;
    let dr = (a / 8) as i32 - (b / 8) as i32;
    (df.abs(), dr.abs())
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

const fn generate_num_squares_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as u8;
        let file = (sq % 8) as u8;

        let north = 7 - rank;
        let south = rank;
        let west = file;
        let east = 7 - file;

        table[sq][NORTH] = north;
        table[sq][SOUTH] = south;
        table[sq][WEST] = west;
        table[sq][EAST] = east;
        table[sq][NORTH_WEST] = min(north, west);
        table[sq][SOUTH_EAST] = min(south, east);
        table[sq][NORTH_EAST] = min(north, east);
        table[sq][SOUTH_WEST] = min(south, west);

        sq += 1;
    }

    table
}

/// Builds a jump table from (rank, file) deltas, dropping jumps that leave the board.
const fn generate_jump_attacks(deltas: &[(i8, i8); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attack = 0u64;

        let mut i = 0;
        while i < 8 {
            let (dr, df) = deltas[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                attack |= 1u64 << ((new_rank * 8 + new_file) as u32);
            }

            i += 1;
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

/// Generate knight attack table at compile time
const fn generate_knight_attacks() -> [u64; 64] {
    generate_jump_attacks(&[(2, 1), (2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2), (-2, 1), (-2, -1)])
}

/// Generate king attack table at compile time
const fn generate_king_attacks() -> [u64; 64] {
    generate_jump_attacks(&[(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)])
}

/// Generate pawn attack tables at compile time
/// Index 0 = White, Index 1 = Black
const fn generate_pawn_attacks() -> [[u64; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        if rank < 7 {
            if file > 0 {
                attacks[0][sq] |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks[0][sq] |= 1u64 << (sq + 9);
            }
        }

        if rank > 0 {
            if file > 0 {
                attacks[1][sq] |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks[1][sq] |= 1u64 << (sq - 7);
            }
        }

        sq += 1;
    }

    attacks
}

const fn sign(x: i32) -> i32 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

const fn generate_direction_between() -> [[i8; 64]; 64] {
    let mut table = [[0i8; 64]; 64];
    let mut a = 0;

    while a < 64 {
        let mut b = 0;
        while b < 64 {
            let dr = (b / 8) as i32 - (a / 8) as i32;
            let df = (b % 8) as i32 - (a % 8) as i32;
            let aligned = a != b && (dr == 0 || df == 0 || dr == df || dr == -df);
            if aligned {
                table[a][b] = (sign(dr) * 8 + sign(df)) as i8;
            }
            b += 1;
        }
        a += 1;
    }

    table
}
