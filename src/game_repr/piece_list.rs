/// Squares occupied by one piece type of one colour.
///
/// Order is arbitrary. Removal swaps the last entry into the hole, so add,
/// remove and move are all O(1). `map` points from a square back into
/// `occupied` and is only meaningful for squares currently in the list.
#[derive(Clone, Debug)]
pub struct PieceList {
    occupied: [u8; Self::CAPACITY],
    map: [u8; 64],
    count: usize,
}

impl Default for PieceList {
    fn default() -> Self {
        Self {
            occupied: [0; Self::CAPACITY],
            map: [0; 64],
            count: 0,
        }
    }
}

impl PieceList {
    /// Nine queens, or ten minor pieces/rooks after promotions, still fit.
    pub const CAPACITY: usize = 16;

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> usize {
        self.occupied[index] as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupied[..self.count].iter().map(|&sq| sq as usize)
    }

    pub fn contains(&self, square: usize) -> bool {
        self.iter().any(|sq| sq == square)
    }

    pub fn add(&mut self, square: usize) {
        debug_assert!(self.count < Self::CAPACITY, "piece list overflow");
        self.occupied[self.count] = square as u8;
        self.map[square] = self.count as u8;
        self.count += 1;
    }

    pub fn remove(&mut self, square: usize) {
        debug_assert!(self.count > 0, "removing from an empty piece list");
        let index = self.map[square] as usize;
        let last = self.occupied[self.count - 1];
        self.occupied[index] = last;
        self.map[last as usize] = index as u8;
        self.count -= 1;
    }

    pub fn move_piece(&mut self, from: usize, to: usize) {
        let index = self.map[from] as usize;
        self.occupied[index] = to as u8;
        self.map[to] = index as u8;
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }
}

/// Set equality: two lists holding the same squares compare equal regardless of order.
impl PartialEq for PieceList {
    fn eq(&self, other: &Self) -> bool {
        let mut a: Vec<usize> = self.iter().collect();
        let mut b: Vec<usize> = other.iter().collect();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl Eq for PieceList {}
