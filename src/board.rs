use crate::types::{BOARD_SIZE, Cell, Move, NUM_SQUARES, Side};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const CORNERS: [usize; 4] = [0, BOARD_SIZE - 1, NUM_SQUARES - BOARD_SIZE, NUM_SQUARES - 1];

/// Reversi board state represented by two bitboards.
///
/// The board is `Copy`: every search branch works on its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    light: u64,
    dark: u64,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=light, (3,4)=dark, (4,3)=dark, (4,4)=light.
    pub fn new() -> Self {
        Self {
            light: bit(27) | bit(36),
            dark: bit(28) | bit(35),
        }
    }

    /// Builds a board from 64 cells in row-major order.
    pub fn from_cells(cells: &[Cell; NUM_SQUARES]) -> Self {
        let mut board = Self { light: 0, dark: 0 };
        for (pos, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Light => board.light |= bit(pos),
                Cell::Dark => board.dark |= bit(pos),
                Cell::Empty => {}
            }
        }
        board
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Cell::Empty;
        }
        self.cell_at(row * BOARD_SIZE + col)
    }

    /// Returns `true` when `side` may play the 1-based `index`.
    /// Indices outside `1..=64` are never legal.
    pub fn is_legal(&self, side: Side, index: i32) -> bool {
        match Move::new(index) {
            Some(mv) => self.flips_for(side, mv) != 0,
            None => false,
        }
    }

    /// All legal moves for `side` in row-major scan order.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let (me, opp) = self.split(side);
        (0..NUM_SQUARES)
            .filter(|&pos| collect_flips(pos, me, opp) != 0)
            .filter_map(|pos| Move::new(pos as i32 + 1))
            .collect()
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        let (me, opp) = self.split(side);
        (0..NUM_SQUARES).any(|pos| collect_flips(pos, me, opp) != 0)
    }

    /// Places a disc for `side` and flips every captured run.
    /// Returns the mask of flipped squares.
    ///
    /// `mv` must satisfy [`Board::is_legal`]; callers own that check. An
    /// illegal move leaves the board untouched in release builds.
    pub fn apply_move(&mut self, side: Side, mv: Move) -> u64 {
        let flips = self.flips_for(side, mv);
        debug_assert!(flips != 0, "apply_move called with illegal move {mv} for {side}");
        if flips == 0 {
            return 0;
        }

        let (me, opp) = self.split(side);
        let next_me = me | bit(mv.square()) | flips;
        let next_opp = opp & !flips;

        match side {
            Side::Light => {
                self.light = next_me;
                self.dark = next_opp;
            }
            Side::Dark => {
                self.dark = next_me;
                self.light = next_opp;
            }
        }

        flips
    }

    /// `true` when neither side has a legal move.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Side::Light) && !self.has_legal_move(Side::Dark)
    }

    /// Returns `(light_count, dark_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.light.count_ones() as u8, self.dark.count_ones() as u8)
    }

    pub fn empty_count(&self) -> u8 {
        let (light, dark) = self.count();
        NUM_SQUARES as u8 - light - dark
    }

    pub fn count_of(&self, side: Side) -> u8 {
        self.split(side).0.count_ones() as u8
    }

    /// Number of the four corners occupied by `side`.
    pub fn corners_owned(&self, side: Side) -> usize {
        let (me, _) = self.split(side);
        CORNERS.iter().filter(|&&pos| me & bit(pos) != 0).count()
    }

    pub fn cells(&self) -> [Cell; NUM_SQUARES] {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (pos, cell) in cells.iter_mut().enumerate() {
            *cell = self.cell_at(pos);
        }
        cells
    }

    fn cell_at(&self, pos: usize) -> Cell {
        let square = bit(pos);
        if self.light & square != 0 {
            Cell::Light
        } else if self.dark & square != 0 {
            Cell::Dark
        } else {
            Cell::Empty
        }
    }

    fn flips_for(&self, side: Side, mv: Move) -> u64 {
        let (me, opp) = self.split(side);
        collect_flips(mv.square(), me, opp)
    }

    fn split(&self, side: Side) -> (u64, u64) {
        match side {
            Side::Light => (self.light, self.dark),
            Side::Dark => (self.dark, self.light),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Union of every capture ray from `pos`; zero when `pos` is occupied or
/// captures nothing.
fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
    if pos >= NUM_SQUARES {
        return 0;
    }

    let move_bit = bit(pos);
    if ((me | opp) & move_bit) != 0 {
        return 0;
    }

    let (row, col) = pos_to_row_col(pos);
    let mut flips = 0u64;

    for (dr, dc) in DIRECTIONS {
        let mut r = row + dr;
        let mut c = col + dc;
        let mut line = 0u64;

        while in_bounds(r, c) {
            let square = bit((r as usize) * BOARD_SIZE + c as usize);
            if (opp & square) != 0 {
                line |= square;
            } else {
                // Own disc closes the run; empty abandons it.
                if (me & square) != 0 {
                    flips |= line;
                }
                break;
            }

            r += dr;
            c += dc;
        }
    }

    flips
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
