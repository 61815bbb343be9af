pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn for_side(side: Side) -> Cell {
        match side {
            Side::Player => Cell::Player,
            Side::Ai => Cell::Ai,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    AiWin,
    Tie,
    Undecided,
}

impl Outcome {
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::Player => Outcome::PlayerWin,
            Side::Ai => Outcome::AiWin,
        }
    }
}

// 3 rows, 3 columns, 2 diagonals. Each triple is (x, y).
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// 3x3 grid indexed `cells[x][y]`. `empty_count` is maintained on every
/// mutation so tie detection stays O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    empty_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            empty_count: BOARD_SIZE * BOARD_SIZE,
        }
    }

    pub fn claim(&mut self, side: Side, pos: Position) -> Result<(), String> {
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE {
            return Err(format!("Position ({}, {}) is out of bounds", pos.x, pos.y));
        }
        if self.cells[pos.x][pos.y] != Cell::Empty {
            return Err(format!("Cell ({}, {}) is already claimed", pos.x, pos.y));
        }
        self.cells[pos.x][pos.y] = Cell::for_side(side);
        self.empty_count -= 1;
        Ok(())
    }

    // Non-validating write for selector probes; callers guarantee the
    // cell is empty and in range.
    pub(crate) fn place(&mut self, side: Side, pos: Position) {
        self.cells[pos.x][pos.y] = Cell::for_side(side);
        self.empty_count -= 1;
    }

    // Probe unwinding for the move selector. Restores empty_count.
    pub(crate) fn release(&mut self, pos: Position) {
        if self.cells[pos.x][pos.y] != Cell::Empty {
            self.cells[pos.x][pos.y] = Cell::Empty;
            self.empty_count += 1;
        }
    }

    fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE {
            return None;
        }
        Some(self.cells[pos.x][pos.y])
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(cell) if cell != Cell::Empty)
    }

    pub fn is_owned_by(&self, side: Side, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::for_side(side))
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// All empty cells in row-major scan order: x outer, y inner, ascending.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                if self.cells[x][y] == Cell::Empty {
                    positions.push(Position::new(x, y));
                }
            }
        }
        positions
    }

    /// One-sided evaluation: only the queried side's lines are checked.
    /// The caller evaluates each side after its own move.
    pub fn evaluate(&self, side: Side) -> Outcome {
        let mark = Cell::for_side(side);
        for line in &WIN_LINES {
            if line.iter().all(|&(x, y)| self.cells[x][y] == mark) {
                return Outcome::win_for(side);
            }
        }
        if self.empty_count == 0 {
            Outcome::Tie
        } else {
            Outcome::Undecided
        }
    }

    pub fn reset(&mut self) {
        for column in self.cells.iter_mut() {
            for cell in column.iter_mut() {
                *cell = Cell::Empty;
            }
        }
        self.empty_count = BOARD_SIZE * BOARD_SIZE;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
