//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character used by [`Board::encode`] and [`Board::from_string`]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Character drawn inside a grid square by the renderer (blank when empty)
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().marker())
    }
}

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete game state on a square grid of any positive size.
///
/// Cells are stored row-major. The board is mutated only through
/// [`Board::place`]; search code explores positions by cloning, never by
/// undoing moves, so a filled cell never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    turn: Player,
    move_count: usize,
    last_move: Option<Position>,
    finished: bool,
}

impl Board {
    /// Create an empty `size`×`size` board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            turn: Player::X,
            move_count: 0,
            last_move: None,
            finished: false,
        }
    }

    /// Create a board from a compact string such as `"XO./.X./..O"`.
    ///
    /// Whitespace and `/` separators are ignored. The remaining characters
    /// must form a square grid. The side to move is inferred from the piece
    /// counts (X opens), and no last move is recorded.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The number of cells is zero or not a perfect square
    /// - Any character is not a valid cell representation
    /// - X and O counts are not equal or X ahead by exactly one
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let size = chars.len().isqrt();
        if size == 0 || size * size != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            cells.push(
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?,
            );
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let turn = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        let mut board = Board {
            size,
            cells,
            turn,
            move_count: x_count + o_count,
            last_move: None,
            finished: false,
        };
        board.finished = board.detect_finished();
        Ok(board)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// The player whose marker the next successful [`place`](Self::place) writes
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// Number of filled cells
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Whether a win or a full-board draw has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Get the cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check that `(row, col)` is on the board and empty
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Place the current player's marker at `(row, col)`.
    ///
    /// Returns `false` and leaves the board untouched when the coordinate is
    /// out of bounds or already occupied. On success the turn passes to the
    /// opponent, the move is recorded and the finished flag is refreshed.
    ///
    /// Placing on a finished board is not rejected here; drivers must check
    /// [`is_finished`](Self::is_finished) first.
    #[must_use = "place reports whether the move was applied"]
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        if self.cells[idx] != Cell::Empty {
            return false;
        }

        self.cells[idx] = self.turn.to_cell();
        self.turn = self.turn.opponent();
        self.move_count += 1;
        self.last_move = Some(Position::new(row, col));
        self.finished = self.detect_finished();
        true
    }

    fn detect_finished(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.is_full()
    }

    fn is_full(&self) -> bool {
        self.move_count == self.size * self.size
    }

    /// Check if a player owns a full row, column or diagonal
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, self.size, player)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_won(Player::X) && !self.has_won(Player::O)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Every empty cell in row-major order.
    ///
    /// Unlike a terminal-aware move generator this does not stop at a win;
    /// callers that care check [`is_finished`](Self::is_finished).
    pub fn legal_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    /// Compact row-major encoding, one character per cell
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Human-readable grid with row and column labels
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(3)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "--- ".repeat(self.size);

        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {col}  ")?;
        }
        writeln!(f)?;
        writeln!(f, "   {separator}")?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                write!(f, "| {} ", cell.marker())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "   {separator}")?;
        }
        Ok(())
    }
}
