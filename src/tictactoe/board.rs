//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
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
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// The nine cells of a board, indexed row-major from the top-left corner.
///
/// Boards are plain values: two boards with the same cells are the same state,
/// which is what makes them usable as Q-table keys. The text form is exactly
/// nine characters with a space for an empty cell, e.g. `"X O  X   "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create an empty board
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in increasing order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return a copy of this board with `pos` set to `cell`
    #[must_use]
    pub fn with_cell(&self, pos: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[pos] = cell;
        next
    }

    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Player whose turn it is by parity of the pieces on the board.
    ///
    /// X moves whenever both players have placed the same number of marks.
    pub fn mover_by_parity(&self) -> Player {
        let count = self.piece_count();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Positions at which `self` and `other` hold different cells
    pub fn changed_positions(&self, other: &Board) -> Vec<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Render the board as a 3x3 grid
    ///
    /// ```text
    ///  X | O |
    /// ---+---+---
    ///    | X |
    /// ---+---+---
    ///    |   | O
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| self.cells[row * 3 + col].to_char().to_string())
                .collect();
            out.push(' ');
            out.push_str(&cells.join(" | "));
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse exactly nine cell characters.
    ///
    /// Whitespace is significant since a space is an empty cell; `.` is
    /// accepted as an alternative empty marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl TryFrom<String> for Board {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
