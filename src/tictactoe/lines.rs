//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are examined
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Player holding all three cells of `line`, if any
fn line_owner(board: &Board, line: &[usize; 3]) -> Option<Player> {
    let first = board.get(line[0]);
    if first == Cell::Empty {
        return None;
    }
    if line.iter().all(|&idx| board.get(idx) == first) {
        first.to_player()
    } else {
        None
    }
}

/// Determine the winner of a board.
///
/// Every line is examined in [`WINNING_LINES`] order and the last completed
/// line decides. Boards with completed lines for both players cannot arise
/// from legal play; for those the result is whichever owner appears last.
pub fn winner_of(board: &Board) -> Option<Player> {
    WINNING_LINES
        .iter()
        .filter_map(|line| line_owner(board, line))
        .last()
}

/// Check if a player has three in a row
pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_winner_horizontal() {
        assert_eq!(winner_of(&board("XXX      ")), Some(Player::X));
        assert_eq!(winner_of(&board("   OOO   ")), Some(Player::O));
    }

    #[test]
    fn test_winner_vertical() {
        assert_eq!(winner_of(&board("O  O  O  ")), Some(Player::O));
        assert_eq!(winner_of(&board(" X  X  X ")), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner_of(&board("X   X   X")), Some(Player::X));
        assert_eq!(winner_of(&board("  O O O  ")), Some(Player::O));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(winner_of(&Board::empty()), None);
        assert_eq!(winner_of(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn test_contradictory_board_last_line_wins() {
        // Row 0 is X, row 1 is O: row 1 is examined later
        assert_eq!(winner_of(&board("XXXOOO   ")), Some(Player::O));
        assert_eq!(winner_of(&board("OOOXXX   ")), Some(Player::X));
    }

    #[test]
    fn test_has_won() {
        let b = board("XXXOO    ");
        assert!(has_won(&b, Player::X));
        assert!(!has_won(&b, Player::O));
    }
}
