//! Winning patterns over the 24-cell board.
//!
//! Cells are numbered row-major on a 5x5 card whose centre square is free:
//!
//! ```text
//!  0  1  2  3  4
//!  5  6  7  8  9
//! 10 11  .  12 13
//! 14 15 16 17 18
//! 19 20 21 22 23
//! ```
//!
//! Lines crossing the free centre have four cells. Their raw entries carry a
//! trailing `0` that is padding only; `REQUIRED_CELLS` is what gets checked.

use crate::board::PackedBoard;
use crate::constants::{PATTERN_COUNT, PATTERN_LEN};
use crate::state::DrawnNumbers;

pub static PATTERNS: [[u8; PATTERN_LEN]; PATTERN_COUNT] = [
    // rows
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 0],
    [14, 15, 16, 17, 18],
    [19, 20, 21, 22, 23],
    // columns
    [0, 5, 10, 14, 19],
    [1, 6, 11, 15, 20],
    [2, 7, 16, 21, 0],
    [3, 8, 12, 17, 22],
    [4, 9, 13, 18, 23],
    // diagonals
    [0, 6, 17, 23, 0],
    [4, 8, 15, 19, 0],
];

/// Number of leading entries of each pattern that must be covered.
pub const REQUIRED_CELLS: [usize; PATTERN_COUNT] = [5, 5, 4, 5, 5, 5, 5, 4, 5, 5, 4, 4];

/// Required cells of pattern `index`.
pub fn required_cells(index: usize) -> &'static [u8] {
    &PATTERNS[index][..REQUIRED_CELLS[index]]
}

pub fn is_covered(index: usize, board: &PackedBoard, drawn: &DrawnNumbers) -> bool {
    required_cells(index)
        .iter()
        .all(|&cell| drawn.contains(board.cell(cell as usize)))
}

/// Index of the first pattern, in table order, fully covered by `drawn`.
pub fn first_winning_pattern(board: &PackedBoard, drawn: &DrawnNumbers) -> Option<usize> {
    (0..PATTERN_COUNT).find(|&index| is_covered(index, board, drawn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_CELLS;

    fn distinct_board() -> PackedBoard {
        let mut cells = [0u8; BOARD_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = 100 + i as u8;
        }
        PackedBoard::from_cells(cells)
    }

    fn drawn_for(board: &PackedBoard, cells: &[u8]) -> DrawnNumbers {
        let mut drawn = DrawnNumbers::default();
        for &cell in cells {
            drawn.insert(board.cell(cell as usize));
        }
        drawn
    }

    #[test]
    fn required_lengths_match_free_centre_lines() {
        for (index, &required) in REQUIRED_CELLS.iter().enumerate() {
            let expected = if matches!(index, 2 | 7 | 10 | 11) { 4 } else { 5 };
            assert_eq!(required, expected, "pattern {index}");
        }
    }

    #[test]
    fn required_cells_are_distinct_and_on_board() {
        for index in 0..PATTERN_COUNT {
            let cells = required_cells(index);
            for (i, a) in cells.iter().enumerate() {
                assert!((*a as usize) < BOARD_CELLS);
                assert!(!cells[i + 1..].contains(a), "pattern {index} repeats {a}");
            }
        }
    }

    #[test]
    fn each_pattern_wins_on_exactly_its_cells() {
        let board = distinct_board();
        for index in 0..PATTERN_COUNT {
            let drawn = drawn_for(&board, required_cells(index));
            assert_eq!(first_winning_pattern(&board, &drawn), Some(index));
        }
    }

    #[test]
    fn padding_entry_is_not_checked() {
        let board = distinct_board();
        for index in [2, 7, 10, 11] {
            let drawn = drawn_for(&board, required_cells(index));
            if !required_cells(index).contains(&0) {
                assert!(!drawn.contains(board.cell(0)));
            }
            assert!(is_covered(index, &board, &drawn));
        }
    }

    #[test]
    fn one_missing_cell_fails() {
        let board = distinct_board();
        for index in 0..PATTERN_COUNT {
            let cells = required_cells(index);
            let drawn = drawn_for(&board, &cells[1..]);
            assert!(!is_covered(index, &board, &drawn), "pattern {index}");
        }
    }

    #[test]
    fn empty_drawn_set_never_wins() {
        assert_eq!(
            first_winning_pattern(&distinct_board(), &DrawnNumbers::default()),
            None
        );
    }

    #[test]
    fn first_match_wins() {
        let board = distinct_board();
        let mut cells = required_cells(9).to_vec();
        cells.extend_from_slice(required_cells(0));
        let drawn = drawn_for(&board, &cells);
        assert_eq!(first_winning_pattern(&board, &drawn), Some(0));
    }

    #[test]
    fn repeated_values_cover_every_cell_holding_them() {
        let board = PackedBoard::from_cells([5u8; BOARD_CELLS]);
        let mut drawn = DrawnNumbers::default();
        drawn.insert(5);
        assert_eq!(first_winning_pattern(&board, &drawn), Some(0));
    }
}
