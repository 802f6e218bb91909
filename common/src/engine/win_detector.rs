use super::board::{Board, Mark, LINES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
    Ongoing,
}

/// Checks all 8 lines; a line is won iff its three cells hold the same
/// non-empty mark. A reachable board has at most one completed line
/// pattern, so returning the first match is sound.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        if let Some(mark) = board.cell(a)
            && board.cell(b) == Some(mark)
            && board.cell(c) == Some(mark)
        {
            return Outcome::Winner(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::Cell;

    fn board_from(marks: [Cell; 9]) -> Board {
        Board::from(marks)
    }

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::empty();
                for index in line {
                    board = board.with_mark(index, mark);
                }
                assert_eq!(
                    evaluate_outcome(&board),
                    Outcome::Winner(mark),
                    "line {:?} not detected for {:?}",
                    line,
                    mark
                );
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let board = board_from([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate_outcome(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // Board is full, but X completed the bottom row with the final move.
        let board = board_from([O, X, O, O, X, X, X, X, O]);
        assert_eq!(evaluate_outcome(&board), Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let board = board_from([X, X, X, O, O, E, E, E, E]);
        let first = evaluate_outcome(&board);
        let second = evaluate_outcome(&board);
        assert_eq!(first, second);
        assert_eq!(first, Outcome::Winner(Mark::X));
    }
}
