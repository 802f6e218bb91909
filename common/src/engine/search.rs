use super::board::{Board, Mark, LINES};
use super::win_detector::{evaluate_outcome, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthLimit {
    Limited(u32),
    Unbounded,
}

impl DepthLimit {
    fn reached(self, depth: u32) -> bool {
        match self {
            DepthLimit::Limited(max_depth) => depth >= max_depth,
            DepthLimit::Unbounded => false,
        }
    }
}

/// Score is from O's perspective (O is always the bot and maximizes).
/// `index` is absent when the position is terminal or searched from a
/// full board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub index: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { score, index: None }
    }
}

/// Minimax with alpha-beta pruning. Terminal wins are scaled by
/// `10 - depth` so the bot prefers faster wins and slower losses.
/// Moves are enumerated in ascending index order and only a strictly
/// better score replaces the current best, so results are
/// deterministic.
pub fn best_move(board: &Board, player: Mark, depth_limit: DepthLimit) -> SearchResult {
    minimax(board, player, 0, depth_limit, i32::MIN, i32::MAX)
}

fn minimax(
    board: &Board,
    player: Mark,
    depth: u32,
    depth_limit: DepthLimit,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    match evaluate_outcome(board) {
        Outcome::Winner(Mark::O) => return SearchResult::leaf(10 - depth as i32),
        Outcome::Winner(Mark::X) => return SearchResult::leaf(depth as i32 - 10),
        Outcome::Draw => return SearchResult::leaf(0),
        Outcome::Ongoing => {}
    }

    if depth_limit.reached(depth) {
        return SearchResult::leaf(evaluate_position(board));
    }

    let moves = board.available_moves();

    if player == Mark::O {
        let mut best_score = i32::MIN;
        let mut best_index = None;

        for index in moves {
            let next = board.with_mark(index, Mark::O);
            let result = minimax(&next, Mark::X, depth + 1, depth_limit, alpha, beta);

            if result.score > best_score {
                best_score = result.score;
                best_index = Some(index);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: best_score,
            index: best_index,
        }
    } else {
        let mut best_score = i32::MAX;
        let mut best_index = None;

        for index in moves {
            let next = board.with_mark(index, Mark::X);
            let result = minimax(&next, Mark::O, depth + 1, depth_limit, alpha, beta);

            if result.score < best_score {
                best_score = result.score;
                best_index = Some(index);
            }
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: best_score,
            index: best_index,
        }
    }
}

/// Heuristic for depth-cutoff leaves: each line with 2 own marks and an
/// empty cell counts ±3, each line with 1 own mark and 2 empty cells
/// counts ±1, and holding the center counts ±2 (positive for O).
fn evaluate_position(board: &Board) -> i32 {
    let mut score = 0;

    for [a, b, c] in LINES {
        let cells = [board.cell(a), board.cell(b), board.cell(c)];
        let o_count = cells.iter().filter(|&&cell| cell == Some(Mark::O)).count();
        let x_count = cells.iter().filter(|&&cell| cell == Some(Mark::X)).count();
        let empty_count = cells.iter().filter(|cell| cell.is_none()).count();

        if o_count == 2 && empty_count == 1 {
            score += 3;
        } else if x_count == 2 && empty_count == 1 {
            score -= 3;
        } else if o_count == 1 && empty_count == 2 {
            score += 1;
        } else if x_count == 1 && empty_count == 2 {
            score -= 1;
        }
    }

    match board.cell(4) {
        Some(Mark::O) => score += 2,
        Some(Mark::X) => score -= 2,
        None => {}
    }

    score
}
