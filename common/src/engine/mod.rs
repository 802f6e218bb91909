mod board;
mod difficulty;
mod search;
mod win_detector;

pub use board::{Board, Cell, Mark, BOARD_CELLS, LINES};
pub use difficulty::{depth_for_level, DifficultyLevel, DifficultySession};
pub use search::{best_move, DepthLimit, SearchResult};
pub use win_detector::{evaluate_outcome, Outcome};
