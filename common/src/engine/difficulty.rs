use super::board::Mark;
use super::search::DepthLimit;
use super::win_detector::Outcome;

const WINS_FOR_PROMOTION: u32 = 2;

/// Bot difficulty, 1 (easiest) through 5 ("impossible", unbounded
/// search). Out-of-range input clamps to the nearest bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    pub const MIN: DifficultyLevel = DifficultyLevel(1);
    pub const MAX: DifficultyLevel = DifficultyLevel(5);

    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn depth_limit(self) -> DepthLimit {
        match self.0 {
            5 => DepthLimit::Unbounded,
            level => DepthLimit::Limited(level as u32),
        }
    }
}

pub fn depth_for_level(level: u8) -> DepthLimit {
    DifficultyLevel::new(level).depth_limit()
}

/// Per-session difficulty state for bot games. The human plays X, the
/// bot plays O. Two consecutive human wins promote the level by one,
/// capped at the maximum; a bot win or a draw resets the streak.
#[derive(Clone, Copy, Debug)]
pub struct DifficultySession {
    level: DifficultyLevel,
    consecutive_wins: u32,
}

impl DifficultySession {
    pub fn new(level: DifficultyLevel) -> Self {
        Self {
            level,
            consecutive_wins: 0,
        }
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.level.depth_limit()
    }

    pub fn record_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => {
                self.consecutive_wins += 1;
                if self.consecutive_wins >= WINS_FOR_PROMOTION && self.level < DifficultyLevel::MAX
                {
                    self.level = DifficultyLevel::new(self.level.get() + 1);
                    self.consecutive_wins = 0;
                }
            }
            Outcome::Winner(Mark::O) | Outcome::Draw => {
                self.consecutive_wins = 0;
            }
            Outcome::Ongoing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_mapping() {
        assert_eq!(depth_for_level(1), DepthLimit::Limited(1));
        assert_eq!(depth_for_level(2), DepthLimit::Limited(2));
        assert_eq!(depth_for_level(3), DepthLimit::Limited(3));
        assert_eq!(depth_for_level(4), DepthLimit::Limited(4));
        assert_eq!(depth_for_level(5), DepthLimit::Unbounded);
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        assert_eq!(DifficultyLevel::new(0), DifficultyLevel::MIN);
        assert_eq!(DifficultyLevel::new(9), DifficultyLevel::MAX);
    }

    #[test]
    fn test_two_consecutive_wins_promote() {
        let mut session = DifficultySession::new(DifficultyLevel::new(1));
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level().get(), 1);
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level().get(), 2);
    }

    #[test]
    fn test_streak_resets_after_promotion() {
        let mut session = DifficultySession::new(DifficultyLevel::new(1));
        session.record_outcome(Outcome::Winner(Mark::X));
        session.record_outcome(Outcome::Winner(Mark::X));
        session.record_outcome(Outcome::Winner(Mark::X));
        // One win into the new streak, not promoted again yet.
        assert_eq!(session.level().get(), 2);
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level().get(), 3);
    }

    #[test]
    fn test_loss_and_draw_reset_streak() {
        let mut session = DifficultySession::new(DifficultyLevel::new(1));
        session.record_outcome(Outcome::Winner(Mark::X));
        session.record_outcome(Outcome::Winner(Mark::O));
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level().get(), 1);
        session.record_outcome(Outcome::Draw);
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level().get(), 1);
    }

    #[test]
    fn test_promotion_caps_at_max() {
        let mut session = DifficultySession::new(DifficultyLevel::MAX);
        session.record_outcome(Outcome::Winner(Mark::X));
        session.record_outcome(Outcome::Winner(Mark::X));
        assert_eq!(session.level(), DifficultyLevel::MAX);
    }
}
