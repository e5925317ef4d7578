//! Score counters and the serve-direction rule

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Per-side point totals. There is no win condition; rallies run until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    /// Credit a point to `scorer`; returns the new `(left, right)` totals
    pub fn record_goal(&mut self, scorer: Side) -> (u32, u32) {
        match scorer {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
        self.totals()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn totals(&self) -> (u32, u32) {
        (self.left, self.right)
    }

    /// Side the next serve travels toward: the one that just conceded
    pub fn receiver_after_goal(scorer: Side) -> Side {
        scorer.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_goal() {
        let mut board = Scoreboard::default();
        assert_eq!(board.record_goal(Side::Right), (0, 1));
        assert_eq!(board.record_goal(Side::Right), (0, 2));
        assert_eq!(board.record_goal(Side::Left), (1, 2));
        assert_eq!(board.right, 2);
    }

    #[test]
    fn test_reset() {
        let mut board = Scoreboard { left: 3, right: 5 };
        board.reset();
        assert_eq!(board.totals(), (0, 0));
    }

    #[test]
    fn test_saturates() {
        let mut board = Scoreboard {
            left: u32::MAX,
            right: 0,
        };
        assert_eq!(board.record_goal(Side::Left), (u32::MAX, 0));
    }

    #[test]
    fn test_conceding_side_receives() {
        assert_eq!(Scoreboard::receiver_after_goal(Side::Right), Side::Left);
        assert_eq!(Scoreboard::receiver_after_goal(Side::Left), Side::Right);
    }
}
