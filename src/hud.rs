//! HUD state derived from simulation events
//!
//! Drawing is up to the host; this only tracks what should be shown.

use crate::consts::SCORE_FLASH_TICKS;
use crate::sim::{GameEvent, GameMode, Side};

#[derive(Debug, Clone, Default)]
pub struct Hud {
    /// Frames left on the post-goal background flash
    pub flash_ticks: u32,
    pub last_scorer: Option<Side>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a tick's events
    pub fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Goal(side) = event {
                self.flash_ticks = SCORE_FLASH_TICKS;
                self.last_scorer = Some(*side);
            }
        }
    }

    /// Advance one rendered frame
    pub fn frame(&mut self) {
        self.flash_ticks = self.flash_ticks.saturating_sub(1);
    }

    pub fn flash_active(&self) -> bool {
        self.flash_ticks > 0
    }

    pub fn score_labels(scores: (u32, u32)) -> (String, String) {
        (scores.0.to_string(), scores.1.to_string())
    }

    /// Overlay text for the current mode
    pub fn banner(mode: GameMode) -> Option<&'static str> {
        match mode {
            GameMode::Menu => Some("Press Space to start"),
            GameMode::Paused => Some("Paused"),
            GameMode::Playing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_starts_flash() {
        let mut hud = Hud::new();
        hud.observe(&[GameEvent::WallBounce]);
        assert!(!hud.flash_active());

        hud.observe(&[GameEvent::Goal(Side::Left), GameEvent::ServeReset]);
        assert_eq!(hud.flash_ticks, SCORE_FLASH_TICKS);
        assert_eq!(hud.last_scorer, Some(Side::Left));

        for _ in 0..SCORE_FLASH_TICKS {
            hud.frame();
        }
        assert!(!hud.flash_active());
        hud.frame();
        assert_eq!(hud.flash_ticks, 0);
    }

    #[test]
    fn test_labels_and_banner() {
        assert_eq!(Hud::score_labels((3, 12)), ("3".to_string(), "12".to_string()));
        assert_eq!(Hud::banner(GameMode::Paused), Some("Paused"));
        assert_eq!(Hud::banner(GameMode::Playing), None);
    }
}
