//! Menu / playing / paused state machine
//!
//! The mode only changes through explicit actions. `tick` reads it and does
//! nothing unless the mode is `Playing`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{GameEvent, GameState};

/// Current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Start screen, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
}

/// Explicit actions from the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    Start,
    TogglePause,
    Resume,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("invalid game mode {0:?} (expected menu, playing or paused)")]
    InvalidMode(String),
    #[error("cannot go from {from} to {to}")]
    IllegalTransition { from: GameMode, to: GameMode },
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Menu => "menu",
            GameMode::Playing => "playing",
            GameMode::Paused => "paused",
        }
    }

    /// Whether moving from `self` to `to` is allowed.
    ///
    /// Staying put is always allowed; going back to the menu is allowed but
    /// only ever happens on request.
    pub fn can_transition(self, to: GameMode) -> bool {
        !matches!((self, to), (GameMode::Menu, GameMode::Paused))
    }

    /// Resolve an action to the next mode
    pub fn apply(self, action: ModeAction) -> Result<GameMode, ModeError> {
        let next = match (self, action) {
            (GameMode::Menu, ModeAction::Start) => GameMode::Playing,
            (GameMode::Playing, ModeAction::TogglePause) => GameMode::Paused,
            (GameMode::Paused, ModeAction::TogglePause | ModeAction::Resume) => GameMode::Playing,
            (GameMode::Playing, ModeAction::Resume) => GameMode::Playing,
            (from, action) => {
                let to = match action {
                    ModeAction::Start | ModeAction::Resume => GameMode::Playing,
                    ModeAction::TogglePause => GameMode::Paused,
                };
                return Err(ModeError::IllegalTransition { from, to });
            }
        };
        Ok(next)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "menu" => Ok(GameMode::Menu),
            "playing" | "play" => Ok(GameMode::Playing),
            "paused" | "pause" => Ok(GameMode::Paused),
            _ => Err(ModeError::InvalidMode(s.to_string())),
        }
    }
}

impl GameState {
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Switch mode. Leaving the menu for play serves a fresh ball in a random
    /// direction and reports it.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<Vec<GameEvent>, ModeError> {
        let from = self.mode;
        if from == mode {
            return Ok(Vec::new());
        }
        if !from.can_transition(mode) {
            return Err(ModeError::IllegalTransition { from, to: mode });
        }

        self.mode = mode;
        log::info!("Mode {from} -> {mode}");

        let mut events = Vec::new();
        if from == GameMode::Menu && mode == GameMode::Playing {
            events.push(self.serve(None));
        }
        Ok(events)
    }

    /// Apply an explicit action (start button, space bar, resume button)
    pub fn apply_action(&mut self, action: ModeAction) -> Result<Vec<GameEvent>, ModeError> {
        let next = self.mode.apply(action)?;
        self.set_mode(next)
    }

    /// Parse and apply a mode name, rejecting unknown values
    pub fn set_mode_str(&mut self, mode: &str) -> Result<Vec<GameEvent>, ModeError> {
        self.set_mode(mode.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("menu".parse::<GameMode>(), Ok(GameMode::Menu));
        assert_eq!(" Playing ".parse::<GameMode>(), Ok(GameMode::Playing));
        assert_eq!("PAUSED".parse::<GameMode>(), Ok(GameMode::Paused));
        assert_eq!(
            "running".parse::<GameMode>(),
            Err(ModeError::InvalidMode("running".to_string()))
        );
    }

    #[test]
    fn test_actions() {
        assert_eq!(GameMode::Menu.apply(ModeAction::Start), Ok(GameMode::Playing));
        assert_eq!(GameMode::Playing.apply(ModeAction::TogglePause), Ok(GameMode::Paused));
        assert_eq!(GameMode::Paused.apply(ModeAction::TogglePause), Ok(GameMode::Playing));
        assert_eq!(GameMode::Paused.apply(ModeAction::Resume), Ok(GameMode::Playing));
        assert_eq!(
            GameMode::Menu.apply(ModeAction::TogglePause),
            Err(ModeError::IllegalTransition {
                from: GameMode::Menu,
                to: GameMode::Paused
            })
        );
        assert!(GameMode::Playing.apply(ModeAction::Start).is_err());
    }

    #[test]
    fn test_start_serves() {
        let mut state = GameState::new(3);
        let stream = state.rng_state.stream;
        let events = state.set_mode(GameMode::Playing).unwrap();
        assert_eq!(events, vec![GameEvent::ServeReset]);
        assert_eq!(state.rng_state.stream, stream + 1);
        assert_eq!(state.mode(), GameMode::Playing);
    }

    #[test]
    fn test_pause_resume_does_not_serve() {
        let mut state = GameState::new(3);
        state.set_mode(GameMode::Playing).unwrap();
        let ball = state.ball;

        assert!(state.apply_action(ModeAction::TogglePause).unwrap().is_empty());
        assert_eq!(state.mode(), GameMode::Paused);
        assert!(state.apply_action(ModeAction::Resume).unwrap().is_empty());
        assert_eq!(state.mode(), GameMode::Playing);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_menu_to_paused_rejected() {
        let mut state = GameState::new(3);
        let err = state.set_mode(GameMode::Paused).unwrap_err();
        assert_eq!(
            err,
            ModeError::IllegalTransition {
                from: GameMode::Menu,
                to: GameMode::Paused
            }
        );
        assert_eq!(state.mode(), GameMode::Menu);
    }

    #[test]
    fn test_set_mode_str() {
        let mut state = GameState::new(3);
        assert!(matches!(
            state.set_mode_str("bogus"),
            Err(ModeError::InvalidMode(_))
        ));
        assert_eq!(state.mode(), GameMode::Menu);
        state.set_mode_str("playing").unwrap();
        assert_eq!(state.mode(), GameMode::Playing);
    }

    #[test]
    fn test_error_messages() {
        let err = ModeError::IllegalTransition {
            from: GameMode::Menu,
            to: GameMode::Paused,
        };
        assert_eq!(err.to_string(), "cannot go from menu to paused");
    }
}
