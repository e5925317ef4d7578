use glam::Vec2;
use paddle_rally::audio::{AudioCues, SoundEffect};
use paddle_rally::consts::*;
use paddle_rally::hud::Hud;
use paddle_rally::sim::*;
use paddle_rally::{OpponentPreset, Settings};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    let events = state.apply_action(ModeAction::Start).unwrap();
    assert_eq!(events, vec![GameEvent::ServeReset]);
    state
}

#[test]
fn test_ball_returned_by_player_paddle() {
    let mut state = started(1);
    state.left_paddle.y = 200.0;
    state.ball.pos = Vec2::new(5.0, 250.0);
    state.ball.vel = Vec2::new(-5.0, 0.0);

    let events = tick(&mut state, &TickInput::default());
    assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
    assert!(state.entities().ball.vel.x > 0.0);
}

#[test]
fn test_missed_ball_scores_for_opponent() {
    let mut state = started(2);
    state.left_paddle.y = 0.0;
    state.ball.pos = Vec2::new(-5.0, 250.0);
    state.ball.vel = Vec2::new(-5.0, 0.0);

    let events = tick(&mut state, &TickInput::default());
    assert_eq!(events, vec![GameEvent::Goal(Side::Right), GameEvent::ServeReset]);
    assert_eq!(state.scores(), (0, 1));

    let ball = state.entities().ball;
    assert!(ball.vel.x < 0.0);
    assert_eq!(ball.speed, INITIAL_BALL_SPEED);
    assert_eq!(ball.pos, Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0));
}

#[test]
fn test_thousand_idle_ticks_stay_in_bounds() {
    let mut state = GameState::new(3);
    state.set_mode(GameMode::Playing).unwrap();
    for _ in 0..1000 {
        tick(&mut state, &TickInput::default());
        let y = state.entities().left_paddle.y;
        assert!((0.0..=400.0).contains(&y), "y={y}");
    }
}

#[test]
fn test_pause_freezes_everything() {
    let mut state = started(4);
    for _ in 0..30 {
        tick(&mut state, &TickInput::from_keys(false, true));
    }
    state.apply_action(ModeAction::TogglePause).unwrap();
    let frozen = state.entities();
    let scores = state.scores();
    for _ in 0..100 {
        assert!(tick(&mut state, &TickInput::from_keys(true, false)).is_empty());
    }
    assert_eq!(state.entities(), frozen);
    assert_eq!(state.scores(), scores);
    assert_eq!(Hud::banner(state.mode()), Some("Paused"));
}

#[test]
fn test_invalid_mode_rejected() {
    let mut state = GameState::new(5);
    let err = state.set_mode_str("gameover").unwrap_err();
    assert!(matches!(err, ModeError::InvalidMode(_)));
    assert_eq!(state.mode(), GameMode::Menu);
}

#[test]
fn test_stand_in_player_rally_with_adapters() {
    let settings = Settings::from_preset(OpponentPreset::Hard);
    let mut state = GameState::new(6);
    settings.apply_to(&mut state);
    state.set_mode(GameMode::Playing).unwrap();

    let mut stepper = FixedStepper::default();
    let mut cues = AudioCues::from_settings(&settings, 6);
    let mut hud = Hud::new();
    let mut goals = 0;
    let mut hits = 0;

    // Ten seconds of 120 Hz frames
    for _ in 0..1200 {
        for _ in 0..stepper.advance(1.0 / 120.0) {
            let input = TickInput::toward_pointer(state.ball.pos.y, &state.left_paddle);
            let events = tick(&mut state, &input);
            goals += events.iter().filter(|e| matches!(e, GameEvent::Goal(_))).count();
            hits += events.iter().filter(|e| matches!(e, GameEvent::PaddleHit(_))).count();
            for (effect, tones) in cues.dispatch(&events) {
                assert_ne!(effect, SoundEffect::Start);
                assert!(!tones.is_empty());
            }
            hud.observe(&events);
        }
        hud.frame();
    }

    // 60 Hz sim from 120 Hz frames: about 600 ticks
    assert!((590..=610).contains(&state.time_ticks), "ticks={}", state.time_ticks);
    assert!(hits > 0);
    let (left, right) = state.scores();
    assert_eq!((left + right) as usize, goals);
}
