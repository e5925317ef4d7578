//! Paddle Rally headless runner
//!
//! Plays a rally with a pointer-following stand-in for the human player and
//! logs what happens. Usage: `paddle-rally [settings.json] [ticks]`

use paddle_rally::Settings;
use paddle_rally::audio::{AudioCues, SoundEffect};
use paddle_rally::hud::Hud;
use paddle_rally::sim::{FixedStepper, GameEvent, GameMode, GameState, ModeAction, TickInput, tick};

/// Simulated display refresh (deliberately not the sim rate)
const DISPLAY_HZ: f32 = 144.0;
const DEFAULT_TICKS: u64 = 3600;

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native-only; web hosts drive `sim::tick` themselves
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Rally (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };
    let max_ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "seed={seed} preset={} opponent_speed={}",
        settings.preset.as_str(),
        settings.effective_opponent_speed()
    );

    let mut state = GameState::new(seed);
    settings.apply_to(&mut state);
    let mut cues = AudioCues::from_settings(&settings, seed);
    let mut hud = Hud::new();
    let mut stepper = FixedStepper::default();

    if let Some(banner) = Hud::banner(state.mode()) {
        log::info!("{banner}");
    }
    match state.apply_action(ModeAction::Start) {
        Ok(events) => {
            let start = cues.tones(SoundEffect::Start);
            log::debug!("start cue: {} tones, events {:?}", start.len(), events);
        }
        Err(e) => {
            log::error!("Could not start: {e}");
            return;
        }
    }

    let (mut hits, mut bounces) = (0u32, 0u32);
    while state.time_ticks < max_ticks && state.mode() == GameMode::Playing {
        for _ in 0..stepper.advance(1.0 / DISPLAY_HZ) {
            // Stand-in player: points at where the ball is now
            let input = TickInput::toward_pointer(state.ball.pos.y, &state.left_paddle);
            let events = tick(&mut state, &input);

            for event in &events {
                match event {
                    GameEvent::PaddleHit(_) => hits += 1,
                    GameEvent::WallBounce => bounces += 1,
                    GameEvent::Goal(side) => {
                        let (left, right) = state.scores();
                        log::info!("Goal {} at tick {}: {left} - {right}", side.as_str(), state.time_ticks);
                    }
                    GameEvent::ServeReset => {}
                }
            }
            for (effect, tones) in cues.dispatch(&events) {
                log::trace!("{effect:?}: {tones:?}");
            }
            hud.observe(&events);
        }
        // Render-side interpolation would blend by this
        log::trace!(
            "frame alpha={:.2} flash={}",
            stepper.alpha(),
            hud.flash_active()
        );
        hud.frame();
    }

    let (left_label, right_label) = Hud::score_labels(state.scores());
    println!(
        "{} ticks: {left_label} - {right_label} ({hits} paddle hits, {bounces} wall bounces)",
        state.time_ticks
    );
}
