//! Sound cues for simulation events
//!
//! Maps [`GameEvent`]s to short procedural tone descriptions. Synthesis and
//! playback are left to the host (Web Audio, cpal, ...); nothing here makes
//! a sound.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top/bottom wall
    WallHit,
    /// A point was scored
    Score,
    /// Game started from the menu
    Start,
}

impl SoundEffect {
    /// Which sound an event makes, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit(_) => Some(SoundEffect::PaddleHit),
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::Goal(_) => Some(SoundEffect::Score),
            GameEvent::ServeReset => None,
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
}

/// One oscillator burst with an exponential fade-out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub freq: f32,
    pub waveform: Waveform,
    /// Seconds at full gain
    pub duration: f32,
    /// Fade tail in seconds
    pub decay: f32,
    /// Peak gain after volume scaling
    pub gain: f32,
    /// Start offset in seconds from when the cue fires
    pub delay: f32,
}

const DEFAULT_DECAY: f32 = 0.02;

impl Tone {
    fn new(freq: f32, waveform: Waveform, duration: f32, gain: f32) -> Self {
        Self {
            freq,
            waveform,
            duration,
            decay: DEFAULT_DECAY,
            gain,
            delay: 0.0,
        }
    }

    fn after(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// Event-to-tone dispatcher with volume control
#[derive(Debug, Clone)]
pub struct AudioCues {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Pitch jitter
    rng: Pcg32,
}

impl Default for AudioCues {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AudioCues {
    pub fn new(seed: u64) -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let mut cues = Self::new(seed);
        cues.set_master_volume(settings.master_volume);
        cues.set_sfx_volume(settings.sfx_volume);
        cues.set_muted(settings.muted);
        cues
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set sound effects volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Tones for one effect; empty when muted or silent
    pub fn tones(&mut self, effect: SoundEffect) -> Vec<Tone> {
        let volume = self.volume();
        if volume <= 0.0 {
            return Vec::new();
        }

        let mut tones = match effect {
            SoundEffect::PaddleHit => {
                let freq = 900.0 + self.rng.random::<f32>() * 120.0;
                vec![Tone::new(freq, Waveform::Sawtooth, 0.06, 0.12)]
            }
            SoundEffect::WallHit => {
                let freq = 420.0 + self.rng.random::<f32>() * 60.0;
                vec![Tone::new(freq, Waveform::Sine, 0.05, 0.08)]
            }
            SoundEffect::Score => {
                // Descending three-note sting
                let base = 880.0;
                vec![
                    Tone::new(base, Waveform::Sine, 0.12, 0.12),
                    Tone::new(base * 0.8, Waveform::Sine, 0.12, 0.10).after(0.11),
                    Tone::new(base * 0.6, Waveform::Sine, 0.16, 0.09).after(0.23),
                ]
            }
            SoundEffect::Start => vec![
                Tone::new(1200.0, Waveform::Triangle, 0.06, 0.10),
                Tone::new(1500.0, Waveform::Triangle, 0.08, 0.12).after(0.08),
            ],
        };

        for tone in &mut tones {
            tone.gain *= volume;
        }
        tones
    }

    /// Collect the tones for everything that happened in a tick
    pub fn dispatch(&mut self, events: &[GameEvent]) -> Vec<(SoundEffect, Vec<Tone>)> {
        events
            .iter()
            .filter_map(SoundEffect::for_event)
            .map(|effect| (effect, self.tones(effect)))
            .filter(|(_, tones)| !tones.is_empty())
            .collect()
    }
}
