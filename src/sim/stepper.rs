//! Frame-time accumulator for driving the fixed-step tick
//!
//! The render loop reports real elapsed time; the stepper says how many whole
//! ticks to run so physics speed never depends on the display refresh rate.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we account for (tab switches, debugger pauses)
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStepper {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepper {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        // Drop backlog we refused to simulate
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_per_frame_at_sim_rate() {
        let mut stepper = FixedStepper::new(0.05, 8);
        assert_eq!(stepper.advance(0.05), 1);
        assert_eq!(stepper.advance(0.05), 1);
    }

    #[test]
    fn test_fast_display_accumulates() {
        let mut stepper = FixedStepper::new(0.05, 8);
        assert_eq!(stepper.advance(0.025), 0);
        assert_eq!(stepper.alpha(), 0.5);
        assert_eq!(stepper.advance(0.025), 1);
        assert_eq!(stepper.alpha(), 0.0);
    }

    #[test]
    fn test_substep_cap() {
        let mut stepper = FixedStepper::new(0.01, 4);
        assert_eq!(stepper.advance(0.1), 4);
        assert!(stepper.alpha() <= 1.0);
    }

    #[test]
    fn test_bad_frame_times() {
        let mut stepper = FixedStepper::default();
        assert_eq!(stepper.advance(-1.0), 0);
        assert_eq!(stepper.advance(f32::NAN), 0);
        assert_eq!(stepper.advance(0.0), 0);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut stepper = FixedStepper::new(0.05, 100);
        // 5 s hitch only counts as 0.1 s
        assert_eq!(stepper.advance(5.0), 2);
    }
}
