//! Driver-side simulation controls
//!
//! The driver owns a [`Controls`] value and builds one [`FrameInput`] per
//! frame from whatever event source it has.
//! Nothing here touches windowing.

use log::info;

use crate::physics::{BodyStats, Simulation};
use crate::vector::Vector;

const SPEED_STEP: f64 = 2.0;
const SPEED_RANGE: f64 = 64.0;

/// Actions requested during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub toggle_pause: bool,
    pub reset: bool,
    pub speed_up: bool,
    pub slow_down: bool,
    /// Ask for a per-body stats report
    pub report: bool,
}

/// Pause flag and time scale, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub paused: bool,
    pub simulation_speed: f64,
    base_speed: f64,
}

impl Controls {
    pub fn new(base_speed: f64) -> Self {
        Self {
            paused: false,
            simulation_speed: base_speed,
            base_speed,
        }
    }

    /// Applies the frame's input, then advances the simulation by the
    /// scaled frame time. Returns the stats report when one was requested.
    pub fn update<V: Vector>(
        &mut self,
        sim: &mut Simulation<V>,
        input: FrameInput,
        frame_dt: f64,
    ) -> Option<Vec<BodyStats>> {
        if input.toggle_pause {
            self.paused = !self.paused;
            info!(
                "{}",
                if self.paused {
                    "Simulation paused"
                } else {
                    "Simulation resumed"
                }
            );
        }

        if input.reset {
            sim.reset();
        }

        if input.speed_up {
            self.set_speed(self.simulation_speed * SPEED_STEP);
        }
        if input.slow_down {
            self.set_speed(self.simulation_speed / SPEED_STEP);
        }

        sim.step(frame_dt * self.simulation_speed, self.paused);

        input.report.then(|| sim.stats())
    }

    fn set_speed(&mut self, speed: f64) {
        let min = self.base_speed / SPEED_RANGE;
        let max = self.base_speed * SPEED_RANGE;
        self.simulation_speed = speed.clamp(min, max);
        info!("Simulation speed: {:.3}x", self.simulation_speed / self.base_speed);
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(1.0)
    }
}
