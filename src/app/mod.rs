//! Headless frame driver.
//!
//! Stands in for a render loop: it produces fixed wall-clock frame deltas,
//! caps them the same way a real frame clock would, and forwards them to
//! the engine.

use crate::model::simulation::Simulation;

/// Clamps a wall-clock frame delta into `[0, max]`.
#[must_use]
pub fn cap_frame_delta(delta: f64, max: f64) -> f64 {
    if delta.is_finite() {
        delta.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Drives a [`Simulation`] at a fixed frame rate without rendering.
#[derive(Debug, Clone)]
pub struct HeadlessDriver {
    frame_delta: f64,
    max_frame_delta: f64,
    frames_driven: u64,
}

impl HeadlessDriver {
    pub fn new(fps: f64, max_frame_delta: f64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
        Self {
            frame_delta: 1.0 / fps,
            max_frame_delta,
            frames_driven: 0,
        }
    }

    /// A driver matching the simulation's configured delta cap.
    pub fn for_simulation(sim: &Simulation, fps: f64) -> Self {
        Self::new(fps, sim.config().max_frame_delta)
    }

    pub fn frame_delta(&self) -> f64 {
        self.frame_delta
    }

    pub fn frames_driven(&self) -> u64 {
        self.frames_driven
    }

    /// Forwards one frame of `wall_delta` seconds, capped.
    pub fn step(&mut self, sim: &mut Simulation, wall_delta: f64) {
        sim.update(cap_frame_delta(wall_delta, self.max_frame_delta));
        self.frames_driven += 1;
    }

    /// Runs `frames` fixed-rate frames, calling `on_report` every
    /// `report_every` frames and once more at the end.
    ///
    /// Stops early once both species have died out.
    pub fn run<F>(&mut self, sim: &mut Simulation, frames: u64, report_every: u64, mut on_report: F)
    where
        F: FnMut(u64, &Simulation),
    {
        let report_every = report_every.max(1);
        for frame in 1..=frames {
            self.step(sim, self.frame_delta);
            if frame % report_every == 0 {
                on_report(frame, sim);
            }
            if sim.creatures().is_empty() {
                tracing::info!(frame, "All creatures have died out");
                if frame % report_every != 0 {
                    on_report(frame, sim);
                }
                return;
            }
        }
        if frames % report_every != 0 {
            on_report(frames, sim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::SimulationConfig;
    use crate::model::params::BehaviorParams;

    #[test]
    fn test_cap_frame_delta() {
        assert_eq!(cap_frame_delta(0.5, 1.0 / 30.0), 1.0 / 30.0);
        assert_eq!(cap_frame_delta(0.01, 1.0 / 30.0), 0.01);
        assert_eq!(cap_frame_delta(-1.0, 1.0 / 30.0), 0.0);
        assert_eq!(cap_frame_delta(f64::INFINITY, 1.0 / 30.0), 0.0);
    }

    #[test]
    fn test_step_caps_long_frames() {
        let mut sim = Simulation::new(
            SimulationConfig {
                seed: Some(9),
                ..Default::default()
            },
            BehaviorParams::default(),
        );
        sim.start();
        let mut driver = HeadlessDriver::for_simulation(&sim, 60.0);
        driver.step(&mut sim, 2.0);
        assert!((sim.time() - 1000.0 / 30.0).abs() < 1e-9);
        assert_eq!(driver.frames_driven(), 1);
    }

    #[test]
    fn test_run_reports_on_schedule() {
        let mut sim = Simulation::new(
            SimulationConfig {
                seed: Some(10),
                ..Default::default()
            },
            BehaviorParams::default(),
        );
        sim.start();
        let mut driver = HeadlessDriver::new(60.0, 1.0 / 30.0);
        let mut reports = Vec::new();
        driver.run(&mut sim, 25, 10, |frame, _| reports.push(frame));
        assert_eq!(reports, vec![10, 20, 25]);
    }
}
