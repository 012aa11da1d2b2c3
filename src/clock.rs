use std::time::Duration;

use log::trace;
use rand::Rng;

use crate::{dot::Bounds, store::DotStore};

/// Drives the dots forward once per displayed frame.
///
/// Motion is counted in frames, not seconds. Elapsed time is only recorded.
/// Frames the host never delivers are simply lost.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    frames: u64,
    paused: bool,
    step: bool,
    needs_redraw: bool,
    last_elapsed: Duration,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame: update against a single bounds snapshot, then expire.
    ///
    /// Returns whether the store was advanced.
    pub fn tick<R: Rng>(
        &mut self,
        elapsed: Duration,
        bounds: Bounds,
        store: &mut DotStore,
        rng: &mut R,
    ) -> bool {
        self.last_elapsed = elapsed;

        if self.paused && !self.step {
            return false;
        }
        self.step = false;

        store.update_all(bounds, rng);
        store.expire();

        self.frames += 1;
        self.needs_redraw = true;
        trace!(
            "frame {} ({:?}), {} dots in {}x{}",
            self.frames,
            elapsed,
            store.len(),
            bounds.width,
            bounds.height
        );

        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Lets exactly one frame through while paused.
    pub fn request_step(&mut self) {
        self.step = true;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_elapsed(&self) -> Duration {
        self.last_elapsed
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
