use std::time::Duration;

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::{color::DotColor, dot::Dot, vector};

/// Cadence of the spawn sequence while a press is held.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(50);

/// A periodic timer driven by elapsed time reported from the host.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    pending: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    /// Returns whether a period completed during `elapsed`.
    ///
    /// Fires at most once per call. Periods missed during a long stall are
    /// dropped rather than released as a burst.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.interval.is_zero() {
            return false;
        }

        self.pending += elapsed;
        if self.pending < self.interval {
            return false;
        }

        self.pending -= self.interval;
        if self.pending >= self.interval {
            self.pending = Duration::from_nanos(
                (self.pending.as_nanos() % self.interval.as_nanos()) as u64,
            );
        }

        true
    }
}

#[derive(Debug, Clone)]
struct Press {
    origin: Vec2,
    timer: SpawnTimer,
}

/// Turns press, drag and timer events into new dots.
#[derive(Debug, Clone)]
pub struct SpawnController {
    interval: Duration,
    speed: f32,
    radius: f32,
    press: Option<Press>,
    shut_down: bool,
}

impl SpawnController {
    pub fn new(interval: Duration, speed: f32, radius: f32) -> Self {
        Self {
            interval,
            speed,
            radius,
            press: None,
            shut_down: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Starts the periodic spawn sequence anchored at `origin`.
    ///
    /// The first timed spawn happens one interval after the press.
    pub fn press_start(&mut self, origin: Vec2) {
        if self.shut_down {
            return;
        }

        debug!("press started at {origin}");
        self.press = Some(Press {
            origin,
            timer: SpawnTimer::new(self.interval),
        });
    }

    /// Spawns one dot at `position`, independently of the timer.
    pub fn drag_update<R: Rng>(
        &mut self,
        position: Vec2,
        colors: &[DotColor],
        rng: &mut R,
    ) -> Option<Dot> {
        if self.shut_down {
            return None;
        }

        self.spawn(position, colors, rng)
    }

    pub fn press_end(&mut self) {
        if self.press.take().is_some() {
            debug!("press ended");
        }
    }

    /// Advances the spawn timer and returns the dot due in that time, if any.
    ///
    /// A tick that lands while `colors` is empty is skipped.
    pub fn advance<R: Rng>(
        &mut self,
        elapsed: Duration,
        colors: &[DotColor],
        rng: &mut R,
    ) -> Option<Dot> {
        let press = self.press.as_mut()?;
        let origin = press.origin;

        if press.timer.advance(elapsed) {
            self.spawn(origin, colors, rng)
        } else {
            None
        }
    }

    /// Cancels any running sequence and refuses further spawns.
    pub fn shutdown(&mut self) {
        self.press_end();
        self.shut_down = true;
    }

    fn spawn<R: Rng>(&self, position: Vec2, colors: &[DotColor], rng: &mut R) -> Option<Dot> {
        if colors.is_empty() {
            trace!("no colors selected, skipping spawn at {position}");
            return None;
        }

        let direction = random_direction(rng);
        let color = colors[rng.gen_range(0..colors.len())];
        trace!("spawning {} dot at {position}", color.name());

        Some(Dot::new(position, direction, color, self.speed, self.radius))
    }
}

/// Uniform components in `[-1, 1]`, normalized.
pub fn random_direction<R: Rng>(rng: &mut R) -> Vec2 {
    let x = rng.gen_range(-1.0..=1.0);
    let y = rng.gen_range(-1.0..=1.0);
    vector::normalize(Vec2::new(x, y))
}
