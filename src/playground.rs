use std::time::Duration;

use glam::Vec2;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    clock::SimulationClock,
    color::DotColor,
    config::PlaygroundConfig,
    dot::{Bounds, DotSprite},
    error::ConfigError,
    selection::ColorSelection,
    spawn::SpawnController,
    store::DotStore,
};

/// Counters shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaygroundStats {
    pub dots: usize,
    pub frames: u64,
    pub paused: bool,
}

/// The whole simulation behind the host's input, frame and palette callbacks.
///
/// Every entry point takes `&mut self`, so a spawn can only land between two
/// complete calls and never inside an update/expire pass.
pub struct Playground<R = StdRng> {
    store: DotStore,
    selection: ColorSelection,
    spawner: SpawnController,
    clock: SimulationClock,
    rng: R,
}

impl Playground<StdRng> {
    pub fn new(config: PlaygroundConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Playground<R> {
    pub fn with_rng(config: PlaygroundConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "playground: speed {}, radius {}, {} bounces, spawn every {:?}",
            config.speed, config.radius, config.max_bounces, config.spawn_interval
        );

        Ok(Self {
            store: DotStore::new(config.max_bounces),
            selection: ColorSelection::new(),
            spawner: SpawnController::new(config.spawn_interval, config.speed, config.radius),
            clock: SimulationClock::new(),
            rng,
        })
    }

    pub fn on_press_start(&mut self, position: Vec2) {
        self.spawner.press_start(position);
    }

    pub fn on_drag_update(&mut self, position: Vec2) {
        if let Some(dot) =
            self.spawner
                .drag_update(position, self.selection.snapshot(), &mut self.rng)
        {
            self.store.insert(dot);
        }
    }

    pub fn on_press_end(&mut self) {
        self.spawner.press_end();
    }

    /// Advances the spawn timer by `elapsed` wall-clock time.
    pub fn on_timer(&mut self, elapsed: Duration) {
        if let Some(dot) = self
            .spawner
            .advance(elapsed, self.selection.snapshot(), &mut self.rng)
        {
            self.store.insert(dot);
        }
    }

    /// One display frame. Returns whether the dots moved.
    pub fn tick(&mut self, elapsed: Duration, bounds: Bounds) -> bool {
        self.clock
            .tick(elapsed, bounds, &mut self.store, &mut self.rng)
    }

    pub fn snapshot(&self) -> Vec<DotSprite> {
        self.store.snapshot()
    }

    pub fn toggle_color(&mut self, color: DotColor) {
        self.selection.toggle(color);
    }

    pub fn selection(&self) -> &ColorSelection {
        &self.selection
    }

    pub fn store(&self) -> &DotStore {
        &self.store
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub fn is_pressed(&self) -> bool {
        self.spawner.is_pressed()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn stats(&self) -> PlaygroundStats {
        PlaygroundStats {
            dots: self.store.len(),
            frames: self.clock.frames(),
            paused: self.clock.is_paused(),
        }
    }

    /// Cancels the spawn timer for good.
    pub fn shutdown(&mut self) {
        info!("shutting down with {} dots alive", self.store.len());
        self.spawner.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    fn playground() -> Playground<StepRng> {
        Playground::with_rng(PlaygroundConfig::default(), StepRng::new(0, 0))
            .expect("default config is valid")
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PlaygroundConfig {
            max_bounces: 0,
            ..Default::default()
        };
        assert!(Playground::new(config).is_err());
    }

    #[test]
    fn timer_spawns_only_while_pressed() {
        let mut playground = playground();

        playground.on_timer(Duration::from_millis(200));
        assert_eq!(playground.store().len(), 0);

        playground.on_press_start(Vec2::new(10.0, 10.0));
        playground.on_timer(Duration::from_millis(50));
        playground.on_timer(Duration::from_millis(50));
        assert_eq!(playground.store().len(), 2);

        playground.on_press_end();
        playground.on_timer(Duration::from_millis(100));
        assert_eq!(playground.store().len(), 2);
    }

    #[test]
    fn spawn_between_frames_keeps_store_consistent() {
        let mut playground = playground();
        let bounds = Bounds::new(100.0, 100.0);

        playground.on_drag_update(Vec2::new(50.0, 50.0));
        playground.tick(Duration::from_millis(16), bounds);
        playground.on_drag_update(Vec2::new(50.0, 50.0));
        playground.tick(Duration::from_millis(16), bounds);

        let snapshot = playground.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(playground.store().iter().all(|dot| dot.bounces() < 4));
    }

    #[test]
    fn stats_follow_the_simulation() {
        let mut playground = playground();
        playground.on_drag_update(Vec2::new(50.0, 50.0));
        playground.tick(Duration::from_millis(16), Bounds::new(100.0, 100.0));
        playground.clock_mut().pause();

        assert_eq!(
            playground.stats(),
            PlaygroundStats {
                dots: 1,
                frames: 1,
                paused: true,
            }
        );

        playground.clear();
        assert_eq!(playground.stats().dots, 0);
    }

    #[test]
    fn shutdown_cancels_running_press() {
        let mut playground = playground();
        playground.on_press_start(Vec2::new(10.0, 10.0));
        playground.shutdown();

        assert!(!playground.is_pressed());
        playground.on_timer(Duration::from_secs(1));
        playground.on_drag_update(Vec2::new(20.0, 20.0));
        assert_eq!(playground.store().len(), 0);
    }
}
