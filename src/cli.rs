use std::time::Duration;

use clap::Parser;
use dot_playground::{
    config::{DOT_RADIUS, DOT_SPEED},
    PlaygroundConfig,
};

/// Touch-driven bouncing dots
#[derive(Parser)]
#[command()]
pub struct Args {
    /// Distance a dot travels each frame
    #[arg(long, default_value_t = DOT_SPEED)]
    pub speed: f32,

    /// Radius of every dot
    #[arg(long, default_value_t = DOT_RADIUS)]
    pub radius: f32,

    /// Bounces before a dot disappears
    #[arg(long, default_value_t = 4)]
    pub max_bounces: u32,

    /// Milliseconds between spawns while pressing
    #[arg(long, default_value_t = 50)]
    pub spawn_interval_ms: u64,

    /// Seed for the random generator, random if omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// The framerate the window is capped at
    ///
    /// if omitted frames are paced by the display only
    #[arg(short, long)]
    pub framerate: Option<u32>,
}

impl Args {
    pub fn playground_config(&self) -> PlaygroundConfig {
        PlaygroundConfig {
            speed: self.speed,
            radius: self.radius,
            max_bounces: self.max_bounces,
            spawn_interval: Duration::from_millis(self.spawn_interval_ms),
            seed: self.seed,
        }
    }
}
