use std::time::Duration;

use crate::{error::ConfigError, spawn::SPAWN_INTERVAL, store::MAX_BOUNCES};

pub const DOT_SPEED: f32 = 5.0;
pub const DOT_RADIUS: f32 = 5.0;

/// Tunables shared by every dot and the spawn sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    /// Distance travelled per frame.
    pub speed: f32,
    pub radius: f32,
    /// Dots are removed once they bounced this many times.
    pub max_bounces: u32,
    pub spawn_interval: Duration,
    /// Fixed RNG seed, `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            speed: DOT_SPEED,
            radius: DOT_RADIUS,
            max_bounces: MAX_BOUNCES,
            spawn_interval: SPAWN_INTERVAL,
            seed: None,
        }
    }
}

impl PlaygroundConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if self.max_bounces == 0 {
            return Err(ConfigError::ZeroBounceLimit);
        }
        if self.spawn_interval.is_zero() {
            return Err(ConfigError::ZeroSpawnInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_bounces, 4);
        assert_eq!(config.spawn_interval, Duration::from_millis(50));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_speed = PlaygroundConfig {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(bad_speed.validate(), Err(ConfigError::InvalidSpeed(_))));

        let bad_radius = PlaygroundConfig {
            radius: -1.0,
            ..Default::default()
        };
        assert_eq!(bad_radius.validate(), Err(ConfigError::InvalidRadius(-1.0)));

        let no_bounces = PlaygroundConfig {
            max_bounces: 0,
            ..Default::default()
        };
        assert_eq!(no_bounces.validate(), Err(ConfigError::ZeroBounceLimit));

        let no_interval = PlaygroundConfig {
            spawn_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(no_interval.validate(), Err(ConfigError::ZeroSpawnInterval));
    }
}
