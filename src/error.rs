use thiserror::Error;

/// Rejected playground settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("dot speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),

    #[error("dot radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("bounce limit must be at least 1")]
    ZeroBounceLimit,

    #[error("spawn interval must be longer than zero")]
    ZeroSpawnInterval,
}
