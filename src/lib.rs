//! Touch-driven bouncing dots.
//!
//! Dots travel in straight lines, bounce off the edges of the drawing surface
//! with a small random deflection and disappear after a fixed number of
//! bounces. The host feeds input, palette and frame events into a
//! [`Playground`] and draws its [`Playground::snapshot`].

pub mod clock;
pub mod color;
pub mod config;
pub mod dot;
pub mod error;
pub mod playground;
pub mod selection;
pub mod spawn;
pub mod store;
pub mod vector;

pub use color::DotColor;
pub use config::PlaygroundConfig;
pub use dot::{Bounds, Dot, DotSprite};
pub use error::ConfigError;
pub use playground::{Playground, PlaygroundStats};
