use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use rand::Rng;

use crate::{color::DotColor, vector};

/// Extent of the drawing surface, sampled by the host every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A single point particle.
///
/// Direction and bounce count are only ever changed by [`Dot::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    position: Vec2,
    direction: Vec2,
    bounces: u32,
    color: DotColor,
    speed: f32,
    radius: f32,
}

/// What the renderer needs to draw one dot as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSprite {
    pub position: Vec2,
    pub radius: f32,
    pub color: DotColor,
}

impl Dot {
    pub fn new(position: Vec2, direction: Vec2, color: DotColor, speed: f32, radius: f32) -> Self {
        Self {
            position,
            direction: vector::normalize(direction),
            bounces: 0,
            color,
            speed,
            radius,
        }
    }

    /// A dot that already bounced `bounces` times.
    #[cfg(test)]
    pub(crate) fn with_bounces(mut self, bounces: u32) -> Self {
        self.bounces = bounces;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    pub fn color(&self) -> DotColor {
        self.color
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn sprite(&self) -> DotSprite {
        DotSprite {
            position: self.position,
            radius: self.radius,
            color: self.color,
        }
    }

    /// Advances the dot by one frame.
    ///
    /// Each axis is checked on its own, so a corner hit flips both components,
    /// applies two random rotations and counts as two bounces. The position is
    /// never clamped back inside `bounds`.
    pub fn update<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        self.position += self.direction * self.speed;

        if self.position.x <= 0.0 || self.position.x >= bounds.width {
            self.direction.x = -self.direction.x;
            self.direction = vector::rotate(self.direction, rng.gen_range(0.0..FRAC_PI_4));
            self.bounces += 1;
        }

        if self.position.y <= 0.0 || self.position.y >= bounds.height {
            self.direction.y = -self.direction.y;
            self.direction = vector::rotate(self.direction, rng.gen_range(0.0..FRAC_PI_4));
            self.bounces += 1;
        }
    }
}
