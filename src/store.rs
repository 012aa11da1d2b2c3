use log::debug;
use rand::Rng;

use crate::dot::{Bounds, Dot, DotSprite};

/// Bounce count at which a dot is removed.
pub const MAX_BOUNCES: u32 = 4;

/// Live dots in insertion order.
#[derive(Debug, Clone)]
pub struct DotStore {
    dots: Vec<Dot>,
    max_bounces: u32,
}

impl Default for DotStore {
    fn default() -> Self {
        Self::new(MAX_BOUNCES)
    }
}

impl DotStore {
    pub fn new(max_bounces: u32) -> Self {
        Self {
            dots: Vec::new(),
            max_bounces,
        }
    }

    pub fn insert(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    /// Updates every dot against the same `bounds`.
    pub fn update_all<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        for dot in &mut self.dots {
            dot.update(bounds, rng);
        }
    }

    /// Drops every dot that reached the bounce limit. Returns how many were removed.
    pub fn expire(&mut self) -> usize {
        let before = self.dots.len();
        let max_bounces = self.max_bounces;
        self.dots.retain(|dot| dot.bounces() < max_bounces);

        let removed = before - self.dots.len();
        if removed > 0 {
            debug!("expired {removed} dots, {} left", self.dots.len());
        }

        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter()
    }

    pub fn snapshot(&self) -> Vec<DotSprite> {
        self.dots.iter().map(Dot::sprite).collect()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn clear(&mut self) {
        self.dots.clear();
    }
}
