//! Scrolling starfield background

use glam::IVec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{Color, Renderer};
use crate::sim::SimRng;

/// Fastest star speed in pixels per tick
const MAX_STAR_SPEED: i32 = 3;

/// A single background star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub pos: IVec2,
    /// Pixels per tick, 1 (far) to 3 (near)
    pub speed: i32,
}

impl Star {
    /// Nearer stars are brighter
    pub fn color(&self) -> Color {
        match self.speed {
            1 => 5,
            2 => 6,
            _ => 7,
        }
    }
}

/// Vertically scrolling field of stars
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars across the screen
    pub fn new(count: usize, rng: &mut SimRng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: IVec2::new(rng.range(0, SCREEN_WIDTH - 1), rng.range(0, SCREEN_HEIGHT - 1)),
                speed: rng.range(1, MAX_STAR_SPEED),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Scroll every star down, wrapping at the bottom edge
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.pos.y = (star.pos.y + star.speed).rem_euclid(SCREEN_HEIGHT);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for star in &self.stars {
            renderer.rect_fill(star.pos.x, star.pos.y, star.pos.x, star.pos.y, star.color());
        }
    }
}
