//! Expanding rings spawned where two stars touch.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Radius growth in px per second.
    pub growth_speed: f32,
}

impl Ripple {
    pub const INITIAL_RADIUS: f32 = 1.0;
    pub const INITIAL_OPACITY: f32 = 0.8;
    pub const GROWTH_SPEED: f32 = 24.0;
    /// Opacity lost per second.
    pub const FADE_RATE: f32 = 1.2;
    pub const LINE_WIDTH: f32 = 1.0;

    pub fn new(pos: Vec2) -> Self {
        Ripple {
            pos,
            radius: Self::INITIAL_RADIUS,
            opacity: Self::INITIAL_OPACITY,
            growth_speed: Self::GROWTH_SPEED,
        }
    }

    /// Grow and fade. Returns false once fully transparent.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.radius += self.growth_speed * delta;
        self.opacity -= Self::FADE_RATE * delta;
        self.opacity > 0.0
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.ring(self.pos, self.radius, Self::LINE_WIDTH, self.opacity);
    }
}
