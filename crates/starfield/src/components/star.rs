//! Ambient background stars: drift, bounce off the surface edges and twinkle.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;
use crate::systems::rng::Rng;

/// A persistent twinkling dot in the background field.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Pixels per second.
    pub vel: Vec2,
    /// Side of the drawn square; also feeds the collision radius.
    pub size: f32,
    pub opacity: f32,
    /// Opacity change per second.
    pub twinkle_speed: f32,
    /// +1.0 while brightening, -1.0 while dimming.
    pub twinkle_direction: f32,
}

impl Star {
    pub const SIZE_RANGE: (f32, f32) = (0.5, 2.5);
    pub const SPEED_RANGE: (f32, f32) = (-4.0, 4.0);
    pub const INITIAL_OPACITY_RANGE: (f32, f32) = (0.3, 0.8);
    pub const TWINKLE_RANGE: (f32, f32) = (0.3, 1.1);
    /// Twinkle reverses once opacity leaves [MIN_OPACITY, MAX_OPACITY].
    pub const MIN_OPACITY: f32 = 0.2;
    pub const MAX_OPACITY: f32 = 0.8;

    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Star {
            pos,
            vel,
            size,
            opacity: 0.5,
            twinkle_speed: 0.5,
            twinkle_direction: 1.0,
        }
    }

    /// Spawn at a uniformly random position inside `bounds` (width, height).
    pub fn random(rng: &mut Rng, bounds: Vec2) -> Self {
        Star {
            pos: Vec2::new(rng.next_f32() * bounds.x, rng.next_f32() * bounds.y),
            vel: Vec2::new(
                rng.range(Self::SPEED_RANGE.0, Self::SPEED_RANGE.1),
                rng.range(Self::SPEED_RANGE.0, Self::SPEED_RANGE.1),
            ),
            size: rng.range(Self::SIZE_RANGE.0, Self::SIZE_RANGE.1),
            opacity: rng.range(Self::INITIAL_OPACITY_RANGE.0, Self::INITIAL_OPACITY_RANGE.1),
            twinkle_speed: rng.range(Self::TWINKLE_RANGE.0, Self::TWINKLE_RANGE.1),
            twinkle_direction: rng.sign(),
        }
    }

    /// Integrate position, reflect off the edges of `bounds`, advance the twinkle.
    pub fn update(&mut self, delta: f32, bounds: Vec2) {
        self.pos += self.vel * delta;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }

        self.opacity += self.twinkle_speed * self.twinkle_direction * delta;
        if self.opacity > Self::MAX_OPACITY || self.opacity < Self::MIN_OPACITY {
            self.twinkle_direction = -self.twinkle_direction;
        }
    }

    /// Distance below which this star and `other` count as touching.
    pub fn collision_radius(&self, other: &Star, margin: f32) -> f32 {
        self.size + other.size + margin
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.dot(self.pos, self.size, self.opacity);
    }
}
