//! Shooting stars: short-lived streaks flying down-right with a fading tail.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::renderer::draw_list::DrawList;
use crate::systems::rng::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    /// Head position.
    pub pos: Vec2,
    /// Tail length in px.
    pub length: f32,
    /// Px per second along `angle`.
    pub speed: f32,
    /// Travel direction in radians.
    pub angle: f32,
    pub opacity: f32,
}

impl ShootingStar {
    pub const LENGTH_RANGE: (f32, f32) = (40.0, 120.0);
    pub const SPEED_RANGE: (f32, f32) = (200.0, 500.0);
    /// Total spread of the travel angle around 45 degrees.
    pub const ANGLE_JITTER: f32 = 0.2;
    /// Opacity lost per second.
    pub const FADE_RATE: f32 = 0.8;
    pub const LINE_WIDTH: f32 = 1.5;

    pub fn new(pos: Vec2, length: f32, speed: f32, angle: f32) -> Self {
        ShootingStar {
            pos,
            length,
            speed,
            angle,
            opacity: 1.0,
        }
    }

    /// Spawn somewhere in the upper half of `bounds`.
    pub fn random(rng: &mut Rng, bounds: Vec2) -> Self {
        let pos = Vec2::new(rng.next_f32() * bounds.x, rng.next_f32() * bounds.y * 0.5);
        let length = rng.range(Self::LENGTH_RANGE.0, Self::LENGTH_RANGE.1);
        let speed = rng.range(Self::SPEED_RANGE.0, Self::SPEED_RANGE.1);
        let angle = FRAC_PI_4 + (rng.next_f32() - 0.5) * Self::ANGLE_JITTER;
        Self::new(pos, length, speed, angle)
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    pub fn tail(&self) -> Vec2 {
        self.pos - self.direction() * self.length
    }

    /// Fly and fade. Returns false once fully transparent.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.pos += self.direction() * self.speed * delta;
        self.opacity -= Self::FADE_RATE * delta;
        self.opacity > 0.0
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.streak(self.pos, self.tail(), Self::LINE_WIDTH, self.opacity);
    }
}
