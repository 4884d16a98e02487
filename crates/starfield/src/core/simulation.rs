use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::types::DeviceProfile;
use crate::components::ripple::Ripple;
use crate::components::shooting_star::ShootingStar;
use crate::components::star::Star;
use crate::core::time::FrameClock;
use crate::renderer::draw_list::DrawList;
use crate::systems::collision::{resolve_collisions, Link};
use crate::systems::render::{build_draw_list, build_static_draw_list};
use crate::systems::rng::Rng;

/// Owns every entity pool plus the pacing clock and random source.
/// One instance per mounted background; nothing here is shared.
pub struct Simulation {
    config: SimConfig,
    device: DeviceProfile,
    bounds: Vec2,
    stars: Vec<Star>,
    ripples: Vec<Ripple>,
    shooting_stars: Vec<ShootingStar>,
    /// Links found by the last collision pass.
    links: Vec<Link>,
    clock: FrameClock,
    rng: Rng,
}

impl Simulation {
    /// Create an empty simulation. Call `resize` before the first frame.
    pub fn new(config: SimConfig, device: DeviceProfile, seed: u64) -> Self {
        let config = config.sanitized();
        let clock = FrameClock::from_config(&config);
        Self {
            stars: Vec::new(),
            ripples: Vec::new(),
            shooting_stars: Vec::new(),
            links: Vec::new(),
            bounds: Vec2::ZERO,
            clock,
            rng: Rng::new(seed),
            config,
            device,
        }
    }

    /// Adopt new surface dimensions and rebuild every pool from scratch.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        self.ripples.clear();
        self.shooting_stars.clear();
        self.links.clear();

        let count = self.config.star_count(&self.device);
        self.stars.clear();
        for _ in 0..count {
            self.stars.push(Star::random(&mut self.rng, self.bounds));
        }
        log::debug!("rebuilt {} stars for {}x{}", count, width, height);
    }

    /// Feed a host timestamp in milliseconds. Runs one step and returns true
    /// unless the frame-rate ceiling says this callback must be skipped.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        match self.clock.tick(now_ms) {
            Some(delta) => {
                self.step(delta);
                true
            }
            None => false,
        }
    }

    /// Advance all pools by `delta` seconds.
    pub fn step(&mut self, delta: f32) {
        if self.rng.chance(self.config.shooting_star_rate * delta) {
            self.shooting_stars.push(ShootingStar::random(&mut self.rng, self.bounds));
        }
        self.shooting_stars.retain_mut(|s| s.tick(delta));

        let bounds = self.bounds;
        for star in &mut self.stars {
            star.update(delta, bounds);
        }

        self.ripples.retain_mut(|r| r.tick(delta));

        self.links.clear();
        if !self.device.mobile {
            resolve_collisions(&mut self.stars, &self.config, &mut self.links, &mut self.ripples);
        }
    }

    /// Full animated frame.
    pub fn render(&self, list: &mut DrawList) {
        build_draw_list(
            list,
            self.bounds,
            &self.shooting_stars,
            &self.stars,
            &self.ripples,
            &self.links,
        );
    }

    /// Reduced-motion frame: stars where they are, nothing else.
    pub fn render_static(&self, list: &mut DrawList) {
        build_static_draw_list(list, self.bounds, &self.stars);
    }

    /// Add a shooting star at a chosen spot (host effects, tests).
    pub fn spawn_shooting_star(&mut self, star: ShootingStar) {
        self.shooting_stars.push(star);
    }

    pub fn spawn_ripple(&mut self, pos: Vec2) {
        self.ripples.push(Ripple::new(pos));
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.y
    }
}
