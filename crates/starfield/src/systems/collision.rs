//! Pairwise star proximity pass: faint links between near stars, and a bounce
//! with a ripple when two stars touch.
//!
//! O(n²) over the star pool. Hosts skip it on mobile to bound the cost.

use glam::Vec2;

use crate::api::config::SimConfig;
use crate::components::ripple::Ripple;
use crate::components::star::Star;
use crate::renderer::draw_list::DrawList;

/// Distances below this are treated as this, so coincident stars still get a
/// finite separation normal.
pub const MIN_DISTANCE: f32 = 1e-3;

/// A cosmetic line between two nearby stars, recorded for this frame only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

impl Link {
    pub const LINE_WIDTH: f32 = 0.5;

    pub fn draw(&self, list: &mut DrawList) {
        list.link(self.from, self.to, Self::LINE_WIDTH, self.alpha);
    }
}

/// Link opacity for a pair `distance` apart. Zero at and beyond the threshold.
pub fn link_alpha(distance: f32, config: &SimConfig) -> f32 {
    if distance >= config.link_distance {
        return 0.0;
    }
    (config.link_alpha - distance / config.link_falloff).max(0.0)
}

/// Visit every unordered pair once. Links go into `links`, contact ripples
/// into `ripples`; touching pairs are pushed apart and swap velocities.
pub fn resolve_collisions(
    stars: &mut [Star],
    config: &SimConfig,
    links: &mut Vec<Link>,
    ripples: &mut Vec<Ripple>,
) {
    let n = stars.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = stars.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let offset = a.pos - b.pos;
            let distance = offset.length();

            let alpha = link_alpha(distance, config);
            if alpha > 0.0 {
                links.push(Link { from: a.pos, to: b.pos, alpha });
            }

            let min_distance = a.collision_radius(b, config.collision_margin);
            if distance < min_distance {
                ripples.push(Ripple::new((a.pos + b.pos) * 0.5));
                separate(a, b, offset, distance, min_distance);
                std::mem::swap(&mut a.vel, &mut b.vel);
            }
        }
    }
}

/// Push both stars apart along their centre line by half the overlap each.
fn separate(a: &mut Star, b: &mut Star, offset: Vec2, distance: f32, min_distance: f32) {
    let normal = if distance < MIN_DISTANCE {
        Vec2::X
    } else {
        offset / distance
    };
    let overlap = min_distance - distance.max(MIN_DISTANCE);
    let push = normal * overlap * 0.5;
    a.pos += push;
    b.pos -= push;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_at(x: f32, y: f32, vel: Vec2) -> Star {
        Star::new(Vec2::new(x, y), vel, 1.0)
    }

    #[test]
    fn touching_pair_spawns_ripple_at_midpoint() {
        let mut stars = vec![
            star_at(100.0, 100.0, Vec2::new(1.0, 0.0)),
            star_at(102.0, 100.0, Vec2::new(-2.0, 3.0)),
        ];
        let mut links = Vec::new();
        let mut ripples = Vec::new();
        resolve_collisions(&mut stars, &SimConfig::default(), &mut links, &mut ripples);

        assert_eq!(ripples.len(), 1);
        assert_eq!(ripples[0].pos, Vec2::new(101.0, 100.0));
    }

    #[test]
    fn collision_swaps_velocities_and_conserves_sum() {
        let va = Vec2::new(1.5, -0.5);
        let vb = Vec2::new(-3.0, 2.0);
        let mut stars = vec![star_at(50.0, 50.0, va), star_at(51.0, 51.0, vb)];
        let before = stars[0].vel + stars[1].vel;
        resolve_collisions(&mut stars, &SimConfig::default(), &mut Vec::new(), &mut Vec::new());

        assert_eq!(stars[0].vel, vb);
        assert_eq!(stars[1].vel, va);
        assert_eq!(stars[0].vel + stars[1].vel, before);
    }

    #[test]
    fn separation_reaches_collision_radius() {
        let mut stars = vec![
            star_at(200.0, 200.0, Vec2::ZERO),
            star_at(201.0, 200.5, Vec2::ZERO),
        ];
        let config = SimConfig::default();
        let min_distance = stars[0].collision_radius(&stars[1], config.collision_margin);
        resolve_collisions(&mut stars, &config, &mut Vec::new(), &mut Vec::new());

        let after = stars[0].pos.distance(stars[1].pos);
        assert!(after >= min_distance - 1e-4, "distance after correction was {}", after);
    }

    #[test]
    fn coincident_stars_stay_finite() {
        let mut stars = vec![
            star_at(10.0, 10.0, Vec2::new(1.0, 1.0)),
            star_at(10.0, 10.0, Vec2::new(-1.0, 0.0)),
        ];
        let mut ripples = Vec::new();
        resolve_collisions(&mut stars, &SimConfig::default(), &mut Vec::new(), &mut ripples);

        assert_eq!(ripples.len(), 1);
        for s in &stars {
            assert!(s.pos.is_finite(), "position became {:?}", s.pos);
        }
        assert!(stars[0].pos.distance(stars[1].pos) > 3.9);
    }

    #[test]
    fn near_pair_links_without_colliding() {
        let mut stars = vec![
            star_at(0.0, 0.0, Vec2::new(1.0, 0.0)),
            star_at(30.0, 40.0, Vec2::new(0.0, 1.0)),
        ];
        let mut links = Vec::new();
        let mut ripples = Vec::new();
        resolve_collisions(&mut stars, &SimConfig::default(), &mut links, &mut ripples);

        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.025).abs() < 1e-6);
        assert!(ripples.is_empty());
        assert_eq!(stars[0].vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn far_pair_is_untouched() {
        let mut stars = vec![star_at(0.0, 0.0, Vec2::ZERO), star_at(500.0, 0.0, Vec2::ZERO)];
        let mut links = Vec::new();
        let mut ripples = Vec::new();
        resolve_collisions(&mut stars, &SimConfig::default(), &mut links, &mut ripples);
        assert!(links.is_empty());
        assert!(ripples.is_empty());
    }

    #[test]
    fn link_alpha_falls_off_linearly() {
        let config = SimConfig::default();
        assert!((link_alpha(0.0, &config) - 0.05).abs() < 1e-6);
        assert!((link_alpha(50.0, &config) - 0.025).abs() < 1e-6);
        assert_eq!(link_alpha(100.0, &config), 0.0);
        assert_eq!(link_alpha(250.0, &config), 0.0);
    }

    #[test]
    fn every_pair_visited_once() {
        // Three stars within link range: three links, one per unordered pair.
        let mut stars = vec![
            star_at(0.0, 0.0, Vec2::ZERO),
            star_at(20.0, 0.0, Vec2::ZERO),
            star_at(0.0, 20.0, Vec2::ZERO),
        ];
        let mut links = Vec::new();
        resolve_collisions(&mut stars, &SimConfig::default(), &mut links, &mut Vec::new());
        assert_eq!(links.len(), 3);
    }
}
