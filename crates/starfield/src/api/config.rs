use serde::{Deserialize, Serialize};

use crate::api::types::DeviceProfile;

/// Tunable constants for the background simulation.
/// Every field has a default, so a host may pass a partial JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Frame-rate ceiling (default: 60).
    pub target_fps: f32,
    /// Largest delta fed to entity updates, in seconds (default: 0.1).
    pub max_delta: f32,
    /// Viewport width in px below which the device counts as mobile (default: 768).
    pub mobile_breakpoint: f32,
    /// Ambient stars on desktop viewports (default: 120).
    pub desktop_star_count: usize,
    /// Ambient stars on mobile viewports (default: 40).
    pub mobile_star_count: usize,
    /// Pairs closer than this get a connecting line (default: 100).
    pub link_distance: f32,
    /// Link opacity at zero distance (default: 0.05).
    pub link_alpha: f32,
    /// Link opacity falls off as `link_alpha - distance / link_falloff` (default: 2000).
    pub link_falloff: f32,
    /// Added to the two star sizes to form the collision radius (default: 2).
    pub collision_margin: f32,
    /// Expected shooting stars per second (default: 0.15).
    pub shooting_star_rate: f32,
    /// Fixed RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            max_delta: 0.1,
            mobile_breakpoint: 768.0,
            desktop_star_count: 120,
            mobile_star_count: 40,
            link_distance: 100.0,
            link_alpha: 0.05,
            link_falloff: 2000.0,
            collision_margin: 2.0,
            shooting_star_rate: 0.15,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Lowest accepted frame-rate ceiling. Below this the loop barely ticks.
    pub const MIN_FPS: f32 = 1.0;
    /// Upper bound on either star count; the collision pass is O(n²).
    pub const MAX_STARS: usize = 2000;

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace values that would break pacing or decay with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.target_fps.is_finite() && self.target_fps >= Self::MIN_FPS) {
            log::warn!("invalid target_fps {}, using {}", self.target_fps, defaults.target_fps);
            self.target_fps = defaults.target_fps;
        }
        if !(self.max_delta.is_finite() && self.max_delta > 0.0) {
            log::warn!("invalid max_delta {}, using {}", self.max_delta, defaults.max_delta);
            self.max_delta = defaults.max_delta;
        }
        if !(self.link_falloff.is_finite() && self.link_falloff > 0.0) {
            log::warn!("invalid link_falloff {}, using {}", self.link_falloff, defaults.link_falloff);
            self.link_falloff = defaults.link_falloff;
        }
        if !(self.collision_margin.is_finite() && self.collision_margin >= 0.0) {
            log::warn!(
                "invalid collision_margin {}, using {}",
                self.collision_margin, defaults.collision_margin
            );
            self.collision_margin = defaults.collision_margin;
        }
        if self.desktop_star_count > Self::MAX_STARS {
            log::warn!(
                "desktop_star_count {} too large, capping at {}",
                self.desktop_star_count, Self::MAX_STARS
            );
            self.desktop_star_count = Self::MAX_STARS;
        }
        if self.mobile_star_count > Self::MAX_STARS {
            log::warn!(
                "mobile_star_count {} too large, capping at {}",
                self.mobile_star_count, Self::MAX_STARS
            );
            self.mobile_star_count = Self::MAX_STARS;
        }
        if !self.shooting_star_rate.is_finite() || self.shooting_star_rate < 0.0 {
            log::warn!("invalid shooting_star_rate {}, disabling", self.shooting_star_rate);
            self.shooting_star_rate = 0.0;
        }
        self
    }

    /// Minimum milliseconds between executed ticks.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps as f64
    }

    /// Ambient star count for the given device class.
    pub fn star_count(&self, device: &DeviceProfile) -> usize {
        if device.mobile {
            self.mobile_star_count
        } else {
            self.desktop_star_count
        }
    }
}
