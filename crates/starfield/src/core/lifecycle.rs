//! Mount / frame / resize / unmount glue between a host and the simulation.
//!
//! The host provides two primitives through `FrameScheduler`: ask for the next
//! frame callback, and cancel a pending one. Everything else is synchronous.

use std::fmt::Debug;

use crate::api::config::SimConfig;
use crate::api::types::DeviceProfile;
use crate::core::simulation::Simulation;
use crate::renderer::draw_list::DrawList;
use crate::renderer::traits::Surface;

/// Host frame scheduling (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + Debug;

    /// Ask for one future frame callback. `None` when the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancel a callback previously returned by `request_frame`.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Where the loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Requesting a frame after every callback.
    Animating,
    /// Reduced motion: one static frame is on screen, nothing is scheduled.
    Frozen,
    /// Torn down. Callbacks are ignored and nothing is ever scheduled again.
    Unmounted,
}

/// Owns the simulation for one mounted view, plus the pending frame handle.
/// Dropping it cancels that handle.
pub struct Lifecycle<S: FrameScheduler, R: Surface> {
    sim: Simulation,
    scheduler: S,
    surface: R,
    pending: Option<S::Handle>,
    draw_list: DrawList,
    state: LoopState,
    frames_drawn: u64,
}

impl<S: FrameScheduler, R: Surface> Lifecycle<S, R> {
    /// Build the simulation for a `width` x `height` surface and start the
    /// loop, or draw the single reduced-motion frame.
    pub fn mount(
        config: SimConfig,
        device: DeviceProfile,
        width: f32,
        height: f32,
        seed: u64,
        scheduler: S,
        surface: R,
    ) -> Self {
        let mut sim = Simulation::new(config, device, seed);
        sim.resize(width, height);

        let mut lifecycle = Self {
            sim,
            scheduler,
            surface,
            pending: None,
            draw_list: DrawList::new(),
            state: LoopState::Animating,
            frames_drawn: 0,
        };

        if device.reduced_motion {
            log::info!("reduced motion preferred, drawing a static frame");
            lifecycle.state = LoopState::Frozen;
            lifecycle.draw_static();
        } else {
            lifecycle.schedule();
        }
        lifecycle
    }

    /// Host frame callback. Returns true when a frame was drawn.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        self.pending = None;
        if self.state != LoopState::Animating {
            return false;
        }

        self.schedule();
        if !self.sim.advance(timestamp_ms) {
            return false;
        }

        self.sim.render(&mut self.draw_list);
        self.draw_list.replay(&mut self.surface);
        self.frames_drawn += 1;
        true
    }

    /// Surface dimensions changed. The pools are rebuilt right away so the
    /// next drawn frame matches the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state == LoopState::Unmounted {
            return;
        }
        self.sim.resize(width, height);
        if self.state == LoopState::Frozen {
            self.draw_static();
        }
    }

    /// Cancel any pending frame and stop for good.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Unmounted {
            log::debug!("unmounted after {} frames", self.frames_drawn);
        }
        self.state = LoopState::Unmounted;
    }

    fn schedule(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("host refused a frame request, stopping animation");
                self.state = LoopState::Frozen;
            }
        }
    }

    fn draw_static(&mut self) {
        self.sim.render_static(&mut self.draw_list);
        self.draw_list.replay(&mut self.surface);
        self.frames_drawn += 1;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler, R: Surface> Drop for Lifecycle<S, R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
