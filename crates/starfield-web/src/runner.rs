use starfield::{DeviceProfile, Lifecycle, LoopState, SimConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::scheduler::RafScheduler;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// One mounted background: the canvas, its resize listener and the lifecycle.
///
/// wasm-bindgen cannot hand a generic lifecycle to JS, so the crate keeps one
/// of these in a `thread_local!` and exports free functions around it.
pub struct BackgroundView {
    window: Window,
    canvas: HtmlCanvasElement,
    lifecycle: Lifecycle<RafScheduler, CanvasSurface>,
    on_resize: Closure<dyn FnMut()>,
    listening: bool,
}

impl BackgroundView {
    /// Bind to the canvas with id `canvas_id`, size it to the viewport and
    /// start the loop. `on_frame` and `on_resize` must route back to this view.
    pub fn mount(
        canvas_id: &str,
        config: SimConfig,
        on_frame: Closure<dyn FnMut(f64)>,
        on_resize: Closure<dyn FnMut()>,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let device = DeviceProfile::detect(width, prefers_reduced_motion(&window), &config);
        let seed = config.seed.unwrap_or_else(entropy_seed);
        log::info!(
            "starfield: mounting on #{} ({}x{}, mobile={}, reduced_motion={})",
            canvas_id, width, height, device.mobile, device.reduced_motion
        );

        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let scheduler = RafScheduler::new(window.clone(), on_frame);
        let lifecycle = Lifecycle::mount(
            config,
            device,
            width,
            height,
            seed,
            scheduler,
            CanvasSurface::new(ctx),
        );

        Ok(Self {
            window,
            canvas,
            lifecycle,
            on_resize,
            listening: true,
        })
    }

    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.lifecycle.on_frame(timestamp_ms);
    }

    /// Refit the canvas to the viewport and rebuild the star pool.
    pub fn resize(&mut self) {
        let (width, height) = viewport_size(&self.window);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.lifecycle.resize(width, height);
    }

    /// Remove the resize listener and cancel the pending frame.
    pub fn unmount(&mut self) {
        if self.listening {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove resize listener: {:?}", err);
            }
            self.listening = false;
        }
        self.lifecycle.unmount();
    }

    pub fn star_count(&self) -> u32 {
        self.lifecycle.simulation().stars().len() as u32
    }

    pub fn frames_drawn(&self) -> u32 {
        self.lifecycle.frames_drawn() as u32
    }

    pub fn is_animating(&self) -> bool {
        self.lifecycle.state() == LoopState::Animating
    }

    // ---- Pointer accessors for hosts that read the draw list directly ----

    pub fn draw_commands_ptr(&self) -> *const f32 {
        self.lifecycle.draw_list().commands_ptr()
    }

    pub fn draw_command_count(&self) -> u32 {
        self.lifecycle.draw_list().len() as u32
    }
}

impl Drop for BackgroundView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn viewport_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::warn!("matchMedia failed: {:?}", err);
            false
        }
    }
}

fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (random << 32) ^ now
}
