//! WASM bridge: mounts the starfield onto a `<canvas>` and drives it with
//! `requestAnimationFrame`.
//!
//! ```js
//! import init, { mount_background, unmount_background } from "starfield_web";
//! await init();
//! mount_background("bg-canvas");          // on mount
//! unmount_background();                   // on unmount
//! ```

pub mod canvas;
pub mod runner;
pub mod scheduler;

use std::cell::RefCell;

use starfield::SimConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

pub use runner::BackgroundView;

thread_local! {
    static VIEW: RefCell<Option<BackgroundView>> = RefCell::new(None);
}

/// Run `f` against the mounted view, if any.
fn with_view<R>(f: impl FnOnce(&mut BackgroundView) -> R) -> Option<R> {
    VIEW.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Mount the background on the canvas with id `canvas_id`. `config_json` is an
/// optional partial `SimConfig` document. Mounting again replaces the old view.
#[wasm_bindgen]
pub fn mount_background(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    unmount_background();

    let config = match config_json {
        Some(json) => SimConfig::from_json(&json).map_err(|err| {
            log::error!("starfield: invalid config: {}", err);
            JsValue::from_str(&format!("invalid config: {}", err))
        })?,
        None => SimConfig::default(),
    };

    let on_frame = Closure::<dyn FnMut(f64)>::new(|timestamp: f64| {
        with_view(|v| v.on_frame(timestamp));
    });
    let on_resize = Closure::<dyn FnMut()>::new(|| {
        with_view(|v| v.resize());
    });

    let view = BackgroundView::mount(canvas_id, config, on_frame, on_resize).map_err(|err| {
        log::error!("starfield: mount failed: {:?}", err);
        err
    })?;
    let stars = view.star_count();
    VIEW.with(|cell| {
        *cell.borrow_mut() = Some(view);
    });
    log::info!("starfield: mounted with {} stars", stars);
    Ok(())
}

/// Tear down the mounted view: removes the resize listener and cancels the
/// pending animation frame. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount_background() {
    let view = VIEW.with(|cell| cell.borrow_mut().take());
    if let Some(mut view) = view {
        view.unmount();
        log::info!("starfield: unmounted");
    }
}

#[wasm_bindgen]
pub fn background_star_count() -> u32 {
    with_view(|v| v.star_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn background_frames_drawn() -> u32 {
    with_view(|v| v.frames_drawn()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn background_is_animating() -> bool {
    with_view(|v| v.is_animating()).unwrap_or(false)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_draw_commands_ptr() -> *const f32 {
    with_view(|v| v.draw_commands_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_draw_command_count() -> u32 {
    with_view(|v| v.draw_command_count()).unwrap_or(0)
}
