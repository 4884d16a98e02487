//! Surface trait for hosts that rasterize the draw list.
//!
//! The core never touches a canvas. The web bridge implements this trait for
//! `CanvasRenderingContext2d`; a native host could implement it for any 2D
//! backend. All primitives draw in white; `alpha` is already clamped to [0, 1].

use glam::Vec2;

/// A 2D drawing target.
///
/// # Example Implementation
///
/// ```ignore
/// struct Canvas2dSurface { ctx: web_sys::CanvasRenderingContext2d }
///
/// impl Surface for Canvas2dSurface {
///     fn clear(&mut self, w: f32, h: f32) {
///         self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
///     }
///     // ...
/// }
/// ```
pub trait Surface {
    /// Erase the rectangle (0, 0)-(width, height).
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a square with its top-left corner at `pos`.
    fn fill_square(&mut self, pos: Vec2, size: f32, alpha: f32);

    /// Stroke a circle outline.
    fn stroke_ring(&mut self, center: Vec2, radius: f32, line_width: f32, alpha: f32);

    /// Stroke a solid line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, alpha: f32);

    /// Stroke a line with a linear gradient from `alpha` at `head` to 0 at `tail`.
    fn stroke_streak(&mut self, head: Vec2, tail: Vec2, line_width: f32, alpha: f32);
}

/// Surface that records (kind, alpha) for each call. Test-only.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<(super::draw_list::DrawKind, f32)>,
    pub clears: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
        self.calls.push((super::draw_list::DrawKind::Clear, 1.0));
    }

    fn fill_square(&mut self, _pos: Vec2, _size: f32, alpha: f32) {
        self.calls.push((super::draw_list::DrawKind::Dot, alpha));
    }

    fn stroke_ring(&mut self, _center: Vec2, _radius: f32, _line_width: f32, alpha: f32) {
        self.calls.push((super::draw_list::DrawKind::Ring, alpha));
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _line_width: f32, alpha: f32) {
        self.calls.push((super::draw_list::DrawKind::Link, alpha));
    }

    fn stroke_streak(&mut self, _head: Vec2, _tail: Vec2, _line_width: f32, alpha: f32) {
        self.calls.push((super::draw_list::DrawKind::Streak, alpha));
    }
}
