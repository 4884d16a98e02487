use std::f64::consts::TAU;

use glam::Vec2;
use starfield::Surface;
use web_sys::CanvasRenderingContext2d;

fn white(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {})", alpha)
}

/// Canvas 2D implementation of the starfield `Surface`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_square(&mut self, pos: Vec2, size: f32, alpha: f32) {
        self.ctx.set_fill_style_str(&white(alpha));
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size as f64, size as f64);
    }

    fn stroke_ring(&mut self, center: Vec2, radius: f32, line_width: f32, alpha: f32) {
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.set_stroke_style_str(&white(alpha));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&white(alpha));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_streak(&mut self, head: Vec2, tail: Vec2, line_width: f32, alpha: f32) {
        let gradient = self.ctx.create_linear_gradient(
            head.x as f64,
            head.y as f64,
            tail.x as f64,
            tail.y as f64,
        );
        let stops = gradient
            .add_color_stop(0.0, &white(alpha))
            .and_then(|_| gradient.add_color_stop(1.0, &white(0.0)));
        if let Err(err) = stops {
            log::warn!("gradient stop failed: {:?}", err);
            return;
        }

        self.ctx.begin_path();
        self.ctx.move_to(head.x as f64, head.y as f64);
        self.ctx.line_to(tail.x as f64, tail.y as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }
}
