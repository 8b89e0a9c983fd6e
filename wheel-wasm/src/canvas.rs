use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_core::{Surface, TextAlign};

// Non-deprecated helper to set the canvas fill via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

/// Browser canvas rendition of the renderer's drawing capability.
///
/// Holds cheap JS handles, so it is rebuilt per frame from the shared state.
/// Drawing calls that return a JS-side `Result` cannot meaningfully fail once
/// the context exists, so their results are dropped.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        CanvasSurface { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_wedge(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: &str,
    ) {
        set_fill_style(&self.ctx, color);
        self.ctx.begin_path();
        self.ctx.move_to(cx, cy);
        let _ = self.ctx.arc(cx, cy, radius, start_angle, end_angle);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        set_fill_style(&self.ctx, color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx, cy, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: &str) {
        if points.is_empty() {
            return;
        }
        set_fill_style(&self.ctx, color);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].0, points[0].1);
        for p in &points[1..] {
            self.ctx.line_to(p.0, p.1);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: &str) {
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        set_fill_style(&self.ctx, color);
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let _ = self.ctx.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
