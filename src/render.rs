use crate::dom;
use scrollseq_core::ParticleBurst;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas the particle burst is drawn on, centered on the canvas.
pub struct BurstCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dirty: bool,
}

impl BurstCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);
        Ok(Self {
            canvas,
            ctx,
            dirty: false,
        })
    }

    pub fn resize(&self) {
        dom::sync_canvas_backing_size(&self.canvas);
    }

    pub fn draw(&mut self, burst: Option<&ParticleBurst>) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let Some(burst) = burst else {
            // clear once after the last particle frame
            if self.dirty {
                self.ctx.clear_rect(0.0, 0.0, w, h);
                self.dirty = false;
            }
            return;
        };
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_global_alpha(burst.alpha() as f64);
        for p in &burst.particles {
            let x = w * 0.5 + p.position.x as f64 * dpr;
            let y = h * 0.5 + p.position.y as f64 * dpr;
            self.ctx.set_fill_style_str(&p.color.to_string());
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, p.radius as f64 * dpr, 0.0, TAU);
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.dirty = false;
    }
}
