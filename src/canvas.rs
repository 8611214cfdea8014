use glam::Vec2;
use heartfield_core::{HeartOutline, Surface};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `Surface` over a 2D canvas context, drawing in CSS pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    heart_path: Option<web::Path2d>,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, size: Vec2, pixel_ratio: f64) -> Self {
        let mut surface = Self {
            ctx,
            heart_path: None,
            size,
        };
        surface.resize(size, pixel_ratio);
        surface
    }

    /// Resizing the backing store resets the context transform, so the pixel
    /// ratio scale is applied again here.
    pub fn resize(&mut self, size: Vec2, pixel_ratio: f64) {
        self.size = size;
        if let Err(e) = self
            .ctx
            .set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)
        {
            log::warn!("[canvas] setTransform failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_heart_outline(&mut self, outline: &HeartOutline) {
        let path = match web::Path2d::new() {
            Ok(p) => p,
            Err(e) => {
                log::error!("[canvas] Path2D unavailable: {:?}", e);
                return;
            }
        };
        let mut points = outline.points().iter();
        if let Some(first) = points.next() {
            path.move_to(first.x as f64, first.y as f64);
        }
        for p in points {
            path.line_to(p.x as f64, p.y as f64);
        }
        path.close_path();
        self.heart_path = Some(path);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, factor: f32) {
        _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    #[allow(deprecated)]
    fn fill_heart(&mut self, style: &str) {
        if let Some(path) = &self.heart_path {
            self.ctx.set_fill_style(&JsValue::from_str(style));
            self.ctx.fill_with_path_2d(path);
        }
    }

    #[allow(deprecated)]
    fn stroke_heart(&mut self, style: &str, line_width: f32) {
        if let Some(path) = &self.heart_path {
            self.ctx.set_line_width(line_width as f64);
            self.ctx.set_stroke_style(&JsValue::from_str(style));
            self.ctx.stroke_with_path(path);
        }
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style(&JsValue::from_str(style));
        self.ctx.fill();
    }
}
