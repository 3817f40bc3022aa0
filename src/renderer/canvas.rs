//! 2D canvas renderer
//!
//! The canvas keeps its CSS size while its backing store is scaled by the
//! device pixel ratio, so cells stay crisp on high-DPI screens.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Frame, Renderer};

const BACKGROUND: &str = "white";
const GRID_LINE: &str = "#d0d0d0";
const SNAKE_BODY: &str = "green";
const SNAKE_HEAD: &str = "blue";
const FOOD: &str = "red";

pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size `canvas` to `field_size_px` CSS pixels and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, field_size_px: u32, dpr: f64) -> Result<Self, JsValue> {
        let style = canvas.style();
        style.set_property("width", &format!("{}px", field_size_px))?;
        style.set_property("height", &format!("{}px", field_size_px))?;

        let backing = (field_size_px as f64 * dpr).round() as u32;
        canvas.set_width(backing);
        canvas.set_height(backing);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        context.scale(dpr, dpr)?;

        log::info!("Canvas {}px at {}x device pixel ratio", field_size_px, dpr);
        Ok(Self { context })
    }

    fn clear(&self, size: f64) {
        self.context.set_fill_style_str(BACKGROUND);
        self.context.fill_rect(0.0, 0.0, size, size);
    }

    fn draw_grid(&self, size: f64, step: f64) {
        self.context.set_stroke_style_str(GRID_LINE);
        let mut offset = step;
        while offset < size {
            self.line(offset, 0.0, offset, size);
            self.line(0.0, offset, size, offset);
            offset += step;
        }
    }

    fn line(&self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.context.begin_path();
        self.context.move_to(x0, y0);
        self.context.line_to(x1, y1);
        self.context.stroke();
        self.context.close_path();
    }

    fn fill_cell(&self, x: i32, y: i32, cell_px: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(x as f64 * cell_px, y as f64 * cell_px, cell_px, cell_px);
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame) {
        let size = frame.field_size_px as f64;
        let cell_px = frame.cell_size_px as f64;

        self.clear(size);
        self.draw_grid(size, cell_px);

        for segment in &frame.segments {
            let color = if segment.is_head { SNAKE_HEAD } else { SNAKE_BODY };
            self.fill_cell(segment.cell.x, segment.cell.y, cell_px, color);
        }
        self.fill_cell(frame.food.x, frame.food.y, cell_px, FOOD);
    }
}
