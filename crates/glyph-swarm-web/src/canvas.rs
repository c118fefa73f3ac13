use glyph_swarm::{AlphaMask, ContentItem, MaskRasterizer, VectorRasterizer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Rasterizes text with the browser's own font engine.
///
/// Text is drawn with `fillText` in a bold monospace face, centered with a
/// middle baseline, onto a detached canvas the size of the viewport, and the
/// alpha channel is read back. Shapes go through the built-in vector
/// rasterizer. Any canvas failure is logged and falls back to it as well.
#[derive(Debug, Default)]
pub struct CanvasRasterizer {
    fallback: VectorRasterizer,
}

impl CanvasRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_text(&self, text: &str, width: u32, height: u32, font_size: f32) -> Result<AlphaMask, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        ctx.set_font(&format!("bold {}px monospace", font_size));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(text, width as f64 / 2.0, height as f64 / 2.0)?;

        let rgba = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?.data();
        let alpha = rgba.0.chunks_exact(4).map(|px| px[3]).collect();
        AlphaMask::from_alpha(width, height, alpha)
            .ok_or_else(|| JsValue::from_str("image data does not match the viewport"))
    }
}

impl MaskRasterizer for CanvasRasterizer {
    fn rasterize(&mut self, content: &ContentItem, width: u32, height: u32, font_size: f32) -> AlphaMask {
        match content {
            ContentItem::Text(text) => match self.render_text(text, width, height, font_size) {
                Ok(mask) => mask,
                Err(err) => {
                    log::warn!("canvas text rasterization failed ({:?}); using built-in font", err);
                    self.fallback.rasterize(content, width, height, font_size)
                }
            },
            ContentItem::Shape(_) => self.fallback.rasterize(content, width, height, font_size),
        }
    }
}
