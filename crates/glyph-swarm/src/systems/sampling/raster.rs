//! CPU mask rasterizer built on a tiny-skia pixmap.
//!
//! Every primitive is filled opaque white with anti-aliasing and the non-zero
//! winding rule, so edges carry fractional alpha the way a canvas fill does.
//! Only the alpha channel is kept when the canvas becomes an [`AlphaMask`].

use glam::Vec2;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

use super::mask::AlphaMask;

/// Off-screen surface that fills paths into an [`AlphaMask`].
pub struct MaskCanvas {
    width: u32,
    height: u32,
    // `None` for an empty surface; every fill is then a no-op.
    pixmap: Option<Pixmap>,
    paint: Paint<'static>,
}

impl MaskCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;

        Self {
            width,
            height,
            pixmap: Pixmap::new(width, height),
            paint,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill an arbitrary path using the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path) {
        self.fill_transformed(path, Transform::identity());
    }

    fn fill_transformed(&mut self, path: &Path, transform: Transform) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_path(path, &self.paint, FillRule::Winding, transform, None);
        }
    }

    /// Fill an ellipse rotated by `rotation` radians around its center.
    pub fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }

        let bounds = Rect::from_xywh(
            center.x - radii.x,
            center.y - radii.y,
            radii.x * 2.0,
            radii.y * 2.0,
        );
        match bounds.and_then(PathBuilder::from_oval) {
            Some(path) => {
                let transform = Transform::from_rotate_at(rotation.to_degrees(), center.x, center.y);
                self.fill_transformed(&path, transform);
            }
            None => log::warn!("skipping degenerate ellipse at {:?}", center),
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }

        match PathBuilder::from_circle(center.x, center.y, radius) {
            Some(path) => self.fill_path(&path),
            None => log::warn!("skipping degenerate circle at {:?}", center),
        }
    }

    /// Fill a closed polygon. Fewer than three points draws nothing.
    pub fn fill_polygon(&mut self, points: &[Vec2]) {
        if points.len() < 3 {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            builder.line_to(p.x, p.y);
        }
        builder.close();

        match builder.finish() {
            Some(path) => self.fill_path(&path),
            None => log::warn!("skipping degenerate polygon of {} points", points.len()),
        }
    }

    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let Some(rect) = Rect::from_xywh(pos.x, pos.y, width, height) else {
            return;
        };
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_rect(rect, &self.paint, Transform::identity(), None);
        }
    }

    /// Keep only the alpha channel.
    pub fn into_mask(self) -> AlphaMask {
        match self.pixmap {
            Some(pixmap) => {
                let alpha = pixmap.pixels().iter().map(|p| p.alpha()).collect();
                AlphaMask::from_alpha(self.width, self.height, alpha)
                    .unwrap_or_else(|| AlphaMask::new(self.width, self.height))
            }
            None => AlphaMask::new(self.width, self.height),
        }
    }
}
