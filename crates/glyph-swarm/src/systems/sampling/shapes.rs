//! Procedural silhouettes: dog, cat, heart and star.
//!
//! Each shape is a fixed composition of filled ellipses, circles, polygons and
//! cubic curves, centered on the viewport at a fixed scale. Pure function of
//! the shape name and viewport size.

use std::f32::consts::{PI, TAU};
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use tiny_skia::PathBuilder;

use super::raster::MaskCanvas;

/// Base size of every silhouette, in world units.
pub const SHAPE_SCALE: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Dog,
    Cat,
    Heart,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [Self::Dog, Self::Cat, Self::Heart, Self::Star];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Dog => "dog",
            ShapeKind::Cat => "cat",
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill the silhouette for `kind` into the canvas, centered on the canvas.
pub fn draw_shape(canvas: &mut MaskCanvas, kind: ShapeKind) {
    let center = Vec2::new(canvas.width() as f32 / 2.0, canvas.height() as f32 / 2.0);
    match kind {
        ShapeKind::Dog => draw_dog(canvas, center, SHAPE_SCALE),
        ShapeKind::Cat => draw_cat(canvas, center, SHAPE_SCALE),
        ShapeKind::Heart => draw_heart(canvas, center, SHAPE_SCALE * 1.2),
        ShapeKind::Star => draw_star(canvas, center, SHAPE_SCALE * 1.3),
    }
}

fn draw_dog(canvas: &mut MaskCanvas, c: Vec2, s: f32) {
    // Body, head, snout
    canvas.fill_ellipse(c + Vec2::new(20.0, 0.0), Vec2::new(s * 1.2, s * 0.8), 0.0);
    canvas.fill_circle(c + Vec2::new(-s * 0.6, -s * 0.7), s * 0.5);
    canvas.fill_ellipse(c + Vec2::new(-s * 0.9, -s * 0.4), Vec2::new(s * 0.3, s * 0.25), 0.0);

    // Floppy ears
    canvas.fill_ellipse(c + Vec2::new(-s * 1.0, -s * 1.2), Vec2::new(s * 0.3, s * 0.5), -0.3);
    canvas.fill_ellipse(c + Vec2::new(-s * 0.2, -s * 1.15), Vec2::new(s * 0.3, s * 0.5), 0.3);

    for i in 0..4 {
        let leg = c + Vec2::new(-s * 0.2 + i as f32 * s * 0.35, s * 0.6);
        canvas.fill_ellipse(leg, Vec2::new(s * 0.15, s * 0.4), 0.0);
    }

    canvas.fill_ellipse(c + Vec2::new(s * 0.9, -s * 0.2), Vec2::new(s * 0.25, s * 0.6), 0.4);
}

fn draw_cat(canvas: &mut MaskCanvas, c: Vec2, s: f32) {
    canvas.fill_ellipse(c + Vec2::new(10.0, 0.0), Vec2::new(s * 1.1, s * 0.75), 0.0);
    canvas.fill_circle(c + Vec2::new(-s * 0.55, -s * 0.65), s * 0.45);
    canvas.fill_circle(c + Vec2::new(-s * 0.85, -s * 0.45), s * 0.2);

    // Pointed ears
    canvas.fill_polygon(&[
        c + Vec2::new(-s * 0.8, -s * 1.2),
        c + Vec2::new(-s * 0.55, -s * 0.75),
        c + Vec2::new(-s * 0.95, -s * 0.85),
    ]);
    canvas.fill_polygon(&[
        c + Vec2::new(-s * 0.3, -s * 1.2),
        c + Vec2::new(-s * 0.05, -s * 0.75),
        c + Vec2::new(-s * 0.45, -s * 0.85),
    ]);

    for i in 0..4 {
        let leg = c + Vec2::new(-s * 0.25 + i as f32 * s * 0.3, s * 0.55);
        canvas.fill_ellipse(leg, Vec2::new(s * 0.12, s * 0.35), 0.0);
    }

    canvas.fill_ellipse(c + Vec2::new(s * 0.8, -s * 0.15), Vec2::new(s * 0.2, s * 0.65), 0.5);
}

fn draw_heart(canvas: &mut MaskCanvas, c: Vec2, hs: f32) {
    let at = |dx: f32, dy: f32| (c.x + dx * hs, c.y + dy * hs);

    let mut builder = PathBuilder::new();
    let (x, y) = at(0.0, 0.4);
    builder.move_to(x, y);
    for [(x1, y1), (x2, y2), (x, y)] in [
        [at(-1.0, -0.2), at(-1.0, -0.6), at(-0.3, -0.6)],
        [at(0.0, -1.0), at(0.0, -1.0), at(0.0, -0.6)],
        [at(0.0, -1.0), at(0.0, -1.0), at(0.3, -0.6)],
        [at(1.0, -0.6), at(1.0, -0.2), at(0.0, 0.4)],
    ] {
        builder.cubic_to(x1, y1, x2, y2, x, y);
    }
    builder.close();

    match builder.finish() {
        Some(path) => canvas.fill_path(&path),
        None => log::warn!("heart path at {:?} is empty", c),
    }
}

/// Star outline: each outer point (stepping 144 degrees) is followed by an
/// inner vertex at 0.4 radius, 72 degrees further on. Filled non-zero.
pub fn star_outline(center: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(10);
    for i in 0..5 {
        let angle = (i as f32 * 4.0 * PI) / 5.0 - PI / 2.0;
        points.push(center + Vec2::new(angle.cos(), angle.sin()) * radius);

        let inner = angle + TAU / 5.0;
        points.push(center + Vec2::new(inner.cos(), inner.sin()) * radius * 0.4);
    }
    points
}

fn draw_star(canvas: &mut MaskCanvas, c: Vec2, radius: f32) {
    canvas.fill_polygon(&star_outline(c, radius));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::sampling::mask::AlphaMask;

    fn render(kind: ShapeKind, w: u32, h: u32) -> AlphaMask {
        let mut canvas = MaskCanvas::new(w, h);
        draw_shape(&mut canvas, kind);
        canvas.into_mask()
    }

    #[test]
    fn every_shape_covers_viewport_center() {
        for kind in ShapeKind::ALL {
            let mask = render(kind, 800, 600);
            assert!(mask.opaque_pixels() > 1000, "{} drew too little", kind);
            assert_eq!(mask.alpha(0, 0), Some(0), "{} touched the corner", kind);
        }
        // Heart and star are symmetric about the center column
        assert_eq!(render(ShapeKind::Star, 800, 600).alpha(400, 300), Some(255));
        assert_eq!(render(ShapeKind::Heart, 800, 600).alpha(400, 250), Some(255));
    }

    #[test]
    fn shapes_are_deterministic() {
        for kind in ShapeKind::ALL {
            assert_eq!(render(kind, 400, 400), render(kind, 400, 400));
        }
    }

    #[test]
    fn dog_and_cat_heads_sit_up_and_left() {
        for kind in [ShapeKind::Dog, ShapeKind::Cat] {
            let mask = render(kind, 800, 600);
            // Head center is left of and above the body
            let head = (400.0 - SHAPE_SCALE * 0.55) as i64;
            let head_y = (300.0 - SHAPE_SCALE * 0.65) as i64;
            assert_eq!(mask.alpha(head, head_y), Some(255), "{} head missing", kind);
        }
    }

    #[test]
    fn star_outline_alternates_radii() {
        let pts = star_outline(Vec2::ZERO, 100.0);
        assert_eq!(pts.len(), 10);
        for (i, p) in pts.iter().enumerate() {
            let expected = if i % 2 == 0 { 100.0 } else { 40.0 };
            assert!((p.length() - expected).abs() < 1e-3);
        }
        // First point is straight up (y-down coordinates)
        assert!((pts[0].y + 100.0).abs() < 1e-3);
    }

    #[test]
    fn shape_names_round_trip_through_serde() {
        let kind: ShapeKind = serde_json::from_str("\"heart\"").unwrap();
        assert_eq!(kind, ShapeKind::Heart);
        assert!(serde_json::from_str::<ShapeKind>("\"unicorn\"").is_err());
    }
}
