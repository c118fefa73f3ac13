//! Content → ordered sample points.
//!
//! Content is rasterized into a viewport-sized [`AlphaMask`], then scanned on
//! a regular grid in raster order (row-major). Every grid cell with non-zero
//! alpha yields one [`Sample`]. The order matters: the swarm maps sample `i`
//! onto particle slot `i`.

use glam::Vec2;

use super::font::draw_text;
use super::mask::AlphaMask;
use super::raster::MaskCanvas;
use super::shapes::draw_shape;
use crate::assets::playlist::ContentItem;

/// Half-width of the window searched for a transparent neighbour.
pub const EDGE_SEARCH_RADIUS: i64 = 15;
/// Distance at which interior weight saturates.
pub const EDGE_FALLOFF: f32 = 20.0;
pub const MIN_EDGE_WEIGHT: f32 = 0.2;
/// Distance reported when no transparent pixel lies inside the window.
pub const NO_EDGE_DISTANCE: f32 = 999.0;
/// Text weights are compressed below this ceiling.
pub const OPACITY_CEILING: f32 = 0.8;

/// A grid-aligned point extracted from a mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Vec2,
    /// Brightness in [0, 1].
    pub weight: f32,
}

/// Produces the opacity raster for a content item.
///
/// The default [`VectorRasterizer`] draws text with the built-in dot-matrix font
/// and shapes with the shape library. Hosts with real text shaping (e.g. a
/// browser canvas) can supply their own.
pub trait MaskRasterizer {
    fn rasterize(&mut self, content: &ContentItem, width: u32, height: u32, font_size: f32) -> AlphaMask;
}

/// CPU rasterizer backed by [`MaskCanvas`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorRasterizer;

impl MaskRasterizer for VectorRasterizer {
    fn rasterize(&mut self, content: &ContentItem, width: u32, height: u32, font_size: f32) -> AlphaMask {
        let mut canvas = MaskCanvas::new(width, height);
        match content {
            ContentItem::Text(text) => {
                let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
                draw_text(&mut canvas, text, center, font_size);
            }
            ContentItem::Shape(kind) => draw_shape(&mut canvas, *kind),
        }
        canvas.into_mask()
    }
}

/// Turns content into ordered samples.
pub struct GlyphSampler<R: MaskRasterizer = VectorRasterizer> {
    rasterizer: R,
    font_size: f32,
}

impl GlyphSampler<VectorRasterizer> {
    pub fn new(font_size: f32) -> Self {
        Self::with_rasterizer(VectorRasterizer, font_size)
    }
}

impl<R: MaskRasterizer> GlyphSampler<R> {
    pub fn with_rasterizer(rasterizer: R, font_size: f32) -> Self {
        Self { rasterizer, font_size }
    }

    /// Sample `content` on a `pitch`-spaced grid over a `width` x `height` viewport.
    ///
    /// Text is weighted by opacity, shapes by distance to the silhouette edge.
    /// A mask larger than the viewport is cropped to it, so every sample lies
    /// inside `[0, width) x [0, height)`.
    pub fn sample(&mut self, content: &ContentItem, width: u32, height: u32, pitch: u32) -> Vec<Sample> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let pitch = pitch.max(1);
        let mask = self
            .rasterizer
            .rasterize(content, width, height, self.font_size)
            .cropped(width, height);
        match content {
            ContentItem::Text(_) => opacity_samples(&mask, pitch),
            ContentItem::Shape(_) => edge_distance_samples(&mask, pitch),
        }
    }
}

fn grid_cells(mask: &AlphaMask, pitch: u32) -> impl Iterator<Item = (i64, i64, u8)> + '_ {
    let step = pitch.max(1) as usize;
    (0..mask.height() as i64).step_by(step).flat_map(move |y| {
        (0..mask.width() as i64)
            .step_by(step)
            .filter_map(move |x| match mask.alpha(x, y) {
                Some(a) if a > 0 => Some((x, y, a)),
                _ => None,
            })
    })
}

/// Weight = `min(1, alpha / 255 * 0.8)`, so anti-aliased fill never reaches the
/// top of the palette.
pub fn opacity_samples(mask: &AlphaMask, pitch: u32) -> Vec<Sample> {
    grid_cells(mask, pitch)
        .map(|(x, y, alpha)| Sample {
            position: Vec2::new(x as f32, y as f32),
            weight: (alpha as f32 / 255.0 * OPACITY_CEILING).min(1.0),
        })
        .collect()
}

/// Weight = `clamp(dist / 20, 0.2, 1)` where `dist` is the distance to the
/// nearest transparent pixel in the search window. Edges come out dark and
/// interiors light.
pub fn edge_distance_samples(mask: &AlphaMask, pitch: u32) -> Vec<Sample> {
    grid_cells(mask, pitch)
        .map(|(x, y, _)| {
            let dist = nearest_transparent(mask, x, y, pitch);
            Sample {
                position: Vec2::new(x as f32, y as f32),
                weight: (dist / EDGE_FALLOFF).clamp(MIN_EDGE_WEIGHT, 1.0),
            }
        })
        .collect()
}

// Offsets step by `pitch` from -radius; pixels outside the mask are skipped.
fn nearest_transparent(mask: &AlphaMask, x: i64, y: i64, pitch: u32) -> f32 {
    let step = pitch.max(1) as i64;
    let mut min_dist = NO_EDGE_DISTANCE;
    let mut dy = -EDGE_SEARCH_RADIUS;
    while dy <= EDGE_SEARCH_RADIUS {
        let mut dx = -EDGE_SEARCH_RADIUS;
        while dx <= EDGE_SEARCH_RADIUS {
            if mask.alpha(x + dx, y + dy) == Some(0) {
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                min_dist = min_dist.min(dist);
            }
            dx += step;
        }
        dy += step;
    }
    min_dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::sampling::shapes::ShapeKind;

    /// Rasterizer that hands back a prepared mask.
    struct FixedMask(AlphaMask);

    impl MaskRasterizer for FixedMask {
        fn rasterize(&mut self, _: &ContentItem, _: u32, _: u32, _: f32) -> AlphaMask {
            self.0.clone()
        }
    }

    fn grid_count(mask: &AlphaMask, pitch: u32) -> usize {
        let mut count = 0;
        for y in (0..mask.height()).step_by(pitch as usize) {
            for x in (0..mask.width()).step_by(pitch as usize) {
                if mask.alpha(x as i64, y as i64).unwrap_or(0) > 0 {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn sample_count_matches_opaque_grid_cells() {
        let (w, h, pitch) = (400, 200, 6);
        let contents = [
            ContentItem::Text("DOG".to_string()),
            ContentItem::Shape(ShapeKind::Heart),
        ];
        for content in contents {
            let mask = VectorRasterizer.rasterize(&content, w, h, 100.0);
            let samples = GlyphSampler::new(100.0).sample(&content, w, h, pitch);

            assert!(!samples.is_empty());
            assert_eq!(samples.len(), grid_count(&mask, pitch));
            for s in &samples {
                assert!(s.position.x >= 0.0 && s.position.x < w as f32);
                assert!(s.position.y >= 0.0 && s.position.y < h as f32);
                assert_eq!(s.position.x as u32 % pitch, 0);
                assert_eq!(s.position.y as u32 % pitch, 0);
                assert!((0.0..=1.0).contains(&s.weight));
            }
        }
    }

    #[test]
    fn samples_come_out_in_raster_order() {
        let content = ContentItem::Shape(ShapeKind::Cat);
        let samples = GlyphSampler::new(100.0).sample(&content, 600, 400, 6);
        for pair in samples.windows(2) {
            let (a, b) = (pair[0].position, pair[1].position);
            assert!(a.y < b.y || (a.y == b.y && a.x < b.x), "{:?} before {:?}", a, b);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut sampler = GlyphSampler::new(100.0);
        for content in [ContentItem::Text("STAR".to_string()), ContentItem::Shape(ShapeKind::Dog)] {
            assert_eq!(sampler.sample(&content, 500, 400, 6), sampler.sample(&content, 500, 400, 6));
        }
    }

    #[test]
    fn star_edges_weigh_no_more_than_center() {
        let content = ContentItem::Shape(ShapeKind::Star);
        let samples = GlyphSampler::new(100.0).sample(&content, 200, 200, 6);
        let center = Vec2::new(100.0, 100.0);

        let centroid = samples
            .iter()
            .min_by(|a, b| {
                a.position
                    .distance_squared(center)
                    .total_cmp(&b.position.distance_squared(center))
            })
            .unwrap();
        let edge = samples
            .iter()
            .min_by(|a, b| a.weight.total_cmp(&b.weight))
            .unwrap();

        assert!(edge.weight < 1.0, "star should have edge cells inside the viewport");
        assert!(edge.weight <= centroid.weight);
        assert_eq!(centroid.weight, 1.0);
    }

    #[test]
    fn text_weight_is_compressed_opacity() {
        let content = ContentItem::Text("I".to_string());
        let samples = GlyphSampler::new(100.0).sample(&content, 200, 200, 6);
        assert!(!samples.is_empty());
        // Fully covered cells land on the 0.8 ceiling; nothing exceeds it
        assert!(samples.iter().any(|s| (s.weight - 0.8).abs() < 1e-6));
        assert!(samples.iter().all(|s| s.weight <= 0.8 + 1e-6));
    }

    #[test]
    fn text_edges_produce_a_range_of_weights() {
        let content = ContentItem::text("DOG");
        for (w, h) in [(640, 400), (1280, 720), (641, 401)] {
            let samples = GlyphSampler::new(100.0).sample(&content, w, h, 6);
            let mut weights: Vec<u32> = samples.iter().map(|s| (s.weight * 1000.0).round() as u32).collect();
            weights.sort_unstable();
            weights.dedup();

            assert!(weights.len() > 1, "{}x{}: single weight {:?}", w, h, weights);
            assert!(samples.iter().any(|s| s.weight < 0.8 - 1e-3));
            assert!(samples.iter().any(|s| (s.weight - 0.8).abs() < 1e-6));
        }
    }

    #[test]
    fn oversized_host_mask_is_cropped_to_viewport() {
        let mask = AlphaMask::from_alpha(120, 120, vec![255; 120 * 120]).unwrap();
        let mut sampler = GlyphSampler::with_rasterizer(FixedMask(mask), 100.0);
        let samples = sampler.sample(&ContentItem::text("x"), 60, 60, 6);

        assert_eq!(samples.len(), 100);
        for s in &samples {
            assert!(s.position.x < 60.0 && s.position.y < 60.0, "{:?} outside", s.position);
        }
    }

    #[test]
    fn edge_distance_uses_nearest_transparent_pixel() {
        // Opaque everywhere except column x = 3
        let mut mask = AlphaMask::from_alpha(48, 48, vec![255; 48 * 48]).unwrap();
        for y in 0..48 {
            mask.set_alpha(3, y, 0);
        }
        let samples = edge_distance_samples(&mask, 6);

        // Cell (6, 24): nearest hit at (-3, +-3) -> sqrt(18) / 20
        let cell = samples
            .iter()
            .find(|s| s.position == Vec2::new(6.0, 24.0))
            .unwrap();
        assert!((cell.weight - 18f32.sqrt() / 20.0).abs() < 1e-5);

        // Cell (42, 24) is out of reach of the window -> saturates at 1
        let far = samples
            .iter()
            .find(|s| s.position == Vec2::new(42.0, 24.0))
            .unwrap();
        assert_eq!(far.weight, 1.0);
    }

    #[test]
    fn edge_weight_has_a_floor() {
        // A single transparent pixel right next to the cell still weighs 0.2
        let mut mask = AlphaMask::from_alpha(10, 10, vec![255; 100]).unwrap();
        mask.set_alpha(1, 0, 0);
        let samples = edge_distance_samples(&mask, 1);
        let origin = samples.iter().find(|s| s.position == Vec2::ZERO).unwrap();
        assert_eq!(origin.weight, MIN_EDGE_WEIGHT);
    }

    #[test]
    fn unsupported_text_yields_no_samples() {
        let content = ContentItem::Text("€€€".to_string());
        assert!(GlyphSampler::new(100.0).sample(&content, 300, 200, 6).is_empty());
    }

    #[test]
    fn empty_viewport_yields_no_samples() {
        let content = ContentItem::Shape(ShapeKind::Heart);
        let mut sampler = GlyphSampler::new(100.0);
        assert!(sampler.sample(&content, 0, 200, 6).is_empty());
        assert!(sampler.sample(&content, 200, 0, 6).is_empty());
    }

    #[test]
    fn custom_rasterizer_is_scanned() {
        let mut mask = AlphaMask::new(30, 30);
        mask.set_alpha(12, 6, 255);
        mask.set_alpha(13, 6, 255); // off-grid, skipped
        let mut sampler = GlyphSampler::with_rasterizer(FixedMask(mask), 100.0);

        let samples = sampler.sample(&ContentItem::Text("x".to_string()), 30, 30, 6);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].position, Vec2::new(12.0, 6.0));
        assert!((samples[0].weight - 0.8).abs() < 1e-6);
    }

    #[test]
    fn zero_pitch_is_treated_as_one() {
        let mut mask = AlphaMask::new(3, 3);
        mask.set_alpha(1, 1, 255);
        let mut sampler = GlyphSampler::with_rasterizer(FixedMask(mask), 100.0);
        let samples = sampler.sample(&ContentItem::Text("x".to_string()), 3, 3, 0);
        assert_eq!(samples.len(), 1);
    }
}
