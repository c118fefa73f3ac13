//! Glyph sampling: rasterize content into an opacity mask and scan it into
//! ordered sample points.
//!
//! `raster` and `font` draw into a CPU mask, `shapes` holds the procedural
//! silhouettes, and `sampler` turns a mask into weighted grid samples.

mod mask;
mod raster;
mod font;
mod shapes;
mod sampler;

pub use mask::AlphaMask;
pub use raster::MaskCanvas;
pub use font::{draw_text, has_glyph, layout_text, text_width, TextCell};
pub use shapes::{draw_shape, star_outline, ShapeKind, SHAPE_SCALE};
pub use sampler::{
    edge_distance_samples, opacity_samples, GlyphSampler, MaskRasterizer, Sample,
    VectorRasterizer,
};
