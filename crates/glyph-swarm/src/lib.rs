pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::app::SwarmApp;
pub use api::config::{Feel, GlyphMode, Seeding, SwarmConfig, DEFAULT_PALETTE, NOISE_ALPHABET};
pub use api::types::GlyphColor;
pub use assets::playlist::{ContentItem, Playlist};
pub use core::time::TransitionTimer;
pub use input::queue::{InputEvent, InputQueue, PointerState};
pub use renderer::instance::{DrawCommand, GlyphBuffer, GlyphInstance};
pub use systems::sampling::{
    AlphaMask, GlyphSampler, MaskCanvas, MaskRasterizer, Sample, ShapeKind, VectorRasterizer,
};
pub use systems::swarm::{
    glyph_for_weight, GlyphSet, MotionParams, Particle, ParticleFeel, ParticleState, Rng, Swarm,
};
