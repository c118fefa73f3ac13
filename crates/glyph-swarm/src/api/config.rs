use serde::{Deserialize, Serialize};

use super::types::GlyphColor;

/// Light-to-dense glyph ramp used by brightness-quantized swarms.
pub const DEFAULT_PALETTE: &str = " .',:;!*+|%S#@";

/// Alphabet for digital-noise swarms.
pub const NOISE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#$%&*+=-<>?!";

/// How a particle picks the character it draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlyphMode {
    /// Quantize the particle's current weight onto an ordered palette.
    Palette { palette: String },
    /// Random character at spawn, re-rolled with `reroll_chance` every frame.
    Noise { alphabet: String, reroll_chance: f32 },
}

impl GlyphMode {
    pub fn palette() -> Self {
        GlyphMode::Palette {
            palette: DEFAULT_PALETTE.to_string(),
        }
    }

    pub fn noise() -> Self {
        GlyphMode::Noise {
            alphabet: NOISE_ALPHABET.to_string(),
            reroll_chance: 0.05,
        }
    }
}

/// Where a newly created particle starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Seeding {
    /// Random offset of `min_offset..max_offset` units around the target.
    NearTarget { min_offset: f32, max_offset: f32 },
    /// Uniformly random point anywhere in the viewport.
    Viewport,
}

impl Seeding {
    pub const fn near_target() -> Self {
        Seeding::NearTarget {
            min_offset: 3.0,
            max_offset: 18.0,
        }
    }
}

/// Spring (`ease`) and velocity damping (`friction`) coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feel {
    /// Every particle shares the same coefficients.
    Fixed { ease: f32, friction: f32 },
    /// Each particle draws its own coefficients once, at construction.
    Randomized { ease: (f32, f32), friction: (f32, f32) },
}

impl Feel {
    pub const fn fixed() -> Self {
        Feel::Fixed {
            ease: 0.25,
            friction: 0.7,
        }
    }

    pub const fn randomized() -> Self {
        Feel::Randomized {
            ease: (0.005, 0.055),
            friction: (0.05, 0.95),
        }
    }
}

/// Configuration for a swarm. Every field has a default, so a JSON
/// document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Sampling grid stride in pixels; also the glyph font size (default: 6).
    pub grid_pitch: u32,
    /// Font size used when rasterizing text content (default: 100).
    pub font_size: f32,
    /// Squared distance below which the repulsion impulse applies (default: 20000).
    pub influence_radius: f32,
    /// Milliseconds between automatic playlist transitions (default: 3000).
    pub transition_interval_ms: f64,
    pub glyph_mode: GlyphMode,
    pub seeding: Seeding,
    pub feel: Feel,
    /// Whether particles snap to their target and stop once close enough.
    pub settle: bool,
    /// Fraction of the remaining weight gap closed each tick (default: 0.15).
    pub weight_easing: f32,
    /// Squared distance under which a settling particle snaps (default: 4).
    pub settle_distance_sq: f32,
    pub color: GlyphColor,
    /// Alpha of the fade fill the host paints before each frame (default: 0.05).
    pub trail_alpha: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::settling()
    }
}

impl SwarmConfig {
    /// Brightness-aware swarm: palette glyphs, near-target spawn, settle detection.
    pub fn settling() -> Self {
        Self {
            grid_pitch: 6,
            font_size: 100.0,
            influence_radius: 20000.0,
            transition_interval_ms: 3000.0,
            glyph_mode: GlyphMode::palette(),
            seeding: Seeding::near_target(),
            feel: Feel::fixed(),
            settle: true,
            weight_easing: 0.15,
            settle_distance_sq: 4.0,
            color: GlyphColor::MUTED_GRAY,
            trail_alpha: 0.05,
        }
    }

    /// "Digital noise" swarm: flickering random glyphs flying in from anywhere
    /// in the viewport with per-particle feel and no settling.
    pub fn digital_noise(color: GlyphColor) -> Self {
        Self {
            glyph_mode: GlyphMode::noise(),
            seeding: Seeding::Viewport,
            feel: Feel::randomized(),
            settle: false,
            color,
            ..Self::settling()
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the sampling grid pitch.
    pub fn with_grid_pitch(mut self, grid_pitch: u32) -> Self {
        self.grid_pitch = grid_pitch;
        self
    }

    /// Set the text font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the pointer influence radius (squared distance).
    pub fn with_influence_radius(mut self, influence_radius: f32) -> Self {
        self.influence_radius = influence_radius;
        self
    }

    /// Set the automatic transition interval.
    pub fn with_transition_interval(mut self, ms: f64) -> Self {
        self.transition_interval_ms = ms;
        self
    }

    pub fn with_glyph_mode(mut self, glyph_mode: GlyphMode) -> Self {
        self.glyph_mode = glyph_mode;
        self
    }

    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn with_feel(mut self, feel: Feel) -> Self {
        self.feel = feel;
        self
    }

    pub fn with_settle(mut self, settle: bool) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_color(mut self, color: GlyphColor) -> Self {
        self.color = color;
        self
    }

    /// Grid pitch with zero clamped to one.
    pub fn pitch(&self) -> u32 {
        self.grid_pitch.max(1)
    }
}
