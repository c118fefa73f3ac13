use serde::{Deserialize, Serialize};

/// RGBA color for glyph drawing (components in 0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl GlyphColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Muted gray shared by every glyph of a settling swarm (#999999).
    pub const MUTED_GRAY: Self = Self::rgb(0.6, 0.6, 0.6);
    /// Default accent for digital-noise swarms (#00ff88).
    pub const ACCENT_GREEN: Self = Self::rgb(0.0, 1.0, 0.533);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for GlyphColor {
    fn default() -> Self {
        Self::MUTED_GRAY
    }
}
