//! Glyph selection: brightness quantization or flickering noise.

use super::rng::Rng;
use crate::api::config::GlyphMode;

/// Resolved glyph strategy, with the configured strings split into chars once.
#[derive(Debug, Clone)]
pub enum GlyphSet {
    Palette(Vec<char>),
    Noise { alphabet: Vec<char>, reroll_chance: f32 },
}

impl GlyphSet {
    pub fn from_mode(mode: &GlyphMode) -> Self {
        match mode {
            GlyphMode::Palette { palette } => GlyphSet::Palette(non_empty(palette)),
            GlyphMode::Noise { alphabet, reroll_chance } => GlyphSet::Noise {
                alphabet: non_empty(alphabet),
                reroll_chance: *reroll_chance,
            },
        }
    }

    /// Glyph for a freshly constructed particle.
    pub fn initial(&self, weight: f32, rng: &mut Rng) -> char {
        match self {
            GlyphSet::Palette(palette) => glyph_for_weight(palette, weight),
            GlyphSet::Noise { alphabet, .. } => random_glyph(alphabet, rng),
        }
    }

    /// Glyph to draw this frame.
    pub fn refresh(&self, current: char, weight: f32, rng: &mut Rng) -> char {
        match self {
            GlyphSet::Palette(palette) => glyph_for_weight(palette, weight),
            GlyphSet::Noise { alphabet, reroll_chance } => {
                if rng.chance(*reroll_chance) {
                    random_glyph(alphabet, rng)
                } else {
                    current
                }
            }
        }
    }
}

// An empty string would leave nothing to index; fall back to a single space.
fn non_empty(s: &str) -> Vec<char> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        vec![' ']
    } else {
        chars
    }
}

/// Map a weight in [0, 1] onto the palette: `floor(weight * (len - 1))`, clamped.
pub fn glyph_for_weight(palette: &[char], weight: f32) -> char {
    let last = palette.len().saturating_sub(1);
    let index = (weight * last as f32).floor();
    let index = if index.is_nan() || index < 0.0 {
        0
    } else {
        (index as usize).min(last)
    };
    palette.get(index).copied().unwrap_or(' ')
}

fn random_glyph(alphabet: &[char], rng: &mut Rng) -> char {
    let index = rng.next_int(alphabet.len() as u32) as usize;
    alphabet.get(index).copied().unwrap_or(' ')
}
