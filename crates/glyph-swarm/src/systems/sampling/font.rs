//! Built-in 5x7 dot-matrix font for rasterizing text content.
//!
//! Monospace: each character advances 6 font pixels (0.6 em) and glyphs are
//! 7 font pixels tall (0.7 em), with `font_size / 10` world units per font
//! pixel. Each lit font pixel is drawn as an anti-aliased round dot slightly
//! larger than its cell, so neighbouring dots join into strokes with soft,
//! scalloped edges. Lowercase letters render as their uppercase forms.
//! Characters with no glyph still advance the cursor, so the rest of the line
//! keeps its place.

use glam::Vec2;

use super::raster::MaskCanvas;

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
/// Glyph width plus one column of spacing.
const ADVANCE_COLS: f32 = 6.0;
const PIXELS_PER_EM: f32 = 10.0;
/// Dot radius in font pixels. Above 0.5 so orthogonal neighbours overlap.
const DOT_RADIUS: f32 = 0.6;

#[rustfmt::skip]
fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],
        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],
        ' ' => [".....", ".....", ".....", ".....", ".....", ".....", "....."],
        '.' => [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."],
        ',' => [".....", ".....", ".....", ".....", ".##..", "..#..", ".#..."],
        '!' => ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."],
        '?' => [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."],
        '-' => [".....", ".....", ".....", "#####", ".....", ".....", "....."],
        '+' => [".....", "..#..", "..#..", "#####", "..#..", "..#..", "....."],
        ':' => [".....", ".##..", ".##..", ".....", ".##..", ".##..", "....."],
        '\'' => ["..#..", "..#..", ".#...", ".....", ".....", ".....", "....."],
        _ => return None,
    };
    Some(rows)
}

/// Whether the font can draw `ch` (after uppercasing).
pub fn has_glyph(ch: char) -> bool {
    glyph(ch.to_ascii_uppercase()).is_some()
}

/// One lit font pixel, as a square in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCell {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: f32,
}

impl TextCell {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Total advance width of `text` at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * ADVANCE_COLS * font_size / PIXELS_PER_EM
}

/// Lay `text` out centered on `center` (horizontally and vertically) and
/// return every lit font pixel.
pub fn layout_text(text: &str, center: Vec2, font_size: f32) -> Vec<TextCell> {
    let px = font_size / PIXELS_PER_EM;
    let advance = ADVANCE_COLS * px;
    let gutter = (ADVANCE_COLS - GLYPH_COLS as f32) * px / 2.0;
    let top = center.y - GLYPH_ROWS as f32 * px / 2.0;

    let mut cells = Vec::new();
    let mut cursor_x = center.x - text_width(text, font_size) / 2.0;

    for c in text.chars() {
        if let Some(rows) = glyph(c.to_ascii_uppercase()) {
            for (r, row) in rows.iter().enumerate() {
                for (col, bit) in row.chars().enumerate() {
                    if bit == '#' {
                        cells.push(TextCell {
                            pos: Vec2::new(
                                cursor_x + gutter + col as f32 * px,
                                top + r as f32 * px,
                            ),
                            size: px,
                        });
                    }
                }
            }
        }
        // Always advance, even for unsupported chars
        cursor_x += advance;
    }

    cells
}

/// Fill `text` into the canvas, centered on `center`.
pub fn draw_text(canvas: &mut MaskCanvas, text: &str, center: Vec2, font_size: f32) {
    if font_size <= 0.0 {
        return;
    }
    for cell in layout_text(text, center, font_size) {
        canvas.fill_circle(cell.center(), cell.size * DOT_RADIUS);
    }
}
