use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::api::types::GlyphColor;

/// One glyph to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub glyph: char,
    pub position: Vec2,
    /// Monospace font size in pixels.
    pub font_size: f32,
    pub color: GlyphColor,
}

/// Per-glyph record read straight out of wasm memory by the host.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GlyphInstance {
    pub x: f32,
    pub y: f32,
    /// Unicode scalar value of the glyph.
    pub code: f32,
    pub font_size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl GlyphInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&DrawCommand> for GlyphInstance {
    fn from(cmd: &DrawCommand) -> Self {
        GlyphInstance {
            x: cmd.position.x,
            y: cmd.position.y,
            code: cmd.glyph as u32 as f32,
            font_size: cmd.font_size,
            r: cmd.color.r,
            g: cmd.color.g,
            b: cmd.color.b,
            a: cmd.color.a,
        }
    }
}

/// Draw commands for one frame, in particle slot order.
pub struct GlyphBuffer {
    commands: Vec<DrawCommand>,
    instances: Vec<GlyphInstance>,
}

impl GlyphBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.instances.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.instances.push(GlyphInstance::from(&command));
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for GlyphBuffer {
    fn default() -> Self {
        Self::new()
    }
}
