/// Input events the swarm understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A click/touch at (x, y). Advances the playlist.
    PointerDown { x: f32, y: f32 },
    /// The viewport changed size.
    Resize { width: u32, height: u32 },
    /// Advance the playlist without a pointer (keyboard, UI button).
    Advance,
}

/// A queue of input events.
/// The host pushes events as they arrive; the swarm applies them before each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Last known pointer position plus the squared influence radius particles read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub influence_radius: f32,
}

impl PointerState {
    pub fn new(influence_radius: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            influence_radius,
        }
    }

    /// Overwrite the position; there is no history.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}
