use glyph_swarm::{InputEvent, InputQueue, MaskRasterizer, Swarm, SwarmApp, VectorRasterizer};

/// Generic swarm runner that wires an app into the frame loop.
///
/// Each concrete app creates a `thread_local!` SwarmRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. The rasterizer decides where content masks come
/// from: the built-in vector one, or a host canvas.
pub struct SwarmRunner<A: SwarmApp, R: MaskRasterizer = VectorRasterizer> {
    app: A,
    swarm: Swarm<R>,
    input: InputQueue,
}

impl<A: SwarmApp> SwarmRunner<A> {
    /// Build the swarm with the built-in rasterizer.
    pub fn new(app: A, width: u32, height: u32, seed: u64) -> Self {
        Self::with_rasterizer(app, VectorRasterizer, width, height, seed)
    }
}

impl<A: SwarmApp, R: MaskRasterizer> SwarmRunner<A, R> {
    /// Build the swarm from the app's config and playlist. The first
    /// playlist item is formed immediately.
    pub fn with_rasterizer(app: A, rasterizer: R, width: u32, height: u32, seed: u64) -> Self {
        let swarm = Swarm::with_rasterizer(app.config(), app.playlist(), rasterizer, width, height, seed);
        Self {
            app,
            swarm,
            input: InputQueue::new(),
        }
    }

    /// Push an input event into the queue. Applied on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, then advance and draw the swarm.
    pub fn tick(&mut self, now_ms: f64) {
        self.swarm.handle_input(&self.input, now_ms);
        self.input.drain();
        self.swarm.tick(now_ms);
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn swarm(&self) -> &Swarm<R> {
        &self.swarm
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn glyphs_ptr(&self) -> *const f32 {
        self.swarm.buffer().instances_ptr()
    }

    pub fn glyph_count(&self) -> u32 {
        self.swarm.buffer().instance_count()
    }

    /// Copy of the packed glyph instances, for hosts without shared memory.
    pub fn glyph_floats(&self) -> Vec<f32> {
        self.swarm.buffer().as_floats().to_vec()
    }

    pub fn trail_alpha(&self) -> f32 {
        self.swarm.config().trail_alpha
    }

    pub fn viewport_width(&self) -> u32 {
        self.swarm.viewport().0
    }

    pub fn viewport_height(&self) -> u32 {
        self.swarm.viewport().1
    }
}
