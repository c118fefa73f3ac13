pub mod canvas;
pub mod runner;

pub use canvas::CanvasRasterizer;
pub use runner::SwarmRunner;

#[doc(hidden)]
pub use js_sys;
#[doc(hidden)]
pub use web_sys;

/// Seed for a new swarm, drawn from the browser's `Math.random`.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

/// Generate all `#[wasm_bindgen]` exports for a swarm app.
///
/// Generates `thread_local!` storage for the SwarmRunner, a `with_runner()`
/// helper, and the exports the host page calls every frame (init, tick,
/// input handlers, glyph buffer accessors). Text masks come from the
/// browser canvas through [`CanvasRasterizer`].
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use glyph_swarm::*;
///
/// mod app;
/// use app::MyApp;
///
/// glyph_swarm_web::export_swarm!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: A type implementing `glyph_swarm::SwarmApp` with a `new()` constructor
/// - `$app_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_swarm {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SwarmRunner<$app_type, $crate::CanvasRasterizer>>> = RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::SwarmRunner<$app_type, $crate::CanvasRasterizer>) -> R,
        ) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        $crate::web_sys::console::warn_1(
                            &concat!($app_name, ": not initialized, call swarm_init() first").into(),
                        );
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn swarm_init(width: u32, height: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::SwarmRunner::with_rasterizer(
                app,
                $crate::CanvasRasterizer::new(),
                width,
                height,
                $crate::random_seed(),
            );
            let particles = runner.swarm().particle_count();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized {}x{} with {} particles", $app_name, width, height, particles);
        }

        #[wasm_bindgen]
        pub fn swarm_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn swarm_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn swarm_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn swarm_resize(width: u32, height: u32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn swarm_advance() {
            with_runner(|r| r.push_input(InputEvent::Advance));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_glyphs_ptr() -> *const f32 {
            with_runner(|r| r.glyphs_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_glyph_count() -> u32 {
            with_runner(|r| r.glyph_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_glyph_floats() -> $crate::js_sys::Float32Array {
            let floats = with_runner(|r| r.glyph_floats()).unwrap_or_default();
            $crate::js_sys::Float32Array::from(floats.as_slice())
        }

        #[wasm_bindgen]
        pub fn get_trail_alpha() -> f32 {
            with_runner(|r| r.trail_alpha()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> u32 {
            with_runner(|r| r.viewport_width()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> u32 {
            with_runner(|r| r.viewport_height()).unwrap_or(0)
        }
    };
}
