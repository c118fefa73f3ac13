use wasm_bindgen::prelude::*;
use glyph_swarm::*;

mod app;
use app::WordMorph;

glyph_swarm_web::export_swarm!(WordMorph, "word-morph");
