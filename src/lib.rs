//! Animated particle background for a portfolio landing page.
//!
//! A fixed pool of softly glowing particles drifts across a canvas, fades out
//! over its lifetime and is replaced in place, while nearby particles are joined
//! by faint lines. The engine is generic over its drawing surface and random
//! source; on `wasm32` the `web` module binds it to an `HtmlCanvasElement`.

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod orbs;
pub mod particle;
pub mod surface;
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use color::Color;
pub use config::{EngineConfig, ParticleRanges};
pub use engine::{link_opacity, wrap_coordinate, Bounds, EngineState, ParticleEngine};
pub use error::{EngineError, EngineResult};
pub use frame_loop::{FrameLoop, FrameScheduler};
pub use orbs::{orb_layout, orb_placement, OrbPlacement};
pub use particle::Particle;
pub use surface::{DrawCommand, RecordingSurface, Surface};
#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, ParticleCanvas, RafScheduler};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging(log::Level::Info);
}
