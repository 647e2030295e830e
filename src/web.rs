// Browser binding: draws the particle field on an HtmlCanvasElement with the 2d
// context, driven by requestAnimationFrame and refitted on window resize

use crate::color::Color;
use crate::config::EngineConfig;
use crate::engine::ParticleEngine;
use crate::error::EngineError;
use crate::frame_loop::{FrameLoop, FrameScheduler};
use crate::surface::Surface;
use crate::utils::Timer;
use log::{debug, log_enabled, warn, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::{Rc, Weak};
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

type CanvasLoop = FrameLoop<StdRng, CanvasSurface, RafScheduler>;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| EngineError::Js(format!("{:?}", e)))?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn display_size(&self) -> (u32, u32) {
        display_size(&self.canvas)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
        glow: f64,
    ) {
        let css = color.to_css();
        let ctx = &self.context;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style(&JsValue::from_str(&css));
        ctx.set_shadow_blur(glow);
        ctx.set_shadow_color(&css);
        ctx.begin_path();
        if ctx.arc(center[0], center[1], radius, 0.0, PI * 2.0).is_ok() {
            ctx.fill();
        }
        ctx.restore();
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(from[0], from[1]);
        ctx.line_to(to[0], to[1]);
        ctx.stroke();
        ctx.restore();
    }
}

fn display_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    (
        canvas.offset_width().max(0) as u32,
        canvas.offset_height().max(0) as u32,
    )
}

pub struct RafScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        RafScheduler {
            window,
            callback: None,
        }
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Decorative particle background bound to a canvas element.
#[wasm_bindgen]
pub struct ParticleCanvas {
    canvas: HtmlCanvasElement,
    config: EngineConfig,
    frame_loop: Option<Rc<RefCell<CanvasLoop>>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParticleCanvas {
    /// `colors` is an optional array of CSS hex strings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        particle_count: Option<u32>,
        colors: Option<js_sys::Array>,
    ) -> Result<ParticleCanvas, JsValue> {
        let mut config = EngineConfig::default();
        if let Some(count) = particle_count {
            config = config.with_particle_count(count as usize);
        }
        if let Some(colors) = colors {
            let hex = colors
                .iter()
                .map(|c| c.as_string().ok_or_else(|| EngineError::InvalidColor(format!("{:?}", c))))
                .collect::<Result<Vec<String>, EngineError>>()?;
            config = config.with_hex_palette(hex)?;
        }
        config.validate()?;
        Ok(ParticleCanvas {
            canvas,
            config,
            frame_loop: None,
            resize_listener: None,
        })
    }

    /// Starts the animation. Does nothing when already running or when the
    /// canvas has no 2d context.
    pub fn start(&mut self) {
        if self.frame_loop.is_some() {
            return;
        }
        let frame_loop = match self.build_loop() {
            Ok(frame_loop) => frame_loop,
            Err(e) => {
                debug!("particle background disabled: {}", e);
                return;
            }
        };

        let weak = Rc::downgrade(&frame_loop);
        frame_loop
            .borrow_mut()
            .scheduler_mut()
            .set_callback(Closure::wrap(Box::new(move || {
                with_loop(&weak, |frame_loop| {
                    let _timer =
                        log_enabled!(Level::Trace).then(|| Timer::new("ParticleCanvas frame"));
                    frame_loop.on_frame();
                })
            }) as Box<dyn FnMut()>));

        self.listen_for_resize(&frame_loop);
        frame_loop.borrow_mut().start();
        self.frame_loop = Some(frame_loop);
    }

    /// Stops the animation and detaches from the window. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.borrow_mut().stop();
        }
        if let Some(listener) = self.resize_listener.take() {
            if let Some(window) = web_sys::window() {
                let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
                if let Err(e) = window.remove_event_listener_with_callback("resize", callback) {
                    warn!("removing resize listener failed: {:?}", e);
                }
            }
        }
    }

    /// Matches the canvas drawing size to its display size.
    pub fn resize(&mut self) {
        match &self.frame_loop {
            Some(frame_loop) => frame_loop.borrow_mut().resize(),
            None => {
                let (width, height) = display_size(&self.canvas);
                self.canvas.set_width(width);
                self.canvas.set_height(height);
            }
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.frame_loop
            .as_ref()
            .map_or(false, |frame_loop| frame_loop.borrow().is_running())
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.config.particle_count as u32
    }
}

impl ParticleCanvas {
    fn build_loop(&self) -> Result<Rc<RefCell<CanvasLoop>>, EngineError> {
        let window = web_sys::window().ok_or_else(|| EngineError::Js("no window".into()))?;
        let surface = CanvasSurface::new(self.canvas.clone())?;
        let rng = StdRng::from_entropy();
        let engine = ParticleEngine::new(self.config.clone(), rng)?;
        Ok(Rc::new(RefCell::new(FrameLoop::new(
            engine,
            surface,
            RafScheduler::new(window),
        ))))
    }

    fn listen_for_resize(&mut self, frame_loop: &Rc<RefCell<CanvasLoop>>) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let weak = Rc::downgrade(frame_loop);
        let listener = Closure::wrap(Box::new(move || {
            with_loop(&weak, |frame_loop| frame_loop.resize())
        }) as Box<dyn FnMut()>);
        if window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.resize_listener = Some(listener);
        }
    }
}

impl Drop for ParticleCanvas {
    fn drop(&mut self) {
        self.stop();
    }
}

// Callbacks hold a weak reference; a dropped or busy loop is skipped.
fn with_loop<F: FnOnce(&mut CanvasLoop)>(weak: &Weak<RefCell<CanvasLoop>>, f: F) {
    if let Some(frame_loop) = weak.upgrade() {
        if let Ok(mut frame_loop) = frame_loop.try_borrow_mut() {
            f(&mut frame_loop);
        }
    }
}
