// Drives a ParticleEngine from the host's display-refresh callback

use crate::engine::{Bounds, ParticleEngine};
use crate::surface::Surface;
use log::debug;
use rand::Rng;

/// Host primitive that invokes the loop's frame callback once before the next repaint.
pub trait FrameScheduler {
    type Handle;

    /// Requests one more frame. `None` means the host refused and the loop ends.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct FrameLoop<R, S, F: FrameScheduler> {
    engine: ParticleEngine<R>,
    surface: S,
    scheduler: F,
    pending: Option<F::Handle>,
}

impl<R, S, F> FrameLoop<R, S, F>
where
    R: Rng,
    S: Surface,
    F: FrameScheduler,
{
    pub fn new(engine: ParticleEngine<R>, surface: S, scheduler: F) -> Self {
        FrameLoop {
            engine,
            surface,
            scheduler,
            pending: None,
        }
    }

    /// Fits the surface to its display size, seeds the pool and runs the first
    /// frame right away. No-op while already running.
    pub fn start(&mut self) {
        if self.engine.is_running() {
            return;
        }
        let bounds = self.fit_surface();
        self.engine.start(bounds);
        self.on_frame();
    }

    /// Frame callback body: one tick, then schedule the next one.
    pub fn on_frame(&mut self) {
        self.pending = None;
        if !self.engine.tick(&mut self.surface) {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            debug!("frame request refused, animation halted");
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.engine.stop();
    }

    pub fn resize(&mut self) {
        let bounds = self.fit_surface();
        self.engine.resize(bounds);
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn engine(&self) -> &ParticleEngine<R> {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    fn fit_surface(&mut self) -> Bounds {
        let (width, height) = self.surface.display_size();
        self.surface.set_size(width, height);
        Bounds::new(width as f64, height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct ManualScheduler {
        next: u32,
        requested: Vec<u32>,
        cancelled: Vec<u32>,
        refuse: bool,
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            self.requested.push(self.next);
            Some(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    fn frame_loop(display: (u32, u32)) -> FrameLoop<StdRng, RecordingSurface, ManualScheduler> {
        let config = EngineConfig::default().with_particle_count(6);
        let engine = ParticleEngine::new(config, StdRng::seed_from_u64(11)).unwrap();
        FrameLoop::new(
            engine,
            RecordingSurface::new(display.0, display.1),
            ManualScheduler::default(),
        )
    }

    #[test]
    fn start_sizes_surface_draws_and_schedules() {
        let mut frames = frame_loop((640, 360));
        frames.start();
        assert!(frames.is_running());
        assert!(frames.is_scheduled());
        assert_eq!((frames.surface().width, frames.surface().height), (640, 360));
        assert_eq!(frames.surface().circles().count(), 6);
        assert_eq!(frames.scheduler().requested, vec![1]);
    }

    #[test]
    fn stop_cancels_pending_frame_and_blocks_late_callbacks() {
        let mut frames = frame_loop((100, 100));
        frames.start();
        frames.on_frame();
        frames.stop();
        assert_eq!(frames.scheduler().cancelled, vec![2]);
        assert!(!frames.is_scheduled());

        let drawn = frames.surface().commands.len();
        frames.on_frame();
        assert_eq!(frames.surface().commands.len(), drawn);

        frames.stop();
        assert_eq!(frames.scheduler().cancelled, vec![2]);
        assert!(!frames.is_running());
    }

    #[test]
    fn resize_follows_display_size() {
        let mut frames = frame_loop((200, 200));
        frames.start();
        frames.surface_mut().set_display_size(80, 40);
        frames.resize();
        assert_eq!((frames.surface().width, frames.surface().height), (80, 40));
        assert_eq!(frames.engine().bounds(), Bounds::new(80.0, 40.0));

        frames.on_frame();
        for p in frames.engine().particles() {
            assert!(frames.engine().bounds().contains(p.pos));
        }
    }

    #[test]
    fn resize_while_stopped_only_touches_surface() {
        let mut frames = frame_loop((200, 200));
        frames.resize();
        assert_eq!((frames.surface().width, frames.surface().height), (200, 200));
        assert!(frames.surface().commands.is_empty());
        assert!(!frames.is_running());
    }

    #[test]
    fn refused_frame_request_ends_the_loop_quietly() {
        let mut frames = frame_loop((50, 50));
        frames.scheduler_mut().refuse = true;
        frames.start();
        assert!(frames.is_running());
        assert!(!frames.is_scheduled());
        frames.stop();
        assert!(frames.scheduler().cancelled.is_empty());
    }
}
