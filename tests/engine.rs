use portfolio_particles::{
    Bounds, DrawCommand, EngineConfig, FrameLoop, FrameScheduler, ParticleEngine, RecordingSurface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct CountingScheduler {
    requests: usize,
}

impl FrameScheduler for CountingScheduler {
    type Handle = usize;

    fn request_frame(&mut self) -> Option<usize> {
        self.requests += 1;
        Some(self.requests)
    }

    fn cancel_frame(&mut self, _handle: usize) {}
}

#[test]
fn five_particles_ten_ticks_on_200_square() {
    let config = EngineConfig::default().with_particle_count(5);
    let mut engine = ParticleEngine::new(config, StdRng::seed_from_u64(2024)).unwrap();
    let mut surface = RecordingSurface::new(200, 200);
    engine.start(Bounds::new(200.0, 200.0));

    for _ in 0..10 {
        assert!(engine.tick(&mut surface));
    }

    assert_eq!(engine.particles().len(), 5);
    for p in engine.particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 200.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 200.0);
        assert!(p.age <= p.max_lifetime);
        assert_eq!(p.age, 10);
    }
    assert_eq!(surface.frames, 10);
    assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
    assert_eq!(surface.circles().count(), 5);
}

#[test]
fn frame_loop_runs_until_stopped() {
    let engine = ParticleEngine::new(EngineConfig::default(), StdRng::seed_from_u64(5)).unwrap();
    let mut frames = FrameLoop::new(
        engine,
        RecordingSurface::new(1280, 720),
        CountingScheduler { requests: 0 },
    );
    frames.start();
    for _ in 0..59 {
        frames.on_frame();
    }
    assert_eq!(frames.scheduler().requests, 60);
    assert_eq!(frames.engine().particles().len(), 25);

    frames.stop();
    frames.stop();
    let drawn = frames.surface().commands.len();
    frames.on_frame();
    assert_eq!(frames.surface().commands.len(), drawn);
    assert_eq!(frames.scheduler().requests, 60);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = EngineConfig::default().with_palette(Vec::new());
    assert!(ParticleEngine::new(config, StdRng::seed_from_u64(0)).is_err());
}
