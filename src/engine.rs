// Particle pool and per-tick update/render. Each tick moves and ages every
// particle, wraps it back onto the surface, replaces the ones whose lifetime
// ran out, then redraws the pool with faint lines between close neighbours.

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::particle::Particle;
use crate::surface::Surface;
use log::{debug, trace};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, pos: [f64; 2]) -> bool {
        pos[0] >= 0.0 && pos[0] < self.width && pos[1] >= 0.0 && pos[1] < self.height
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Running,
}

/// Wraps a coordinate that left `[0, extent)` around to the opposite edge.
pub fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) {
        return 0.0;
    }
    if value >= 0.0 && value < extent {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid of a tiny negative value can round up to `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None` when
/// they are farther apart than `threshold`.
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
    if distance > threshold {
        return None;
    }
    Some(((1.0 - distance / threshold) * EngineConfig::LINK_MAX_OPACITY).max(0.0))
}

pub struct ParticleEngine<R> {
    config: EngineConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    rng: R,
    state: EngineState,
}

impl<R: Rng> ParticleEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> EngineResult<Self> {
        config.validate()?;
        Ok(ParticleEngine {
            particles: Vec::with_capacity(config.particle_count),
            config,
            bounds: Bounds::new(0.0, 0.0),
            rng,
            state: EngineState::Stopped,
        })
    }

    /// Allocates the pool over `bounds` and enters `Running`. No-op when already running.
    pub fn start(&mut self, bounds: Bounds) {
        if self.is_running() {
            return;
        }
        self.bounds = bounds;
        self.particles.clear();
        for _ in 0..self.config.particle_count {
            let particle = self.spawn();
            self.particles.push(particle);
        }
        self.state = EngineState::Running;
        debug!(
            "particle engine started with {} particles on {}x{}",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
    }

    /// Discards the pool and enters `Stopped`. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.particles.clear();
        self.state = EngineState::Stopped;
        debug!("particle engine stopped");
    }

    /// Records new surface bounds. Particles are left where they are and get
    /// wrapped into the new bounds on their next update.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Moves, ages and wraps every particle, then recycles the expired ones.
    pub fn update(&mut self) {
        if !self.is_running() {
            return;
        }
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.advance();
            particle.pos[0] = wrap_coordinate(particle.pos[0], bounds.width);
            particle.pos[1] = wrap_coordinate(particle.pos[1], bounds.height);
        }
        for i in 0..self.particles.len() {
            if self.particles[i].is_expired() {
                trace!("recycling particle {}", i);
                self.particles[i] = self.spawn();
            }
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_running() {
            return;
        }
        surface.clear(self.bounds.width, self.bounds.height);

        for p in &self.particles {
            surface.fill_circle(p.pos, p.size, p.color, p.opacity, EngineConfig::GLOW_BLUR);
        }

        let threshold = self.config.link_distance;
        for (i, p) in self.particles.iter().enumerate() {
            for other in &self.particles[i + 1..] {
                match link_opacity(p.distance_to(other), threshold) {
                    Some(alpha) if alpha > 0.0 => surface.stroke_line(
                        p.pos,
                        other.pos,
                        p.color,
                        alpha,
                        EngineConfig::LINK_WIDTH,
                    ),
                    _ => {}
                }
            }
        }
    }

    /// One update-and-render cycle. Returns whether another tick should be scheduled.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.is_running() {
            return false;
        }
        self.update();
        self.render(surface);
        true
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn spawn(&mut self) -> Particle {
        let mut particle = Particle::spawn(
            &mut self.rng,
            self.bounds.width,
            self.bounds.height,
            &self.config.ranges,
            &self.config.palette,
        );
        particle.pos[0] = wrap_coordinate(particle.pos[0], self.bounds.width);
        particle.pos[1] = wrap_coordinate(particle.pos[1], self.bounds.height);
        particle
    }
}
