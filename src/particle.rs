// Particle struct to keep track of individual position, velocity, color and age

use crate::color::Color;
use crate::config::ParticleRanges;
use rand::seq::SliceRandom;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub base_opacity: f64,
    pub opacity: f64,
    pub color: Color,
    pub age: u32,
    pub max_lifetime: u32,
}

impl Particle {
    pub fn new(
        pos: Vector2<f64>,
        vel: Vector2<f64>,
        size: f64,
        base_opacity: f64,
        color: Color,
        max_lifetime: u32,
    ) -> Particle {
        Particle {
            pos,
            vel,
            size,
            base_opacity,
            opacity: base_opacity,
            color,
            age: 0,
            max_lifetime,
        }
    }

    /// Creates a particle at a uniformly random spot of a `width` x `height` surface.
    ///
    /// `ranges` must be non-empty (see `EngineConfig::validate`).
    pub fn spawn<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        ranges: &ParticleRanges,
        palette: &[Color],
    ) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            rng.gen_range(ranges.velocity.start, ranges.velocity.end),
            rng.gen_range(ranges.velocity.start, ranges.velocity.end),
        ];
        let size = rng.gen_range(ranges.size.start, ranges.size.end);
        let base_opacity = rng.gen_range(ranges.base_opacity.start, ranges.base_opacity.end);
        let color = palette.choose(rng).copied().unwrap_or(Color::WHITE);
        let max_lifetime = rng.gen_range(ranges.lifetime.start, ranges.lifetime.end);
        Particle::new(pos, vel, size, base_opacity, color, max_lifetime)
    }

    // Linear fade from base_opacity at birth to zero at max_lifetime
    pub fn opacity_at(base_opacity: f64, age: u32, max_lifetime: u32) -> f64 {
        if max_lifetime == 0 {
            return 0.0;
        }
        (base_opacity * (1.0 - age as f64 / max_lifetime as f64)).max(0.0)
    }

    /// Moves by one tick of velocity and ages by one tick. Does not wrap.
    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.age = self.age.saturating_add(1).min(self.max_lifetime);
        self.opacity = Particle::opacity_at(self.base_opacity, self.age, self.max_lifetime);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_lifetime
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
