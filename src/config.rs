// Engine configuration. The defaults reproduce the portfolio background:
// 25 particles in the three site colors, slow drift, fading out over a few seconds.

use crate::color::Color;
use crate::error::{EngineError, EngineResult};
use std::ops::Range;

/// Sampling ranges used when a particle is created or recycled.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRanges {
    /// Per-axis velocity, in surface units per tick
    pub velocity: Range<f64>,
    /// Circle radius
    pub size: Range<f64>,
    /// Opacity at age 0
    pub base_opacity: Range<f64>,
    /// Lifetime in ticks
    pub lifetime: Range<u32>,
}

impl Default for ParticleRanges {
    fn default() -> Self {
        ParticleRanges {
            velocity: -0.25..0.25,
            size: 1.0..4.0,
            base_opacity: 0.2..0.7,
            lifetime: 200..500,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub particle_count: usize,
    pub palette: Vec<Color>,
    pub ranges: ParticleRanges,
    /// Pairs closer than this are joined by a line
    pub link_distance: f64,
}

impl EngineConfig {
    pub const DEFAULT_PARTICLE_COUNT: usize = 25;
    pub const DEFAULT_LINK_DISTANCE: f64 = 80.0;
    pub const LINK_MAX_OPACITY: f64 = 0.15;
    pub const LINK_WIDTH: f64 = 0.5;
    pub const GLOW_BLUR: f64 = 10.0;

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_ranges(mut self, ranges: ParticleRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Parses a palette of CSS hex strings such as `"#00F5D4"`.
    pub fn with_hex_palette<I, S>(self, colors: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let palette = colors
            .into_iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(self.with_palette(palette))
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.particle_count == 0 {
            return Err(EngineError::NoParticles);
        }
        if self.palette.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        let ranges = &self.ranges;
        if !(ranges.velocity.start < ranges.velocity.end) {
            return Err(EngineError::EmptyRange("velocity"));
        }
        if !(ranges.size.start < ranges.size.end) || ranges.size.start <= 0.0 {
            return Err(EngineError::EmptyRange("size"));
        }
        if !(ranges.base_opacity.start < ranges.base_opacity.end)
            || ranges.base_opacity.start < 0.0
            || ranges.base_opacity.end > 1.0
        {
            return Err(EngineError::EmptyRange("base_opacity"));
        }
        if ranges.lifetime.start >= ranges.lifetime.end || ranges.lifetime.start == 0 {
            return Err(EngineError::EmptyRange("lifetime"));
        }
        if !(self.link_distance > 0.0) {
            return Err(EngineError::EmptyRange("link_distance"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            particle_count: EngineConfig::DEFAULT_PARTICLE_COUNT,
            palette: Color::default_palette(),
            ranges: ParticleRanges::default(),
            link_distance: EngineConfig::DEFAULT_LINK_DISTANCE,
        }
    }
}
