// Drawing surface abstraction: anything that can clear itself, fill a glowing
// circle and stroke a line can host the animation. The browser canvas version
// lives in `web`; RecordingSurface keeps draw calls in memory for headless use.

use crate::color::Color;
use vecmath::Vector2;

pub trait Surface {
    /// Size the surface is displayed at by its container, in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Sets the logical drawing size.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
        glow: f64,
    );

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    );
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
        glow: f64,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    },
}

/// In-memory surface that records the draw calls of the current frame.
///
/// `clear` starts a new frame and drops the previous one, so memory stays
/// bounded however long the animation runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub display_width: u32,
    pub display_height: u32,
    pub width: u32,
    pub height: u32,
    /// Number of clears, i.e. frames drawn
    pub frames: usize,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(display_width: u32, display_height: u32) -> Self {
        RecordingSurface {
            display_width,
            display_height,
            ..RecordingSurface::default()
        }
    }

    /// Simulates the container changing size.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display_width = width;
        self.display_height = height;
    }

    /// Commands issued since the most recent clear.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.frames += 1;
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
        glow: f64,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
            glow,
        });
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            alpha,
            width,
        });
    }
}
