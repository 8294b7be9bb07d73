mod diagnostics;

pub use diagnostics::{AngleEntry, DiagnosticsReport};

use crate::math::Vector;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BACKGROUND: Color = Color(0x00AA_AAAA);
    pub const ACTIVE_FILL: Color = Color(0x00FF_FFFF);
    pub const ACTIVE_STROKE: Color = Color(0x0000_0000);
    pub const INACTIVE_FILL: Color = Color(0x00CC_CCCC);
    pub const VERTEX_DRAGGED: Color = Color(0x00AA_FFAA);
    pub const VERTEX_HOVERED: Color = Color(0x00FF_9999);
    pub const VERTEX_IDLE: Color = Color(0x0099_9999);
    pub const LABEL: Color = Color(0x0000_0000);

    /// Formats the color as a CSS-style `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// A single drawing instruction for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas.
    Clear { color: Color },
    /// A closed path through `points`, filled and optionally stroked.
    Path {
        points: Vec<Vector>,
        fill: Color,
        stroke: Option<Color>,
    },
    /// A filled vertex circle with a centered text label.
    Marker {
        center: Vector,
        radius: f64,
        fill: Color,
        label: String,
        label_color: Color,
    },
}

/// Draw commands for one rendered frame, in painting order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Returns all marker commands in painting order.
    pub fn markers(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Marker { .. }))
    }

    /// Returns all path commands in painting order.
    pub fn paths(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
    }
}
