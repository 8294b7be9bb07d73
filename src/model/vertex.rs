use super::PolygonId;
use crate::interaction::TouchId;
use crate::math::Vector;
use crate::render::{Color, DrawCommand, Frame};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the polygon registry.
    pub struct VertexId;
}

/// Interaction state of a vertex, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    Idle,
    Hovered,
    Dragged,
}

/// A draggable polygon vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub position: Vector,
    /// Marker radius, also the mouse hit radius.
    pub radius: f64,
    pub is_hovered: bool,
    pub is_dragged: bool,
    /// Touch currently holding this vertex, if any.
    pub touch: Option<TouchId>,
    /// Owning polygon; fixed for the vertex's lifetime.
    pub polygon: PolygonId,
}

impl VertexData {
    #[must_use]
    pub fn new(position: Vector, radius: f64, polygon: PolygonId) -> Self {
        Self {
            position,
            radius,
            is_hovered: false,
            is_dragged: false,
            touch: None,
            polygon,
        }
    }

    /// Returns `true` if `p` lies strictly inside the circle of radius
    /// `radius + extra_radius` around the vertex.
    #[must_use]
    pub fn contains(&self, p: Vector, extra_radius: f64) -> bool {
        let dx = self.position.x - p.x;
        let dy = self.position.y - p.y;
        let r = self.radius + extra_radius;
        dx * dx + dy * dy < r * r
    }

    /// Dragged takes priority over hovered.
    #[must_use]
    pub fn state(&self) -> VertexState {
        if self.is_dragged {
            VertexState::Dragged
        } else if self.is_hovered {
            VertexState::Hovered
        } else {
            VertexState::Idle
        }
    }

    /// Clears hover, drag and touch ownership.
    pub fn release(&mut self) {
        self.is_hovered = false;
        self.is_dragged = false;
        self.touch = None;
    }

    /// Draws the vertex marker labelled with its 0-based `index`.
    pub fn render(&self, index: usize, frame: &mut Frame) {
        let fill = match self.state() {
            VertexState::Dragged => Color::VERTEX_DRAGGED,
            VertexState::Hovered => Color::VERTEX_HOVERED,
            VertexState::Idle => Color::VERTEX_IDLE,
        };
        frame.push(DrawCommand::Marker {
            center: self.position,
            radius: self.radius,
            fill,
            label: index.to_string(),
            label_color: Color::LABEL,
        });
    }
}
