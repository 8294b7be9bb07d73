use super::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a polygon in the polygon registry.
    pub struct PolygonId;
}

/// A closed polygon: an ordered list of vertices plus display metadata.
///
/// Edges connect consecutive vertices, wrapping from the last to the first.
#[derive(Debug, Clone)]
pub struct PolygonData {
    pub display_name: String,
    /// Vertices in insertion order, which is also drawing order.
    pub vertices: Vec<VertexId>,
    /// Vertex count shown by the last label written out.
    last_rendered_vertex_count: Option<usize>,
}

impl PolygonData {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            vertices: Vec::new(),
            last_rendered_vertex_count: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Label text of the form `"<name> (<vertex count>)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.vertices.len())
    }

    /// Returns the new label if the vertex count changed since the last one
    /// was written out, and records it as written.
    pub fn take_label_update(&mut self) -> Option<String> {
        if self.last_rendered_vertex_count == Some(self.vertices.len()) {
            return None;
        }
        Some(self.mark_label_rendered())
    }

    /// Records the current label as written out and returns it.
    pub fn mark_label_rendered(&mut self) -> String {
        self.last_rendered_vertex_count = Some(self.vertices.len());
        self.label()
    }
}
