pub mod polygon;
pub mod vertex;

pub use polygon::{PolygonData, PolygonId};
pub use vertex::{VertexData, VertexId, VertexState};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::config::EditorConfig;
use crate::error::RegistryError;
use crate::interaction::{self, PointerState};
use crate::math::Vector;
use crate::names::NamePool;
use crate::observer::{NullObserver, RegistryObserver};
use crate::render::{Color, DiagnosticsReport, DrawCommand, Frame};

/// Arena that owns every polygon and vertex, and tracks which polygon is
/// active and which vertex holds the pointer claim.
///
/// Polygons exclusively own their vertices; removing a polygon drops them.
/// Whenever the registry is non-empty the active id names a live polygon.
#[derive(Debug)]
pub struct PolygonRegistry<O = NullObserver> {
    polygons: SlotMap<PolygonId, PolygonData>,
    vertices: SlotMap<VertexId, VertexData>,
    active: Option<PolygonId>,
    dragged_vertex: Option<VertexId>,
    names: NamePool,
    config: EditorConfig,
    observer: O,
}

impl PolygonRegistry<NullObserver> {
    /// Creates a registry holding one empty, active polygon.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: RegistryObserver> PolygonRegistry<O> {
    /// Creates a registry holding one empty, active polygon, reporting
    /// changes to `observer`.
    pub fn with_observer(config: EditorConfig, observer: O) -> Self {
        let mut registry = Self {
            polygons: SlotMap::with_key(),
            vertices: SlotMap::with_key(),
            active: None,
            dragged_vertex: None,
            names: NamePool::new(config.name_seed),
            config,
            observer,
        };
        registry.create_polygon(&[]);
        registry
    }

    /// Hit radii and convexity rule used while ticking.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The observer receiving polygon events.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Number of polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Only true between [`PolygonRegistry::clear`] and the next create.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Polygon ids in registry iteration order.
    pub fn polygon_ids(&self) -> impl Iterator<Item = PolygonId> + '_ {
        self.polygons.keys()
    }

    /// Returns the polygon data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown id.
    pub fn polygon(&self, id: PolygonId) -> Result<&PolygonData, RegistryError> {
        self.polygons.get(id).ok_or(RegistryError::PolygonNotFound)
    }

    /// Returns the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::VertexNotFound` for an unknown id.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, RegistryError> {
        self.vertices.get(id).ok_or(RegistryError::VertexNotFound)
    }

    /// Returns mutable vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::VertexNotFound` for an unknown id.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, RegistryError> {
        self.vertices.get_mut(id).ok_or(RegistryError::VertexNotFound)
    }

    /// Id of the polygon receiving new vertices.
    #[must_use]
    pub fn active_id(&self) -> Option<PolygonId> {
        self.active
    }

    /// The polygon receiving new vertices.
    #[must_use]
    pub fn active_polygon(&self) -> Option<&PolygonData> {
        self.active.and_then(|id| self.polygons.get(id))
    }

    /// The vertex currently claiming the pointer, if any.
    #[must_use]
    pub fn dragged_vertex(&self) -> Option<VertexId> {
        self.dragged_vertex
    }

    /// Vertex positions of a polygon in order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown id.
    pub fn positions(&self, id: PolygonId) -> Result<Vec<Vector>, RegistryError> {
        let polygon = self.polygon(id)?;
        Ok(polygon
            .vertices
            .iter()
            .filter_map(|v| self.vertices.get(*v).map(|v| v.position))
            .collect())
    }

    /// Creates a polygon with a random display name and the given vertices.
    ///
    /// The first polygon in an empty registry becomes active.
    pub fn create_polygon(&mut self, initial: &[Vector]) -> PolygonId {
        let name = self.names.draw();
        self.create_named_polygon(name, initial)
    }

    /// Creates a polygon with an explicit display name.
    pub fn create_named_polygon(
        &mut self,
        name: impl Into<String>,
        initial: &[Vector],
    ) -> PolygonId {
        let id = self.polygons.insert(PolygonData::new(name));
        for &position in initial {
            let vertex = self
                .vertices
                .insert(VertexData::new(position, self.config.vertex_radius, id));
            self.polygons[id].vertices.push(vertex);
        }
        let label = self.polygons[id].mark_label_rendered();
        debug!(?id, %label, "created polygon");
        self.observer.on_polygon_created(id, &label);
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Appends a vertex to a polygon.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown polygon.
    pub fn add_vertex(
        &mut self,
        polygon: PolygonId,
        position: Vector,
    ) -> Result<VertexId, RegistryError> {
        if !self.polygons.contains_key(polygon) {
            return Err(RegistryError::PolygonNotFound);
        }
        let vertex = self
            .vertices
            .insert(VertexData::new(position, self.config.vertex_radius, polygon));
        self.polygons[polygon].vertices.push(vertex);
        trace!(?polygon, ?vertex, x = position.x, y = position.y, "added vertex");
        Ok(vertex)
    }

    /// Appends a vertex to the active polygon.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` if there is no active polygon.
    pub fn add_vertex_to_active(&mut self, position: Vector) -> Result<VertexId, RegistryError> {
        let active = self.active.ok_or(RegistryError::PolygonNotFound)?;
        self.add_vertex(active, position)
    }

    /// Moves a vertex.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::VertexNotFound` for an unknown vertex.
    pub fn move_vertex(&mut self, id: VertexId, position: Vector) -> Result<(), RegistryError> {
        self.vertex_mut(id)?.position = position;
        Ok(())
    }

    /// Removes the active polygon and activates the first remaining one.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotActive` if `id` is not the active polygon and
    /// `RegistryError::LastPolygon` if it is the only one left.
    pub fn remove_polygon(&mut self, id: PolygonId) -> Result<(), RegistryError> {
        if self.active != Some(id) {
            return Err(RegistryError::NotActive);
        }
        if self.polygons.len() <= 1 {
            return Err(RegistryError::LastPolygon);
        }
        self.destroy_polygon(id);
        self.active = self.polygons.keys().next();
        Ok(())
    }

    /// Makes `id` the active polygon.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown id.
    pub fn set_active(&mut self, id: PolygonId) -> Result<(), RegistryError> {
        if !self.polygons.contains_key(id) {
            return Err(RegistryError::PolygonNotFound);
        }
        self.active = Some(id);
        Ok(())
    }

    /// Renames a polygon and republishes its label.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown id.
    pub fn rename_polygon(
        &mut self,
        id: PolygonId,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let polygon = self
            .polygons
            .get_mut(id)
            .ok_or(RegistryError::PolygonNotFound)?;
        polygon.display_name = name.into();
        let label = polygon.mark_label_rendered();
        self.observer.on_polygon_renamed(id, &label);
        Ok(())
    }

    /// Destroys every polygon, leaving the registry empty with no active id.
    pub fn clear(&mut self) {
        let ids: Vec<_> = self.polygons.keys().collect();
        for id in ids {
            self.destroy_polygon(id);
        }
        self.active = None;
        self.dragged_vertex = None;
    }

    fn destroy_polygon(&mut self, id: PolygonId) {
        let Some(polygon) = self.polygons.remove(id) else {
            return;
        };
        for vertex in polygon.vertices {
            self.vertices.remove(vertex);
            if self.dragged_vertex == Some(vertex) {
                self.dragged_vertex = None;
            }
        }
        debug!(?id, name = %polygon.display_name, "destroyed polygon");
        self.observer.on_polygon_removed(id);
    }

    /// Runs one frame for a polygon: publishes its label if the vertex count
    /// changed, draws its outline, updates and draws its vertices, and
    /// returns its angle diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolygonNotFound` for an unknown id.
    pub fn tick_polygon(
        &mut self,
        id: PolygonId,
        is_active: bool,
        pointer: &PointerState,
        frame: &mut Frame,
    ) -> Result<DiagnosticsReport, RegistryError> {
        let polygon = self
            .polygons
            .get_mut(id)
            .ok_or(RegistryError::PolygonNotFound)?;
        if let Some(label) = polygon.take_label_update() {
            self.observer.on_polygon_renamed(id, &label);
        }
        let polygon_is_current = self.active == Some(id);
        let vertex_ids = polygon.vertices.clone();

        let points = self.positions(id)?;
        if points.len() > 1 {
            let (fill, stroke) = if is_active {
                (Color::ACTIVE_FILL, Some(Color::ACTIVE_STROKE))
            } else {
                (Color::INACTIVE_FILL, None)
            };
            frame.push(DrawCommand::Path {
                points: points.clone(),
                fill,
                stroke,
            });
        }

        for (index, vertex_id) in vertex_ids.into_iter().enumerate() {
            let Some(vertex) = self.vertices.get_mut(vertex_id) else {
                continue;
            };
            interaction::arbitrate(
                vertex_id,
                vertex,
                polygon_is_current,
                &mut self.dragged_vertex,
                pointer,
                &self.config,
            );
            vertex.render(index, frame);
        }

        Ok(DiagnosticsReport::compute(
            &points,
            self.config.convexity_rule,
        ))
    }

    /// Ticks every inactive polygon.
    pub fn tick_all(&mut self, pointer: &PointerState, frame: &mut Frame) {
        let ids: Vec<_> = self
            .polygons
            .keys()
            .filter(|id| Some(*id) != self.active)
            .collect();
        for id in ids {
            let _ = self.tick_polygon(id, false, pointer, frame);
        }
    }

    /// Ticks all inactive polygons, then the active one so it paints on top.
    ///
    /// Returns the active polygon's diagnostics.
    pub fn tick_frame(
        &mut self,
        pointer: &PointerState,
        frame: &mut Frame,
    ) -> Option<DiagnosticsReport> {
        self.tick_all(pointer, frame);
        let active = self.active?;
        self.tick_polygon(active, true, pointer, frame).ok()
    }
}
