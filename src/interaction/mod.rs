mod arbitration;
pub mod gesture;
mod pointer;

pub(crate) use arbitration::arbitrate;
pub use pointer::{MouseButton, PointerState, TouchId, TouchPoint};

use tracing::debug;

use crate::config::{CanvasSize, EditorConfig};
use crate::math::Vector;
use crate::model::{PolygonRegistry, VertexId};
use crate::observer::RegistryObserver;

/// Turns raw mouse and touch events into vertex drags and vertex creation.
///
/// Hover and drag flags themselves are settled once per frame while the
/// registry ticks (see [`PolygonRegistry::tick_frame`]); the router keeps the
/// pointer state that decision reads, moves the vertex holding the pointer,
/// and appends a vertex to the active polygon on a click or tap.
#[derive(Debug, Clone)]
pub struct InteractionRouter {
    pointer: PointerState,
    canvas: CanvasSize,
    click_tolerance: f64,
    over_controls: bool,
}

impl InteractionRouter {
    /// Creates a router with no pointer seen yet, bounded by `config.canvas`.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            pointer: PointerState::default(),
            canvas: config.canvas,
            click_tolerance: config.click_tolerance,
            over_controls: false,
        }
    }

    /// Latest mouse and touch state, read by the per-frame vertex update.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Area in which releases may create vertices.
    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Replaces the canvas bounds after a resize.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    /// While set, releases never create vertices. Toggled as the pointer
    /// enters and leaves UI controls drawn over the canvas.
    pub fn set_pointer_over_controls(&mut self, over: bool) {
        self.over_controls = over;
    }

    /// Whether releases are currently suppressed.
    #[must_use]
    pub fn is_pointer_over_controls(&self) -> bool {
        self.over_controls
    }

    /// Records a button press; the press position is the click origin.
    pub fn mouse_down(&mut self, button: MouseButton, position: Vector) {
        self.pointer.press(button, position);
    }

    /// Tracks the mouse and drags the vertex it holds, if any.
    pub fn mouse_move<O: RegistryObserver>(
        &mut self,
        position: Vector,
        registry: &mut PolygonRegistry<O>,
    ) {
        self.pointer.set_mouse(position);
        let Some(id) = registry.dragged_vertex() else {
            return;
        };
        if let Ok(vertex) = registry.vertex_mut(id) {
            if vertex.is_dragged && vertex.touch.is_none() {
                vertex.position = position;
            }
        }
    }

    /// Releases a button; a primary click inside the canvas appends a vertex
    /// to the active polygon at `position`.
    pub fn mouse_up<O: RegistryObserver>(
        &mut self,
        button: MouseButton,
        position: Vector,
        registry: &mut PolygonRegistry<O>,
    ) -> Option<VertexId> {
        self.pointer.release(button, position);
        if button != MouseButton::Primary {
            return None;
        }
        let down = self.pointer.mouse_down_at()?;
        self.create_on_click(down, position, registry)
    }

    /// Records a new touch; its start position is the tap origin.
    pub fn touch_start(&mut self, id: TouchId, position: Vector) {
        self.pointer.touch_started(id, position);
    }

    /// Tracks a touch and drags the vertex it holds, if any.
    pub fn touch_move<O: RegistryObserver>(
        &mut self,
        id: TouchId,
        position: Vector,
        registry: &mut PolygonRegistry<O>,
    ) {
        self.pointer.touch_moved(id, position);
        let Some(vertex_id) = registry.dragged_vertex() else {
            return;
        };
        if let Ok(vertex) = registry.vertex_mut(vertex_id) {
            if vertex.touch == Some(id) {
                vertex.position = position;
            }
        }
    }

    /// Ends a touch; a tap inside the canvas appends a vertex to the active
    /// polygon at `position`.
    pub fn touch_end<O: RegistryObserver>(
        &mut self,
        id: TouchId,
        position: Vector,
        registry: &mut PolygonRegistry<O>,
    ) -> Option<VertexId> {
        let touch = self.pointer.touch_ended(id)?;
        self.create_on_click(touch.start, position, registry)
    }

    fn create_on_click<O: RegistryObserver>(
        &self,
        down: Vector,
        up: Vector,
        registry: &mut PolygonRegistry<O>,
    ) -> Option<VertexId> {
        if self.over_controls {
            debug!("release over controls ignored");
            return None;
        }
        if !self.canvas.contains(up) {
            debug!(x = up.x, y = up.y, "release outside canvas ignored");
            return None;
        }
        if !gesture::is_click(down, up, self.click_tolerance) {
            return None;
        }
        match registry.add_vertex_to_active(up) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!(%err, "click did not create a vertex");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::Frame;

    fn setup() -> (InteractionRouter, PolygonRegistry) {
        let config = EditorConfig::default().with_name_seed(11);
        (InteractionRouter::new(&config), PolygonRegistry::new(config))
    }

    fn active_len(registry: &PolygonRegistry) -> usize {
        registry.active_polygon().unwrap().len()
    }

    #[test]
    fn click_creates_vertex_at_release() {
        let (mut router, mut registry) = setup();
        router.mouse_down(MouseButton::Primary, Vector::new(100.0, 100.0));
        let id = router
            .mouse_up(MouseButton::Primary, Vector::new(102.0, 103.0), &mut registry)
            .unwrap();
        assert_eq!(active_len(&registry), 1);
        assert_eq!(
            registry.vertex(id).unwrap().position,
            Vector::new(102.0, 103.0)
        );
    }

    #[test]
    fn drag_release_creates_nothing() {
        let (mut router, mut registry) = setup();
        router.mouse_down(MouseButton::Primary, Vector::new(100.0, 100.0));
        let created =
            router.mouse_up(MouseButton::Primary, Vector::new(200.0, 200.0), &mut registry);
        assert!(created.is_none());
        assert_eq!(active_len(&registry), 0);
    }

    #[test]
    fn release_outside_canvas_is_discarded() {
        let (mut router, mut registry) = setup();
        router.set_canvas(CanvasSize::new(50.0, 50.0));
        router.mouse_down(MouseButton::Primary, Vector::new(49.0, 49.0));
        assert!(router
            .mouse_up(MouseButton::Primary, Vector::new(51.0, 49.0), &mut registry)
            .is_none());
        assert!(!router.pointer().is_button_down(MouseButton::Primary));
        assert_eq!(active_len(&registry), 0);
    }

    #[test]
    fn release_over_controls_is_ignored() {
        let (mut router, mut registry) = setup();
        router.set_pointer_over_controls(true);
        router.mouse_down(MouseButton::Primary, Vector::new(10.0, 10.0));
        assert!(router
            .mouse_up(MouseButton::Primary, Vector::new(10.0, 10.0), &mut registry)
            .is_none());
        router.set_pointer_over_controls(false);
        router.mouse_down(MouseButton::Primary, Vector::new(10.0, 10.0));
        assert!(router
            .mouse_up(MouseButton::Primary, Vector::new(10.0, 10.0), &mut registry)
            .is_some());
    }

    #[test]
    fn secondary_click_creates_nothing() {
        let (mut router, mut registry) = setup();
        router.mouse_down(MouseButton::Secondary, Vector::new(10.0, 10.0));
        assert!(router
            .mouse_up(MouseButton::Secondary, Vector::new(10.0, 10.0), &mut registry)
            .is_none());
    }

    #[test]
    fn tap_creates_vertex() {
        let (mut router, mut registry) = setup();
        router.touch_start(TouchId(3), Vector::new(40.0, 40.0));
        router.touch_move(TouchId(3), Vector::new(42.0, 41.0), &mut registry);
        assert!(router
            .touch_end(TouchId(3), Vector::new(42.0, 41.0), &mut registry)
            .is_some());
        assert!(router
            .touch_end(TouchId(3), Vector::new(42.0, 41.0), &mut registry)
            .is_none());
        assert_eq!(active_len(&registry), 1);
    }

    #[test]
    fn mouse_drag_moves_claimed_vertex() {
        let (mut router, mut registry) = setup();
        let v = registry.add_vertex_to_active(Vector::new(10.0, 10.0)).unwrap();
        router.mouse_down(MouseButton::Primary, Vector::new(11.0, 10.0));
        registry.tick_frame(router.pointer(), &mut Frame::new());
        assert_eq!(registry.dragged_vertex(), Some(v));

        router.mouse_move(Vector::new(60.0, 70.0), &mut registry);
        registry.tick_frame(router.pointer(), &mut Frame::new());
        router.mouse_move(Vector::new(80.0, 90.0), &mut registry);
        assert_eq!(registry.vertex(v).unwrap().position, Vector::new(80.0, 90.0));

        let created =
            router.mouse_up(MouseButton::Primary, Vector::new(80.0, 90.0), &mut registry);
        assert!(created.is_none());
        assert_eq!(active_len(&registry), 1);
    }

    #[test]
    fn touch_drag_moves_only_its_vertex() {
        let (mut router, mut registry) = setup();
        let held = registry.add_vertex_to_active(Vector::new(10.0, 10.0)).unwrap();
        let other = registry.add_vertex_to_active(Vector::new(200.0, 200.0)).unwrap();
        router.touch_start(TouchId(1), Vector::new(12.0, 12.0));
        registry.tick_frame(router.pointer(), &mut Frame::new());
        assert_eq!(registry.vertex(held).unwrap().touch, Some(TouchId(1)));

        router.touch_move(TouchId(2), Vector::new(300.0, 300.0), &mut registry);
        router.touch_move(TouchId(1), Vector::new(50.0, 60.0), &mut registry);
        assert_eq!(registry.vertex(held).unwrap().position, Vector::new(50.0, 60.0));
        assert_eq!(
            registry.vertex(other).unwrap().position,
            Vector::new(200.0, 200.0)
        );
    }

    #[test]
    fn at_most_one_vertex_dragged_by_mouse() {
        let (mut router, mut registry) = setup();
        let active = registry.active_id().unwrap();
        registry.add_vertex(active, Vector::new(10.0, 10.0)).unwrap();
        registry.add_vertex(active, Vector::new(13.0, 10.0)).unwrap();
        registry.add_vertex(active, Vector::new(11.0, 13.0)).unwrap();
        router.mouse_down(MouseButton::Primary, Vector::new(11.0, 11.0));
        for _ in 0..4 {
            registry.tick_frame(router.pointer(), &mut Frame::new());
            let ids = registry.polygon(active).unwrap().vertices.clone();
            let dragged = ids
                .iter()
                .filter(|v| registry.vertex(**v).unwrap().is_dragged)
                .count();
            assert_eq!(dragged, 1);
            assert_eq!(registry.dragged_vertex(), Some(ids[0]));
        }
    }
}
