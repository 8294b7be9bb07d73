use std::time::Instant;

use tracing::debug;

use crate::config::{CanvasSize, EditorConfig};
use crate::error::{RegistryError, Result};
use crate::interaction::{InteractionRouter, MouseButton, TouchId};
use crate::math::Vector;
use crate::model::{PolygonId, PolygonRegistry, VertexId};
use crate::observer::{NullObserver, RegistryObserver};
use crate::render::{Color, DiagnosticsReport, DrawCommand, Frame};
use crate::schedule::{FrameClock, ResizeDebouncer};
use crate::snapshot::SnapshotSlot;

/// The interactive polygon editor: registry, pointer routing, the save slot
/// and frame pacing behind one command surface.
///
/// Commands never fail loudly. Rejected commands (removing the last polygon,
/// unknown ids, popping with nothing saved) are logged and ignored, and
/// report `false`.
#[derive(Debug)]
pub struct Editor<O = NullObserver> {
    registry: PolygonRegistry<O>,
    router: InteractionRouter,
    snapshots: SnapshotSlot,
    diagnostics: Option<DiagnosticsReport>,
    clock: FrameClock,
    resize: ResizeDebouncer,
    simulation_ticks: u64,
}

impl Editor<NullObserver> {
    /// Creates an editor with one empty, active polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: RegistryObserver> Editor<O> {
    /// Creates an editor reporting registry changes to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_observer(config: EditorConfig, observer: O) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            router: InteractionRouter::new(&config),
            clock: FrameClock::new(
                config.render_rate_hz,
                config.simulation_rate_hz,
                Instant::now(),
            ),
            resize: ResizeDebouncer::new(config.resize_debounce),
            registry: PolygonRegistry::with_observer(config, observer),
            snapshots: SnapshotSlot::default(),
            diagnostics: None,
            simulation_ticks: 0,
        })
    }

    /// The polygons being edited.
    #[must_use]
    pub fn registry(&self) -> &PolygonRegistry<O> {
        &self.registry
    }

    /// Pointer state, canvas bounds and the control-overlay flag.
    #[must_use]
    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    /// The observer receiving polygon created/removed/renamed events.
    pub fn observer_mut(&mut self) -> &mut O {
        self.registry.observer_mut()
    }

    /// Diagnostics of the active polygon from the last rendered frame.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&DiagnosticsReport> {
        self.diagnostics.as_ref()
    }

    /// Returns `true` once a state has been pushed.
    #[must_use]
    pub fn has_saved_state(&self) -> bool {
        self.snapshots.saved().is_some()
    }

    /// Simulation ticks run by [`Editor::poll`] so far.
    #[must_use]
    pub fn simulation_ticks(&self) -> u64 {
        self.simulation_ticks
    }

    // --- Pointer input ---

    /// Records a button press at `position`.
    pub fn mouse_down(&mut self, button: MouseButton, position: Vector) {
        self.router.mouse_down(button, position);
    }

    /// Moves the mouse, dragging the vertex it holds.
    pub fn mouse_move(&mut self, position: Vector) {
        self.router.mouse_move(position, &mut self.registry);
    }

    /// Releases a button. Returns the vertex a primary click created, if any.
    pub fn mouse_up(&mut self, button: MouseButton, position: Vector) -> Option<VertexId> {
        self.router.mouse_up(button, position, &mut self.registry)
    }

    /// Records a new touch.
    pub fn touch_start(&mut self, id: TouchId, position: Vector) {
        self.router.touch_start(id, position);
    }

    /// Moves a touch, dragging the vertex it holds.
    pub fn touch_move(&mut self, id: TouchId, position: Vector) {
        self.router.touch_move(id, position, &mut self.registry);
    }

    /// Ends a touch. Returns the vertex a tap created, if any.
    pub fn touch_end(&mut self, id: TouchId, position: Vector) -> Option<VertexId> {
        self.router.touch_end(id, position, &mut self.registry)
    }

    /// Suppresses vertex creation while the pointer is over UI controls.
    pub fn set_pointer_over_controls(&mut self, over: bool) {
        self.router.set_pointer_over_controls(over);
    }

    // --- Commands ---

    /// Adds an empty polygon; the active polygon does not change.
    pub fn new_polygon(&mut self) -> PolygonId {
        self.registry.create_polygon(&[])
    }

    /// Removes the active polygon unless it is the last one.
    pub fn remove_active_polygon(&mut self) -> bool {
        let Some(active) = self.registry.active_id() else {
            return false;
        };
        absorb(self.registry.remove_polygon(active), "remove polygon")
    }

    /// Makes `id` the active polygon; `false` for an unknown id.
    pub fn set_active_polygon(&mut self, id: PolygonId) -> bool {
        absorb(self.registry.set_active(id), "set active polygon")
    }

    /// Renames a polygon and republishes its label; `false` for an unknown id.
    pub fn rename_polygon(&mut self, id: PolygonId, name: &str) -> bool {
        absorb(self.registry.rename_polygon(id, name), "rename polygon")
    }

    /// Saves every polygon, replacing the previous save.
    pub fn push_state(&mut self) {
        self.snapshots.push(&self.registry);
    }

    /// Restores the last save; `false` if there is none.
    pub fn pop_state(&mut self) -> bool {
        self.snapshots.pop(&mut self.registry)
    }

    // --- Frames ---

    /// Schedules a canvas resize; applied once resizing goes quiet.
    pub fn resize(&mut self, size: CanvasSize, now: Instant) {
        self.resize.notify(size, now);
    }

    /// Paints the background, every inactive polygon, then the active one.
    pub fn render_frame(&mut self) -> Frame {
        let mut frame = Frame::new();
        frame.push(DrawCommand::Clear {
            color: Color::BACKGROUND,
        });
        self.diagnostics = self.registry.tick_frame(self.router.pointer(), &mut frame);
        frame
    }

    /// Runs whatever is due at `now`. Returns the frame if one was rendered.
    pub fn poll(&mut self, now: Instant) -> Option<Frame> {
        let due = self.clock.poll(now);
        if due.simulate {
            self.simulation_ticks += 1;
        }
        if !due.render {
            return None;
        }
        let frame = self.render_frame();
        if let Some(size) = self.resize.poll(now) {
            debug!(width = size.width, height = size.height, "canvas resized");
            self.router.set_canvas(size);
        }
        Some(frame)
    }
}

/// Logs a rejected command and reports whether it took effect.
fn absorb(result: std::result::Result<(), RegistryError>, command: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(command, %err, "command ignored");
            false
        }
    }
}
