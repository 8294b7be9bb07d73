use crate::model::PolygonId;

/// Receives registry changes that a presentation layer mirrors, such as a
/// polygon selector list.
///
/// All methods default to no-ops.
pub trait RegistryObserver {
    /// A polygon was added; `label` has the form `"<name> (<vertex count>)"`.
    fn on_polygon_created(&mut self, _id: PolygonId, _label: &str) {}

    /// A polygon was destroyed.
    fn on_polygon_removed(&mut self, _id: PolygonId) {}

    /// A polygon's label text changed (rename or vertex count change).
    fn on_polygon_renamed(&mut self, _id: PolygonId, _label: &str) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RegistryObserver for NullObserver {}

/// A recorded registry notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Created { id: PolygonId, label: String },
    Removed { id: PolygonId },
    Renamed { id: PolygonId, label: String },
}

/// Observer that appends every notification to a list.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<RegistryEvent>,
}

impl EventLog {
    /// Takes all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }
}

impl RegistryObserver for EventLog {
    fn on_polygon_created(&mut self, id: PolygonId, label: &str) {
        self.events.push(RegistryEvent::Created {
            id,
            label: label.to_owned(),
        });
    }

    fn on_polygon_removed(&mut self, id: PolygonId) {
        self.events.push(RegistryEvent::Removed { id });
    }

    fn on_polygon_renamed(&mut self, id: PolygonId, label: &str) {
        self.events.push(RegistryEvent::Renamed {
            id,
            label: label.to_owned(),
        });
    }
}
