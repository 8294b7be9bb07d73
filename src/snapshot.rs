use tracing::{debug, info};

use crate::math::Vector;
use crate::model::PolygonRegistry;
use crate::observer::RegistryObserver;

/// Saved copy of one polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPolygon {
    pub display_name: String,
    pub vertices: Vec<Vector>,
}

/// Deep copy of every polygon's name and vertex positions.
///
/// Owns its data, so later edits to the live registry never reach it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    pub polygons: Vec<SavedPolygon>,
}

impl StateSnapshot {
    /// Copies the registry's polygons in registry order.
    #[must_use]
    pub fn capture<O: RegistryObserver>(registry: &PolygonRegistry<O>) -> Self {
        let polygons = registry
            .polygon_ids()
            .filter_map(|id| {
                let polygon = registry.polygon(id).ok()?;
                Some(SavedPolygon {
                    display_name: polygon.display_name.clone(),
                    vertices: registry.positions(id).ok()?,
                })
            })
            .collect();
        Self { polygons }
    }

    /// Replaces every live polygon with fresh polygons rebuilt from this
    /// snapshot, in saved order, and activates the first one.
    ///
    /// An empty snapshot leaves a single new empty polygon so the registry
    /// never ends up without one.
    pub fn restore<O: RegistryObserver>(&self, registry: &mut PolygonRegistry<O>) {
        registry.clear();
        for saved in &self.polygons {
            registry.create_named_polygon(saved.display_name.clone(), &saved.vertices);
        }
        if registry.is_empty() {
            debug!("restored empty snapshot, adding a blank polygon");
            registry.create_polygon(&[]);
        }
    }
}

/// Single save slot: push overwrites, pop restores without consuming.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSlot {
    saved: Option<StateSnapshot>,
}

impl SnapshotSlot {
    #[must_use]
    pub fn saved(&self) -> Option<&StateSnapshot> {
        self.saved.as_ref()
    }

    /// Saves the registry, discarding any earlier snapshot.
    pub fn push<O: RegistryObserver>(&mut self, registry: &PolygonRegistry<O>) {
        let snapshot = StateSnapshot::capture(registry);
        info!(polygons = snapshot.polygons.len(), "pushed state");
        self.saved = Some(snapshot);
    }

    /// Restores the saved snapshot. Returns `false` if nothing was saved.
    pub fn pop<O: RegistryObserver>(&self, registry: &mut PolygonRegistry<O>) -> bool {
        let Some(snapshot) = &self.saved else {
            debug!("pop without a saved state");
            return false;
        };
        snapshot.restore(registry);
        info!(polygons = registry.len(), "popped state");
        true
    }
}
