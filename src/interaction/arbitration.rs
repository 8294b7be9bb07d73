use tracing::trace;

use super::{MouseButton, PointerState};
use crate::config::EditorConfig;
use crate::model::{VertexData, VertexId};

/// Recomputes one vertex's hover and drag flags for this frame.
///
/// Only one vertex system-wide may hold `claim`. Vertices are evaluated in
/// registry order, so when hit circles overlap the first one evaluated claims
/// the pointer and keeps it until it is neither hovered nor dragged. A vertex
/// that is skipped, because its polygon is not active or another vertex holds
/// the claim, is reset to idle.
pub(crate) fn arbitrate(
    id: VertexId,
    vertex: &mut VertexData,
    polygon_is_active: bool,
    claim: &mut Option<VertexId>,
    pointer: &PointerState,
    config: &EditorConfig,
) {
    let holds_claim = *claim == Some(id);
    if (!polygon_is_active && !holds_claim) || (claim.is_some() && !holds_claim) {
        vertex.release();
        return;
    }

    if vertex.touch.is_some_and(|t| !pointer.has_touch(t)) {
        vertex.touch = None;
    }
    vertex.is_hovered = false;
    vertex.is_dragged = vertex.touch.is_some();

    if pointer
        .mouse()
        .is_some_and(|m| vertex.contains(m, config.mouse_hit_extra))
    {
        vertex.is_hovered = true;
    }

    if let Some((touch, _)) = pointer
        .touches()
        .find(|(_, t)| vertex.contains(t.position, config.touch_hit_extra))
    {
        vertex.is_dragged = true;
        vertex.touch = Some(touch);
    }

    if vertex.is_hovered && pointer.is_button_down(MouseButton::Primary) {
        vertex.is_dragged = true;
    }

    if vertex.is_hovered || vertex.is_dragged {
        if !holds_claim {
            trace!(?id, "vertex claimed pointer");
        }
        *claim = Some(id);
    } else if holds_claim {
        trace!(?id, "vertex released pointer");
        *claim = None;
    }
}
