use std::collections::{BTreeMap, BTreeSet};

use crate::math::Vector;

/// A mouse button, numbered the way DOM mouse events number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl From<u16> for MouseButton {
    fn from(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Identifier of an active touch, stable for the touch's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TouchId(pub u64);

/// An active touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Where the touch started.
    pub start: Vector,
    /// Where the touch is now.
    pub position: Vector,
}

/// Latest known state of every pointer.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    mouse: Option<Vector>,
    mouse_down_at: Option<Vector>,
    buttons: BTreeSet<MouseButton>,
    touches: BTreeMap<TouchId, TouchPoint>,
}

impl PointerState {
    /// Last mouse position, if the mouse has been seen.
    #[must_use]
    pub fn mouse(&self) -> Option<Vector> {
        self.mouse
    }

    /// Position of the most recent mouse press.
    #[must_use]
    pub fn mouse_down_at(&self) -> Option<Vector> {
        self.mouse_down_at
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// The active touch with this id.
    #[must_use]
    pub fn touch(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.get(&id)
    }

    /// Whether a touch with this id is still down.
    #[must_use]
    pub fn has_touch(&self, id: TouchId) -> bool {
        self.touches.contains_key(&id)
    }

    /// Active touches in ascending id order.
    pub fn touches(&self) -> impl Iterator<Item = (TouchId, &TouchPoint)> {
        self.touches.iter().map(|(id, t)| (*id, t))
    }

    /// Records a mouse move.
    pub fn set_mouse(&mut self, position: Vector) {
        self.mouse = Some(position);
    }

    /// Records a button press and where it happened.
    pub fn press(&mut self, button: MouseButton, position: Vector) {
        self.mouse = Some(position);
        self.mouse_down_at = Some(position);
        self.buttons.insert(button);
    }

    /// Records a button release. The press position is kept for click tests.
    pub fn release(&mut self, button: MouseButton, position: Vector) {
        self.mouse = Some(position);
        self.buttons.remove(&button);
    }

    /// Records a touch; a touch that is already known keeps its start.
    pub fn touch_started(&mut self, id: TouchId, position: Vector) {
        self.touches.entry(id).or_insert(TouchPoint {
            start: position,
            position,
        });
    }

    /// Updates a touch position, registering the touch if it was missed.
    pub fn touch_moved(&mut self, id: TouchId, position: Vector) {
        self.touches
            .entry(id)
            .and_modify(|t| t.position = position)
            .or_insert(TouchPoint {
                start: position,
                position,
            });
    }

    /// Forgets a touch, returning its last state.
    pub fn touch_ended(&mut self, id: TouchId) -> Option<TouchPoint> {
        self.touches.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_numbering() {
        assert_eq!(MouseButton::from(0), MouseButton::Primary);
        assert_eq!(MouseButton::from(2), MouseButton::Secondary);
        assert_eq!(MouseButton::from(4), MouseButton::Other(4));
    }

    #[test]
    fn press_and_release() {
        let mut state = PointerState::default();
        state.press(MouseButton::Primary, Vector::new(1.0, 2.0));
        assert!(state.is_button_down(MouseButton::Primary));
        assert_eq!(state.mouse_down_at(), Some(Vector::new(1.0, 2.0)));
        state.release(MouseButton::Primary, Vector::new(3.0, 4.0));
        assert!(!state.is_button_down(MouseButton::Primary));
        assert_eq!(state.mouse(), Some(Vector::new(3.0, 4.0)));
    }

    #[test]
    fn touch_keeps_start() {
        let mut state = PointerState::default();
        let id = TouchId(9);
        state.touch_started(id, Vector::new(1.0, 1.0));
        state.touch_started(id, Vector::new(8.0, 8.0));
        state.touch_moved(id, Vector::new(5.0, 5.0));
        let t = state.touch(id).copied();
        assert_eq!(
            t,
            Some(TouchPoint {
                start: Vector::new(1.0, 1.0),
                position: Vector::new(5.0, 5.0)
            })
        );
        assert!(state.touch_ended(id).is_some());
        assert!(!state.has_touch(id));
    }
}
