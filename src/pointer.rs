/*
 * Pointer Module
 *
 * Last known pointer position in surface space, or its absence once the
 * pointer has left the window.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Absent,
    Present(Vec2),
}

impl PointerState {
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerState::Present(position) => Some(position),
            PointerState::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, PointerState::Present(_))
    }
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moved(&mut self, position: Vec2) {
        self.state = PointerState::Present(position);
    }

    pub fn left(&mut self) {
        self.state = PointerState::Absent;
    }

    pub fn state(&self) -> PointerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.state(), PointerState::Absent);
        assert_eq!(tracker.state().position(), None);
    }

    #[test]
    fn move_then_leave() {
        let mut tracker = PointerTracker::new();
        tracker.moved(vec2(100.0, 100.0));
        assert_eq!(tracker.state(), PointerState::Present(vec2(100.0, 100.0)));
        assert!(tracker.state().is_present());

        // Latest move wins
        tracker.moved(vec2(5.0, 7.5));
        assert_eq!(tracker.state().position(), Some(vec2(5.0, 7.5)));

        tracker.left();
        assert!(!tracker.state().is_present());
    }
}
