use crate::foundation::core::Point;
use crate::input::InputEvent;
use crate::scene::pointer::PointerState;

/// Folds pointer and touch events into a single [`PointerState`]. The latest event wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Apply `event`. Returns `true` if it was a pointer or touch event.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerMove { x, y } => self.move_to(Point::new(*x, *y)),
            InputEvent::TouchMove { touches } => {
                if let Some(first) = touches.first() {
                    self.move_to(*first);
                }
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => self.state.active = false,
            InputEvent::Resize { .. } | InputEvent::PanelMoved(_) => return false,
        }
        true
    }

    fn move_to(&mut self, p: Point) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            tracing::trace!(x = p.x, y = p.y, "ignoring non-finite pointer sample");
            return;
        }
        self.state = PointerState::active_at(p);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
