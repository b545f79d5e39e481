use crate::foundation::core::Point;

/// Last known pointer location in logical surface coordinates.
///
/// When inactive, `position` keeps the last sample but nothing reacts to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Point,
    pub active: bool,
}

impl PointerState {
    pub fn active_at(position: Point) -> Self {
        Self {
            position,
            active: true,
        }
    }

    /// Position when active.
    pub fn active_position(&self) -> Option<Point> {
        self.active.then_some(self.position)
    }
}
