//! Canvas type definitions: ScreenPoint, PointerEvent, DragState.

/// Position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for ScreenPoint {
    type Output = ScreenPoint;

    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Discrete pointer input delivered by the host toolkit.
///
/// `container_origin` is the screen position of the canvas's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        pointer: ScreenPoint,
        container_origin: ScreenPoint,
    },
    Move {
        pointer: ScreenPoint,
        container_origin: ScreenPoint,
    },
    Up,
    /// Pointer left the canvas boundary.
    Leave,
}

/// Drag state machine: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        field_id: String,
        /// Pointer position minus the field's screen origin, captured on drag start.
        offset: ScreenPoint,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn field_id(&self) -> Option<&str> {
        match self {
            DragState::Dragging { field_id, .. } => Some(field_id),
            DragState::Idle => None,
        }
    }
}
