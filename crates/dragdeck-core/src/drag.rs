//! Pointer drag sessions: press, move past an activation distance, release.

use crate::kanban::MoveInstruction;
use kurbo::{Point, Vec2};

/// Pointer travel (in pixels) before a press turns into a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

/// State of one in-progress drag gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    active_id: String,
    /// Pointer position at press.
    start_point: Point,
    /// Latest pointer position.
    current_point: Point,
    activation_distance: f64,
    activated: bool,
}

/// Outcome of a completed drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    /// The dragged entity.
    pub active_id: String,
    /// What it was released over, if anything.
    pub over_id: Option<String>,
    /// Total pointer travel.
    pub delta: Vec2,
}

impl DragEnd {
    /// The move to hand to the board engine; `None` when dropped over nothing.
    pub fn move_instruction(&self) -> Option<MoveInstruction> {
        self.over_id
            .as_ref()
            .map(|over_id| MoveInstruction::new(self.active_id.clone(), over_id.clone()))
    }
}

impl DragSession {
    /// Start tracking a press on `active_id` at `pointer`.
    pub fn begin(active_id: impl Into<String>, pointer: Point, activation_distance: f64) -> Self {
        Self {
            active_id: active_id.into(),
            start_point: pointer,
            current_point: pointer,
            activation_distance: activation_distance.max(0.0),
            activated: activation_distance <= 0.0,
        }
    }

    /// The pressed entity.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Whether the press has become a drag.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Record a pointer move. Returns `true` on the move that activates the drag.
    pub fn update(&mut self, pointer: Point) -> bool {
        self.current_point = pointer;
        if self.activated {
            return false;
        }
        if self.delta().hypot() >= self.activation_distance {
            self.activated = true;
            log::debug!("Drag of {} activated", self.active_id);
            return true;
        }
        false
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Release over `over_id`. A press that never activated is a click and
    /// produces nothing.
    pub fn finish(self, over_id: Option<&str>) -> Option<DragEnd> {
        if !self.activated {
            log::debug!("Released {} before activation", self.active_id);
            return None;
        }
        Some(DragEnd {
            delta: self.delta(),
            active_id: self.active_id,
            over_id: over_id.map(str::to_string),
        })
    }

    /// Abandon the gesture (e.g. Escape pressed); nothing is committed.
    pub fn cancel(self) {
        log::debug!("Drag of {} cancelled", self.active_id);
    }
}
