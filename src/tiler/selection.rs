//! Rubber-band rectangle selection driven by pointer events.
//!
//! The UI layer forwards press/move/release events; the selection keeps the
//! drag state and the rectangle drawn so far. Nothing here touches a window
//! or global state, so a session can be replayed from recorded events.

use crate::types::{CellBox, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release { x: i32, y: i32 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RectangleSelection {
    dragging: bool,
    start: Point,
    current_rect: Option<CellBox>,
}

impl RectangleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Rectangle as drawn so far, corners in drag order.
    pub fn current_rect(&self) -> Option<CellBox> {
        self.current_rect
    }

    /// Feed one event. Returns the finished rectangle on release.
    ///
    /// The returned box is normalized so that the drag direction does not
    /// matter. Moves and releases without a preceding press are ignored.
    pub fn handle(&mut self, event: PointerEvent) -> Option<CellBox> {
        match event {
            PointerEvent::Press { x, y } => {
                self.dragging = true;
                self.start = Point::new(x, y);
                self.current_rect = None;
                None
            }
            PointerEvent::Move { x, y } => {
                if self.dragging {
                    self.current_rect = Some(CellBox::new(self.start, Point::new(x, y)));
                }
                None
            }
            PointerEvent::Release { x, y } => {
                if !self.dragging {
                    return None;
                }
                self.dragging = false;
                let rect = CellBox::new(self.start, Point::new(x, y));
                self.current_rect = Some(rect);
                Some(rect.normalized())
            }
        }
    }

    /// Final anchor, available once a drag has been released.
    pub fn anchor(&self) -> Option<CellBox> {
        if self.dragging {
            None
        } else {
            self.current_rect.map(|r| r.normalized())
        }
    }
}
